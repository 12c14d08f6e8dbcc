//! Theme constants for the Renju GUI

use egui::Color32;

use crate::Player;

// Board colors
pub const BOARD_BG: Color32 = Color32::from_rgb(238, 238, 238);
pub const CELL_EMPTY: Color32 = Color32::from_rgb(250, 250, 250);
pub const GRID_LINE: Color32 = Color32::from_rgb(150, 150, 155);
pub const LABEL: Color32 = Color32::from_rgb(90, 90, 95);

// Marks: light cell background, saturated glyph
pub const CROSS_CELL: Color32 = Color32::from_rgb(173, 216, 230); // #ADD8E6
pub const CROSS_GLYPH: Color32 = Color32::from_rgb(0, 0, 255);
pub const NOUGHT_CELL: Color32 = Color32::from_rgb(255, 204, 203); // #FFCCCB
pub const NOUGHT_GLYPH: Color32 = Color32::from_rgb(255, 0, 0);

// Markers
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(0, 255, 0);

pub fn hover_cell() -> Color32 {
    Color32::from_rgba_unmultiplied(120, 120, 120, 60)
}

// Panel text
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);

// Sizes
pub const BOARD_MARGIN: f32 = 24.0;
pub const GRID_LINE_WIDTH: f32 = 1.0;
pub const GLYPH_RATIO: f32 = 0.7;

/// Glyph drawn for a player's mark
pub fn glyph(player: Player) -> &'static str {
    match player {
        Player::Cross => "X",
        Player::Nought => "O",
    }
}

pub fn cell_fill(player: Player) -> Color32 {
    match player {
        Player::Cross => CROSS_CELL,
        Player::Nought => NOUGHT_CELL,
    }
}

pub fn glyph_color(player: Player) -> Color32 {
    match player {
        Player::Cross => CROSS_GLYPH,
        Player::Nought => NOUGHT_GLYPH,
    }
}
