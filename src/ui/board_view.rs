//! Board rendering for the Renju GUI

use egui::{CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use crate::{Game, Pos, BOARD_SIZE};

use super::theme::*;

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 32.0,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the activated cell, if any.
    ///
    /// Only empty cells can be activated, and nothing is while `enabled` is
    /// false.
    pub fn show(&mut self, ui: &mut egui::Ui, game: &Game, enabled: bool) -> Option<Pos> {
        let available_size = ui.available_size();

        // Calculate board size to fit available space
        let board_size = (available_size.x.min(available_size.y) - 10.0).max(BOARD_MARGIN * 4.0);
        self.cell_size = (board_size - 2.0 * BOARD_MARGIN) / BOARD_SIZE as f32;

        let (response, painter) = ui.allocate_painter(Vec2::splat(board_size), Sense::click());
        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(4), BOARD_BG);

        self.draw_cells(&painter, game);
        self.draw_grid(&painter);
        self.draw_coordinates(&painter);

        if !enabled {
            return None;
        }

        let board_pos = response.hover_pos().and_then(|p| self.screen_to_board(p))?;
        if !game.board().is_empty(board_pos) {
            return None;
        }

        painter.rect_filled(self.cell_rect(board_pos).shrink(1.0), CornerRadius::same(2), hover_cell());
        response.clicked().then_some(board_pos)
    }

    /// Fill every cell and draw its mark
    fn draw_cells(&self, painter: &Painter, game: &Game) {
        let font = egui::FontId::proportional(self.cell_size * GLYPH_RATIO);

        for (pos, cell) in game.board().iter() {
            let rect = self.cell_rect(pos);
            let Some(player) = cell.owner() else {
                painter.rect_filled(rect, CornerRadius::ZERO, CELL_EMPTY);
                continue;
            };

            let fill = if game.is_winning_cell(pos) {
                WIN_HIGHLIGHT
            } else {
                cell_fill(player)
            };
            painter.rect_filled(rect, CornerRadius::ZERO, fill);
            painter.text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                glyph(player),
                font.clone(),
                glyph_color(player),
            );
        }
    }

    /// Draw the cell borders
    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let span = BOARD_SIZE as f32 * self.cell_size;
        let origin = self.board_rect.min + Vec2::splat(BOARD_MARGIN);

        for i in 0..=BOARD_SIZE {
            let offset = i as f32 * self.cell_size;

            // Vertical line
            painter.line_segment(
                [origin + Vec2::new(offset, 0.0), origin + Vec2::new(offset, span)],
                stroke,
            );

            // Horizontal line
            painter.line_segment(
                [origin + Vec2::new(0.0, offset), origin + Vec2::new(span, offset)],
                stroke,
            );
        }
    }

    /// Draw coordinate labels (A-O across, 1-15 down)
    fn draw_coordinates(&self, painter: &Painter) {
        let font = egui::FontId::proportional(11.0);
        let half = BOARD_MARGIN * 0.5;

        for i in 0..BOARD_SIZE {
            let center = BOARD_MARGIN + (i as f32 + 0.5) * self.cell_size;

            let letter = (b'A' + i as u8) as char;
            let pos = Pos2::new(self.board_rect.min.x + center, self.board_rect.min.y + half);
            painter.text(pos, egui::Align2::CENTER_CENTER, letter, font.clone(), LABEL);

            let pos = Pos2::new(self.board_rect.min.x + half, self.board_rect.min.y + center);
            painter.text(pos, egui::Align2::CENTER_CENTER, i + 1, font.clone(), LABEL);
        }
    }

    /// Screen rectangle of a cell
    fn cell_rect(&self, pos: Pos) -> Rect {
        let min = self.board_rect.min
            + Vec2::new(
                BOARD_MARGIN + pos.col() as f32 * self.cell_size,
                BOARD_MARGIN + pos.row() as f32 * self.cell_size,
            );
        Rect::from_min_size(min, Vec2::splat(self.cell_size))
    }

    /// Convert screen coordinates to board position
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.board_rect.min;
        let col = ((relative.x - BOARD_MARGIN) / self.cell_size).floor() as i32;
        let row = ((relative.y - BOARD_MARGIN) / self.cell_size).floor() as i32;

        Pos::is_valid(row, col).then(|| Pos::new(row as u8, col as u8))
    }
}
