//! Main application for the Renju GUI

use std::path::PathBuf;

use eframe::egui;
use egui::{Align2, CentralPanel, Context, Frame, RichText, TopBottomPanel, Vec2};
use tracing::{debug, info};

use super::board_view::BoardView;
use super::sound::{AssetSoundtrack, SoundCue, Soundtrack};
use super::theme::*;
use crate::{GameSession, HighlightRule, MoveOutcome, PlayerNames};

const RULES_TEXT: &str = "Players take turns placing crosses and noughts on a 15x15 board.\n\
The first to line up five of their marks in a row, column or diagonal wins.\n\
Good luck!";

/// Start-up settings for the app
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub names: PlayerNames,
    pub rule: HighlightRule,
    pub assets: Option<PathBuf>,
    pub skip_intro: bool,
}

/// Welcome dialog with name entry
struct IntroForm {
    cross: String,
    nought: String,
}

/// Modal message shown over the board
enum Announcement {
    Win(String),
    Surrender(String),
}

/// Main Renju application
pub struct RenjuApp {
    session: GameSession,
    board_view: BoardView,
    sound: Box<dyn Soundtrack>,
    intro: Option<IntroForm>,
    announcement: Option<Announcement>,
}

impl RenjuApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        let sound = AssetSoundtrack::new(config.assets.as_deref());
        Self::with_soundtrack(config, Box::new(sound))
    }

    pub fn with_soundtrack(config: AppConfig, mut sound: Box<dyn Soundtrack>) -> Self {
        sound.start_loop(SoundCue::Background);

        let intro = (!config.skip_intro).then(|| IntroForm {
            cross: config.names.name(crate::Player::Cross).to_string(),
            nought: config.names.name(crate::Player::Nought).to_string(),
        });

        Self {
            session: GameSession::new(config.names, config.rule),
            board_view: BoardView::default(),
            sound,
            intro,
            announcement: None,
        }
    }

    /// Board accepts clicks only with no dialog open and no winner yet
    fn input_enabled(&self) -> bool {
        self.intro.is_none() && self.announcement.is_none() && !self.session.is_game_over()
    }

    /// Forward a cell activation to the session and react to the outcome
    fn activate(&mut self, row: u8, col: u8) {
        let outcome = self.session.on_cell_activated(row, col);
        if outcome.is_accepted() {
            self.sound.play(SoundCue::Click);
        }
        match outcome {
            MoveOutcome::Continue => {}
            MoveOutcome::Win(line) => {
                self.sound.stop_loop();
                self.sound.play(SoundCue::Win);
                let name = self.session.names().name(line.winner).to_string();
                self.announcement = Some(Announcement::Win(name));
            }
            MoveOutcome::Invalid(reason) => debug!(%reason, "activation ignored"),
        }
    }

    fn new_game(&mut self) {
        self.session.reset();
        self.announcement = None;
        self.sound.start_loop(SoundCue::Background);
    }

    fn surrender(&mut self) {
        if let Some(conceded) = self.session.surrender() {
            self.announcement = Some(Announcement::Surrender(conceded.winner_name));
        }
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New game (N)").clicked() {
                        self.new_game();
                        ui.close_menu();
                    }
                    let can_surrender = self.intro.is_none() && !self.session.is_game_over();
                    if ui.add_enabled(can_surrender, egui::Button::new("Surrender")).clicked() {
                        self.surrender();
                        ui.close_menu();
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(format!("Move #{}", self.session.game().move_count()));
                });
            });
        });
    }

    /// Render the turn indicator
    fn render_status_bar(&self, ctx: &Context) {
        TopBottomPanel::top("status_bar")
            .frame(Frame::new().fill(egui::Color32::from_rgb(35, 38, 43)).inner_margin(8.0))
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    let player = self
                        .session
                        .winning_line()
                        .map_or(self.session.current_turn(), |line| line.winner);
                    ui.label(RichText::new(glyph(player)).size(22.0).strong().color(glyph_color(player)));
                    ui.add_space(8.0);
                    ui.label(RichText::new(self.session.status_line()).size(18.0).color(TEXT_PRIMARY));
                });
            });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                let enabled = self.input_enabled();
                if let Some(pos) = self.board_view.show(ui, self.session.game(), enabled) {
                    self.activate(pos.row(), pos.col());
                }
            });
        });
    }

    /// Welcome and name entry, shown once before the first game
    fn render_intro(&mut self, ctx: &Context) {
        let Some(form) = &mut self.intro else {
            return;
        };

        let mut start = false;
        egui::Window::new("Welcome to Renju")
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, Vec2::ZERO)
            .show(ctx, |ui| {
                ui.label(RULES_TEXT);
                ui.add_space(10.0);
                egui::Grid::new("names").num_columns(2).show(ui, |ui| {
                    ui.label("Crosses player:");
                    ui.text_edit_singleline(&mut form.cross);
                    ui.end_row();
                    ui.label("Noughts player:");
                    ui.text_edit_singleline(&mut form.nought);
                    ui.end_row();
                });
                ui.add_space(10.0);
                start = ui.button("Start").clicked();
            });

        if start {
            self.confirm_intro();
        }
    }

    /// Close the welcome dialog and start a game under the entered names
    fn confirm_intro(&mut self) {
        if let Some(form) = self.intro.take() {
            let names = PlayerNames::new(&form.cross, &form.nought);
            let rule = self.session.game().highlight_rule();
            self.session = GameSession::new(names, rule);
        }
    }

    /// Win and surrender messages
    fn render_announcement(&mut self, ctx: &Context) {
        let Some(announcement) = &self.announcement else {
            return;
        };
        let (title, winner) = match announcement {
            Announcement::Win(name) => ("Victory", name),
            Announcement::Surrender(name) => ("Surrender", name),
        };

        let mut close = false;
        egui::Window::new(title)
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, Vec2::ZERO)
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new(format!("{winner} wins!")).size(20.0).strong());
                    ui.add_space(8.0);
                    close = ui.button("OK").clicked();
                });
            });

        if close {
            self.announcement = None;
        }
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        let new_game = self.intro.is_none() && ctx.input(|i| i.key_pressed(egui::Key::N));
        if new_game {
            info!("new game from keyboard");
            self.new_game();
        }
    }
}

impl eframe::App for RenjuApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.render_menu_bar(ctx);
        self.render_status_bar(ctx);
        self.render_board(ctx);

        self.render_intro(ctx);
        self.render_announcement(ctx);
    }
}
