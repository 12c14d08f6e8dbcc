//! GUI module for the Renju game
//!
//! This module provides a native Rust GUI using egui/eframe. It owns all
//! colours, glyphs, dialogs and sound; the core only sees cell activations
//! and menu commands.

mod app;
mod board_view;
pub mod sound;
mod theme;

pub use app::{AppConfig, RenjuApp};
pub use sound::{AssetSoundtrack, SoundCue, SoundError, Soundtrack};
