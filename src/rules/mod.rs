//! Game rules for Renju
//!
//! The only rules are that a mark goes on an empty cell and that five or
//! more in a row wins.

pub mod win;

// Re-exports for convenient access
pub use win::{
    find_winning_line, has_five_at_pos, run_length, Direction, HighlightRule, WinningLine,
    WIN_LENGTH,
};
