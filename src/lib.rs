//! Renju: two-player five-in-a-row on a 15x15 board
//!
//! Players take turns marking empty cells, crosses first. The first to line
//! up five or more marks horizontally, vertically or diagonally wins, and the
//! winning cells are highlighted. There is no AI and no draw rule: a full
//! board without a line simply leaves nothing to click.
//!
//! # Architecture
//!
//! - [`board`]: the grid, cells, players and positions
//! - [`rules`]: line scanning and winning-cell extraction
//! - [`game`]: board + turn + result, the move state machine
//! - [`session`]: player names, surrender, status text
//! - [`ui`]: egui/eframe desktop shell and sound cues
//! - [`cli`]: command-line configuration for the binary
//!
//! # Quick Start
//!
//! ```
//! use renju::{GameSession, HighlightRule, MoveOutcome, PlayerNames};
//!
//! let mut session = GameSession::new(PlayerNames::new("Ann", "Bob"), HighlightRule::LeadingFive);
//!
//! assert_eq!(session.on_cell_activated(7, 7), MoveOutcome::Continue);
//! assert_eq!(session.current_player_name(), "Bob");
//! ```

pub mod board;
pub mod cli;
pub mod game;
pub mod rules;
pub mod session;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Cell, Player, Pos, BOARD_SIZE};
pub use game::{Game, InvalidMove, MoveOutcome};
pub use rules::{Direction, HighlightRule, WinningLine};
pub use session::{GameSession, PlayerNames, Surrender};
