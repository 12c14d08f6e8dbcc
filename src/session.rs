//! Session glue between a [`Game`] and the shell.
//!
//! The shell needs three signals to render itself: whose turn it is, what
//! the last activation did, and whether input should be disabled. It sends
//! back cell activations and the two menu commands.

use tracing::{info, instrument};

use crate::board::{Player, Pos};
use crate::game::{Game, MoveOutcome};
use crate::rules::{HighlightRule, WinningLine};

pub const DEFAULT_CROSS_NAME: &str = "Crosses";
pub const DEFAULT_NOUGHT_NAME: &str = "Noughts";

/// Display names for the two sides
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerNames {
    cross: String,
    nought: String,
}

impl PlayerNames {
    /// Blank names (after trimming) fall back to the defaults.
    pub fn new(cross: &str, nought: &str) -> Self {
        Self {
            cross: Self::or_default(cross, DEFAULT_CROSS_NAME),
            nought: Self::or_default(nought, DEFAULT_NOUGHT_NAME),
        }
    }

    /// Blank entries fall back to the default; anything else is kept as typed
    fn or_default(name: &str, fallback: &str) -> String {
        if name.trim().is_empty() {
            fallback.to_string()
        } else {
            name.to_string()
        }
    }

    pub fn name(&self, player: Player) -> &str {
        match player {
            Player::Cross => &self.cross,
            Player::Nought => &self.nought,
        }
    }
}

impl Default for PlayerNames {
    fn default() -> Self {
        Self::new("", "")
    }
}

/// A concession: the side to move gave up
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Surrender {
    pub winner: Player,
    pub winner_name: String,
}

/// One sitting at the board: the current game plus who is playing it
#[derive(Debug, Clone)]
pub struct GameSession {
    game: Game,
    names: PlayerNames,
}

impl GameSession {
    pub fn new(names: PlayerNames, rule: HighlightRule) -> Self {
        info!(
            cross = names.name(Player::Cross),
            nought = names.name(Player::Nought),
            ?rule,
            "session started"
        );
        Self {
            game: Game::with_rule(rule),
            names,
        }
    }

    /// The single input from the shell. Panics on coordinates off the board.
    #[instrument(skip(self))]
    pub fn on_cell_activated(&mut self, row: u8, col: u8) -> MoveOutcome {
        self.game.place(Pos::new(row, col))
    }

    /// Start a new game with the same players
    pub fn reset(&mut self) {
        info!(moves = self.game.move_count(), "new game");
        self.game.reset();
    }

    /// The side to move concedes; the other side wins and the board resets.
    ///
    /// Returns `None` once a line has been completed, since the game already
    /// has a winner.
    #[instrument(skip(self))]
    pub fn surrender(&mut self) -> Option<Surrender> {
        if self.game.is_game_over() {
            return None;
        }
        let winner = self.game.current_turn().opponent();
        let surrender = Surrender {
            winner,
            winner_name: self.names.name(winner).to_string(),
        };
        info!(?winner, "surrendered");
        self.game.reset();
        Some(surrender)
    }

    #[inline]
    pub fn current_turn(&self) -> Player {
        self.game.current_turn()
    }

    pub fn current_player_name(&self) -> &str {
        self.names.name(self.game.current_turn())
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.game.is_game_over()
    }

    pub fn winning_line(&self) -> Option<&WinningLine> {
        self.game.winning_line()
    }

    pub fn winner_name(&self) -> Option<&str> {
        self.game
            .winning_line()
            .map(|line| self.names.name(line.winner))
    }

    /// One-line status for the turn indicator
    pub fn status_line(&self) -> String {
        if let Some(name) = self.winner_name() {
            format!("{name} wins!")
        } else if self.game.board().is_full() {
            "Board full".to_string()
        } else {
            format!("Turn: {}", self.current_player_name())
        }
    }

    #[inline]
    pub fn game(&self) -> &Game {
        &self.game
    }

    #[inline]
    pub fn names(&self) -> &PlayerNames {
        &self.names
    }
}
