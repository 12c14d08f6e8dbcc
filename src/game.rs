//! Board, turn and result: the state one game mutates move by move.

use tracing::{debug, info};

use crate::board::{Board, Cell, Player, Pos};
use crate::rules::{find_winning_line, HighlightRule, WinningLine};

/// Why a placement was refused. The board is untouched in both cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum InvalidMove {
    /// The cell already holds a mark.
    #[display("cell {_0} is already occupied")]
    Occupied(Pos),

    /// A line was completed; no more moves until reset.
    #[display("game is already over")]
    GameOver,
}

impl std::error::Error for InvalidMove {}

/// Result of a placement attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Mark placed, turn passed to the other side
    Continue,
    /// Mark placed and it completed a line; the turn is frozen
    Win(WinningLine),
    /// Nothing happened
    Invalid(InvalidMove),
}

impl MoveOutcome {
    #[inline]
    pub fn is_win(&self) -> bool {
        matches!(self, MoveOutcome::Win(_))
    }

    /// Whether a mark went on the board
    #[inline]
    pub fn is_accepted(&self) -> bool {
        !matches!(self, MoveOutcome::Invalid(_))
    }
}

/// One game of Renju
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    turn: Player,
    result: Option<WinningLine>,
    move_count: usize,
    rule: HighlightRule,
}

impl Game {
    pub fn new() -> Self {
        Self::with_rule(HighlightRule::default())
    }

    pub fn with_rule(rule: HighlightRule) -> Self {
        Self {
            board: Board::new(),
            turn: Player::Cross,
            result: None,
            move_count: 0,
            rule,
        }
    }

    /// Place the current player's mark at `pos`.
    ///
    /// Occupied cells and finished games are rejected without any change.
    /// A winning move freezes the turn on the winner; any other accepted move
    /// passes the turn.
    pub fn place(&mut self, pos: Pos) -> MoveOutcome {
        if self.result.is_some() {
            return MoveOutcome::Invalid(InvalidMove::GameOver);
        }
        if !self.board.is_empty(pos) {
            return MoveOutcome::Invalid(InvalidMove::Occupied(pos));
        }

        let player = self.turn;
        self.board.set(pos, player.mark());
        self.move_count += 1;
        debug!(?player, %pos, moves = self.move_count, "mark placed");

        if let Some(line) = find_winning_line(&self.board, pos, self.rule) {
            info!(
                ?player,
                direction = ?line.direction,
                run = line.run_length,
                "line completed"
            );
            self.result = Some(line.clone());
            return MoveOutcome::Win(line);
        }

        self.turn = player.opponent();
        MoveOutcome::Continue
    }

    /// Clear the board and hand the first move back to Cross
    pub fn reset(&mut self) {
        self.board.clear();
        self.turn = Player::Cross;
        self.result = None;
        self.move_count = 0;
    }

    #[inline]
    pub fn current_turn(&self) -> Player {
        self.turn
    }

    #[inline]
    pub fn cell_at(&self, pos: Pos) -> Cell {
        self.board.get(pos)
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.result.is_some()
    }

    /// Completed line, once the game is won
    #[inline]
    pub fn winning_line(&self) -> Option<&WinningLine> {
        self.result.as_ref()
    }

    /// Whether `pos` is one of the highlighted winning cells
    pub fn is_winning_cell(&self, pos: Pos) -> bool {
        self.result
            .as_ref()
            .is_some_and(|line| line.cells.contains(&pos))
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn move_count(&self) -> usize {
        self.move_count
    }

    #[inline]
    pub fn highlight_rule(&self) -> HighlightRule {
        self.rule
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{BOARD_SIZE, TOTAL_CELLS};

    #[test]
    fn test_first_move_passes_turn() {
        let mut game = Game::new();
        assert_eq!(game.current_turn(), Player::Cross);

        let outcome = game.place(Pos::new(7, 7));
        assert_eq!(outcome, MoveOutcome::Continue);
        assert_eq!(game.cell_at(Pos::new(7, 7)), Cell::Cross);
        assert_eq!(game.current_turn(), Player::Nought);
        assert_eq!(game.move_count(), 1);
    }

    #[test]
    fn test_occupied_cell_is_noop() {
        let mut game = Game::new();
        game.place(Pos::new(3, 3));
        let board_before = game.board().clone();

        let outcome = game.place(Pos::new(3, 3));
        assert_eq!(outcome, MoveOutcome::Invalid(InvalidMove::Occupied(Pos::new(3, 3))));
        assert_eq!(game.board(), &board_before);
        assert_eq!(game.current_turn(), Player::Nought);
        assert_eq!(game.move_count(), 1);
    }

    #[test]
    fn test_turns_alternate() {
        let mut game = Game::new();
        let mut expected = Player::Cross;
        // Scattered moves that never line up
        for (i, idx) in (0..TOTAL_CELLS).step_by(11).take(20).enumerate() {
            assert_eq!(game.current_turn(), expected, "move {i}");
            assert_eq!(game.place(Pos::from_index(idx)), MoveOutcome::Continue);
            expected = expected.opponent();
        }
    }

    #[test]
    fn test_win_freezes_game() {
        let mut game = Game::new();
        for c in 0..4 {
            game.place(Pos::new(0, c)); // Cross
            game.place(Pos::new(5, c)); // Nought
        }
        let outcome = game.place(Pos::new(0, 4));
        assert!(outcome.is_win());
        assert!(game.is_game_over());
        assert_eq!(game.current_turn(), Player::Cross);
        assert!(game.is_winning_cell(Pos::new(0, 2)));
        assert!(!game.is_winning_cell(Pos::new(5, 2)));

        let board_after_win = game.board().clone();
        assert_eq!(game.place(Pos::new(10, 10)), MoveOutcome::Invalid(InvalidMove::GameOver));
        assert_eq!(game.place(Pos::new(0, 0)), MoveOutcome::Invalid(InvalidMove::GameOver));
        assert_eq!(game.board(), &board_after_win);
        assert_eq!(game.current_turn(), Player::Cross);
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut game = Game::new();
        for c in 0..5 {
            game.place(Pos::new(1, c));
            game.place(Pos::new(2, c));
        }
        assert!(game.is_game_over());

        game.reset();
        assert!(game.board().is_board_empty());
        assert_eq!(game.current_turn(), Player::Cross);
        assert!(!game.is_game_over());
        assert!(game.winning_line().is_none());

        let after_first = game.board().clone();
        game.reset();
        assert_eq!(game.board(), &after_first);
        assert_eq!(game.current_turn(), Player::Cross);
        assert_eq!(game.move_count(), 0);
    }

    #[test]
    fn test_full_board_without_line_continues() {
        // Column pairs that swap owner every row never line up five
        let mut board = Board::new();
        for r in 0..BOARD_SIZE {
            for c in 0..BOARD_SIZE {
                let cross = (c / 2 + r) % 2 == 0;
                let cell = if cross { Cell::Cross } else { Cell::Nought };
                board.set(Pos::new(r as u8, c as u8), cell);
            }
        }
        let last = Pos::new(14, 14);
        let mark = board.get(last);
        board.set(last, Cell::Empty);

        let mut game = Game::new();
        game.board = board;
        game.turn = mark.owner().unwrap();
        game.move_count = TOTAL_CELLS - 1;

        assert_eq!(game.place(last), MoveOutcome::Continue);
        assert!(game.board().is_full());
        assert!(!game.is_game_over());
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn test_place_off_board_panics() {
        let mut game = Game::new();
        game.place(Pos::new(0, 20));
    }

    #[test]
    fn test_edge_cells_do_not_alias() {
        // (0, 14) and (1, 0) are neighbours in memory but not on the board
        let mut game = Game::new();
        game.place(Pos::new(0, 14));
        assert_eq!(game.cell_at(Pos::new(0, 14)), Cell::Cross);
        assert_eq!(game.cell_at(Pos::new(1, 0)), Cell::Empty);
    }

    #[test]
    fn test_outcome_acceptance() {
        let mut game = Game::new();
        let first = game.place(Pos::new(7, 7));
        assert!(first.is_accepted() && !first.is_win());
        assert!(!game.place(Pos::new(7, 7)).is_accepted());

        for c in 0..4 {
            game.place(Pos::new(0, c));
            game.place(Pos::new(1, c));
        }
        let win = game.place(Pos::new(0, 4));
        assert!(win.is_win() && win.is_accepted());
        assert!(!game.place(Pos::new(5, 5)).is_accepted());
    }

    #[test]
    fn test_invalid_move_display() {
        assert_eq!(
            InvalidMove::Occupied(Pos::new(1, 2)).to_string(),
            "cell (1, 2) is already occupied"
        );
        assert_eq!(InvalidMove::GameOver.to_string(), "game is already over");
    }
}
