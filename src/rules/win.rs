//! Five-in-a-row detection
//!
//! A move wins when the cell just played sits on a contiguous run of at least
//! five identical marks along one of the four line directions. Overlines
//! (six or more) win as well.
//!
//! Only the lines through the last move are scanned, so a check costs at most
//! a few dozen cell reads regardless of how full the board is.

use crate::board::{Board, Cell, Player, Pos};

/// Marks in a row needed to win
pub const WIN_LENGTH: usize = 5;

/// The four line directions, in the order they are examined
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Vertical,
    Horizontal,
    Diagonal,
    AntiDiagonal,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Vertical,
        Direction::Horizontal,
        Direction::Diagonal,
        Direction::AntiDiagonal,
    ];

    /// Positive step `(d_row, d_col)`
    #[inline]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Vertical => (1, 0),
            Direction::Horizontal => (0, 1),
            Direction::Diagonal => (1, 1),
            Direction::AntiDiagonal => (1, -1),
        }
    }
}

/// Which cells of a winning run get highlighted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HighlightRule {
    /// First five cells of the run, starting from its negative end
    #[default]
    LeadingFive,
    /// Every cell of the run
    FullRun,
}

/// A completed line, as reported to the shell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WinningLine {
    pub winner: Player,
    pub direction: Direction,
    /// Length of the whole contiguous run (may exceed the highlighted cells)
    pub run_length: usize,
    /// Cells to highlight, ordered along the positive direction
    pub cells: Vec<Pos>,
}

/// Count same-mark cells beyond `pos` along `(dr, dc)`, origin excluded
#[inline]
fn extent(board: &Board, pos: Pos, mark: Cell, dr: i32, dc: i32) -> usize {
    let mut count = 0;
    while let Some(next) = pos.offset(dr, dc, count as i32 + 1) {
        if board.get(next) != mark {
            break;
        }
        count += 1;
    }
    count
}

/// Length of the run through `pos` along `direction`, origin included.
///
/// Zero when `pos` is empty.
pub fn run_length(board: &Board, pos: Pos, direction: Direction) -> usize {
    let mark = board.get(pos);
    if mark == Cell::Empty {
        return 0;
    }
    let (dr, dc) = direction.delta();
    1 + extent(board, pos, mark, dr, dc) + extent(board, pos, mark, -dr, -dc)
}

/// Fast check without building the highlight list
#[inline]
pub fn has_five_at_pos(board: &Board, pos: Pos) -> bool {
    Direction::ALL
        .iter()
        .any(|&dir| run_length(board, pos, dir) >= WIN_LENGTH)
}

/// Find the winning line through the just-played `pos`, if any.
///
/// When one move completes runs in several directions, the run whose first
/// cell comes earliest in row-major order is reported; ties go to the earlier
/// direction in [`Direction::ALL`].
pub fn find_winning_line(board: &Board, pos: Pos, rule: HighlightRule) -> Option<WinningLine> {
    let mark = board.get(pos);
    let winner = mark.owner()?;

    let mut best: Option<(Pos, Direction, usize)> = None;
    for dir in Direction::ALL {
        let (dr, dc) = dir.delta();
        let back = extent(board, pos, mark, -dr, -dc);
        let len = 1 + back + extent(board, pos, mark, dr, dc);
        if len < WIN_LENGTH {
            continue;
        }

        let Some(start) = pos.offset(-dr, -dc, back as i32) else {
            continue;
        };
        if best.map_or(true, |(best_start, _, _)| start < best_start) {
            best = Some((start, dir, len));
        }
    }

    let (start, direction, run_length) = best?;
    let (dr, dc) = direction.delta();
    let count = match rule {
        HighlightRule::LeadingFive => WIN_LENGTH,
        HighlightRule::FullRun => run_length,
    };
    let cells = (0..count as i32)
        .filter_map(|i| start.offset(dr, dc, i))
        .collect();

    Some(WinningLine {
        winner,
        direction,
        run_length,
        cells,
    })
}
