//! Board representation for Renju

pub mod board;


// Re-exports
pub use board::Board;

/// Board size (15x15)
pub const BOARD_SIZE: usize = 15;
pub const TOTAL_CELLS: usize = BOARD_SIZE * BOARD_SIZE; // 225

/// Contents of a single cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Cross,
    Nought,
}

/// The two sides. Cross always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Player {
    #[default]
    Cross,
    Nought,
}

impl Player {
    /// Get the other side
    #[inline]
    pub fn opponent(self) -> Player {
        match self {
            Player::Cross => Player::Nought,
            Player::Nought => Player::Cross,
        }
    }

    /// Mark this player leaves on the board
    #[inline]
    pub fn mark(self) -> Cell {
        match self {
            Player::Cross => Cell::Cross,
            Player::Nought => Cell::Nought,
        }
    }
}

impl Cell {
    /// Owner of the mark, `None` for an empty cell
    #[inline]
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Cross => Some(Player::Cross),
            Cell::Nought => Some(Player::Nought),
        }
    }
}

/// Position on the board. Only built through [`Pos::new`] and friends, so
/// every `Pos` in circulation is on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    row: u8,
    col: u8,
}

impl Pos {
    /// Panics on coordinates outside the board. The shell only produces
    /// positions for its own grid, so anything else is a wiring bug.
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        assert!(
            (row as usize) < BOARD_SIZE && (col as usize) < BOARD_SIZE,
            "position ({row}, {col}) is outside the {BOARD_SIZE}x{BOARD_SIZE} board"
        );
        Self { row, col }
    }

    #[inline]
    pub fn row(self) -> u8 {
        self.row
    }

    #[inline]
    pub fn col(self) -> u8 {
        self.col
    }

    #[inline]
    pub fn to_index(self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    #[inline]
    pub fn from_index(idx: usize) -> Self {
        Self::new((idx / BOARD_SIZE) as u8, (idx % BOARD_SIZE) as u8)
    }

    #[inline]
    pub fn is_valid(row: i32, col: i32) -> bool {
        row >= 0 && row < BOARD_SIZE as i32 && col >= 0 && col < BOARD_SIZE as i32
    }

    /// Step `dist` cells along `(dr, dc)`, `None` when that leaves the board
    #[inline]
    pub fn offset(self, dr: i32, dc: i32, dist: i32) -> Option<Pos> {
        let r = self.row as i32 + dr * dist;
        let c = self.col as i32 + dc * dist;
        Pos::is_valid(r, c).then(|| Pos::new(r as u8, c as u8))
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.to_index().cmp(&other.to_index())
    }
}
