//! Grid of cells

use super::{Cell, Pos, TOTAL_CELLS};

/// 15x15 grid, stored row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Cell; TOTAL_CELLS],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; TOTAL_CELLS],
        }
    }

    /// Get cell at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// Overwrite a cell. Turn order and occupancy are enforced by `Game`.
    #[inline]
    pub fn set(&mut self, pos: Pos, cell: Cell) {
        self.cells[pos.to_index()] = cell;
    }

    /// Empty every cell
    pub fn clear(&mut self) {
        self.cells = [Cell::Empty; TOTAL_CELLS];
    }

    /// Number of marked cells
    pub fn stone_count(&self) -> usize {
        self.cells.iter().filter(|c| **c != Cell::Empty).count()
    }

    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.cells.iter().all(|c| *c == Cell::Empty)
    }

    /// No empty cell left
    #[inline]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| *c != Cell::Empty)
    }

    /// All cells with their positions, row by row
    pub fn iter(&self) -> impl Iterator<Item = (Pos, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, cell)| (Pos::from_index(idx), *cell))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
