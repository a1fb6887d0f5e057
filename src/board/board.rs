//! Grid of cell states with bounds checking

use super::{Cell, Color, Pos};
use crate::error::BoardError;

/// Square board of hexagonal cells
#[derive(Debug, Clone)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty `size x size` board.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero.
    pub fn new(size: usize) -> Self {
        assert!(size > 0, "board size must be positive");
        Self {
            size,
            cells: vec![Cell::Empty; size * size],
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Validate a coordinate pair and turn it into a position
    pub fn check(&self, row: i32, col: i32) -> Result<Pos, BoardError> {
        if Pos::is_valid(row, col, self.size) {
            Ok(Pos::new(row as usize, col as usize))
        } else {
            Err(BoardError::OutOfRange {
                row,
                col,
                size: self.size,
            })
        }
    }

    /// Get cell at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Cell {
        self.cells[pos.to_index(self.size)]
    }

    /// Probe a cell and reserve it if empty.
    ///
    /// Returns false when the cell is already reserved or holds a stone.
    pub fn reserve(&mut self, pos: Pos) -> bool {
        let cell = &mut self.cells[pos.to_index(self.size)];
        if cell.is_empty() {
            *cell = Cell::Reserved;
            true
        } else {
            false
        }
    }

    /// Put a stone down, overwriting whatever the cell held
    #[inline]
    pub fn set(&mut self, pos: Pos, color: Color) {
        let idx = pos.to_index(self.size);
        self.cells[idx] = Cell::Stone(color);
    }

    /// Number of cells holding a stone
    pub fn stone_count(&self) -> usize {
        self.cells.iter().filter(|c| c.color().is_some()).count()
    }

    /// Whether no empty cell remains
    pub fn is_full(&self) -> bool {
        !self.cells.iter().any(|c| c.is_empty())
    }
}
