//! Board representation for Islands of Hex

pub mod board;
pub mod union_find;

#[cfg(test)]
mod tests;

// Re-exports
pub use board::Board;
pub use union_find::UnionFind;

/// Hex-adjacency offsets as (row, col) deltas.
///
/// A cell touches the cells directly above and below it, left and right of
/// it, and along the NW-SE diagonal.
pub const HEX_NEIGHBORS: [(i32, i32); 6] = [(-1, -1), (-1, 0), (0, -1), (0, 1), (1, 0), (1, 1)];

/// Player colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Color::White => "White",
            Color::Black => "Black",
        }
    }
}

/// State of a single cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    /// Claimed by a `can_place` probe but not yet given a color
    Reserved,
    Stone(Color),
}

impl Cell {
    #[inline]
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// Color of the stone in this cell, if any
    #[inline]
    pub fn color(self) -> Option<Color> {
        match self {
            Cell::Stone(color) => Some(color),
            Cell::Empty | Cell::Reserved => None,
        }
    }
}

/// Position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

impl Pos {
    #[inline]
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Linear index on a board of the given side length
    #[inline]
    pub fn to_index(self, size: usize) -> usize {
        debug_assert!(self.row < size && self.col < size);
        self.row * size + self.col
    }

    #[inline]
    pub fn from_index(idx: usize, size: usize) -> Self {
        Self {
            row: idx / size,
            col: idx % size,
        }
    }

    #[inline]
    pub fn is_valid(row: i32, col: i32, size: usize) -> bool {
        row >= 0 && col >= 0 && (row as usize) < size && (col as usize) < size
    }

    /// In-bounds hex neighbours of this position
    pub fn neighbors(self, size: usize) -> impl Iterator<Item = Pos> {
        let row = self.row as i32;
        let col = self.col as i32;
        HEX_NEIGHBORS.into_iter().filter_map(move |(dr, dc)| {
            let (r, c) = (row + dr, col + dc);
            Pos::is_valid(r, c, size).then(|| Pos::new(r as usize, c as usize))
        })
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.row, self.col).cmp(&(other.row, other.col))
    }
}
