//! Win condition checking
//!
//! A game is over as soon as the island holding the last placed stone
//! contains exactly as many stones as the board has rows. The island is not
//! required to touch any particular edge.

use crate::board::{Color, Pos};

/// Check whether an island of `island_weight` stones ends a game on a board
/// with side length `board_size`
#[inline]
pub fn completes_game(island_weight: usize, board_size: usize) -> bool {
    island_weight == board_size
}

/// The island that ended a game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WinningIsland {
    pub color: Color,
    /// Stone whose placement completed the island
    pub last_stone: Pos,
    pub size: usize,
}
