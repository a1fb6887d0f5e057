//! Game model tying the board, island tracking and scoring together
//!
//! Scores are maintained incrementally: a new stone adds one island, and every
//! distinct island of its own color that it touches folds into it, retiring
//! one island each. Nothing is ever recomputed by scanning the board.
//!
//! # Example
//!
//! ```
//! use islands::{Color, GameModel};
//!
//! let mut model = GameModel::new(5);
//! model.place(1, 1, Color::White)?;
//! model.place(1, 3, Color::White)?;
//! assert_eq!(model.white_score(), 2);
//!
//! // (1, 2) touches both stones
//! model.place(1, 2, Color::White)?;
//! assert_eq!(model.white_score(), 1);
//! # Ok::<(), islands::BoardError>(())
//! ```

use crate::board::{Board, Cell, Color, Pos, UnionFind};
use crate::error::BoardError;
use crate::rules::{completes_game, ScoringRules, WinningIsland};

/// State of one game: occupied cells, islands and both scores
#[derive(Debug, Clone)]
pub struct GameModel {
    board: Board,
    islands: UnionFind,
    white_score: usize,
    black_score: usize,
    rules: ScoringRules,
    winner: Option<WinningIsland>,
}

impl GameModel {
    /// Create a game on an empty `size x size` board.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero.
    pub fn new(size: usize) -> Self {
        Self::with_rules(size, ScoringRules::default())
    }

    pub fn with_rules(size: usize, rules: ScoringRules) -> Self {
        let board = Board::new(size);
        Self {
            islands: UnionFind::new(size * size),
            board,
            white_score: 0,
            black_score: 0,
            rules,
            winner: None,
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.board.size()
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn rules(&self) -> ScoringRules {
        self.rules
    }

    /// Probe a cell and reserve it if it is empty.
    ///
    /// Returns true at most once per cell: a successful probe leaves the cell
    /// reserved, so a second probe of the same cell returns false even if no
    /// stone was placed in between.
    pub fn can_place(&mut self, row: i32, col: i32) -> Result<bool, BoardError> {
        let pos = self.board.check(row, col)?;
        Ok(self.board.reserve(pos))
    }

    /// Pure occupancy query; does not reserve
    pub fn is_open(&self, row: i32, col: i32) -> Result<bool, BoardError> {
        let pos = self.board.check(row, col)?;
        Ok(self.board.get(pos).is_empty())
    }

    pub fn cell(&self, row: i32, col: i32) -> Result<Cell, BoardError> {
        let pos = self.board.check(row, col)?;
        Ok(self.board.get(pos))
    }

    /// Place a stone and report whether it ends the game.
    ///
    /// The cell is expected to have been cleared with [`can_place`] first;
    /// placing twice on one cell leaves the scores meaningless.
    ///
    /// [`can_place`]: GameModel::can_place
    pub fn place(&mut self, row: i32, col: i32, color: Color) -> Result<bool, BoardError> {
        let pos = self.board.check(row, col)?;
        let size = self.size();
        let idx = pos.to_index(size);

        self.board.set(pos, color);

        let mut merged = 0;
        for neighbor in pos.neighbors(size) {
            let Some(neighbor_color) = self.board.get(neighbor).color() else {
                continue;
            };

            if self.rules.black_bonus_on_white_contact
                && color == Color::White
                && neighbor_color == Color::Black
            {
                self.black_score += 1;
            }

            // The neighbour's island absorbs the new stone's island
            if neighbor_color == color && self.islands.union(idx, neighbor.to_index(size)) {
                merged += 1;
            }
        }

        let score = self.score_mut(color);
        *score = (*score + 1).saturating_sub(merged);

        let island = self.islands.weight(idx);
        if !completes_game(island, size) {
            return Ok(false);
        }

        *self.score_mut(color) = 1;
        self.winner = Some(WinningIsland {
            color,
            last_stone: pos,
            size: island,
        });
        Ok(true)
    }

    #[inline]
    pub fn white_score(&self) -> usize {
        self.white_score
    }

    #[inline]
    pub fn black_score(&self) -> usize {
        self.black_score
    }

    pub fn score(&self, color: Color) -> usize {
        match color {
            Color::White => self.white_score,
            Color::Black => self.black_score,
        }
    }

    fn score_mut(&mut self, color: Color) -> &mut usize {
        match color {
            Color::White => &mut self.white_score,
            Color::Black => &mut self.black_score,
        }
    }

    /// The island whose completion ended the game, if any
    pub fn winner(&self) -> Option<&WinningIsland> {
        self.winner.as_ref()
    }

    /// Number of stones in the island containing `(row, col)`; zero for a
    /// cell without a stone
    pub fn island_size(&mut self, row: i32, col: i32) -> Result<usize, BoardError> {
        let pos = self.board.check(row, col)?;
        if self.board.get(pos).color().is_none() {
            return Ok(0);
        }
        Ok(self.islands.weight(pos.to_index(self.size())))
    }

    /// All stones of the island containing `(row, col)`, in row-major order
    pub fn island_of(&mut self, row: i32, col: i32) -> Result<Vec<Pos>, BoardError> {
        let pos = self.board.check(row, col)?;
        if self.board.get(pos).color().is_none() {
            return Ok(Vec::new());
        }

        let size = self.size();
        let root = self.islands.find(pos.to_index(size));
        let mut stones = Vec::new();
        for idx in 0..size * size {
            let cell_pos = Pos::from_index(idx, size);
            if self.board.get(cell_pos).color().is_some() && self.islands.find(idx) == root {
                stones.push(cell_pos);
            }
        }
        Ok(stones)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL: usize = 5;

    fn play(model: &mut GameModel, moves: &[(i32, i32)], color: Color) -> Vec<bool> {
        moves
            .iter()
            .map(|&(r, c)| model.place(r, c, color).unwrap())
            .collect()
    }

    #[test]
    fn test_initial_score() {
        let model = GameModel::new(SMALL);
        assert_eq!(model.white_score(), 0);
        assert_eq!(model.black_score(), 0);
        assert!(model.winner().is_none());
    }

    #[test]
    fn test_can_place_every_cell_once() {
        let mut model = GameModel::new(SMALL);
        for row in 0..SMALL as i32 {
            for col in 0..SMALL as i32 {
                assert_eq!(model.can_place(row, col), Ok(true));
                assert_eq!(model.can_place(row, col), Ok(false));
            }
        }
    }

    #[test]
    fn test_can_place_out_of_range() {
        let mut model = GameModel::new(SMALL);
        for (row, col) in [(-1, 0), (0, -1), (-1, -1), (5, 5), (5, 0), (0, 5)] {
            assert_eq!(
                model.can_place(row, col),
                Err(BoardError::OutOfRange { row, col, size: SMALL })
            );
        }
    }

    #[test]
    fn test_place_out_of_range() {
        let mut model = GameModel::new(SMALL);
        assert!(model.place(-1, 0, Color::White).is_err());
        assert!(model.place(0, 5, Color::Black).is_err());
        assert_eq!(model.white_score(), 0);
        assert_eq!(model.black_score(), 0);
    }

    #[test]
    fn test_occupied_cell_cannot_be_played() {
        for color in [Color::White, Color::Black] {
            let mut model = GameModel::new(SMALL);
            model.place(0, 0, color).unwrap();
            assert_eq!(model.can_place(0, 0), Ok(false));
        }
    }

    #[test]
    fn test_place_over_reservation() {
        let mut model = GameModel::new(SMALL);
        assert_eq!(model.can_place(2, 2), Ok(true));
        assert_eq!(model.cell(2, 2), Ok(Cell::Reserved));
        assert_eq!(model.is_open(2, 2), Ok(false));

        assert_eq!(model.place(2, 2, Color::Black), Ok(false));
        assert_eq!(model.cell(2, 2), Ok(Cell::Stone(Color::Black)));
        assert_eq!(model.black_score(), 1);
    }

    #[test]
    fn test_reservation_is_not_an_island() {
        let mut model = GameModel::new(SMALL);
        model.can_place(1, 1).unwrap();
        model.place(1, 2, Color::White).unwrap();
        assert_eq!(model.white_score(), 1);
        assert_eq!(model.island_size(1, 1), Ok(0));
        assert_eq!(model.island_size(1, 2), Ok(1));
    }

    #[test]
    fn test_single_stone() {
        let mut model = GameModel::new(SMALL);
        model.place(0, 0, Color::White).unwrap();
        assert_eq!(model.white_score(), 1);
        assert_eq!(model.black_score(), 0);

        let mut model = GameModel::new(SMALL);
        model.place(0, 0, Color::Black).unwrap();
        assert_eq!(model.white_score(), 0);
        assert_eq!(model.black_score(), 1);
    }

    #[test]
    fn test_connect_two_islands() {
        // E-W, NW-SE and N-S joins
        for (a, b, bridge) in [
            ((1, 1), (1, 3), (1, 2)),
            ((1, 1), (3, 3), (2, 2)),
            ((1, 1), (3, 1), (2, 1)),
        ] {
            let mut model = GameModel::new(SMALL);
            play(&mut model, &[a, b], Color::White);
            assert_eq!(model.white_score(), 2);
            play(&mut model, &[bridge], Color::White);
            assert_eq!(model.white_score(), 1);
            assert_eq!(model.island_size(bridge.0, bridge.1), Ok(3));
        }
    }

    #[test]
    fn test_ne_sw_diagonal_is_not_adjacent() {
        let mut model = GameModel::new(SMALL);
        play(&mut model, &[(1, 3), (2, 2)], Color::Black);
        assert_eq!(model.black_score(), 2);
    }

    #[test]
    fn test_adjacent_opposite_colors() {
        let mut model = GameModel::new(SMALL);
        model.place(1, 1, Color::White).unwrap();
        model.place(1, 2, Color::Black).unwrap();
        assert_eq!(model.white_score(), 1);
        assert_eq!(model.black_score(), 1);
    }

    #[test]
    fn test_join_three_islands() {
        let mut model = GameModel::new(SMALL);
        play(&mut model, &[(1, 1), (2, 3), (3, 2)], Color::Black);
        assert_eq!(model.white_score(), 0);
        assert_eq!(model.black_score(), 3);

        model.place(2, 2, Color::Black).unwrap();
        assert_eq!(model.black_score(), 1);
        assert_eq!(model.island_size(2, 2), Ok(4));
    }

    #[test]
    fn test_touching_same_island_twice_counts_once() {
        let mut model = GameModel::new(SMALL);
        // (1,1) and (1,2) already form one island; (2,2) touches both
        play(&mut model, &[(1, 1), (1, 2)], Color::White);
        assert_eq!(model.white_score(), 1);
        model.place(2, 2, Color::White).unwrap();
        assert_eq!(model.white_score(), 1);
    }

    #[test]
    fn test_white_vertical_line() {
        let mut model = GameModel::new(SMALL);
        let done = play(&mut model, &[(0, 1), (1, 1), (2, 1), (3, 1)], Color::White);
        assert_eq!(done, vec![false; 4]);

        assert_eq!(model.place(4, 1, Color::White), Ok(true));
        assert_eq!(model.white_score(), 1);

        let winner = model.winner().unwrap();
        assert_eq!(winner.color, Color::White);
        assert_eq!(winner.last_stone, Pos::new(4, 1));
        assert_eq!(winner.size, SMALL);
    }

    #[test]
    fn test_black_horizontal_line() {
        let mut model = GameModel::new(SMALL);
        let done = play(&mut model, &[(1, 0), (1, 1), (1, 2), (1, 3)], Color::Black);
        assert_eq!(done, vec![false; 4]);
        assert_eq!(model.place(1, 4, Color::Black), Ok(true));
        assert_eq!(model.black_score(), 1);
    }

    #[test]
    fn test_win_forces_score_to_one() {
        let mut model = GameModel::new(SMALL);
        // Two stray white islands plus a four-stone column
        play(&mut model, &[(0, 4), (4, 4)], Color::White);
        play(&mut model, &[(0, 0), (1, 0), (2, 0), (3, 0)], Color::White);
        assert_eq!(model.white_score(), 3);

        assert_eq!(model.place(4, 0, Color::White), Ok(true));
        assert_eq!(model.white_score(), 1);
    }

    #[test]
    fn test_island_of_lists_members() {
        let mut model = GameModel::new(SMALL);
        play(&mut model, &[(0, 0), (1, 1), (3, 3)], Color::White);
        model.place(0, 1, Color::Black).unwrap();

        assert_eq!(
            model.island_of(1, 1),
            Ok(vec![Pos::new(0, 0), Pos::new(1, 1)])
        );
        assert_eq!(model.island_of(0, 1), Ok(vec![Pos::new(0, 1)]));
        assert_eq!(model.island_of(4, 4), Ok(Vec::new()));
    }

    #[test]
    fn test_default_rules_ignore_opponent_contact() {
        let mut model = GameModel::new(SMALL);
        model.place(1, 1, Color::Black).unwrap();
        model.place(1, 2, Color::White).unwrap();
        assert_eq!(model.black_score(), 1);
        assert_eq!(model.white_score(), 1);
    }

    #[test]
    fn test_legacy_black_bonus() {
        let mut model = GameModel::with_rules(SMALL, ScoringRules::legacy());
        play(&mut model, &[(1, 1), (2, 3)], Color::Black);
        assert_eq!(model.black_score(), 2);

        // (1, 2) touches (1, 1) and (2, 3): one bonus per black neighbour
        model.place(1, 2, Color::White).unwrap();
        assert_eq!(model.black_score(), 4);
        assert_eq!(model.white_score(), 1);

        // Black stones landing next to white earn nothing extra
        model.place(0, 2, Color::Black).unwrap();
        assert_eq!(model.black_score(), 5);
    }
}
