//! Game flow on top of a [`GameModel`]
//!
//! The controller alternates turns (White first), times each move, decides
//! the outcome once a placement ends the game, and can play moves on its own
//! for simulated games.
//!
//! # Example
//!
//! ```
//! use islands::{Color, GameController};
//!
//! let mut game = GameController::new(5, Default::default());
//! let report = game.try_play(2, 2)?.expect("cell is free");
//! assert_eq!(report.color, Color::White);
//! assert_eq!(game.turn(), Color::Black);
//!
//! // Occupied cells are ignored
//! assert!(game.try_play(2, 2)?.is_none());
//! # Ok::<(), islands::BoardError>(())
//! ```

use std::time::{Duration, Instant};

use rand::Rng;

use crate::board::{Color, Pos};
use crate::error::BoardError;
use crate::model::GameModel;
use crate::rules::ScoringRules;

/// Random probes made by the simulated player before falling back to a scan
const SIMULATION_TRIES: usize = 50;

/// Result of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    White,
    Black,
    Tie,
}

impl Outcome {
    /// Decide the outcome from the final scores: more islands wins
    pub fn from_scores(white: usize, black: usize) -> Self {
        match white.cmp(&black) {
            std::cmp::Ordering::Greater => Outcome::White,
            std::cmp::Ordering::Less => Outcome::Black,
            std::cmp::Ordering::Equal => Outcome::Tie,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Outcome::White => "WHITE",
            Outcome::Black => "BLACK",
            Outcome::Tie => "TIE",
        }
    }
}

/// Summary of one committed move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveReport {
    pub pos: Pos,
    pub color: Color,
    pub game_over: bool,
    pub white_score: usize,
    pub black_score: usize,
    pub elapsed: Duration,
}

/// Drives one game
#[derive(Debug, Clone)]
pub struct GameController {
    model: GameModel,
    turn: Color,
    outcome: Option<Outcome>,
    last_move: Option<Pos>,
    move_count: usize,
    last_move_time: Option<Duration>,
    message: Option<String>,
}

impl GameController {
    pub fn new(size: usize, rules: ScoringRules) -> Self {
        Self {
            model: GameModel::with_rules(size, rules),
            turn: Color::White,
            outcome: None,
            last_move: None,
            move_count: 0,
            last_move_time: None,
            message: None,
        }
    }

    #[inline]
    pub fn model(&self) -> &GameModel {
        &self.model
    }

    #[inline]
    pub fn model_mut(&mut self) -> &mut GameModel {
        &mut self.model
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.model.size()
    }

    /// Color to move next
    #[inline]
    pub fn turn(&self) -> Color {
        self.turn
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn last_move(&self) -> Option<Pos> {
        self.last_move
    }

    pub fn move_count(&self) -> usize {
        self.move_count
    }

    /// Wall-clock time spent inside the model on the last move
    pub fn last_move_time(&self) -> Option<Duration> {
        self.last_move_time
    }

    /// Status line describing the last thing that happened
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Attempt to play the current color at `(row, col)`.
    ///
    /// Returns `Ok(None)` when the game is already over or the cell is taken.
    pub fn try_play(&mut self, row: i32, col: i32) -> Result<Option<MoveReport>, BoardError> {
        if self.is_over() {
            self.message = Some("Game is over".to_string());
            return Ok(None);
        }
        if !self.model.can_place(row, col)? {
            self.message = Some(format!("({row}, {col}) is occupied"));
            return Ok(None);
        }

        let color = self.turn;
        let start = Instant::now();
        let game_over = self.model.place(row, col, color)?;
        let elapsed = start.elapsed();

        let pos = Pos::new(row as usize, col as usize);
        self.last_move = Some(pos);
        self.move_count += 1;
        self.last_move_time = Some(elapsed);

        if game_over {
            let outcome =
                Outcome::from_scores(self.model.white_score(), self.model.black_score());
            self.outcome = Some(outcome);
            self.message = Some(format!("{} wins", outcome.label()));
        } else {
            self.turn = color.opponent();
            self.message = None;
        }

        Ok(Some(MoveReport {
            pos,
            color,
            game_over,
            white_score: self.model.white_score(),
            black_score: self.model.black_score(),
            elapsed,
        }))
    }

    /// Play one move for the current color at a randomly chosen open cell.
    ///
    /// Returns `Ok(None)` once the game is over or no open cell is left.
    pub fn simulate_step<R: Rng>(
        &mut self,
        rng: &mut R,
    ) -> Result<Option<MoveReport>, BoardError> {
        if self.is_over() {
            return Ok(None);
        }
        match self.pick_open_cell(rng)? {
            Some(pos) => self.try_play(pos.row as i32, pos.col as i32),
            None => {
                self.message = Some("Board is full".to_string());
                Ok(None)
            }
        }
    }

    fn pick_open_cell<R: Rng>(&self, rng: &mut R) -> Result<Option<Pos>, BoardError> {
        let size = self.size() as i32;
        for _ in 0..SIMULATION_TRIES {
            let row = rng.gen_range(0..size);
            let col = rng.gen_range(0..size);
            if self.model.is_open(row, col)? {
                return Ok(Some(Pos::new(row as usize, col as usize)));
            }
        }

        for row in 0..size {
            for col in 0..size {
                if self.model.is_open(row, col)? {
                    return Ok(Some(Pos::new(row as usize, col as usize)));
                }
            }
        }
        Ok(None)
    }
}
