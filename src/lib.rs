//! Islands of Hex game engine
//!
//! Two players, White and Black, take turns occupying cells of a square grid
//! of hexagons. Same-colored stones that touch form an island:
//! - Each player's score is the number of islands they own
//! - A stone joining several islands merges them into one
//! - The game ends when an island grows to the board's side length
//!
//! # Architecture
//!
//! - [`board`]: Cell grid, coordinates and the union-find island tracker
//! - [`rules`]: Win condition and score accounting switches
//! - [`model`]: Game model combining board, islands and scores
//! - [`controller`]: Turn order, outcome, timing and simulated play
//! - [`config`]: TOML configuration for the GUI
//! - [`ui`]: Native GUI
//!
//! # Quick Start
//!
//! ```
//! use islands::{Color, GameModel};
//!
//! let mut model = GameModel::new(5);
//!
//! for row in 0..4 {
//!     assert!(model.can_place(row, 1)?);
//!     assert!(!model.place(row, 1, Color::White)?);
//! }
//!
//! // Fifth stone in the column completes a 5-stone island
//! assert!(model.place(4, 1, Color::White)?);
//! assert_eq!(model.white_score(), 1);
//! # Ok::<(), islands::BoardError>(())
//! ```
//!
//! # Performance
//!
//! Islands are tracked with a flat-array union-find using path halving, so a
//! placement costs amortized near-constant time even on 2500x2500 boards.

pub mod board;
pub mod config;
pub mod controller;
pub mod error;
pub mod model;
pub mod rules;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Cell, Color, Pos};
pub use controller::{GameController, MoveReport, Outcome};
pub use error::{BoardError, ConfigError};
pub use model::GameModel;
pub use rules::ScoringRules;
