//! GUI module for the Islands of Hex game
//!
//! This module provides a native Rust GUI using egui/eframe.

mod app;
mod board_view;
mod game_state;
mod theme;

pub use app::IslandsApp;
pub use board_view::HexLayout;
pub use game_state::{GameMode, GameState};
