//! Game state management for the Islands of Hex GUI

use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::AppConfig;
use crate::{GameController, MoveReport, Pos, ScoringRules};

/// Game mode selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameMode {
    /// Two players sharing the mouse
    #[default]
    TwoPlayer,
    /// The computer plays both colors at a fixed pace
    Simulated,
}

impl GameMode {
    pub fn label(self) -> &'static str {
        match self {
            GameMode::TwoPlayer => "Two players",
            GameMode::Simulated => "Simulated",
        }
    }
}

/// Paces simulated moves
pub struct SimulationClock {
    interval: Duration,
    last_step: Instant,
}

impl SimulationClock {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_step: Instant::now(),
        }
    }

    /// True once per elapsed interval
    pub fn due(&mut self, now: Instant) -> bool {
        if now.duration_since(self.last_step) >= self.interval {
            self.last_step = now;
            true
        } else {
            false
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }
}

/// Main game state
pub struct GameState {
    pub controller: GameController,
    pub mode: GameMode,
    pub board_size: usize,
    pub message: Option<String>,
    rules: ScoringRules,
    clock: SimulationClock,
    rng: StdRng,
    winning_island: Vec<Pos>,
}

impl GameState {
    pub fn new(config: &AppConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    pub fn with_rng(config: &AppConfig, rng: StdRng) -> Self {
        let mode = if config.simulated {
            GameMode::Simulated
        } else {
            GameMode::TwoPlayer
        };
        Self {
            controller: GameController::new(config.board_size, config.scoring),
            mode,
            board_size: config.board_size,
            message: None,
            rules: config.scoring,
            clock: SimulationClock::new(config.simulation_interval()),
            rng,
            winning_island: Vec::new(),
        }
    }

    /// Start a new game with the current size and mode
    pub fn reset(&mut self) {
        self.controller = GameController::new(self.board_size, self.rules);
        self.message = None;
        self.winning_island.clear();
        self.clock = SimulationClock::new(self.clock.interval());
    }

    pub fn set_board_size(&mut self, size: usize) {
        self.board_size = size;
        self.reset();
    }

    /// Switch between two-player and simulated play; starts a new game
    pub fn toggle_mode(&mut self) {
        self.mode = match self.mode {
            GameMode::TwoPlayer => GameMode::Simulated,
            GameMode::Simulated => GameMode::TwoPlayer,
        };
        self.reset();
    }

    pub fn accepts_clicks(&self) -> bool {
        self.mode == GameMode::TwoPlayer && !self.controller.is_over()
    }

    pub fn is_simulating(&self) -> bool {
        self.mode == GameMode::Simulated && !self.controller.is_over()
    }

    pub fn simulation_interval(&self) -> Duration {
        self.clock.interval()
    }

    /// Stones of the island that ended the game
    pub fn winning_island(&self) -> &[Pos] {
        &self.winning_island
    }

    /// Handle a click on a cell
    pub fn try_place(&mut self, pos: Pos) {
        if !self.accepts_clicks() {
            return;
        }
        let result = self.controller.try_play(pos.row as i32, pos.col as i32);
        self.after_move(result);
    }

    /// Advance a simulated game if its next move is due.
    ///
    /// Returns true if a move was played.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.is_simulating() || !self.clock.due(now) {
            return false;
        }
        let result = self.controller.simulate_step(&mut self.rng);
        self.after_move(result)
    }

    fn after_move(&mut self, result: Result<Option<MoveReport>, crate::BoardError>) -> bool {
        match result {
            Ok(Some(report)) => {
                if report.game_over {
                    self.capture_winning_island(report.pos);
                }
                self.message = None;
                true
            }
            Ok(None) => {
                self.message = self.controller.message().map(str::to_string);
                false
            }
            Err(err) => {
                self.message = Some(err.to_string());
                false
            }
        }
    }

    fn capture_winning_island(&mut self, last: Pos) {
        let model = self.controller.model_mut();
        match model.island_of(last.row as i32, last.col as i32) {
            Ok(stones) => self.winning_island = stones,
            Err(err) => self.message = Some(err.to_string()),
        }
    }
}
