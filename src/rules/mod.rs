//! Game rules for Islands of Hex
//!
//! This module holds the rule switches for score accounting and the
//! terminal condition:
//! - An island is a maximal group of same-colored, hex-adjacent stones
//! - A player's score is the number of islands they own
//! - The game ends when one island grows to the board's side length

pub mod win;

pub use win::{completes_game, WinningIsland};

/// Score accounting switches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ScoringRules {
    /// Give Black an extra island every time a White stone lands next to a
    /// Black stone. Matches the scores of the first published version of the
    /// game; the bonus does not correspond to any real island.
    pub black_bonus_on_white_contact: bool,
}

impl ScoringRules {
    /// Rules reproducing the first published version's score accounting
    pub fn legacy() -> Self {
        Self {
            black_bonus_on_white_contact: true,
        }
    }
}
