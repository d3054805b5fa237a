//! Rules configuration.
//!
//! The standard game places 15 goats and tigers win after 5 captures.
//! Both numbers travel with every `GameState` so a state is self-describing.

use serde::{Deserialize, Serialize};

/// Number of tigers on every board.
pub const TIGER_COUNT: usize = 3;

/// Rules parameters for a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Goats available for placement. Phase one lasts until all are placed.
    pub max_goats: u8,

    /// Captures needed for the tigers to win.
    pub capture_threshold: u8,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            max_goats: 15,
            capture_threshold: 5,
        }
    }
}

impl RulesConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the placement budget.
    pub fn with_max_goats(mut self, max_goats: u8) -> Self {
        self.max_goats = max_goats;
        self
    }

    /// Set the capture win threshold.
    pub fn with_capture_threshold(mut self, threshold: u8) -> Self {
        self.capture_threshold = threshold;
        self
    }
}
