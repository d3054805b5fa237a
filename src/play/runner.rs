//! Match runner: plays one game between two agents.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::{GameRng, GameState, Move, RulesConfig, Side};
use crate::error::{Error, Result};
use crate::rules::RulesEngine;
use crate::search::SearchConfig;

use super::agent::{Agent, AgentKind};

/// Configuration for a match.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Rules parameters.
    pub rules: RulesConfig,

    /// Search parameters for minimax agents.
    pub search: SearchConfig,

    /// Maximum moves before the match is called off.
    pub max_turns: usize,

    /// Seed for random agents (each side gets its own fork).
    pub seed: u64,

    /// Agent playing the tigers.
    pub tiger: AgentKind,

    /// Agent playing the goats.
    pub goat: AgentKind,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            rules: RulesConfig::default(),
            search: SearchConfig::default(),
            max_turns: 100,
            seed: 42,
            tiger: AgentKind::Minimax,
            goat: AgentKind::Random,
        }
    }
}

impl MatchConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from a JSON file. Missing keys keep their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| Error::Io {
            operation: format!("read match config {}", path.display()),
            source,
        })?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Set maximum moves per match.
    pub fn with_max_turns(mut self, max: usize) -> Self {
        self.max_turns = max;
        self
    }

    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the search depth for minimax agents.
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.search.depth = depth;
        self
    }

    /// Set both agents.
    pub fn with_agents(mut self, tiger: AgentKind, goat: AgentKind) -> Self {
        self.tiger = tiger;
        self.goat = goat;
        self
    }
}

/// How a match ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchEnd {
    /// The rules declared a winner.
    Winner(Side),
    /// The side to move had no move without that being a loss (goats only).
    Stalled(Side),
    /// `max_turns` moves were played.
    TurnLimit,
}

/// Result of a finished match.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MatchReport {
    pub end: MatchEnd,
    pub turns: usize,
    pub moves: Vec<Move>,
    pub final_state: GameState,
}

impl MatchReport {
    /// Winning side, if the rules decided the game.
    #[must_use]
    pub fn winner(&self) -> Option<Side> {
        match self.end {
            MatchEnd::Winner(side) => Some(side),
            _ => None,
        }
    }
}

/// Plays matches under one rules engine.
pub struct MatchRunner<E: RulesEngine> {
    engine: E,
    max_turns: usize,
}

impl<E: RulesEngine + Clone + 'static> MatchRunner<E> {
    pub fn new(engine: E, max_turns: usize) -> Self {
        Self { engine, max_turns }
    }

    /// Apply `config.rules` to `engine`, build both agents from `config`
    /// and play.
    pub fn run_configured(engine: E, config: &MatchConfig) -> Result<MatchReport> {
        let engine = engine.with_rules(config.rules.clone());
        let mut rng = GameRng::new(config.seed);
        let mut tiger = config.tiger.build(&engine, &config.search, rng.fork());
        let mut goat = config.goat.build(&engine, &config.search, rng.fork());

        Self::new(engine, config.max_turns).play(tiger.as_mut(), goat.as_mut())
    }

    /// Play one game from the start position.
    ///
    /// Fails only if an agent proposes an illegal move.
    pub fn play(&self, tiger: &mut dyn Agent, goat: &mut dyn Agent) -> Result<MatchReport> {
        self.play_from(self.engine.new_state(), tiger, goat)
    }

    /// Play from an arbitrary position.
    pub fn play_from(
        &self,
        mut state: GameState,
        tiger: &mut dyn Agent,
        goat: &mut dyn Agent,
    ) -> Result<MatchReport> {
        let mut moves = Vec::new();

        let end = loop {
            if let Some(winner) = self.engine.check_winner(&state) {
                break MatchEnd::Winner(winner);
            }
            if moves.len() >= self.max_turns {
                break MatchEnd::TurnLimit;
            }

            let side = state.turn();
            let agent: &mut dyn Agent = match side {
                Side::Tiger => &mut *tiger,
                Side::Goat => &mut *goat,
            };

            let Some(mv) = agent.select_move(&state) else {
                break MatchEnd::Stalled(side);
            };
            debug!(turn = moves.len() + 1, %side, agent = agent.name(), %mv, "move");

            self.engine.apply_move(&mut state, mv).map_err(Error::from)?;
            moves.push(mv);
        };

        info!(
            ?end,
            turns = moves.len(),
            captured = state.goats_captured(),
            placed = state.goats_placed(),
            "match finished"
        );

        Ok(MatchReport {
            end,
            turns: moves.len(),
            moves,
            final_state: state,
        })
    }
}
