//! Move-choosing agents.
//!
//! Agents are trait-based so a match can pit any two against each other:
//! - `MinimaxAgent`: alpha-beta search
//! - `RandomAgent`: uniform over legal moves, optionally capture-greedy

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::core::{GameRng, GameState, Move};
use crate::rules::RulesEngine;
use crate::search::{Minimax, SearchConfig, SearchStats};

// =============================================================================
// Agent
// =============================================================================

/// Something that picks a move for the side to move.
pub trait Agent {
    /// Short name for logs.
    fn name(&self) -> &str;

    /// Pick a move for `state.turn()`, or `None` if there is none.
    fn select_move(&mut self, state: &GameState) -> Option<Move>;
}

/// Agent flavours selectable from config files and the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum AgentKind {
    /// Alpha-beta search.
    Minimax,
    /// Uniformly random legal move.
    Random,
    /// Random, but always captures when it can.
    Greedy,
}

impl AgentKind {
    /// Instantiate an agent of this kind.
    pub fn build<E>(self, engine: &E, search: &SearchConfig, rng: GameRng) -> Box<dyn Agent>
    where
        E: RulesEngine + Clone + 'static,
    {
        match self {
            AgentKind::Minimax => Box::new(MinimaxAgent::new(engine.clone(), search.clone())),
            AgentKind::Random => Box::new(RandomAgent::new(engine.clone(), rng)),
            AgentKind::Greedy => {
                Box::new(RandomAgent::new(engine.clone(), rng).prefer_captures(true))
            }
        }
    }
}

// =============================================================================
// Minimax
// =============================================================================

/// Plays the minimax choice for whichever side is to move.
pub struct MinimaxAgent<E: RulesEngine> {
    search: Minimax<E>,
}

impl<E: RulesEngine> MinimaxAgent<E> {
    pub fn new(engine: E, config: SearchConfig) -> Self {
        Self {
            search: Minimax::new(engine, config),
        }
    }

    /// Statistics of the last search.
    pub fn last_stats(&self) -> &SearchStats {
        self.search.stats()
    }
}

impl<E: RulesEngine> Agent for MinimaxAgent<E> {
    fn name(&self) -> &str {
        "minimax"
    }

    fn select_move(&mut self, state: &GameState) -> Option<Move> {
        self.search.best_move(state, state.turn())
    }
}

// =============================================================================
// Random
// =============================================================================

/// Picks uniformly among legal moves with a seeded RNG.
pub struct RandomAgent<E: RulesEngine> {
    engine: E,
    rng: GameRng,
    prefer_captures: bool,
}

impl<E: RulesEngine> RandomAgent<E> {
    pub fn new(engine: E, rng: GameRng) -> Self {
        Self {
            engine,
            rng,
            prefer_captures: false,
        }
    }

    /// Restrict the choice to captures whenever one is available.
    pub fn prefer_captures(mut self, prefer: bool) -> Self {
        self.prefer_captures = prefer;
        self
    }
}

impl<E: RulesEngine> Agent for RandomAgent<E> {
    fn name(&self) -> &str {
        if self.prefer_captures {
            "greedy"
        } else {
            "random"
        }
    }

    fn select_move(&mut self, state: &GameState) -> Option<Move> {
        let moves = self.engine.generate_moves(state);

        if self.prefer_captures {
            let captures: Vec<Move> = moves.iter().copied().filter(Move::is_capture).collect();
            if !captures.is_empty() {
                return self.rng.choose(&captures).copied();
            }
        }

        self.rng.choose(&moves).copied()
    }
}
