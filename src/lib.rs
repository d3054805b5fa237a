//! # aadu-puli
//!
//! Rules engine and game-tree search for Aadu Puli Attam ("goats and
//! tigers"), a hunt game played on a 23-cell triangular board.
//!
//! ## Design Principles
//!
//! 1. **Topology as data**: adjacency and jump lines are tables built once
//!    and shared; the rules never hardcode cell numbers.
//!
//! 2. **Explicit state**: a `GameState` is a plain value threaded through
//!    every call. Nothing is global.
//!
//! 3. **Pure application for search**: `RulesEngine::play` returns a new
//!    state and leaves the input alone, so the search explores owned clones.
//!
//! ## Modules
//!
//! - `core`: positions, sides, moves, state, configuration, RNG
//! - `board`: board topology and the standard 23-cell layout
//! - `rules`: `RulesEngine` trait
//! - `games`: the Aadu Puli rules
//! - `search`: minimax with alpha-beta pruning and the static evaluator
//! - `play`: agents and the match runner
//! - `wire`: move requests, state views and snapshots for adapters
//! - `error`: error types
//!
//! ## Quick start
//!
//! ```rust
//! use aadu_puli::{apply_move, best_move, check_winner, generate_moves, new_state, Side};
//!
//! let state = new_state();
//! let goat = generate_moves(&state)[0];
//! let state = apply_move(&state, goat).unwrap();
//!
//! let reply = best_move(&state, Side::Tiger, 2).unwrap();
//! let state = apply_move(&state, reply).unwrap();
//! assert_eq!(check_winner(&state), None);
//! ```

pub mod board;
pub mod core;
pub mod error;
pub mod games;
pub mod play;
pub mod rules;
pub mod search;
pub mod wire;

// Re-export commonly used types
pub use crate::board::{Board, BoardBuilder, Jump};
pub use crate::core::{
    GameRng, GameState, Move, Occupant, Position, RulesConfig, Side, StateBuilder,
};
pub use crate::error::{Error, IllegalMove, Result};
pub use crate::games::AaduPuli;
pub use crate::play::{Agent, AgentKind, MatchConfig, MatchEnd, MatchReport, MatchRunner};
pub use crate::rules::RulesEngine;
pub use crate::search::{Minimax, SearchConfig, SearchResult, SearchStats};
pub use crate::wire::{MoveRequest, StateView};

// =============================================================================
// Standard-game shortcuts
// =============================================================================

/// Fresh game on the standard board with default rules.
pub fn new_state() -> GameState {
    AaduPuli::standard().new_state()
}

/// Legal moves for the side to move, under the standard rules.
pub fn generate_moves(state: &GameState) -> Vec<Move> {
    AaduPuli::standard().generate_moves(state)
}

/// Apply `mv` to a copy of `state` under the standard rules.
///
/// The input state is never modified, including on error.
pub fn apply_move(state: &GameState, mv: Move) -> std::result::Result<GameState, IllegalMove> {
    AaduPuli::standard().play(state, mv)
}

/// Winner under the standard rules, if decided.
pub fn check_winner(state: &GameState) -> Option<Side> {
    AaduPuli::standard().check_winner(state)
}

/// Minimax choice for `side` at `depth` under the standard rules.
pub fn best_move(state: &GameState, side: Side, depth: u32) -> Option<Move> {
    search::best_move(&AaduPuli::standard(), state, side, depth)
}
