//! Adversarial search for move selection.
//!
//! ## Overview
//!
//! Depth-limited minimax with alpha-beta pruning over any `RulesEngine`:
//!
//! - **Tigers maximise, goats minimise**: one evaluation scale, positive
//!   favours tigers
//! - **Decided games override the horizon**: a tiger win scores `+10000`,
//!   a goat win `-10000`
//! - **Deterministic**: fixed move order and first-of-equals tie-breaking
//! - **Non-mutating**: every child is explored on an owned clone
//!
//! ## Usage
//!
//! ```rust
//! use aadu_puli::core::{Move, Side};
//! use aadu_puli::games::AaduPuli;
//! use aadu_puli::rules::RulesEngine;
//! use aadu_puli::search::{Minimax, SearchConfig};
//!
//! let game = AaduPuli::standard();
//! let state = game.play(&game.new_state(), Move::place(1)).unwrap();
//!
//! let mut search = Minimax::new(game, SearchConfig::default().with_depth(2));
//! if let Some(mv) = search.best_move(&state, Side::Tiger) {
//!     println!("Tiger plays {mv} after {} nodes", search.stats().nodes);
//! }
//! ```

pub mod config;
pub mod eval;
pub mod minimax;
pub mod stats;

// Re-export main types
pub use config::SearchConfig;
pub use eval::{evaluate, terminal_score, CAPTURE_WEIGHT, MOBILITY_WEIGHT, WIN_SCORE};
pub use minimax::{best_move, Minimax, SearchResult};
pub use stats::SearchStats;
