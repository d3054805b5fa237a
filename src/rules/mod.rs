//! Rules engine trait for board implementations.
//!
//! `RulesEngine` defines:
//! - Legal moves for each game state
//! - How moves modify state
//! - Win conditions
//!
//! The search calls into `RulesEngine` and never looks at the board
//! topology itself.

pub mod engine;

pub use engine::RulesEngine;
