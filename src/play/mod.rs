//! Playing whole games.
//!
//! An `Agent` picks moves; a `MatchRunner` alternates two agents under a
//! rules engine until the rules declare a winner, the side to move is
//! stuck, or the turn limit is hit.

pub mod agent;
pub mod runner;

pub use agent::{Agent, AgentKind, MinimaxAgent, RandomAgent};
pub use runner::{MatchConfig, MatchEnd, MatchReport, MatchRunner};
