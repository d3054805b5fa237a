//! Core value types: positions, sides, moves, state, configuration, RNG.
//!
//! Everything here is plain data. Legality lives in `rules`, geometry in
//! `board`.

pub mod position;
pub mod side;
pub mod action;
pub mod config;
pub mod state;
pub mod rng;

pub use position::Position;
pub use side::{Occupant, Side};
pub use action::Move;
pub use config::{RulesConfig, TIGER_COUNT};
pub use state::{GameState, StateBuilder};
pub use rng::GameRng;
