//! Static evaluation.
//!
//! Scores are from the tigers' point of view: positive favours tigers,
//! negative favours goats.

use crate::core::{GameState, Side};
use crate::rules::RulesEngine;

/// Score of a decided game.
pub const WIN_SCORE: i32 = 10_000;

/// Weight of each captured goat.
pub const CAPTURE_WEIGHT: i32 = 100;

/// Weight of each empty cell next to a tiger.
pub const MOBILITY_WEIGHT: i32 = 10;

/// Horizon score: `100 * captured + 10 * tiger step mobility`.
///
/// Available captures are not counted and goats get no positional term.
pub fn evaluate<E: RulesEngine + ?Sized>(engine: &E, state: &GameState) -> i32 {
    let captured = i32::from(state.goats_captured());
    let mobility = engine.simple_mobility(state, Side::Tiger) as i32;
    CAPTURE_WEIGHT * captured + MOBILITY_WEIGHT * mobility
}

/// Score of a position won by `winner`.
#[must_use]
pub const fn terminal_score(winner: Side) -> i32 {
    match winner {
        Side::Tiger => WIN_SCORE,
        Side::Goat => -WIN_SCORE,
    }
}
