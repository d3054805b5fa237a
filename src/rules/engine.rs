//! Rules engine trait.
//!
//! Implementations define:
//! - What moves are legal for the side to move
//! - How a move changes the state
//! - When the game is won
//!
//! The search only ever talks to this trait, never to the board directly.

use crate::board::Board;
use crate::core::{GameState, Move, RulesConfig, Side};
use crate::error::IllegalMove;

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `generate_moves`: deterministic order; empty if the side to move is stuck
/// - `apply_move`: all-or-nothing; a rejected move leaves the state untouched
/// - `check_winner`: `None` while the game continues
pub trait RulesEngine {
    /// The topology this engine plays on.
    fn board(&self) -> &Board;

    /// Rules used for new games.
    fn config(&self) -> &RulesConfig;

    /// The same engine playing under `config`.
    fn with_rules(&self, config: RulesConfig) -> Self
    where
        Self: Sized;

    /// Fresh game state.
    fn new_state(&self) -> GameState {
        GameState::new(self.board(), self.config())
    }

    /// Every legal move for the side to move.
    fn generate_moves(&self, state: &GameState) -> Vec<Move>;

    /// Check a move against the rules without applying it.
    fn validate(&self, state: &GameState, mv: &Move) -> Result<(), IllegalMove>;

    /// Apply a move in place and pass the turn.
    fn apply_move(&self, state: &mut GameState, mv: Move) -> Result<(), IllegalMove>;

    /// Winner of the game, if decided.
    fn check_winner(&self, state: &GameState) -> Option<Side>;

    // === Convenience Methods ===

    /// Apply a move to a copy of `state`.
    ///
    /// Used wherever the caller's state must not change (the search, "what
    /// if" queries from an adapter).
    fn play(&self, state: &GameState, mv: Move) -> Result<GameState, IllegalMove> {
        let mut next = state.clone();
        self.apply_move(&mut next, mv)?;
        Ok(next)
    }

    /// Is the move legal in this state?
    fn is_legal(&self, state: &GameState, mv: &Move) -> bool {
        self.validate(state, mv).is_ok()
    }

    /// Has the game ended?
    fn is_terminal(&self, state: &GameState) -> bool {
        self.check_winner(state).is_some()
    }

    /// Empty cells adjacent to `side`'s pieces, counted once per piece.
    ///
    /// Jumps are not counted.
    fn simple_mobility(&self, state: &GameState, side: Side) -> usize {
        let board = self.board();
        state
            .pieces(side)
            .map(|p| board.neighbors(p).iter().filter(|&&n| state.is_empty(n)).count())
            .sum()
    }
}
