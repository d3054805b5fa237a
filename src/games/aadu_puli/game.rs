//! Aadu Puli Aattam rules.

use std::sync::Arc;

use tracing::trace;

use crate::board::Board;
use crate::core::{GameState, Move, Occupant, Position, RulesConfig, Side};
use crate::error::IllegalMove;
use crate::rules::RulesEngine;

/// Tigers and Goats rules engine.
///
/// Holds only the shared board and the rules parameters; all mutable game
/// data lives in the `GameState` passed to each call.
#[derive(Clone, Debug)]
pub struct AaduPuli {
    board: Arc<Board>,
    config: RulesConfig,
}

impl Default for AaduPuli {
    fn default() -> Self {
        Self::standard()
    }
}

impl AaduPuli {
    /// Standard board, standard rules.
    pub fn standard() -> Self {
        Self::new(Board::standard(), RulesConfig::default())
    }

    /// Rules on a custom topology.
    pub fn new(board: Arc<Board>, config: RulesConfig) -> Self {
        Self { board, config }
    }

    /// Same board, different rules parameters.
    pub fn with_config(mut self, config: RulesConfig) -> Self {
        self.config = config;
        self
    }

    /// Shared handle to the board.
    pub fn shared_board(&self) -> Arc<Board> {
        Arc::clone(&self.board)
    }

    fn require_piece(state: &GameState, at: Position, side: Side) -> Result<(), IllegalMove> {
        if state[at].is(side) {
            Ok(())
        } else {
            Err(IllegalMove::NotOwnPiece { at, side })
        }
    }

    fn require_empty(state: &GameState, at: Position) -> Result<(), IllegalMove> {
        if state.is_empty(at) {
            Ok(())
        } else {
            Err(IllegalMove::Occupied { at })
        }
    }
}

impl RulesEngine for AaduPuli {
    fn board(&self) -> &Board {
        &self.board
    }

    fn config(&self) -> &RulesConfig {
        &self.config
    }

    fn with_rules(&self, config: RulesConfig) -> Self {
        self.clone().with_config(config)
    }

    fn generate_moves(&self, state: &GameState) -> Vec<Move> {
        let mut moves = Vec::new();

        match state.turn() {
            Side::Goat if state.is_phase_one() => {
                moves.extend(state.empty_cells().map(|to| Move::Place { to }));
            }
            Side::Goat => {
                for from in state.pieces(Side::Goat) {
                    for &to in self.board.neighbors(from) {
                        if state.is_empty(to) {
                            moves.push(Move::MoveSimple { from, to });
                        }
                    }
                }
            }
            Side::Tiger => {
                for from in state.pieces(Side::Tiger) {
                    for &to in self.board.neighbors(from) {
                        if state.is_empty(to) {
                            moves.push(Move::MoveSimple { from, to });
                        }
                    }
                    for jump in self.board.jumps_from(from) {
                        let over_goat = state.get(jump.over) == Some(Occupant::Goat);
                        if over_goat && state.is_empty(jump.to) {
                            moves.push(Move::Capture {
                                from,
                                over: jump.over,
                                to: jump.to,
                            });
                        }
                    }
                }
            }
        }

        moves
    }

    fn validate(&self, state: &GameState, mv: &Move) -> Result<(), IllegalMove> {
        if let Some(at) = mv.cells().find(|&p| state.get(p).is_none()) {
            return Err(IllegalMove::OffBoard { at });
        }

        let side = state.turn();
        if mv.actor().is_some_and(|actor| actor != side) {
            return Err(IllegalMove::WrongSide {
                side,
                kind: mv.kind(),
            });
        }

        match *mv {
            Move::Place { to } => {
                if !state.is_phase_one() {
                    return Err(IllegalMove::WrongPhase {
                        kind: mv.kind(),
                        phase: state.phase(),
                    });
                }
                Self::require_empty(state, to)
            }
            Move::MoveSimple { from, to } => {
                // Goats may only step once every goat has been placed.
                if side == Side::Goat && state.is_phase_one() {
                    return Err(IllegalMove::WrongPhase {
                        kind: mv.kind(),
                        phase: state.phase(),
                    });
                }
                Self::require_piece(state, from, side)?;
                Self::require_empty(state, to)?;
                if !self.board.is_adjacent(from, to) {
                    return Err(IllegalMove::NotAdjacent { from, to });
                }
                Ok(())
            }
            Move::Capture { from, over, to } => {
                Self::require_piece(state, from, side)?;
                Self::require_empty(state, to)?;
                if !self.board.is_jump(from, over, to) {
                    return Err(IllegalMove::NotAJump { from, over, to });
                }
                if state[over] != Occupant::Goat {
                    return Err(IllegalMove::NoCaptureTarget { over });
                }
                Ok(())
            }
        }
    }

    fn apply_move(&self, state: &mut GameState, mv: Move) -> Result<(), IllegalMove> {
        if let Err(err) = self.validate(state, &mv) {
            trace!(%mv, %err, turn = %state.turn(), "rejected move");
            return Err(err);
        }

        match mv {
            Move::Place { to } => {
                state.set(to, Occupant::Goat);
                state.record_placement();
            }
            Move::MoveSimple { from, to } => {
                let piece = state[from];
                state.set(from, Occupant::Empty);
                state.set(to, piece);
            }
            Move::Capture { from, over, to } => {
                state.set(from, Occupant::Empty);
                state.set(over, Occupant::Empty);
                state.set(to, Occupant::Tiger);
                state.record_capture();
            }
        }

        state.finish_move(mv);
        Ok(())
    }

    fn check_winner(&self, state: &GameState) -> Option<Side> {
        if state.goats_captured() >= state.capture_threshold() {
            return Some(Side::Tiger);
        }

        // Only tigers can be blocked; a goat with no move is not a loss.
        if state.turn() == Side::Tiger && self.generate_moves(state).is_empty() {
            return Some(Side::Goat);
        }

        None
    }
}
