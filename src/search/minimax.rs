//! Depth-limited minimax with alpha-beta pruning.
//!
//! Tigers maximise, goats minimise. Every child is explored on its own
//! clone of the state, so the caller's state is never touched.

use std::time::Instant;

use tracing::{debug, instrument};

use crate::core::{GameState, Move, Side};
use crate::rules::RulesEngine;

use super::config::SearchConfig;
use super::eval::{evaluate, terminal_score, WIN_SCORE};
use super::stats::SearchStats;

/// Outcome of a root search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchResult {
    /// Best move found, if any.
    pub best_move: Option<Move>,
    /// Minimax value of the best move.
    pub score: Option<i32>,
    /// Depth the root was searched to.
    pub depth: u32,
}

impl SearchResult {
    fn none(depth: u32) -> Self {
        Self {
            best_move: None,
            score: None,
            depth,
        }
    }
}

/// Minimax search context.
///
/// Generic over the rules engine. Holds the configuration and the
/// statistics of the last search.
#[derive(Clone, Debug)]
pub struct Minimax<E: RulesEngine> {
    engine: E,
    config: SearchConfig,
    stats: SearchStats,
}

impl<E: RulesEngine> Minimax<E> {
    pub fn new(engine: E, config: SearchConfig) -> Self {
        Self {
            engine,
            config,
            stats: SearchStats::default(),
        }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Statistics of the most recent search.
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Best move for `side`, or `None` if it has no legal move here.
    pub fn best_move(&mut self, state: &GameState, side: Side) -> Option<Move> {
        self.search(state, side).best_move
    }

    /// Search the root and report the chosen move with its value.
    ///
    /// Moves are tried in generation order and a later move replaces the
    /// current best only when strictly better, so equal inputs always give
    /// the same answer. A `side` that is not to move has no legal move.
    #[instrument(level = "debug", skip_all, fields(side = %side, depth = self.config.depth))]
    pub fn search(&mut self, state: &GameState, side: Side) -> SearchResult {
        let start = Instant::now();
        self.stats.reset();

        let depth = self.config.depth.max(1);
        if state.turn() != side {
            debug!(turn = %state.turn(), "not this side's turn");
            return SearchResult::none(depth);
        }

        let moves = self.engine.generate_moves(state);
        if moves.is_empty() {
            debug!("no legal moves");
            return SearchResult::none(depth);
        }

        let maximizing = side.is_maximizing();
        let mut best_value = if maximizing { i32::MIN } else { i32::MAX };
        let mut best_move = None;
        let mut alpha = i32::MIN;
        let mut beta = i32::MAX;

        for mv in moves {
            let Ok(child) = self.engine.play(state, mv) else {
                continue;
            };
            let value = self.minimax(&child, depth - 1, alpha, beta, !maximizing);

            if maximizing {
                if value > best_value {
                    best_value = value;
                    best_move = Some(mv);
                }
                alpha = alpha.max(best_value);
            } else {
                if value < best_value {
                    best_value = value;
                    best_move = Some(mv);
                }
                beta = beta.min(best_value);
            }

            if beta <= alpha {
                self.stats.cutoffs += 1;
                break;
            }
        }

        self.stats.time_us = start.elapsed().as_micros() as u64;
        debug!(
            best = ?best_move,
            score = best_value,
            nodes = self.stats.nodes,
            cutoffs = self.stats.cutoffs,
            "search finished"
        );

        SearchResult {
            best_move,
            score: best_move.map(|_| best_value),
            depth,
        }
    }

    fn minimax(
        &mut self,
        state: &GameState,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> i32 {
        self.stats.nodes += 1;

        // Decided games beat the horizon.
        if let Some(winner) = self.engine.check_winner(state) {
            return terminal_score(winner);
        }

        if depth == 0 || self.budget_exhausted() {
            self.stats.evaluations += 1;
            return evaluate(&self.engine, state);
        }

        let moves = self.engine.generate_moves(state);
        if moves.is_empty() {
            return match state.turn() {
                Side::Tiger => -WIN_SCORE,
                Side::Goat => 0,
            };
        }

        if maximizing {
            let mut max_eval = i32::MIN;
            for mv in moves {
                let Ok(child) = self.engine.play(state, mv) else {
                    continue;
                };
                let eval = self.minimax(&child, depth - 1, alpha, beta, false);
                max_eval = max_eval.max(eval);
                alpha = alpha.max(eval);
                if beta <= alpha {
                    self.stats.cutoffs += 1;
                    break;
                }
            }
            max_eval
        } else {
            let mut min_eval = i32::MAX;
            for mv in moves {
                let Ok(child) = self.engine.play(state, mv) else {
                    continue;
                };
                let eval = self.minimax(&child, depth - 1, alpha, beta, true);
                min_eval = min_eval.min(eval);
                beta = beta.min(eval);
                if beta <= alpha {
                    self.stats.cutoffs += 1;
                    break;
                }
            }
            min_eval
        }
    }

    fn budget_exhausted(&mut self) -> bool {
        match self.config.max_nodes {
            Some(max) if self.stats.nodes >= max => {
                self.stats.budget_exhausted = true;
                true
            }
            _ => false,
        }
    }
}

/// One-shot search: best move for `side` at `depth`.
pub fn best_move<E: RulesEngine + Clone>(
    engine: &E,
    state: &GameState,
    side: Side,
    depth: u32,
) -> Option<Move> {
    Minimax::new(engine.clone(), SearchConfig::default().with_depth(depth)).best_move(state, side)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::StateBuilder;
    use crate::games::AaduPuli;

    fn search(depth: u32) -> Minimax<AaduPuli> {
        Minimax::new(AaduPuli::standard(), SearchConfig::default().with_depth(depth))
    }

    #[test]
    fn test_returns_legal_tiger_move() {
        let game = AaduPuli::standard();
        let state = game.play(&game.new_state(), Move::place(1)).unwrap();

        let mv = search(2).best_move(&state, Side::Tiger).unwrap();
        assert!(game.generate_moves(&state).contains(&mv));
        assert!(matches!(mv, Move::MoveSimple { .. } | Move::Capture { .. }));
    }

    #[test]
    fn test_depth_one_prefers_most_mobile_step() {
        let game = AaduPuli::standard();
        let state = game.play(&game.new_state(), Move::place(1)).unwrap();

        // 3->9 and 4->10 both leave ten empty cells next to the tigers;
        // the first of equals is kept.
        let result = search(1).search(&state, Side::Tiger);
        assert_eq!(result.best_move, Some(Move::step(3, 9)));
        assert_eq!(result.score, Some(100));
    }

    #[test]
    fn test_winning_capture_found() {
        let game = AaduPuli::standard();
        let state = StateBuilder::new()
            .goats(&[2])
            .goats_captured(4)
            .turn(Side::Tiger)
            .build(game.board())
            .unwrap();

        for depth in 1..=3 {
            let result = search(depth).search(&state, Side::Tiger);
            assert_eq!(result.score, Some(WIN_SCORE));
            assert!(result.best_move.unwrap().is_capture());
        }
    }

    #[test]
    fn test_no_moves_returns_none() {
        let game = AaduPuli::standard();
        let state = StateBuilder::new()
            .goats(&[1, 2, 5, 6, 8, 9, 10, 11, 15, 16])
            .turn(Side::Tiger)
            .build(game.board())
            .unwrap();

        assert_eq!(search(3).best_move(&state, Side::Tiger), None);
    }

    #[test]
    fn test_wrong_side_returns_none() {
        let game = AaduPuli::standard();
        assert_eq!(search(2).best_move(&game.new_state(), Side::Tiger), None);
    }

    #[test]
    fn test_state_untouched() {
        let game = AaduPuli::standard();
        let state = game.play(&game.new_state(), Move::place(9)).unwrap();
        let before = state.clone();

        search(3).best_move(&state, Side::Tiger);
        assert_eq!(state, before);
    }

    #[test]
    fn test_depth_zero_acts_like_depth_one() {
        let game = AaduPuli::standard();
        let state = game.play(&game.new_state(), Move::place(1)).unwrap();

        assert_eq!(
            search(0).best_move(&state, Side::Tiger),
            search(1).best_move(&state, Side::Tiger)
        );
    }

    #[test]
    fn test_node_budget_still_answers() {
        let game = AaduPuli::standard();
        let state = game.play(&game.new_state(), Move::place(1)).unwrap();

        let mut limited = Minimax::new(
            AaduPuli::standard(),
            SearchConfig::default().with_depth(4).with_max_nodes(10),
        );
        let mv = limited.best_move(&state, Side::Tiger).unwrap();
        assert!(game.generate_moves(&state).contains(&mv));
        assert!(limited.stats().budget_exhausted);
    }

    #[test]
    fn test_stats_recorded() {
        let game = AaduPuli::standard();
        let state = game.new_state();
        let mut minimax = search(2);

        minimax.best_move(&state, Side::Goat);
        assert!(minimax.stats().nodes > 0);
        assert!(minimax.stats().evaluations > 0);
    }

    #[test]
    fn test_free_function() {
        let game = AaduPuli::standard();
        let state = game.new_state();
        let mv = best_move(&game, &state, Side::Goat, 1).unwrap();
        assert!(matches!(mv, Move::Place { .. }));
    }
}
