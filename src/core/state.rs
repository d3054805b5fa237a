//! Game state.
//!
//! ## GameState
//!
//! Complete, self-describing state of one game:
//! - Occupancy of every cell
//! - Side to move
//! - Goats placed and captured, plus the rules limits they are checked against
//! - Moves applied so far
//!
//! The phase is derived: phase one lasts while `goats_placed < max_goats`.
//! Cloning is a deep value copy; the move history uses an `im` vector so a
//! clone stays O(1) in the history length, which matters during search.
//!
//! ## StateBuilder
//!
//! Builds validated custom positions for tests and adapters.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::ops::Index;

use super::action::Move;
use super::config::{RulesConfig, TIGER_COUNT};
use super::position::Position;
use super::side::{Occupant, Side};
use crate::board::Board;
use crate::error::{Error, Result};

/// Complete game state.
///
/// Deserializing checks the piece counts but cannot know the board; call
/// `validate` before playing a decoded state on a particular topology.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StateRepr")]
pub struct GameState {
    cells: SmallVec<[Occupant; 32]>,
    turn: Side,
    goats_placed: u8,
    goats_captured: u8,
    max_goats: u8,
    capture_threshold: u8,
    history: Vector<Move>,
}

impl GameState {
    /// Fresh game: tigers on the board's start cells, everything else
    /// empty, goats to move.
    #[must_use]
    pub fn new(board: &Board, config: &RulesConfig) -> Self {
        let mut cells: SmallVec<[Occupant; 32]> =
            SmallVec::from_elem(Occupant::Empty, board.node_count());
        for start in board.tiger_starts() {
            cells[start.index()] = Occupant::Tiger;
        }

        Self {
            cells,
            turn: Side::Goat,
            goats_placed: 0,
            goats_captured: 0,
            max_goats: config.max_goats,
            capture_threshold: config.capture_threshold,
            history: Vector::new(),
        }
    }

    /// Fresh game on the standard board with the standard rules.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(&Board::standard(), &RulesConfig::default())
    }

    // === Occupancy ===

    /// Number of cells.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.cells.len()
    }

    /// Occupant of `p`, or `None` if `p` is off the board.
    #[must_use]
    pub fn get(&self, p: Position) -> Option<Occupant> {
        self.cells.get(p.index()).copied()
    }

    /// Is `p` an empty cell on the board?
    #[must_use]
    pub fn is_empty(&self, p: Position) -> bool {
        self.get(p) == Some(Occupant::Empty)
    }

    /// Every cell's occupant, indexed by position.
    #[must_use]
    pub fn cells(&self) -> &[Occupant] {
        &self.cells
    }

    /// Cells holding a piece of `side`, ascending.
    pub fn pieces(&self, side: Side) -> impl Iterator<Item = Position> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(move |(_, o)| o.is(side))
            .map(|(i, _)| Position(i as u8))
    }

    /// Empty cells, ascending.
    pub fn empty_cells(&self) -> impl Iterator<Item = Position> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, o)| o.is_empty())
            .map(|(i, _)| Position(i as u8))
    }

    // === Progression ===

    /// Side to move.
    #[must_use]
    pub fn turn(&self) -> Side {
        self.turn
    }

    #[must_use]
    pub fn goats_placed(&self) -> u8 {
        self.goats_placed
    }

    #[must_use]
    pub fn goats_captured(&self) -> u8 {
        self.goats_captured
    }

    #[must_use]
    pub fn max_goats(&self) -> u8 {
        self.max_goats
    }

    #[must_use]
    pub fn capture_threshold(&self) -> u8 {
        self.capture_threshold
    }

    /// Goats still waiting to be placed.
    #[must_use]
    pub fn goats_in_hand(&self) -> u8 {
        self.max_goats.saturating_sub(self.goats_placed)
    }

    /// Goats currently on the board.
    #[must_use]
    pub fn goats_on_board(&self) -> usize {
        self.pieces(Side::Goat).count()
    }

    /// Goats are still placing.
    #[must_use]
    pub fn is_phase_one(&self) -> bool {
        self.goats_placed < self.max_goats
    }

    /// 1 while goats are placing, 2 afterwards.
    #[must_use]
    pub fn phase(&self) -> u8 {
        if self.is_phase_one() {
            1
        } else {
            2
        }
    }

    /// Moves applied to this state, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<Move> {
        &self.history
    }

    /// Number of moves applied.
    #[must_use]
    pub fn ply(&self) -> usize {
        self.history.len()
    }

    // === Mutation (rules engine only) ===

    pub(crate) fn set(&mut self, p: Position, occupant: Occupant) {
        self.cells[p.index()] = occupant;
    }

    pub(crate) fn record_placement(&mut self) {
        self.goats_placed += 1;
    }

    pub(crate) fn record_capture(&mut self) {
        self.goats_captured += 1;
    }

    /// Append to history and hand the move to the other side.
    pub(crate) fn finish_move(&mut self, mv: Move) {
        self.history.push_back(mv);
        self.turn = self.turn.opponent();
    }

    // === Validation ===

    /// Check the state invariants against a board.
    ///
    /// - one cell per board node
    /// - exactly three tigers
    /// - goats on board + captured <= placed <= max_goats
    pub fn validate(&self, board: &Board) -> Result<()> {
        if self.cells.len() != board.node_count() {
            return Err(Error::setup(format!(
                "state has {} cells, board has {}",
                self.cells.len(),
                board.node_count()
            )));
        }
        self.check_counts()
    }

    fn check_counts(&self) -> Result<()> {
        let tigers = self.pieces(Side::Tiger).count();
        if tigers != TIGER_COUNT {
            return Err(Error::setup(format!(
                "expected {TIGER_COUNT} tigers, found {tigers}"
            )));
        }

        let accounted = self.goats_on_board() + self.goats_captured as usize;
        if accounted > self.goats_placed as usize {
            return Err(Error::setup(format!(
                "{accounted} goats on board or captured but only {} placed",
                self.goats_placed
            )));
        }
        if self.goats_placed > self.max_goats {
            return Err(Error::setup(format!(
                "{} goats placed, limit is {}",
                self.goats_placed, self.max_goats
            )));
        }

        Ok(())
    }
}

/// Unchecked field layout of `GameState` as decoded.
#[derive(Deserialize)]
struct StateRepr {
    cells: SmallVec<[Occupant; 32]>,
    turn: Side,
    goats_placed: u8,
    goats_captured: u8,
    max_goats: u8,
    capture_threshold: u8,
    history: Vector<Move>,
}

impl TryFrom<StateRepr> for GameState {
    type Error = Error;

    fn try_from(repr: StateRepr) -> Result<Self> {
        let state = GameState {
            cells: repr.cells,
            turn: repr.turn,
            goats_placed: repr.goats_placed,
            goats_captured: repr.goats_captured,
            max_goats: repr.max_goats,
            capture_threshold: repr.capture_threshold,
            history: repr.history,
        };
        state.check_counts()?;
        Ok(state)
    }
}

impl Index<Position> for GameState {
    type Output = Occupant;

    fn index(&self, p: Position) -> &Occupant {
        &self.cells[p.index()]
    }
}

/// Builder for custom positions.
///
/// ```
/// use aadu_puli::board::Board;
/// use aadu_puli::core::{Occupant, Position, Side, StateBuilder};
///
/// let state = StateBuilder::new()
///     .goats(&[2])
///     .turn(Side::Tiger)
///     .build(&Board::standard())
///     .unwrap();
///
/// assert_eq!(state[Position::new(2)], Occupant::Goat);
/// assert_eq!(state.goats_placed(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct StateBuilder {
    config: RulesConfig,
    tigers: Option<[u8; TIGER_COUNT]>,
    goats: Vec<u8>,
    turn: Side,
    goats_placed: Option<u8>,
    goats_captured: u8,
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self {
            config: RulesConfig::default(),
            tigers: None,
            goats: Vec::new(),
            turn: Side::Goat,
            goats_placed: None,
            goats_captured: 0,
        }
    }
}

impl StateBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rules(mut self, config: RulesConfig) -> Self {
        self.config = config;
        self
    }

    /// Tiger cells. Defaults to the board's start cells.
    pub fn tigers(mut self, tigers: [u8; TIGER_COUNT]) -> Self {
        self.tigers = Some(tigers);
        self
    }

    pub fn goats(mut self, goats: &[u8]) -> Self {
        self.goats = goats.to_vec();
        self
    }

    pub fn turn(mut self, turn: Side) -> Self {
        self.turn = turn;
        self
    }

    /// Goats placed so far. Defaults to goats on board plus captured.
    pub fn goats_placed(mut self, placed: u8) -> Self {
        self.goats_placed = Some(placed);
        self
    }

    pub fn goats_captured(mut self, captured: u8) -> Self {
        self.goats_captured = captured;
        self
    }

    /// Build and validate the position.
    pub fn build(self, board: &Board) -> Result<GameState> {
        let mut state = GameState::new(board, &self.config);
        for start in board.tiger_starts() {
            state.set(*start, Occupant::Empty);
        }

        let tigers = self
            .tigers
            .unwrap_or_else(|| board.tiger_starts().map(|p| p.0));
        let pieces = tigers
            .iter()
            .map(|&t| (t, Occupant::Tiger))
            .chain(self.goats.iter().map(|&g| (g, Occupant::Goat)));
        for (id, occupant) in pieces {
            let p = Position(id);
            match state.get(p) {
                None => return Err(Error::setup(format!("cell {p} is not on the board"))),
                Some(Occupant::Empty) => state.set(p, occupant),
                Some(_) => return Err(Error::setup(format!("cell {p} is listed twice"))),
            }
        }

        let default_placed = self.goats.len() + self.goats_captured as usize;
        state.goats_placed = match self.goats_placed {
            Some(placed) => placed,
            None => u8::try_from(default_placed)
                .map_err(|_| Error::setup(format!("{default_placed} goats is too many")))?,
        };
        state.goats_captured = self.goats_captured;
        state.turn = self.turn;

        state.validate(board)?;
        Ok(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_state() {
        let state = GameState::standard();

        assert_eq!(state.node_count(), 23);
        assert_eq!(state.turn(), Side::Goat);
        assert_eq!(state.goats_placed(), 0);
        assert_eq!(state.goats_captured(), 0);
        assert!(state.is_phase_one());
        assert_eq!(state.phase(), 1);
        assert_eq!(state.goats_in_hand(), 15);

        let tigers: Vec<_> = state.pieces(Side::Tiger).collect();
        assert_eq!(tigers, vec![Position(0), Position(3), Position(4)]);
        assert_eq!(state.empty_cells().count(), 20);
        assert!(state.history().is_empty());
    }

    #[test]
    fn test_clone_is_independent() {
        let original = GameState::standard();
        let mut copy = original.clone();
        copy.set(Position(1), Occupant::Goat);
        copy.finish_move(Move::place(1));

        assert!(original.is_empty(Position(1)));
        assert_eq!(original.turn(), Side::Goat);
        assert_eq!(original.ply(), 0);
        assert_eq!(copy.ply(), 1);
    }

    #[test]
    fn test_off_board_lookup() {
        let state = GameState::standard();
        assert_eq!(state.get(Position(23)), None);
        assert!(!state.is_empty(Position(99)));
    }

    #[test]
    fn test_builder_defaults_goats_placed() {
        let state = StateBuilder::new()
            .goats(&[1, 2, 7])
            .goats_captured(2)
            .build(&Board::standard())
            .unwrap();

        assert_eq!(state.goats_placed(), 5);
        assert_eq!(state.goats_on_board(), 3);
    }

    #[test]
    fn test_builder_custom_tigers() {
        let state = StateBuilder::new()
            .tigers([8, 14, 20])
            .turn(Side::Tiger)
            .build(&Board::standard())
            .unwrap();

        assert_eq!(state[Position(8)], Occupant::Tiger);
        assert!(state.is_empty(Position(0)));
        assert_eq!(state.turn(), Side::Tiger);
    }

    #[test]
    fn test_builder_rejects_overlap() {
        let result = StateBuilder::new().goats(&[3]).build(&Board::standard());
        assert!(matches!(result, Err(Error::InvalidSetup { .. })));
    }

    #[test]
    fn test_builder_rejects_off_board() {
        let result = StateBuilder::new().goats(&[30]).build(&Board::standard());
        assert!(matches!(result, Err(Error::InvalidSetup { .. })));
    }

    #[test]
    fn test_builder_rejects_bad_accounting() {
        let board = Board::standard();
        let too_few_placed = StateBuilder::new().goats(&[1, 2]).goats_placed(1).build(&board);
        assert!(too_few_placed.is_err());

        let over_budget = StateBuilder::new().goats_placed(16).build(&board);
        assert!(over_budget.is_err());
    }

    #[test]
    fn test_state_serialization() {
        let state = StateBuilder::new()
            .goats(&[1])
            .turn(Side::Tiger)
            .build(&Board::standard())
            .unwrap();
        let json = serde_json::to_string(&state).unwrap();
        let back: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, back);
    }

    #[test]
    fn test_deserialize_rejects_bad_counts() {
        let state = GameState::standard();
        let mut json = serde_json::to_value(&state).unwrap();
        json["cells"][0] = serde_json::json!("Empty");
        assert!(serde_json::from_value::<GameState>(json).is_err());

        let mut json = serde_json::to_value(&state).unwrap();
        json["goats_placed"] = serde_json::json!(40);
        assert!(serde_json::from_value::<GameState>(json).is_err());
    }

    #[test]
    fn test_short_state_decodes_but_fails_validation() {
        let mut json = serde_json::to_value(GameState::standard()).unwrap();
        json["cells"].as_array_mut().unwrap().truncate(6);

        let state: GameState = serde_json::from_value(json).unwrap();
        assert_eq!(state.node_count(), 6);
        assert!(matches!(
            state.validate(&Board::standard()),
            Err(Error::InvalidSetup { .. })
        ));
    }
}
