//! Boundary types for adapters.
//!
//! Adapters (HTTP handlers, UIs, tooling) exchange loosely-typed JSON and
//! opaque snapshots. Everything here is validated on the way in; the rules
//! and search only ever see a well-formed `Move` and a consistent
//! `GameState`.

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::core::{GameState, Move, Position, Side};
use crate::error::{Error, Result};
use crate::rules::RulesEngine;

// =============================================================================
// Move requests
// =============================================================================

/// Move category as spelled on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MoveKind {
    Place,
    Move,
    Capture,
}

/// Move as submitted by a client.
///
/// All position fields are optional here. Which ones must be present
/// depends on `kind`:
///
/// | kind      | from | to  | capture |
/// |-----------|------|-----|---------|
/// | `PLACE`   | no   | yes | no      |
/// | `MOVE`    | yes  | yes | no      |
/// | `CAPTURE` | yes  | yes | yes     |
///
/// `from_node`, `to_node` and `capture_node` are accepted as spellings of
/// the three position fields.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MoveRequest {
    #[serde(rename = "type")]
    pub kind: MoveKind,
    #[serde(default, alias = "from_node", skip_serializing_if = "Option::is_none")]
    pub from: Option<u8>,
    #[serde(default, alias = "to_node", skip_serializing_if = "Option::is_none")]
    pub to: Option<u8>,
    #[serde(default, alias = "capture_node", skip_serializing_if = "Option::is_none")]
    pub capture: Option<u8>,
}

fn required(field: Option<u8>, name: &str, kind: MoveKind) -> Result<u8> {
    field.ok_or_else(|| Error::malformed(format!("{kind:?} move needs `{name}`")))
}

fn forbidden(field: Option<u8>, name: &str, kind: MoveKind) -> Result<()> {
    match field {
        Some(value) => Err(Error::malformed(format!(
            "{kind:?} move does not take `{name}` (got {value})"
        ))),
        None => Ok(()),
    }
}

impl TryFrom<MoveRequest> for Move {
    type Error = Error;

    fn try_from(req: MoveRequest) -> Result<Move> {
        let kind = req.kind;
        let to = required(req.to, "to", kind)?;

        match kind {
            MoveKind::Place => {
                forbidden(req.from, "from", kind)?;
                forbidden(req.capture, "capture", kind)?;
                Ok(Move::place(to))
            }
            MoveKind::Move => {
                let from = required(req.from, "from", kind)?;
                forbidden(req.capture, "capture", kind)?;
                Ok(Move::step(from, to))
            }
            MoveKind::Capture => {
                let from = required(req.from, "from", kind)?;
                let over = required(req.capture, "capture", kind)?;
                Ok(Move::capture(from, over, to))
            }
        }
    }
}

impl From<Move> for MoveRequest {
    fn from(mv: Move) -> Self {
        match mv {
            Move::Place { to } => MoveRequest {
                kind: MoveKind::Place,
                from: None,
                to: Some(to.0),
                capture: None,
            },
            Move::MoveSimple { from, to } => MoveRequest {
                kind: MoveKind::Move,
                from: Some(from.0),
                to: Some(to.0),
                capture: None,
            },
            Move::Capture { from, over, to } => MoveRequest {
                kind: MoveKind::Capture,
                from: Some(from.0),
                to: Some(to.0),
                capture: Some(over.0),
            },
        }
    }
}

/// Parse a JSON move request into a `Move`.
///
/// Shape errors (unknown type, missing or extra fields) are `MalformedMove`;
/// anything that is not JSON at all is `Json`. Legality is not checked.
pub fn parse_move(json: &str) -> Result<Move> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    let req: MoveRequest =
        serde_json::from_value(value).map_err(|e| Error::malformed(e.to_string()))?;
    Move::try_from(req)
}

// =============================================================================
// State view
// =============================================================================

/// Read-only summary of a game for display.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateView {
    /// Occupant of every cell, indexed by position.
    pub board: Vec<Option<Side>>,
    pub turn: Side,
    pub goats_placed: u8,
    pub goats_captured: u8,
    pub winner: Option<Side>,
    pub valid_moves: Vec<Move>,
}

impl StateView {
    pub fn new<E: RulesEngine + ?Sized>(engine: &E, state: &GameState) -> Self {
        let winner = engine.check_winner(state);
        let valid_moves = if winner.is_some() {
            Vec::new()
        } else {
            engine.generate_moves(state)
        };

        Self {
            board: state.cells().iter().map(|o| o.side()).collect(),
            turn: state.turn(),
            goats_placed: state.goats_placed(),
            goats_captured: state.goats_captured(),
            winner,
            valid_moves,
        }
    }

    /// Occupant of a cell, `None` if empty or off the board.
    pub fn at(&self, p: Position) -> Option<Side> {
        self.board.get(p.index()).copied().flatten()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

// =============================================================================
// Snapshots
// =============================================================================

/// Encode a state as a compact binary snapshot.
pub fn snapshot(state: &GameState) -> Result<Vec<u8>> {
    Ok(bincode::serialize(state)?)
}

/// Decode a snapshot and check it is a consistent position on `board`.
pub fn restore(bytes: &[u8], board: &Board) -> Result<GameState> {
    let state: GameState = bincode::deserialize(bytes)?;
    state.validate(board)?;
    Ok(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::AaduPuli;

    #[test]
    fn test_parse_place() {
        let mv = parse_move(r#"{"type": "PLACE", "to": 5}"#).unwrap();
        assert_eq!(mv, Move::place(5));
    }

    #[test]
    fn test_parse_move_and_capture() {
        assert_eq!(
            parse_move(r#"{"type": "MOVE", "from": 3, "to": 9}"#).unwrap(),
            Move::step(3, 9)
        );
        assert_eq!(
            parse_move(r#"{"type": "CAPTURE", "from": 0, "to": 8, "capture": 2}"#).unwrap(),
            Move::capture(0, 2, 8)
        );
    }

    #[test]
    fn test_missing_field_is_malformed() {
        let err = parse_move(r#"{"type": "MOVE", "to": 9}"#).unwrap_err();
        assert!(matches!(err, Error::MalformedMove { .. }));

        let err = parse_move(r#"{"type": "CAPTURE", "from": 0, "to": 8}"#).unwrap_err();
        assert!(matches!(err, Error::MalformedMove { .. }));
    }

    #[test]
    fn test_extra_field_is_malformed() {
        let err = parse_move(r#"{"type": "PLACE", "from": 1, "to": 5}"#).unwrap_err();
        assert!(matches!(err, Error::MalformedMove { .. }));

        let err = parse_move(r#"{"type": "PLACE", "to": 5, "via": 2}"#).unwrap_err();
        assert!(matches!(err, Error::MalformedMove { .. }));
    }

    #[test]
    fn test_unknown_type_is_malformed() {
        let err = parse_move(r#"{"type": "FLY", "to": 5}"#).unwrap_err();
        assert!(matches!(err, Error::MalformedMove { .. }));
    }

    #[test]
    fn test_not_json() {
        assert!(matches!(parse_move("place 5"), Err(Error::Json(_))));
    }

    #[test]
    fn test_request_from_move() {
        let req = MoveRequest::from(Move::capture(0, 2, 8));
        assert_eq!(req.kind, MoveKind::Capture);
        assert_eq!(req.capture, Some(2));
        assert_eq!(Move::try_from(req).unwrap(), Move::capture(0, 2, 8));
    }

    #[test]
    fn test_state_view_fresh() {
        let game = AaduPuli::standard();
        let view = StateView::new(&game, &game.new_state());

        assert_eq!(view.board.len(), 23);
        assert_eq!(view.at(Position(0)), Some(Side::Tiger));
        assert_eq!(view.at(Position(1)), None);
        assert_eq!(view.turn, Side::Goat);
        assert_eq!(view.winner, None);
        assert_eq!(view.valid_moves.len(), 20);
    }

    #[test]
    fn test_state_view_json_shape() {
        let game = AaduPuli::standard();
        let state = game.play(&game.new_state(), Move::place(1)).unwrap();
        let json: serde_json::Value =
            serde_json::from_str(&StateView::new(&game, &state).to_json().unwrap()).unwrap();

        assert_eq!(json["turn"], "T");
        assert_eq!(json["board"][1], "G");
        assert!(json["board"][2].is_null());
        assert_eq!(json["goats_placed"], 1);
        assert_eq!(json["valid_moves"][0]["type"], "MOVE");
    }

    #[test]
    fn test_snapshot_restore() {
        let game = AaduPuli::standard();
        let state = game.play(&game.new_state(), Move::place(7)).unwrap();

        let bytes = snapshot(&state).unwrap();
        let restored = restore(&bytes, game.board()).unwrap();
        assert_eq!(restored, state);
        assert_eq!(restored.history().len(), 1);
    }

    #[test]
    fn test_restore_garbage() {
        let game = AaduPuli::standard();
        assert!(restore(&[1, 2, 3], game.board()).is_err());
    }
}
