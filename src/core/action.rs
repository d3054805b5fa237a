//! Move representation.
//!
//! A move is a closed tagged value: each kind carries exactly the cells it
//! needs. There is no way to build a `Capture` without an `over` cell, so
//! the "missing field" class of bad input only exists at the wire boundary
//! (see `crate::wire`).

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::position::Position;
use super::side::Side;

/// A single game move.
///
/// ## Example
///
/// ```
/// use aadu_puli::core::{Move, Position, Side};
///
/// let place = Move::place(1);
/// assert_eq!(place.destination(), Position::new(1));
/// assert_eq!(place.actor(), Some(Side::Goat));
///
/// let capture = Move::capture(0, 2, 8);
/// assert_eq!(capture.captured(), Some(Position::new(2)));
/// ```
///
/// ## Serialization
///
/// Human-readable formats (JSON) use the wire shape
/// `{"type": "PLACE" | "MOVE" | "CAPTURE", "from", "to", "capture"}`.
/// Binary formats such as `bincode` cannot decode internally tagged enums,
/// so they get a compact externally tagged encoding instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Move {
    /// Drop a new goat on an empty cell (goats, phase one only).
    Place { to: Position },

    /// Step a piece to an adjacent empty cell.
    MoveSimple { from: Position, to: Position },

    /// Tiger jumps over a goat and removes it.
    Capture {
        from: Position,
        over: Position,
        to: Position,
    },
}

/// JSON shape of a move.
#[derive(Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
enum TaggedMove {
    Place {
        to: Position,
    },
    #[serde(rename = "MOVE")]
    MoveSimple {
        from: Position,
        to: Position,
    },
    Capture {
        from: Position,
        #[serde(rename = "capture")]
        over: Position,
        to: Position,
    },
}

/// Binary shape of a move.
#[derive(Serialize, Deserialize)]
enum CompactMove {
    Place(Position),
    Step(Position, Position),
    Capture(Position, Position, Position),
}

impl From<Move> for TaggedMove {
    fn from(mv: Move) -> Self {
        match mv {
            Move::Place { to } => TaggedMove::Place { to },
            Move::MoveSimple { from, to } => TaggedMove::MoveSimple { from, to },
            Move::Capture { from, over, to } => TaggedMove::Capture { from, over, to },
        }
    }
}

impl From<TaggedMove> for Move {
    fn from(mv: TaggedMove) -> Self {
        match mv {
            TaggedMove::Place { to } => Move::Place { to },
            TaggedMove::MoveSimple { from, to } => Move::MoveSimple { from, to },
            TaggedMove::Capture { from, over, to } => Move::Capture { from, over, to },
        }
    }
}

impl From<Move> for CompactMove {
    fn from(mv: Move) -> Self {
        match mv {
            Move::Place { to } => CompactMove::Place(to),
            Move::MoveSimple { from, to } => CompactMove::Step(from, to),
            Move::Capture { from, over, to } => CompactMove::Capture(from, over, to),
        }
    }
}

impl From<CompactMove> for Move {
    fn from(mv: CompactMove) -> Self {
        match mv {
            CompactMove::Place(to) => Move::Place { to },
            CompactMove::Step(from, to) => Move::MoveSimple { from, to },
            CompactMove::Capture(from, over, to) => Move::Capture { from, over, to },
        }
    }
}

impl Serialize for Move {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if serializer.is_human_readable() {
            TaggedMove::from(*self).serialize(serializer)
        } else {
            CompactMove::from(*self).serialize(serializer)
        }
    }
}

impl<'de> Deserialize<'de> for Move {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        if deserializer.is_human_readable() {
            TaggedMove::deserialize(deserializer).map(Move::from)
        } else {
            CompactMove::deserialize(deserializer).map(Move::from)
        }
    }
}

impl Move {
    #[must_use]
    pub fn place(to: u8) -> Self {
        Move::Place { to: Position(to) }
    }

    #[must_use]
    pub fn step(from: u8, to: u8) -> Self {
        Move::MoveSimple {
            from: Position(from),
            to: Position(to),
        }
    }

    #[must_use]
    pub fn capture(from: u8, over: u8, to: u8) -> Self {
        Move::Capture {
            from: Position(from),
            over: Position(over),
            to: Position(to),
        }
    }

    /// Source cell, if the move relocates a piece.
    #[must_use]
    pub fn origin(&self) -> Option<Position> {
        match *self {
            Move::Place { .. } => None,
            Move::MoveSimple { from, .. } | Move::Capture { from, .. } => Some(from),
        }
    }

    /// Cell the moving piece ends on.
    #[must_use]
    pub fn destination(&self) -> Position {
        match *self {
            Move::Place { to } | Move::MoveSimple { to, .. } | Move::Capture { to, .. } => to,
        }
    }

    /// Goat removed by this move.
    #[must_use]
    pub fn captured(&self) -> Option<Position> {
        match *self {
            Move::Capture { over, .. } => Some(over),
            _ => None,
        }
    }

    /// The only side allowed to make this kind of move.
    ///
    /// `None` for simple steps, which both sides make.
    #[must_use]
    pub fn actor(&self) -> Option<Side> {
        match self {
            Move::Place { .. } => Some(Side::Goat),
            Move::Capture { .. } => Some(Side::Tiger),
            Move::MoveSimple { .. } => None,
        }
    }

    /// Lowercase kind name used in messages.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Move::Place { .. } => "place",
            Move::MoveSimple { .. } => "move",
            Move::Capture { .. } => "capture",
        }
    }

    #[must_use]
    pub fn is_capture(&self) -> bool {
        matches!(self, Move::Capture { .. })
    }

    /// Every cell mentioned by the move.
    pub fn cells(&self) -> impl Iterator<Item = Position> {
        let cells: [Option<Position>; 3] = match *self {
            Move::Place { to } => [Some(to), None, None],
            Move::MoveSimple { from, to } => [Some(from), Some(to), None],
            Move::Capture { from, over, to } => [Some(from), Some(over), Some(to)],
        };
        cells.into_iter().flatten()
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Move::Place { to } => write!(f, "place {to}"),
            Move::MoveSimple { from, to } => write!(f, "{from}->{to}"),
            Move::Capture { from, over, to } => write!(f, "{from}x{over}->{to}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_accessors() {
        let step = Move::step(3, 9);
        assert_eq!(step.origin(), Some(Position::new(3)));
        assert_eq!(step.destination(), Position::new(9));
        assert_eq!(step.captured(), None);
        assert_eq!(step.actor(), None);

        let cap = Move::capture(0, 2, 8);
        assert!(cap.is_capture());
        assert_eq!(cap.actor(), Some(Side::Tiger));
        assert_eq!(cap.cells().count(), 3);
    }

    #[test]
    fn test_move_display() {
        assert_eq!(Move::place(5).to_string(), "place 5");
        assert_eq!(Move::step(1, 2).to_string(), "1->2");
        assert_eq!(Move::capture(0, 3, 9).to_string(), "0x3->9");
    }

    #[test]
    fn test_move_json_shape() {
        let json = serde_json::to_value(Move::capture(0, 2, 8)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"type": "CAPTURE", "from": 0, "capture": 2, "to": 8})
        );

        let json = serde_json::to_value(Move::step(1, 2)).unwrap();
        assert_eq!(json, serde_json::json!({"type": "MOVE", "from": 1, "to": 2}));
    }

    #[test]
    fn test_move_binary_round_trip() {
        for mv in [Move::place(4), Move::step(3, 9), Move::capture(0, 2, 8)] {
            let bytes = bincode::serialize(&mv).unwrap();
            assert_eq!(bincode::deserialize::<Move>(&bytes).unwrap(), mv);
        }
    }

    #[test]
    fn test_move_json_rejects_missing_field() {
        let result = serde_json::from_str::<Move>(r#"{"type": "CAPTURE", "from": 0, "to": 8}"#);
        assert!(result.is_err());
    }
}
