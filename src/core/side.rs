//! Sides and cell occupants.
//!
//! ## Side
//!
//! The two asymmetric roles. Tigers start on the board and capture; goats
//! are placed one at a time and try to block the tigers in.
//!
//! ## Occupant
//!
//! What sits on a single cell.

use serde::{Deserialize, Serialize};

/// One of the two sides of the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    #[serde(rename = "T")]
    Tiger,
    #[serde(rename = "G")]
    Goat,
}

impl Side {
    /// Both sides, goats first (goats open the game).
    pub const ALL: [Side; 2] = [Side::Goat, Side::Tiger];

    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Side::Tiger => Side::Goat,
            Side::Goat => Side::Tiger,
        }
    }

    /// Tigers maximise the evaluation, goats minimise it.
    #[must_use]
    pub const fn is_maximizing(self) -> bool {
        matches!(self, Side::Tiger)
    }

    /// Single-letter tag used on the wire and in logs.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Side::Tiger => 'T',
            Side::Goat => 'G',
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Tiger => write!(f, "Tiger"),
            Side::Goat => write!(f, "Goat"),
        }
    }
}

impl std::str::FromStr for Side {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "t" | "tiger" => Ok(Side::Tiger),
            "g" | "goat" => Ok(Side::Goat),
            other => Err(format!("unknown side '{other}' (expected tiger or goat)")),
        }
    }
}

/// Content of a single cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Occupant {
    #[default]
    Empty,
    Tiger,
    Goat,
}

impl Occupant {
    /// The side owning this piece, if any.
    #[must_use]
    pub const fn side(self) -> Option<Side> {
        match self {
            Occupant::Empty => None,
            Occupant::Tiger => Some(Side::Tiger),
            Occupant::Goat => Some(Side::Goat),
        }
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Occupant::Empty)
    }

    /// Does this cell hold a piece of `side`?
    #[must_use]
    pub fn is(self, side: Side) -> bool {
        self.side() == Some(side)
    }
}

impl From<Side> for Occupant {
    fn from(side: Side) -> Self {
        match side {
            Side::Tiger => Occupant::Tiger,
            Side::Goat => Occupant::Goat,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent() {
        assert_eq!(Side::Tiger.opponent(), Side::Goat);
        assert_eq!(Side::Goat.opponent(), Side::Tiger);
        assert!(Side::Tiger.is_maximizing());
        assert!(!Side::Goat.is_maximizing());
    }

    #[test]
    fn test_parse_side() {
        assert_eq!("T".parse::<Side>().unwrap(), Side::Tiger);
        assert_eq!("goat".parse::<Side>().unwrap(), Side::Goat);
        assert!("wolf".parse::<Side>().is_err());
    }

    #[test]
    fn test_occupant_side() {
        assert_eq!(Occupant::Empty.side(), None);
        assert!(Occupant::Goat.is(Side::Goat));
        assert!(!Occupant::Tiger.is(Side::Goat));
        assert_eq!(Occupant::from(Side::Tiger), Occupant::Tiger);
    }

    #[test]
    fn test_side_wire_letters() {
        assert_eq!(serde_json::to_string(&Side::Tiger).unwrap(), "\"T\"");
        assert_eq!(serde_json::from_str::<Side>("\"G\"").unwrap(), Side::Goat);
    }
}
