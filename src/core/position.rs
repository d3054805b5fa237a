//! Board cell identifiers.
//!
//! A `Position` is an opaque node id. It carries no geometry of its own;
//! the `Board` decides which ids exist and how they connect.

use serde::{Deserialize, Serialize};

/// Node identifier on a board.
///
/// Valid positions on the standard board are `0..23`. Whether an id is
/// valid for a given topology is answered by `Board::contains`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Position(pub u8);

impl Position {
    /// Create a new position.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw id as an index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over every position of a board with `node_count` nodes.
    ///
    /// ```
    /// use aadu_puli::core::Position;
    ///
    /// let all: Vec<_> = Position::all(23).collect();
    /// assert_eq!(all.len(), 23);
    /// assert_eq!(all[22], Position::new(22));
    /// ```
    pub fn all(node_count: usize) -> impl Iterator<Item = Position> {
        (0..node_count as u8).map(Position)
    }
}

impl From<u8> for Position {
    fn from(id: u8) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_ordering() {
        assert!(Position::new(3) < Position::new(4));
        assert_eq!(Position::from(7u8).index(), 7);
    }

    #[test]
    fn test_position_serializes_as_number() {
        let json = serde_json::to_string(&Position::new(12)).unwrap();
        assert_eq!(json, "12");
        let back: Position = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Position::new(12));
    }
}
