//! Error types for the crate.
//!
//! Rules operations report `IllegalMove` and leave state untouched.
//! Everything facing an adapter (wire parsing, setups, snapshots, config
//! files) reports the crate-level `Error`.

use thiserror::Error;

use crate::core::{Position, Side};

/// A well-formed move that breaks a rule.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum IllegalMove {
    #[error("{side} cannot make a {kind} move")]
    WrongSide { side: Side, kind: &'static str },

    #[error("{kind} is not allowed in phase {phase}")]
    WrongPhase { kind: &'static str, phase: u8 },

    #[error("cell {at} does not hold a {side}")]
    NotOwnPiece { at: Position, side: Side },

    #[error("destination {at} is occupied")]
    Occupied { at: Position },

    #[error("cells {from} and {to} are not adjacent")]
    NotAdjacent { from: Position, to: Position },

    #[error("{from} over {over} to {to} is not a jump line")]
    NotAJump {
        from: Position,
        over: Position,
        to: Position,
    },

    #[error("no goat to capture at {over}")]
    NoCaptureTarget { over: Position },

    #[error("position {at} is not on the board")]
    OffBoard { at: Position },
}

/// Main error type for the crate.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("malformed move: {reason}")]
    MalformedMove { reason: String },

    #[error("illegal move: {0}")]
    IllegalMove(#[from] IllegalMove),

    #[error("invalid board topology: {reason}")]
    InvalidTopology { reason: String },

    #[error("invalid setup: {reason}")]
    InvalidSetup { reason: String },

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("snapshot error: {0}")]
    Snapshot(#[from] bincode::Error),

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        Error::MalformedMove {
            reason: reason.into(),
        }
    }

    pub(crate) fn setup(reason: impl Into<String>) -> Self {
        Error::InvalidSetup {
            reason: reason.into(),
        }
    }

    pub(crate) fn topology(reason: impl Into<String>) -> Self {
        Error::InvalidTopology {
            reason: reason.into(),
        }
    }
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;
