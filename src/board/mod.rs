//! Board topology.
//!
//! The board is pure data: which cells touch (simple moves) and which
//! straight lines of three a tiger may jump along (captures). It holds no
//! game state and never changes after construction.
//!
//! ## Standard layout
//!
//! ```text
//!                    0
//!        1    2    3    4    5    6
//!        7    8    9   10   11   12
//!       13   14   15   16   17   18
//!            19   20   21   22
//! ```
//!
//! Other shapes are just other `Board` values built with `BoardBuilder`.

mod topology;

pub use topology::{Board, BoardBuilder, Jump, APEX, NODE_COUNT, ROWS};
