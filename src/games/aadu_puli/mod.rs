//! Aadu Puli Aattam ("Tigers and Goats").
//!
//! Three tigers against fifteen goats on a 23-node board:
//! - Goats open by placing one goat per turn until all fifteen are down
//!   (phase one), then step along the lines (phase two)
//! - Tigers step along the lines or jump a goat to capture it
//! - Tigers win with five captures; goats win by leaving the tigers with no
//!   move on their turn

mod game;

pub use game::AaduPuli;
