//! Game implementations.

pub mod aadu_puli;

pub use aadu_puli::AaduPuli;
