//! Board state and the constrained random generator.

pub mod board;
pub mod generator;

pub use board::Board;
pub use generator::generate;
