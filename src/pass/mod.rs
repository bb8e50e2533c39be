//! Password synthesis: alphabet construction, constrained generation,
//! strength estimation, and output writing.

pub mod alphabet;
pub mod config;
mod error;
mod generate;
pub mod output;
pub mod sequence;
pub mod strength;

pub use error::GenerateError;
pub use generate::generate;
