//! Connect-4 rule engine.
//!
//! Holds the board, applies drops under the active gravity, and detects wins and draws.

pub mod error;
pub mod grid;
pub mod settings;
pub mod state;
pub mod systems;
pub mod types;

#[cfg(test)]
mod tests;

pub use error::MoveError;
pub use settings::{Difficulty, Mode, Settings};
pub use state::{Game, Rules};
pub use types::{Cell, Gravity, Outcome, Player, Position};
