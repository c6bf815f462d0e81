//! Error types for game operations.

use thiserror::Error;

use crate::game::GameState;

/// Errors that can occur in game operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GameError {
    /// The operation is not valid in the game's current state.
    #[error("Cannot {operation} while the game is {state}")]
    InvalidState {
        operation: &'static str,
        state: GameState,
    },

    /// The board layout was rejected at construction.
    #[error("Invalid board: {reason}")]
    InvalidBoard { reason: String },

    /// A dice needs at least one side.
    #[error("Invalid dice: {sides} sides")]
    InvalidDice { sides: u32 },

    /// `play` gave up before anyone reached the final square.
    #[error("Game did not finish within {limit} turns")]
    TurnLimitExceeded { limit: usize },

    /// Configuration could not be parsed or serialized.
    #[error("Config error: {message}")]
    Config { message: String },
}
