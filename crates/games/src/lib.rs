//! # Playground Games
//!
//! A dice-driven Snakes and Ladders engine built from small, swappable
//! parts:
//!
//! - [`RandomNumberGenerator`] and [`Dice`]: reproducible rolls
//! - [`Board`]: validated ladders and snakes
//! - [`SnakesAndLadders`]: the state machine that plays turns
//! - [`GameObserver`]: watches a game through weak handles
//!
//! ## Example
//!
//! ```rust
//! use playground_games::{SnakesAndLadders, TurnOutcome};
//!
//! let mut game = SnakesAndLadders::classic();
//! game.start().unwrap();
//!
//! let outcome = game.take_turn().unwrap();
//! assert_eq!(outcome, TurnOutcome::Moved { square: 2, roll: 2 });
//! ```
//!
//! ## Ownership
//!
//! ```text
//!          owns                 owns
//!   Game ───────▶ Board   Game ───────▶ Dice ───▶ Generator
//!     ┆
//!     ┆ weak
//!     ▼
//!   Observer (owned by the caller)
//! ```
//!
//! The game never keeps an observer alive, and an observer never keeps the
//! game alive.

pub mod board;
pub mod config;
pub mod dice;
mod error;
pub mod game;
pub mod observer;

pub use board::Board;
pub use config::GameConfig;
pub use dice::{Dice, LinearCongruentialGenerator, RandomNumberGenerator};
pub use error::GameError;
pub use game::{DiceGame, GameState, GameSummary, SnakesAndLadders, TurnOutcome, TurnRecord};
pub use observer::{DiceGameTracker, GameObserver, LoggingObserver, NullObserver, ObserverRegistry};
