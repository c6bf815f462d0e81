//! Game configuration.
//!
//! A [`GameConfig`] describes everything needed to build a game: the board,
//! the dice and the seed. It can be built in code or loaded from JSON;
//! missing JSON fields fall back to the classic game.
//!
//! ```json
//! {
//!   "final_square": 5,
//!   "board": [0, 2, 0, -1, 0, 0],
//!   "sides": 4,
//!   "seed": 7.0
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::board::{classic_layout, CLASSIC_FINAL_SQUARE};
use crate::dice::DEFAULT_SEED;
use crate::GameError;

/// Configuration for a game of Snakes and Ladders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Index of the winning square
    pub final_square: usize,
    /// Offset per square, `final_square + 1` entries
    pub board: Vec<i32>,
    /// Number of dice faces
    pub sides: u32,
    /// Initial generator state
    pub seed: f64,
    /// Turn limit for `play`
    pub max_turns: usize,
}

impl GameConfig {
    pub const DEFAULT_SIDES: u32 = 6;
    pub const DEFAULT_MAX_TURNS: usize = 1000;

    /// The classic 25-square game with a six-sided dice.
    pub fn classic() -> Self {
        Self {
            final_square: CLASSIC_FINAL_SQUARE,
            board: classic_layout(),
            sides: Self::DEFAULT_SIDES,
            seed: DEFAULT_SEED,
            max_turns: Self::DEFAULT_MAX_TURNS,
        }
    }

    /// An empty board of `final_square + 1` plain squares.
    ///
    /// A `final_square` of `usize::MAX` leaves the board empty, which is
    /// rejected when the game is built.
    pub fn empty(final_square: usize) -> Self {
        let board = match final_square.checked_add(1) {
            Some(len) => vec![0; len],
            None => Vec::new(),
        };
        Self {
            final_square,
            board,
            ..Self::classic()
        }
    }

    /// Parse a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, GameError> {
        serde_json::from_str(json).map_err(|e| GameError::Config {
            message: e.to_string(),
        })
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, GameError> {
        serde_json::to_string_pretty(self).map_err(|e| GameError::Config {
            message: e.to_string(),
        })
    }

    /// Set the offset of one square, growing the layout if needed.
    ///
    /// Growing past `final_square` is caught when the game is built.
    pub fn with_offset(mut self, square: usize, offset: i32) -> Self {
        if square >= self.board.len() {
            self.board.resize(square.saturating_add(1), 0);
        }
        if let Some(slot) = self.board.get_mut(square) {
            *slot = offset;
        }
        self
    }

    /// Add a ladder from `from` up to `to`.
    ///
    /// Jumps longer than `i32` can hold are clamped to `i32::MAX` or
    /// `i32::MIN`, which always leaves the board and is rejected on build.
    pub fn with_ladder(self, from: usize, to: usize) -> Self {
        let distance = to as i128 - from as i128;
        let offset = i32::try_from(distance)
            .unwrap_or(if distance > 0 { i32::MAX } else { i32::MIN });
        self.with_offset(from, offset)
    }

    /// Add a snake from `from` down to `to`.
    pub fn with_snake(self, from: usize, to: usize) -> Self {
        self.with_ladder(from, to)
    }

    pub fn with_sides(mut self, sides: u32) -> Self {
        self.sides = sides;
        self
    }

    pub fn with_seed(mut self, seed: f64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_max_turns(mut self, max_turns: usize) -> Self {
        self.max_turns = max_turns;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::classic()
    }
}
