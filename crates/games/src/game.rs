//! Snakes and Ladders as an explicit state machine.
//!
//! # States
//!
//! ```text
//!   NotStarted ──start()──▶ InProgress(0) ──take_turn()──▶ InProgress(s')
//!        ▲                                      │
//!        │                                      │ exact landing on the final square
//!        └──────────────start()───────── Finished ◀┘
//! ```
//!
//! Each turn rolls the dice and moves `roll` squares:
//!
//! - landing exactly on the final square wins, without looking at the board
//! - overshooting forfeits the turn; the piece stays where it is
//! - anything else moves the piece and follows the ladder or snake on the
//!   square it landed on
//!
//! Observers are told about every roll before its effect is applied, and
//! about the end of the game after the winning move.

use std::fmt;
use std::sync::Arc;

use playground_core::TextRepresentable;
use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::config::GameConfig;
use crate::dice::{Dice, LinearCongruentialGenerator, RandomNumberGenerator};
use crate::observer::{GameObserver, ObserverRegistry};
use crate::GameError;

// ============================================================================
// Dice Game Trait
// ============================================================================

/// Read-only view of a dice game, handed to observers.
pub trait DiceGame: TextRepresentable {
    fn dice_sides(&self) -> u32;

    fn final_square(&self) -> usize;

    fn state(&self) -> GameState;

    /// Number of turns played since the last start.
    fn turns_taken(&self) -> usize;

    /// The square the piece is on, if the game is running.
    fn current_square(&self) -> Option<usize> {
        match self.state() {
            GameState::InProgress { square } => Some(square),
            _ => None,
        }
    }

    fn is_finished(&self) -> bool {
        self.state() == GameState::Finished
    }
}

// ============================================================================
// State and Outcomes
// ============================================================================

/// Where the game is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameState {
    #[default]
    NotStarted,
    InProgress {
        square: usize,
    },
    Finished,
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameState::NotStarted => write!(f, "not started"),
            GameState::InProgress { square } => write!(f, "in progress on square {}", square),
            GameState::Finished => write!(f, "finished"),
        }
    }
}

/// What a single turn did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnOutcome {
    /// The piece moved; `square` is where it ended after any snake or ladder.
    Moved { square: usize, roll: u32 },
    /// The roll overshot the final square; the piece did not move.
    Forfeited { roll: u32 },
    /// The piece reached the final square.
    Won { roll: u32 },
}

impl TurnOutcome {
    pub fn roll(&self) -> u32 {
        match *self {
            TurnOutcome::Moved { roll, .. }
            | TurnOutcome::Forfeited { roll }
            | TurnOutcome::Won { roll } => roll,
        }
    }
}

/// One entry of the turn history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// 1-indexed turn number
    pub turn: usize,
    pub roll: u32,
    /// Square before the roll
    pub from: usize,
    /// Square after the turn
    pub to: usize,
    pub outcome: TurnOutcome,
}

/// Result of [`SnakesAndLadders::play`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    pub turns: usize,
    pub forfeits: usize,
    pub rolls: Vec<u32>,
}

// ============================================================================
// Snakes and Ladders
// ============================================================================

/// A single-player game of Snakes and Ladders.
pub struct SnakesAndLadders<G = LinearCongruentialGenerator> {
    board: Board,
    dice: Dice<G>,
    state: GameState,
    history: Vec<TurnRecord>,
    observers: ObserverRegistry,
    max_turns: usize,
}

impl SnakesAndLadders<LinearCongruentialGenerator> {
    /// Create a game from a dense layout; the final square is `len - 1`.
    pub fn new(board_layout: Vec<i32>, sides: u32, seed: f64) -> Result<Self, GameError> {
        Ok(Self::with_parts(
            Board::new(board_layout)?,
            Dice::seeded(sides, seed)?,
        ))
    }

    /// Create a game whose layout must cover exactly `0..=final_square`.
    pub fn with_final_square(
        final_square: usize,
        board_layout: Vec<i32>,
        sides: u32,
        seed: f64,
    ) -> Result<Self, GameError> {
        Ok(Self::with_parts(
            Board::with_final_square(final_square, board_layout)?,
            Dice::seeded(sides, seed)?,
        ))
    }

    /// Create a game from a configuration.
    pub fn from_config(config: &GameConfig) -> Result<Self, GameError> {
        let mut game = Self::with_final_square(
            config.final_square,
            config.board.clone(),
            config.sides,
            config.seed,
        )?;
        game.max_turns = config.max_turns;
        Ok(game)
    }

    /// The classic board with a six-sided dice and the default seed.
    pub fn classic() -> Self {
        Self::with_parts(Board::classic(), Dice::default())
    }
}

impl<G: RandomNumberGenerator> SnakesAndLadders<G> {
    /// Assemble a game from an already validated board and dice.
    pub fn with_parts(board: Board, dice: Dice<G>) -> Self {
        Self {
            board,
            dice,
            state: GameState::NotStarted,
            history: Vec::new(),
            observers: ObserverRegistry::new(),
            max_turns: GameConfig::DEFAULT_MAX_TURNS,
        }
    }

    /// Set the turn limit used by [`play`](Self::play).
    pub fn with_max_turns(mut self, max_turns: usize) -> Self {
        self.max_turns = max_turns;
        self
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn dice(&self) -> &Dice<G> {
        &self.dice
    }

    /// Turns played since the last start, oldest first.
    pub fn history(&self) -> &[TurnRecord] {
        &self.history
    }

    /// The turn history as pretty-printed JSON.
    pub fn history_json(&self) -> Result<String, GameError> {
        serde_json::to_string_pretty(&self.history).map_err(|e| GameError::Config {
            message: e.to_string(),
        })
    }

    /// Watch this game. The game keeps only a weak handle.
    pub fn register_observer<O: GameObserver + 'static>(&mut self, observer: &Arc<O>) {
        self.observers.register(observer);
    }

    pub fn clear_observers(&mut self) {
        self.observers.clear();
    }

    /// Put the piece on square 0.
    ///
    /// Allowed from `NotStarted` and, to play again, from `Finished`.
    pub fn start(&mut self) -> Result<(), GameError> {
        if let GameState::InProgress { .. } = self.state {
            return Err(GameError::InvalidState {
                operation: "start",
                state: self.state,
            });
        }

        self.state = GameState::InProgress { square: 0 };
        self.history.clear();
        tracing::info!(
            final_square = self.board.final_square(),
            sides = self.dice.sides(),
            "Game started"
        );

        for observer in self.observers.live() {
            observer.on_start(&*self);
        }
        Ok(())
    }

    /// Roll the dice and move.
    pub fn take_turn(&mut self) -> Result<TurnOutcome, GameError> {
        let from = match self.state {
            GameState::InProgress { square } => square,
            state => {
                return Err(GameError::InvalidState {
                    operation: "take a turn",
                    state,
                })
            }
        };

        let roll = self.dice.roll();
        for observer in self.observers.live() {
            observer.on_turn(&*self, roll);
        }

        let final_square = self.board.final_square();
        let target = from + roll as usize;

        let (to, outcome) = if target == final_square {
            (final_square, TurnOutcome::Won { roll })
        } else if target > final_square {
            (from, TurnOutcome::Forfeited { roll })
        } else {
            let landed = self.board.destination(target);
            if landed == final_square {
                // A ladder straight onto the final square also ends the game
                (landed, TurnOutcome::Won { roll })
            } else {
                (landed, TurnOutcome::Moved { square: landed, roll })
            }
        };

        self.state = match outcome {
            TurnOutcome::Won { .. } => GameState::Finished,
            _ => GameState::InProgress { square: to },
        };

        let turn = self.history.len() + 1;
        self.history.push(TurnRecord {
            turn,
            roll,
            from,
            to,
            outcome,
        });
        tracing::debug!(turn, roll, from, to, ?outcome, "Turn taken");

        if let TurnOutcome::Won { .. } = outcome {
            tracing::info!(turns = turn, "Game finished");
            for observer in self.observers.live() {
                observer.on_end(&*self);
            }
        }

        Ok(outcome)
    }

    /// Start and play until the final square is reached.
    ///
    /// Fails with [`GameError::TurnLimitExceeded`] if the game is still
    /// running after the configured number of turns; the game is left in
    /// progress so the caller can keep going with [`take_turn`](Self::take_turn).
    pub fn play(&mut self) -> Result<GameSummary, GameError> {
        self.start()?;

        while !self.is_finished() {
            if self.history.len() >= self.max_turns {
                tracing::warn!(limit = self.max_turns, "Turn limit reached");
                return Err(GameError::TurnLimitExceeded {
                    limit: self.max_turns,
                });
            }
            self.take_turn()?;
        }

        Ok(self.summary())
    }

    /// Summary of the turns taken since the last start.
    pub fn summary(&self) -> GameSummary {
        GameSummary {
            turns: self.history.len(),
            forfeits: self
                .history
                .iter()
                .filter(|r| matches!(r.outcome, TurnOutcome::Forfeited { .. }))
                .count(),
            rolls: self.history.iter().map(|r| r.roll).collect(),
        }
    }
}

impl<G: RandomNumberGenerator> DiceGame for SnakesAndLadders<G> {
    fn dice_sides(&self) -> u32 {
        self.dice.sides()
    }

    fn final_square(&self) -> usize {
        self.board.final_square()
    }

    fn state(&self) -> GameState {
        self.state
    }

    fn turns_taken(&self) -> usize {
        self.history.len()
    }
}

impl<G> TextRepresentable for SnakesAndLadders<G> {
    fn textual_description(&self) -> String {
        format!(
            "A game of Snakes and Ladders with {} squares",
            self.board.final_square()
        )
    }

    fn pretty_textual_description(&self) -> String {
        format!("{}:\n{}", self.textual_description(), self.board.render())
    }
}

impl<G> fmt::Debug for SnakesAndLadders<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SnakesAndLadders")
            .field("final_square", &self.board.final_square())
            .field("sides", &self.dice.sides())
            .field("state", &self.state)
            .field("turns", &self.history.len())
            .field("observers", &self.observers)
            .finish()
    }
}
