//! Game observers.
//!
//! Observers watch a game without taking part in it. The game keeps only
//! [`Weak`] handles, so registering an observer never extends its lifetime:
//! when the last `Arc` goes away the observer simply stops receiving events.
//!
//! ## Events
//!
//! - `on_start`: the game moved to square 0
//! - `on_turn`: the dice was rolled
//! - `on_end`: a piece reached the final square
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use playground_games::{DiceGameTracker, SnakesAndLadders};
//!
//! let tracker = Arc::new(DiceGameTracker::new());
//! let mut game = SnakesAndLadders::classic();
//! game.register_observer(&tracker);
//!
//! game.play().unwrap();
//! assert_eq!(tracker.turns(), 21);
//! ```

use std::sync::atomic::{AtomicBool, AtomicU32, AtomicUsize, Ordering};
use std::sync::{Arc, Weak};

use crate::game::DiceGame;

// ============================================================================
// Game Observer Trait
// ============================================================================

/// Trait for observing game events.
///
/// All methods have default no-op implementations, so you only need to
/// implement the events you care about.
pub trait GameObserver: Send + Sync {
    /// Called after the game has been (re)started.
    fn on_start(&self, _game: &dyn DiceGame) {}

    /// Called once per turn, right after the dice was rolled.
    ///
    /// # Arguments
    /// * `game` - The game, still on the square the turn started from
    /// * `roll` - The value rolled
    fn on_turn(&self, _game: &dyn DiceGame, _roll: u32) {}

    /// Called when the game has finished.
    fn on_end(&self, _game: &dyn DiceGame) {}
}

// ============================================================================
// Registry
// ============================================================================

/// Non-owning set of observers, notified in registration order.
#[derive(Default)]
pub struct ObserverRegistry {
    observers: Vec<Weak<dyn GameObserver>>,
}

impl ObserverRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an observer. Only a weak handle is stored.
    pub fn register<O: GameObserver + 'static>(&mut self, observer: &Arc<O>) {
        let weak: Weak<O> = Arc::downgrade(observer);
        self.observers.push(weak);
    }

    /// Forget every observer.
    pub fn clear(&mut self) {
        self.observers.clear();
    }

    /// Number of registered handles, including ones whose observer has
    /// already been dropped but not yet pruned.
    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    /// Upgrade the live observers, pruning the dropped ones.
    ///
    /// The returned `Arc`s keep the observers alive only for the duration of
    /// one notification.
    pub fn live(&mut self) -> Vec<Arc<dyn GameObserver>> {
        let before = self.observers.len();
        let mut live = Vec::with_capacity(before);
        self.observers.retain(|weak| match weak.upgrade() {
            Some(observer) => {
                live.push(observer);
                true
            }
            None => false,
        });

        let pruned = before - self.observers.len();
        if pruned > 0 {
            tracing::debug!(pruned, "Dropped observers removed from registry");
        }
        live
    }
}

impl std::fmt::Debug for ObserverRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObserverRegistry")
            .field("observers", &self.observers.len())
            .finish()
    }
}

// ============================================================================
// Null Observer
// ============================================================================

/// An observer that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullObserver;

impl GameObserver for NullObserver {}

// ============================================================================
// Logging Observer
// ============================================================================

/// An observer that reports every event through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingObserver {
    /// Whether to include the square on each turn
    pub verbose: bool,
}

impl LoggingObserver {
    pub fn new() -> Self {
        Self { verbose: false }
    }

    pub fn verbose() -> Self {
        Self { verbose: true }
    }
}

impl GameObserver for LoggingObserver {
    fn on_start(&self, game: &dyn DiceGame) {
        tracing::info!(
            sides = game.dice_sides(),
            "Started {}",
            game.textual_description()
        );
    }

    fn on_turn(&self, game: &dyn DiceGame, roll: u32) {
        if self.verbose {
            tracing::info!(roll, square = ?game.current_square(), "Rolled a {}", roll);
        } else {
            tracing::info!(roll, "Rolled a {}", roll);
        }
    }

    fn on_end(&self, game: &dyn DiceGame) {
        tracing::info!(turns = game.turns_taken(), "Game over");
    }
}

// ============================================================================
// Turn Tracker
// ============================================================================

/// Counts the turns of the most recent game.
#[derive(Debug, Default)]
pub struct DiceGameTracker {
    turns: AtomicUsize,
    sides: AtomicU32,
    finished: AtomicBool,
}

impl DiceGameTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Turns counted since the last `on_start`.
    pub fn turns(&self) -> usize {
        self.turns.load(Ordering::SeqCst)
    }

    /// Sides of the dice used by the last started game.
    pub fn sides(&self) -> u32 {
        self.sides.load(Ordering::SeqCst)
    }

    pub fn is_finished(&self) -> bool {
        self.finished.load(Ordering::SeqCst)
    }
}

impl GameObserver for DiceGameTracker {
    fn on_start(&self, game: &dyn DiceGame) {
        self.turns.store(0, Ordering::SeqCst);
        self.finished.store(false, Ordering::SeqCst);
        self.sides.store(game.dice_sides(), Ordering::SeqCst);
    }

    fn on_turn(&self, _game: &dyn DiceGame, _roll: u32) {
        self.turns.fetch_add(1, Ordering::SeqCst);
    }

    fn on_end(&self, _game: &dyn DiceGame) {
        self.finished.store(true, Ordering::SeqCst);
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    struct CountingObserver {
        starts: Arc<AtomicUsize>,
    }

    impl GameObserver for CountingObserver {
        fn on_start(&self, _game: &dyn DiceGame) {
            self.starts.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn test_registry_does_not_own() {
        let mut registry = ObserverRegistry::new();
        let observer = Arc::new(NullObserver);
        registry.register(&observer);

        assert_eq!(Arc::strong_count(&observer), 1);
        assert_eq!(registry.live().len(), 1);

        drop(observer);
        assert!(registry.live().is_empty());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_registration_order() {
        let mut registry = ObserverRegistry::new();
        let first = Arc::new(DiceGameTracker::new());
        let second = Arc::new(NullObserver);
        registry.register(&first);
        registry.register(&second);

        let live = registry.live();
        assert_eq!(live.len(), 2);
        let first_dyn: Arc<dyn GameObserver> = first.clone();
        assert!(Arc::ptr_eq(&live[0], &first_dyn));
    }

    #[test]
    fn test_clear() {
        let mut registry = ObserverRegistry::new();
        let observer = Arc::new(NullObserver);
        registry.register(&observer);
        registry.clear();
        assert!(registry.live().is_empty());
    }

    #[test]
    fn test_counting_observer_via_game() {
        let starts = Arc::new(AtomicUsize::new(0));
        let observer = Arc::new(CountingObserver {
            starts: Arc::clone(&starts),
        });

        let mut game = crate::SnakesAndLadders::classic();
        game.register_observer(&observer);
        game.start().unwrap();

        assert_eq!(starts.load(Ordering::SeqCst), 1);
    }
}
