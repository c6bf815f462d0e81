//! Random numbers and dice.
//!
//! Rolls must be reproducible, so the generator is a small deterministic
//! linear-congruential generator rather than an OS-seeded one. Any type that
//! implements [`RandomNumberGenerator`] can be swapped in.
//!
//! ```rust
//! use playground_games::dice::{Dice, LinearCongruentialGenerator};
//!
//! let mut d6 = Dice::new(6, LinearCongruentialGenerator::default()).unwrap();
//! let rolls: Vec<u32> = (0..5).map(|_| d6.roll()).collect();
//! assert_eq!(rolls, vec![2, 6, 4, 5, 5]);
//! ```

use playground_core::TextRepresentable;
use serde::{Deserialize, Serialize};

use crate::GameError;

/// A source of uniformly distributed values in `[0, 1)`.
pub trait RandomNumberGenerator {
    fn random(&mut self) -> f64;
}

/// Seed used when none is given.
pub const DEFAULT_SEED: f64 = 42.0;

/// Linear-congruential generator working on `f64` state.
///
/// Each step computes `last = (last * a * c) mod m` and returns `last / m`.
/// With the default constants every intermediate product stays below 2^53,
/// so the sequence is exact and identical on every platform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearCongruentialGenerator {
    last_random: f64,
    m: f64,
    a: f64,
    c: f64,
}

impl LinearCongruentialGenerator {
    pub const M: f64 = 139968.0;
    pub const A: f64 = 3877.0;
    pub const C: f64 = 29573.0;

    /// Create a generator with the default constants and the given seed.
    pub fn new(seed: f64) -> Self {
        Self {
            last_random: seed,
            m: Self::M,
            a: Self::A,
            c: Self::C,
        }
    }

    /// Create a generator with custom constants.
    pub fn with_constants(seed: f64, m: f64, a: f64, c: f64) -> Self {
        Self {
            last_random: seed,
            m,
            a,
            c,
        }
    }

    /// The current internal state (the last raw value produced).
    pub fn state(&self) -> f64 {
        self.last_random
    }
}

impl Default for LinearCongruentialGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

impl RandomNumberGenerator for LinearCongruentialGenerator {
    fn random(&mut self) -> f64 {
        // `%` on f64 is the truncating remainder
        self.last_random = (self.last_random * self.a * self.c) % self.m;
        self.last_random / self.m
    }
}

impl<R: RandomNumberGenerator + ?Sized> RandomNumberGenerator for Box<R> {
    fn random(&mut self) -> f64 {
        (**self).random()
    }
}

/// A dice with `sides` faces numbered from 1.
#[derive(Debug, Clone)]
pub struct Dice<G = LinearCongruentialGenerator> {
    sides: u32,
    generator: G,
}

impl<G> Dice<G> {
    pub fn sides(&self) -> u32 {
        self.sides
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }
}

impl<G: RandomNumberGenerator> Dice<G> {
    /// Create a dice. Fails when `sides` is zero.
    pub fn new(sides: u32, generator: G) -> Result<Self, GameError> {
        if sides == 0 {
            return Err(GameError::InvalidDice { sides });
        }
        Ok(Self { sides, generator })
    }

    /// Roll once. The result is always in `1..=sides`.
    pub fn roll(&mut self) -> u32 {
        let r = self.generator.random();
        let face = (r * self.sides as f64) as u32;
        // Guards against a generator that returns exactly 1.0
        face.min(self.sides - 1) + 1
    }
}

impl Dice<LinearCongruentialGenerator> {
    /// A dice backed by the default generator with the given seed.
    pub fn seeded(sides: u32, seed: f64) -> Result<Self, GameError> {
        Self::new(sides, LinearCongruentialGenerator::new(seed))
    }
}

/// A six-sided dice with the default seed.
impl Default for Dice<LinearCongruentialGenerator> {
    fn default() -> Self {
        Self {
            sides: 6,
            generator: LinearCongruentialGenerator::default(),
        }
    }
}

impl<G> TextRepresentable for Dice<G> {
    fn textual_description(&self) -> String {
        format!("A {}-sided dice", self.sides)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lcg_first_values() {
        let mut g = LinearCongruentialGenerator::default();
        let first = g.random();

        // 42 * 3877 * 29573 mod 139968
        assert_eq!(g.state(), 30810.0);
        assert!((first - 30810.0 / 139968.0).abs() < 1e-15);
    }

    #[test]
    fn test_lcg_range() {
        let mut g = LinearCongruentialGenerator::new(7.0);
        for _ in 0..1000 {
            let r = g.random();
            assert!((0.0..1.0).contains(&r));
        }
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = Dice::seeded(6, 42.0).unwrap();
        let mut b = Dice::seeded(6, 42.0).unwrap();

        let ra: Vec<u32> = (0..50).map(|_| a.roll()).collect();
        let rb: Vec<u32> = (0..50).map(|_| b.roll()).collect();
        assert_eq!(ra, rb);
    }

    #[test]
    fn test_known_rolls() {
        let mut d6 = Dice::seeded(6, DEFAULT_SEED).unwrap();
        let rolls: Vec<u32> = (0..10).map(|_| d6.roll()).collect();
        assert_eq!(rolls, vec![2, 6, 4, 5, 5, 6, 3, 3, 1, 5]);
    }

    #[test]
    fn test_zero_sides_rejected() {
        assert_eq!(
            Dice::seeded(0, 1.0).unwrap_err(),
            GameError::InvalidDice { sides: 0 }
        );
    }

    struct Fixed(f64);

    impl RandomNumberGenerator for Fixed {
        fn random(&mut self) -> f64 {
            self.0
        }
    }

    #[test]
    fn test_roll_bounds_with_custom_generator() {
        let mut low = Dice::new(6, Fixed(0.0)).unwrap();
        let mut high = Dice::new(6, Fixed(0.999_999)).unwrap();
        let mut edge = Dice::new(6, Fixed(1.0)).unwrap();

        assert_eq!(low.roll(), 1);
        assert_eq!(high.roll(), 6);
        assert_eq!(edge.roll(), 6);
    }

    #[test]
    fn test_description() {
        let d12 = Dice::seeded(12, 1.0).unwrap();
        assert_eq!(d12.textual_description(), "A 12-sided dice");
    }
}
