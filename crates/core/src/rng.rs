//! RNG module - injected random sources and piece dealing
//!
//! The engine never touches ambient global randomness. Every random draw goes
//! through a [`RandomSource`] owned by the session, so a seed fully determines
//! the sequence of hands.
//!
//! Provides a simple LCG for normal play and a scripted source for tests.

use crate::pieces::{random_gem, random_shape, Piece};
use crate::types::PieceId;

/// Source of pseudo-random numbers for shape and gem draws
pub trait RandomSource {
    /// Generate next random u32
    fn next_u32(&mut self) -> u32;

    /// Generate random value in range [0, max)
    ///
    /// `max` must be non-zero.
    fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Current internal state (usable as a seed to replay from here)
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl RandomSource for SimpleRng {
    fn next_u32(&mut self) -> u32 {
        // a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        // The low bits of a power-of-two LCG have short periods; use the high half.
        self.state >> 16
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Replays a fixed list of values, cycling when exhausted.
///
/// Handy for tests that need a known hand: with `next_range`, the scripted
/// value modulo the range is the drawn index.
#[derive(Debug, Clone)]
pub struct ScriptedRng {
    values: Vec<u32>,
    cursor: usize,
}

impl ScriptedRng {
    /// An empty script yields zeros.
    pub fn new(values: impl Into<Vec<u32>>) -> Self {
        Self {
            values: values.into(),
            cursor: 0,
        }
    }
}

impl RandomSource for ScriptedRng {
    fn next_u32(&mut self) -> u32 {
        if self.values.is_empty() {
            return 0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor = self.cursor.wrapping_add(1);
        value
    }
}

/// Deals piece instances with fresh ids
#[derive(Debug, Clone)]
pub struct PieceGenerator<R> {
    rng: R,
    next_id: PieceId,
}

impl<R: RandomSource> PieceGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng, next_id: 1 }
    }

    /// Draw one piece: shape first, then gem
    pub fn draw(&mut self) -> Piece {
        let shape = random_shape(&mut self.rng);
        let gem = random_gem(&mut self.rng);
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        Piece::new(id, shape, gem)
    }

    /// Id the next drawn piece will get
    pub fn peek_id(&self) -> PieceId {
        self.next_id
    }

    pub fn rng(&self) -> &R {
        &self.rng
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pieces::SHAPES;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(54321);

        let a: Vec<u32> = (0..8).map(|_| rng1.next_u32()).collect();
        let b: Vec<u32> = (0..8).map(|_| rng2.next_u32()).collect();
        assert_ne!(a, b);
    }

    #[test]
    fn test_zero_seed_is_remapped() {
        let mut zero = SimpleRng::new(0);
        let mut one = SimpleRng::new(1);
        assert_eq!(zero.next_u32(), one.next_u32());
    }

    #[test]
    fn test_next_range_bounds() {
        let mut rng = SimpleRng::new(7);
        for _ in 0..1000 {
            assert!(rng.next_range(15) < 15);
        }
    }

    #[test]
    fn test_scripted_rng_cycles() {
        let mut rng = ScriptedRng::new(vec![3, 4]);
        assert_eq!(rng.next_u32(), 3);
        assert_eq!(rng.next_u32(), 4);
        assert_eq!(rng.next_u32(), 3);

        let mut empty = ScriptedRng::new(Vec::new());
        assert_eq!(empty.next_u32(), 0);
    }

    #[test]
    fn test_generator_ids_are_unique() {
        let mut generator = PieceGenerator::new(SimpleRng::new(99));
        let ids: Vec<PieceId> = (0..20).map(|_| generator.draw().id()).collect();
        for (i, id) in ids.iter().enumerate() {
            assert_eq!(*id, i as PieceId + 1);
        }
        assert_eq!(generator.peek_id(), 21);
    }

    #[test]
    fn test_generator_follows_script() {
        // shape index 5 (square), gem index 4 (ruby)
        let mut generator = PieceGenerator::new(ScriptedRng::new(vec![5, 4]));
        let piece = generator.draw();
        assert_eq!(piece.shape().id(), SHAPES[5].id());
        assert_eq!(piece.gem(), crate::types::Gem::Ruby);
    }

    #[test]
    fn test_all_shapes_reachable() {
        let mut generator = PieceGenerator::new(SimpleRng::new(2024));
        let mut seen = vec![false; SHAPES.len()];
        for _ in 0..2000 {
            let piece = generator.draw();
            let idx = SHAPES
                .iter()
                .position(|s| s.id() == piece.shape().id())
                .unwrap();
            seen[idx] = true;
        }
        assert!(seen.iter().all(|&s| s), "every shape should be drawn");
    }
}
