//! Random sampling helpers for particle generation.
//!
//! Every stochastic step in the engine draws through a [`SpawnContext`],
//! which borrows an injected RNG. Tests hand in a seeded generator and get
//! reproducible point sets and frames.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::TAU;

/// Borrowed RNG with helpers for the draws the engine needs.
///
/// ```
/// use heartbeat::SpawnContext;
/// use rand::SeedableRng;
///
/// let mut rng = rand::rngs::SmallRng::seed_from_u64(1);
/// let mut ctx = SpawnContext::new(&mut rng);
/// let jitter = ctx.random_int(-1, 1);
/// assert!((-1..=1).contains(&jitter));
/// ```
pub struct SpawnContext<'a, R: Rng + ?Sized> {
    rng: &'a mut R,
}

impl<'a, R: Rng + ?Sized> SpawnContext<'a, R> {
    /// Wrap a caller-owned RNG.
    pub fn new(rng: &'a mut R) -> Self {
        Self { rng }
    }

    // ========== Random primitives ==========

    /// Uniform angle in `[0, 2π)`.
    #[inline]
    pub fn random_angle(&mut self) -> f64 {
        self.rng.gen_range(0.0..TAU)
    }

    /// Uniform value in `(0, 1]`, safe to pass to `ln`.
    #[inline]
    pub fn unit_open(&mut self) -> f64 {
        1.0 - self.rng.gen::<f64>()
    }

    /// Uniform integer in `min..=max`.
    #[inline]
    pub fn random_int(&mut self, min: i32, max: i32) -> i32 {
        self.rng.gen_range(min..=max)
    }

    /// Uniform size in `1..=max`.
    #[inline]
    pub fn random_size(&mut self, max: u32) -> u32 {
        self.rng.gen_range(1..=max)
    }

    /// Uniform pick from a non-empty table. Repeated entries weight the pick.
    #[inline]
    pub fn pick<T: Copy>(&mut self, table: &[T]) -> T {
        table[self.rng.gen_range(0..table.len())]
    }

    /// Draw a seed for a child generator.
    #[inline]
    pub fn fork_seed(&mut self) -> u64 {
        self.rng.gen()
    }
}

/// Build the per-frame generator from a seed drawn with [`SpawnContext::fork_seed`].
pub fn frame_rng(seed: u64) -> SmallRng {
    SmallRng::seed_from_u64(seed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rng() -> SmallRng {
        SmallRng::seed_from_u64(0xC0FFEE)
    }

    #[test]
    fn test_unit_open_never_zero() {
        let mut rng = rng();
        let mut ctx = SpawnContext::new(&mut rng);
        for _ in 0..10_000 {
            let u = ctx.unit_open();
            assert!(u > 0.0 && u <= 1.0);
        }
    }

    #[test]
    fn test_random_int_inclusive_bounds() {
        let mut rng = rng();
        let mut ctx = SpawnContext::new(&mut rng);
        let mut seen = [false; 3];
        for _ in 0..1000 {
            let v = ctx.random_int(-1, 1);
            seen[(v + 1) as usize] = true;
        }
        assert_eq!(seen, [true, true, true]);
    }

    #[test]
    fn test_angle_range() {
        let mut rng = rng();
        let mut ctx = SpawnContext::new(&mut rng);
        for _ in 0..1000 {
            let a = ctx.random_angle();
            assert!((0.0..TAU).contains(&a));
        }
    }

    #[test]
    fn test_pick_weighted_table() {
        let mut rng = rng();
        let mut ctx = SpawnContext::new(&mut rng);
        let twos = (0..3000).filter(|_| ctx.pick(&[1u32, 2, 2]) == 2).count();
        // Expect about 2000.
        assert!((1800..2200).contains(&twos), "got {}", twos);
    }

    #[test]
    fn test_frame_rng_reproducible() {
        let a: Vec<u32> = {
            let mut r = frame_rng(42);
            (0..8).map(|_| r.gen()).collect()
        };
        let b: Vec<u32> = {
            let mut r = frame_rng(42);
            (0..8).map(|_| r.gen()).collect()
        };
        assert_eq!(a, b);
    }
}
