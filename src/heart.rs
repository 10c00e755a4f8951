//! The constructed heart: static point populations plus the frame cache.

use crate::cache::{Frame, FrameCache};
use crate::compositor::synthesize_frame;
use crate::config::HeartConfig;
use crate::curve::sample_heart;
use crate::diffusion::diffuse;
use crate::error::ConfigError;
use crate::point::{Particle, PointSet};
use crate::spawn::{frame_rng, SpawnContext};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, debug_span, trace, warn};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Curve draws allowed per requested base point before sampling gives up.
///
/// Base points are whole pixels, so the curve only has so many distinct
/// ones; at the default scale there are about 1500.
const MAX_DRAWS_PER_SAMPLE: usize = 32;

/// Hard ceiling on base curve draws, whatever the sample count.
const MAX_BASE_DRAWS: usize = 1 << 20;

/// The three static point populations.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PointSets {
    /// Points sampled straight from the curve.
    pub base: PointSet,
    /// Base points scattered into a soft outline.
    pub edge: PointSet,
    /// Edge points scattered further into the interior.
    pub center: PointSet,
}

impl PointSets {
    /// Sample the curve and derive both diffused populations.
    pub fn build<R: Rng + ?Sized>(config: &HeartConfig, ctx: &mut SpawnContext<'_, R>) -> Self {
        let center = config.center();

        let budget = config.sample_count.saturating_mul(MAX_DRAWS_PER_SAMPLE).min(MAX_BASE_DRAWS);
        let mut base = PointSet::new();
        let mut draws = 0;
        while base.len() < config.sample_count && draws < budget {
            base.insert(sample_heart(ctx.random_angle(), config.enlarge, center));
            draws += 1;
        }
        if base.len() < config.sample_count {
            warn!(
                requested = config.sample_count,
                got = base.len(),
                draws,
                "heart curve saturated before reaching the sample count"
            );
        }

        let edge = diffuse(&base, config.diffusion_iterations, config.edge_beta, center, ctx);
        let inner = diffuse(&edge, config.diffusion_iterations, config.center_beta, center, ctx);

        debug!(base = base.len(), edge = edge.len(), center = inner.len(), draws, "point sets built");

        Self { base, edge, center: inner }
    }
}

/// A fully built, ready-to-play heart animation.
///
/// Construction samples the curve, diffuses it, and synthesizes every frame
/// of the cycle. After that the heart is read-only and can be shared across
/// threads; [`Heart::get_frame`] never fails.
///
/// # Example
///
/// ```
/// use heartbeat::{Heart, HeartConfig};
///
/// let heart = Heart::new(HeartConfig::new().with_seed(1).with_cycle_length(4)).unwrap();
/// assert_eq!(heart.get_frame(-1), heart.get_frame(3));
/// assert!(heart.get_frame(0).iter().all(|p| p.size >= 1));
/// ```
#[derive(Debug)]
pub struct Heart {
    config: HeartConfig,
    points: PointSets,
    cache: FrameCache,
}

impl Heart {
    /// Build a heart using `config.seed`, or OS entropy when unset.
    pub fn new(config: HeartConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        Self::with_rng(config, &mut rng)
    }

    /// Build a heart drawing all randomness from `rng`.
    ///
    /// `config.seed` is ignored. The same RNG state always yields the same
    /// heart, whether or not frames are synthesized in parallel.
    pub fn with_rng<R: Rng + ?Sized>(config: HeartConfig, rng: &mut R) -> Result<Self, ConfigError> {
        config.validate()?;

        let _span = debug_span!(
            "heart_build",
            samples = config.sample_count,
            frames = config.cycle_length
        )
        .entered();

        let mut ctx = SpawnContext::new(rng);
        let points = PointSets::build(&config, &mut ctx);

        // One seed per frame, drawn in order, so frame synthesis is
        // independent of scheduling.
        let seeds: Vec<u64> = (0..config.cycle_length).map(|_| ctx.fork_seed()).collect();
        let cache = precompute(&config, &points, &seeds);

        debug!(
            frames = cache.cycle_length(),
            particles = cache.iter().map(Frame::len).sum::<usize>(),
            "frame cache ready"
        );

        Ok(Self { config, points, cache })
    }

    /// Particles of frame `index`, wrapped into the cycle.
    #[inline]
    pub fn get_frame(&self, index: i64) -> &[Particle] {
        self.cache.get(index).particles()
    }

    /// Frame `index` with its halo/body split, wrapped into the cycle.
    #[inline]
    pub fn frame(&self, index: i64) -> &Frame {
        self.cache.get(index)
    }

    /// Number of frames in one loop.
    #[inline]
    pub fn cycle_length(&self) -> usize {
        self.cache.cycle_length()
    }

    /// The static point populations.
    #[inline]
    pub fn points(&self) -> &PointSets {
        &self.points
    }

    /// The precomputed frames.
    #[inline]
    pub fn cache(&self) -> &FrameCache {
        &self.cache
    }

    /// The configuration the heart was built from.
    #[inline]
    pub fn config(&self) -> &HeartConfig {
        &self.config
    }
}

fn synthesize_seeded(index: usize, seed: u64, config: &HeartConfig, points: &PointSets) -> Frame {
    let mut rng = frame_rng(seed);
    let frame = synthesize_frame(index, points, config, &mut SpawnContext::new(&mut rng));
    trace!(index, particles = frame.len(), halo = frame.halo().len(), "frame synthesized");
    frame
}

#[cfg(feature = "parallel")]
fn precompute(config: &HeartConfig, points: &PointSets, seeds: &[u64]) -> FrameCache {
    let frames: Vec<Frame> = seeds
        .par_iter()
        .enumerate()
        .map(|(index, &seed)| synthesize_seeded(index, seed, config, points))
        .collect();
    FrameCache::from_frames(frames)
}

#[cfg(not(feature = "parallel"))]
fn precompute(config: &HeartConfig, points: &PointSets, seeds: &[u64]) -> FrameCache {
    FrameCache::precompute(seeds.len(), |index| synthesize_seeded(index, seeds[index], config, points))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config() -> HeartConfig {
        HeartConfig::new().with_sample_count(200).with_cycle_length(5)
    }

    #[test]
    fn test_rejects_invalid_config() {
        let err = Heart::new(HeartConfig::new().with_cycle_length(0)).unwrap_err();
        assert_eq!(err, ConfigError::ZeroCycleLength);

        let mut rng = SmallRng::seed_from_u64(1);
        let err = Heart::with_rng(HeartConfig::new().with_sample_count(0), &mut rng).unwrap_err();
        assert_eq!(err, ConfigError::ZeroSampleCount);
    }

    #[test]
    fn test_point_sets_sizes() {
        let config = small_config();
        let mut rng = SmallRng::seed_from_u64(2);
        let sets = PointSets::build(&config, &mut SpawnContext::new(&mut rng));

        assert_eq!(sets.base.len(), 200);
        assert!(!sets.edge.is_empty() && sets.edge.len() <= 200 * 3);
        assert!(!sets.center.is_empty() && sets.center.len() <= sets.edge.len() * 3);
    }

    #[test]
    fn test_huge_pulse_is_config_error() {
        let config = HeartConfig::new()
            .with_seed(1)
            .with_sample_count(10)
            .with_cycle_length(2)
            .with_pulse_amplitude(1e10);
        let err = Heart::new(config).unwrap_err();
        assert!(matches!(err, ConfigError::HaloTooDense { .. }));
    }

    #[test]
    fn test_parallel_and_sequential_caches_match() {
        let config = small_config();
        let mut rng = SmallRng::seed_from_u64(31);
        let mut ctx = SpawnContext::new(&mut rng);
        let points = PointSets::build(&config, &mut ctx);
        let seeds: Vec<u64> = (0..config.cycle_length).map(|_| ctx.fork_seed()).collect();

        let built = precompute(&config, &points, &seeds);
        let sequential = FrameCache::precompute(seeds.len(), |index| {
            synthesize_seeded(index, seeds[index], &config, &points)
        });
        assert_eq!(built, sequential);
    }

    #[test]
    fn test_base_draws_have_absolute_ceiling() {
        // The per-sample budget alone would allow billions of draws here.
        let config = HeartConfig::new().with_enlarge(0.5, 0.6).with_sample_count(usize::MAX / 64);
        let mut rng = SmallRng::seed_from_u64(32);
        let sets = PointSets::build(&config, &mut SpawnContext::new(&mut rng));
        assert!(!sets.base.is_empty());
        assert!(sets.base.len() <= MAX_BASE_DRAWS);
    }

    #[test]
    fn test_base_saturates_gracefully() {
        // A tiny heart has far fewer distinct pixels than requested.
        let config = HeartConfig::new().with_enlarge(0.5, 0.6).with_sample_count(5000);
        let mut rng = SmallRng::seed_from_u64(3);
        let sets = PointSets::build(&config, &mut SpawnContext::new(&mut rng));
        assert!(!sets.base.is_empty());
        assert!(sets.base.len() < 5000);
    }

    #[test]
    fn test_cache_has_every_frame() {
        let heart = Heart::new(small_config().with_seed(9)).unwrap();
        assert_eq!(heart.cycle_length(), 5);
        assert_eq!(heart.cache().iter().count(), 5);
        for i in 0..5 {
            assert!(!heart.get_frame(i).is_empty());
        }
    }

    #[test]
    fn test_seeded_builds_match() {
        let a = Heart::new(small_config().with_seed(77)).unwrap();
        let b = Heart::new(small_config().with_seed(77)).unwrap();
        assert_eq!(a.points(), b.points());
        assert_eq!(a.cache(), b.cache());
    }

    #[test]
    fn test_heart_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Heart>();
    }
}
