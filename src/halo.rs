//! The pulsing halo around the heart.
//!
//! Each frame samples the curve at a slightly larger scale and pushes the
//! samples outward with a radial force whose strength is the frame's halo
//! radius. Samples that land on an already-used spot are dropped, the rest
//! are jittered by up to 14 pixels and emitted as small dots.

use crate::config::HeartConfig;
use crate::curve::sample_heart;
use crate::force::radial_offset;
use crate::point::{Particle, Point2D};
use crate::spawn::SpawnContext;
use glam::DVec2;
use rand::Rng;
use std::collections::HashSet;

/// Exponent applied to the squared distance in the halo push.
const HALO_FALLOFF: f64 = 0.6;
/// Maximum per-axis jitter, in pixels.
const HALO_JITTER: i32 = 14;
/// Size table. Repeated entries make 2 twice as likely as 1.
const HALO_SIZES: [u32; 3] = [1, 2, 2];

/// Append up to `count` halo particles to `out`, pushed out by `radius`.
///
/// Returns how many particles were appended.
pub fn generate_halo<R: Rng + ?Sized>(
    count: usize,
    radius: u32,
    config: &HeartConfig,
    ctx: &mut SpawnContext<'_, R>,
    out: &mut Vec<Particle>,
) -> usize {
    let center = config.center();
    let mut seen: HashSet<Point2D> = HashSet::with_capacity(count);
    let start = out.len();

    for _ in 0..count {
        let base = sample_heart(ctx.random_angle(), config.halo_enlarge, center).to_vec();
        // Negative strength: push away from the center.
        let pushed = base - radial_offset(base, center, -(radius as f64), HALO_FALLOFF);

        if !seen.insert(pushed.into()) {
            continue;
        }

        let jitter = DVec2::new(
            ctx.random_int(-HALO_JITTER, HALO_JITTER) as f64,
            ctx.random_int(-HALO_JITTER, HALO_JITTER) as f64,
        );
        let size = ctx.pick(&HALO_SIZES);
        out.push(Particle::new(pushed + jitter, size));
    }

    out.len() - start
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::heart_offset;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_halo_count_bounded_and_sizes_valid() {
        let config = HeartConfig::default();
        let mut rng = SmallRng::seed_from_u64(11);
        let mut ctx = SpawnContext::new(&mut rng);
        let mut out = Vec::new();

        let n = generate_halo(1500, 10, &config, &mut ctx, &mut out);
        assert_eq!(n, out.len());
        assert!(n > 0 && n <= 1500);
        assert!(out.iter().all(|p| p.size == 1 || p.size == 2));
    }

    #[test]
    fn test_halo_drops_repeated_samples() {
        // The curve at this scale has only a couple thousand whole-pixel
        // points, so most of these draws land on a spot already taken.
        let config = HeartConfig::default();
        let mut rng = SmallRng::seed_from_u64(15);
        let mut ctx = SpawnContext::new(&mut rng);
        let mut out = Vec::new();

        let n = generate_halo(20_000, 10, &config, &mut ctx, &mut out);
        assert!(n < 20_000 / 2, "expected heavy dedupe, got {}", n);
    }

    #[test]
    fn test_halo_appends_after_existing() {
        let config = HeartConfig::default();
        let mut rng = SmallRng::seed_from_u64(12);
        let mut ctx = SpawnContext::new(&mut rng);
        let marker = Particle { x: -1.0, y: -1.0, size: 9 };
        let mut out = vec![marker];

        let n = generate_halo(100, 8, &config, &mut ctx, &mut out);
        assert_eq!(out.len(), n + 1);
        assert_eq!(out[0], marker);
    }

    #[test]
    fn test_halo_stays_near_scaled_curve() {
        let config = HeartConfig::default();
        let center = config.center();
        let mut rng = SmallRng::seed_from_u64(13);
        let mut ctx = SpawnContext::new(&mut rng);
        let mut out = Vec::new();
        generate_halo(500, 16, &config, &mut ctx, &mut out);

        let max_curve = (0..360)
            .map(|d| heart_offset((d as f64).to_radians(), config.halo_enlarge).length())
            .fold(0.0, f64::max);
        let jitter = (2.0 * (HALO_JITTER as f64).powi(2)).sqrt();
        for p in &out {
            let d = (DVec2::new(p.x as f64, p.y as f64) - center).length();
            // The push adds radius * |d|^-0.2 < radius pixels; truncation adds under 2.
            assert!(d <= max_curve + 16.0 + jitter + 4.0, "dot too far: {}", d);
        }
    }

    #[test]
    fn test_zero_count_emits_nothing() {
        let config = HeartConfig::default();
        let mut rng = SmallRng::seed_from_u64(14);
        let mut ctx = SpawnContext::new(&mut rng);
        let mut out = Vec::new();
        assert_eq!(generate_halo(0, 10, &config, &mut ctx, &mut out), 0);
        assert!(out.is_empty());
    }
}
