//! Per-frame composition of halo and heart body.
//!
//! The body breathes: every static point is pulled toward (or pushed away
//! from) the center by `10 * pulse(frame)` with a soft `|d|^-1.04` falloff,
//! plus a one-pixel random wobble.

use crate::cache::Frame;
use crate::config::{HeartConfig, MAX_HALO_DRAWS};
use crate::curve::Pulse;
use crate::force::radial_offset;
use crate::halo::generate_halo;
use crate::heart::PointSets;
use crate::point::{Particle, PointSet};
use crate::spawn::SpawnContext;
use glam::DVec2;
use rand::Rng;

/// Exponent applied to the squared distance in the breathing transform.
const BODY_FALLOFF: f64 = 0.52;
/// Largest size drawn for base curve points.
const BASE_MAX_SIZE: u32 = 3;
/// Largest size drawn for diffused points.
const DIFFUSED_MAX_SIZE: u32 = 2;

/// Build the particle list for `frame`.
pub fn synthesize_frame<R: Rng + ?Sized>(
    frame: usize,
    sets: &PointSets,
    config: &HeartConfig,
    ctx: &mut SpawnContext<'_, R>,
) -> Frame {
    let pulse = Pulse::new(config.pulse_amplitude);
    let ratio = pulse.scale_ratio(frame);
    let halo_count = pulse.halo_count(frame).min(MAX_HALO_DRAWS);

    let body_len = sets.base.len().saturating_add(sets.edge.len()).saturating_add(sets.center.len());
    let mut particles = Vec::with_capacity(halo_count.saturating_add(body_len));

    let halo_len = generate_halo(halo_count, pulse.halo_radius(frame), config, ctx, &mut particles);

    let center = config.center();
    breathe(&sets.base, ratio, center, BASE_MAX_SIZE, ctx, &mut particles);
    breathe(&sets.edge, ratio, center, DIFFUSED_MAX_SIZE, ctx, &mut particles);
    breathe(&sets.center, ratio, center, DIFFUSED_MAX_SIZE, ctx, &mut particles);

    Frame::new(particles, halo_len)
}

fn breathe<R: Rng + ?Sized>(
    points: &PointSet,
    ratio: f64,
    center: DVec2,
    max_size: u32,
    ctx: &mut SpawnContext<'_, R>,
    out: &mut Vec<Particle>,
) {
    for point in points {
        let p = point.to_vec();
        let wobble = DVec2::new(ctx.random_int(-1, 1) as f64, ctx.random_int(-1, 1) as f64);
        let moved = p - (radial_offset(p, center, ratio, BODY_FALLOFF) + wobble);
        out.push(Particle::new(moved, ctx.random_size(max_size)));
    }
}
