//! Log-random radial diffusion.
//!
//! Each call pulls a point toward the canvas center by an independent
//! random fraction per axis. The fraction is `-beta * ln(u)` for `u` in
//! `(0, 1]`: exponentially distributed with mean `beta`, so most points
//! barely move and a long tail travels far.

use crate::point::{Point2D, PointSet};
use crate::spawn::SpawnContext;
use glam::DVec2;
use rand::Rng;

/// Move `point` toward `center` by a log-random ratio on each axis.
///
/// A point sitting on the center has zero offset and stays put.
pub fn scatter_toward<R: Rng + ?Sized>(
    point: Point2D,
    beta: f64,
    center: DVec2,
    ctx: &mut SpawnContext<'_, R>,
) -> Point2D {
    let ratio = DVec2::new(-beta * ctx.unit_open().ln(), -beta * ctx.unit_open().ln());
    let p = point.to_vec();
    (p - ratio * (p - center)).into()
}

/// Build a diffused population: `iterations` scattered candidates per
/// source point, deduplicated.
pub fn diffuse<R: Rng + ?Sized>(
    source: &PointSet,
    iterations: usize,
    beta: f64,
    center: DVec2,
    ctx: &mut SpawnContext<'_, R>,
) -> PointSet {
    let mut out = PointSet::new();
    for &point in source {
        for _ in 0..iterations {
            out.insert(scatter_toward(point, beta, center, ctx));
        }
    }
    out
}
