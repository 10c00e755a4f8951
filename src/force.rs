//! Static radial force used by the halo and the breathing transform.

use glam::DVec2;

/// Offset of `point` from `center`, scaled by `strength / (|d|²)^falloff`.
///
/// The result is what gets subtracted from `point`: positive strength pulls
/// toward the center, negative pushes away. At the center itself the offset
/// is zero, so the point is left where it is.
#[inline]
pub fn radial_offset(point: DVec2, center: DVec2, strength: f64, falloff: f64) -> DVec2 {
    let d = point - center;
    let dist_sq = d.length_squared();
    if dist_sq == 0.0 {
        return DVec2::ZERO;
    }
    d * (strength / dist_sq.powf(falloff))
}
