//! The heart curve and the pulse that animates it.
//!
//! # Heart curve
//!
//! ```text
//! x = 16 sin³(t)
//! y = -(13 cos t - 5 cos 2t - 2 cos 3t - cos 4t)
//! ```
//!
//! `y` is negated because canvas coordinates grow downward.
//!
//! # Pulse
//!
//! A single periodic driver, `amplitude * sin(4π · frame / 10)`, feeds the
//! breathing scale, the halo radius and the halo density so all three stay
//! in phase.

use crate::point::Point2D;
use glam::DVec2;
use std::f64::consts::PI;

/// Raw curve offset at `angle`, scaled but not translated or truncated.
#[inline]
pub fn heart_offset(angle: f64, scale: f64) -> DVec2 {
    let x = 16.0 * angle.sin().powi(3);
    let y = -(13.0 * angle.cos()
        - 5.0 * (2.0 * angle).cos()
        - 2.0 * (3.0 * angle).cos()
        - (4.0 * angle).cos());
    DVec2::new(x, y) * scale
}

/// Heart curve point at `angle`, scaled, moved to `center`, and truncated
/// to whole canvas pixels.
#[inline]
pub fn sample_heart(angle: f64, scale: f64, center: DVec2) -> Point2D {
    (heart_offset(angle, scale) + center).trunc().into()
}

/// The periodic driver of the animation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pulse {
    amplitude: f64,
}

impl Pulse {
    /// Pulse with the given peak value.
    pub fn new(amplitude: f64) -> Self {
        Self { amplitude }
    }

    /// Pulse value at `frame`.
    #[inline]
    pub fn at(&self, frame: usize) -> f64 {
        self.amplitude * (4.0 * (frame as f64 / 10.0) * PI).sin()
    }

    /// Breathing ratio applied to the heart body.
    #[inline]
    pub fn scale_ratio(&self, frame: usize) -> f64 {
        10.0 * self.at(frame)
    }

    /// Halo shrink radius. Never below 1.
    #[inline]
    pub fn halo_radius(&self, frame: usize) -> u32 {
        let r = (4.0 + 6.0 * (1.0 + self.at(frame))).trunc();
        r.max(1.0) as u32
    }

    /// Number of halo draws for `frame`.
    #[inline]
    pub fn halo_count(&self, frame: usize) -> usize {
        Self::draws_for(self.at(frame)).trunc() as usize
    }

    /// Halo draws at the crest of the pulse, before truncation.
    #[inline]
    pub fn peak_halo_count(&self) -> f64 {
        Self::draws_for(self.amplitude)
    }

    fn draws_for(pulse: f64) -> f64 {
        1000.0 + 2000.0 * pulse.abs().powi(2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, TAU};

    const EPS: f64 = 1e-9;

    #[test]
    fn test_offset_at_quarter_turn() {
        let p = heart_offset(FRAC_PI_2, 11.0);
        assert!((p.x - 176.0).abs() < EPS, "x = {}", p.x);
        assert!((p.y - -44.0).abs() < EPS, "y = {}", p.y);
    }

    #[test]
    fn test_bottom_tip() {
        // t = π puts the tip straight below the center.
        let p = heart_offset(PI, 1.0);
        assert!(p.x.abs() < EPS);
        assert!((p.y - 17.0).abs() < EPS);
    }

    #[test]
    fn test_sample_translates_and_truncates() {
        let center = DVec2::new(320.0, 240.0);
        // t = 0 is the notch at the top: every cosine is exactly 1.
        let p = sample_heart(0.0, 11.0, center);
        assert_eq!(p, Point2D::new(320.0, 185.0));

        let q = sample_heart(0.3, 11.0, center);
        assert_eq!(q.x, q.x.trunc());
        assert_eq!(q.y, q.y.trunc());
    }

    #[test]
    fn test_offset_periodic() {
        for t in [0.1, 0.7, 1.3, 2.9, 4.4, 5.8] {
            let a = heart_offset(t, 11.0);
            let b = heart_offset(t + TAU, 11.0);
            assert!((a - b).length() < 1e-9);
        }
    }

    #[test]
    fn test_pulse_zero_at_origin() {
        let pulse = Pulse::new(4.0 / PI);
        assert_eq!(pulse.at(0), 0.0);
        assert_eq!(pulse.scale_ratio(0), 0.0);
        assert_eq!(pulse.halo_radius(0), 10);
        assert_eq!(pulse.halo_count(0), 1000);
    }

    #[test]
    fn test_pulse_period_five_frames() {
        let pulse = Pulse::new(4.0 / PI);
        for f in 0..20 {
            assert!((pulse.at(f) - pulse.at(f + 5)).abs() < 1e-9);
        }
    }

    #[test]
    fn test_halo_radius_positive_for_large_amplitude() {
        let pulse = Pulse::new(10.0);
        for f in 0..20 {
            assert!(pulse.halo_radius(f) >= 1);
        }
    }

    #[test]
    fn test_peak_bounds_every_frame() {
        let pulse = Pulse::new(4.0 / PI);
        let peak = pulse.peak_halo_count();
        for f in 0..20 {
            assert!(pulse.halo_count(f) as f64 <= peak);
        }
    }

    #[test]
    fn test_halo_count_grows_with_pulse() {
        let pulse = Pulse::new(4.0 / PI);
        // Frame 1 sits near the crest of the sine.
        assert!(pulse.halo_count(1) > pulse.halo_count(0));
    }
}
