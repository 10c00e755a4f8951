//! Error types for heartbeat.
//!
//! Construction is the only fallible operation. Everything after it
//! (frame playback, particle access) is total.

use std::fmt;

/// Errors reported when a [`HeartConfig`](crate::HeartConfig) is rejected.
///
/// Validation runs before any sampling work begins, so a failed
/// construction never leaves partially built state behind.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// The base curve must be sampled at least once.
    ZeroSampleCount,
    /// The animation needs at least one frame.
    ZeroCycleLength,
    /// Each source point must yield at least one diffused candidate.
    ZeroDiffusionIterations,
    /// A diffusion intensity was negative, NaN or infinite.
    InvalidBeta {
        /// Which population the intensity belongs to ("edge" or "center").
        population: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// A curve scale factor was zero, negative or non-finite.
    InvalidScale {
        /// Which scale was rejected ("enlarge" or "halo_enlarge").
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// The pulse amplitude was non-finite.
    InvalidPulseAmplitude(f64),
    /// The pulse amplitude would ask the halo for more draws per frame than allowed.
    HaloTooDense {
        /// The rejected amplitude.
        amplitude: f64,
        /// Draw count at the pulse crest.
        peak_count: f64,
        /// Largest accepted draw count.
        limit: usize,
    },
    /// The canvas has zero width or height.
    EmptyCanvas {
        /// Canvas width in pixels.
        width: u32,
        /// Canvas height in pixels.
        height: u32,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroSampleCount => {
                write!(f, "Sample count must be positive. Use .with_sample_count(n) with n > 0.")
            }
            ConfigError::ZeroCycleLength => {
                write!(f, "Cycle length must be positive. Use .with_cycle_length(n) with n > 0.")
            }
            ConfigError::ZeroDiffusionIterations => {
                write!(f, "Diffusion iterations must be positive.")
            }
            ConfigError::InvalidBeta { population, value } => {
                write!(f, "Invalid {} diffusion beta {}: must be finite and non-negative", population, value)
            }
            ConfigError::InvalidScale { name, value } => {
                write!(f, "Invalid {} scale {}: must be finite and positive", name, value)
            }
            ConfigError::InvalidPulseAmplitude(value) => {
                write!(f, "Invalid pulse amplitude {}: must be finite", value)
            }
            ConfigError::HaloTooDense { amplitude, peak_count, limit } => {
                write!(
                    f,
                    "Pulse amplitude {} needs {:.0} halo draws per frame, more than the limit of {}",
                    amplitude, peak_count, limit
                )
            }
            ConfigError::EmptyCanvas { width, height } => {
                write!(f, "Canvas must have a non-zero area, got {}x{}", width, height)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_mentions_value() {
        let err = ConfigError::InvalidBeta { population: "edge", value: -0.5 };
        let msg = err.to_string();
        assert!(msg.contains("edge"));
        assert!(msg.contains("-0.5"));
    }

    #[test]
    fn test_halo_display_names_limit() {
        let err = ConfigError::HaloTooDense { amplitude: 1e10, peak_count: 2e23, limit: 1_000_000 };
        assert!(err.to_string().contains("1000000"));
    }

    #[test]
    fn test_canvas_display() {
        let err = ConfigError::EmptyCanvas { width: 0, height: 480 };
        assert_eq!(err.to_string(), "Canvas must have a non-zero area, got 0x480");
    }
}
