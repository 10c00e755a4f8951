//! Construction parameters for a [`Heart`](crate::Heart).
//!
//! Every tunable the engine reads lives on [`HeartConfig`]. There is no
//! process-wide state: two hearts built from different configs never
//! influence each other.
//!
//! # Example
//!
//! ```
//! use heartbeat::HeartConfig;
//!
//! let config = HeartConfig::new()
//!     .with_sample_count(2000)
//!     .with_cycle_length(30)
//!     .with_canvas(800, 600)
//!     .with_seed(7);
//! assert!(config.validate().is_ok());
//! ```

use crate::curve::Pulse;
use crate::error::ConfigError;
use glam::{DVec2, Vec3};
use std::f64::consts::PI;
use std::time::Duration;

/// Most halo draws a single frame may request.
pub const MAX_HALO_DRAWS: usize = 1_000_000;

/// Heart construction and animation parameters.
///
/// Defaults reproduce the classic 640x480 pulsing heart with a 20 frame
/// loop. Use the `with_*` methods to adjust individual knobs.
#[derive(Clone, Debug, PartialEq)]
pub struct HeartConfig {
    /// Number of distinct base points sampled from the curve.
    pub sample_count: usize,
    /// Candidates generated per source point for each diffused population.
    pub diffusion_iterations: usize,
    /// Diffusion intensity for the soft outline.
    pub edge_beta: f64,
    /// Diffusion intensity for the interior fill.
    pub center_beta: f64,
    /// Number of frames in one animation loop.
    pub cycle_length: usize,
    /// Canvas width in pixels.
    pub canvas_width: u32,
    /// Canvas height in pixels.
    pub canvas_height: u32,
    /// Curve scale for the base heart.
    pub enlarge: f64,
    /// Curve scale for the halo ring, slightly larger than `enlarge`.
    pub halo_enlarge: f64,
    /// Peak value of the pulse curve.
    pub pulse_amplitude: f64,
    /// Suggested particle color (RGB, 0.0-1.0). Renderers may ignore it.
    pub color: Vec3,
    /// Suggested delay between frames. Drivers may ignore it.
    pub frame_interval: Duration,
    /// Seed for the internal RNG. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for HeartConfig {
    fn default() -> Self {
        Self {
            sample_count: 1000,
            diffusion_iterations: 3,
            edge_beta: 0.05,
            center_beta: 0.17,
            cycle_length: 20,
            canvas_width: 640,
            canvas_height: 480,
            enlarge: 11.0,
            halo_enlarge: 11.6,
            pulse_amplitude: 4.0 / PI,
            // #ff2121
            color: Vec3::new(1.0, 33.0 / 255.0, 33.0 / 255.0),
            frame_interval: Duration::from_millis(20),
            seed: None,
        }
    }
}

impl HeartConfig {
    /// Create a config with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of distinct base points.
    pub fn with_sample_count(mut self, count: usize) -> Self {
        self.sample_count = count;
        self
    }

    /// Set how many diffused candidates each source point yields.
    pub fn with_diffusion_iterations(mut self, iterations: usize) -> Self {
        self.diffusion_iterations = iterations;
        self
    }

    /// Set the edge and center diffusion intensities.
    pub fn with_betas(mut self, edge: f64, center: f64) -> Self {
        self.edge_beta = edge;
        self.center_beta = center;
        self
    }

    /// Set the number of frames in one loop.
    pub fn with_cycle_length(mut self, frames: usize) -> Self {
        self.cycle_length = frames;
        self
    }

    /// Set the canvas size in pixels.
    pub fn with_canvas(mut self, width: u32, height: u32) -> Self {
        self.canvas_width = width;
        self.canvas_height = height;
        self
    }

    /// Set the base and halo curve scales.
    pub fn with_enlarge(mut self, base: f64, halo: f64) -> Self {
        self.enlarge = base;
        self.halo_enlarge = halo;
        self
    }

    /// Set the pulse curve amplitude.
    pub fn with_pulse_amplitude(mut self, amplitude: f64) -> Self {
        self.pulse_amplitude = amplitude;
        self
    }

    /// Set the suggested particle color.
    pub fn with_color(mut self, color: Vec3) -> Self {
        self.color = color;
        self
    }

    /// Set the suggested delay between frames.
    pub fn with_frame_interval(mut self, interval: Duration) -> Self {
        self.frame_interval = interval;
        self
    }

    /// Seed the internal RNG for reproducible output.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Canvas center in canvas coordinates.
    #[inline]
    pub fn center(&self) -> DVec2 {
        DVec2::new(self.canvas_width as f64 / 2.0, self.canvas_height as f64 / 2.0)
    }

    /// Check every knob, returning the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sample_count == 0 {
            return Err(ConfigError::ZeroSampleCount);
        }
        if self.cycle_length == 0 {
            return Err(ConfigError::ZeroCycleLength);
        }
        if self.diffusion_iterations == 0 {
            return Err(ConfigError::ZeroDiffusionIterations);
        }
        for (population, value) in [("edge", self.edge_beta), ("center", self.center_beta)] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidBeta { population, value });
            }
        }
        for (name, value) in [("enlarge", self.enlarge), ("halo_enlarge", self.halo_enlarge)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidScale { name, value });
            }
        }
        if !self.pulse_amplitude.is_finite() {
            return Err(ConfigError::InvalidPulseAmplitude(self.pulse_amplitude));
        }
        let peak_count = Pulse::new(self.pulse_amplitude).peak_halo_count();
        if peak_count > MAX_HALO_DRAWS as f64 {
            return Err(ConfigError::HaloTooDense {
                amplitude: self.pulse_amplitude,
                peak_count,
                limit: MAX_HALO_DRAWS,
            });
        }
        if self.canvas_width == 0 || self.canvas_height == 0 {
            return Err(ConfigError::EmptyCanvas {
                width: self.canvas_width,
                height: self.canvas_height,
            });
        }
        Ok(())
    }
}
