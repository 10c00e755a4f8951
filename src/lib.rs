//! # heartbeat - pulsing particle heart
//!
//! Procedurally generates a heart drawn in particles: the classic parametric
//! heart curve, diffused outward into a soft outline and a glowing interior,
//! ringed by a halo, and breathing in and out over a short loop of
//! precomputed frames.
//!
//! The crate only produces data. A renderer asks for frame `n` and draws
//! the returned `(x, y, size)` particles however it likes.
//!
//! ## Quick Start
//!
//! ```
//! use heartbeat::prelude::*;
//!
//! let heart = Heart::new(HeartConfig::new().with_seed(42).with_cycle_length(4))?;
//!
//! for frame in 0..8 {
//!     for particle in heart.get_frame(frame) {
//!         // draw a dot of `particle.size` pixels at (particle.x, particle.y)
//!         let _ = particle;
//!     }
//! }
//! # Ok::<(), heartbeat::ConfigError>(())
//! ```
//!
//! ## Core Concepts
//!
//! ### Point populations
//!
//! Built once at construction:
//! - **base**: whole-pixel points sampled from the curve
//! - **edge**: base points scattered toward the center with a small beta
//! - **center**: edge points scattered again with a larger beta
//!
//! ### Frames
//!
//! Each frame combines a freshly generated halo with every static point,
//! moved by a radial breathing force driven by the [`Pulse`]. All frames of
//! the cycle are synthesized up front (in parallel with the `parallel`
//! feature) and played back by index with wraparound.
//!
//! ### Randomness
//!
//! All draws go through an injected [`rand::Rng`]. Set
//! [`HeartConfig::with_seed`] or call [`Heart::with_rng`] for reproducible
//! output.
//!
//! ## Feature Overview
//!
//! | Piece | Entry point |
//! |-------|-------------|
//! | Curve | [`sample_heart`], [`heart_offset`] |
//! | Pulse | [`Pulse`] |
//! | Diffusion | [`diffusion::scatter_toward`], [`diffusion::diffuse`] |
//! | Halo | [`halo::generate_halo`] |
//! | Composition | [`compositor::synthesize_frame`] |
//! | Playback | [`Heart::get_frame`], [`FrameCache`] |

mod cache;
pub mod compositor;
mod config;
mod curve;
pub mod diffusion;
mod error;
mod force;
pub mod halo;
mod heart;
mod point;
mod spawn;

pub use bytemuck;
pub use cache::{Frame, FrameCache};
pub use config::{HeartConfig, MAX_HALO_DRAWS};
pub use curve::{heart_offset, sample_heart, Pulse};
pub use error::ConfigError;
pub use force::radial_offset;
pub use glam::{DVec2, Vec3};
pub use heart::{Heart, PointSets};
pub use point::{Particle, Point2D, PointSet};
pub use spawn::{frame_rng, SpawnContext};

/// Convenient re-exports for common usage.
///
/// ```
/// use heartbeat::prelude::*;
/// ```
pub mod prelude {
    pub use crate::cache::{Frame, FrameCache};
    pub use crate::config::HeartConfig;
    pub use crate::curve::Pulse;
    pub use crate::error::ConfigError;
    pub use crate::heart::Heart;
    pub use crate::point::{Particle, Point2D, PointSet};
    pub use crate::{DVec2, Vec3};
}
