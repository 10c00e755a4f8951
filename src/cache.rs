//! Precomputed frame storage with cyclic playback.
//!
//! Frames are generated once, up front, and played back by index. Any
//! integer is a valid index: it wraps with a true modulo, so `-1` is the
//! last frame of the cycle.

use crate::point::Particle;

/// One synthesized frame.
///
/// Particles are ordered halo first, then base, edge and center points.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Frame {
    particles: Vec<Particle>,
    halo_len: usize,
}

impl Frame {
    /// Wrap a particle list whose first `halo_len` entries are halo dots.
    pub fn new(particles: Vec<Particle>, halo_len: usize) -> Self {
        debug_assert!(halo_len <= particles.len());
        Self { particles, halo_len }
    }

    /// All particles of the frame.
    #[inline]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// The leading halo particles.
    #[inline]
    pub fn halo(&self) -> &[Particle] {
        &self.particles[..self.halo_len]
    }

    /// The heart body particles (base, edge and center populations).
    #[inline]
    pub fn body(&self) -> &[Particle] {
        &self.particles[self.halo_len..]
    }

    /// Total particle count.
    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    /// Whether the frame has no particles.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}

/// Every frame of one animation cycle, indexed by frame number.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameCache {
    frames: Vec<Frame>,
}

impl FrameCache {
    /// Run `synth` for each index in `0..cycle_length` and keep the results.
    ///
    /// `cycle_length` must be positive; [`HeartConfig::validate`](crate::HeartConfig::validate)
    /// rejects zero before this is reached.
    pub(crate) fn precompute<F>(cycle_length: usize, synth: F) -> Self
    where
        F: FnMut(usize) -> Frame,
    {
        assert!(cycle_length > 0, "frame cache needs at least one frame");
        Self { frames: (0..cycle_length).map(synth).collect() }
    }

    /// Build from frames that were already synthesized, in index order.
    pub(crate) fn from_frames(frames: Vec<Frame>) -> Self {
        assert!(!frames.is_empty(), "frame cache needs at least one frame");
        Self { frames }
    }

    /// Number of frames in the cycle.
    #[inline]
    pub fn cycle_length(&self) -> usize {
        self.frames.len()
    }

    /// Frame at `index`, wrapped into the cycle.
    #[inline]
    pub fn get(&self, index: i64) -> &Frame {
        &self.frames[self.slot(index)]
    }

    /// Cycle slot for `index`. Never negative.
    #[inline]
    pub fn slot(&self, index: i64) -> usize {
        index.rem_euclid(self.frames.len() as i64) as usize
    }

    /// Iterate frames in cycle order.
    pub fn iter(&self) -> std::slice::Iter<'_, Frame> {
        self.frames.iter()
    }
}
