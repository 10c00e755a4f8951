//! Points, point sets and render-ready particles.

use bytemuck::{Pod, Zeroable};
use glam::DVec2;
use std::cmp::Ordering;
use std::collections::btree_set;
use std::collections::BTreeSet;
use std::hash::{Hash, Hasher};

/// A position in canvas space.
///
/// Equality, hashing and ordering all use the exact bit pattern of the
/// coordinates, so two points are the same only if they are numerically
/// identical. `-0.0` and `0.0` compare equal, however the point was built.
#[derive(Clone, Copy, Debug)]
pub struct Point2D {
    /// Horizontal canvas coordinate.
    pub x: f64,
    /// Vertical canvas coordinate (grows downward).
    pub y: f64,
}

impl Point2D {
    /// Create a point. Coordinates must not be NaN.
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        debug_assert!(!x.is_nan() && !y.is_nan(), "point coordinates must not be NaN");
        // `+ 0.0` turns -0.0 into 0.0 and leaves everything else alone.
        Self { x: x + 0.0, y: y + 0.0 }
    }

    /// The point as a glam vector.
    #[inline]
    pub fn to_vec(self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }

    /// Coordinates with `-0.0` folded into `0.0`.
    #[inline]
    fn folded(self) -> (f64, f64) {
        (self.x + 0.0, self.y + 0.0)
    }

    fn key(self) -> (u64, u64) {
        let (x, y) = self.folded();
        (x.to_bits(), y.to_bits())
    }
}

impl From<DVec2> for Point2D {
    #[inline]
    fn from(v: DVec2) -> Self {
        Point2D::new(v.x, v.y)
    }
}

impl PartialEq for Point2D {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Point2D {}

impl Hash for Point2D {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl PartialOrd for Point2D {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Point2D {
    fn cmp(&self, other: &Self) -> Ordering {
        let (ax, ay) = self.folded();
        let (bx, by) = other.folded();
        ax.total_cmp(&bx).then_with(|| ay.total_cmp(&by))
    }
}

/// A set of unique points with deterministic iteration order.
///
/// Duplicates collapse on insert. Iteration is sorted by `(x, y)`, which
/// keeps seeded frame synthesis reproducible across runs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PointSet {
    points: BTreeSet<Point2D>,
}

impl PointSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a point. Returns `false` if it was already present.
    #[inline]
    pub fn insert(&mut self, point: Point2D) -> bool {
        self.points.insert(point)
    }

    /// Whether the set holds this exact point.
    #[inline]
    pub fn contains(&self, point: &Point2D) -> bool {
        self.points.contains(point)
    }

    /// Number of unique points.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the set is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterate in ascending `(x, y)` order.
    pub fn iter(&self) -> btree_set::Iter<'_, Point2D> {
        self.points.iter()
    }
}

impl FromIterator<Point2D> for PointSet {
    fn from_iter<I: IntoIterator<Item = Point2D>>(iter: I) -> Self {
        Self { points: iter.into_iter().collect() }
    }
}

impl Extend<Point2D> for PointSet {
    fn extend<I: IntoIterator<Item = Point2D>>(&mut self, iter: I) {
        self.points.extend(iter);
    }
}

impl<'a> IntoIterator for &'a PointSet {
    type Item = &'a Point2D;
    type IntoIter = btree_set::Iter<'a, Point2D>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// One drawable dot of a frame.
///
/// Laid out as three 4-byte fields so a whole frame can be handed to a
/// vertex buffer with [`Particle::as_bytes`].
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct Particle {
    /// Horizontal canvas coordinate. May fall outside the canvas.
    pub x: f32,
    /// Vertical canvas coordinate. May fall outside the canvas.
    pub y: f32,
    /// Dot size in pixels, always at least 1.
    pub size: u32,
}

impl Particle {
    /// Create a particle at `position` with the given size.
    #[inline]
    pub fn new(position: DVec2, size: u32) -> Self {
        debug_assert!(size >= 1, "particle size must be positive");
        Self { x: position.x as f32, y: position.y as f32, size }
    }

    /// View a particle slice as raw bytes for GPU upload.
    #[inline]
    pub fn as_bytes(particles: &[Particle]) -> &[u8] {
        bytemuck::cast_slice(particles)
    }
}
