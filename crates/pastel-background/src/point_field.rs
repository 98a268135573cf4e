//! Procedural point field anchoring the floating symbols.

use pastel_core::Point2D;
use rand::{Rng, SeedableRng, rngs::StdRng};
use tracing::debug;

/// One point per `POINT_SPACING²` pixels of viewport area.
const POINT_SPACING: f64 = 300.0;

/// Multiplier turning wall-clock seconds into a generator seed.
const SEED_SCALE: f64 = 100_239.0;

/// Number of points for a viewport: `floor(width * height / 300²)`.
///
/// Zero, negative or non-finite dimensions give no points.
pub fn point_count(width: f32, height: f32) -> usize {
    if !(width > 0.0 && height > 0.0) {
        return 0;
    }
    let count = (width as f64 * height as f64 / (POINT_SPACING * POINT_SPACING)).floor();
    if count.is_finite() { count as usize } else { 0 }
}

/// Seed derived from a wall-clock reading.
pub fn seed_from_time(seconds: f64) -> u64 {
    (seconds * SEED_SCALE) as u64
}

/// Scatter [`point_count`] points uniformly over `[0, width) × [0, height)`.
pub fn generate(width: f32, height: f32, seed: u64) -> Vec<Point2D> {
    let count = point_count(width, height);
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| Point2D::new(rng.gen_range(0.0..width), rng.gen_range(0.0..height)))
        .collect()
}

/// Cached point field and the viewport size it was generated for.
#[derive(Debug, Clone, Default)]
pub struct PointField {
    points: Vec<Point2D>,
    width: f32,
    height: f32,
}

impl PointField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the field was generated for a different viewport size.
    pub fn needs_regeneration(&self, width: f32, height: f32) -> bool {
        self.width != width || self.height != height
    }

    /// Replace the points with a fresh scatter for the given size.
    pub fn regenerate(&mut self, width: f32, height: f32, seed: u64) {
        self.points = generate(width, height, seed);
        self.width = width;
        self.height = height;
        debug!(width, height, count = self.points.len(), "regenerated point field");
    }

    /// Regenerate only if the size changed, seeding from `now_seconds`.
    /// Returns whether a regeneration happened.
    pub fn ensure_size(&mut self, width: f32, height: f32, now_seconds: f64) -> bool {
        if !self.needs_regeneration(width, height) {
            return false;
        }
        self.regenerate(width, height, seed_from_time(now_seconds));
        true
    }

    pub fn points(&self) -> &[Point2D] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Viewport size the points were generated for.
    pub fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }
}
