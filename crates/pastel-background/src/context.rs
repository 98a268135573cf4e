//! Collaborators the background draws through.

use std::fmt;

use chrono::Utc;
use pastel_core::{Bounds, Color32};

/// Symbolic name of an image resolved by the rendering context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageId(pub &'static str);

/// Immediate-mode drawing surface.
///
/// Textured draws (`draw_image_rotated`) belong between `begin` and `flush`,
/// untextured draws (`rect_v_gradient`) between `begin_no_tex` and `flush`.
/// Resolving image ids is the context's job; an unknown id draws nothing.
pub trait DrawContext {
    /// Viewport rectangle in pixels.
    fn bounds(&self) -> Bounds;

    /// Submit the pending batch.
    fn flush(&mut self);

    /// Start a textured batch.
    fn begin(&mut self);

    /// Start an untextured batch.
    fn begin_no_tex(&mut self);

    /// Draw `image` centered at `(x, y)`, scaled and rotated by `angle` radians.
    fn draw_image_rotated(
        &mut self,
        image: ImageId,
        x: f32,
        y: f32,
        scale: f32,
        angle: f32,
        color: Color32,
    );

    /// Fill a rectangle with a vertical gradient from `top` to `bottom`.
    fn rect_v_gradient(
        &mut self,
        x0: f32,
        y0: f32,
        x1: f32,
        y1: f32,
        top: Color32,
        bottom: Color32,
    );
}

/// Wall-clock time source used for animation phase and reseeding.
pub trait Clock {
    /// Seconds since the Unix epoch.
    fn now_seconds(&self) -> f64;
}

/// [`Clock`] reading the system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_seconds(&self) -> f64 {
        Utc::now().timestamp_micros() as f64 / 1_000_000.0
    }
}

/// A GPU or backend resource held for the background image.
pub trait BackgroundTexture: fmt::Debug {
    /// Release the underlying resource. Called exactly once per handle.
    fn release(&mut self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock_is_after_epoch() {
        // 2020-01-01
        assert!(SystemClock.now_seconds() > 1_577_836_800.0);
    }
}
