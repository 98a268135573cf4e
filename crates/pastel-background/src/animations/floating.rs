//! Floating symbols bobbing slowly over the background.

use pastel_core::{Color32, Origin};

use crate::FLOATING_SYMBOL_IMAGE;
use crate::color::{SYMBOL_COLORED_TINT, SYMBOL_MUTED_TINT};
use crate::context::DrawContext;
use crate::point_field::PointField;

/// Peak vertical bob in pixels.
const BOB_AMPLITUDE: f32 = 20.0;
/// Phase step between neighbouring symbols.
const BOB_PHASE_STEP: f64 = 5.0;
/// Time scaling shared by bob and rotation.
const TIME_SCALE: f64 = 0.1;
/// Sprite scale.
const SYMBOL_SCALE: f32 = 0.5;
const COLORED_OPACITY: f32 = 0.3;
const MUTED_OPACITY: f32 = 0.2;

/// Vertical offset of symbol `index` at `time`.
pub fn bob_offset(index: usize, time: f64) -> f32 {
    BOB_AMPLITUDE * (index as f64 * BOB_PHASE_STEP + time * TIME_SCALE).cos() as f32
}

/// Rotation in radians of symbol `index` at `time`.
pub fn rotation(index: usize, time: f64) -> f32 {
    (index as f64 + time * TIME_SCALE).sin() as f32
}

/// Symbols anchored on a [`PointField`] that follows the viewport size.
#[derive(Debug, Clone)]
pub struct FloatingSymbols {
    colored: bool,
    field: PointField,
}

impl FloatingSymbols {
    pub fn new(colored: bool) -> Self {
        Self {
            colored,
            field: PointField::new(),
        }
    }

    pub fn is_colored(&self) -> bool {
        self.colored
    }

    pub fn field(&self) -> &PointField {
        &self.field
    }

    /// Tint for the given frame alpha.
    pub fn tint(&self, alpha: f32) -> Color32 {
        if self.colored {
            SYMBOL_COLORED_TINT.with_alpha(alpha * COLORED_OPACITY)
        } else {
            SYMBOL_MUTED_TINT.with_alpha(alpha * MUTED_OPACITY)
        }
    }

    pub fn draw<C: DrawContext + ?Sized>(
        &mut self,
        ctx: &mut C,
        time: f64,
        alpha: f32,
        origin: Origin,
    ) {
        let bounds = ctx.bounds();

        ctx.flush();
        ctx.begin();
        self.field.ensure_size(bounds.w, bounds.h, time);

        let tint = self.tint(alpha);
        for (i, point) in self.field.points().iter().enumerate() {
            let x = point.x + origin.x;
            let y = point.y + origin.y + bob_offset(i, time);
            ctx.draw_image_rotated(
                FLOATING_SYMBOL_IMAGE,
                x,
                y,
                SYMBOL_SCALE,
                rotation(i, time),
                tint,
            );
        }

        ctx.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{DrawCommand, RecordingContext};
    use pastel_core::Bounds;

    #[test]
    fn test_bob_offset_formula() {
        assert!((bob_offset(0, 0.0) - 20.0).abs() < 1e-5);
        let expected = 20.0 * (3.0f64 * 5.0 + 12.0 * 0.1).cos() as f32;
        assert!((bob_offset(3, 12.0) - expected).abs() < 1e-5);
    }

    #[test]
    fn test_rotation_formula() {
        assert!(rotation(0, 0.0).abs() < 1e-6);
        let expected = (2.0f64 + 40.0 * 0.1).sin() as f32;
        assert!((rotation(2, 40.0) - expected).abs() < 1e-6);
    }

    #[test]
    fn test_offsets_vary_continuously() {
        let t = 1_760_000_000.0;
        for i in 0..8 {
            let d = (bob_offset(i, t + 1e-3) - bob_offset(i, t)).abs();
            assert!(d < 1e-2, "bob jumped by {d} for symbol {i}");
            let r = (rotation(i, t + 1e-3) - rotation(i, t)).abs();
            assert!(r < 1e-3, "rotation jumped by {r} for symbol {i}");
        }
    }

    #[test]
    fn test_tint() {
        let colored = FloatingSymbols::new(true).tint(1.0);
        assert_eq!(colored.0 & 0x00FF_FFFF, 0x00FF_C0CB);
        assert_eq!(colored.alpha(), (0.3f32 * 255.0) as u8);

        let muted = FloatingSymbols::new(false).tint(1.0);
        assert_eq!(muted.0 & 0x00FF_FFFF, 0x00DD_C0DD);
        assert_eq!(muted.alpha(), (0.2f32 * 255.0) as u8);
    }

    #[test]
    fn test_draw_brackets_batch_and_draws_each_point() {
        let mut ctx = RecordingContext::new(Bounds::new(0.0, 0.0, 1280.0, 720.0));
        let mut symbols = FloatingSymbols::new(true);
        symbols.draw(&mut ctx, 100.0, 1.0, Origin::ZERO);

        let commands = &ctx.commands;
        assert_eq!(commands[0], DrawCommand::Flush);
        assert_eq!(commands[1], DrawCommand::Begin);
        assert_eq!(commands.last(), Some(&DrawCommand::Flush));
        assert_eq!(ctx.images().len(), 10);
        assert_eq!(symbols.field().len(), 10);
    }

    #[test]
    fn test_draw_applies_origin_and_motion() {
        let mut ctx = RecordingContext::new(Bounds::new(0.0, 0.0, 600.0, 300.0));
        let mut symbols = FloatingSymbols::new(false);
        let time = 7.5;
        symbols.draw(&mut ctx, time, 0.5, Origin::new(10.0, -4.0, 0.0));

        let anchors = symbols.field().points().to_vec();
        let images = ctx.images();
        assert_eq!(images.len(), anchors.len());
        for (i, (image, anchor)) in images.iter().zip(&anchors).enumerate() {
            assert_eq!(image.image, FLOATING_SYMBOL_IMAGE);
            assert!((image.x - (anchor.x + 10.0)).abs() < 1e-4);
            assert!((image.y - (anchor.y - 4.0 + bob_offset(i, time))).abs() < 1e-4);
            assert_eq!(image.scale, 0.5);
            assert_eq!(image.angle, rotation(i, time));
            assert_eq!(image.color, symbols.tint(0.5));
        }
    }

    #[test]
    fn test_draw_keeps_field_while_size_is_unchanged() {
        let mut ctx = RecordingContext::new(Bounds::new(0.0, 0.0, 1920.0, 1080.0));
        let mut symbols = FloatingSymbols::new(true);
        symbols.draw(&mut ctx, 1.0, 1.0, Origin::ZERO);
        let first = symbols.field().points().to_vec();

        symbols.draw(&mut ctx, 2.0, 1.0, Origin::ZERO);
        assert_eq!(symbols.field().points(), first.as_slice());

        ctx.bounds = Bounds::new(0.0, 0.0, 900.0, 600.0);
        symbols.draw(&mut ctx, 3.0, 1.0, Origin::ZERO);
        assert_eq!(symbols.field().len(), 6);
    }
}
