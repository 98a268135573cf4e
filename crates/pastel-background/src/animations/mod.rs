//! Animations drawn over the background gradient.

mod floating;

pub use floating::{FloatingSymbols, bob_offset, rotation};

use pastel_core::{AnimationVariant, Origin};

use crate::context::DrawContext;

/// An animation overlay. Each kind owns only its own cached geometry.
#[derive(Debug, Clone)]
pub enum Animation {
    FloatingSymbols(FloatingSymbols),
}

impl Animation {
    /// Build the animation for a variant, or `None` for [`AnimationVariant::Off`].
    ///
    /// Both floating variants currently use the colored tint.
    pub fn for_variant(variant: AnimationVariant) -> Option<Self> {
        match variant {
            AnimationVariant::FloatingSymbols | AnimationVariant::FloatingSymbolsColored => {
                Some(Animation::FloatingSymbols(FloatingSymbols::new(true)))
            }
            AnimationVariant::Off => None,
        }
    }

    /// Draw one frame at `time` seconds.
    pub fn draw<C: DrawContext + ?Sized>(
        &mut self,
        ctx: &mut C,
        time: f64,
        alpha: f32,
        origin: Origin,
    ) {
        match self {
            Animation::FloatingSymbols(symbols) => symbols.draw(ctx, time, alpha, origin),
        }
    }
}
