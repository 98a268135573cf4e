//! Menu background rendering for pastel.
//!
//! The background is a vertical gradient with an optional animation overlay.
//! [`BackgroundController`] owns the active [`Animation`], follows the
//! configured [`AnimationVariant`](pastel_core::AnimationVariant) and issues
//! the per-frame draw sequence against any [`DrawContext`].
//! [`TerminalCanvas`] is a [`DrawContext`] backed by a ratatui buffer.

mod animations;
mod chars;
mod color;
mod context;
mod point_field;
mod state;
mod terminal;

#[cfg(any(test, feature = "test-helpers"))]
pub mod testing;

pub use animations::{Animation, FloatingSymbols, bob_offset, rotation};
pub use color::{
    BACKGROUND_BOTTOM_COLOR, BACKGROUND_TOP_COLOR, background_color_with_alpha,
};
pub use context::{BackgroundTexture, Clock, DrawContext, ImageId, SystemClock};
pub use point_field::{PointField, generate, point_count, seed_from_time};
pub use state::BackgroundController;
pub use terminal::{CELL_HEIGHT, CELL_WIDTH, TerminalCanvas};

/// Image drawn for each floating symbol.
pub const FLOATING_SYMBOL_IMAGE: ImageId = ImageId("I_FLOATING_SYMBOL");
