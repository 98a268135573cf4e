//! Background palette.

use pastel_core::Color32;

/// Top color of the background gradient (pastel pink).
pub const BACKGROUND_TOP_COLOR: Color32 = Color32::from_argb(0xFFFF_C0CB);

/// Bottom color of the background gradient.
pub const BACKGROUND_BOTTOM_COLOR: Color32 = Color32::from_argb(0xFFFF_E0F0);

/// Alpha used for the representative background tint.
const REPRESENTATIVE_ALPHA: f32 = 0.65;

/// Tint of the colored floating symbols.
pub(crate) const SYMBOL_COLORED_TINT: Color32 = Color32::from_argb(0xFFFF_C0CB);

/// Tint of the muted floating symbols.
pub(crate) const SYMBOL_MUTED_TINT: Color32 = Color32::from_argb(0xFFDD_C0DD);

/// Representative background tint for widgets that need one without drawing.
pub fn background_color_with_alpha() -> Color32 {
    BACKGROUND_TOP_COLOR.with_alpha(REPRESENTATIVE_ALPHA)
}
