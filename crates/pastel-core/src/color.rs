//! Packed 32-bit colors.

use ratatui::style::Color;

/// A color packed as `0xAARRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color32(pub u32);

impl Color32 {
    pub const fn from_argb(argb: u32) -> Self {
        Self(argb)
    }

    pub fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    pub fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub fn blue(self) -> u8 {
        self.0 as u8
    }

    /// Alpha as a fraction in `[0, 1]`.
    pub fn alpha_f32(self) -> f32 {
        self.alpha() as f32 / 255.0
    }

    /// Replace the alpha channel, keeping RGB. `alpha` is clamped to `[0, 1]`.
    pub fn with_alpha(self, alpha: f32) -> Self {
        let alpha = if alpha.is_nan() { 0.0 } else { alpha.clamp(0.0, 1.0) };
        let a = (alpha * 255.0) as u32;
        Self((a << 24) | (self.0 & 0x00FF_FFFF))
    }

    /// Linear interpolation between two colors, channel by channel.
    pub fn lerp(self, other: Color32, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u32;
        Self(
            (mix(self.alpha(), other.alpha()) << 24)
                | (mix(self.red(), other.red()) << 16)
                | (mix(self.green(), other.green()) << 8)
                | mix(self.blue(), other.blue()),
        )
    }

    /// Composite this color over an opaque RGB background.
    pub fn over(self, background: (u8, u8, u8)) -> (u8, u8, u8) {
        let a = self.alpha_f32();
        let blend = |fg: u8, bg: u8| (fg as f32 * a + bg as f32 * (1.0 - a)).round() as u8;
        (
            blend(self.red(), background.0),
            blend(self.green(), background.1),
            blend(self.blue(), background.2),
        )
    }
}

impl From<Color32> for Color {
    fn from(color: Color32) -> Self {
        Color::Rgb(color.red(), color.green(), color.blue())
    }
}
