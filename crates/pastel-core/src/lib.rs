//! Core types shared by the pastel crates.

mod color;
mod geometry;

pub use color::Color32;
pub use geometry::{Bounds, Origin, Point2D};

/// Kind of animation drawn on top of the background gradient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum AnimationVariant {
    /// Gradient only.
    #[default]
    Off,
    /// Floating symbols with the muted tint.
    FloatingSymbols,
    /// Floating symbols with the pink tint.
    FloatingSymbolsColored,
}

impl AnimationVariant {
    /// All variants in selector order.
    pub const ALL: [AnimationVariant; 3] = [
        AnimationVariant::Off,
        AnimationVariant::FloatingSymbols,
        AnimationVariant::FloatingSymbolsColored,
    ];

    /// Map a raw configuration value to a variant. Unknown values are `Off`.
    pub fn from_selector(value: i32) -> Self {
        match value {
            1 => AnimationVariant::FloatingSymbols,
            2 => AnimationVariant::FloatingSymbolsColored,
            _ => AnimationVariant::Off,
        }
    }

    /// The raw configuration value for this variant.
    pub fn selector(self) -> i32 {
        match self {
            AnimationVariant::Off => 0,
            AnimationVariant::FloatingSymbols => 1,
            AnimationVariant::FloatingSymbolsColored => 2,
        }
    }

    /// Cycle to the next variant.
    pub fn next(self) -> Self {
        match self {
            AnimationVariant::Off => AnimationVariant::FloatingSymbols,
            AnimationVariant::FloatingSymbols => AnimationVariant::FloatingSymbolsColored,
            AnimationVariant::FloatingSymbolsColored => AnimationVariant::Off,
        }
    }

    /// Human readable name.
    pub fn name(self) -> &'static str {
        match self {
            AnimationVariant::Off => "Off",
            AnimationVariant::FloatingSymbols => "Floating symbols",
            AnimationVariant::FloatingSymbolsColored => "Floating symbols (colored)",
        }
    }
}

/// Source of the configured animation selector, polled once per frame.
pub trait AnimationSelector {
    /// Raw integer selecting the animation variant.
    fn animation_selector(&self) -> i32;

    /// The selector mapped to a variant.
    fn animation_variant(&self) -> AnimationVariant {
        AnimationVariant::from_selector(self.animation_selector())
    }
}

impl AnimationSelector for i32 {
    fn animation_selector(&self) -> i32 {
        *self
    }
}

impl AnimationSelector for AnimationVariant {
    fn animation_selector(&self) -> i32 {
        self.selector()
    }
}
