//! Glyphs used when sprites are drawn into a terminal buffer.

/// Small floating symbol glyphs, indexed by rotation.
pub const SYMBOL_GLYPHS_SMALL: &[char] = &['·', '✿', '❀', '✾', '❁', '✽'];

/// Large floating symbol glyphs, indexed by rotation.
pub const SYMBOL_GLYPHS_LARGE: &[char] = &['✿', '❀', '✾', '❁', '✽', '❃'];
