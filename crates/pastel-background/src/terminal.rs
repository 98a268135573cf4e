//! [`DrawContext`] rendering into a ratatui buffer.
//!
//! Every terminal cell stands for a `CELL_WIDTH × CELL_HEIGHT` block of
//! virtual pixels, so pixel-space geometry keeps a sensible density on a
//! character grid.

use std::collections::HashMap;
use std::f32::consts::{PI, TAU};

use pastel_core::{Bounds, Color32};
use ratatui::{buffer::Buffer, layout::Rect, style::Color};

use crate::FLOATING_SYMBOL_IMAGE;
use crate::chars::{SYMBOL_GLYPHS_LARGE, SYMBOL_GLYPHS_SMALL};
use crate::context::{DrawContext, ImageId};

/// Virtual pixels per cell, horizontally.
pub const CELL_WIDTH: f32 = 8.0;
/// Virtual pixels per cell, vertically.
pub const CELL_HEIGHT: f32 = 16.0;

/// Sprites at or above this scale use the large glyph set.
const LARGE_SCALE: f32 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Batch {
    Idle,
    Textured,
    Untextured,
}

/// Glyph sets standing in for an image.
#[derive(Debug, Clone, Copy)]
struct Sprite {
    small: &'static [char],
    large: &'static [char],
}

/// Draws backgrounds into a region of a ratatui [`Buffer`].
#[derive(Debug)]
pub struct TerminalCanvas<'a> {
    buffer: &'a mut Buffer,
    area: Rect,
    sprites: HashMap<ImageId, Sprite>,
    batch: Batch,
    dropped_draws: usize,
}

impl<'a> TerminalCanvas<'a> {
    /// Canvas over `area` with the floating symbol image registered.
    pub fn new(buffer: &'a mut Buffer, area: Rect) -> Self {
        let area = area.intersection(buffer.area);
        let mut canvas = Self {
            buffer,
            area,
            sprites: HashMap::new(),
            batch: Batch::Idle,
            dropped_draws: 0,
        };
        canvas.register_image(FLOATING_SYMBOL_IMAGE, SYMBOL_GLYPHS_SMALL, SYMBOL_GLYPHS_LARGE);
        canvas
    }

    /// Make `image` drawable with the given glyph sets.
    pub fn register_image(
        &mut self,
        image: ImageId,
        small: &'static [char],
        large: &'static [char],
    ) {
        self.sprites.insert(image, Sprite { small, large });
    }

    /// Textured draws issued outside a `begin()` batch.
    pub fn dropped_draws(&self) -> usize {
        self.dropped_draws
    }

    /// Cell containing a pixel-space point, if it lies inside the canvas.
    fn cell_at(&self, x: f32, y: f32) -> Option<(u16, u16)> {
        if !(x.is_finite() && y.is_finite()) {
            return None;
        }
        let col = (x / CELL_WIDTH).floor();
        let row = (y / CELL_HEIGHT).floor();
        let inside = col >= self.area.left() as f32
            && col < self.area.right() as f32
            && row >= self.area.top() as f32
            && row < self.area.bottom() as f32;
        inside.then_some((col as u16, row as u16))
    }

    fn cell_background(&self, col: u16, row: u16) -> (u8, u8, u8) {
        match self.buffer.cell((col, row)).map(|cell| cell.bg) {
            Some(Color::Rgb(r, g, b)) => (r, g, b),
            _ => (0, 0, 0),
        }
    }
}

/// Pick a glyph from `glyphs` by rotation angle.
fn glyph_for_angle(glyphs: &[char], angle: f32) -> Option<char> {
    if glyphs.is_empty() {
        return None;
    }
    let turn = (angle + PI).rem_euclid(TAU) / TAU;
    let idx = ((turn * glyphs.len() as f32) as usize).min(glyphs.len() - 1);
    Some(glyphs[idx])
}

impl DrawContext for TerminalCanvas<'_> {
    fn bounds(&self) -> Bounds {
        Bounds::new(
            self.area.x as f32 * CELL_WIDTH,
            self.area.y as f32 * CELL_HEIGHT,
            self.area.width as f32 * CELL_WIDTH,
            self.area.height as f32 * CELL_HEIGHT,
        )
    }

    fn flush(&mut self) {
        self.batch = Batch::Idle;
    }

    fn begin(&mut self) {
        self.batch = Batch::Textured;
    }

    fn begin_no_tex(&mut self) {
        self.batch = Batch::Untextured;
    }

    fn draw_image_rotated(
        &mut self,
        image: ImageId,
        x: f32,
        y: f32,
        scale: f32,
        angle: f32,
        color: Color32,
    ) {
        if self.batch != Batch::Textured {
            self.dropped_draws += 1;
            return;
        }
        let Some(sprite) = self.sprites.get(&image).copied() else {
            return;
        };
        let Some((col, row)) = self.cell_at(x, y) else {
            return;
        };
        let glyphs = if scale >= LARGE_SCALE {
            sprite.large
        } else {
            sprite.small
        };
        let Some(glyph) = glyph_for_angle(glyphs, angle) else {
            return;
        };

        let (r, g, b) = color.over(self.cell_background(col, row));
        if let Some(cell) = self.buffer.cell_mut((col, row)) {
            cell.set_char(glyph).set_fg(Color::Rgb(r, g, b));
        }
    }

    fn rect_v_gradient(
        &mut self,
        x0: f32,
        y0: f32,
        x1: f32,
        y1: f32,
        top: Color32,
        bottom: Color32,
    ) {
        let height = y1 - y0;
        if x1 <= x0 || height <= 0.0 {
            return;
        }
        let first_col = ((x0 / CELL_WIDTH).floor().max(self.area.left() as f32)) as u16;
        let last_col = ((x1 / CELL_WIDTH).ceil().min(self.area.right() as f32)) as u16;
        let first_row = ((y0 / CELL_HEIGHT).floor().max(self.area.top() as f32)) as u16;
        let last_row = ((y1 / CELL_HEIGHT).ceil().min(self.area.bottom() as f32)) as u16;

        for row in first_row..last_row {
            let center = (row as f32 + 0.5) * CELL_HEIGHT;
            let t = ((center - y0) / height).clamp(0.0, 1.0);
            let (r, g, b) = top.lerp(bottom, t).over((0, 0, 0));
            for col in first_col..last_col {
                if let Some(cell) = self.buffer.cell_mut((col, row)) {
                    cell.set_char(' ').set_bg(Color::Rgb(r, g, b));
                }
            }
        }
    }
}
