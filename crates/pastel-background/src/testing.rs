//! Test doubles for the draw context, clock and texture collaborators.

use std::cell::Cell;
use std::rc::Rc;

use pastel_core::{Bounds, Color32};

use crate::context::{BackgroundTexture, Clock, DrawContext, ImageId};

/// A recorded `draw_image_rotated` call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageDraw {
    pub image: ImageId,
    pub x: f32,
    pub y: f32,
    pub scale: f32,
    pub angle: f32,
    pub color: Color32,
}

/// A recorded `rect_v_gradient` call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientDraw {
    pub x0: f32,
    pub y0: f32,
    pub x1: f32,
    pub y1: f32,
    pub top: Color32,
    pub bottom: Color32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    Flush,
    Begin,
    BeginNoTex,
    Image(ImageDraw),
    Gradient(GradientDraw),
}

/// [`DrawContext`] that records every call.
#[derive(Debug, Clone, Default)]
pub struct RecordingContext {
    pub bounds: Bounds,
    pub commands: Vec<DrawCommand>,
}

impl RecordingContext {
    pub fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            commands: Vec::new(),
        }
    }

    pub fn images(&self) -> Vec<ImageDraw> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Image(draw) => Some(*draw),
                _ => None,
            })
            .collect()
    }

    pub fn gradients(&self) -> Vec<GradientDraw> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Gradient(draw) => Some(*draw),
                _ => None,
            })
            .collect()
    }

    /// Drop recorded commands, keeping the bounds.
    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl DrawContext for RecordingContext {
    fn bounds(&self) -> Bounds {
        self.bounds
    }

    fn flush(&mut self) {
        self.commands.push(DrawCommand::Flush);
    }

    fn begin(&mut self) {
        self.commands.push(DrawCommand::Begin);
    }

    fn begin_no_tex(&mut self) {
        self.commands.push(DrawCommand::BeginNoTex);
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
        self.commands.push(DrawCommand::Image(ImageDraw {
            image,
            x,
            y,
            scale,
            angle,
            color,
        }));
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
        self.commands.push(DrawCommand::Gradient(GradientDraw {
            x0,
            y0,
            x1,
            y1,
            top,
            bottom,
        }));
    }
}

/// [`Clock`] that only moves when told to.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<f64>,
}

impl ManualClock {
    pub fn new(now: f64) -> Self {
        Self {
            now: Cell::new(now),
        }
    }

    pub fn set(&self, now: f64) {
        self.now.set(now);
    }

    pub fn advance(&self, seconds: f64) {
        self.now.set(self.now.get() + seconds);
    }
}

impl Clock for ManualClock {
    fn now_seconds(&self) -> f64 {
        self.now.get()
    }
}

/// [`BackgroundTexture`] counting its releases through a shared cell.
#[derive(Debug, Clone, Default)]
pub struct CountingTexture {
    releases: Rc<Cell<u32>>,
}

impl CountingTexture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn releases(&self) -> u32 {
        self.releases.get()
    }
}

impl BackgroundTexture for CountingTexture {
    fn release(&mut self) {
        self.releases.set(self.releases.get() + 1);
    }
}
