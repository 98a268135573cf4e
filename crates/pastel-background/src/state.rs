//! Background controller state.

use std::path::Path;

use pastel_core::{AnimationSelector, AnimationVariant, Color32, Origin};
use tracing::{debug, trace};

use crate::animations::Animation;
use crate::color::{BACKGROUND_BOTTOM_COLOR, BACKGROUND_TOP_COLOR, background_color_with_alpha};
use crate::context::{BackgroundTexture, Clock, DrawContext, SystemClock};

/// Owns the active animation and draws the menu background each frame.
///
/// The controller is lazily initialized by the first draw and returns to the
/// uninitialized state on [`shutdown`](Self::shutdown).
#[derive(Debug)]
pub struct BackgroundController<K = SystemClock> {
    /// Active animation, always matching `variant`.
    animation: Option<Animation>,
    /// Last variant read from the configuration.
    variant: AnimationVariant,
    /// Whether `init` ran since creation or the last shutdown.
    initialized: bool,
    /// Number of times `init` ran.
    init_count: u64,
    /// Background image resource, if one is held.
    texture: Option<Box<dyn BackgroundTexture>>,
    clock: K,
}

impl Default for BackgroundController<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl BackgroundController<SystemClock> {
    /// Create a controller reading the system clock.
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl<K: Clock> BackgroundController<K> {
    pub fn with_clock(clock: K) -> Self {
        Self {
            animation: None,
            variant: AnimationVariant::Off,
            initialized: false,
            init_count: 0,
            texture: None,
            clock,
        }
    }

    /// One-time setup. Drops any stale background texture; images are
    /// resolved by name at draw time.
    pub fn init<C: DrawContext + ?Sized>(&mut self, _ctx: &C) {
        self.release_texture();
        self.init_count += 1;
        debug!(init_count = self.init_count, "background initialized");
    }

    /// Representative background tint.
    pub fn background_color_with_alpha(&self) -> Color32 {
        background_color_with_alpha()
    }

    /// Draw the gradient and, when enabled, the animation overlay.
    pub fn draw_background<C, S>(&mut self, ctx: &mut C, selector: &S, alpha: f32, origin: Origin)
    where
        C: DrawContext + ?Sized,
        S: AnimationSelector + ?Sized,
    {
        if !self.initialized {
            self.init(&*ctx);
            self.initialized = true;
        }

        self.apply_variant(selector.animation_variant());

        let bounds = ctx.bounds();
        ctx.flush();
        ctx.begin_no_tex();
        ctx.rect_v_gradient(
            bounds.x,
            bounds.y,
            bounds.x2(),
            bounds.y2(),
            BACKGROUND_TOP_COLOR.with_alpha(alpha),
            BACKGROUND_BOTTOM_COLOR.with_alpha(alpha),
        );
        ctx.flush();

        let time = self.clock.now_seconds();
        trace!(time, alpha, variant = ?self.variant, "draw background");
        if let Some(animation) = self.animation.as_mut() {
            animation.draw(ctx, time, alpha, origin);
        }
    }

    /// Draw the background behind a game's screen.
    ///
    /// Per-game imagery is not drawn yet, so every path draws the regular
    /// background at full opacity.
    pub fn draw_game_background<C, S>(
        &mut self,
        ctx: &mut C,
        selector: &S,
        game_path: &Path,
        origin: Origin,
    ) where
        C: DrawContext + ?Sized,
        S: AnimationSelector + ?Sized,
    {
        if game_path.as_os_str().is_empty() {
            self.draw_background(ctx, selector, 1.0, origin);
            return;
        }

        // TODO: draw the game's own background image once per-game assets are loaded.
        self.draw_background(ctx, selector, 1.0, origin);
    }

    /// Release held resources and return to the uninitialized state.
    pub fn shutdown(&mut self) {
        self.release_texture();
        self.initialized = false;
        self.animation = None;
        self.variant = AnimationVariant::Off;
        debug!("background shut down");
    }

    /// Hold a background texture, releasing the previous one.
    pub fn attach_background_texture(&mut self, texture: Box<dyn BackgroundTexture>) {
        self.release_texture();
        self.texture = Some(texture);
    }

    pub fn variant(&self) -> AnimationVariant {
        self.variant
    }

    pub fn animation(&self) -> Option<&Animation> {
        self.animation.as_ref()
    }

    pub fn has_animation(&self) -> bool {
        self.animation.is_some()
    }

    pub fn has_background_texture(&self) -> bool {
        self.texture.is_some()
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn init_count(&self) -> u64 {
        self.init_count
    }

    pub fn clock(&self) -> &K {
        &self.clock
    }

    /// Swap the animation when the configured variant changed.
    fn apply_variant(&mut self, variant: AnimationVariant) {
        if variant == self.variant {
            return;
        }
        debug!(from = ?self.variant, to = ?variant, "background animation changed");
        self.variant = variant;
        self.animation = Animation::for_variant(variant);
    }
}

impl<K> BackgroundController<K> {
    fn release_texture(&mut self) {
        if let Some(mut texture) = self.texture.take() {
            texture.release();
        }
    }
}

impl<K> Drop for BackgroundController<K> {
    fn drop(&mut self) {
        self.release_texture();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{CountingTexture, DrawCommand, ManualClock, RecordingContext};
    use crate::{FLOATING_SYMBOL_IMAGE, bob_offset};
    use pastel_core::Bounds;
    use std::path::PathBuf;

    fn controller() -> BackgroundController<ManualClock> {
        BackgroundController::with_clock(ManualClock::new(1_760_000_000.0))
    }

    fn context() -> RecordingContext {
        RecordingContext::new(Bounds::new(0.0, 0.0, 1280.0, 720.0))
    }

    #[test]
    fn test_first_draw_initializes_once() {
        let mut bg = controller();
        let mut ctx = context();
        assert!(!bg.is_initialized());

        for _ in 0..3 {
            bg.draw_background(&mut ctx, &0, 1.0, Origin::ZERO);
        }
        assert!(bg.is_initialized());
        assert_eq!(bg.init_count(), 1);
        assert_eq!(bg.variant(), AnimationVariant::Off);
    }

    #[test]
    fn test_gradient_covers_bounds() {
        let mut bg = controller();
        let mut ctx = RecordingContext::new(Bounds::new(10.0, 20.0, 300.0, 200.0));
        bg.draw_background(&mut ctx, &0, 0.5, Origin::ZERO);

        assert_eq!(
            ctx.commands[..2],
            [DrawCommand::Flush, DrawCommand::BeginNoTex]
        );
        let gradients = ctx.gradients();
        assert_eq!(gradients.len(), 1);
        let g = gradients[0];
        assert_eq!((g.x0, g.y0, g.x1, g.y1), (10.0, 20.0, 310.0, 220.0));
        assert_eq!(g.top, BACKGROUND_TOP_COLOR.with_alpha(0.5));
        assert_eq!(g.bottom, BACKGROUND_BOTTOM_COLOR.with_alpha(0.5));
        assert_eq!(ctx.commands.len(), 4);
        assert!(ctx.images().is_empty());
    }

    #[test]
    fn test_variant_change_swaps_animation() {
        let mut bg = controller();
        let mut ctx = context();

        bg.draw_background(&mut ctx, &AnimationVariant::FloatingSymbols, 1.0, Origin::ZERO);
        assert_eq!(bg.variant(), AnimationVariant::FloatingSymbols);
        assert!(bg.has_animation());
        assert_eq!(ctx.images().len(), 10);
        assert!(ctx.images().iter().all(|d| d.image == FLOATING_SYMBOL_IMAGE));

        bg.draw_background(&mut ctx, &AnimationVariant::FloatingSymbolsColored, 1.0, Origin::ZERO);
        assert_eq!(bg.variant(), AnimationVariant::FloatingSymbolsColored);
        match bg.animation() {
            Some(Animation::FloatingSymbols(symbols)) => assert!(symbols.is_colored()),
            None => panic!("expected floating symbols"),
        }
    }

    #[test]
    fn test_switching_back_to_off_leaves_gradient_only() {
        let mut bg = controller();
        let mut ctx = context();

        bg.draw_background(&mut ctx, &0, 1.0, Origin::ZERO);
        bg.draw_background(&mut ctx, &1, 1.0, Origin::ZERO);
        bg.draw_background(&mut ctx, &0, 1.0, Origin::ZERO);
        assert!(!bg.has_animation());
        assert_eq!(bg.variant(), AnimationVariant::Off);

        ctx.clear();
        bg.draw_background(&mut ctx, &0, 1.0, Origin::ZERO);
        assert_eq!(ctx.gradients().len(), 1);
        assert!(ctx.images().is_empty());
    }

    #[test]
    fn test_unknown_selector_is_off() {
        let mut bg = controller();
        let mut ctx = context();
        bg.draw_background(&mut ctx, &2, 1.0, Origin::ZERO);
        assert!(bg.has_animation());

        bg.draw_background(&mut ctx, &42, 1.0, Origin::ZERO);
        assert_eq!(bg.variant(), AnimationVariant::Off);
        assert!(!bg.has_animation());
    }

    #[test]
    fn test_unchanged_size_keeps_point_count() {
        let mut bg = controller();
        let mut ctx = context();
        for _ in 0..5 {
            bg.clock().advance(0.016);
            bg.draw_background(&mut ctx, &1, 1.0, Origin::ZERO);
            match bg.animation() {
                Some(Animation::FloatingSymbols(symbols)) => assert_eq!(symbols.field().len(), 10),
                None => panic!("expected floating symbols"),
            }
        }
    }

    #[test]
    fn test_consecutive_frames_move_continuously() {
        let mut bg = controller();
        let mut ctx = context();
        bg.draw_background(&mut ctx, &1, 1.0, Origin::ZERO);
        let first = ctx.images();

        ctx.clear();
        bg.clock().advance(1e-3);
        bg.draw_background(&mut ctx, &1, 1.0, Origin::ZERO);
        let second = ctx.images();

        assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(&second) {
            assert_eq!(a.x, b.x);
            assert!((a.y - b.y).abs() < 1e-2);
        }
    }

    #[test]
    fn test_animation_uses_clock_time() {
        let mut bg = controller();
        let mut ctx = context();
        let time = bg.clock().now_seconds();
        bg.draw_background(&mut ctx, &1, 1.0, Origin::new(0.0, 5.0, 0.0));

        let anchors = match bg.animation() {
            Some(Animation::FloatingSymbols(symbols)) => symbols.field().points().to_vec(),
            None => panic!("expected floating symbols"),
        };
        for (i, (draw, anchor)) in ctx.images().iter().zip(&anchors).enumerate() {
            assert!((draw.y - (anchor.y + 5.0 + bob_offset(i, time))).abs() < 1e-3);
        }
    }

    #[test]
    fn test_shutdown_resets_state_and_reinitializes() {
        let mut bg = controller();
        let mut ctx = context();
        bg.draw_background(&mut ctx, &2, 1.0, Origin::ZERO);
        assert_eq!(bg.init_count(), 1);

        bg.shutdown();
        assert!(!bg.is_initialized());
        assert!(!bg.has_animation());
        assert_eq!(bg.variant(), AnimationVariant::Off);

        bg.draw_background(&mut ctx, &0, 1.0, Origin::ZERO);
        assert_eq!(bg.init_count(), 2);
        assert_eq!(bg.variant(), AnimationVariant::Off);

        // The variant was reset, so the same selector value is a fresh change.
        bg.draw_background(&mut ctx, &2, 1.0, Origin::ZERO);
        assert!(bg.has_animation());
        assert_eq!(bg.init_count(), 2);
    }

    #[test]
    fn test_texture_released_by_init_shutdown_and_drop() {
        let texture = CountingTexture::new();
        let mut bg = controller();
        let mut ctx = context();

        bg.attach_background_texture(Box::new(texture.clone()));
        bg.draw_background(&mut ctx, &0, 1.0, Origin::ZERO);
        assert_eq!(texture.releases(), 1);
        assert!(!bg.has_background_texture());

        bg.attach_background_texture(Box::new(texture.clone()));
        bg.shutdown();
        assert_eq!(texture.releases(), 2);

        bg.attach_background_texture(Box::new(texture.clone()));
        bg.attach_background_texture(Box::new(texture.clone()));
        assert_eq!(texture.releases(), 3);
        drop(bg);
        assert_eq!(texture.releases(), 4);
    }

    #[test]
    fn test_background_color_ignores_state() {
        let mut bg = controller();
        let before = bg.background_color_with_alpha();
        bg.draw_background(&mut context(), &2, 0.1, Origin::ZERO);
        assert_eq!(bg.background_color_with_alpha(), before);
        assert_eq!(before, BACKGROUND_TOP_COLOR.with_alpha(0.65));
    }

    #[test]
    fn test_game_background_path_does_not_change_output() {
        let mut with_empty = controller();
        let mut with_path = controller();
        let mut empty_ctx = context();
        let mut path_ctx = context();

        // Same clock reading, so regenerated fields are seeded identically.
        with_empty.draw_game_background(&mut empty_ctx, &1, Path::new(""), Origin::ZERO);
        with_path.draw_game_background(
            &mut path_ctx,
            &1,
            &PathBuf::from("/games/demo.iso"),
            Origin::ZERO,
        );

        assert_eq!(empty_ctx.commands, path_ctx.commands);
        assert_eq!(empty_ctx.gradients()[0].top, BACKGROUND_TOP_COLOR.with_alpha(1.0));
    }
}
