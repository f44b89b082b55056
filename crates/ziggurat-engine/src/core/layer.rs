use crate::input::{KeyEvent, PointerButtonEvent, PointerMoveEvent};
use crate::time::FrameTime;

use super::ctx::StackCtx;

/// Result returned by a layer's input handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was handled here — dispatch stops, nothing below sees it.
    Consumed,
    /// Event was not handled — dispatch continues toward the bottom.
    Ignored,
}

impl EventResult {
    #[inline]
    pub fn is_consumed(self) -> bool {
        self == EventResult::Consumed
    }
}

/// The contract every stack layer implements.
///
/// `S` is the opaque drawing surface type; the stack only sequences `draw`
/// calls into it and never interprets its contents.
///
/// The default method bodies form the baseline behavior bundle a concrete
/// layer overrides selectively:
///
/// - `pass_update` / `pass_draw` default to `false`: a pushed layer is
///   opaque, suspending and covering everything beneath it until it opts
///   into pass-through. The stack reads both flags immediately before each
///   frame's boundary computation.
/// - `update` and `draw` default to no-ops.
/// - the six input handlers default to [`EventResult::Ignored`], so an
///   event falls through a layer that does not care about it. Input
///   pass-through is solely the handler's return value; there is no flag.
///
/// Handlers and `update` receive a [`StackCtx`] for requesting structural
/// changes (push/pop/clear), which apply after the current dispatch pass.
pub trait Layer<S>: 'static {
    /// When `true`, this frame's update pass continues below this layer.
    fn pass_update(&self) -> bool {
        false
    }

    /// When `true`, this frame's draw pass continues below this layer.
    fn pass_draw(&self) -> bool {
        false
    }

    /// Per-frame simulation step.
    fn update(&mut self, time: FrameTime, ctx: &mut StackCtx<S>) {
        let _ = (time, ctx);
    }

    /// Per-frame rendering into the host's surface.
    fn draw(&mut self, surface: &mut S) {
        let _ = surface;
    }

    fn on_key_down(&mut self, event: &KeyEvent, ctx: &mut StackCtx<S>) -> EventResult {
        let _ = (event, ctx);
        EventResult::Ignored
    }

    fn on_key_up(&mut self, event: &KeyEvent, ctx: &mut StackCtx<S>) -> EventResult {
        let _ = (event, ctx);
        EventResult::Ignored
    }

    fn on_key_repeat(&mut self, event: &KeyEvent, ctx: &mut StackCtx<S>) -> EventResult {
        let _ = (event, ctx);
        EventResult::Ignored
    }

    fn on_pointer_down(&mut self, event: &PointerButtonEvent, ctx: &mut StackCtx<S>) -> EventResult {
        let _ = (event, ctx);
        EventResult::Ignored
    }

    fn on_pointer_up(&mut self, event: &PointerButtonEvent, ctx: &mut StackCtx<S>) -> EventResult {
        let _ = (event, ctx);
        EventResult::Ignored
    }

    fn on_pointer_move(&mut self, event: &PointerMoveEvent, ctx: &mut StackCtx<S>) -> EventResult {
        let _ = (event, ctx);
        EventResult::Ignored
    }
}

/// A type-erased layer — the stack's universal entry type.
///
/// Constructed from any `Layer<S>` via [`LayerBox::new`]; the stack's
/// `push` does the wrapping, so hosts rarely name this type.
pub struct LayerBox<S>(Box<dyn Layer<S>>);

impl<S: 'static> LayerBox<S> {
    pub fn new<L: Layer<S>>(layer: L) -> Self {
        Self(Box::new(layer))
    }

    #[inline]
    pub fn pass_update(&self) -> bool {
        self.0.pass_update()
    }

    #[inline]
    pub fn pass_draw(&self) -> bool {
        self.0.pass_draw()
    }

    #[inline]
    pub fn update(&mut self, time: FrameTime, ctx: &mut StackCtx<S>) {
        self.0.update(time, ctx)
    }

    #[inline]
    pub fn draw(&mut self, surface: &mut S) {
        self.0.draw(surface)
    }

    #[inline]
    pub fn on_key_down(&mut self, event: &KeyEvent, ctx: &mut StackCtx<S>) -> EventResult {
        self.0.on_key_down(event, ctx)
    }

    #[inline]
    pub fn on_key_up(&mut self, event: &KeyEvent, ctx: &mut StackCtx<S>) -> EventResult {
        self.0.on_key_up(event, ctx)
    }

    #[inline]
    pub fn on_key_repeat(&mut self, event: &KeyEvent, ctx: &mut StackCtx<S>) -> EventResult {
        self.0.on_key_repeat(event, ctx)
    }

    #[inline]
    pub fn on_pointer_down(&mut self, event: &PointerButtonEvent, ctx: &mut StackCtx<S>) -> EventResult {
        self.0.on_pointer_down(event, ctx)
    }

    #[inline]
    pub fn on_pointer_up(&mut self, event: &PointerButtonEvent, ctx: &mut StackCtx<S>) -> EventResult {
        self.0.on_pointer_up(event, ctx)
    }

    #[inline]
    pub fn on_pointer_move(&mut self, event: &PointerMoveEvent, ctx: &mut StackCtx<S>) -> EventResult {
        self.0.on_pointer_move(event, ctx)
    }
}
