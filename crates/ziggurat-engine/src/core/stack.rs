use crate::input::{InputEvent, KeyEvent, PointerButtonEvent, PointerMoveEvent};
use crate::time::FrameTime;

use super::ctx::{StackCommand, StackCtx};
use super::layer::{EventResult, Layer, LayerBox};

/// Per-frame scheduling signal returned to the host.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum FrameControl {
    /// Layers remain; the host should request the next tick.
    Continue,
    /// The stack is empty; the host should stop requesting ticks.
    Idle,
}

/// An ordered stack of layers with three dispatch protocols.
///
/// Index 0 is the bottom (oldest); the last index is the top — pushed most
/// recently, updated and drawn last, offered input first.
///
/// **Update/draw**: before each pass the stack scans from the top downward
/// while the relevant `pass_*` flag is `true`; the scan stops at the first
/// layer whose flag is `false` (the boundary), or at the bottom when every
/// flag is `true`. The pass then runs bottom-up from the boundary to the
/// top. A `false` flag thus marks the deepest layer that still receives the
/// operation this frame — a paused-menu layer with `pass_update == false`
/// freezes everything beneath it while still being updated itself. The two
/// boundaries are computed independently, each from flags read strictly
/// before any layer in that pass runs.
///
/// **Input**: the opposite direction, and a different decision source. The
/// walk goes top-down, invoking the event class's handler on each layer;
/// the handler's *return value* decides continuation. `Consumed` stops the
/// walk immediately; `Ignored` passes the event to the next layer down.
///
/// Structural changes requested through [`StackCtx`] during either kind of
/// pass are deferred to the end of that pass. Direct mutation (`push`,
/// `pop`, `clear`) belongs to the host, between passes.
pub struct LayerStack<S> {
    layers: Vec<LayerBox<S>>,
}

impl<S: 'static> Default for LayerStack<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: 'static> LayerStack<S> {
    pub fn new() -> Self {
        Self { layers: Vec::new() }
    }

    // ── host-side structural access (between passes) ──────────────────────

    pub fn push(&mut self, layer: impl Layer<S>) {
        self.layers.push(LayerBox::new(layer));
    }

    pub fn pop(&mut self) -> Option<LayerBox<S>> {
        self.layers.pop()
    }

    pub fn clear(&mut self) {
        self.layers.clear();
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    pub fn top(&self) -> Option<&LayerBox<S>> {
        self.layers.last()
    }

    pub fn top_mut(&mut self) -> Option<&mut LayerBox<S>> {
        self.layers.last_mut()
    }

    // ── frame dispatch ────────────────────────────────────────────────────

    /// Runs one scheduler tick: the update pass, then the draw pass, then
    /// any deferred structural commands.
    ///
    /// An empty stack performs no calls and reports [`FrameControl::Idle`]
    /// immediately. A layer pushed during `update` first participates next
    /// frame: commands apply only after the draw sub-pass, so draw runs on
    /// the exact sequence the boundaries were computed for.
    pub fn frame(&mut self, time: FrameTime, surface: &mut S) -> FrameControl {
        if self.layers.is_empty() {
            return FrameControl::Idle;
        }

        let mut ctx = StackCtx::new();

        let update_boundary = self.boundary(LayerBox::pass_update);
        for layer in &mut self.layers[update_boundary..] {
            layer.update(time, &mut ctx);
        }

        // Draw flags are re-read here, so an update-made flag change
        // affects this frame's draw — but never the committed update pass.
        let draw_boundary = self.boundary(LayerBox::pass_draw);
        for layer in &mut self.layers[draw_boundary..] {
            layer.draw(surface);
        }

        self.apply_commands(ctx);

        if self.layers.is_empty() {
            FrameControl::Idle
        } else {
            FrameControl::Continue
        }
    }

    /// The lowest index included in a pass: scan from the top while `flag`
    /// holds, stop at the first layer where it does not.
    fn boundary(&self, flag: impl Fn(&LayerBox<S>) -> bool) -> usize {
        for i in (0..self.layers.len()).rev() {
            if !flag(&self.layers[i]) {
                return i;
            }
        }
        0
    }

    // ── input dispatch ────────────────────────────────────────────────────

    pub fn key_down(&mut self, event: &KeyEvent) -> EventResult {
        self.walk(|layer, ctx| layer.on_key_down(event, ctx))
    }

    pub fn key_up(&mut self, event: &KeyEvent) -> EventResult {
        self.walk(|layer, ctx| layer.on_key_up(event, ctx))
    }

    pub fn key_repeat(&mut self, event: &KeyEvent) -> EventResult {
        self.walk(|layer, ctx| layer.on_key_repeat(event, ctx))
    }

    pub fn pointer_down(&mut self, event: &PointerButtonEvent) -> EventResult {
        self.walk(|layer, ctx| layer.on_pointer_down(event, ctx))
    }

    pub fn pointer_up(&mut self, event: &PointerButtonEvent) -> EventResult {
        self.walk(|layer, ctx| layer.on_pointer_up(event, ctx))
    }

    pub fn pointer_move(&mut self, event: &PointerMoveEvent) -> EventResult {
        self.walk(|layer, ctx| layer.on_pointer_move(event, ctx))
    }

    /// Routes `event` to the entry point matching its class.
    pub fn dispatch(&mut self, event: &InputEvent) -> EventResult {
        match event {
            InputEvent::KeyDown(ev) => self.key_down(ev),
            InputEvent::KeyUp(ev) => self.key_up(ev),
            InputEvent::KeyRepeat(ev) => self.key_repeat(ev),
            InputEvent::PointerDown(ev) => self.pointer_down(ev),
            InputEvent::PointerUp(ev) => self.pointer_up(ev),
            InputEvent::PointerMove(ev) => self.pointer_move(ev),
        }
    }

    /// Top-down walk stopping at the first `Consumed` return. Exhausting
    /// the stack with no consumer reports `Ignored`.
    fn walk<F>(&mut self, mut handler: F) -> EventResult
    where
        F: FnMut(&mut LayerBox<S>, &mut StackCtx<S>) -> EventResult,
    {
        let mut ctx = StackCtx::new();
        let mut result = EventResult::Ignored;

        for layer in self.layers.iter_mut().rev() {
            if handler(layer, &mut ctx).is_consumed() {
                result = EventResult::Consumed;
                break;
            }
        }

        self.apply_commands(ctx);
        result
    }

    fn apply_commands(&mut self, mut ctx: StackCtx<S>) {
        for cmd in ctx.drain() {
            match cmd {
                StackCommand::Push(layer) => {
                    self.layers.push(layer);
                    log::debug!("layer pushed, stack depth {}", self.layers.len());
                }
                StackCommand::Pop => {
                    if self.layers.pop().is_some() {
                        log::debug!("layer popped, stack depth {}", self.layers.len());
                    } else {
                        log::warn!("pop requested on an empty layer stack");
                    }
                }
                StackCommand::Clear => {
                    self.layers.clear();
                    log::debug!("layer stack cleared");
                }
            }
        }
    }
}
