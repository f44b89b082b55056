use crate::core::{EventResult, FrameControl, Layer, LayerBox, LayerStack};
use crate::input::{InputEvent, InputFrame, InputState};
use crate::time::FrameClock;

/// The host-facing shell around a [`LayerStack`].
///
/// The host scheduler calls [`tick`](Self::tick) once per display refresh
/// with a monotonic millisecond timestamp and renews that request while the
/// return value is [`FrameControl::Continue`]; the host input source calls
/// [`dispatch`](Self::dispatch) as events arrive. Both paths take
/// `&mut self`, so they can interleave but never run concurrently — the
/// single-threaded dispatch model is enforced at compile time.
pub struct Runtime<S> {
    clock: FrameClock,
    input_state: InputState,
    input_frame: InputFrame,
    stack: LayerStack<S>,
}

impl<S: 'static> Default for Runtime<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: 'static> Runtime<S> {
    pub fn new() -> Self {
        Self {
            clock: FrameClock::new(),
            input_state: InputState::default(),
            input_frame: InputFrame::default(),
            stack: LayerStack::new(),
        }
    }

    /// One scheduler callback: advances the clock, runs the stack's frame
    /// dispatch, then clears the per-frame input deltas.
    pub fn tick(&mut self, timestamp: f64, surface: &mut S) -> FrameControl {
        let time = self.clock.tick(timestamp);
        let control = self.stack.frame(time, surface);

        // Deltas were visible to every layer this frame; drop them now.
        self.input_frame.clear();

        if control == FrameControl::Idle {
            log::debug!("layer stack idle at t={timestamp}");
        }

        control
    }

    /// One input-source callback: folds the event into the input
    /// bookkeeping, then walks the stack.
    pub fn dispatch(&mut self, event: InputEvent) -> EventResult {
        self.input_state.apply_event(&mut self.input_frame, event);
        self.stack.dispatch(&event)
    }

    // ── forwarding / accessors ────────────────────────────────────────────

    pub fn push(&mut self, layer: impl Layer<S>) {
        self.stack.push(layer);
    }

    pub fn pop(&mut self) -> Option<LayerBox<S>> {
        self.stack.pop()
    }

    pub fn clear(&mut self) {
        self.stack.clear();
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    pub fn stack(&self) -> &LayerStack<S> {
        &self.stack
    }

    pub fn stack_mut(&mut self) -> &mut LayerStack<S> {
        &mut self.stack
    }

    pub fn input_state(&self) -> &InputState {
        &self.input_state
    }

    pub fn input_frame(&self) -> &InputFrame {
        &self.input_frame
    }

    pub fn clock(&self) -> &FrameClock {
        &self.clock
    }

    pub fn clock_mut(&mut self) -> &mut FrameClock {
        &mut self.clock
    }
}
