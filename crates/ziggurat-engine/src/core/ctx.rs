use super::layer::{Layer, LayerBox};

/// Stack context passed to layer callbacks.
///
/// Structural changes requested during a dispatch pass are buffered here
/// and applied by the stack after the pass completes, so the layer
/// sequence is never mutated while a walk is iterating it. A layer that
/// pops itself mid-walk therefore still sees the remainder of that walk.
pub struct StackCtx<S> {
    commands: Vec<StackCommand<S>>,
}

pub(crate) enum StackCommand<S> {
    Push(LayerBox<S>),
    Pop,
    Clear,
}

impl<S: 'static> StackCtx<S> {
    pub(crate) fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// Requests a new top layer once the current pass ends.
    pub fn push<L: Layer<S>>(&mut self, layer: L) {
        self.commands.push(StackCommand::Push(LayerBox::new(layer)));
    }

    /// Requests removal of the top layer once the current pass ends.
    ///
    /// Conventionally issued by the topmost layer's own keydown handler to
    /// dismiss itself.
    pub fn pop(&mut self) {
        self.commands.push(StackCommand::Pop);
    }

    /// Requests removal of every layer once the current pass ends.
    pub fn clear(&mut self) {
        self.commands.push(StackCommand::Clear);
    }

    pub(crate) fn drain(&mut self) -> std::vec::Drain<'_, StackCommand<S>> {
        self.commands.drain(..)
    }
}
