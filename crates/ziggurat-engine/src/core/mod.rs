//! Core dispatch contracts.
//!
//! This module defines the stable interface between the host (scheduler,
//! input source, drawing surface) and the layers it drives: the [`Layer`]
//! contract, the [`LayerStack`] dispatcher, and the deferred-mutation
//! [`StackCtx`] handed to layer callbacks.

mod ctx;
mod layer;
mod stack;

pub use ctx::StackCtx;
pub use layer::{EventResult, Layer, LayerBox};
pub use stack::{FrameControl, LayerStack};
