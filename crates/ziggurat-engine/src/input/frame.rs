use ziggurat_ordered::SortedSet;

use super::types::{InputEvent, Key, PointerButton};

/// Per-frame input deltas.
///
/// `InputState` provides the current state (held keys/buttons, pointer
/// position). `InputFrame` provides the raw events and transition sets for
/// the current frame; the runtime clears it after each frame is consumed.
///
/// Transition sets are [`SortedSet`]s so per-frame iteration order is
/// deterministic regardless of event arrival order.
#[derive(Debug, Default)]
pub struct InputFrame {
    /// Raw events in arrival order.
    pub events: Vec<InputEvent>,

    /// Keys pressed this frame.
    pub keys_pressed: SortedSet<Key>,

    /// Keys released this frame.
    pub keys_released: SortedSet<Key>,

    /// Pointer buttons pressed this frame.
    pub buttons_pressed: SortedSet<PointerButton>,

    /// Pointer buttons released this frame.
    pub buttons_released: SortedSet<PointerButton>,
}

impl InputFrame {
    pub fn clear(&mut self) {
        self.events.clear();
        self.keys_pressed.clear();
        self.keys_released.clear();
        self.buttons_pressed.clear();
        self.buttons_released.clear();
    }

    pub fn push_event(&mut self, ev: InputEvent) {
        self.events.push(ev);
    }
}
