use ziggurat_ordered::SortedSet;

use super::frame::InputFrame;
use super::types::{
    InputEvent,
    Key,
    Modifiers,
    PointerButton,
    PointerButtonEvent,
    PointerMoveEvent,
};

/// Current input state for the host's single input source.
///
/// Holds "is down" information and current pointer position. Per-frame
/// transitions are recorded into an [`InputFrame`]. The held sets are
/// [`SortedSet`]s so queries and iteration stay deterministic.
#[derive(Debug, Default)]
pub struct InputState {
    /// Current modifier state, refreshed from every modifier-carrying event.
    pub modifiers: Modifiers,

    /// Pointer position in logical pixels, `None` until the first move.
    pub pointer_pos: Option<(f32, f32)>,

    /// Set of currently held keys.
    pub keys_down: SortedSet<Key>,

    /// Set of currently held pointer buttons.
    pub buttons_down: SortedSet<PointerButton>,
}

impl InputState {
    /// Applies an input event to the current state and writes deltas to `frame`.
    pub fn apply_event(&mut self, frame: &mut InputFrame, ev: InputEvent) {
        match &ev {
            InputEvent::KeyDown(key_ev) => {
                self.modifiers = key_ev.modifiers;
                if self.keys_down.insert(key_ev.key) {
                    frame.keys_pressed.insert(key_ev.key);
                }
            }

            InputEvent::KeyUp(key_ev) => {
                self.modifiers = key_ev.modifiers;
                if self.keys_down.remove(&key_ev.key) {
                    frame.keys_released.insert(key_ev.key);
                }
            }

            InputEvent::KeyRepeat(key_ev) => {
                // The key is already held; a repeat is not a transition.
                self.modifiers = key_ev.modifiers;
            }

            InputEvent::PointerDown(PointerButtonEvent {
                button,
                x,
                y,
                modifiers,
            }) => {
                self.pointer_pos = Some((*x, *y));
                self.modifiers = *modifiers;
                if self.buttons_down.insert(*button) {
                    frame.buttons_pressed.insert(*button);
                }
            }

            InputEvent::PointerUp(PointerButtonEvent {
                button,
                x,
                y,
                modifiers,
            }) => {
                self.pointer_pos = Some((*x, *y));
                self.modifiers = *modifiers;
                if self.buttons_down.remove(button) {
                    frame.buttons_released.insert(*button);
                }
            }

            InputEvent::PointerMove(PointerMoveEvent { x, y }) => {
                self.pointer_pos = Some((*x, *y));
            }
        }

        frame.push_event(ev);
    }

    /// Helper queries
    pub fn key_down(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }

    pub fn button_down(&self, btn: PointerButton) -> bool {
        self.buttons_down.contains(&btn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::types::KeyEvent;

    fn key_down(key: Key) -> InputEvent {
        InputEvent::KeyDown(KeyEvent {
            key,
            modifiers: Modifiers::default(),
        })
    }

    fn key_up(key: Key) -> InputEvent {
        InputEvent::KeyUp(KeyEvent {
            key,
            modifiers: Modifiers::default(),
        })
    }

    #[test]
    fn press_records_transition_once() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, key_down(Key::A));
        state.apply_event(&mut frame, key_down(Key::A)); // host duplicate

        assert!(state.key_down(Key::A));
        assert_eq!(frame.keys_pressed.len(), 1);
        assert_eq!(frame.events.len(), 2);
    }

    #[test]
    fn release_clears_held_and_records_delta() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, key_down(Key::W));
        frame.clear();
        state.apply_event(&mut frame, key_up(Key::W));

        assert!(!state.key_down(Key::W));
        assert!(frame.keys_released.contains(&Key::W));
        assert!(frame.keys_pressed.is_empty());
    }

    #[test]
    fn release_without_press_is_not_a_transition() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, key_up(Key::Q));
        assert!(frame.keys_released.is_empty());
    }

    #[test]
    fn repeat_does_not_touch_transition_sets() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, key_down(Key::J));
        frame.clear();
        state.apply_event(
            &mut frame,
            InputEvent::KeyRepeat(KeyEvent {
                key: Key::J,
                modifiers: Modifiers::default(),
            }),
        );

        assert!(state.key_down(Key::J));
        assert!(frame.keys_pressed.is_empty());
        assert_eq!(frame.events.len(), 1);
    }

    #[test]
    fn pointer_events_track_position_and_buttons() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(
            &mut frame,
            InputEvent::PointerMove(PointerMoveEvent { x: 3.0, y: 4.0 }),
        );
        assert_eq!(state.pointer_pos, Some((3.0, 4.0)));

        state.apply_event(
            &mut frame,
            InputEvent::PointerDown(PointerButtonEvent {
                button: PointerButton::Primary,
                x: 5.0,
                y: 6.0,
                modifiers: Modifiers::default(),
            }),
        );
        assert_eq!(state.pointer_pos, Some((5.0, 6.0)));
        assert!(state.button_down(PointerButton::Primary));
        assert!(frame.buttons_pressed.contains(&PointerButton::Primary));

        state.apply_event(
            &mut frame,
            InputEvent::PointerUp(PointerButtonEvent {
                button: PointerButton::Primary,
                x: 5.0,
                y: 6.0,
                modifiers: Modifiers::default(),
            }),
        );
        assert!(!state.button_down(PointerButton::Primary));
        assert!(frame.buttons_released.contains(&PointerButton::Primary));
    }

    #[test]
    fn held_keys_iterate_in_ascending_order() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        for key in [Key::Z, Key::A, Key::M] {
            state.apply_event(&mut frame, key_down(key));
        }
        let held: Vec<Key> = state.keys_down.iter().copied().collect();
        assert_eq!(held, vec![Key::A, Key::M, Key::Z]);
    }
}
