//! Input subsystem.
//!
//! Public API is platform-agnostic; the host is responsible for translating
//! its own windowing events into [`InputEvent`]s. The held-key and
//! transition sets are ordered containers, so input bookkeeping iterates
//! deterministically.

pub mod chords;
mod frame;
mod state;
mod types;

pub use chords::{Chord, ChordMap, ChordParseError, ChordProgress};
pub use frame::InputFrame;
pub use state::InputState;
pub use types::{
    InputEvent,
    Key,
    KeyEvent,
    Modifiers,
    PointerButton,
    PointerButtonEvent,
    PointerMoveEvent,
};
