use std::fmt;

/// Keyboard key identifier.
///
/// The host runtime maps platform scancodes/keycodes into these variants
/// where possible. For unsupported keys, use `Key::Unknown(u32)` with a
/// stable platform code.
///
/// `Ord` is derived because keys double as elements of the engine's ordered
/// containers (held-key sets, chord sequences).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Key {
    // Common control keys
    Escape,
    Enter,
    Tab,
    Backspace,
    Space,

    Insert,
    Delete,
    Home,
    End,
    PageUp,
    PageDown,

    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,

    // Modifiers as keys (useful for hold-to-act policies)
    Shift,
    Control,
    Alt,
    Meta,

    // Letters
    A, B, C, D, E, F, G, H, I, J, K, L, M,
    N, O, P, Q, R, S, T, U, V, W, X, Y, Z,

    // Digits
    Digit0, Digit1, Digit2, Digit3, Digit4,
    Digit5, Digit6, Digit7, Digit8, Digit9,

    // Function keys
    F1, F2, F3, F4, F5, F6,
    F7, F8, F9, F10, F11, F12,

    /// Platform-dependent key not yet represented here.
    Unknown(u32),
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Pointer button identifier.
///
/// Device-neutral naming: `Primary` is the left mouse button / single touch,
/// `Secondary` the right button / long press, as mapped by the host.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
    Other(u16),
}

/// Modifier keys state.
///
/// Stored as booleans rather than bitflags to keep it explicit and stable.
/// The derived `Ord` makes modifier combinations usable as chord-sequence
/// key material.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    pub fn any(&self) -> bool {
        self.shift || self.ctrl || self.alt || self.meta
    }
}

/// Keyboard event payload, shared by the press/release/repeat classes.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct KeyEvent {
    pub key: Key,
    pub modifiers: Modifiers,
}

/// Pointer button event payload, shared by the press/release classes.
///
/// Coordinates are included so event processing does not depend on an
/// external "current pointer position".
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PointerButtonEvent {
    pub button: PointerButton,
    pub x: f32,
    pub y: f32,
    pub modifiers: Modifiers,
}

/// Pointer move event in logical pixels.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PointerMoveEvent {
    pub x: f32,
    pub y: f32,
}

/// Platform-agnostic input events delivered by the host input source.
///
/// Exactly the six classes the dispatcher routes: press/release/repeat for
/// the keyboard device, press/release/move for the pointer device. Each
/// class reaches its own per-layer handler.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum InputEvent {
    KeyDown(KeyEvent),
    KeyUp(KeyEvent),
    KeyRepeat(KeyEvent),

    PointerDown(PointerButtonEvent),
    PointerUp(PointerButtonEvent),
    PointerMove(PointerMoveEvent),
}
