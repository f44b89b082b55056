use std::fmt;
use std::str::FromStr;

use ziggurat_ordered::{Entries, Trie};

use super::types::{Key, Modifiers};

// ── Chord ─────────────────────────────────────────────────────────────────

/// One keystroke in a binding sequence: a key plus its modifier state.
///
/// Totally ordered so chord sequences can serve as trie key material.
/// Parses from text (`"ctrl+s"`, `"shift+up"`, `"g"`) and renders back to
/// the same canonical form via `Display`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd)]
pub struct Chord {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl Chord {
    pub fn new(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::default(),
        }
    }

    pub fn with_modifiers(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }

    /// Parses a whitespace-separated chord sequence, e.g. `"ctrl+k s"`.
    pub fn parse_sequence(text: &str) -> Result<Vec<Chord>, ChordParseError> {
        text.split_whitespace().map(str::parse).collect()
    }
}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.modifiers.ctrl {
            write!(f, "ctrl+")?;
        }
        if self.modifiers.alt {
            write!(f, "alt+")?;
        }
        if self.modifiers.shift {
            write!(f, "shift+")?;
        }
        if self.modifiers.meta {
            write!(f, "meta+")?;
        }
        write!(f, "{}", key_name(self.key))
    }
}

impl FromStr for Chord {
    type Err = ChordParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut modifiers = Modifiers::default();
        let mut key = None;

        for token in s.split('+') {
            let token = token.trim();
            match token {
                "ctrl" | "control" => modifiers.ctrl = true,
                "alt" => modifiers.alt = true,
                "shift" => modifiers.shift = true,
                "meta" | "super" | "cmd" => modifiers.meta = true,
                _ => {
                    if key.is_some() {
                        return Err(ChordParseError::new("more than one key in chord", token));
                    }
                    key = Some(parse_key(token).ok_or_else(|| {
                        ChordParseError::new("unrecognized key name", token)
                    })?);
                }
            }
        }

        match key {
            Some(key) => Ok(Chord { key, modifiers }),
            None => Err(ChordParseError::new("chord has no key", s)),
        }
    }
}

fn parse_key(token: &str) -> Option<Key> {
    // Single characters first: letters and digits.
    let mut chars = token.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        if let Some(key) = single_char_key(c) {
            return Some(key);
        }
    }

    let key = match token {
        "escape" | "esc" => Key::Escape,
        "enter" | "return" => Key::Enter,
        "tab" => Key::Tab,
        "backspace" => Key::Backspace,
        "space" => Key::Space,
        "insert" => Key::Insert,
        "delete" | "del" => Key::Delete,
        "home" => Key::Home,
        "end" => Key::End,
        "pageup" => Key::PageUp,
        "pagedown" => Key::PageDown,
        "up" => Key::ArrowUp,
        "down" => Key::ArrowDown,
        "left" => Key::ArrowLeft,
        "right" => Key::ArrowRight,
        "f1" => Key::F1,
        "f2" => Key::F2,
        "f3" => Key::F3,
        "f4" => Key::F4,
        "f5" => Key::F5,
        "f6" => Key::F6,
        "f7" => Key::F7,
        "f8" => Key::F8,
        "f9" => Key::F9,
        "f10" => Key::F10,
        "f11" => Key::F11,
        "f12" => Key::F12,
        _ => return None,
    };
    Some(key)
}

fn single_char_key(c: char) -> Option<Key> {
    let key = match c.to_ascii_lowercase() {
        'a' => Key::A, 'b' => Key::B, 'c' => Key::C, 'd' => Key::D,
        'e' => Key::E, 'f' => Key::F, 'g' => Key::G, 'h' => Key::H,
        'i' => Key::I, 'j' => Key::J, 'k' => Key::K, 'l' => Key::L,
        'm' => Key::M, 'n' => Key::N, 'o' => Key::O, 'p' => Key::P,
        'q' => Key::Q, 'r' => Key::R, 's' => Key::S, 't' => Key::T,
        'u' => Key::U, 'v' => Key::V, 'w' => Key::W, 'x' => Key::X,
        'y' => Key::Y, 'z' => Key::Z,
        '0' => Key::Digit0, '1' => Key::Digit1, '2' => Key::Digit2,
        '3' => Key::Digit3, '4' => Key::Digit4, '5' => Key::Digit5,
        '6' => Key::Digit6, '7' => Key::Digit7, '8' => Key::Digit8,
        '9' => Key::Digit9,
        _ => return None,
    };
    Some(key)
}

fn key_name(key: Key) -> String {
    let name = match key {
        Key::Escape => "escape",
        Key::Enter => "enter",
        Key::Tab => "tab",
        Key::Backspace => "backspace",
        Key::Space => "space",
        Key::Insert => "insert",
        Key::Delete => "delete",
        Key::Home => "home",
        Key::End => "end",
        Key::PageUp => "pageup",
        Key::PageDown => "pagedown",
        Key::ArrowUp => "up",
        Key::ArrowDown => "down",
        Key::ArrowLeft => "left",
        Key::ArrowRight => "right",
        Key::Digit0 => "0",
        Key::Digit1 => "1",
        Key::Digit2 => "2",
        Key::Digit3 => "3",
        Key::Digit4 => "4",
        Key::Digit5 => "5",
        Key::Digit6 => "6",
        Key::Digit7 => "7",
        Key::Digit8 => "8",
        Key::Digit9 => "9",
        _ => return format!("{key}").to_ascii_lowercase(),
    };
    name.to_string()
}

// ── ChordParseError ───────────────────────────────────────────────────────

/// A parse error from chord binding text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChordParseError {
    pub message: String,
    /// The offending token as written in the source text.
    pub token: String,
}

impl ChordParseError {
    fn new(msg: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            message: msg.into(),
            token: token.into(),
        }
    }
}

impl fmt::Display for ChordParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "chord parse error at {:?}: {}", self.token, self.message)
    }
}

impl std::error::Error for ChordParseError {}

// ── ChordMap ──────────────────────────────────────────────────────────────

/// Progress report from feeding one chord into a [`ChordMap`].
#[derive(Debug, PartialEq, Eq)]
pub enum ChordProgress<'a, A> {
    /// The pending sequence hit a stored binding exactly; pending resets.
    Matched(&'a A),
    /// The pending sequence is a live prefix of at least one binding.
    Pending,
    /// The pending sequence matches nothing; pending resets.
    NoMatch,
}

/// A registry of chord sequences mapped to actions.
///
/// Sequences live in a [`Trie`] keyed by [`Chord`]; an in-flight prefix is
/// tracked across [`feed`](Self::feed) calls so multi-stroke bindings
/// (`"g g"`, `"ctrl+k s"`) resolve one keystroke at a time.
#[derive(Debug, Default)]
pub struct ChordMap<A> {
    bindings: Trie<Chord, A>,
    pending: Vec<Chord>,
}

impl<A> ChordMap<A> {
    pub fn new() -> Self {
        Self {
            bindings: Trie::new(),
            pending: Vec::new(),
        }
    }

    /// Registers `action` under the chord sequence, returning the displaced
    /// action on rebind.
    pub fn bind(&mut self, sequence: &[Chord], action: A) -> Option<A> {
        self.bindings.insert(sequence, action)
    }

    /// Parses and registers a textual binding, e.g. `"ctrl+k s"`.
    pub fn bind_text(&mut self, text: &str, action: A) -> Result<Option<A>, ChordParseError> {
        let sequence = Chord::parse_sequence(text)?;
        Ok(self.bind(&sequence, action))
    }

    /// Pushes one chord into the in-flight sequence.
    ///
    /// A dead prefix resets and replays the failing chord as a fresh start,
    /// so the head of a new sequence is not lost to the tail of a failed one.
    pub fn feed(&mut self, chord: Chord) -> ChordProgress<'_, A> {
        self.pending.push(chord);

        if let Some(node) = self.bindings.subtrie(&self.pending) {
            if let Some(action) = node.value() {
                self.pending.clear();
                return ChordProgress::Matched(action);
            }
            if !node.is_empty() {
                return ChordProgress::Pending;
            }
        }

        // Dead prefix. Retry the chord alone unless it already was alone.
        let retry = self.pending.len() > 1;
        self.pending.clear();

        if retry {
            self.pending.push(chord);
            if let Some(node) = self.bindings.subtrie(&self.pending) {
                if let Some(action) = node.value() {
                    self.pending.clear();
                    return ChordProgress::Matched(action);
                }
                if !node.is_empty() {
                    return ChordProgress::Pending;
                }
            }
            self.pending.clear();
        }

        ChordProgress::NoMatch
    }

    /// The in-flight prefix, for "waiting for next key" indicator UIs.
    pub fn pending(&self) -> &[Chord] {
        &self.pending
    }

    /// Abandons the in-flight prefix.
    pub fn reset(&mut self) {
        self.pending.clear();
    }

    /// All bindings in ascending sequence order, lazily.
    pub fn bindings(&self) -> Entries<'_, Chord, A> {
        self.bindings.entries()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chord(text: &str) -> Chord {
        text.parse().unwrap()
    }

    // ── parsing ───────────────────────────────────────────────────────────

    #[test] fn parse_bare_letter() {
        assert_eq!(chord("g"), Chord::new(Key::G));
    }
    #[test] fn parse_named_key() {
        assert_eq!(chord("escape"), Chord::new(Key::Escape));
        assert_eq!(chord("pagedown"), Chord::new(Key::PageDown));
    }
    #[test] fn parse_with_modifiers() {
        let c = chord("ctrl+shift+s");
        assert_eq!(c.key, Key::S);
        assert!(c.modifiers.ctrl);
        assert!(c.modifiers.shift);
        assert!(!c.modifiers.alt);
    }
    #[test] fn parse_digit_and_function_keys() {
        assert_eq!(chord("3").key, Key::Digit3);
        assert_eq!(chord("f11").key, Key::F11);
    }
    #[test] fn parse_sequence_splits_on_whitespace() {
        let seq = Chord::parse_sequence("ctrl+k  s").unwrap();
        assert_eq!(seq.len(), 2);
        assert_eq!(seq[1], Chord::new(Key::S));
    }
    #[test] fn parse_rejects_unknown_key() {
        assert!("ctrl+banana".parse::<Chord>().is_err());
    }
    #[test] fn parse_rejects_modifier_only() {
        assert!("ctrl".parse::<Chord>().is_err());
    }
    #[test] fn parse_rejects_double_key() {
        assert!("a+b".parse::<Chord>().is_err());
    }

    #[test]
    fn display_round_trips_canonical_text() {
        for text in ["g", "ctrl+s", "ctrl+alt+delete", "shift+up", "space"] {
            assert_eq!(chord(text).to_string(), text);
        }
    }

    // ── feeding ───────────────────────────────────────────────────────────

    fn demo_map() -> ChordMap<&'static str> {
        let mut map = ChordMap::new();
        map.bind_text("p", "pause").unwrap();
        map.bind_text("g g", "top").unwrap();
        map.bind_text("g e", "end").unwrap();
        map.bind_text("ctrl+k s", "save").unwrap();
        map
    }

    #[test]
    fn single_chord_matches_immediately() {
        let mut map = demo_map();
        assert_eq!(map.feed(chord("p")), ChordProgress::Matched(&"pause"));
        assert!(map.pending().is_empty());
    }

    #[test]
    fn live_prefix_reports_pending() {
        let mut map = demo_map();
        assert_eq!(map.feed(chord("g")), ChordProgress::Pending);
        assert_eq!(map.pending(), &[chord("g")]);
        assert_eq!(map.feed(chord("g")), ChordProgress::Matched(&"top"));
        assert!(map.pending().is_empty());
    }

    #[test]
    fn dead_prefix_resets_and_retries_the_failing_chord() {
        let mut map = demo_map();
        assert_eq!(map.feed(chord("g")), ChordProgress::Pending);
        // "g p" is dead, but "p" alone is a binding — it must still fire.
        assert_eq!(map.feed(chord("p")), ChordProgress::Matched(&"pause"));
    }

    #[test]
    fn dead_prefix_retry_can_start_a_new_sequence() {
        let mut map = demo_map();
        map.feed(chord("g"));
        // "g ctrl+k" dies; "ctrl+k" restarts as a live prefix.
        assert_eq!(map.feed(chord("ctrl+k")), ChordProgress::Pending);
        assert_eq!(map.feed(chord("s")), ChordProgress::Matched(&"save"));
    }

    #[test]
    fn unbound_chord_is_no_match() {
        let mut map = demo_map();
        assert_eq!(map.feed(chord("q")), ChordProgress::NoMatch);
        assert!(map.pending().is_empty());
    }

    #[test]
    fn rebind_returns_displaced_action() {
        let mut map = demo_map();
        assert_eq!(map.bind_text("p", "resume").unwrap(), Some("pause"));
        assert_eq!(map.feed(chord("p")), ChordProgress::Matched(&"resume"));
    }

    #[test]
    fn bindings_enumerate_in_ascending_chord_order() {
        let map = demo_map();
        // Order is lexicographic over Chord sequences, not over their
        // rendered text — Key::G precedes Key::K regardless of modifiers.
        let sequences: Vec<Vec<Chord>> = map.bindings().map(|(seq, _)| seq).collect();
        let mut sorted = sequences.clone();
        sorted.sort();
        assert_eq!(sequences, sorted);
        assert_eq!(sequences.len(), 4);
        assert_eq!(sequences[0], Chord::parse_sequence("g e").unwrap());
        assert_eq!(sequences[1], Chord::parse_sequence("g g").unwrap());
    }

    #[test]
    fn reset_abandons_the_prefix() {
        let mut map = demo_map();
        map.feed(chord("g"));
        map.reset();
        assert!(map.pending().is_empty());
        assert_eq!(map.feed(chord("e")), ChordProgress::NoMatch);
    }
}
