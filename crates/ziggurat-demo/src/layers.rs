use ziggurat_engine::core::{EventResult, Layer, StackCtx};
use ziggurat_engine::input::{Chord, ChordMap, ChordParseError, ChordProgress, Key, KeyEvent};
use ziggurat_engine::time::FrameTime;

use crate::surface::TextSurface;

// ── FieldLayer ────────────────────────────────────────────────────────────

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum FieldAction {
    Pause,
    Help,
    Reset,
    Quit,
}

impl FieldAction {
    fn label(self) -> &'static str {
        match self {
            FieldAction::Pause => "pause the field",
            FieldAction::Help => "show this help",
            FieldAction::Reset => "reset the marker",
            FieldAction::Quit => "quit",
        }
    }
}

/// The base simulation layer: a marker bouncing around a bordered field,
/// steered by chord bindings.
pub struct FieldLayer {
    chords: ChordMap<FieldAction>,
    x: f32,
    y: f32,
    vx: f32,
    vy: f32,
}

impl FieldLayer {
    pub fn new() -> Result<Self, ChordParseError> {
        let mut chords = ChordMap::new();
        chords.bind_text("p", FieldAction::Pause)?;
        chords.bind_text("h", FieldAction::Help)?;
        chords.bind_text("g g", FieldAction::Reset)?;
        chords.bind_text("escape", FieldAction::Quit)?;

        Ok(Self {
            chords,
            x: 2.0,
            y: 2.0,
            vx: 11.0,
            vy: 5.0,
        })
    }

    fn help_lines(&self) -> Vec<String> {
        self.chords
            .bindings()
            .map(|(seq, action)| {
                let keys: Vec<String> = seq.iter().map(Chord::to_string).collect();
                format!("{:10} {}", keys.join(" "), action.label())
            })
            .collect()
    }
}

impl Layer<TextSurface> for FieldLayer {
    fn update(&mut self, time: FrameTime, _ctx: &mut StackCtx<TextSurface>) {
        self.x += self.vx * time.dt;
        self.y += self.vy * time.dt;

        // Bounce off the inside of the border.
        if self.x < 1.0 || self.x > 36.0 {
            self.vx = -self.vx;
            self.x = self.x.clamp(1.0, 36.0);
        }
        if self.y < 1.0 || self.y > 9.0 {
            self.vy = -self.vy;
            self.y = self.y.clamp(1.0, 9.0);
        }
    }

    fn draw(&mut self, surface: &mut TextSurface) {
        surface.clear(' ');
        surface.border();
        surface.put(self.x as i32, self.y as i32, '@');

        let pending = self.chords.pending();
        if !pending.is_empty() {
            let text: Vec<String> = pending.iter().map(Chord::to_string).collect();
            surface.text(2, surface.height() as i32 - 1, &format!(" {} ... ", text.join(" ")));
        }
    }

    fn on_key_down(&mut self, event: &KeyEvent, ctx: &mut StackCtx<TextSurface>) -> EventResult {
        // Bare modifier presses are not chords; they arrive again as the
        // modifier state of the key they decorate.
        if matches!(event.key, Key::Shift | Key::Control | Key::Alt | Key::Meta) {
            return EventResult::Ignored;
        }

        let chord = Chord::with_modifiers(event.key, event.modifiers);
        let action = match self.chords.feed(chord) {
            ChordProgress::Matched(action) => *action,
            ChordProgress::Pending => return EventResult::Consumed,
            ChordProgress::NoMatch => return EventResult::Ignored,
        };

        match action {
            FieldAction::Pause => ctx.push(PauseLayer::new()),
            FieldAction::Help => ctx.push(HelpLayer::new(self.help_lines())),
            FieldAction::Reset => {
                self.x = 2.0;
                self.y = 2.0;
            }
            FieldAction::Quit => {
                log::info!("field layer dismissing itself");
                ctx.pop();
            }
        }
        EventResult::Consumed
    }
}

// ── PauseLayer ────────────────────────────────────────────────────────────

/// A paused-menu overlay: freezes every layer beneath it while keeping the
/// scene on screen, and consumes all keyboard input except the resume key.
pub struct PauseLayer {
    blink: f32,
}

impl PauseLayer {
    pub fn new() -> Self {
        Self { blink: 0.0 }
    }
}

impl Layer<TextSurface> for PauseLayer {
    // pass_update stays false: the field below is suspended.
    fn pass_draw(&self) -> bool {
        true
    }

    fn update(&mut self, time: FrameTime, _ctx: &mut StackCtx<TextSurface>) {
        self.blink += time.dt;
    }

    fn draw(&mut self, surface: &mut TextSurface) {
        let y = surface.height() as i32 / 2;
        if self.blink.fract() < 0.75 {
            surface.text(13, y, "== PAUSED ==");
        }
        surface.text(9, y + 1, "press p to resume");
    }

    fn on_key_down(&mut self, event: &KeyEvent, ctx: &mut StackCtx<TextSurface>) -> EventResult {
        if event.key == Key::P || event.key == Key::Escape {
            ctx.pop();
        }
        // Everything else is swallowed; the field must not react while
        // paused.
        EventResult::Consumed
    }
}

// ── HelpLayer ─────────────────────────────────────────────────────────────

/// A help overlay listing the field's chord bindings. Dismissed by any key.
pub struct HelpLayer {
    lines: Vec<String>,
}

impl HelpLayer {
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }
}

impl Layer<TextSurface> for HelpLayer {
    fn pass_draw(&self) -> bool {
        true
    }

    fn draw(&mut self, surface: &mut TextSurface) {
        surface.text(3, 1, "bindings:");
        for (i, line) in self.lines.iter().enumerate() {
            surface.text(5, 2 + i as i32, line);
        }
        surface.text(3, 2 + self.lines.len() as i32 + 1, "press any key to close");
    }

    fn on_key_down(&mut self, _event: &KeyEvent, ctx: &mut StackCtx<TextSurface>) -> EventResult {
        ctx.pop();
        EventResult::Consumed
    }
}
