//! Scripted host for the Ziggurat layer stack.
//!
//! Plays the role of the platform: a fixed-cadence scheduler feeding
//! timestamps, an input source feeding a scripted event timeline, and a
//! text surface standing in for a real drawing target. Runs until the
//! stack empties and the runtime reports `Idle`.

mod layers;
mod surface;

use anyhow::{Context, Result};
use ziggurat_engine::core::FrameControl;
use ziggurat_engine::input::{InputEvent, Key, KeyEvent, Modifiers};
use ziggurat_engine::logging::{init_logging, LoggingConfig};
use ziggurat_engine::runtime::Runtime;

use crate::layers::FieldLayer;
use crate::surface::TextSurface;

const FRAME_MS: f64 = 1000.0 / 60.0;

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

/// The input timeline: `(frame index, event)` pairs in frame order.
fn script() -> Vec<(u64, InputEvent)> {
    vec![
        (40, key_down(Key::P)),      // pause the field
        (42, key_up(Key::P)),
        (75, key_down(Key::P)),      // resume
        (77, key_up(Key::P)),
        (100, key_down(Key::G)),     // "g g" resets the marker
        (102, key_up(Key::G)),
        (104, key_down(Key::G)),
        (106, key_up(Key::G)),
        (130, key_down(Key::H)),     // help overlay
        (132, key_up(Key::H)),
        (170, key_down(Key::Enter)), // any key dismisses help
        (172, key_up(Key::Enter)),
        (200, key_down(Key::Escape)), // quit
        (202, key_up(Key::Escape)),
    ]
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let mut runtime = Runtime::new();
    runtime.push(FieldLayer::new().context("failed to register field bindings")?);

    let mut surface = TextSurface::new(38, 12);
    let mut timeline = script().into_iter().peekable();

    let mut frame: u64 = 0;
    loop {
        while let Some((at, _)) = timeline.peek() {
            if *at > frame {
                break;
            }
            let (_, event) = timeline.next().unwrap();
            runtime.dispatch(event);
        }

        let control = runtime.tick(frame as f64 * FRAME_MS, &mut surface);

        if frame % 40 == 0 {
            println!("frame {frame:>4}  layers {}", runtime.len());
            print!("{surface}");

            let held: Vec<String> = runtime
                .input_state()
                .keys_down
                .iter()
                .map(|k| k.to_string())
                .collect();
            println!("held keys: [{}]", held.join(", "));
            println!();
        }

        if control == FrameControl::Idle {
            println!("stack empty after frame {frame}; host stops scheduling");
            break;
        }
        frame += 1;
    }

    Ok(())
}
