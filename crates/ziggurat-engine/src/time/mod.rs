//! Time subsystem.
//!
//! Turns the host scheduler's raw timestamps into stable per-frame
//! snapshots. Intended usage:
//! - one `FrameClock` per runtime (or per driven stack)
//! - call `tick(timestamp)` once per scheduler callback to obtain `FrameTime`

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};
