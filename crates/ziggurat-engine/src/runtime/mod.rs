//! Host-facing runtime shell.
//!
//! Composes the frame clock, input bookkeeping, and layer stack into the
//! two entry points a host drives: `tick` from its scheduler and
//! `dispatch` from its input source.

mod driver;

pub use driver::Runtime;
