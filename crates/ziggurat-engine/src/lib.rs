//! Ziggurat engine crate.
//!
//! This crate owns the layered dispatch core: a stack of interactive layers
//! where per-frame update, per-frame draw, and input events each follow
//! their own propagation policy. The platform pieces (scheduler, input
//! source, drawing surface) stay on the host side of the boundary.

pub mod core;
pub mod input;
pub mod runtime;
pub mod time;

pub mod logging;
