//! Ordered-key containers for the **Ziggurat** engine.
//!
//! This crate is intentionally dependency-free so the containers can be
//! consumed by tooling, tests, and editors without pulling in any engine
//! code.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`search`] | `insertion_point` binary-search position finder |
//! | [`set`] | `SortedSet`, a set kept as a strictly-ascending sequence |
//! | [`trie`] | `Trie`, a prefix trie with ordered branches |

pub mod search;
pub mod set;
pub mod trie;

pub use search::insertion_point;
pub use set::SortedSet;
pub use trie::{Entries, Trie};
