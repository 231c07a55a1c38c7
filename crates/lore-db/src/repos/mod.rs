//! Repository modules.
//!
//! `item` implements the item store contract on `LoreDb`. The remaining
//! modules add operations to `LoreService` via `impl LoreService` blocks.

pub mod catalog;
pub mod dashboard;
pub mod item;
pub mod library;
pub mod lifecycle;
