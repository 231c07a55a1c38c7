//! Update builder types for item mutations.
//!
//! Each builder produces an update struct with `Option` fields. Only `Some`
//! fields are applied; everything else keeps its stored value.

pub mod item;
