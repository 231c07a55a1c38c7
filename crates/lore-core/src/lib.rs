//! # lore-core
//!
//! Core types, lifecycle rules, and derived views for Lore.
//!
//! This crate has no I/O. It provides:
//! - Entity structs (`LearningItem`, `BrowseSuggestion`, `ItemDraft`)
//! - Status, category, and tag-matching enums
//! - Pure lifecycle transitions that keep completion and queue flags consistent
//! - Dashboard and library views computed from an item snapshot
//! - The built-in browse catalog
//! - CLI response types

pub mod catalog;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod lifecycle;
pub mod responses;
pub mod views;
