//! Parser module: line patterns, field values and per-page readers.

pub mod class;
pub mod enums;
pub mod fields;
pub mod namespace;
pub mod patterns;
