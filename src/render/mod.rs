//! Markup rendering and terminal summaries.
//!
//! We keep formatting code in one place so:
//! - the indexing code stays clean and testable
//! - output changes are localized

pub mod select;

pub use select::*;
