//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - text sources (`TextSource`)
//! - the ordered line mapping (`LineIndex`)
//! - render/run configuration (`RenderConfig`, `RunConfig`)
//! - the JSON export schema (`IndexFile`, `IndexEntry`)

pub mod types;

pub use types::*;
