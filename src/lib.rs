//! `line-select` library crate.
//!
//! The binary (`lsel`) is a thin wrapper around this library so that:
//!
//! - core logic is testable without spawning processes
//! - the load -> index -> render stages stay reusable and composable
//! - code stays easy to navigate as the project grows

pub mod app;
pub mod chain;
pub mod cli;
pub mod data;
pub mod domain;
pub mod error;
pub mod index;
pub mod io;
pub mod render;
