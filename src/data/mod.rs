//! Built-in data.

pub mod sample;

pub use sample::*;
