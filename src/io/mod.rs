//! Input/output helpers.
//!
//! - text-source loading + UTF-8 decode (`reader`)
//! - markup file export (`export`)
//! - index JSON read/write (`index_file`)

pub mod export;
pub mod index_file;
pub mod reader;

pub use export::*;
pub use index_file::*;
pub use reader::*;
