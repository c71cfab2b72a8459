//! Command-line parsing for the select-box generator.
//!
//! The goal of this module is to keep **argument parsing** and **command
//! dispatch** separate from the load/index/render code.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub mod picker;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "lsel",
    version,
    about = "Render newline-delimited text as an HTML <select> control"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Index a text source and print the rendered <select> markup.
    Render(RenderArgs),
    /// Print the line index (counts + entries) without rendering markup.
    Lines(RenderArgs),
    /// Render markup from a previously exported index JSON.
    FromIndex(FromIndexArgs),
}

/// Common options for rendering and listing.
#[derive(Debug, Parser, Clone)]
pub struct RenderArgs {
    /// Input text file (`-` reads stdin). Prompts for a file when omitted.
    pub file: Option<PathBuf>,

    /// Use the built-in sample list instead of a file.
    #[arg(long)]
    pub sample: bool,

    /// Element id for both the `id` and `name` attributes.
    ///
    /// Defaults to `lines` (`theDoctors` when rendering the sample).
    #[arg(short = 'i', long = "id", value_name = "ID")]
    pub element_id: Option<String>,

    /// Prepend the "Unknown" placeholder option (enabled by default).
    #[arg(long, default_value_t = true)]
    pub unknown: bool,

    /// Omit the "Unknown" placeholder option.
    #[arg(long)]
    pub no_unknown: bool,

    /// Also write the rendered markup to a file.
    #[arg(long, value_name = "FILE")]
    pub out: Option<PathBuf>,

    /// Export the line index to JSON.
    #[arg(long = "export-index", value_name = "JSON")]
    pub export_index: Option<PathBuf>,
}

/// Options for rendering a saved index.
#[derive(Debug, Parser)]
pub struct FromIndexArgs {
    /// Index JSON file produced by `lsel render --export-index`.
    #[arg(long, value_name = "JSON")]
    pub index: PathBuf,

    /// Override the element id stored in the file.
    #[arg(short = 'i', long = "id", value_name = "ID")]
    pub element_id: Option<String>,

    /// Prepend the "Unknown" placeholder option (enabled by default).
    #[arg(long, default_value_t = true)]
    pub unknown: bool,

    /// Omit the "Unknown" placeholder option.
    #[arg(long)]
    pub no_unknown: bool,
}
