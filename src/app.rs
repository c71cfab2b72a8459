//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - resolves the text source (file, stdin, sample, or interactive pick)
//! - runs load -> index -> render
//! - prints the markup or the index summary
//! - writes optional exports

use clap::Parser;

use crate::cli::{Command, FromIndexArgs, RenderArgs};
use crate::domain::{RenderConfig, RunConfig, TextSource};
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `lsel` binary.
pub fn run() -> Result<(), AppError> {
    // We want `lsel notes.txt` to behave like `lsel render notes.txt`.
    //
    // Clap requires a subcommand name, so we do a small, explicit rewrite of the
    // argv list before parsing. This preserves a clean clap structure while
    // keeping the short form.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    match cli.command {
        Command::Render(args) => handle_render(args, OutputMode::Markup),
        Command::Lines(args) => handle_render(args, OutputMode::LinesOnly),
        Command::FromIndex(args) => handle_from_index(args),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputMode {
    Markup,
    LinesOnly,
}

fn handle_render(args: RenderArgs, mode: OutputMode) -> Result<(), AppError> {
    let config = run_config_from_args(&args)?;
    let run = pipeline::run_render(&config)?;

    match mode {
        OutputMode::Markup => println!("{}", run.markup),
        OutputMode::LinesOnly => {
            println!(
                "{}",
                crate::render::format_index_summary(&run.indexed, &config.source.display_name())
            );
        }
    }

    // Optional exports.
    if let Some(path) = &config.out {
        crate::io::export::write_markup(path, &run.markup)?;
    }
    if let Some(path) = &config.export_index {
        crate::io::index_file::write_index_json(path, &run.indexed.index, &config.element_id)?;
    }

    Ok(())
}

fn handle_from_index(args: FromIndexArgs) -> Result<(), AppError> {
    let file = crate::io::index_file::read_index_json(&args.index)?;

    let config = RenderConfig {
        element_id: args.element_id.unwrap_or_else(|| file.element_id.clone()),
        include_unknown: args.unknown && !args.no_unknown,
    };

    let markup = crate::render::render_select(&file.to_index(), &config);
    println!("{markup}");
    Ok(())
}

pub fn run_config_from_args(args: &RenderArgs) -> Result<RunConfig, AppError> {
    let source = resolve_source(args)?;

    let element_id = match (&args.element_id, &source) {
        (Some(id), _) => id.clone(),
        (None, TextSource::Sample) => crate::data::sample::SAMPLE_ELEMENT_ID.to_string(),
        (None, _) => "lines".to_string(),
    };

    Ok(RunConfig {
        source,
        element_id,
        include_unknown: args.unknown && !args.no_unknown,
        out: args.out.clone(),
        export_index: args.export_index.clone(),
    })
}

fn resolve_source(args: &RenderArgs) -> Result<TextSource, AppError> {
    if args.sample {
        return Ok(TextSource::Sample);
    }

    match &args.file {
        Some(path) if path.as_os_str() == "-" => Ok(TextSource::Stdin),
        Some(path) => Ok(TextSource::Path(path.clone())),
        None => crate::cli::picker::prompt_for_text_path().map(TextSource::Path),
    }
}

/// Rewrite argv so `lsel <file>` defaults to `lsel render <file>`.
///
/// Rules:
/// - `lsel`                      -> `lsel render`
/// - `lsel notes.txt ...`        -> `lsel render notes.txt ...`
/// - `lsel --sample ...`         -> `lsel render --sample ...`
/// - `lsel --help/--version/-h`  -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("render".to_string());
        return argv;
    };

    let is_top_level_help_or_version = matches!(
        arg1.as_str(),
        "-h" | "--help" | "-V" | "--version" | "help"
    );
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "render" | "lines" | "from-index");
    if is_subcommand {
        return argv;
    }

    argv.insert(1, "render".to_string());
    argv
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn bare_invocation_defaults_to_render() {
        assert_eq!(rewrite_args(argv(&["lsel"])), argv(&["lsel", "render"]));
    }

    #[test]
    fn file_argument_defaults_to_render() {
        assert_eq!(
            rewrite_args(argv(&["lsel", "notes.txt", "--id", "notes"])),
            argv(&["lsel", "render", "notes.txt", "--id", "notes"])
        );
    }

    #[test]
    fn leading_flag_defaults_to_render() {
        assert_eq!(
            rewrite_args(argv(&["lsel", "--sample"])),
            argv(&["lsel", "render", "--sample"])
        );
    }

    #[test]
    fn subcommands_and_help_pass_through() {
        assert_eq!(
            rewrite_args(argv(&["lsel", "lines", "notes.txt"])),
            argv(&["lsel", "lines", "notes.txt"])
        );
        assert_eq!(rewrite_args(argv(&["lsel", "--help"])), argv(&["lsel", "--help"]));
    }

    #[test]
    fn config_resolution_prefers_explicit_id() {
        let args = RenderArgs {
            file: None,
            sample: true,
            element_id: Some("custom".to_string()),
            unknown: true,
            no_unknown: false,
            out: None,
            export_index: None,
        };
        let config = run_config_from_args(&args).unwrap();
        assert_eq!(config.element_id, "custom");
        assert_eq!(config.source, TextSource::Sample);
    }

    #[test]
    fn sample_without_id_uses_sample_element_id() {
        let args = RenderArgs {
            file: None,
            sample: true,
            element_id: None,
            unknown: true,
            no_unknown: false,
            out: None,
            export_index: None,
        };
        let config = run_config_from_args(&args).unwrap();
        assert_eq!(config.element_id, "theDoctors");
        assert!(config.include_unknown);
    }

    #[test]
    fn no_unknown_wins_over_the_default() {
        let args = RenderArgs {
            file: Some("-".into()),
            sample: false,
            element_id: None,
            unknown: true,
            no_unknown: true,
            out: None,
            export_index: None,
        };
        let config = run_config_from_args(&args).unwrap();
        assert!(!config.include_unknown);
        assert_eq!(config.source, TextSource::Stdin);
    }
}
