//! Interactive text-file picker.
//!
//! This is intentionally kept separate from clap parsing:
//! - clap handles structured flags/subcommands
//! - the picker provides the "run `lsel` and choose a file" UX
//!
//! The picker searches for `*.txt` files under the current working directory.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::error::AppError;

/// Directory recursion depth for finding text files.
const DEFAULT_SEARCH_DEPTH: usize = 4;

/// Prompt the user to select a `.txt` file from the current directory tree.
///
/// Behavior:
/// - list discovered `*.txt` files
/// - accept either a number (from the list) or an explicit path
/// - `q` cancels
pub fn prompt_for_text_path() -> Result<PathBuf, AppError> {
    let files = discover_text_files();
    if files.is_empty() {
        return Err(AppError::resource_unavailable(
            "No .txt files found. Provide one with `lsel render <file.txt>` or use `--sample`.",
        ));
    }

    println!("Found {} text file(s):", files.len());
    for (idx, path) in files.iter().enumerate() {
        println!("{:>3}) {}", idx + 1, pretty_path(path));
    }

    loop {
        print!(
            "Select a file by number (1-{}) or type a path (q to quit): ",
            files.len()
        );
        io::stdout()
            .flush()
            .map_err(|e| AppError::resource_unavailable(format!("Failed to write prompt: {e}")))?;

        let mut input = String::new();
        let bytes = io::stdin()
            .read_line(&mut input)
            .map_err(|e| AppError::resource_unavailable(format!("Failed to read input: {e}")))?;

        if bytes == 0 {
            return Err(AppError::resource_unavailable(
                "No input received. Provide a file with `lsel render <file.txt>`.",
            ));
        }

        let input = input.trim();
        if input.eq_ignore_ascii_case("q") {
            return Err(AppError::resource_unavailable("Canceled."));
        }

        if let Ok(choice) = input.parse::<usize>() {
            if (1..=files.len()).contains(&choice) {
                return validate_text_path(&files[choice - 1]);
            }
            println!(
                "Invalid choice: {choice}. Enter a number between 1 and {}.",
                files.len()
            );
            continue;
        }

        let candidate = PathBuf::from(input);
        match validate_text_path(&candidate) {
            Ok(path) => return Ok(path),
            Err(err) => {
                println!("{err}");
                continue;
            }
        }
    }
}

/// Validate that the provided path points to an existing file.
fn validate_text_path(path: &Path) -> Result<PathBuf, AppError> {
    if !path.is_file() {
        return Err(AppError::resource_unavailable(format!(
            "'{}' is not a readable file.",
            path.display()
        )));
    }
    Ok(path.to_path_buf())
}

fn discover_text_files() -> Vec<PathBuf> {
    let mut found = Vec::new();
    walk_dir(Path::new("."), DEFAULT_SEARCH_DEPTH, &mut found);
    found.sort();
    found
}

fn walk_dir(dir: &Path, depth: usize, found: &mut Vec<PathBuf>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            // Skip hidden directories (.git etc.) to keep the listing useful.
            let hidden = path
                .file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| n.starts_with('.'));
            if !hidden && depth > 0 {
                walk_dir(&path, depth - 1, found);
            }
        } else if path.extension().and_then(|e| e.to_str()) == Some("txt") {
            found.push(path);
        }
    }
}

fn pretty_path(path: &Path) -> String {
    path.strip_prefix(".")
        .unwrap_or(path)
        .display()
        .to_string()
}
