//! Shared render pipeline used by the CLI subcommands.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! load -> decode -> index -> render
//!
//! Subcommands then focus on presentation (markup vs summary) and exports.

use crate::chain::Pipe;
use crate::domain::RunConfig;
use crate::error::AppError;
use crate::index::{IndexedText, index_lines};
use crate::io::reader::load_text;
use crate::render::render_select;

/// All computed outputs of a single run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub indexed: IndexedText,
    pub markup: String,
}

/// Execute the full pipeline and return the computed outputs.
///
/// The only fallible stage is the load; indexing and rendering are total, so
/// either this returns the full output or it fails before producing any.
pub fn run_render(config: &RunConfig) -> Result<RunOutput, AppError> {
    let text = load_text(&config.source)?;
    Ok(run_render_with_text(config, &text))
}

/// Execute the pipeline with pre-loaded text.
///
/// This keeps the resource acquisition at the boundary: callers that already
/// hold decoded text (tests, future front-ends) skip the load entirely.
pub fn run_render_with_text(config: &RunConfig, text: &str) -> RunOutput {
    index_lines(text).pipe(|indexed| RunOutput {
        markup: render_select(&indexed.index, &config.render_config()),
        indexed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TextSource;

    fn config(source: TextSource, element_id: &str, include_unknown: bool) -> RunConfig {
        RunConfig {
            source,
            element_id: element_id.to_string(),
            include_unknown,
            out: None,
            export_index: None,
        }
    }

    #[test]
    fn renders_text_end_to_end() {
        let cfg = config(TextSource::Sample, "theDoctors", true);
        let run = run_render_with_text(&cfg, "Matt Smith\nPeter Capaldi\nJodie Whittaker");

        assert_eq!(run.indexed.index.len(), 3);
        let expected = concat!(
            "<select id=\"theDoctors\" name=\"theDoctors\">\n",
            "\t<option>Unknown</option>\n",
            "\t<option value=\"0\">Matt Smith</option>\n",
            "\t<option value=\"1\">Peter Capaldi</option>\n",
            "\t<option value=\"2\">Jodie Whittaker</option>\n",
            "</select>\n",
        );
        assert_eq!(run.markup, expected);
    }

    #[test]
    fn sample_source_runs_the_full_pipeline() {
        let cfg = config(TextSource::Sample, "theDoctors", false);
        let run = run_render(&cfg).unwrap();

        assert_eq!(run.indexed.index.len(), 14);
        assert!(run.markup.starts_with("<select id=\"theDoctors\" name=\"theDoctors\">\n"));
        assert!(run.markup.ends_with("</select>\n"));
        assert!(!run.markup.contains("Unknown"));
    }

    #[test]
    fn missing_file_fails_before_producing_output() {
        let cfg = config(
            TextSource::Path("definitely/not/a/real/file.txt".into()),
            "x",
            true,
        );
        let err = run_render(&cfg).unwrap_err();
        assert_eq!(err.kind(), crate::error::ErrorKind::ResourceUnavailable);
    }
}
