//! Select-box rendering and the line-index summary.

use crate::chain::{Appending, Pipe, append_line};
use crate::domain::{LineIndex, RenderConfig};
use crate::index::IndexedText;

/// Render the index as an HTML single-select control.
///
/// Output shape, one element per line, options indented with a single tab:
///
/// ```text
/// <select id="{element_id}" name="{element_id}">
///     <option>Unknown</option>                  (only when `include_unknown`)
///     <option value="{key}">{line}</option>     (one per entry, ascending key)
/// </select>
/// ```
///
/// The element id and line content are emitted verbatim (no escaping), and the
/// output is byte-for-byte deterministic for identical inputs.
pub fn render_select(index: &LineIndex, config: &RenderConfig) -> String {
    let id = &config.element_id;

    String::new()
        .pipe(|out| append_line(out, format!("<select id=\"{id}\" name=\"{id}\">")))
        .append_when(config.include_unknown, |out| {
            append_line(out, "\t<option>Unknown</option>")
        })
        .append_each(index.iter(), |out, (key, line)| {
            append_line(out, format!("\t<option value=\"{key}\">{line}</option>"))
        })
        .pipe(|out| append_line(out, "</select>"))
}

/// Format the human-readable index summary (counts + entries).
pub fn format_index_summary(indexed: &IndexedText, source_label: &str) -> String {
    let mut out = String::new();

    out.push_str(&format!("=== lsel - line index ({source_label}) ===\n"));
    out.push_str(&format!(
        "Lines: read={} | kept={} | blank dropped={}\n",
        indexed.lines_read, indexed.lines_kept, indexed.blanks_dropped
    ));
    out.push('\n');

    for (key, line) in indexed.index.iter() {
        out.push_str(&format!("{key:>4}  {line}\n"));
    }

    out
}
