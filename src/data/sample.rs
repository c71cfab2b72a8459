//! Built-in sample input.
//!
//! A fixed newline-delimited list so the tool can be exercised without an
//! input file (`lsel render --sample`). Deliberately a constant, not generated
//! data: the rendered output for the sample is stable across runs.

/// Actors who have led Doctor Who, one per line.
pub const SAMPLE_TEXT: &str = "\
William Hartnell
Patrick Troughton
Jon Pertwee
Tom Baker
Peter Davison
Colin Baker
Sylvester McCoy
Paul McGann
Christopher Eccleston
David Tennant
Matt Smith
Peter Capaldi
Jodie Whittaker
Ncuti Gatwa
";

/// Element id used when rendering the sample without an explicit `--id`.
pub const SAMPLE_ELEMENT_ID: &str = "theDoctors";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::index_lines;

    #[test]
    fn sample_indexes_cleanly() {
        let indexed = index_lines(SAMPLE_TEXT);
        assert_eq!(indexed.index.len(), 14);
        assert_eq!(indexed.blanks_dropped, 0);
        assert_eq!(indexed.index.get(10), Some("Matt Smith"));
    }
}
