//! Reading per-directory ignore files.
//!
//! Each directory in a collection walk may carry one ignore file (by default
//! [`IGNORE_FILE_NAME`]) whose rules apply to that directory and everything
//! beneath it. The file is UTF-8 text with one pattern per line; blank lines
//! and lines starting with `#` declare nothing, and trailing whitespace
//! (including a stray `\r` from CRLF line endings) is trimmed before parsing.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::IgnoreRule;

/// Default name of the per-directory ignore file.
pub const IGNORE_FILE_NAME: &str = "recopy.ignore";

/// Error returned when an ignore file cannot be read.
#[derive(Debug, Error)]
#[error("failed to read ignore rules from '{}': {source}", path.display())]
pub struct IgnoreFileError {
    path: PathBuf,
    #[source]
    source: io::Error,
}

impl IgnoreFileError {
    /// Returns the path of the ignore file that could not be read.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Consumes the error, returning the underlying I/O failure.
    #[must_use]
    pub fn into_source(self) -> io::Error {
        self.source
    }
}

/// Parses ignore rules from the text of one ignore file.
///
/// Lines are trimmed of trailing whitespace; blank lines and `#` comments are
/// skipped. Patterns are *not* compiled here, so malformed globs survive
/// parsing and are diagnosed when a rule set is built.
#[must_use]
pub fn parse_rules(text: &str) -> Vec<IgnoreRule> {
    text.lines()
        .filter_map(|line| IgnoreRule::parse(line.trim_end()))
        .collect()
}

/// Reads and parses the ignore file at `path`.
///
/// # Errors
///
/// Returns [`IgnoreFileError`] when the file cannot be read. Callers decide
/// whether that is fatal; during a walk it is recorded as a skip diagnostic.
pub fn read_rules(path: &Path) -> Result<Vec<IgnoreRule>, IgnoreFileError> {
    let text = fs::read_to_string(path).map_err(|source| IgnoreFileError {
        path: path.to_owned(),
        source,
    })?;
    Ok(parse_rules(&text))
}

#[cfg(test)]
mod tests {
    use super::{parse_rules, read_rules};
    use crate::RuleAction;

    #[test]
    fn parse_skips_blanks_and_comments() {
        let rules = parse_rules("# header\n\n*.log\n   \n!keep.log\n# trailing\n");
        assert_eq!(rules.len(), 2);
        assert_eq!(rules[0].pattern(), "*.log");
        assert_eq!(rules[0].action(), RuleAction::Exclude);
        assert_eq!(rules[1].pattern(), "keep.log");
        assert_eq!(rules[1].action(), RuleAction::Negate);
    }

    #[test]
    fn parse_trims_trailing_whitespace_and_crlf() {
        let rules = parse_rules("*.tmp   \r\nbuild/\t\r\n");
        assert_eq!(rules.len(), 2);
        assert_eq!(rules[0].pattern(), "*.tmp");
        assert_eq!(rules[1].pattern(), "build/");
    }

    #[test]
    fn parse_keeps_declaration_order() {
        let rules = parse_rules("b\na\nc\n");
        let patterns: Vec<_> = rules.iter().map(crate::IgnoreRule::pattern).collect();
        assert_eq!(patterns, ["b", "a", "c"]);
    }

    #[test]
    fn read_reports_missing_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let error = read_rules(&dir.path().join("absent.ignore")).expect_err("missing file");
        assert!(error.path().ends_with("absent.ignore"));
        assert!(error.to_string().contains("failed to read ignore rules"));
    }

    #[test]
    fn read_parses_file_contents() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("rules.ignore");
        std::fs::write(&path, "*.bak\n!important.bak\n").expect("write rules");

        let rules = read_rules(&path).expect("read rules");
        assert_eq!(rules.len(), 2);
        assert_eq!(rules[1].action(), RuleAction::Negate);
    }
}
