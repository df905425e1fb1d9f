//! Filtered view of a stylesheet file.

use std::path::Path;

use crate::line::{is_comment, split_lines, SourceLine};
use crate::SourceError;

/// The embeddable lines of a stylesheet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleSheet {
    pub lines: Vec<SourceLine>,
    /// Number of lines in the input, comments included.
    pub total_lines: usize,
}

impl StyleSheet {
    /// Filter stylesheet text: drop comment lines, strip trailing whitespace.
    pub fn parse(text: &str) -> Self {
        let mut sheet = Self::default();

        for (index, raw) in split_lines(text).enumerate() {
            sheet.total_lines += 1;
            if is_comment(raw) {
                continue;
            }
            sheet.lines.push(SourceLine::new(raw.trim_end(), index + 1));
        }

        sheet
    }

    /// Read and filter a stylesheet file.
    pub fn read(path: impl AsRef<Path>) -> Result<Self, SourceError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| SourceError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let sheet = Self::parse(&text);
        tracing::debug!(
            path = %path.display(),
            total = sheet.total_lines,
            kept = sheet.lines.len(),
            "read stylesheet"
        );
        Ok(sheet)
    }

    /// Number of lines dropped as comments.
    pub fn comment_lines(&self) -> usize {
        self.total_lines - self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Retained line contents, in input order.
    pub fn texts(&self) -> Vec<&str> {
        self.lines.iter().map(|l| l.text.as_str()).collect()
    }
}
