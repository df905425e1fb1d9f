/// Lines starting with this character are dropped from the output.
pub const COMMENT_MARKER: char = '#';

/// A retained stylesheet line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLine {
    /// Line content with trailing whitespace stripped.
    pub text: String,
    /// 1-based line number in the input file.
    pub line: usize,
}

impl SourceLine {
    pub fn new(text: impl Into<String>, line: usize) -> Self {
        Self {
            text: text.into(),
            line,
        }
    }
}

/// Check whether a raw input line is a comment line.
///
/// Only column 0 counts: `"  # x"` and `"a { } # x"` are not comments.
pub fn is_comment(line: &str) -> bool {
    line.starts_with(COMMENT_MARKER)
}

/// Split text into lines, accepting `\n`, `\r\n` and lone `\r` terminators.
///
/// Terminators are not included in the yielded slices. A trailing terminator
/// does not yield an extra empty line, and empty text yields nothing.
pub fn split_lines(text: &str) -> Lines<'_> {
    Lines { rest: text }
}

/// Iterator returned by [`split_lines`].
#[derive(Debug, Clone)]
pub struct Lines<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Lines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.rest.is_empty() {
            return None;
        }

        match self.rest.find(['\n', '\r']) {
            Some(end) => {
                let line = &self.rest[..end];
                let after = &self.rest[end..];
                let terminator = if after.starts_with("\r\n") { 2 } else { 1 };
                self.rest = &after[terminator..];
                Some(line)
            }
            None => {
                let line = self.rest;
                self.rest = "";
                Some(line)
            }
        }
    }
}
