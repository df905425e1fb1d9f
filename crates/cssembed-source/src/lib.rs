//! cssembed Source
//!
//! Reads a stylesheet and reduces it to the lines that get embedded.
//! Lines are split on `\n`, `\r\n`, or a lone `\r`. A line whose first
//! character is `#` is dropped; every other line keeps its content with
//! trailing whitespace removed.
//!
//! # Example
//!
//! ```
//! use cssembed_source::StyleSheet;
//!
//! let sheet = StyleSheet::parse("# header\na { color: red }  \n");
//! assert_eq!(sheet.texts(), vec!["a { color: red }"]);
//! assert_eq!(sheet.comment_lines(), 1);
//! ```

pub mod line;
pub mod stylesheet;

pub use line::{is_comment, split_lines, SourceLine, COMMENT_MARKER};
pub use stylesheet::StyleSheet;

use std::path::PathBuf;

/// Failure to load a stylesheet from disk.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// The file is missing, unreadable, or not valid UTF-8.
    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
