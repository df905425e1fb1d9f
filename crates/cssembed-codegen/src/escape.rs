//! String-literal escaping for embedded lines.
//!
//! The downstream build consumes unescaped output, so [`Escaping::Verbatim`]
//! is the default. A stylesheet containing `"` or a trailing `\` breaks the
//! generated literal in that mode; [`Escaping::CppLiteral`] fixes that at the
//! cost of changing the emitted bytes.

use std::borrow::Cow;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Escaping {
    /// Embed lines exactly as read.
    #[default]
    Verbatim,
    /// Escape `\` and `"` for a C++ string literal.
    CppLiteral,
}

/// Escape one embedded line according to `escaping`.
pub fn escape_line(line: &str, escaping: Escaping) -> Cow<'_, str> {
    match escaping {
        Escaping::Verbatim => Cow::Borrowed(line),
        Escaping::CppLiteral => {
            if !line.contains(['\\', '"']) {
                return Cow::Borrowed(line);
            }
            let mut out = String::with_capacity(line.len() + 8);
            for ch in line.chars() {
                match ch {
                    '\\' => out.push_str("\\\\"),
                    '"' => out.push_str("\\\""),
                    c => out.push(c),
                }
            }
            Cow::Owned(out)
        }
    }
}
