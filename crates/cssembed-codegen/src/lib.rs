//! cssembed Code Generator
//!
//! Turns the filtered lines of a stylesheet into a C++ translation unit that
//! exposes them as a single `StringView`. Lines are joined with a
//! backslash-newline so the literal spans one physical line per CSS line.
//!
//! ```text
//! StyleSheet → generate() → "#include <AK/StringView.h>\nnamespace Web::CSS {\n..."
//! ```

pub mod cpp;
pub mod escape;

pub use cpp::{render, Target};
pub use escape::{escape_line, Escaping};

use cssembed_source::StyleSheet;

/// Separator placed between embedded lines: a line continuation.
pub const LINE_CONTINUATION: &str = "\\\n";

/// Code generation error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodegenError {
    #[error("variable name must not be empty")]
    EmptyVariableName,
}

/// Knobs for a generation run. The default reproduces the downstream format
/// exactly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateOptions {
    pub target: Target,
    pub escaping: Escaping,
}

/// Join embedded lines with [`LINE_CONTINUATION`].
pub fn join_lines<S: AsRef<str>>(lines: &[S]) -> String {
    let mut body = String::new();
    for (i, line) in lines.iter().enumerate() {
        if i > 0 {
            body.push_str(LINE_CONTINUATION);
        }
        body.push_str(line.as_ref());
    }
    body
}

/// Generate the C++ source embedding `sheet` under `variable_name`.
///
/// The name is used verbatim; beyond rejecting an empty name, whether it is
/// a legal C++ identifier is left to the caller.
pub fn generate(
    variable_name: &str,
    sheet: &StyleSheet,
    options: &GenerateOptions,
) -> Result<String, CodegenError> {
    if variable_name.is_empty() {
        return Err(CodegenError::EmptyVariableName);
    }

    let lines: Vec<_> = sheet
        .lines
        .iter()
        .map(|l| escape_line(&l.text, options.escaping))
        .collect();
    let body = join_lines(&lines);

    Ok(render(variable_name, &body, &options.target))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sheet(source: &str) -> StyleSheet {
        StyleSheet::parse(source)
    }

    // =========================================================================
    // join_lines
    // =========================================================================

    #[test]
    fn test_join_empty() {
        let lines: [&str; 0] = [];
        assert_eq!(join_lines(&lines), "");
    }

    #[test]
    fn test_join_single() {
        assert_eq!(join_lines(&["a{}"]), "a{}");
    }

    #[test]
    fn test_join_many() {
        assert_eq!(join_lines(&["a", "", "b"]), "a\\\n\\\nb");
    }

    // =========================================================================
    // generate()
    // =========================================================================

    #[test]
    fn test_generate_filters_comments() {
        let output = generate(
            "foo",
            &sheet("a{color:red}\n# comment\nb{color:blue}\n"),
            &GenerateOptions::default(),
        )
        .unwrap();

        assert_eq!(
            output,
            "#include <AK/StringView.h>\n\
             namespace Web::CSS {\n\
             extern StringView foo;\n\
             StringView foo = \"a{color:red}\\\nb{color:blue}\"sv;\n\
             }\n"
        );
    }

    #[test]
    fn test_generate_all_comments() {
        let output = generate(
            "empty_sheet",
            &sheet("# nothing\n# here\n"),
            &GenerateOptions::default(),
        )
        .unwrap();

        assert!(output.contains("extern StringView empty_sheet;\n"));
        assert!(output.contains("StringView empty_sheet = \"\"sv;\n"));
    }

    #[test]
    fn test_generate_is_deterministic() {
        let source = sheet("html {\n  display: block;\n}\n");
        let options = GenerateOptions::default();
        assert_eq!(
            generate("default_stylesheet_source", &source, &options),
            generate("default_stylesheet_source", &source, &options),
        );
    }

    #[test]
    fn test_generate_verbatim_keeps_quotes() {
        let output = generate(
            "quirks",
            &sheet("q::before { content: \"<\" }"),
            &GenerateOptions::default(),
        )
        .unwrap();
        assert!(output.contains("= \"q::before { content: \"<\" }\"sv;"));
    }

    #[test]
    fn test_generate_escaped() {
        let options = GenerateOptions {
            escaping: Escaping::CppLiteral,
            ..GenerateOptions::default()
        };
        let output = generate("quirks", &sheet("q::before { content: \"\\201C\" }"), &options)
            .unwrap();
        assert!(output.contains("= \"q::before { content: \\\"\\\\201C\\\" }\"sv;"));
    }

    #[test]
    fn test_generate_custom_target() {
        let options = GenerateOptions {
            target: Target {
                include: "AK/StringView.h".into(),
                namespace: "Web::HTML".into(),
            },
            ..GenerateOptions::default()
        };
        let output = generate("mathml", &sheet("math {}"), &options).unwrap();
        assert!(output.contains("namespace Web::HTML {\n"));
    }

    #[test]
    fn test_generate_rejects_empty_name() {
        let err = generate("", &sheet("a {}"), &GenerateOptions::default()).unwrap_err();
        assert_eq!(err, CodegenError::EmptyVariableName);
    }

    #[test]
    fn test_generate_name_used_verbatim() {
        let output = generate("not an identifier", &sheet("a {}"), &GenerateOptions::default())
            .unwrap();
        assert!(output.contains("extern StringView not an identifier;"));
    }
}
