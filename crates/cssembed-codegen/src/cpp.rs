//! C++ translation unit emitter.

/// Where the generated declaration lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    /// Header providing `StringView`, written as `#include <...>`.
    pub include: String,
    /// Enclosing namespace, e.g. `Web::CSS`.
    pub namespace: String,
}

impl Default for Target {
    fn default() -> Self {
        Self {
            include: "AK/StringView.h".into(),
            namespace: "Web::CSS".into(),
        }
    }
}

/// Render the source file declaring `variable_name` as a `StringView` over
/// `body`. The body is placed between the quotes as-is.
pub fn render(variable_name: &str, body: &str, target: &Target) -> String {
    let mut out = String::with_capacity(body.len() + 128);
    out.push_str(&format!("#include <{}>\n", target.include));
    out.push_str(&format!("namespace {} {{\n", target.namespace));
    out.push_str(&format!("extern StringView {variable_name};\n"));
    out.push_str(&format!("StringView {variable_name} = \"{body}\"sv;\n"));
    out.push_str("}\n");
    out
}
