//! Pure renderers from the declaration model to C++ boilerplate.
//!
//! No I/O happens here: every function maps a declaration to a
//! newline-terminated `String`, which the edit session appends to the target
//! file.

use serde::{Deserialize, Serialize};

use crate::domain::declaration::{Field, FunctionDeclaration, TypeDeclaration};

/// Indentation and marker strings used by the renderers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderStyle {
    /// Indentation of function bodies and attribute lines.
    pub body_indent: String,
    /// Extra prefix applied to every line of a nested method.
    pub nested_indent: String,
    /// Access marker opening the attribute block of a class/struct.
    pub visibility: String,
    /// Comment placed in the body of every generated function.
    pub body_placeholder: String,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            body_indent: "    ".into(),
            nested_indent: "\t".into(),
            visibility: "public:".into(),
            body_placeholder: "// Write your code".into(),
        }
    }
}

/// Line-oriented writer that prepends a fixed prefix to every line.
#[derive(Debug, Default)]
struct CodeWriter {
    prefix: String,
    buffer: String,
}

impl CodeWriter {
    fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            buffer: String::new(),
        }
    }

    fn line(&mut self, s: &str) -> &mut Self {
        self.buffer.push_str(&self.prefix);
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Append already-rendered text untouched.
    fn raw(&mut self, s: &str) -> &mut Self {
        self.buffer.push_str(s);
        self
    }

    fn build(self) -> String {
        self.buffer
    }
}

/// Render `<type> <name>, <type> <name>` in insertion order.
pub fn render_parameters(parameters: &[Field]) -> String {
    parameters
        .iter()
        .map(|p| format!("{} {}", p.ty, p.name))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Render a function or method.
///
/// ```
/// use cppm_core::domain::{Field, FunctionDeclaration, RenderStyle, render_function};
///
/// let add = FunctionDeclaration::new("add", false)
///     .with_description("adds")
///     .with_return_type("int")
///     .with_parameters(vec![Field::new("a", "int"), Field::new("b", "int")]);
///
/// assert_eq!(
///     render_function(&add, &RenderStyle::default()),
///     "int add(int a, int b) {\n// adds\n    // Write your code\n}\n"
/// );
/// ```
pub fn render_function(decl: &FunctionDeclaration, style: &RenderStyle) -> String {
    let prefix = if decl.nested {
        style.nested_indent.as_str()
    } else {
        ""
    };

    let mut out = CodeWriter::with_prefix(prefix);
    out.line(&format!(
        "{} {}({}) {{",
        decl.return_type,
        decl.name,
        render_parameters(&decl.parameters)
    ))
    .line(&format!("// {}", decl.description))
    .line(&format!("{}{}", style.body_indent, style.body_placeholder))
    .line("}");
    out.build()
}

/// Render a class or struct, including its nested methods.
pub fn render_type(decl: &TypeDeclaration, style: &RenderStyle) -> String {
    let mut out = CodeWriter::default();
    out.line(&format!("{} {} {{", decl.kind, decl.name))
        .line(&format!("// {}", decl.description))
        .line(&style.visibility);

    for attr in &decl.attributes {
        out.line(&format!("{}{} {};", style.body_indent, attr.ty, attr.name));
    }
    for method in decl.methods() {
        out.raw(&render_function(method, style));
    }

    out.line("};");
    out.build()
}
