//! Method bodies and other free-form code.

use super::{CodeWriter, IndentWriter, Renderable, TypeRef};
use crate::generation::ImportRegistry;

/// A piece of free-form code.
#[derive(Debug, Clone, PartialEq)]
pub enum CodeFragment {
    /// Literal text. Each `\n` ends the current output line.
    Text(String),
    /// A type reference, rendered short or qualified per the unit's imports.
    Type(TypeRef),
    /// Nested code, indented one level deeper. Must start at a line start.
    Indent(CodeModel),
}

/// An ordered sequence of code fragments.
///
/// # Example
///
/// ```
/// use jwrap_codegen::builder::{CodeModel, Renderable, TypeRef, Indent};
/// use jwrap_codegen::generation::ImportRegistry;
///
/// let mut code = CodeModel::new();
/// code.text("final ")
///     .type_ref(TypeRef::class("java.util.List"))
///     .line(" items = load();")
///     .block("if (items.isEmpty())", |b| {
///         b.line("return;");
///     });
///
/// let mut imports = ImportRegistry::new();
/// code.collect_imports(&mut imports);
///
/// assert_eq!(
///     code.render_to_string(Indent::JAVA, &imports),
///     "final List items = load();\nif (items.isEmpty()) {\n    return;\n}\n"
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CodeModel {
    fragments: Vec<CodeFragment>,
}

impl CodeModel {
    /// Create an empty code model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append literal text.
    pub fn text(&mut self, text: impl Into<String>) -> &mut Self {
        self.fragments.push(CodeFragment::Text(text.into()));
        self
    }

    /// Append a complete line of text.
    pub fn line(&mut self, text: impl Into<String>) -> &mut Self {
        let mut text = text.into();
        text.push('\n');
        self.text(text)
    }

    /// Append a type reference.
    pub fn type_ref(&mut self, ty: TypeRef) -> &mut Self {
        self.fragments.push(CodeFragment::Type(ty));
        self
    }

    /// Append a nested, indented section.
    pub fn indented(&mut self, f: impl FnOnce(&mut CodeModel)) -> &mut Self {
        let mut nested = CodeModel::new();
        f(&mut nested);
        self.fragments.push(CodeFragment::Indent(nested));
        self
    }

    /// Append `header {`, an indented section, and a closing `}`.
    pub fn block(&mut self, header: &str, f: impl FnOnce(&mut CodeModel)) -> &mut Self {
        self.line(format!("{} {{", header)).indented(f).line("}")
    }

    /// Append a raw fragment.
    pub fn push(&mut self, fragment: CodeFragment) -> &mut Self {
        self.fragments.push(fragment);
        self
    }

    /// The fragments in order.
    pub fn fragments(&self) -> &[CodeFragment] {
        &self.fragments
    }

    /// Check if there is no code.
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }
}

impl Renderable for CodeModel {
    fn collect_imports(&self, imports: &mut ImportRegistry) {
        for fragment in &self.fragments {
            match fragment {
                CodeFragment::Text(_) => {}
                CodeFragment::Type(ty) => imports.register(ty),
                CodeFragment::Indent(nested) => nested.collect_imports(imports),
            }
        }
    }

    fn render(&self, out: &mut dyn CodeWriter, imports: &ImportRegistry) {
        for fragment in &self.fragments {
            match fragment {
                CodeFragment::Text(text) => write_text(out, text),
                CodeFragment::Type(ty) => out.write(&ty.render(imports)),
                CodeFragment::Indent(nested) => {
                    let mut inner = IndentWriter::new(&mut *out);
                    nested.render(&mut inner, imports);
                }
            }
        }
    }
}

/// Write text, turning every line terminator into a line break on the writer.
///
/// Text after the last terminator is written inline.
pub(crate) fn write_text(out: &mut dyn CodeWriter, text: &str) {
    let mut rest = text;
    while let Some(pos) = rest.find('\n') {
        let line = &rest[..pos];
        out.write_line(line.strip_suffix('\r').unwrap_or(line));
        rest = &rest[pos + 1..];
    }
    if !rest.is_empty() {
        out.write(rest);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{Indent, SourceWriter};

    fn render(code: &CodeModel) -> String {
        let mut imports = ImportRegistry::new();
        code.collect_imports(&mut imports);
        code.render_to_string(Indent::JAVA, &imports)
    }

    #[test]
    fn test_write_text_splits_lines() {
        let mut out = SourceWriter::java();
        write_text(&mut out, "a();\r\nb();\nc");
        assert_eq!(out.build(), "a();\nb();\nc");
    }

    #[test]
    fn test_inline_text_concatenates() {
        let mut code = CodeModel::new();
        code.text("return ").text("null").line(";");
        assert_eq!(render(&code), "return null;\n");
    }

    #[test]
    fn test_nested_blocks() {
        let mut code = CodeModel::new();
        code.block("try", |b| {
            b.block("if (x)", |b| {
                b.line("run();");
            });
        })
        .block("finally", |b| {
            b.line("close();");
        });

        assert_eq!(
            render(&code),
            "try {\n    if (x) {\n        run();\n    }\n}\nfinally {\n    close();\n}\n"
        );
    }

    #[test]
    fn test_type_fragments_are_registered() {
        let mut code = CodeModel::new();
        code.text("new ")
            .type_ref(TypeRef::class("java.util.ArrayList"))
            .line("<>();")
            .indented(|b| {
                b.type_ref(TypeRef::class("a.Foo")).line(".run();");
            });

        let mut imports = ImportRegistry::new();
        imports.register(&TypeRef::class("b.Foo"));
        code.collect_imports(&mut imports);

        assert_eq!(
            code.render_to_string(Indent::JAVA, &imports),
            "new ArrayList<>();\n    a.Foo.run();\n"
        );
    }

    #[test]
    fn test_empty() {
        assert!(CodeModel::new().is_empty());
        assert_eq!(render(&CodeModel::new()), "");
    }
}
