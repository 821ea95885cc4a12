//! Line-oriented text sinks with composable indentation.

use super::Indent;

/// A text sink offering line-based write operations.
///
/// Writers are layered: an [`IndentWriter`] wraps a parent writer and adds
/// one indent unit in front of every line it forwards. Wrapping an indented
/// writer again adds exactly one more unit.
pub trait CodeWriter {
    /// Write text without a trailing line break.
    fn write(&mut self, text: &str);

    /// Write text followed by a line break.
    ///
    /// `write_line("")` still emits the indentation prefix of the writer.
    fn write_line(&mut self, text: &str);

    /// Write an empty separator line with no indentation prefix.
    fn blank_line(&mut self) {
        self.write_line("");
    }

    /// The indentation unit shared by the whole writer stack.
    fn indent(&self) -> Indent;

    /// Nesting depth of this writer (the root is 0).
    fn depth(&self) -> usize;
}

/// Root writer collecting generated code into a string buffer.
///
/// # Example
///
/// ```
/// use jwrap_codegen::builder::{CodeWriter, Indent, IndentWriter, SourceWriter};
///
/// let mut out = SourceWriter::new(Indent::Spaces(2));
/// out.write_line("class Foo {");
/// {
///     let mut body = IndentWriter::new(&mut out);
///     body.write_line("int x;");
/// }
/// out.write_line("}");
///
/// assert_eq!(out.build(), "class Foo {\n  int x;\n}\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct SourceWriter {
    indent: Indent,
    buffer: String,
}

impl SourceWriter {
    /// Create a new writer with the specified indentation unit.
    pub fn new(indent: Indent) -> Self {
        Self {
            indent,
            buffer: String::new(),
        }
    }

    /// Create a new writer with 4-space indentation.
    pub fn java() -> Self {
        Self::new(Indent::JAVA)
    }

    /// Get a reference to the current buffer content.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Consume the writer and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }
}

impl CodeWriter for SourceWriter {
    fn write(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    fn write_line(&mut self, text: &str) {
        self.buffer.push_str(text);
        self.buffer.push('\n');
    }

    fn blank_line(&mut self) {
        self.buffer.push('\n');
    }

    fn indent(&self) -> Indent {
        self.indent
    }

    fn depth(&self) -> usize {
        0
    }
}

/// Writer decorator that indents every line by one unit.
///
/// Borrows its parent for its whole lifetime; drop it to continue writing
/// at the parent's depth.
pub struct IndentWriter<'a> {
    parent: &'a mut dyn CodeWriter,
    unit: String,
    at_line_start: bool,
}

impl<'a> IndentWriter<'a> {
    /// Wrap a parent writer one level deeper.
    pub fn new(parent: &'a mut dyn CodeWriter) -> Self {
        let unit = parent.indent().unit();
        Self {
            parent,
            unit,
            at_line_start: true,
        }
    }

    fn prefix(&mut self) {
        if self.at_line_start {
            self.parent.write(&self.unit);
            self.at_line_start = false;
        }
    }
}

impl CodeWriter for IndentWriter<'_> {
    fn write(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        self.prefix();
        self.parent.write(text);
    }

    fn write_line(&mut self, text: &str) {
        self.prefix();
        self.parent.write_line(text);
        self.at_line_start = true;
    }

    fn blank_line(&mut self) {
        if self.at_line_start {
            self.parent.blank_line();
        } else {
            self.write_line("");
        }
    }

    fn indent(&self) -> Indent {
        self.parent.indent()
    }

    fn depth(&self) -> usize {
        self.parent.depth() + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_and_write_line() {
        let mut out = SourceWriter::java();
        out.write("int ");
        out.write_line("x;");
        assert_eq!(out.build(), "int x;\n");
    }

    #[test]
    fn test_depth_two_with_four_spaces() {
        let mut out = SourceWriter::new(Indent::Spaces(4));
        let mut one = IndentWriter::new(&mut out);
        let mut two = IndentWriter::new(&mut one);
        assert_eq!(two.depth(), 2);
        two.write_line("x();");
        drop(two);
        drop(one);
        assert_eq!(out.build(), "        x();\n");
    }

    #[test]
    fn test_depth_two_with_tabs() {
        let mut out = SourceWriter::new(Indent::Tab);
        {
            let mut one = IndentWriter::new(&mut out);
            let mut two = IndentWriter::new(&mut one);
            two.write_line("x();");
        }
        assert_eq!(out.build(), "\t\tx();\n");
    }

    #[test]
    fn test_inline_writes_share_one_prefix() {
        let mut out = SourceWriter::java();
        {
            let mut inner = IndentWriter::new(&mut out);
            inner.write("return ");
            inner.write("null");
            inner.write_line(";");
            inner.write_line("}");
        }
        assert_eq!(out.build(), "    return null;\n    }\n");
    }

    #[test]
    fn test_empty_write_line_keeps_prefix() {
        let mut out = SourceWriter::new(Indent::Spaces(2));
        {
            let mut inner = IndentWriter::new(&mut out);
            inner.write_line("");
        }
        assert_eq!(out.build(), "  \n");
    }

    #[test]
    fn test_blank_line_has_no_prefix() {
        let mut out = SourceWriter::java();
        {
            let mut one = IndentWriter::new(&mut out);
            let mut two = IndentWriter::new(&mut one);
            two.write_line("a();");
            two.blank_line();
            two.write_line("b();");
        }
        assert_eq!(out.build(), "        a();\n\n        b();\n");
    }

    #[test]
    fn test_unwrapping_restores_depth() {
        let mut out = SourceWriter::java();
        out.write_line("{");
        {
            let mut inner = IndentWriter::new(&mut out);
            inner.write_line("a();");
        }
        out.write_line("}");
        assert_eq!(out.depth(), 0);
        assert_eq!(out.build(), "{\n    a();\n}\n");
    }
}
