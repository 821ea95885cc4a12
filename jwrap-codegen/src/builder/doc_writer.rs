//! Writer decorator producing Javadoc comment blocks.

use super::{CodeWriter, Indent};

/// Writes a `/** ... */` block around everything written through it.
///
/// Opening the writer emits `/**`; every line is prefixed with ` * `; calling
/// [`close`](Self::close) finishes a pending line and emits ` */`.
/// A `*/` in the text is written as `*&#47;` so it cannot end the block.
///
/// # Example
///
/// ```
/// use jwrap_codegen::builder::{CodeWriter, DocCommentWriter, SourceWriter};
///
/// let mut out = SourceWriter::java();
/// let mut doc = DocCommentWriter::open(&mut out);
/// doc.write("Returns the ");
/// doc.write_line("value.");
/// doc.close();
///
/// assert_eq!(out.build(), "/**\n * Returns the value.\n */\n");
/// ```
pub struct DocCommentWriter<'a> {
    parent: &'a mut dyn CodeWriter,
    at_line_start: bool,
    /// The last character written on the current line was `*`
    after_star: bool,
}

impl<'a> DocCommentWriter<'a> {
    /// Start a comment block on the parent writer.
    pub fn open(parent: &'a mut dyn CodeWriter) -> Self {
        parent.write_line("/**");
        Self {
            parent,
            at_line_start: true,
            after_star: false,
        }
    }

    fn escape(&mut self, text: &str) -> String {
        let mut escaped = text.replace("*/", "*&#47;");
        if self.after_star && escaped.starts_with('/') {
            escaped.replace_range(..1, "&#47;");
        }
        self.after_star = escaped.ends_with('*');
        escaped
    }

    /// Finish the comment block.
    pub fn close(self) {
        if !self.at_line_start {
            self.parent.write_line("");
        }
        self.parent.write_line(" */");
    }
}

impl CodeWriter for DocCommentWriter<'_> {
    fn write(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if self.at_line_start {
            self.parent.write(" * ");
            self.at_line_start = false;
        }
        let text = self.escape(text);
        self.parent.write(&text);
    }

    fn write_line(&mut self, text: &str) {
        if self.at_line_start {
            if text.is_empty() {
                self.parent.write_line(" *");
                return;
            }
            self.parent.write(" * ");
        }
        let text = self.escape(text);
        self.parent.write_line(&text);
        self.at_line_start = true;
        self.after_star = false;
    }

    fn indent(&self) -> Indent {
        self.parent.indent()
    }

    fn depth(&self) -> usize {
        self.parent.depth()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{IndentWriter, SourceWriter};

    #[test]
    fn test_blank_doc_line() {
        let mut out = SourceWriter::java();
        let mut doc = DocCommentWriter::open(&mut out);
        doc.write_line("Summary.");
        doc.blank_line();
        doc.write_line("Details.");
        doc.close();

        assert_eq!(out.build(), "/**\n * Summary.\n *\n * Details.\n */\n");
    }

    #[test]
    fn test_close_finishes_pending_line() {
        let mut out = SourceWriter::java();
        let mut doc = DocCommentWriter::open(&mut out);
        doc.write("no terminator");
        doc.close();

        assert_eq!(out.build(), "/**\n * no terminator\n */\n");
    }

    #[test]
    fn test_comment_terminator_in_text_is_escaped() {
        let mut out = SourceWriter::java();
        let mut doc = DocCommentWriter::open(&mut out);
        doc.write_line("Matches /*.java */ globs.");
        doc.write("ends with *");
        doc.write("/ split");
        doc.close();

        assert_eq!(
            out.build(),
            "/**\n * Matches /*.java *&#47; globs.\n * ends with *&#47; split\n */\n"
        );
    }

    #[test]
    fn test_inside_indented_writer() {
        let mut out = SourceWriter::new(crate::builder::Indent::Spaces(2));
        {
            let mut member = IndentWriter::new(&mut out);
            let mut doc = DocCommentWriter::open(&mut member);
            doc.write_line("Field.");
            doc.close();
            member.write_line("int x;");
        }

        assert_eq!(out.build(), "  /**\n   * Field.\n   */\n  int x;\n");
    }
}
