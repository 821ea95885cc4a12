//! Javadoc comments with type and member cross-references.

use super::{ClassName, CodeWriter, DocCommentWriter, MethodModel, Renderable, TypeRef, code::write_text};
use crate::generation::ImportRegistry;

/// A reference to a method, as used by `{@link Owner#name(Args)}`.
///
/// The argument types are captured, erased, from the target method when the
/// reference is created, so the link always matches the declared signature.
#[derive(Debug, Clone, PartialEq)]
pub struct MemberRef {
    owner: ClassName,
    name: String,
    arg_types: Vec<TypeRef>,
}

impl MemberRef {
    /// Reference `method` declared by the class `owner`.
    pub fn new(owner: &ClassName, method: &MethodModel) -> Self {
        Self {
            owner: owner.clone(),
            name: method.name().to_string(),
            arg_types: method
                .arguments()
                .iter()
                .map(|arg| arg.ty().erasure())
                .collect(),
        }
    }

    /// The class declaring the method.
    pub fn owner(&self) -> &ClassName {
        &self.owner
    }

    /// The method name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Erased argument types in declaration order.
    pub fn arg_types(&self) -> &[TypeRef] {
        &self.arg_types
    }

    fn render(&self, imports: &ImportRegistry) -> String {
        let args: Vec<String> = self.arg_types.iter().map(|ty| ty.render(imports)).collect();
        format!(
            "{}#{}({})",
            self.owner.render(imports),
            self.name,
            args.join(", ")
        )
    }
}

/// A piece of documentation text.
#[derive(Debug, Clone, PartialEq)]
pub enum DocFragment {
    /// Literal text; a trailing `\n` ends the line.
    Text(String),
    /// `{@link Type}`.
    TypeLink(TypeRef),
    /// `{@link Owner#method(Args)}`.
    MemberLink(MemberRef),
}

/// A Javadoc comment built from text and cross-reference fragments.
///
/// An empty comment renders nothing at all.
///
/// # Example
///
/// ```
/// use jwrap_codegen::builder::{DocComment, Indent, Renderable, TypeRef};
/// use jwrap_codegen::generation::ImportRegistry;
///
/// let mut doc = DocComment::new();
/// doc.text("Wraps a ")
///     .link(TypeRef::class("java.sql.Statement"))
///     .text(".\n");
///
/// let mut imports = ImportRegistry::new();
/// doc.collect_imports(&mut imports);
///
/// assert_eq!(
///     doc.render_to_string(Indent::JAVA, &imports),
///     "/**\n * Wraps a {@link Statement}.\n */\n"
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocComment {
    fragments: Vec<DocFragment>,
}

impl DocComment {
    /// Create an empty comment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append literal text.
    pub fn text(&mut self, text: impl Into<String>) -> &mut Self {
        self.fragments.push(DocFragment::Text(text.into()));
        self
    }

    /// Append a link to a type.
    pub fn link(&mut self, ty: TypeRef) -> &mut Self {
        self.fragments.push(DocFragment::TypeLink(ty));
        self
    }

    /// Append a link to a method of `owner`.
    pub fn member_link(&mut self, owner: &ClassName, method: &MethodModel) -> &mut Self {
        self.fragments
            .push(DocFragment::MemberLink(MemberRef::new(owner, method)));
        self
    }

    /// Append a raw fragment.
    pub fn push(&mut self, fragment: DocFragment) -> &mut Self {
        self.fragments.push(fragment);
        self
    }

    /// The fragments in order.
    pub fn fragments(&self) -> &[DocFragment] {
        &self.fragments
    }

    /// Check if the comment has no fragments.
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }
}

impl Renderable for DocComment {
    fn collect_imports(&self, imports: &mut ImportRegistry) {
        for fragment in &self.fragments {
            match fragment {
                DocFragment::Text(_) => {}
                DocFragment::TypeLink(ty) => imports.register(ty),
                DocFragment::MemberLink(member) => {
                    imports.claim(member.owner());
                    for ty in member.arg_types() {
                        imports.register(ty);
                    }
                }
            }
        }
    }

    fn render(&self, out: &mut dyn CodeWriter, imports: &ImportRegistry) {
        if self.fragments.is_empty() {
            return;
        }
        let mut doc = DocCommentWriter::open(out);
        for fragment in &self.fragments {
            match fragment {
                DocFragment::Text(text) => write_text(&mut doc, text),
                DocFragment::TypeLink(ty) => {
                    doc.write(&format!("{{@link {}}}", ty.render(imports)));
                }
                DocFragment::MemberLink(member) => {
                    doc.write(&format!("{{@link {}}}", member.render(imports)));
                }
            }
        }
        doc.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::Indent;

    fn render(doc: &DocComment, imports: &mut ImportRegistry) -> String {
        doc.collect_imports(imports);
        doc.render_to_string(Indent::JAVA, imports)
    }

    #[test]
    fn test_empty_comment_renders_nothing() {
        let doc = DocComment::new();
        assert_eq!(render(&doc, &mut ImportRegistry::new()), "");
    }

    #[test]
    fn test_text_line_breaks() {
        let mut doc = DocComment::new();
        doc.text("First ").text("line.\n").text("Second line.\n");

        assert_eq!(
            render(&doc, &mut ImportRegistry::new()),
            "/**\n * First line.\n * Second line.\n */\n"
        );
    }

    #[test]
    fn test_member_link_uses_erased_argument_types() {
        let owner = ClassName::parse("java.sql.PreparedStatement");
        let method = MethodModel::new("setObject")
            .arg("index", TypeRef::int())
            .arg(
                "values",
                TypeRef::parameterized(
                    ClassName::parse("java.util.List"),
                    vec![TypeRef::object()],
                ),
            );

        let mut doc = DocComment::new();
        doc.text("See ").member_link(&owner, &method).text(".");

        assert_eq!(
            render(&doc, &mut ImportRegistry::new()),
            "/**\n * See {@link PreparedStatement#setObject(int, List)}.\n */\n"
        );
    }

    #[test]
    fn test_links_follow_import_decisions() {
        let mut imports = ImportRegistry::new();
        imports.register(&TypeRef::class("java.util.Date"));

        let mut doc = DocComment::new();
        doc.link(TypeRef::class("java.sql.Date"))
            .text(" and ")
            .link(TypeRef::class("java.util.Date"));

        assert_eq!(
            render(&doc, &mut imports),
            "/**\n * {@link java.sql.Date} and {@link Date}\n */\n"
        );
    }

    #[test]
    fn test_member_ref_snapshot() {
        let owner = ClassName::parse("com.example.Dao");
        let method = MethodModel::new("find").unnamed_arg(TypeRef::long());
        let member = MemberRef::new(&owner, &method);

        assert_eq!(member.owner(), &owner);
        assert_eq!(member.name(), "find");
        assert_eq!(member.arg_types(), &[TypeRef::long()]);
    }
}
