//! Method and constructor definitions.

use super::{
    ClassName, CodeModel, CodeWriter, DocComment, IndentWriter, Renderable, TypeRef,
};
use crate::generation::ImportRegistry;

/// Access level for classes and members.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    /// `public`
    #[default]
    Public,
    /// `protected`
    Protected,
    /// No modifier (package-private).
    Package,
    /// `private`
    Private,
}

impl Visibility {
    /// The modifier keyword, or `None` for package-private.
    pub fn keyword(&self) -> Option<&'static str> {
        match self {
            Self::Public => Some("public"),
            Self::Protected => Some("protected"),
            Self::Package => None,
            Self::Private => Some("private"),
        }
    }

    /// Push the keyword and a trailing space, if any.
    pub(crate) fn push_to(&self, out: &mut String) {
        if let Some(keyword) = self.keyword() {
            out.push_str(keyword);
            out.push(' ');
        }
    }
}

/// A method argument.
#[derive(Debug, Clone, PartialEq)]
pub struct Argument {
    name: String,
    ty: TypeRef,
}

impl Argument {
    /// Create a new argument.
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }

    /// The argument name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The argument type.
    pub fn ty(&self) -> &TypeRef {
        &self.ty
    }
}

/// A method or constructor of a generated class.
///
/// Argument names must be unique within one method; this is not checked here.
///
/// # Example
///
/// ```
/// use jwrap_codegen::builder::{Indent, MethodModel, Renderable, TypeRef};
/// use jwrap_codegen::generation::ImportRegistry;
///
/// let method = MethodModel::new("close")
///     .throws(TypeRef::class("java.sql.SQLException"))
///     .line("target.close();");
///
/// let mut imports = ImportRegistry::new();
/// method.collect_imports(&mut imports);
///
/// assert_eq!(
///     method.render_to_string(Indent::JAVA, &imports),
///     "public void close() throws SQLException {\n    target.close();\n}\n"
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct MethodModel {
    name: String,
    return_type: Option<TypeRef>,
    arguments: Vec<Argument>,
    exceptions: Vec<TypeRef>,
    body: CodeModel,
    visibility: Visibility,
    is_static: bool,
    is_final: bool,
    is_abstract: bool,
    is_default: bool,
    is_constructor: bool,
    annotations: Vec<ClassName>,
    doc: DocComment,
}

impl MethodModel {
    /// Create a new public method returning nothing.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            return_type: None,
            arguments: Vec::new(),
            exceptions: Vec::new(),
            body: CodeModel::new(),
            visibility: Visibility::Public,
            is_static: false,
            is_final: false,
            is_abstract: false,
            is_default: false,
            is_constructor: false,
            annotations: Vec::new(),
            doc: DocComment::new(),
        }
    }

    /// Create a public constructor for the class with the given simple name.
    pub fn constructor(class_name: impl Into<String>) -> Self {
        Self {
            is_constructor: true,
            ..Self::new(class_name)
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// The return type; `None` means `void`.
    pub fn return_type(&self) -> Option<&TypeRef> {
        self.return_type.as_ref()
    }

    pub fn set_return_type(&mut self, ty: Option<TypeRef>) {
        self.return_type = ty;
    }

    pub fn arguments(&self) -> &[Argument] {
        &self.arguments
    }

    /// Append an argument and return it.
    pub fn add_argument(&mut self, name: impl Into<String>, ty: TypeRef) -> &Argument {
        self.arguments.push(Argument::new(name, ty));
        &self.arguments[self.arguments.len() - 1]
    }

    /// Append an argument named `argN`, where N is its zero-based position.
    pub fn add_unnamed_argument(&mut self, ty: TypeRef) -> &Argument {
        let name = format!("arg{}", self.arguments.len());
        self.add_argument(name, ty)
    }

    /// Thrown types in declaration order.
    pub fn exceptions(&self) -> &[TypeRef] {
        &self.exceptions
    }

    pub fn add_exception(&mut self, ty: TypeRef) {
        self.exceptions.push(ty);
    }

    pub fn body(&self) -> &CodeModel {
        &self.body
    }

    /// The body, for appending code.
    pub fn body_mut(&mut self) -> &mut CodeModel {
        &mut self.body
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn set_visibility(&mut self, visibility: Visibility) {
        self.visibility = visibility;
    }

    /// Abstract methods render as a declaration without a body.
    pub fn is_abstract(&self) -> bool {
        self.is_abstract
    }

    /// Interface method with a body.
    pub fn is_default(&self) -> bool {
        self.is_default
    }

    pub fn is_constructor(&self) -> bool {
        self.is_constructor
    }

    pub fn annotations(&self) -> &[ClassName] {
        &self.annotations
    }

    pub fn add_annotation(&mut self, annotation: ClassName) {
        self.annotations.push(annotation);
    }

    pub fn doc(&self) -> &DocComment {
        &self.doc
    }

    pub fn doc_mut(&mut self) -> &mut DocComment {
        &mut self.doc
    }

    // =========================================================================
    // Consuming builders
    // =========================================================================

    /// Set the return type.
    pub fn returns(mut self, ty: TypeRef) -> Self {
        self.return_type = Some(ty);
        self
    }

    /// Add a named argument.
    pub fn arg(mut self, name: impl Into<String>, ty: TypeRef) -> Self {
        self.add_argument(name, ty);
        self
    }

    /// Add an automatically named argument.
    pub fn unnamed_arg(mut self, ty: TypeRef) -> Self {
        self.add_unnamed_argument(ty);
        self
    }

    /// Add a thrown type.
    pub fn throws(mut self, ty: TypeRef) -> Self {
        self.exceptions.push(ty);
        self
    }

    /// Add a body line.
    pub fn line(mut self, text: impl Into<String>) -> Self {
        self.body.line(text);
        self
    }

    /// Set the body.
    pub fn with_body(mut self, body: CodeModel) -> Self {
        self.body = body;
        self
    }

    /// Set visibility.
    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    /// Mark as `static`.
    pub fn static_(mut self) -> Self {
        self.is_static = true;
        self
    }

    /// Mark as `final`.
    pub fn final_(mut self) -> Self {
        self.is_final = true;
        self
    }

    /// Mark as `abstract`.
    pub fn abstract_(mut self) -> Self {
        self.is_abstract = true;
        self
    }

    /// Mark as an interface `default` method.
    pub fn default_(mut self) -> Self {
        self.is_default = true;
        self
    }

    /// Add an annotation (e.g., `java.lang.Override`).
    pub fn annotated(mut self, annotation: ClassName) -> Self {
        self.annotations.push(annotation);
        self
    }

    /// Set the documentation comment.
    pub fn with_doc(mut self, doc: DocComment) -> Self {
        self.doc = doc;
        self
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// The declaration up to, not including, the body.
    ///
    /// `public String get(int id) throws SQLException`
    pub fn signature(&self, imports: &ImportRegistry) -> String {
        let mut sig = String::new();
        self.visibility.push_to(&mut sig);
        if self.is_default {
            sig.push_str("default ");
        }
        if self.is_abstract {
            sig.push_str("abstract ");
        }
        if self.is_static {
            sig.push_str("static ");
        }
        if self.is_final {
            sig.push_str("final ");
        }
        if !self.is_constructor {
            match &self.return_type {
                Some(ty) => sig.push_str(&ty.render(imports)),
                None => sig.push_str("void"),
            }
            sig.push(' ');
        }
        sig.push_str(&self.name);
        sig.push('(');
        for (i, arg) in self.arguments.iter().enumerate() {
            if i > 0 {
                sig.push_str(", ");
            }
            sig.push_str(&arg.ty.render(imports));
            sig.push(' ');
            sig.push_str(&arg.name);
        }
        sig.push(')');
        if !self.exceptions.is_empty() {
            sig.push_str(" throws ");
            let thrown: Vec<String> = self.exceptions.iter().map(|e| e.render(imports)).collect();
            sig.push_str(&thrown.join(", "));
        }
        sig
    }
}

impl Renderable for MethodModel {
    /// Registers the return type, arguments, thrown types, body, annotations
    /// and documentation links, in that order.
    fn collect_imports(&self, imports: &mut ImportRegistry) {
        if let Some(ty) = &self.return_type {
            imports.register(ty);
        }
        for arg in &self.arguments {
            imports.register(&arg.ty);
        }
        for exception in &self.exceptions {
            imports.register(exception);
        }
        self.body.collect_imports(imports);
        for annotation in &self.annotations {
            imports.claim(annotation);
        }
        self.doc.collect_imports(imports);
    }

    fn render(&self, out: &mut dyn CodeWriter, imports: &ImportRegistry) {
        self.doc.render(out, imports);
        for annotation in &self.annotations {
            out.write_line(&format!("@{}", annotation.render(imports)));
        }
        out.write(&self.signature(imports));
        if self.is_abstract {
            out.write_line(";");
            return;
        }
        out.write_line(" {");
        {
            let mut body = IndentWriter::new(&mut *out);
            self.body.render(&mut body, imports);
        }
        out.write_line("}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{Indent, IndentWriter, SourceWriter};

    fn render(method: &MethodModel) -> String {
        let mut imports = ImportRegistry::new();
        method.collect_imports(&mut imports);
        method.render_to_string(Indent::JAVA, &imports)
    }

    #[test]
    fn test_end_to_end_get() {
        let mut method = MethodModel::new("get");
        method.set_return_type(Some(TypeRef::named("java.lang", "String")));
        method.add_argument("id", TypeRef::named("", "int"));
        method.add_exception(TypeRef::named("java.sql", "SQLException"));
        method.body_mut().text("return null;\n");

        assert_eq!(
            render(&method),
            "public String get(int id) throws SQLException {\n    return null;\n}\n"
        );
    }

    #[test]
    fn test_auto_named_arguments() {
        let method = MethodModel::new("call")
            .unnamed_arg(TypeRef::class("a.T0"))
            .unnamed_arg(TypeRef::class("a.T1"));

        assert_eq!(method.arguments()[0].name(), "arg0");
        assert_eq!(method.arguments()[1].name(), "arg1");
        assert!(render(&method).starts_with("public void call(T0 arg0, T1 arg1) {"));
    }

    #[test]
    fn test_auto_name_uses_position_after_named_arguments() {
        let mut method = MethodModel::new("set");
        method.add_argument("index", TypeRef::int());
        let arg = method.add_unnamed_argument(TypeRef::string());
        assert_eq!(arg.name(), "arg1");
    }

    #[test]
    fn test_no_return_renders_void() {
        let method = MethodModel::new("run");
        assert_eq!(render(&method), "public void run() {\n}\n");
    }

    #[test]
    fn test_exception_order_preserved_without_dedup() {
        let method = MethodModel::new("exec")
            .throws(TypeRef::class("x.E2"))
            .throws(TypeRef::class("x.E1"))
            .throws(TypeRef::class("x.E2"));

        let imports = ImportRegistry::new();
        assert_eq!(
            method.signature(&imports),
            "public void exec() throws x.E2, x.E1, x.E2"
        );
    }

    #[test]
    fn test_return_type_claims_before_arguments() {
        let method = MethodModel::new("convert")
            .returns(TypeRef::class("java.util.Date"))
            .arg("value", TypeRef::class("java.sql.Date"));

        assert!(render(&method).starts_with("public Date convert(java.sql.Date value) {"));
    }

    #[test]
    fn test_constructor_and_modifiers() {
        let ctor = MethodModel::constructor("Wrapper")
            .arg("target", TypeRef::class("java.sql.Connection"))
            .line("this.target = target;");
        assert_eq!(
            render(&ctor),
            "public Wrapper(Connection target) {\n    this.target = target;\n}\n"
        );

        let helper = MethodModel::new("unwrap")
            .with_visibility(Visibility::Private)
            .static_()
            .final_()
            .returns(TypeRef::object());
        assert!(render(&helper).starts_with("private static final Object unwrap() {"));

        let package_private = MethodModel::new("reset").with_visibility(Visibility::Package);
        assert!(render(&package_private).starts_with("void reset() {"));
    }

    #[test]
    fn test_default_method() {
        let method = MethodModel::new("ping")
            .default_()
            .returns(TypeRef::int())
            .line("return 1;");
        assert!(method.is_default());
        assert_eq!(render(&method), "public default int ping() {\n    return 1;\n}\n");
    }

    #[test]
    fn test_abstract_method_has_no_body() {
        let method = MethodModel::new("size").abstract_().returns(TypeRef::int());
        assert_eq!(render(&method), "public abstract int size();\n");
    }

    #[test]
    fn test_annotations_and_doc() {
        let mut doc = DocComment::new();
        doc.text("Delegates.\n");
        let method = MethodModel::new("toString")
            .returns(TypeRef::string())
            .annotated(ClassName::parse("java.lang.Override"))
            .with_doc(doc)
            .line("return target.toString();");

        assert_eq!(
            render(&method),
            "/**\n * Delegates.\n */\n@Override\npublic String toString() {\n    return target.toString();\n}\n"
        );
    }

    #[test]
    fn test_render_nested_inside_class_body() {
        let method = MethodModel::new("run").line("go();");
        let imports = ImportRegistry::new();

        let mut out = SourceWriter::new(Indent::Tab);
        {
            let mut class_body = IndentWriter::new(&mut out);
            method.render(&mut class_body, &imports);
        }

        assert_eq!(out.build(), "\tpublic void run() {\n\t\tgo();\n\t}\n");
    }

    #[test]
    fn test_deterministic_rendering() {
        let build = || {
            MethodModel::new("query")
                .returns(TypeRef::class("java.sql.ResultSet"))
                .arg("sql", TypeRef::string())
                .arg("params", TypeRef::array(TypeRef::object()))
                .throws(TypeRef::class("java.sql.SQLException"))
                .line("return target.executeQuery(sql);")
        };

        let render_with_imports = |method: &MethodModel| {
            let mut imports = ImportRegistry::new();
            method.collect_imports(&mut imports);
            let lines: Vec<String> = imports.import_lines().map(|l| l.to_string()).collect();
            (lines, method.render_to_string(Indent::JAVA, &imports))
        };

        assert_eq!(render_with_imports(&build()), render_with_imports(&build()));
    }
}
