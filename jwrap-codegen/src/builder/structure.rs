//! Class-level aggregates: fields and classes.

use super::{
    ClassName, CodeModel, CodeWriter, DocComment, IndentWriter, MethodModel, Renderable,
    TypeRef, Visibility,
};
use crate::generation::ImportRegistry;

/// A field declaration.
///
/// Fields default to `private`.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldModel {
    /// Field name.
    pub name: String,
    /// Field type.
    pub ty: TypeRef,
    /// Visibility modifier.
    pub visibility: Visibility,
    /// Whether the field is `static`.
    pub is_static: bool,
    /// Whether the field is `final`.
    pub is_final: bool,
    /// Initializer expression, without the trailing `;`.
    pub init: Option<CodeModel>,
    /// Documentation comment.
    pub doc: DocComment,
}

impl FieldModel {
    /// Create a new private field.
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
            visibility: Visibility::Private,
            is_static: false,
            is_final: false,
            init: None,
            doc: DocComment::new(),
        }
    }

    /// Set visibility.
    pub fn visibility(mut self, vis: Visibility) -> Self {
        self.visibility = vis;
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

    /// Set the initializer expression.
    pub fn init(mut self, init: CodeModel) -> Self {
        self.init = Some(init);
        self
    }

    /// Set documentation comment.
    pub fn doc(mut self, doc: DocComment) -> Self {
        self.doc = doc;
        self
    }
}

impl Renderable for FieldModel {
    fn collect_imports(&self, imports: &mut ImportRegistry) {
        imports.register(&self.ty);
        if let Some(init) = &self.init {
            init.collect_imports(imports);
        }
        self.doc.collect_imports(imports);
    }

    fn render(&self, out: &mut dyn CodeWriter, imports: &ImportRegistry) {
        self.doc.render(out, imports);

        let mut decl = String::new();
        self.visibility.push_to(&mut decl);
        if self.is_static {
            decl.push_str("static ");
        }
        if self.is_final {
            decl.push_str("final ");
        }
        decl.push_str(&self.ty.render(imports));
        decl.push(' ');
        decl.push_str(&self.name);

        match &self.init {
            Some(init) => {
                decl.push_str(" = ");
                out.write(&decl);
                init.render(out, imports);
                out.write_line(";");
            }
            None => {
                decl.push(';');
                out.write_line(&decl);
            }
        }
    }
}

/// The kind of type declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClassKind {
    #[default]
    Class,
    Interface,
}

impl ClassKind {
    /// The declaration keyword.
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::Interface => "interface",
        }
    }
}

/// A top-level class or interface.
///
/// # Example
///
/// ```
/// use jwrap_codegen::builder::{ClassModel, FieldModel, Indent, MethodModel, Renderable, TypeRef};
/// use jwrap_codegen::generation::ImportRegistry;
///
/// let class = ClassModel::new("com.example.Holder")
///     .field(FieldModel::new("value", TypeRef::string()).final_())
///     .method(MethodModel::new("get").returns(TypeRef::string()).line("return value;"));
///
/// let mut imports = ImportRegistry::for_package("com.example");
/// class.collect_imports(&mut imports);
///
/// assert_eq!(
///     class.render_to_string(Indent::Spaces(2), &imports),
///     "public class Holder {\n  private final String value;\n\n  public String get() {\n    return value;\n  }\n}\n"
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ClassModel {
    /// Fully qualified class name.
    pub name: ClassName,
    /// Class or interface.
    pub kind: ClassKind,
    /// Visibility modifier.
    pub visibility: Visibility,
    /// Whether the class is `final`.
    pub is_final: bool,
    /// Whether the class is `abstract`.
    pub is_abstract: bool,
    /// Superclass (`extends`).
    pub superclass: Option<TypeRef>,
    /// Implemented interfaces, or extended interfaces for an interface.
    pub interfaces: Vec<TypeRef>,
    /// Annotations on the class.
    pub annotations: Vec<ClassName>,
    /// Documentation comment.
    pub doc: DocComment,
    /// Fields in declaration order.
    pub fields: Vec<FieldModel>,
    /// Constructors and methods in declaration order.
    pub methods: Vec<MethodModel>,
}

impl ClassModel {
    /// Create a new public class from its fully qualified name.
    pub fn new(qualified: &str) -> Self {
        Self::from_name(ClassName::parse(qualified))
    }

    /// Create a new public class.
    pub fn from_name(name: ClassName) -> Self {
        Self {
            name,
            kind: ClassKind::Class,
            visibility: Visibility::Public,
            is_final: false,
            is_abstract: false,
            superclass: None,
            interfaces: Vec::new(),
            annotations: Vec::new(),
            doc: DocComment::new(),
            fields: Vec::new(),
            methods: Vec::new(),
        }
    }

    /// Declare as an interface.
    pub fn interface(mut self) -> Self {
        self.kind = ClassKind::Interface;
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

    /// Set the superclass.
    pub fn extends(mut self, ty: TypeRef) -> Self {
        self.superclass = Some(ty);
        self
    }

    /// Add an implemented interface.
    pub fn implements(mut self, ty: TypeRef) -> Self {
        self.interfaces.push(ty);
        self
    }

    /// Add an annotation.
    pub fn annotated(mut self, annotation: ClassName) -> Self {
        self.annotations.push(annotation);
        self
    }

    /// Set documentation comment.
    pub fn doc(mut self, doc: DocComment) -> Self {
        self.doc = doc;
        self
    }

    /// Add a field.
    pub fn field(mut self, field: FieldModel) -> Self {
        self.fields.push(field);
        self
    }

    /// Add a method or constructor.
    pub fn method(mut self, method: MethodModel) -> Self {
        self.methods.push(method);
        self
    }

    fn header(&self, imports: &ImportRegistry) -> String {
        let mut header = String::new();
        self.visibility.push_to(&mut header);
        if self.is_abstract {
            header.push_str("abstract ");
        }
        if self.is_final {
            header.push_str("final ");
        }
        header.push_str(self.kind.keyword());
        header.push(' ');
        header.push_str(self.name.simple_name());

        if let Some(superclass) = &self.superclass {
            header.push_str(" extends ");
            header.push_str(&superclass.render(imports));
        }
        if !self.interfaces.is_empty() {
            header.push_str(match self.kind {
                ClassKind::Class => " implements ",
                ClassKind::Interface => " extends ",
            });
            let names: Vec<String> = self.interfaces.iter().map(|i| i.render(imports)).collect();
            header.push_str(&names.join(", "));
        }
        header
    }
}

impl Renderable for ClassModel {
    fn collect_imports(&self, imports: &mut ImportRegistry) {
        if let Some(superclass) = &self.superclass {
            imports.register(superclass);
        }
        for interface in &self.interfaces {
            imports.register(interface);
        }
        for annotation in &self.annotations {
            imports.claim(annotation);
        }
        self.doc.collect_imports(imports);
        for field in &self.fields {
            field.collect_imports(imports);
        }
        for method in &self.methods {
            method.collect_imports(imports);
        }
    }

    fn render(&self, out: &mut dyn CodeWriter, imports: &ImportRegistry) {
        self.doc.render(out, imports);
        for annotation in &self.annotations {
            out.write_line(&format!("@{}", annotation.render(imports)));
        }
        out.write(&self.header(imports));
        out.write_line(" {");
        {
            let mut body = IndentWriter::new(&mut *out);
            for field in &self.fields {
                field.render(&mut body, imports);
            }
            for (i, method) in self.methods.iter().enumerate() {
                if i > 0 || !self.fields.is_empty() {
                    body.blank_line();
                }
                method.render(&mut body, imports);
            }
        }
        out.write_line("}");
    }
}
