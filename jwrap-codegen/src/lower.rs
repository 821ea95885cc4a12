//! Lowering from a parsed `jwrap.toml` into the Java code model.
//!
//! Lowering runs in two passes. The first builds every class with its
//! fields, constructors and methods; the second builds documentation, so
//! that member links can snapshot the already lowered method signatures of
//! any class in the manifest.

use eyre::{Result, WrapErr, bail, eyre};
use jwrap_manifest::{
    ArgSpec, BodyLine, ClassSpec, ConstructorSpec, DocPart, FieldSpec, IndentConfig, LinePart,
    LineSpec, Manifest, MethodSpec, TypeSpec, VisibilitySpec,
};
use tracing::debug;

use crate::{
    builder::{
        ClassModel, ClassName, CodeFragment, CodeModel, DocComment, FieldModel, Indent,
        MethodModel, PrimitiveType, TypeRef, Visibility,
    },
    generation::JavaFile,
};

/// The result of lowering a manifest.
#[derive(Debug, Clone)]
pub struct Lowered {
    /// Indentation unit for rendering.
    pub indent: Indent,
    /// One compilation unit per declared class, in manifest order.
    pub files: Vec<JavaFile>,
}

/// Lower a manifest into compilation units.
///
/// # Example
///
/// ```
/// use jwrap_codegen::lower::lower;
/// use jwrap_manifest::Manifest;
///
/// let manifest: Manifest = r#"
/// [[classes]]
/// name = "com.example.Ping"
///
/// [[classes.methods]]
/// name = "ping"
/// returns = "boolean"
/// body = ["return true;"]
/// "#
/// .parse()
/// .unwrap();
///
/// let lowered = lower(&manifest).unwrap();
/// assert_eq!(
///     lowered.files[0].render(lowered.indent),
///     "package com.example;\n\npublic class Ping {\n    public boolean ping() {\n        return true;\n    }\n}\n"
/// );
/// ```
pub fn lower(manifest: &Manifest) -> Result<Lowered> {
    let mut classes = manifest
        .classes
        .iter()
        .map(|class| lower_class(class).wrap_err_with(|| format!("in class '{}'", class.name)))
        .collect::<Result<Vec<_>>>()?;

    // Member links snapshot the signatures lowered above
    let docs = manifest
        .classes
        .iter()
        .map(|class| {
            ClassDocs::lower(class, manifest, &classes)
                .wrap_err_with(|| format!("in documentation of class '{}'", class.name))
        })
        .collect::<Result<Vec<_>>>()?;
    for (class, docs) in classes.iter_mut().zip(docs) {
        docs.apply(class);
    }

    let header = manifest.generator.header.as_deref();
    let files = classes
        .into_iter()
        .zip(&manifest.classes)
        .map(|(class, spec)| {
            let peers = manifest
                .classes
                .iter()
                .filter(|other| other.package() == spec.package() && other.name != spec.name)
                .map(|other| other.simple_name());
            let file = JavaFile::new(class).with_package_peers(peers);
            match header {
                Some(header) => file.with_header(header),
                None => file,
            }
        })
        .collect();

    Ok(Lowered {
        indent: lower_indent(manifest.generator.indent),
        files,
    })
}

/// Convert the configured indentation.
pub fn lower_indent(indent: IndentConfig) -> Indent {
    match indent {
        IndentConfig::Spaces(width) => Indent::Spaces(width),
        IndentConfig::Tab => Indent::Tab,
    }
}

/// Convert a manifest type into a type reference.
///
/// ```
/// use jwrap_codegen::{builder::TypeRef, lower::lower_type};
/// use jwrap_manifest::TypeSpec;
///
/// let ty = lower_type(&TypeSpec::Name("byte[][]".into())).unwrap();
/// assert_eq!(ty, TypeRef::array(TypeRef::array(TypeRef::primitive(
///     jwrap_codegen::builder::PrimitiveType::Byte
/// ))));
/// ```
pub fn lower_type(spec: &TypeSpec) -> Result<TypeRef> {
    if let Some(reason) = spec.check() {
        bail!("invalid type '{}': {}", spec.raw(), reason);
    }
    Ok(lower_checked_type(spec))
}

fn lower_checked_type(spec: &TypeSpec) -> TypeRef {
    let (base, dimensions) = spec.split_dimensions();

    let mut ty = match PrimitiveType::from_keyword(base) {
        Some(primitive) => TypeRef::primitive(primitive),
        None if spec.args().is_empty() => TypeRef::Named(ClassName::parse(base)),
        None => TypeRef::parameterized(
            ClassName::parse(base),
            spec.args().iter().map(lower_checked_type).collect(),
        ),
    };
    for _ in 0..dimensions {
        ty = TypeRef::array(ty);
    }
    ty
}

fn lower_visibility(visibility: Option<VisibilitySpec>, default: Visibility) -> Visibility {
    match visibility {
        None => default,
        Some(VisibilitySpec::Public) => Visibility::Public,
        Some(VisibilitySpec::Protected) => Visibility::Protected,
        Some(VisibilitySpec::Package) => Visibility::Package,
        Some(VisibilitySpec::Private) => Visibility::Private,
    }
}

fn lower_class(spec: &ClassSpec) -> Result<ClassModel> {
    let mut class = ClassModel::new(&spec.name);
    if spec.interface {
        class = class.interface();
    }
    class.visibility = lower_visibility(spec.visibility, Visibility::Public);
    class.is_final = spec.is_final;
    class.is_abstract = spec.is_abstract;
    class.superclass = spec.extends.as_ref().map(lower_type).transpose()?;
    class.interfaces = spec
        .implements
        .iter()
        .map(lower_type)
        .collect::<Result<_>>()?;
    class.annotations = spec
        .annotations
        .iter()
        .map(|name| ClassName::parse(name))
        .collect();

    for field in &spec.fields {
        class.fields.push(lower_field(field, spec.interface)?);
    }
    for constructor in &spec.constructors {
        class
            .methods
            .push(lower_constructor(spec.simple_name(), constructor)?);
    }
    for method in &spec.methods {
        let method = lower_method(method, spec.interface)
            .wrap_err_with(|| format!("in method '{}'", method.name))?;
        class.methods.push(method);
    }

    debug!(
        class = %spec.name,
        fields = class.fields.len(),
        methods = class.methods.len(),
        "lowered class"
    );
    Ok(class)
}

fn lower_field(spec: &FieldSpec, in_interface: bool) -> Result<FieldModel> {
    // Interface fields are always public constants
    let default = if in_interface {
        Visibility::Public
    } else {
        Visibility::Private
    };
    let mut field = FieldModel::new(&spec.name, lower_type(&spec.ty)?)
        .visibility(lower_visibility(spec.visibility, default));
    field.is_static = spec.is_static;
    field.is_final = spec.is_final;
    if let Some(init) = &spec.init {
        let mut code = CodeModel::new();
        lower_line(init, &mut code)?;
        field = field.init(code);
    }
    Ok(field)
}

fn lower_constructor(class_name: &str, spec: &ConstructorSpec) -> Result<MethodModel> {
    let mut method = MethodModel::constructor(class_name)
        .with_visibility(lower_visibility(spec.visibility, Visibility::Public));
    lower_signature(&mut method, &spec.args, &spec.throws, &spec.annotations)?;
    lower_body(&spec.body, method.body_mut())?;
    Ok(method)
}

fn lower_method(spec: &MethodSpec, in_interface: bool) -> Result<MethodModel> {
    let mut method = MethodModel::new(&spec.name)
        .with_visibility(lower_visibility(spec.visibility, Visibility::Public));
    if let Some(returns) = &spec.returns {
        method = method.returns(lower_type(returns)?);
    }
    if spec.is_static {
        method = method.static_();
    }
    if spec.is_final {
        method = method.final_();
    }
    // Interface methods without a body are plain declarations, public
    // instance methods with one are defaults
    if spec.is_abstract || (in_interface && !spec.is_static && spec.body.is_empty()) {
        method = method.abstract_();
    } else if in_interface && !spec.is_static && method.visibility() != Visibility::Private {
        method = method.default_();
    }
    lower_signature(&mut method, &spec.args, &spec.throws, &spec.annotations)?;
    lower_body(&spec.body, method.body_mut())?;
    Ok(method)
}

fn lower_signature(
    method: &mut MethodModel,
    args: &[ArgSpec],
    throws: &[TypeSpec],
    annotations: &[String],
) -> Result<()> {
    for arg in args {
        let ty = lower_type(&arg.ty)?;
        match &arg.name {
            Some(name) => method.add_argument(name.as_str(), ty),
            None => method.add_unnamed_argument(ty),
        };
    }
    for exception in throws {
        method.add_exception(lower_type(exception)?);
    }
    for annotation in annotations {
        method.add_annotation(ClassName::parse(annotation));
    }
    Ok(())
}

fn lower_body(lines: &[BodyLine], code: &mut CodeModel) -> Result<()> {
    for line in lines {
        match line {
            BodyLine::Text(text) => {
                code.line(text.as_str());
            }
            BodyLine::Line { line } => {
                lower_line(line, code)?;
                code.text("\n");
            }
            BodyLine::Block { block, body } => {
                let mut nested = CodeModel::new();
                lower_body(body, &mut nested)?;
                code.line(format!("{} {{", block))
                    .push(CodeFragment::Indent(nested))
                    .line("}");
            }
        }
    }
    Ok(())
}

fn lower_line(line: &LineSpec, code: &mut CodeModel) -> Result<()> {
    match line {
        LineSpec::Text(text) => {
            code.text(text.as_str());
        }
        LineSpec::Parts(parts) => {
            for part in parts {
                match part {
                    LinePart::Text(text) => code.text(text.as_str()),
                    LinePart::Type(ty) => code.type_ref(lower_type(ty)?),
                };
            }
        }
    }
    Ok(())
}

/// Documentation for one class and its members, built after every class
/// has been lowered.
struct ClassDocs {
    class: DocComment,
    fields: Vec<DocComment>,
    /// Constructors first, then methods, matching `ClassModel::methods`
    methods: Vec<DocComment>,
}

impl ClassDocs {
    fn lower(spec: &ClassSpec, manifest: &Manifest, classes: &[ClassModel]) -> Result<Self> {
        let lower = |parts: &[DocPart]| lower_doc(parts, manifest, classes);

        let mut methods = Vec::with_capacity(spec.constructors.len() + spec.methods.len());
        for constructor in &spec.constructors {
            methods.push(lower(&constructor.doc)?);
        }
        for method in &spec.methods {
            methods.push(lower(&method.doc)?);
        }

        Ok(Self {
            class: lower(&spec.doc)?,
            fields: spec
                .fields
                .iter()
                .map(|field| lower(&field.doc))
                .collect::<Result<_>>()?,
            methods,
        })
    }

    fn apply(self, class: &mut ClassModel) {
        class.doc = self.class;
        for (field, doc) in class.fields.iter_mut().zip(self.fields) {
            field.doc = doc;
        }
        for (method, doc) in class.methods.iter_mut().zip(self.methods) {
            *method.doc_mut() = doc;
        }
    }
}

fn lower_doc(parts: &[DocPart], manifest: &Manifest, classes: &[ClassModel]) -> Result<DocComment> {
    let mut doc = DocComment::new();
    for part in parts {
        match part {
            DocPart::Text(text) => {
                doc.text(text.as_str());
            }
            DocPart::Link { link } => {
                doc.link(lower_type(link)?);
            }
            DocPart::Member { member } => {
                let target = manifest
                    .resolve_member(member)
                    .map_err(|e| eyre!("cannot resolve member link '{}': {}", member, e))?;
                let position = manifest
                    .classes
                    .iter()
                    .position(|class| std::ptr::eq(class, target.class))
                    .ok_or_else(|| eyre!("member link '{}' points outside the manifest", member))?;
                let owner = &classes[position];
                let method = &owner.methods[target.class.constructors.len() + target.index];
                doc.member_link(&owner.name, method);
            }
        }
    }
    Ok(doc)
}
