mod types;
mod validate;

use serde::Deserialize;
pub use types::{TypeSpec, TypeTable};

/// Access modifier as written in the manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VisibilitySpec {
    Public,
    Protected,
    Package,
    Private,
}

impl VisibilitySpec {
    /// The manifest spelling.
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Protected => "protected",
            Self::Package => "package",
            Self::Private => "private",
        }
    }
}

/// A class to generate (`[[classes]]`)
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClassSpec {
    /// Fully qualified class name
    pub name: String,

    /// Generate an interface instead of a class
    #[serde(default)]
    pub interface: bool,

    #[serde(default)]
    pub visibility: Option<VisibilitySpec>,

    #[serde(default, rename = "final")]
    pub is_final: bool,

    #[serde(default, rename = "abstract")]
    pub is_abstract: bool,

    /// Superclass
    #[serde(default)]
    pub extends: Option<TypeSpec>,

    /// Implemented interfaces (extended interfaces for an interface)
    #[serde(default)]
    pub implements: Vec<TypeSpec>,

    /// Qualified annotation names, without `@`
    #[serde(default)]
    pub annotations: Vec<String>,

    #[serde(default)]
    pub doc: Vec<DocPart>,

    #[serde(default)]
    pub fields: Vec<FieldSpec>,

    #[serde(default)]
    pub constructors: Vec<ConstructorSpec>,

    #[serde(default)]
    pub methods: Vec<MethodSpec>,
}

impl ClassSpec {
    /// The simple class name (last segment).
    pub fn simple_name(&self) -> &str {
        jwrap_core::split_qualified(&self.name).1
    }

    /// The package (everything before the last segment).
    pub fn package(&self) -> &str {
        jwrap_core::split_qualified(&self.name).0
    }
}

/// A field (`[[classes.fields]]`)
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldSpec {
    pub name: String,

    #[serde(rename = "type")]
    pub ty: TypeSpec,

    #[serde(default)]
    pub visibility: Option<VisibilitySpec>,

    #[serde(default, rename = "static")]
    pub is_static: bool,

    #[serde(default, rename = "final")]
    pub is_final: bool,

    /// Initializer expression
    #[serde(default)]
    pub init: Option<LineSpec>,

    #[serde(default)]
    pub doc: Vec<DocPart>,
}

/// A method (`[[classes.methods]]`)
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MethodSpec {
    pub name: String,

    /// Return type; omitted for `void`
    #[serde(default)]
    pub returns: Option<TypeSpec>,

    #[serde(default)]
    pub args: Vec<ArgSpec>,

    #[serde(default)]
    pub throws: Vec<TypeSpec>,

    #[serde(default)]
    pub visibility: Option<VisibilitySpec>,

    #[serde(default, rename = "static")]
    pub is_static: bool,

    #[serde(default, rename = "final")]
    pub is_final: bool,

    /// Declaration without a body
    #[serde(default, rename = "abstract")]
    pub is_abstract: bool,

    #[serde(default)]
    pub annotations: Vec<String>,

    #[serde(default)]
    pub doc: Vec<DocPart>,

    #[serde(default)]
    pub body: Vec<BodyLine>,
}

impl MethodSpec {
    /// Erased argument type names, as used to pick an overload.
    pub fn erased_arg_types(&self) -> Vec<String> {
        self.args.iter().map(|arg| arg.ty.erased_name()).collect()
    }
}

/// A constructor (`[[classes.constructors]]`)
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConstructorSpec {
    #[serde(default)]
    pub args: Vec<ArgSpec>,

    #[serde(default)]
    pub throws: Vec<TypeSpec>,

    #[serde(default)]
    pub visibility: Option<VisibilitySpec>,

    #[serde(default)]
    pub annotations: Vec<String>,

    #[serde(default)]
    pub doc: Vec<DocPart>,

    #[serde(default)]
    pub body: Vec<BodyLine>,
}

/// A method or constructor argument
///
/// Arguments without a name are named `argN` after their position.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ArgSpec {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(rename = "type")]
    pub ty: TypeSpec,
}

/// A fragment of a documentation comment
///
/// Supports three forms:
/// - `"text"` - literal text, a trailing newline ends the line
/// - `{ link = "java.util.List" }` - a type link
/// - `{ member = "com.example.Dao#find" }` - a link to a method declared in this manifest
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum DocPart {
    Text(String),
    Link { link: TypeSpec },
    Member { member: String },
}

/// One entry of a method body
///
/// Supports three forms:
/// - `"return null;"` - a complete line
/// - `{ line = ["final ", { type = "java.util.List" }, " items;"] }` - a line mixing text and types
/// - `{ block = "if (x)", body = [...] }` - `header {`, an indented body, `}`
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum BodyLine {
    Text(String),
    Line { line: LineSpec },
    Block { block: String, body: Vec<BodyLine> },
}

/// Inline code: plain text or a list of text and type parts
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum LineSpec {
    Text(String),
    Parts(Vec<LinePart>),
}

impl LineSpec {
    /// Types referenced by this line.
    pub fn types(&self) -> impl Iterator<Item = &TypeSpec> {
        let parts: &[LinePart] = match self {
            LineSpec::Text(_) => &[],
            LineSpec::Parts(parts) => parts,
        };
        parts.iter().filter_map(|part| match part {
            LinePart::Text(_) => None,
            LinePart::Type(ty) => Some(ty),
        })
    }
}

/// One part of an inline code line
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum LinePart {
    Text(String),
    Type(TypeSpec),
}

impl BodyLine {
    /// Visit every type referenced by this entry and its nested blocks.
    pub fn for_each_type<'a>(&'a self, f: &mut impl FnMut(&'a TypeSpec)) {
        match self {
            BodyLine::Text(_) => {}
            BodyLine::Line { line } => line.types().for_each(|ty| f(ty)),
            BodyLine::Block { body, .. } => {
                for line in body {
                    line.for_each_type(f);
                }
            }
        }
    }
}
