//! Type references for generated Java code.
//!
//! A [`TypeRef`] describes a type independently of how it will be printed.
//! Whether a named type renders as `List` or `java.util.List` is decided at
//! render time by the [`ImportRegistry`] of the unit being generated.

use std::fmt;

use jwrap_core::split_qualified;

use crate::generation::ImportRegistry;

/// A named (class or interface) type: package qualifier plus simple name.
///
/// The qualifier is empty only for built-ins and types in the default package.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClassName {
    qualifier: String,
    simple_name: String,
}

impl ClassName {
    /// Create a class name from a qualifier and a simple name.
    pub fn new(qualifier: impl Into<String>, simple_name: impl Into<String>) -> Self {
        let simple_name = simple_name.into();
        debug_assert!(!simple_name.is_empty(), "simple name cannot be empty");
        Self {
            qualifier: qualifier.into(),
            simple_name,
        }
    }

    /// Split a fully qualified name at its last dot.
    pub fn parse(qualified: &str) -> Self {
        let (qualifier, simple_name) = split_qualified(qualified);
        Self::new(qualifier, simple_name)
    }

    /// The package portion of the name.
    pub fn qualifier(&self) -> &str {
        &self.qualifier
    }

    /// The unqualified name.
    pub fn simple_name(&self) -> &str {
        &self.simple_name
    }

    /// Render the name, short if the registry grants this qualifier the simple name.
    pub fn render(&self, imports: &ImportRegistry) -> String {
        if self.qualifier.is_empty() || imports.is_short(self) {
            self.simple_name.clone()
        } else {
            self.to_string()
        }
    }
}

impl fmt::Display for ClassName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.qualifier.is_empty() {
            f.write_str(&self.simple_name)
        } else {
            write!(f, "{}.{}", self.qualifier, self.simple_name)
        }
    }
}

/// Java primitive types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveType {
    Boolean,
    Byte,
    Char,
    Short,
    Int,
    Long,
    Float,
    Double,
}

impl PrimitiveType {
    /// The Java keyword for this primitive.
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::Byte => "byte",
            Self::Char => "char",
            Self::Short => "short",
            Self::Int => "int",
            Self::Long => "long",
            Self::Float => "float",
            Self::Double => "double",
        }
    }

    /// Look up a primitive by its keyword.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        let ty = match keyword {
            "boolean" => Self::Boolean,
            "byte" => Self::Byte,
            "char" => Self::Char,
            "short" => Self::Short,
            "int" => Self::Int,
            "long" => Self::Long,
            "float" => Self::Float,
            "double" => Self::Double,
            _ => return None,
        };
        Some(ty)
    }
}

/// A reference to a type usable in a signature or documentation link.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeRef {
    /// A primitive type (`int`, `boolean`, ...).
    Primitive(PrimitiveType),
    /// A class or interface type.
    Named(ClassName),
    /// An array of the inner type.
    Array(Box<TypeRef>),
    /// A generic type with type arguments.
    Parameterized {
        /// The generic class (e.g., `java.util.Map`).
        base: ClassName,
        /// Type arguments in declaration order.
        args: Vec<TypeRef>,
    },
}

impl TypeRef {
    /// Create a primitive type reference.
    pub fn primitive(ty: PrimitiveType) -> Self {
        Self::Primitive(ty)
    }

    /// Create a named type reference from a qualifier and simple name.
    pub fn named(qualifier: impl Into<String>, simple_name: impl Into<String>) -> Self {
        Self::Named(ClassName::new(qualifier, simple_name))
    }

    /// Create a named type reference from a fully qualified name.
    pub fn class(qualified: &str) -> Self {
        Self::Named(ClassName::parse(qualified))
    }

    /// Create an array type reference.
    pub fn array(inner: TypeRef) -> Self {
        Self::Array(Box::new(inner))
    }

    /// Create a parameterized type reference.
    pub fn parameterized(base: ClassName, args: Vec<TypeRef>) -> Self {
        Self::Parameterized { base, args }
    }

    /// Convenience: `int`.
    pub fn int() -> Self {
        Self::Primitive(PrimitiveType::Int)
    }

    /// Convenience: `long`.
    pub fn long() -> Self {
        Self::Primitive(PrimitiveType::Long)
    }

    /// Convenience: `boolean`.
    pub fn boolean() -> Self {
        Self::Primitive(PrimitiveType::Boolean)
    }

    /// Convenience: `java.lang.String`.
    pub fn string() -> Self {
        Self::named("java.lang", "String")
    }

    /// Convenience: `java.lang.Object`.
    pub fn object() -> Self {
        Self::named("java.lang", "Object")
    }

    /// The type with all generic arguments removed.
    ///
    /// Javadoc member references match on erased signatures.
    pub fn erasure(&self) -> TypeRef {
        match self {
            Self::Parameterized { base, .. } => Self::Named(base.clone()),
            Self::Array(inner) => Self::array(inner.erasure()),
            other => other.clone(),
        }
    }

    /// Visit every class name reachable from this type, outermost first.
    pub fn for_each_class_name(&self, f: &mut impl FnMut(&ClassName)) {
        match self {
            Self::Primitive(_) => {}
            Self::Named(name) => f(name),
            Self::Array(inner) => inner.for_each_class_name(f),
            Self::Parameterized { base, args } => {
                f(base);
                for arg in args {
                    arg.for_each_class_name(f);
                }
            }
        }
    }

    /// Render the type, consulting the registry for every contained class name.
    ///
    /// Types the registry has never seen render fully qualified.
    pub fn render(&self, imports: &ImportRegistry) -> String {
        let mut out = String::new();
        self.render_into(&mut out, &|name| name.render(imports));
        out
    }

    fn render_into(&self, out: &mut String, name: &dyn Fn(&ClassName) -> String) {
        match self {
            Self::Primitive(p) => out.push_str(p.keyword()),
            Self::Named(class) => out.push_str(&name(class)),
            Self::Array(inner) => {
                inner.render_into(out, name);
                out.push_str("[]");
            }
            Self::Parameterized { base, args } => {
                out.push_str(&name(base));
                if !args.is_empty() {
                    out.push('<');
                    for (i, arg) in args.iter().enumerate() {
                        if i > 0 {
                            out.push_str(", ");
                        }
                        arg.render_into(out, name);
                    }
                    out.push('>');
                }
            }
        }
    }
}

/// Fully qualified rendering, independent of any import registry.
impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        self.render_into(&mut out, &|name| name.to_string());
        f.write_str(&out)
    }
}

impl From<ClassName> for TypeRef {
    fn from(name: ClassName) -> Self {
        Self::Named(name)
    }
}

impl From<PrimitiveType> for TypeRef {
    fn from(ty: PrimitiveType) -> Self {
        Self::Primitive(ty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list_of(arg: TypeRef) -> TypeRef {
        TypeRef::parameterized(ClassName::parse("java.util.List"), vec![arg])
    }

    #[test]
    fn test_class_name_parse() {
        let name = ClassName::parse("java.sql.Connection");
        assert_eq!(name.qualifier(), "java.sql");
        assert_eq!(name.simple_name(), "Connection");
        assert_eq!(name.to_string(), "java.sql.Connection");

        let bare = ClassName::parse("Foo");
        assert_eq!(bare.qualifier(), "");
        assert_eq!(bare.to_string(), "Foo");
    }

    #[test]
    fn test_primitive_keywords_round_trip() {
        for keyword in jwrap_core::PRIMITIVE_KEYWORDS {
            let ty = PrimitiveType::from_keyword(keyword).unwrap();
            assert_eq!(ty.keyword(), *keyword);
        }
        assert_eq!(PrimitiveType::from_keyword("void"), None);
    }

    #[test]
    fn test_display_is_fully_qualified() {
        let ty = TypeRef::array(list_of(TypeRef::string()));
        assert_eq!(ty.to_string(), "java.util.List<java.lang.String>[]");
        assert_eq!(TypeRef::int().to_string(), "int");
    }

    #[test]
    fn test_unregistered_renders_qualified() {
        let imports = ImportRegistry::new();
        assert_eq!(
            TypeRef::class("java.sql.Blob").render(&imports),
            "java.sql.Blob"
        );
        assert_eq!(TypeRef::named("", "int").render(&imports), "int");
    }

    #[test]
    fn test_generic_args_resolved_independently() {
        let mut imports = ImportRegistry::new();
        imports.register(&TypeRef::class("a.Foo"));
        let ty = list_of(TypeRef::class("b.Foo"));
        imports.register(&ty);

        assert_eq!(ty.render(&imports), "List<b.Foo>");
    }

    #[test]
    fn test_erasure() {
        let ty = TypeRef::array(list_of(TypeRef::string()));
        assert_eq!(ty.erasure().to_string(), "java.util.List[]");
        assert_eq!(TypeRef::long().erasure(), TypeRef::long());
    }

    #[test]
    fn test_for_each_class_name_order() {
        let map = TypeRef::parameterized(
            ClassName::parse("java.util.Map"),
            vec![TypeRef::string(), list_of(TypeRef::int())],
        );
        let mut seen = Vec::new();
        map.for_each_class_name(&mut |name| seen.push(name.to_string()));
        assert_eq!(
            seen,
            ["java.util.Map", "java.lang.String", "java.util.List"]
        );
    }
}
