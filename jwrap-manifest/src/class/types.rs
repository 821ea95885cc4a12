use serde::Deserialize;

/// A type as written in the manifest
///
/// Supports two forms:
/// - `"java.lang.String"`, `"int"`, `"byte[][]"` - a name with optional `[]` suffixes
/// - `{ type = "java.util.Map", args = ["java.lang.String", "int[]"] }` - a parameterized type
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum TypeSpec {
    Name(String),
    Table(TypeTable),
}

/// Table form of a [`TypeSpec`]
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TypeTable {
    #[serde(rename = "type")]
    pub name: String,

    #[serde(default)]
    pub args: Vec<TypeSpec>,
}

impl TypeSpec {
    /// The type name as written, including any `[]` suffixes.
    pub fn raw(&self) -> &str {
        match self {
            TypeSpec::Name(name) => name,
            TypeSpec::Table(table) => &table.name,
        }
    }

    /// Generic arguments; empty for the string form.
    pub fn args(&self) -> &[TypeSpec] {
        match self {
            TypeSpec::Name(_) => &[],
            TypeSpec::Table(table) => &table.args,
        }
    }

    /// Split the name into its base and the number of array dimensions.
    ///
    /// ```
    /// use jwrap_manifest::TypeSpec;
    ///
    /// let ty = TypeSpec::Name("byte[][]".into());
    /// assert_eq!(ty.split_dimensions(), ("byte", 2));
    /// ```
    pub fn split_dimensions(&self) -> (&str, usize) {
        let mut base = self.raw().trim();
        let mut dimensions = 0;
        while let Some(rest) = base.strip_suffix("[]") {
            base = rest.trim_end();
            dimensions += 1;
        }
        (base, dimensions)
    }

    /// The name with generic arguments dropped, e.g. `java.util.List[]`.
    pub fn erased_name(&self) -> String {
        let (base, dimensions) = self.split_dimensions();
        format!("{}{}", base, "[]".repeat(dimensions))
    }

    /// Check that the type is well formed.
    /// Returns None if valid, Some(reason) if invalid
    pub fn check(&self) -> Option<String> {
        let (base, _) = self.split_dimensions();

        if base == "void" {
            return Some("'void' is not a value type, omit 'returns' instead".to_string());
        }

        if jwrap_core::is_primitive_keyword(base) {
            if !self.args().is_empty() {
                return Some(format!("primitive type '{}' cannot take type arguments", base));
            }
            return None;
        }

        if let Some(reason) = jwrap_core::validate_qualified_name(base) {
            return Some(reason.to_string());
        }

        self.args().iter().find_map(|arg| {
            let (arg_base, arg_dimensions) = arg.split_dimensions();
            if jwrap_core::is_primitive_keyword(arg_base) && arg_dimensions == 0 {
                Some(format!("type argument '{}' must be a reference type", arg_base))
            } else {
                arg.check()
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(s: &str) -> TypeSpec {
        TypeSpec::Name(s.to_string())
    }

    #[test]
    fn test_split_dimensions() {
        assert_eq!(name("int").split_dimensions(), ("int", 0));
        assert_eq!(name("java.lang.String[]").split_dimensions(), ("java.lang.String", 1));
        assert_eq!(name(" Object [] []").split_dimensions(), ("Object", 2));
    }

    #[test]
    fn test_valid_types() {
        assert!(name("int").check().is_none());
        assert!(name("long[]").check().is_none());
        assert!(name("java.sql.Connection").check().is_none());

        let map = TypeSpec::Table(TypeTable {
            name: "java.util.Map".into(),
            args: vec![name("java.lang.String"), name("int[]")],
        });
        assert!(map.check().is_none());
    }

    #[test]
    fn test_invalid_types() {
        assert!(name("void").check().unwrap().contains("void"));
        assert!(name("java..List").check().is_some());
        assert!(name("com.package.Foo").check().is_some());

        let primitive_arg = TypeSpec::Table(TypeTable {
            name: "java.util.List".into(),
            args: vec![name("int")],
        });
        assert!(primitive_arg.check().unwrap().contains("reference type"));

        let generic_primitive = TypeSpec::Table(TypeTable {
            name: "int".into(),
            args: vec![name("java.lang.String")],
        });
        assert!(generic_primitive.check().is_some());
    }

    #[test]
    fn test_erased_name() {
        let list = TypeSpec::Table(TypeTable {
            name: "java.util.List[]".into(),
            args: vec![name("java.lang.String")],
        });
        assert_eq!(list.erased_name(), "java.util.List[]");
    }
}
