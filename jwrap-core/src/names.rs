//! Java naming utilities shared by the manifest validator and the code model.

use std::path::PathBuf;

/// Java reserved words, including the literals and contextual `var`/`record`
/// that cannot name a type.
/// Source: https://docs.oracle.com/javase/specs/jls/se21/html/jls-3.html#jls-3.9
pub const JAVA_KEYWORDS: &[&str] = &[
    "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class", "const",
    "continue", "default", "do", "double", "else", "enum", "extends", "final", "finally", "float",
    "for", "goto", "if", "implements", "import", "instanceof", "int", "interface", "long",
    "native", "new", "package", "private", "protected", "public", "return", "short", "static",
    "strictfp", "super", "switch", "synchronized", "this", "throw", "throws", "transient", "try",
    "void", "volatile", "while", "_",
    // Literals
    "true", "false", "null",
];

/// Keywords naming the eight primitive types.
pub const PRIMITIVE_KEYWORDS: &[&str] = &[
    "boolean", "byte", "char", "short", "int", "long", "float", "double",
];

/// Check if a name is a Java reserved word
pub fn is_java_keyword(name: &str) -> bool {
    JAVA_KEYWORDS.contains(&name)
}

/// Check if a name is a primitive type keyword
pub fn is_primitive_keyword(name: &str) -> bool {
    PRIMITIVE_KEYWORDS.contains(&name)
}

/// Split a qualified name into `(qualifier, simple_name)`.
///
/// Names without a dot have an empty qualifier.
///
/// ```
/// assert_eq!(jwrap_core::split_qualified("java.util.List"), ("java.util", "List"));
/// assert_eq!(jwrap_core::split_qualified("int"), ("", "int"));
/// ```
pub fn split_qualified(name: &str) -> (&str, &str) {
    name.rsplit_once('.').unwrap_or(("", name))
}

/// Directory path for a package (e.g., "com.example" -> "com/example").
pub fn package_dir(package: &str) -> PathBuf {
    package.split('.').filter(|s| !s.is_empty()).collect()
}

/// Validate that a name is a valid Java identifier.
/// Returns None if valid, Some(reason) if invalid
pub fn validate_identifier(name: &str) -> Option<&'static str> {
    if name.is_empty() {
        return Some("name cannot be empty");
    }

    if is_java_keyword(name) {
        return Some("name is a Java reserved keyword");
    }

    let mut chars = name.chars();

    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' || c == '$' => {}
        Some(_) => return Some("name must start with a letter, underscore, or dollar sign"),
        None => return Some("name cannot be empty"),
    }

    if chars.any(|c| !(c.is_alphanumeric() || c == '_' || c == '$')) {
        return Some("name must contain only letters, digits, underscores, and dollar signs");
    }

    None
}

/// Validate every dot-separated segment of a qualified name.
pub fn validate_qualified_name(name: &str) -> Option<&'static str> {
    if name.is_empty() {
        return Some("name cannot be empty");
    }
    name.split('.').find_map(|segment| {
        if segment.is_empty() {
            Some("qualified name cannot contain empty segments")
        } else {
            validate_identifier(segment)
        }
    })
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    #[test]
    fn test_split_qualified() {
        assert_eq!(split_qualified("java.sql.SQLException"), ("java.sql", "SQLException"));
        assert_eq!(split_qualified("Foo"), ("", "Foo"));
    }

    #[test]
    fn test_package_dir() {
        assert_eq!(package_dir("com.example.db"), Path::new("com/example/db"));
        assert_eq!(package_dir(""), Path::new(""));
    }

    #[test]
    fn test_valid_identifiers() {
        assert!(validate_identifier("get").is_none());
        assert!(validate_identifier("getString").is_none());
        assert!(validate_identifier("_private").is_none());
        assert!(validate_identifier("$proxy0").is_none());
        assert!(validate_identifier("arg1").is_none());
    }

    #[test]
    fn test_invalid_identifiers() {
        assert!(validate_identifier("").is_some());
        assert!(validate_identifier("1abc").is_some());
        assert!(validate_identifier("my-method").is_some());
        assert!(validate_identifier("class").is_some());
        assert!(validate_identifier("null").is_some());
    }

    #[test]
    fn test_qualified_names() {
        assert!(validate_qualified_name("java.util.List").is_none());
        assert!(validate_qualified_name("Foo").is_none());
        assert!(validate_qualified_name("java..List").is_some());
        assert!(validate_qualified_name("com.package.Foo").is_some());
    }

    #[test]
    fn test_primitive_keywords() {
        assert!(is_primitive_keyword("int"));
        assert!(is_primitive_keyword("boolean"));
        assert!(!is_primitive_keyword("void"));
        assert!(!is_primitive_keyword("String"));
        assert!(PRIMITIVE_KEYWORDS.iter().all(|k| is_java_keyword(k)));
    }
}
