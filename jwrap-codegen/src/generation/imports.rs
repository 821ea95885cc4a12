//! Import resolution for one generation unit.

use std::fmt;

use indexmap::{IndexMap, IndexSet};
use tracing::debug;

use crate::builder::{ClassName, TypeRef};

/// Packages whose types are visible without an import in every unit.
const IMPLICIT_PACKAGES: &[&str] = &["java.lang"];

/// Decides, per class name, whether a unit may print it short or must
/// print it fully qualified.
///
/// The first class registered for a simple name claims it; any later class
/// with the same simple name but another qualifier renders fully qualified.
/// Claims are never revoked, and claim order is preserved so that
/// [`import_lines`](Self::import_lines) is reproducible.
///
/// One registry belongs to exactly one generation unit.
///
/// # Example
///
/// ```
/// use jwrap_codegen::builder::TypeRef;
/// use jwrap_codegen::generation::ImportRegistry;
///
/// let first = TypeRef::class("a.Foo");
/// let second = TypeRef::class("b.Foo");
///
/// let mut imports = ImportRegistry::new();
/// imports.register(&first);
/// imports.register(&second);
///
/// assert_eq!(first.render(&imports), "Foo");
/// assert_eq!(second.render(&imports), "b.Foo");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ImportRegistry {
    /// Simple name -> qualifier owning the unqualified use, in claim order
    claims: IndexMap<String, String>,
    /// Class names that lost their simple name to an earlier claim
    conflicts: IndexSet<ClassName>,
    /// Packages that never produce import lines
    implicit: IndexSet<String>,
}

impl ImportRegistry {
    /// Create an empty registry with no implicit packages.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry for a unit declared in `package`.
    ///
    /// `java.lang` and the unit's own package are visible without imports.
    pub fn for_package(package: &str) -> Self {
        let mut registry = Self::new();
        for implicit in IMPLICIT_PACKAGES {
            registry.implicit.insert((*implicit).to_string());
        }
        if !package.is_empty() {
            registry.implicit.insert(package.to_string());
        }
        registry
    }

    /// Register every class name reachable from a type.
    pub fn register(&mut self, ty: &TypeRef) {
        ty.for_each_class_name(&mut |name| {
            self.claim(name);
        });
    }

    /// Claim the simple name of a class for its qualifier.
    ///
    /// Returns `true` if the class renders short afterwards.
    pub fn claim(&mut self, name: &ClassName) -> bool {
        match self.claims.get(name.simple_name()) {
            None => {
                self.claims
                    .insert(name.simple_name().to_string(), name.qualifier().to_string());
                true
            }
            Some(owner) if owner == name.qualifier() => true,
            Some(owner) => {
                if self.conflicts.insert(name.clone()) {
                    debug!(
                        name = %name,
                        owner = %owner,
                        "simple name already claimed, rendering fully qualified"
                    );
                }
                false
            }
        }
    }

    /// Check whether a class may be rendered by its simple name.
    pub fn is_short(&self, name: &ClassName) -> bool {
        self.claims
            .get(name.simple_name())
            .is_some_and(|owner| owner == name.qualifier())
    }

    /// Classes owning a short-name claim that need an import declaration,
    /// in first-claimed order.
    pub fn import_lines(&self) -> impl Iterator<Item = ImportLine<'_>> {
        self.claims
            .iter()
            .filter(|(_, qualifier)| {
                !qualifier.is_empty() && !self.implicit.contains(qualifier.as_str())
            })
            .map(|(simple_name, qualifier)| ImportLine {
                qualifier,
                simple_name,
            })
    }

    /// Classes forced to render fully qualified, in the order they were first seen.
    pub fn conflicts(&self) -> impl Iterator<Item = &ClassName> {
        self.conflicts.iter()
    }

    /// Number of claimed simple names.
    pub fn len(&self) -> usize {
        self.claims.len()
    }

    /// Check if nothing has been registered.
    pub fn is_empty(&self) -> bool {
        self.claims.is_empty()
    }
}

/// One import declaration: the class owning a short-name claim.
///
/// Displays as the fully qualified name (`java.util.List`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportLine<'a> {
    qualifier: &'a str,
    simple_name: &'a str,
}

impl<'a> ImportLine<'a> {
    /// The package portion of the imported class.
    pub fn qualifier(&self) -> &'a str {
        self.qualifier
    }

    /// The simple name the import makes available.
    pub fn simple_name(&self) -> &'a str {
        self.simple_name
    }
}

impl fmt::Display for ImportLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.qualifier, self.simple_name)
    }
}
