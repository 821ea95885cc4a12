//! Manifest types and parsing for jwrap.toml files.

mod generator;
mod parse;
mod validate;

pub use generator::{GeneratorConfig, IndentConfig, MAX_INDENT_WIDTH};
use serde::Deserialize;
use thiserror::Error;
pub use validate::ParseContext;

use crate::{ClassSpec, MethodSpec};

/// Root manifest for jwrap.toml
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Generator settings
    #[serde(default)]
    pub generator: GeneratorConfig,

    /// Classes to generate, in output order
    #[serde(default)]
    pub classes: Vec<ClassSpec>,
}

/// A method found by [`Manifest::resolve_member`].
#[derive(Debug, Clone, Copy)]
pub struct MemberTarget<'a> {
    pub class: &'a ClassSpec,
    pub method: &'a MethodSpec,
    /// Position of the method in the class's `methods`
    pub index: usize,
}

/// Why a member link could not be resolved
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LinkError {
    #[error("expected '<class>#<method>'")]
    Malformed,
    #[error("no class named '{0}' is declared in this manifest")]
    UnknownClass(String),
    #[error("class '{class}' declares no method '{method}'")]
    UnknownMethod { class: String, method: String },
    #[error("'{method}' has no overload taking ({args})")]
    NoMatchingOverload { method: String, args: String },
    #[error("'{method}' is overloaded {count} times, list the argument types to pick one")]
    Ambiguous { method: String, count: usize },
}

impl Manifest {
    /// Find a declared class by its qualified name.
    pub fn class(&self, name: &str) -> Option<&ClassSpec> {
        self.classes.iter().find(|class| class.name == name)
    }

    /// Resolve a member link such as `com.example.Dao#find` or
    /// `com.example.Dao#find(long, java.lang.String)`.
    ///
    /// Without an argument list the method name must be unique in its class.
    /// Argument types are compared after erasure.
    pub fn resolve_member(&self, link: &str) -> Result<MemberTarget<'_>, LinkError> {
        let (class_name, member) = link.split_once('#').ok_or(LinkError::Malformed)?;
        let (method_name, wanted) = match member.split_once('(') {
            Some((name, rest)) => {
                let args = rest.strip_suffix(')').ok_or(LinkError::Malformed)?;
                let args: Vec<String> = args
                    .split(',')
                    .map(|arg| arg.split_whitespace().collect::<String>())
                    .filter(|arg| !arg.is_empty())
                    .collect();
                (name.trim(), Some(args))
            }
            None => (member.trim(), None),
        };
        if class_name.trim().is_empty() || method_name.is_empty() {
            return Err(LinkError::Malformed);
        }

        let class = self
            .class(class_name.trim())
            .ok_or_else(|| LinkError::UnknownClass(class_name.trim().to_string()))?;

        let mut candidates = class
            .methods
            .iter()
            .enumerate()
            .filter(|(_, method)| method.name == method_name)
            .peekable();
        if candidates.peek().is_none() {
            return Err(LinkError::UnknownMethod {
                class: class.name.clone(),
                method: method_name.to_string(),
            });
        }

        let matches: Vec<(usize, &MethodSpec)> = match &wanted {
            Some(args) => candidates
                .filter(|(_, method)| method.erased_arg_types() == *args)
                .collect(),
            None => candidates.collect(),
        };

        match matches.as_slice() {
            [(index, method)] => Ok(MemberTarget {
                class,
                method: *method,
                index: *index,
            }),
            [] => Err(LinkError::NoMatchingOverload {
                method: method_name.to_string(),
                args: wanted.map(|args| args.join(", ")).unwrap_or_default(),
            }),
            _ => Err(LinkError::Ambiguous {
                method: method_name.to_string(),
                count: matches.len(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SRC: &str = r#"
[[classes]]
name = "com.example.Dao"

[[classes.methods]]
name = "find"
args = [{ name = "id", type = "long" }]

[[classes.methods]]
name = "find"
args = [{ name = "name", type = "java.lang.String" }]

[[classes.methods]]
name = "close"
"#;

    fn manifest() -> Manifest {
        SRC.parse().unwrap()
    }

    #[test]
    fn test_resolve_unique_method() {
        let manifest = manifest();
        let target = manifest.resolve_member("com.example.Dao#close").unwrap();
        assert_eq!(target.class.name, "com.example.Dao");
        assert_eq!(target.method.name, "close");
        assert_eq!(target.index, 2);
    }

    #[test]
    fn test_resolve_overload_by_arguments() {
        let manifest = manifest();
        let target = manifest
            .resolve_member("com.example.Dao#find(java.lang.String)")
            .unwrap();
        assert_eq!(target.index, 1);

        let target = manifest.resolve_member("com.example.Dao#find( long )").unwrap();
        assert_eq!(target.index, 0);
    }

    #[test]
    fn test_resolve_errors() {
        let manifest = manifest();
        assert_eq!(
            manifest.resolve_member("com.example.Dao").unwrap_err(),
            LinkError::Malformed
        );
        assert_eq!(
            manifest.resolve_member("com.example.Other#find").unwrap_err(),
            LinkError::UnknownClass("com.example.Other".into())
        );
        assert!(matches!(
            manifest.resolve_member("com.example.Dao#save").unwrap_err(),
            LinkError::UnknownMethod { .. }
        ));
        assert_eq!(
            manifest.resolve_member("com.example.Dao#find").unwrap_err(),
            LinkError::Ambiguous {
                method: "find".into(),
                count: 2
            }
        );
        assert!(matches!(
            manifest.resolve_member("com.example.Dao#find(int)").unwrap_err(),
            LinkError::NoMatchingOverload { .. }
        ));
    }
}
