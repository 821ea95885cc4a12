//! Java source model and renderer for jwrap.
//!
//! This crate turns an in-memory model of classes, methods, types and
//! documentation comments into formatted, import-correct Java source.
//!
//! # Module Organization
//!
//! - [`builder`] - Code model and writers (TypeRef, MethodModel, CodeWriter, etc.)
//! - [`generation`] - Import resolution and output management (ImportRegistry, JavaFile, FileRegistry)
//! - [`lower`] - Conversion from a parsed `jwrap.toml` manifest into class models
//! - [`testing`] - Test utilities (feature-gated)
//!
//! # Example
//!
//! ```
//! use jwrap_codegen::builder::{ClassName, MethodModel, Renderable, SourceWriter, TypeRef};
//! use jwrap_codegen::generation::ImportRegistry;
//!
//! let method = MethodModel::new("get")
//!     .returns(TypeRef::class("java.lang.String"))
//!     .arg("id", TypeRef::named("", "int"))
//!     .throws(TypeRef::class("java.sql.SQLException"))
//!     .line("return null;");
//!
//! let mut imports = ImportRegistry::new();
//! method.collect_imports(&mut imports);
//!
//! let mut out = SourceWriter::java();
//! method.render(&mut out, &imports);
//!
//! assert_eq!(
//!     out.build(),
//!     "public String get(int id) throws SQLException {\n    return null;\n}\n"
//! );
//! let lines: Vec<String> = imports.import_lines().map(|c| c.to_string()).collect();
//! assert_eq!(lines, ["java.lang.String", "java.sql.SQLException"]);
//! ```

pub mod builder;
pub mod generation;
pub mod lower;

#[cfg(any(test, feature = "testing"))]
pub mod testing;
