//! Parsing and validation of `jwrap.toml`.
//!
//! A manifest lists the Java classes to generate together with their
//! fields, constructors, methods and documentation, plus generator settings.
//!
//! ```
//! use jwrap_manifest::Manifest;
//!
//! let manifest: Manifest = r#"
//! [generator]
//! indent = 2
//!
//! [[classes]]
//! name = "com.example.Greeter"
//!
//! [[classes.methods]]
//! name = "greet"
//! returns = "java.lang.String"
//! args = [{ name = "who", type = "java.lang.String" }]
//! body = ['return "Hello, " + who;']
//! "#
//! .parse()
//! .unwrap();
//!
//! assert_eq!(manifest.classes[0].simple_name(), "Greeter");
//! assert_eq!(manifest.classes[0].methods[0].args.len(), 1);
//! ```

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod class;
mod error;
mod manifest;

pub use class::{
    ArgSpec, BodyLine, ClassSpec, ConstructorSpec, DocPart, FieldSpec, LinePart, LineSpec,
    MethodSpec, TypeSpec, TypeTable, VisibilitySpec,
};
pub use error::{Error, Result, SourceContext};
pub use manifest::{
    GeneratorConfig, IndentConfig, LinkError, MAX_INDENT_WIDTH, Manifest, MemberTarget,
    ParseContext,
};
