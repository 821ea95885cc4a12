//! Compilation units.

use std::path::PathBuf;

use jwrap_core::package_dir;
use tracing::debug;

use super::ImportRegistry;
use crate::builder::{ClassModel, ClassName, CodeWriter, Indent, Renderable, SourceWriter};

/// One `.java` file holding a single top-level class.
///
/// Rendering owns the whole two-pass protocol: a fresh [`ImportRegistry`] is
/// created for the class's package, the class and its package peers claim
/// their simple names, every member registers its types, and only then is
/// text produced.
///
/// # Example
///
/// ```
/// use jwrap_codegen::builder::{ClassModel, Indent, MethodModel, TypeRef};
/// use jwrap_codegen::generation::JavaFile;
///
/// let class = ClassModel::new("com.example.Clock")
///     .method(MethodModel::new("now").returns(TypeRef::class("java.time.Instant")).line("return Instant.now();"));
/// let file = JavaFile::new(class);
///
/// assert_eq!(file.relative_path(), std::path::Path::new("com/example/Clock.java"));
/// assert_eq!(
///     file.render(Indent::JAVA),
///     "package com.example;\n\nimport java.time.Instant;\n\npublic class Clock {\n    public Instant now() {\n        return Instant.now();\n    }\n}\n"
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct JavaFile {
    class: ClassModel,
    header: Option<String>,
    /// Simple names of other classes generated into the same package
    peers: Vec<String>,
}

impl JavaFile {
    /// Create a compilation unit for a class.
    pub fn new(class: ClassModel) -> Self {
        Self {
            class,
            header: None,
            peers: Vec::new(),
        }
    }

    /// Declare other classes of the same package.
    ///
    /// A same-package class shadows `java.lang`, so these names are claimed
    /// before any member type and colliding types render fully qualified.
    pub fn with_package_peers<I, S>(mut self, peers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.peers.extend(peers.into_iter().map(Into::into));
        self
    }

    /// Set a header emitted as `//` line comments above the package declaration.
    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }

    /// The class this unit declares.
    pub fn class(&self) -> &ClassModel {
        &self.class
    }

    /// The package of the unit; empty for the default package.
    pub fn package(&self) -> &str {
        self.class.name.qualifier()
    }

    /// Path of the file relative to the output root.
    pub fn relative_path(&self) -> PathBuf {
        package_dir(self.package()).join(format!("{}.java", self.class.name.simple_name()))
    }

    /// Resolve the imports of this unit.
    pub fn imports(&self) -> ImportRegistry {
        let mut imports = ImportRegistry::for_package(self.package());
        imports.claim(&self.class.name);
        for peer in &self.peers {
            imports.claim(&ClassName::new(self.package(), peer.as_str()));
        }
        self.class.collect_imports(&mut imports);
        imports
    }

    /// Render the complete file.
    pub fn render(&self, indent: Indent) -> String {
        let imports = self.imports();
        debug!(
            class = %self.class.name,
            imports = imports.import_lines().count(),
            conflicts = imports.conflicts().count(),
            "resolved imports"
        );

        let mut out = SourceWriter::new(indent);
        if let Some(header) = &self.header {
            for line in header.lines() {
                if line.is_empty() {
                    out.write_line("//");
                } else {
                    out.write_line(&format!("// {}", line));
                }
            }
            out.blank_line();
        }

        if !self.package().is_empty() {
            out.write_line(&format!("package {};", self.package()));
            out.blank_line();
        }

        let mut has_imports = false;
        for line in imports.import_lines() {
            out.write_line(&format!("import {};", line));
            has_imports = true;
        }
        if has_imports {
            out.blank_line();
        }

        self.class.render(&mut out, &imports);
        out.build()
    }
}
