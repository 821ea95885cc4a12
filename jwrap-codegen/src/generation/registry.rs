//! Registry of rendered files for one generation run.
//!
//! Files are rendered up front and written in one pass, so a dry run and a
//! real run see exactly the same content.
//!
//! # Example
//!
//! ```ignore
//! let mut registry = FileRegistry::new(Indent::JAVA);
//!
//! for file in lowered.files {
//!     registry.register_java(&file);
//! }
//!
//! registry.write_all(&output_dir)?;
//! ```

use std::path::{Path, PathBuf};

use eyre::Result;
use jwrap_core::{File, WriteResult};
use tracing::{debug, info};

use super::JavaFile;
use crate::builder::Indent;

/// A rendered file waiting to be written.
#[derive(Debug, Clone)]
pub struct FileEntry {
    /// Relative path from output directory.
    pub path: PathBuf,
    /// File content.
    pub content: String,
}

impl FileEntry {
    /// Create a new file entry.
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Get the full path for this entry.
    pub fn full_path(&self, base: &Path) -> PathBuf {
        base.join(&self.path)
    }

    /// Write this file below `base`.
    pub fn write(&self, base: &Path) -> Result<WriteResult> {
        File::new(self.full_path(base), self.content.as_str()).write()
    }
}

/// Collects rendered files in registration order.
#[derive(Debug, Default)]
pub struct FileRegistry {
    indent: Indent,
    entries: Vec<FileEntry>,
}

impl FileRegistry {
    /// Create a new empty registry rendering with the given indentation.
    pub fn new(indent: Indent) -> Self {
        Self {
            indent,
            entries: Vec::new(),
        }
    }

    /// Register a file entry.
    pub fn register(&mut self, entry: FileEntry) {
        self.entries.push(entry);
    }

    /// Render a compilation unit and register it.
    pub fn register_java(&mut self, file: &JavaFile) {
        let path = file.relative_path();
        debug!(path = %path.display(), "rendering");
        self.register(FileEntry::new(path, file.render(self.indent)));
    }

    /// All registered entries in registration order.
    pub fn entries(&self) -> impl Iterator<Item = &FileEntry> {
        self.entries.iter()
    }

    /// Get the number of registered entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Preview all files (returns path and content pairs).
    pub fn preview(&self) -> Vec<PreviewEntry> {
        self.entries
            .iter()
            .map(|e| PreviewEntry {
                path: e.path.clone(),
                content: e.content.clone(),
            })
            .collect()
    }

    /// Write all files below the output directory.
    ///
    /// Files whose content on disk is already identical are left untouched.
    pub fn write_all(&self, base: &Path) -> Result<WriteStats> {
        let mut stats = WriteStats::default();

        for entry in &self.entries {
            match entry.write(base)? {
                WriteResult::Written => {
                    info!(path = %entry.path.display(), "wrote");
                    stats.written += 1;
                    stats.written_paths.push(entry.path.clone());
                }
                WriteResult::Unchanged => {
                    info!(path = %entry.path.display(), "unchanged");
                    stats.unchanged += 1;
                    stats.unchanged_paths.push(entry.path.clone());
                }
            }
        }

        Ok(stats)
    }
}

/// A preview entry for displaying what would be generated.
#[derive(Debug, Clone)]
pub struct PreviewEntry {
    /// Relative path from output directory.
    pub path: PathBuf,
    /// File content.
    pub content: String,
}

/// Statistics from a write operation.
#[derive(Debug, Default)]
pub struct WriteStats {
    /// Number of files written.
    pub written: usize,
    /// Number of files left untouched because their content was identical.
    pub unchanged: usize,
    /// Paths of written files.
    pub written_paths: Vec<PathBuf>,
    /// Paths of unchanged files.
    pub unchanged_paths: Vec<PathBuf>,
}

impl WriteStats {
    /// Total number of files processed.
    pub fn total(&self) -> usize {
        self.written + self.unchanged
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::builder::ClassModel;

    #[test]
    fn test_register_java_uses_package_path() {
        let mut registry = FileRegistry::new(Indent::JAVA);
        registry.register_java(&JavaFile::new(ClassModel::new("com.example.A")));
        registry.register_java(&JavaFile::new(ClassModel::new("B")));

        let paths: Vec<_> = registry.entries().map(|e| e.path.clone()).collect();
        assert_eq!(
            paths,
            vec![PathBuf::from("com/example/A.java"), PathBuf::from("B.java")]
        );
    }

    #[test]
    fn test_write_all_skips_unchanged() {
        let temp = TempDir::new().unwrap();
        let mut registry = FileRegistry::new(Indent::JAVA);
        registry.register(FileEntry::new("a/A.java", "class A {}\n"));
        registry.register(FileEntry::new("B.java", "class B {}\n"));

        let first = registry.write_all(temp.path()).unwrap();
        assert_eq!(first.written, 2);
        assert_eq!(first.unchanged, 0);

        std::fs::write(temp.path().join("B.java"), "edited").unwrap();

        let second = registry.write_all(temp.path()).unwrap();
        assert_eq!(second.written, 1);
        assert_eq!(second.unchanged, 1);
        assert_eq!(second.unchanged_paths, vec![PathBuf::from("a/A.java")]);
        assert_eq!(second.total(), 2);
        assert_eq!(
            std::fs::read_to_string(temp.path().join("B.java")).unwrap(),
            "class B {}\n"
        );
    }

    #[test]
    fn test_preview() {
        let mut registry = FileRegistry::new(Indent::Tab);
        registry.register(FileEntry::new("a.java", "content a"));
        registry.register(FileEntry::new("b.java", "content b"));

        let preview = registry.preview();

        assert_eq!(preview.len(), 2);
        assert_eq!(preview[0].path, PathBuf::from("a.java"));
        assert_eq!(preview[1].content, "content b");
    }
}
