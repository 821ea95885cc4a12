use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr};

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written,
    /// File already had the exact same content and was left untouched
    Unchanged,
}

/// A generated source file
#[derive(Debug, Clone)]
pub struct File {
    path: PathBuf,
    content: String,
}

impl File {
    /// Create a new file with the given path and content
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Get the file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the file content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Check if the file exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Write the file, skipping the write when the file on disk is byte-identical.
    ///
    /// Leaving identical files alone keeps modification times stable across
    /// regeneration runs.
    pub fn write(&self) -> Result<WriteResult> {
        let unchanged = std::fs::read(&self.path)
            .map(|existing| existing == self.content.as_bytes())
            .unwrap_or(false);
        if unchanged {
            return Ok(WriteResult::Unchanged);
        }
        write_file(&self.path, &self.content)
            .wrap_err_with(|| format!("failed to write {}", self.path.display()))?;
        Ok(WriteResult::Written)
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;
    Ok(())
}
