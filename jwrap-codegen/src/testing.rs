//! Test utilities for the Java generator.
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests.

use std::{
    path::{Path, PathBuf},
    process::Command,
};

use eyre::{Result, eyre};
use jwrap_manifest::Manifest;

use crate::{
    generation::{FileRegistry, WriteStats},
    lower::lower,
};

/// Error from compile checking.
#[derive(Debug)]
pub struct CompileError {
    pub message: String,
    pub output: String,
}

impl std::fmt::Display for CompileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\n\nOutput:\n{}", self.message, self.output)
    }
}

impl std::error::Error for CompileError {}

/// Trait for verifying generated code compiles.
pub trait CompileChecker {
    /// Check that the sources below the given directory compile.
    fn check(&self, dir: &Path) -> Result<(), CompileError>;
}

/// Java compile checker using `javac`.
///
/// Class files go to a `classes` directory next to the sources.
pub struct JavacChecker;

impl JavacChecker {
    /// Check whether `javac` can be run on this machine.
    pub fn is_available() -> bool {
        Command::new("javac")
            .arg("-version")
            .output()
            .map(|output| output.status.success())
            .unwrap_or(false)
    }
}

impl CompileChecker for JavacChecker {
    fn check(&self, dir: &Path) -> Result<(), CompileError> {
        let sources = java_sources(dir).map_err(|e| CompileError {
            message: format!("Failed to list sources in {}: {}", dir.display(), e),
            output: String::new(),
        })?;

        let output = Command::new("javac")
            .arg("-d")
            .arg(dir.join("classes"))
            .args(&sources)
            .output()
            .map_err(|e| CompileError {
                message: format!("Failed to run javac: {}", e),
                output: String::new(),
            })?;

        if output.status.success() {
            Ok(())
        } else {
            Err(CompileError {
                message: format!("javac failed on {} files", sources.len()),
                output: String::from_utf8_lossy(&output.stderr).into_owned(),
            })
        }
    }
}

/// Every `.java` file below `dir`, sorted.
pub fn java_sources(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut sources = Vec::new();
    let mut pending = vec![dir.to_path_buf()];
    while let Some(current) = pending.pop() {
        for entry in std::fs::read_dir(&current)? {
            let path = entry?.path();
            if path.is_dir() {
                pending.push(path);
            } else if path.extension().is_some_and(|ext| ext == "java") {
                sources.push(path);
            }
        }
    }
    sources.sort();
    Ok(sources)
}

/// Assert that two strings are equal, reporting each differing line.
pub fn assert_content_eq(expected: &str, actual: &str) {
    if expected == actual {
        return;
    }

    let expected_lines: Vec<&str> = expected.split('\n').collect();
    let actual_lines: Vec<&str> = actual.split('\n').collect();

    let mut diff = String::new();
    for i in 0..expected_lines.len().max(actual_lines.len()) {
        let exp = expected_lines.get(i);
        let act = actual_lines.get(i);
        if exp != act {
            diff.push_str(&format!("line {}:\n", i + 1));
            diff.push_str(&format!("  expected: {:?}\n", exp.copied().unwrap_or("<missing>")));
            diff.push_str(&format!("  actual:   {:?}\n", act.copied().unwrap_or("<missing>")));
        }
    }

    panic!("Content mismatch:\n{}", diff);
}

/// Generate the classes of a manifest into a temporary directory.
///
/// The directory will be cleaned up when the returned `TempDir` is dropped.
pub fn generate_to_temp(manifest_toml: &str) -> Result<(tempfile::TempDir, WriteStats)> {
    let manifest: Manifest = manifest_toml.parse()?;
    let lowered = lower(&manifest)?;

    let mut registry = FileRegistry::new(lowered.indent);
    for file in &lowered.files {
        registry.register_java(file);
    }

    let temp_dir = tempfile::TempDir::new()?;
    let stats = registry.write_all(temp_dir.path())?;
    Ok((temp_dir, stats))
}

/// Generate a manifest and check that the output compiles.
pub fn assert_generates_valid_code<C>(manifest_toml: &str, checker: &C) -> Result<()>
where
    C: CompileChecker,
{
    let (temp_dir, _) = generate_to_temp(manifest_toml)?;

    checker.check(temp_dir.path()).map_err(|e| {
        eprintln!("Generated files in {}:", temp_dir.path().display());
        if let Ok(sources) = java_sources(temp_dir.path()) {
            for source in sources {
                eprintln!("  {}", source.display());
            }
        }
        eyre!("Compile check failed: {}", e)
    })?;

    Ok(())
}
