//! Core utilities and types for the jwrap Java source generator.
//!
//! This crate provides fundamental types and utilities used across
//! the jwrap crates.

mod file;
mod names;

// File operations
pub use file::{File, WriteResult};
// Java naming utilities
pub use names::{
    JAVA_KEYWORDS, PRIMITIVE_KEYWORDS, is_java_keyword, is_primitive_keyword, package_dir,
    split_qualified, validate_identifier, validate_qualified_name,
};
