//! Code generation building blocks.
//!
//! This module provides the Java code model and the writers it renders into:
//! - [`TypeRef`], [`ClassName`] - Type references subject to import resolution
//! - [`CodeWriter`] - Text sink with [`IndentWriter`] and [`DocCommentWriter`] decorators
//! - [`Indent`] - Indentation configuration
//! - [`Renderable`] - Trait for model nodes that collect imports and render themselves
//!
//! # Model
//!
//! - [`MethodModel`], [`Argument`] - Method and constructor definitions
//! - [`FieldModel`], [`ClassModel`] - Class-level aggregates
//! - [`CodeModel`] - Method bodies and field initializers
//! - [`DocComment`] - Javadoc with type and member cross-references

mod code;
mod code_writer;
mod doc;
mod doc_writer;
mod indent;
mod method;
mod renderable;
mod structure;
mod types;

pub use code::{CodeFragment, CodeModel};
pub use code_writer::{CodeWriter, IndentWriter, SourceWriter};
pub use doc::{DocComment, DocFragment, MemberRef};
pub use doc_writer::DocCommentWriter;
pub use indent::Indent;
pub use method::{Argument, MethodModel, Visibility};
pub use renderable::Renderable;
pub use structure::{ClassKind, ClassModel, FieldModel};
pub use types::{ClassName, PrimitiveType, TypeRef};
