//! Generation units and file output.
//!
//! - [`ImportRegistry`] - Per-unit import resolution
//! - [`JavaFile`] - Compilation unit rendering (package, imports, class)
//! - [`FileRegistry`] - Rendered files, preview and writing

mod imports;
mod java_file;
mod registry;

pub use imports::{ImportLine, ImportRegistry};
pub use java_file::JavaFile;
pub use registry::{FileEntry, FileRegistry, PreviewEntry, WriteStats};
