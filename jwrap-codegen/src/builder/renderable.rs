//! Renderable trait for code model nodes.

use super::{CodeWriter, Indent, SourceWriter};
use crate::generation::ImportRegistry;

/// A node of the code model that can take part in a generation unit.
///
/// Generation is a two-pass protocol: first every node contributes the types
/// it mentions to one [`ImportRegistry`], then every node renders itself
/// against that finished registry.
pub trait Renderable {
    /// Register every type this node mentions, in rendering order.
    fn collect_imports(&self, imports: &mut ImportRegistry);

    /// Write this node to the given writer.
    fn render(&self, out: &mut dyn CodeWriter, imports: &ImportRegistry);

    /// Render into a fresh root writer and return the text.
    fn render_to_string(&self, indent: Indent, imports: &ImportRegistry) -> String {
        let mut out = SourceWriter::new(indent);
        self.render(&mut out, imports);
        out.build()
    }
}
