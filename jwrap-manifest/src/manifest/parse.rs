//! Manifest parsing from files and strings.

use std::{collections::HashMap, path::Path, str::FromStr};

use super::{
    Manifest,
    validate::{ParseContext, find_name_spans, find_value_span},
};
use crate::{DocPart, Error, Result, error::SourceContext};

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_manifest(s, "jwrap.toml")
    }
}

impl Manifest {
    /// Parse a jwrap.toml file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_manifest(&content, &path.display().to_string())
    }

    /// Parse a jwrap.toml from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_manifest(content, filename)
    }
}

/// Parse a manifest from content with the given filename for error reporting.
pub fn parse_manifest(content: &str, filename: &str) -> Result<Manifest> {
    let source_ctx = SourceContext::new(content, filename);
    let manifest: Manifest = toml::from_str(content).map_err(|e| source_ctx.parse_error(e))?;
    validate_manifest(&manifest, content, filename)?;
    Ok(manifest)
}

/// Validate the manifest after parsing.
fn validate_manifest(manifest: &Manifest, src: &str, filename: &str) -> Result<()> {
    let ctx = ParseContext::new(src, filename);

    let mut seen: HashMap<&str, usize> = HashMap::new();
    for class in &manifest.classes {
        class.validate(&ctx)?;

        let count = seen.entry(class.name.as_str()).or_default();
        *count += 1;
        if *count > 1 {
            let spans = find_name_spans(src, &class.name);
            return Err(ctx.source_context().report(|src| Error::DuplicateClass {
                src,
                first_span: spans.first().copied(),
                second_span: spans.get(1).copied(),
                name: class.name.clone(),
            }));
        }
    }

    // Member links may point at any class, so they are resolved last
    for class in &manifest.classes {
        let member_docs = class
            .doc
            .iter()
            .chain(class.fields.iter().flat_map(|f| f.doc.iter()))
            .chain(class.constructors.iter().flat_map(|c| c.doc.iter()))
            .chain(class.methods.iter().flat_map(|m| m.doc.iter()));

        for part in member_docs {
            if let DocPart::Member { member } = part {
                if let Err(e) = manifest.resolve_member(member) {
                    return Err(ctx.source_context().report(|source| Error::UnresolvedLink {
                        src: source,
                        span: find_value_span(src, member),
                        link: member.clone(),
                        reason: e.to_string(),
                    }));
                }
            }
        }
    }

    Ok(())
}
