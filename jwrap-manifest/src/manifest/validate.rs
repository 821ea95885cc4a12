//! Validation context and utilities for manifest parsing.

use std::sync::Arc;

use jwrap_core::{is_java_keyword, validate_identifier};
use miette::SourceSpan;

use crate::{Error, Result, TypeSpec, error::SourceContext};

/// Parsing and validation context that carries source information.
///
/// This struct encapsulates the source content, filename, and current path
/// through the manifest (class, then member), so nested validation can
/// report where a problem is.
///
/// # Example
///
/// ```ignore
/// let ctx = ParseContext::new(src, "jwrap.toml");
/// ctx.validate_qualified_name("com.example.Greeter", "class")?;
///
/// let method = ctx.push("Greeter").push("get");
/// method.validate_name("id", "argument")?;
/// ```
#[derive(Debug, Clone)]
pub struct ParseContext<'a> {
    /// Source context for error reporting (shared across nested contexts)
    source: Arc<SourceContext>,
    /// Path segments for nested validation (e.g., ["Greeter", "get"])
    path: Vec<&'a str>,
}

impl<'a> ParseContext<'a> {
    /// Create a new parse context with the given source and filename.
    pub fn new(src: &str, filename: &str) -> Self {
        Self {
            source: Arc::new(SourceContext::new(src, filename)),
            path: Vec::new(),
        }
    }

    /// Get the source content.
    pub fn src(&self) -> &str {
        self.source.src()
    }

    /// Get the filename.
    pub fn filename(&self) -> &str {
        self.source.filename()
    }

    /// Get the source context for error creation.
    pub fn source_context(&self) -> &SourceContext {
        &self.source
    }

    /// Push a path segment and return a new context.
    pub fn push(&self, segment: &'a str) -> Self {
        let mut new_path = self.path.clone();
        new_path.push(segment);
        Self {
            source: Arc::clone(&self.source),
            path: new_path,
        }
    }

    /// Get the current path joined with dots.
    pub fn path_string(&self) -> String {
        self.path.join(".")
    }

    /// Get a context description for error messages.
    ///
    /// For example: "argument in 'Greeter.get'" or just "class" if no path.
    pub fn context_for(&self, kind: &str) -> String {
        if self.path.is_empty() {
            kind.to_string()
        } else {
            format!("{} in '{}'", kind, self.path_string())
        }
    }

    /// Find the span of a name in the source.
    pub fn find_span(&self, name: &str) -> Option<SourceSpan> {
        find_name_span(self.source.src(), name)
    }

    /// Validate that a name is a valid Java identifier.
    ///
    /// Checks for reserved keywords and valid identifier format.
    pub fn validate_name(&self, name: &str, kind: &str) -> Result<()> {
        let span = self.find_span(name);
        if is_java_keyword(name) {
            return Err(self.keyword_error(name, kind, span));
        }
        match validate_identifier(name) {
            Some(reason) => Err(self.identifier_error(name, kind, reason, span)),
            None => Ok(()),
        }
    }

    /// Validate every segment of a dot-separated name.
    pub fn validate_qualified_name(&self, name: &str, kind: &str) -> Result<()> {
        let span = find_name_span(self.src(), name).or_else(|| find_value_span(self.src(), name));

        if let Some(keyword) = name.split('.').find(|segment| is_java_keyword(segment)) {
            return Err(self.keyword_error(keyword, kind, span));
        }
        match jwrap_core::validate_qualified_name(name) {
            Some(reason) => Err(self.identifier_error(name, kind, reason, span)),
            None => Ok(()),
        }
    }

    /// Validate a type reference.
    pub fn validate_type(&self, ty: &TypeSpec, kind: &str) -> Result<()> {
        let Some(reason) = ty.check() else {
            return Ok(());
        };
        let span = find_value_span(self.src(), ty.raw());
        let context = self.context_for(kind);
        Err(self.source.report(|src| Error::InvalidType {
            src,
            span,
            ty: ty.raw().to_string(),
            context,
            reason,
        }))
    }

    fn keyword_error(&self, name: &str, kind: &str, span: Option<SourceSpan>) -> Box<Error> {
        let context = self.context_for(kind);
        self.source.report(|src| Error::ReservedKeyword {
            src,
            span,
            name: name.to_string(),
            context,
        })
    }

    fn identifier_error(
        &self,
        name: &str,
        kind: &str,
        reason: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        let context = self.context_for(kind);
        self.source.report(|src| Error::InvalidIdentifier {
            src,
            span,
            name: name.to_string(),
            context,
            reason: reason.into(),
        })
    }
}

/// Find the span of a name in the TOML source
/// Searches for `name = "value"` in its common spellings
pub(crate) fn find_name_span(src: &str, name: &str) -> Option<SourceSpan> {
    find_name_spans(src, name).into_iter().next()
}

/// Find every `name = "value"` occurrence of a name, in source order.
pub(crate) fn find_name_spans(src: &str, name: &str) -> Vec<SourceSpan> {
    let patterns = [
        format!("name = \"{}\"", name),
        format!("name = '{}'", name),
        format!("name=\"{}\"", name),
    ];

    let mut spans: Vec<SourceSpan> = patterns
        .iter()
        .flat_map(|pattern| {
            // The name starts after the opening quote
            let skip = pattern.len() - name.len() - 1;
            src.match_indices(pattern.as_str())
                .map(move |(pos, _)| SourceSpan::from((pos + skip, name.len())))
        })
        .collect();
    spans.sort_by_key(|span| span.offset());
    spans
}

/// Find the span of a quoted string value in the TOML source
pub(crate) fn find_value_span(src: &str, value: &str) -> Option<SourceSpan> {
    // No fallback - better to have no span than point to wrong location
    [format!("\"{}\"", value), format!("'{}'", value)]
        .iter()
        .find_map(|pattern| src.find(pattern.as_str()))
        .map(|pos| SourceSpan::from((pos + 1, value.len())))
}
