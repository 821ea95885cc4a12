use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for manifest operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// The manifest text a diagnostic points into.
///
/// Shared by every nested [`ParseContext`](crate::ParseContext) of one parse.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    pub fn src(&self) -> &str {
        &self.src
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Build a boxed error around a copy of the source.
    ///
    /// ```ignore
    /// let err = ctx.report(|src| Error::DuplicateArgument { src, span, name, method });
    /// ```
    pub fn report(&self, build: impl FnOnce(NamedSource<String>) -> Error) -> Box<Error> {
        Box::new(build(NamedSource::new(&self.filename, self.src.clone())))
    }

    /// Wrap a TOML syntax or shape error, keeping its span.
    pub fn parse_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        self.report(|src| Error::Parse { src, span, source })
    }

    /// A structural problem that has no single place in the source.
    pub fn validation_error(&self, message: impl Into<String>) -> Box<Error> {
        let message = message.into();
        self.report(|src| Error::Validation {
            src,
            span: None,
            message,
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("pass the manifest path with '--config <path>'"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse jwrap.toml")]
    #[diagnostic(code(jwrap::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("{message}")]
    #[diagnostic(code(jwrap::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },

    #[error("'{name}' is a Java reserved keyword")]
    #[diagnostic(
        code(jwrap::reserved_keyword),
        help("rename the {context}, e.g. '{name}Value' or '{name}_'")
    )]
    ReservedKeyword {
        #[source_code]
        src: NamedSource<String>,
        #[label("reserved keyword used here")]
        span: Option<SourceSpan>,
        name: String,
        context: String,
    },

    #[error("invalid {context} name '{name}'")]
    #[diagnostic(
        code(jwrap::invalid_identifier),
        help(
            "{reason}. Use only letters, digits, underscores and dollar signs, not starting with a digit."
        )
    )]
    InvalidIdentifier {
        #[source_code]
        src: NamedSource<String>,
        #[label("invalid identifier")]
        span: Option<SourceSpan>,
        name: String,
        context: String,
        reason: String,
    },

    #[error("invalid type '{ty}' for {context}")]
    #[diagnostic(
        code(jwrap::invalid_type),
        help(
            "{reason}. Use a primitive keyword or a qualified class name, optionally followed by '[]'"
        )
    )]
    InvalidType {
        #[source_code]
        src: NamedSource<String>,
        #[label("invalid type")]
        span: Option<SourceSpan>,
        ty: String,
        context: String,
        reason: String,
    },

    #[error("class '{name}' is declared more than once")]
    #[diagnostic(
        code(jwrap::duplicate_class),
        help("every class must have a unique qualified name")
    )]
    DuplicateClass {
        #[source_code]
        src: NamedSource<String>,
        #[label("first declared here")]
        first_span: Option<SourceSpan>,
        #[label("declared again here")]
        second_span: Option<SourceSpan>,
        name: String,
    },

    #[error("duplicate argument '{name}' in {method}")]
    #[diagnostic(
        code(jwrap::duplicate_argument),
        help("argument names must be unique within one method")
    )]
    DuplicateArgument {
        #[source_code]
        src: NamedSource<String>,
        #[label("duplicate argument")]
        span: Option<SourceSpan>,
        name: String,
        method: String,
    },

    #[error("cannot resolve member link '{link}'")]
    #[diagnostic(
        code(jwrap::unresolved_link),
        help(
            "{reason}. Member links take the form 'com.example.Class#method' or 'com.example.Class#method(int, java.lang.String)'"
        )
    )]
    UnresolvedLink {
        #[source_code]
        src: NamedSource<String>,
        #[label("unresolved link")]
        span: Option<SourceSpan>,
        link: String,
        reason: String,
    },
}
