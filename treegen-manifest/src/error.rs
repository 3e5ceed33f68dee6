use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for catalog parsing (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Carries the catalog text and its filename so every error can point back
/// into the document.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    /// Create a new source context.
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    /// Get the source content.
    pub fn src(&self) -> &str {
        &self.src
    }

    /// Get the filename.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a parse error from a toml error.
    pub fn parse_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create a missing primary type error for the scalar `name`.
    pub fn missing_primary_type_error(
        &self,
        name: impl Into<String>,
        span: Option<SourceSpan>,
        source: treegen_core::Error,
    ) -> Box<Error> {
        Box::new(Error::MissingPrimaryType {
            src: self.named_source(),
            span,
            name: name.into(),
            source,
        })
    }

    /// Create a duplicate scalar error.
    pub fn duplicate_scalar_error(
        &self,
        name: impl Into<String>,
        first_span: Option<SourceSpan>,
        second_span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::DuplicateScalar {
            src: self.named_source(),
            first_span,
            second_span,
            name: name.into(),
        })
    }

    /// Create an invalid name error.
    pub fn invalid_name_error(
        &self,
        name: impl Into<String>,
        reason: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::InvalidName {
            src: self.named_source(),
            span,
            name: name.into(),
            reason: reason.into(),
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to parse scalar catalog")]
    #[diagnostic(code(treegen::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("scalar type '{name}' has no primary type")]
    #[diagnostic(
        code(treegen::missing_primary_type),
        help("give '{name}' a non-empty `primary_type`, or a non-empty `name` for an enum")
    )]
    MissingPrimaryType {
        #[source_code]
        src: NamedSource<String>,
        #[label("declared here")]
        span: Option<SourceSpan>,
        name: String,
        #[source]
        source: treegen_core::Error,
    },

    #[error("scalar type '{name}' is declared more than once")]
    #[diagnostic(
        code(treegen::duplicate_scalar),
        help("a name may appear under either [scalars] or [enums], not both")
    )]
    DuplicateScalar {
        #[source_code]
        src: NamedSource<String>,
        #[label("first declared here")]
        first_span: Option<SourceSpan>,
        #[label("declared again here")]
        second_span: Option<SourceSpan>,
        name: String,
    },

    #[error("invalid scalar type name '{name}'")]
    #[diagnostic(
        code(treegen::invalid_name),
        help("{reason}. Use only letters, numbers, and underscores, starting with a letter or underscore.")
    )]
    InvalidName {
        #[source_code]
        src: NamedSource<String>,
        #[label("invalid name")]
        span: Option<SourceSpan>,
        name: String,
        reason: String,
    },
}
