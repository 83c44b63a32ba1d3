use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for stencil operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Errors raised while rendering or configuring a renderer.
///
/// Render errors signal programmer mistakes in the input tree or in the use
/// of a builder. They are raised before any output is returned.
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("{renderer} renderer cannot render a {kind}")]
    #[diagnostic(
        code(stencil::unsupported_value_kind),
        help("build the tree from scalars, raw expressions, lists and maps for this renderer")
    )]
    UnsupportedValueKind {
        kind: &'static str,
        renderer: &'static str,
    },

    #[error("invalid access to documentation block: {message}")]
    #[diagnostic(
        code(stencil::invalid_access),
        help("use the append methods (paragraph, param, returns, tag) in declaration order")
    )]
    InvalidAccess { message: String },

    #[error("call '{name}' cannot be nested inside a collection in the {dialect} dialect")]
    #[diagnostic(
        code(stencil::unsupported_nesting),
        help("move the call to a top-level argument or render it beforehand as a raw expression")
    )]
    UnsupportedNesting { name: String, dialect: &'static str },

    #[error("failed to parse render configuration")]
    #[diagnostic(code(stencil::config))]
    Config {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },
}

impl Error {
    /// Create an unsupported value kind error.
    pub fn unsupported_value_kind(kind: &'static str, renderer: &'static str) -> Box<Self> {
        Box::new(Error::UnsupportedValueKind { kind, renderer })
    }

    /// Create an invalid access error.
    pub fn invalid_access(message: impl Into<String>) -> Box<Self> {
        Box::new(Error::InvalidAccess {
            message: message.into(),
        })
    }

    /// Create an unsupported nesting error.
    pub fn unsupported_nesting(name: impl Into<String>, dialect: &'static str) -> Box<Self> {
        Box::new(Error::UnsupportedNesting {
            name: name.into(),
            dialect,
        })
    }

    /// Create a configuration parse error from a toml error with source context
    pub fn config(source: toml::de::Error, src: &str, filename: &str) -> Box<Self> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Config {
            src: NamedSource::new(filename, src.to_string()),
            span,
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use miette::Diagnostic;

    use super::*;

    #[test]
    fn test_unsupported_value_kind_message() {
        let err = Error::unsupported_value_kind("named call", "value");
        assert_eq!(err.to_string(), "value renderer cannot render a named call");
        assert_eq!(
            err.code().map(|c| c.to_string()),
            Some("stencil::unsupported_value_kind".to_string())
        );
    }

    #[test]
    fn test_unsupported_nesting_message() {
        let err = Error::unsupported_nesting("Translation", "attribute");
        assert_eq!(
            err.to_string(),
            "call 'Translation' cannot be nested inside a collection in the attribute dialect"
        );
    }

    #[test]
    fn test_invalid_access_message() {
        let err = Error::invalid_access("return tag already set");
        assert!(matches!(*err, Error::InvalidAccess { .. }));
        assert!(err.to_string().ends_with("return tag already set"));
    }
}
