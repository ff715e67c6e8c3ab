//! Core error type definitions

use std::fmt;
use std::path::PathBuf;

/// Result type alias for ssm-env operations
pub type Result<T> = std::result::Result<T, Error>;

/// The distinct ways a reference can fail to parse
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// The value is not a valid URI
    MalformedUri,
    /// The URI names a host; references must use `ssm:///path`
    HostNotAllowed,
    /// The URI has no parameter path
    MissingPath,
    /// The query string is not valid `application/x-www-form-urlencoded`
    InvalidQuery,
    /// The `template` option does not compile
    InvalidTemplate,
    /// The `chmod` option is not an octal permission mask
    InvalidFileMode,
    /// The `destination` option could not be home-expanded
    HomeExpansion,
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            ParseErrorKind::MalformedUri => "malformed uri",
            ParseErrorKind::HostNotAllowed => "host not allowed",
            ParseErrorKind::MissingPath => "missing parameter path",
            ParseErrorKind::InvalidQuery => "invalid query syntax",
            ParseErrorKind::InvalidTemplate => "invalid template syntax",
            ParseErrorKind::InvalidFileMode => "invalid chmod syntax",
            ParseErrorKind::HomeExpansion => "home directory expansion failed",
        };
        f.write_str(text)
    }
}

/// Core error type for ssm-env operations using thiserror
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An environment value with the `ssm:` prefix is not a valid reference
    ReferenceParse {
        variable: String,
        kind: ParseErrorKind,
        message: String,
    },

    /// The parameter does not exist and neither a default nor a destination
    /// file could stand in for it
    NoDefault {
        variable: String,
        parameter: String,
        reason: String,
    },

    /// The parameter store failed for a reason other than "not found"
    Store {
        variable: Option<String>,
        parameter: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A template that compiled could not be rendered
    Format { variable: String, message: String },

    /// File system operations
    FileSystem {
        path: PathBuf,
        operation: String,
        #[source]
        source: std::io::Error,
    },

    /// Program lookup or launch errors
    CommandExecution {
        command: String,
        args: Vec<String>,
        message: String,
    },

    /// Configuration errors
    Configuration { message: String },
}

impl Error {
    /// The environment variable the error is attributed to, if any
    #[must_use]
    pub fn variable(&self) -> Option<&str> {
        match self {
            Error::ReferenceParse { variable, .. }
            | Error::NoDefault { variable, .. }
            | Error::Format { variable, .. } => Some(variable),
            Error::Store { variable, .. } => variable.as_deref(),
            _ => None,
        }
    }

    /// The parse error kind, when this is a parse error
    #[must_use]
    pub fn parse_kind(&self) -> Option<ParseErrorKind> {
        match self {
            Error::ReferenceParse { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}
