//! Builder methods for creating errors with context

use super::types::{Error, ParseErrorKind};
use std::path::PathBuf;

impl Error {
    /// Create a reference parse error
    #[must_use]
    pub fn reference_parse(
        variable: impl Into<String>,
        kind: ParseErrorKind,
        message: impl Into<String>,
    ) -> Self {
        Error::ReferenceParse {
            variable: variable.into(),
            kind,
            message: message.into(),
        }
    }

    /// Create a "not found and no default" error
    #[must_use]
    pub fn no_default(
        variable: impl Into<String>,
        parameter: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Error::NoDefault {
            variable: variable.into(),
            parameter: parameter.into(),
            reason: reason.into(),
        }
    }

    /// Create a parameter store error for the lookup behind a variable
    #[must_use]
    pub fn store(
        variable: impl Into<String>,
        parameter: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Error::Store {
            variable: Some(variable.into()),
            parameter: parameter.into(),
            source: source.into(),
        }
    }

    /// Create a parameter store error for a direct lookup by path
    #[must_use]
    pub fn parameter_lookup(
        parameter: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Error::Store {
            variable: None,
            parameter: parameter.into(),
            source: source.into(),
        }
    }

    /// Create a template rendering error
    #[must_use]
    pub fn format(variable: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Format {
            variable: variable.into(),
            message: message.into(),
        }
    }

    /// Create a file system error with context
    #[must_use]
    pub fn file_system(
        path: impl Into<PathBuf>,
        operation: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        Error::FileSystem {
            path: path.into(),
            operation: operation.into(),
            source,
        }
    }

    /// Create a command execution error
    #[must_use]
    pub fn command_execution(
        command: impl Into<String>,
        args: Vec<String>,
        message: impl Into<String>,
    ) -> Self {
        Error::CommandExecution {
            command: command.into(),
            args,
            message: message.into(),
        }
    }

    /// Create a configuration error
    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        Error::Configuration {
            message: message.into(),
        }
    }
}
