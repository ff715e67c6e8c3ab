//! Display implementations for error types

use super::types::Error;
use std::fmt;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ReferenceParse {
                variable,
                kind,
                message,
            } => {
                write!(
                    f,
                    "environment variable {variable} has an invalid ssm reference ({kind}): {message}"
                )
            }
            Error::NoDefault {
                variable,
                parameter,
                reason,
            } => {
                write!(
                    f,
                    "failed to get parameter {parameter} for {variable}, parameter not found and {reason}"
                )
            }
            Error::Store {
                variable: Some(variable),
                parameter,
                source,
            } => {
                write!(
                    f,
                    "failed to get parameter {parameter} for {variable}, {source}"
                )
            }
            Error::Store {
                variable: None,
                parameter,
                source,
            } => {
                write!(f, "failed to get parameter {parameter}, {source}")
            }
            Error::Format { variable, message } => {
                write!(f, "failed to format value of {variable} with template: {message}")
            }
            Error::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "failed to {} file {}, {}",
                    operation,
                    path.display(),
                    source
                )
            }
            Error::CommandExecution {
                command,
                args,
                message,
            } => {
                let args_str = args.join(" ");
                if args_str.is_empty() {
                    write!(f, "command '{command}' failed: {message}")
                } else {
                    write!(f, "command '{command} {args_str}' failed: {message}")
                }
            }
            Error::Configuration { message } => {
                write!(f, "configuration error: {message}")
            }
        }
    }
}
