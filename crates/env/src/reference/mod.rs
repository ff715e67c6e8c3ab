//! Secret references embedded in environment values

mod parser;

use crate::format::ValueFormat;
use ssm_env_core::{
    Environment, Error, FileMode, ParseErrorKind, Result, SSM_REFERENCE_PREFIX,
};
use std::path::{Path, PathBuf};
use std::str;

/// Whether a raw environment value designates a secret
#[must_use]
pub fn is_reference(value: &[u8]) -> bool {
    value.starts_with(SSM_REFERENCE_PREFIX.as_bytes())
}

/// Parse every reference in `env`, in environment order.
///
/// Values without the `ssm:` prefix are skipped and never decoded. The first
/// value that fails to parse fails the whole batch, including a reference that
/// is not valid UTF-8.
pub fn references_from_environment(env: &Environment) -> Result<Vec<Reference>> {
    env.vars()
        .filter(|(_, value)| is_reference(value))
        .map(|(name, value)| match (str::from_utf8(name), str::from_utf8(value)) {
            (Ok(name), Ok(value)) => Reference::parse(name, value, env),
            _ => Err(Error::reference_parse(
                String::from_utf8_lossy(name),
                ParseErrorKind::MalformedUri,
                "reference is not valid UTF-8",
            )),
        })
        .collect()
}

/// One parsed secret reference.
///
/// Built once from an environment entry and never changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    variable: String,
    parameter: String,
    default: Option<String>,
    destination: Option<PathBuf>,
    file_mode: Option<FileMode>,
    format: ValueFormat,
}

impl Reference {
    /// Parse the value of the environment variable `variable`.
    ///
    /// `$NAME` and `${NAME}` inside `raw` are first expanded against `env`, so
    /// a default or destination may be built from other variables.
    pub fn parse(variable: &str, raw: &str, env: &Environment) -> Result<Self> {
        parser::parse(variable, raw, env)
    }

    /// Name of the environment variable holding the reference
    #[must_use]
    pub fn variable(&self) -> &str {
        &self.variable
    }

    /// Path of the parameter in the store
    #[must_use]
    pub fn parameter(&self) -> &str {
        &self.parameter
    }

    /// Value to use when the parameter does not exist
    #[must_use]
    pub fn default(&self) -> Option<&str> {
        self.default.as_deref()
    }

    /// File the value is written to
    #[must_use]
    pub fn destination(&self) -> Option<&Path> {
        self.destination.as_deref()
    }

    /// Permission bits applied to the destination after writing
    #[must_use]
    pub fn file_mode(&self) -> Option<FileMode> {
        self.file_mode
    }

    #[must_use]
    pub fn value_format(&self) -> &ValueFormat {
        &self.format
    }

    /// Apply this reference's template, if any, to `raw`
    pub fn format(&self, raw: &str) -> Result<String> {
        self.format
            .apply(raw)
            .map_err(|message| Error::format(&self.variable, message))
    }
}
