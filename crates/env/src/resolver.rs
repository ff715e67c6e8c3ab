//! Resolution of references against a parameter store

use crate::reference::Reference;
use ssm_env_core::{Error, ResolvedValues, Result};
use ssm_env_store::ParameterStore;
use std::fs;
use std::io;

/// Log at `info` when verbose, otherwise at `debug`
macro_rules! report {
    ($verbose:expr, $($arg:tt)+) => {
        if $verbose {
            tracing::info!($($arg)+)
        } else {
            tracing::debug!($($arg)+)
        }
    };
}

/// Settings that affect how a batch is resolved
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolveOptions {
    /// Report every lookup and fallback at `info` instead of `debug`
    pub verbose: bool,
}

/// Resolves a batch of references, one store lookup per reference.
///
/// Lookups run sequentially in batch order. A parameter that does not exist
/// falls back to the reference's `default`, then to the current content of its
/// `destination` file. Every other store failure aborts the batch.
pub struct Resolver<'a, S: ParameterStore + ?Sized> {
    store: &'a S,
    options: ResolveOptions,
}

impl<'a, S: ParameterStore + ?Sized> Resolver<'a, S> {
    pub fn new(store: &'a S, options: ResolveOptions) -> Self {
        Self { store, options }
    }

    /// Resolve `batch` into one value per variable.
    ///
    /// When a variable occurs more than once the last reference wins.
    pub async fn resolve(&self, batch: &[Reference]) -> Result<ResolvedValues> {
        let mut values = ResolvedValues::new();

        for reference in batch {
            // Seed with the default so the variable is defined whatever happens next
            let seed = match reference.default() {
                Some(default) => reference.format(default)?,
                None => String::new(),
            };
            values.insert(reference.variable(), seed);

            let value = self.resolve_one(reference).await?;
            values.insert(reference.variable(), value);
        }

        Ok(values)
    }

    async fn resolve_one(&self, reference: &Reference) -> Result<String> {
        match self.store.get_parameter(reference.parameter()).await {
            Ok(raw) => {
                report!(
                    self.options.verbose,
                    variable = %reference.variable(),
                    parameter = %reference.parameter(),
                    "Resolved parameter"
                );
                reference.format(&raw)
            }
            Err(e) if e.is_not_found() => {
                report!(
                    self.options.verbose,
                    variable = %reference.variable(),
                    parameter = %reference.parameter(),
                    "Parameter not found, trying fallback"
                );
                self.fallback(reference)
            }
            Err(e) => Err(Error::store(reference.variable(), reference.parameter(), e)),
        }
    }

    fn fallback(&self, reference: &Reference) -> Result<String> {
        if let Some(default) = reference.default() {
            report!(
                self.options.verbose,
                variable = %reference.variable(),
                "Using default value"
            );
            return reference.format(default);
        }

        let Some(destination) = reference.destination() else {
            return Err(Error::no_default(
                reference.variable(),
                reference.parameter(),
                "no default value available",
            ));
        };

        match fs::read_to_string(destination) {
            Ok(content) => {
                report!(
                    self.options.verbose,
                    variable = %reference.variable(),
                    destination = %destination.display(),
                    "Using existing destination content as default"
                );
                Ok(content)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Err(Error::no_default(
                reference.variable(),
                reference.parameter(),
                "destination file does not exist to provide default value",
            )),
            Err(e) => Err(Error::file_system(destination, "read", e)),
        }
    }
}
