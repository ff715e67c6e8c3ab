//! The full resolve-and-substitute pipeline

use crate::compose::{compose, substitute_destinations};
use crate::destination::write_destinations;
use crate::reference::{references_from_environment, Reference};
use crate::resolver::{ResolveOptions, Resolver};
use ssm_env_core::{Environment, ResolvedValues, Result};
use ssm_env_store::ParameterStore;

/// Result of running [`inject`] over an environment snapshot
#[derive(Debug)]
pub struct Injection {
    /// The references found, in environment order
    pub references: Vec<Reference>,
    /// Final value per variable; destination-backed variables hold their path
    pub values: ResolvedValues,
    /// The snapshot with every reference replaced in place
    pub environment: Environment,
}

/// Parse, resolve, write destinations, substitute and compose.
///
/// Nothing is written unless every reference parsed and resolved.
pub async fn inject<S: ParameterStore + ?Sized>(
    env: &Environment,
    store: &S,
    options: ResolveOptions,
) -> Result<Injection> {
    let references = references_from_environment(env)?;
    tracing::debug!(count = references.len(), "Found parameter references");

    let mut values = Resolver::new(store, options).resolve(&references).await?;
    write_destinations(&references, &values)?;
    substitute_destinations(&references, &mut values);
    let environment = compose(env, &values);

    Ok(Injection {
        references,
        values,
        environment,
    })
}
