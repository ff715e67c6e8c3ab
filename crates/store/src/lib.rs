//! Parameter store access for ssm-env
//!
//! The rest of the workspace only sees the [`ParameterStore`] capability: a
//! single decrypted lookup by path that tells "not found" apart from every
//! other failure. [`SsmParameterStore`] talks to AWS Systems Manager;
//! [`MemoryParameterStore`] serves scripted answers.

mod error;
mod memory;
mod ssm;

pub use error::{StoreError, StoreErrorKind, StoreResult};
pub use memory::MemoryParameterStore;
pub use ssm::{SsmParameterStore, SsmSettings};

use async_trait::async_trait;

/// A key-value store of (possibly encrypted) parameters
#[async_trait]
pub trait ParameterStore: Send + Sync {
    /// Fetch the decrypted value of the parameter at `path`
    ///
    /// # Returns
    /// * `Ok(value)` - the parameter exists
    /// * `Err(e)` with `e.is_not_found()` - there is no parameter at `path`
    /// * `Err(e)` otherwise - access, network, throttling or service failure
    async fn get_parameter(&self, path: &str) -> StoreResult<String>;
}
