//! In-memory parameter store

use crate::error::{StoreError, StoreErrorKind, StoreResult};
use crate::ParameterStore;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

/// A parameter store answering from a fixed table.
///
/// Paths that were never registered are reported as not found. Every lookup is
/// recorded so callers can check how often, and in which order, the store was
/// queried.
#[derive(Debug, Default)]
pub struct MemoryParameterStore {
    answers: HashMap<String, Result<String, StoreErrorKind>>,
    calls: Mutex<Vec<String>>,
}

impl MemoryParameterStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `value` for `path`
    #[must_use]
    pub fn with_parameter(mut self, path: impl Into<String>, value: impl Into<String>) -> Self {
        self.answers.insert(path.into(), Ok(value.into()));
        self
    }

    /// Fail lookups of `path` with `kind`
    #[must_use]
    pub fn with_error(mut self, path: impl Into<String>, kind: StoreErrorKind) -> Self {
        self.answers.insert(path.into(), Err(kind));
        self
    }

    /// The paths looked up so far, in call order
    #[must_use]
    pub fn calls(&self) -> Vec<String> {
        match self.calls.lock() {
            Ok(calls) => calls.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

#[async_trait]
impl ParameterStore for MemoryParameterStore {
    async fn get_parameter(&self, path: &str) -> StoreResult<String> {
        match self.calls.lock() {
            Ok(mut calls) => calls.push(path.to_string()),
            Err(poisoned) => poisoned.into_inner().push(path.to_string()),
        }

        match self.answers.get(path) {
            Some(Ok(value)) => Ok(value.clone()),
            Some(Err(kind)) => Err(StoreError::new(*kind, path, "scripted failure")),
            None => Err(StoreError::not_found(path)),
        }
    }
}
