//! The outcome of resolving a batch of references

use indexmap::IndexMap;
use std::ops::Deref;

/// Variable name to value mapping, in the order variables were first resolved.
///
/// Inserting an existing name replaces its value but keeps its position, which
/// gives duplicate references the usual last-one-wins environment semantics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedValues(IndexMap<String, String>);

impl ResolvedValues {
    /// Create a new empty mapping
    #[must_use]
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    /// Set a variable, returning the previous value if any
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(name.into(), value.into())
    }

    /// Get a variable by name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }
}

impl Deref for ResolvedValues {
    type Target = IndexMap<String, String>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ResolvedValues {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
