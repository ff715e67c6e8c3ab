//! Ordered environment snapshots

/// Split a `name=value` entry at the first `=`.
///
/// An entry without `=` is all name and an empty value.
#[must_use]
pub fn split_entry(entry: &[u8]) -> (&[u8], &[u8]) {
    match entry.iter().position(|&b| b == b'=') {
        Some(i) => (&entry[..i], &entry[i + 1..]),
        None => (entry, &entry[entry.len()..]),
    }
}

/// A point-in-time copy of a process environment as `name=value` entries.
///
/// Unlike a map, the snapshot keeps the original order, any duplicate names
/// and the raw bytes of every entry, so that it can be handed back to a child
/// process with untouched entries exactly as they were.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment(Vec<Vec<u8>>);

impl Environment {
    /// Create a new empty environment
    #[must_use]
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Capture the environment of the current process
    #[cfg(unix)]
    #[must_use]
    pub fn capture() -> Self {
        use std::os::unix::ffi::OsStrExt;

        Self(
            std::env::vars_os()
                .map(|(name, value)| {
                    let mut entry = name.as_bytes().to_vec();
                    entry.push(b'=');
                    entry.extend_from_slice(value.as_bytes());
                    entry
                })
                .collect(),
        )
    }

    /// Capture the environment of the current process.
    ///
    /// Entries that are not valid Unicode are converted lossily; the platform
    /// stores them as UTF-16 and only hands them on through a map anyway.
    #[cfg(not(unix))]
    #[must_use]
    pub fn capture() -> Self {
        Self(
            std::env::vars_os()
                .map(|(name, value)| {
                    format!("{}={}", name.to_string_lossy(), value.to_string_lossy()).into_bytes()
                })
                .collect(),
        )
    }

    /// Create from `name=value` entries
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Vec<u8>>,
    {
        Self(entries.into_iter().map(Into::into).collect())
    }

    /// Look up a variable; when a name occurs more than once the last one wins.
    ///
    /// A value that is not valid UTF-8 reads as absent.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars()
            .rev()
            .find(|(n, _)| *n == name.as_bytes())
            .and_then(|(_, value)| std::str::from_utf8(value).ok())
    }

    /// Iterate over raw `(name, value)` pairs in order
    pub fn vars(&self) -> impl DoubleEndedIterator<Item = (&[u8], &[u8])> {
        self.0.iter().map(|entry| split_entry(entry))
    }

    /// Iterate over the raw entries in order
    pub fn entries(&self) -> impl Iterator<Item = &[u8]> {
        self.0.iter().map(Vec::as_slice)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<Vec<u8>>> FromIterator<S> for Environment {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self::from_entries(iter)
    }
}
