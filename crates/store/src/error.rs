//! Parameter store errors

use std::fmt;

/// Result type alias for parameter store lookups
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Why a lookup failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreErrorKind {
    /// The parameter does not exist
    NotFound,
    /// The caller may not read the parameter or its key
    AccessDenied,
    /// The service rejected the call because of rate limits
    Throttled,
    /// The request never got a response
    Network,
    /// Any other service-side failure
    Service,
}

impl fmt::Display for StoreErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            StoreErrorKind::NotFound => "parameter not found",
            StoreErrorKind::AccessDenied => "access denied",
            StoreErrorKind::Throttled => "throttled",
            StoreErrorKind::Network => "network failure",
            StoreErrorKind::Service => "service failure",
        };
        f.write_str(text)
    }
}

/// A failed lookup of one parameter
#[derive(Debug, Clone, thiserror::Error)]
#[error("{kind} for {parameter}: {message}")]
pub struct StoreError {
    pub kind: StoreErrorKind,
    pub parameter: String,
    pub message: String,
}

impl StoreError {
    #[must_use]
    pub fn new(
        kind: StoreErrorKind,
        parameter: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            parameter: parameter.into(),
            message: message.into(),
        }
    }

    #[must_use]
    pub fn not_found(parameter: impl Into<String>) -> Self {
        Self::new(StoreErrorKind::NotFound, parameter, "no such parameter")
    }

    /// The only kind of failure a default value may stand in for
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.kind == StoreErrorKind::NotFound
    }
}
