//! Error types for ssm-env operations

mod builders;
mod display;
mod types;

pub use types::{Error, ParseErrorKind, Result};
