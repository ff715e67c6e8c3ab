//! Core domain types, errors, and constants for `ssm-env`.
//!
//! ## Key Components
//!
//! - **`errors`**: the `Error` enum and `Result` alias shared by every crate in
//!   the workspace. Every failure is fatal for the invocation, so the enum
//!   exists to carry enough context (variable, parameter, path) to explain it.
//! - **`types`**: the ordered `Environment` snapshot, the `ResolvedValues`
//!   mapping and the `FileMode` newtype.
//! - **`constants`**: the reference scheme and the environment variables the
//!   tool itself reads.

pub mod constants;
pub mod errors;
pub mod types;

pub use self::{
    constants::*,
    errors::{Error, ParseErrorKind, Result},
    types::*,
};
