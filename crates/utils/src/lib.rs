//! Shared utilities for ssm-env
//!
//! Small helpers used by more than one crate in the workspace: logging setup
//! and `~` expansion of paths.

pub mod paths;
pub mod tracing;

pub use paths::*;
