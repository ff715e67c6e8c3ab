//! Core domain types for `ssm-env`.
//!
//! - **`environment`**: the ordered `name=value` snapshot a batch is taken from
//!   and composed back into
//! - **`resolved`**: the variable name to value mapping produced by resolution
//! - **`file_mode`**: permission bits applied to destination files

pub mod environment;
pub mod file_mode;
pub mod resolved;

pub use environment::*;
pub use file_mode::*;
pub use resolved::*;
