//! Command line front end of ssm-env
//!
//! Three modes share one pipeline:
//!
//! - `ssm-env --name PATH` prints one parameter value.
//! - `ssm-env --export` prints `export` statements for every reference.
//! - `ssm-env COMMAND [ARGS]...` replaces itself with `COMMAND`, every
//!   reference in its environment resolved.

pub mod cli;
pub mod commands;
pub mod config;
pub mod execute;
pub mod platform;

pub use cli::Cli;
pub use config::{Config, Mode, RuntimeSettings};
