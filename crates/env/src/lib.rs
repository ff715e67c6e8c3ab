//! Secret reference resolution for ssm-env
//!
//! An environment value such as
//! `ssm:///app/db-password?default=changeme&destination=~/.pgpass&chmod=600`
//! names a parameter to fetch instead of holding the value itself. This crate
//! turns a snapshot of the environment into one where every such reference is
//! replaced, in five steps:
//!
//! 1. [`references_from_environment`] parses every `ssm:` value into a
//!    [`Reference`], failing the whole batch on the first bad one.
//! 2. [`Resolver`] looks each reference up in a [`ParameterStore`], applying
//!    templates and the not-found fallback.
//! 3. [`write_destinations`] stores values that have a `destination`.
//! 4. [`substitute_destinations`] swaps those values for the file path.
//! 5. [`compose`] writes the values back into the original entry order.
//!
//! [`inject`] runs all five.
//!
//! [`ParameterStore`]: ssm_env_store::ParameterStore

pub mod compose;
pub mod destination;
pub mod format;
pub mod inject;
pub mod reference;
pub mod resolver;

pub use compose::{compose, substitute_destinations};
pub use destination::write_destinations;
pub use format::{Template, ValueFormat};
pub use inject::{inject, Injection};
pub use reference::{is_reference, references_from_environment, Reference};
pub use resolver::{ResolveOptions, Resolver};
