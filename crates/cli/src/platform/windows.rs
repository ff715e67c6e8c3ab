use ssm_env_core::{Environment, Error, Result};
use std::convert::Infallible;
use std::path::Path;
use std::process::Command;

/// Run `program` to completion and exit with its status.
///
/// There is no exec on this platform, so the child runs as a subprocess with
/// inherited standard streams and the entries of `environment`. The platform
/// keeps one value per name, so entry order is not preserved here.
pub fn launch(
    program: &Path,
    arg0: &str,
    args: &[String],
    environment: &Environment,
) -> Result<Infallible> {
    tracing::debug!(program = %program.display(), "Spawning process");

    let status = Command::new(program)
        .args(args)
        .env_clear()
        .envs(environment.vars().map(|(name, value)| {
            (
                String::from_utf8_lossy(name).into_owned(),
                String::from_utf8_lossy(value).into_owned(),
            )
        }))
        .status()
        .map_err(|e| {
            Error::command_execution(
                arg0,
                args.to_vec(),
                format!("failed to start {}: {e}", program.display()),
            )
        })?;

    std::process::exit(status.code().unwrap_or(1))
}
