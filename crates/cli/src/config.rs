//! Runtime configuration assembled from the command line and the environment

use crate::cli::Cli;
use ssm_env_core::{Environment, Error, Result, SSM_ENV_VERBOSE_VAR};
use ssm_env_env::ResolveOptions;
use ssm_env_store::SsmSettings;

/// What a single invocation does
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Print the value of one parameter
    Get { name: String },
    /// Print export statements for every referenced variable
    Export,
    /// Replace the process with `command` in the resolved environment
    Exec { command: Vec<String> },
}

/// Settings shared by every mode
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuntimeSettings {
    pub verbose: bool,
    pub region: Option<String>,
    pub endpoint_url: Option<String>,
}

impl RuntimeSettings {
    #[must_use]
    pub fn resolve_options(&self) -> ResolveOptions {
        ResolveOptions {
            verbose: self.verbose,
        }
    }

    #[must_use]
    pub fn ssm_settings(&self) -> SsmSettings {
        SsmSettings {
            region: self.region.clone(),
            endpoint_url: self.endpoint_url.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub mode: Mode,
    pub runtime: RuntimeSettings,
}

impl Config {
    /// Build the configuration for `cli`, reading toggles from `env`
    pub fn from_cli(cli: Cli, env: &Environment) -> Result<Self> {
        let runtime = RuntimeSettings {
            verbose: cli.verbose || env.get(SSM_ENV_VERBOSE_VAR).is_some_and(is_truthy),
            region: cli.region.filter(|r| !r.is_empty()),
            endpoint_url: cli.endpoint_url.filter(|u| !u.is_empty()),
        };

        let mode = match (cli.name.or(cli.parameter_name), cli.export) {
            (Some(name), _) if name.is_empty() => {
                return Err(Error::configuration("parameter name must not be empty"));
            }
            (Some(name), _) => Mode::Get { name },
            (None, true) => Mode::Export,
            (None, false) if cli.command.is_empty() => {
                return Err(Error::configuration(
                    "expected --name, --export or a command to run",
                ));
            }
            (None, false) => Mode::Exec {
                command: cli.command,
            },
        };

        Ok(Self { mode, runtime })
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(value.to_ascii_lowercase().as_str(), "1" | "true" | "yes")
}
