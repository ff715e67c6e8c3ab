use crate::commands;
use crate::config::{Config, Mode};
use ssm_env_core::{Environment, Result};
use ssm_env_store::SsmParameterStore;
use std::io;

/// Run the mode selected by `config` against the environment snapshot `env`
pub async fn execute(config: Config, env: Environment) -> Result<()> {
    let store = SsmParameterStore::new(config.runtime.ssm_settings());
    let options = config.runtime.resolve_options();

    match config.mode {
        Mode::Get { name } => commands::get::execute(&store, &name, &mut io::stdout()).await,
        Mode::Export => commands::export::execute(&env, &store, options, &mut io::stdout()).await,
        Mode::Exec { command } => commands::exec::execute(&env, &store, options, &command).await,
    }
}
