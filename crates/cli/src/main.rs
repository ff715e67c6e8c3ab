use clap::Parser;
use ssm_env::{execute, Cli, Config};
use ssm_env_core::Environment;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    color_eyre::config::HookBuilder::default()
        .display_env_section(false)
        .install()?;

    let cli = Cli::parse();

    // Snapshot once; every step works from this copy
    let env = Environment::capture();
    let config = Config::from_cli(cli, &env)?;

    ssm_env_utils::tracing::init(config.runtime.verbose)
        .map_err(|e| eyre::eyre!("failed to initialise logging: {e}"))?;

    execute::execute(config, env).await?;
    Ok(())
}
