use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "ssm-env")]
#[command(
    about = "Run a command with ssm:// references in its environment resolved from the AWS Parameter Store",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    /// Print the value of the parameter at PATH and exit
    #[arg(long, value_name = "PATH", conflicts_with_all = ["export", "command"])]
    pub name: Option<String>,

    /// Deprecated alias of --name
    #[arg(
        long = "parameter-name",
        value_name = "PATH",
        hide = true,
        conflicts_with_all = ["name", "export", "command"]
    )]
    pub parameter_name: Option<String>,

    /// Print an export statement for every referenced variable and exit
    #[arg(long, conflicts_with = "command")]
    pub export: bool,

    /// Report every lookup and fallback
    #[arg(short, long)]
    pub verbose: bool,

    /// AWS region of the parameter store
    #[arg(long, value_name = "REGION")]
    pub region: Option<String>,

    /// Endpoint of the parameter store service
    #[arg(long, value_name = "URL")]
    pub endpoint_url: Option<String>,

    /// Command to run, followed by its arguments
    #[arg(
        value_name = "COMMAND",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub command: Vec<String>,
}
