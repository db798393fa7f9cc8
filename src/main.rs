//! promptline: prints a shell status prompt with the time, user and host,
//! a shortened working directory and the current Git branch.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use promptline::commands::{
    handle_path_command, handle_print_config_command, handle_prompt_command,
};
use promptline::core::{init_logging, Config};
use promptline::prompt::Environment;

/// Shell status prompt with Git branch state and smart path shortening
#[derive(Parser, Debug)]
#[command(name = "promptline", version, about)]
struct Cli {
    /// Maximum path length in characters (0 disables shortening)
    #[arg(long, short = 'l', global = true)]
    max_length: Option<usize>,

    /// Disable colors (also disabled when NO_COLOR is set)
    #[arg(long, global = true)]
    no_color: bool,

    /// Config file to use instead of the default location
    #[arg(long, short = 'c', global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print a prettified path (defaults to the working directory)
    Path {
        /// Path to shorten
        path: Option<PathBuf>,
    },
    /// Print the effective configuration as TOML
    PrintConfig,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(max_length) = cli.max_length {
        config.max_path_length = max_length;
    }

    let env = Environment::capture();

    match cli.command {
        None => handle_prompt_command(&config, &env, cli.no_color).await,
        Some(Commands::Path { path }) => handle_path_command(&config, &env, path.as_deref()),
        Some(Commands::PrintConfig) => handle_print_config_command(&config),
    }
}
