use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use swivel_core::AppConfig;

mod commands;

use commands::run::RunArgs;

#[derive(Parser)]
#[command(name = "swivel")]
#[command(author, version, about = "A looping panel carousel for the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Flags for the default `run` command
    #[command(flatten)]
    run_args: RunArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the carousel
    Run(RunArgs),
    /// Manage the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Write the default configuration to disk
    Init,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();

    // Load configuration
    let config = AppConfig::load()?;

    match cli.command {
        Some(Commands::Run(args)) => commands::run::run(config, args).await,
        None => commands::run::run(config, cli.run_args).await,
        Some(Commands::Config { action }) => match action {
            ConfigAction::Init => commands::config_init::run(config),
        },
    }
}
