mod commands;
mod summary;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "travelmap", about = "Historical points map and gallery popups")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the features of a data file
    Info(commands::info::InfoArgs),
    /// Report features whose popup cannot open
    Validate(commands::validate::ValidateArgs),
    /// Print or save the default map config
    Config(commands::config::ConfigArgs),
    /// Replay popup events for one feature without a window
    Replay(commands::replay::ReplayArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match &cli.command {
        Commands::Info(args) => commands::info::run(args),
        Commands::Validate(args) => commands::validate::run(args),
        Commands::Config(args) => commands::config::run(args),
        Commands::Replay(args) => commands::replay::run(args),
    }
}
