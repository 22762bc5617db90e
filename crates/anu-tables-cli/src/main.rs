//! anu-tables - resource compiler for the anu firmware lookup tables.

mod commands;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "anu-tables")]
#[command(author, version, about = "Anu lookup table compiler", long_about = None)]
struct Cli {
    /// Log at debug level (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile all tables and print a summary
    Build(commands::build::BuildArgs),

    /// Compile and print the values of named tables
    Show(commands::show::ShowArgs),

    /// Write the firmware configuration as TOML
    Init(commands::init::InitArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_level.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Build(args) => commands::build::run(args),
        Commands::Show(args) => commands::show::run(args),
        Commands::Init(args) => commands::init::run(args),
    }
}
