//! Init command: write the firmware configuration as a TOML starting point.

use anu_tables_config::ResourceConfig;
use clap::Args;
use std::path::PathBuf;

#[derive(Args)]
pub struct InitArgs {
    /// Output file (prints to stdout if omitted)
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Overwrite an existing file
    #[arg(long)]
    force: bool,
}

pub fn run(args: InitArgs) -> anyhow::Result<()> {
    let config = ResourceConfig::default();

    match args.file {
        Some(path) => {
            if path.exists() && !args.force {
                anyhow::bail!(
                    "{} already exists. Use --force to overwrite.",
                    path.display()
                );
            }
            config.save(&path)?;
            println!("Wrote firmware configuration to {}", path.display());
        }
        None => print!("{}", config.to_toml()?),
    }

    Ok(())
}
