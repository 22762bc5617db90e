//! Shared CLI helpers used across multiple commands.

use anu_tables_config::ResourceConfig;
use anu_tables_registry::{CompileOptions, TableRegistry, compile};
use clap::Args;
use std::path::PathBuf;

/// Options shared by every command that runs a compilation.
#[derive(Args)]
pub struct CompileArgs {
    /// TOML file overriding the firmware configuration
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Directory raw sample paths are resolved against
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub samples: PathBuf,

    /// Leave raw sample tables out
    #[arg(long)]
    pub skip_samples: bool,
}

impl CompileArgs {
    /// Load the configuration: the override file if given, else the firmware defaults.
    pub fn load_config(&self) -> anyhow::Result<ResourceConfig> {
        match &self.config {
            Some(path) => {
                tracing::info!(path = %path.display(), "loading configuration");
                Ok(ResourceConfig::load(path)?)
            }
            None => Ok(ResourceConfig::default()),
        }
    }

    /// Load the configuration and compile it.
    pub fn compile(&self) -> anyhow::Result<TableRegistry> {
        let config = self.load_config()?;
        let options = CompileOptions {
            sample_root: self.samples.clone(),
            skip_samples: self.skip_samples,
        };
        Ok(compile(&config, &options)?)
    }
}

/// Rust-style name of a table's element type, e.g. `u16` or `i8`.
pub fn element_type(table: &anu_tables_core::Table) -> String {
    let sign = if table.is_signed() { 'i' } else { 'u' };
    format!("{sign}{}", table.width().bits())
}
