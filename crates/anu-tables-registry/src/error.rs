//! Error types for table compilation.

use std::path::PathBuf;

use anu_tables_config::ConfigError;
use anu_tables_core::{Fault, TableError};
use thiserror::Error;

/// Errors that abort a compilation run.
///
/// Every variant that concerns a single table carries its name.
#[derive(Debug, Error)]
pub enum CompileError {
    /// A generator rejected its parameters.
    #[error("table '{name}': {source}")]
    Table {
        /// Name of the table being generated.
        name: String,
        /// Generator error.
        #[source]
        source: TableError,
    },

    /// A table name was registered twice.
    #[error("duplicate table name: {0}")]
    DuplicateTable(String),

    /// A raw sample could not be read.
    #[error("table '{name}': failed to read sample '{path}': {source}")]
    ReadSample {
        /// Name of the table being generated.
        name: String,
        /// Resolved sample path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A raw sample holds fewer bytes than its table needs.
    #[error("table '{name}': sample has {found} bytes, expected at least {expected}")]
    SampleTooShort {
        /// Name of the table being generated.
        name: String,
        /// Declared table length.
        expected: usize,
        /// Bytes available in the file.
        found: usize,
    },

    /// The configuration failed to load or validate.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl CompileError {
    /// Create a table generation error.
    pub fn table(name: impl Into<String>, source: TableError) -> Self {
        CompileError::Table {
            name: name.into(),
            source,
        }
    }

    /// Create a sample read error.
    pub fn read_sample(
        name: impl Into<String>,
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        CompileError::ReadSample {
            name: name.into(),
            path: path.into(),
            source,
        }
    }

    /// Name of the offending table, if the error concerns one.
    pub fn table_name(&self) -> Option<&str> {
        match self {
            CompileError::Table { name, .. }
            | CompileError::ReadSample { name, .. }
            | CompileError::SampleTooShort { name, .. }
            | CompileError::DuplicateTable(name) => Some(name),
            CompileError::Config(_) => None,
        }
    }

    /// Fault class of a generator error.
    ///
    /// Configuration and file errors are always configuration faults.
    pub fn fault(&self) -> Fault {
        match self {
            CompileError::Table { source, .. } => source.fault(),
            _ => Fault::Configuration,
        }
    }
}
