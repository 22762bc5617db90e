//! Table registry and resource compiler for the anu firmware.
//!
//! This crate turns a [`ResourceConfig`](anu_tables_config::ResourceConfig)
//! into the ordered set of named tables the firmware build consumes.
//!
//! # Features
//!
//! - **Ordered registry**: tables keep their declaration order, names are unique
//! - **Groups**: each table belongs to the 16-bit, 32-bit or 8-bit waveform group
//! - **Atomic compilation**: [`compile`] returns every table or none of them
//!
//! # Example
//!
//! ```rust
//! use anu_tables_config::ResourceConfig;
//! use anu_tables_registry::{CompileOptions, TableGroup, compile};
//!
//! let registry = compile(&ResourceConfig::default(), &CompileOptions::without_samples()).unwrap();
//!
//! let lfo = registry.get("lfo_increments").unwrap();
//! assert_eq!(lfo.group, TableGroup::Lookup32);
//! assert_eq!(lfo.table.len(), 256);
//!
//! for entry in registry.group(TableGroup::Lookup16) {
//!     println!("{}: {} entries", entry.name, entry.table.len());
//! }
//! ```

mod compile;
mod error;

pub use compile::{CompileOptions, compile};
pub use error::CompileError;

use anu_tables_core::Table;

/// Storage group of a table.
///
/// The firmware links each group into its own resource block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TableGroup {
    /// 16-bit lookup tables (and the small signed tables stored with them).
    Lookup16,
    /// 32-bit lookup tables.
    Lookup32,
    /// 8-bit waveforms and raw data.
    Waveform,
}

impl TableGroup {
    /// All groups, in declaration order.
    pub const ALL: [TableGroup; 3] = [
        TableGroup::Lookup16,
        TableGroup::Lookup32,
        TableGroup::Waveform,
    ];

    /// Returns a short identifier for the group.
    pub const fn name(&self) -> &'static str {
        match self {
            TableGroup::Lookup16 => "lookup16",
            TableGroup::Lookup32 => "lookup32",
            TableGroup::Waveform => "waveform",
        }
    }

    /// Returns a description of the group.
    pub const fn description(&self) -> &'static str {
        match self {
            TableGroup::Lookup16 => "Increments, pitch periods, grooves and patterns",
            TableGroup::Lookup32 => "High-resolution LFO and envelope increments",
            TableGroup::Waveform => "Waveforms, curve shapes and raw sample data",
        }
    }
}

/// A named table in the registry.
#[derive(Debug, Clone, PartialEq)]
pub struct TableEntry {
    /// Unique name.
    pub name: String,
    /// Storage group.
    pub group: TableGroup,
    /// Table contents.
    pub table: Table,
}

/// Ordered, append-only collection of named tables.
///
/// Names are unique; iteration follows registration order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableRegistry {
    entries: Vec<TableEntry>,
}

impl TableRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a table.
    ///
    /// # Errors
    ///
    /// Returns [`CompileError::DuplicateTable`] if `name` is already taken;
    /// the registry is left unchanged.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        group: TableGroup,
        table: impl Into<Table>,
    ) -> Result<(), CompileError> {
        let name = name.into();
        if self.get(&name).is_some() {
            return Err(CompileError::DuplicateTable(name));
        }
        let table = table.into();

        #[cfg(feature = "tracing")]
        tracing::debug!(
            table = %name,
            group = group.name(),
            len = table.len(),
            bits = table.width().bits(),
            "table registered"
        );

        self.entries.push(TableEntry { name, group, table });
        Ok(())
    }

    /// Look up a table by name.
    pub fn get(&self, name: &str) -> Option<&TableEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// Iterate over tables in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &TableEntry> {
        self.entries.iter()
    }

    /// Table names in registration order.
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.name.as_str()).collect()
    }

    /// Tables of one group, in registration order.
    pub fn group(&self, group: TableGroup) -> Vec<&TableEntry> {
        self.entries.iter().filter(|e| e.group == group).collect()
    }

    /// Storage size of all tables in bytes.
    pub fn total_bytes(&self) -> usize {
        self.entries.iter().map(|e| e.table.byte_len()).sum()
    }

    /// Number of tables.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no table is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a TableRegistry {
    type Item = &'a TableEntry;
    type IntoIter = std::slice::Iter<'a, TableEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
