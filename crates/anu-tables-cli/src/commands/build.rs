//! Build command: compile every table and report or export the result.

#![allow(clippy::print_literal)] // Table headers use literal strings intentionally

use super::common::{CompileArgs, element_type};
use anu_tables_registry::{TableGroup, TableRegistry};
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Args)]
pub struct BuildArgs {
    #[command(flatten)]
    compile: CompileArgs,

    /// Write all tables to a JSON file
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,
}

/// One table in the JSON export.
#[derive(Serialize)]
struct ExportedTable<'a> {
    name: &'a str,
    group: &'static str,
    width: u32,
    signed: bool,
    len: usize,
    data: Vec<i64>,
}

pub fn run(args: BuildArgs) -> anyhow::Result<()> {
    let registry = args.compile.compile()?;

    print_summary(&registry);

    if let Some(output_path) = args.output {
        let tables: Vec<ExportedTable> = registry
            .iter()
            .map(|entry| ExportedTable {
                name: &entry.name,
                group: entry.group.name(),
                width: entry.table.width().bits(),
                signed: entry.table.is_signed(),
                len: entry.table.len(),
                data: entry.table.values(),
            })
            .collect();
        std::fs::write(&output_path, serde_json::to_string_pretty(&tables)?)?;
        tracing::info!(path = %output_path.display(), tables = tables.len(), "export written");
        println!("\nWrote {} tables to {}", tables.len(), output_path.display());
    }

    Ok(())
}

fn print_summary(registry: &TableRegistry) {
    for group in TableGroup::ALL {
        let entries = registry.group(group);
        if entries.is_empty() {
            continue;
        }

        println!("{} ({})", group.name(), group.description());
        println!("  {:24}  {:4}  {:>6}  {:>6}", "Name", "Type", "Len", "Bytes");
        println!("  {:24}  {:4}  {:>6}  {:>6}", "----", "----", "---", "-----");
        for entry in entries {
            println!(
                "  {:24}  {:4}  {:>6}  {:>6}",
                entry.name,
                element_type(&entry.table),
                entry.table.len(),
                entry.table.byte_len()
            );
        }
        println!();
    }

    println!(
        "{} tables, {} bytes",
        registry.len(),
        registry.total_bytes()
    );
}
