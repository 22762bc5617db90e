//! Show command: print the values of individual tables.

use super::common::{CompileArgs, element_type};
use anu_tables_registry::TableEntry;
use clap::Args;

/// Values printed per row.
const ROW_LEN: usize = 16;

#[derive(Args)]
pub struct ShowArgs {
    /// Table names to print
    #[arg(value_name = "NAME", required = true)]
    names: Vec<String>,

    #[command(flatten)]
    compile: CompileArgs,
}

pub fn run(args: ShowArgs) -> anyhow::Result<()> {
    let registry = args.compile.compile()?;

    for name in &args.names {
        let entry = registry.get(name).ok_or_else(|| {
            anyhow::anyhow!(
                "Unknown table: {}. Use 'anu-tables build' to list tables.",
                name
            )
        })?;
        print_table(entry);
    }

    Ok(())
}

fn print_table(entry: &TableEntry) {
    let values = entry.table.values();
    let cell = values
        .iter()
        .map(|v| v.to_string().len())
        .max()
        .unwrap_or(1);

    println!(
        "{} [{}; {}] ({})",
        entry.name,
        element_type(&entry.table),
        values.len(),
        entry.group.name()
    );
    for (row, chunk) in values.chunks(ROW_LEN).enumerate() {
        let cells: Vec<String> = chunk.iter().map(|v| format!("{v:>cell$}")).collect();
        println!("  {:>5}: {}", row * ROW_LEN, cells.join(" "));
    }
    println!();
}
