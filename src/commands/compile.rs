use anyhow::Result;
use log::info;
use serde::Serialize;
use std::time::Instant;

use super::load_quality_index;
use crate::cli::CompileArgs;
use scholar_signals::common::{format_elapsed, setup_logging, write_json};
use scholar_signals::index::{export_index_tables, TableSize};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CompileSummary {
    total_entries: usize,
    tables: Vec<TableSize>,
    exported_tables: Option<usize>,
}

pub fn run_compile(args: CompileArgs) -> Result<()> {
    let start_time = Instant::now();
    setup_logging(&args.log_level)?;

    info!("Compiling quality index");
    let (_, index) = load_quality_index(&args.index)?;

    let exported_tables = match &args.export_dir {
        Some(dir) => Some(export_index_tables(&index, dir)?),
        None => None,
    };

    let summary = CompileSummary {
        total_entries: index.len(),
        tables: index.summary(),
        exported_tables,
    };
    for table in summary.tables.iter().filter(|t| t.entries > 0) {
        info!("  {:<10} {}", table.kind.as_str(), table.entries);
    }
    write_json(args.output.as_deref(), &summary)?;

    info!("Total execution time: {}", format_elapsed(start_time.elapsed()));
    Ok(())
}
