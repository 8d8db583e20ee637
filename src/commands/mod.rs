pub mod annotate;
pub mod compile;
pub mod normalize;
pub mod stats;

pub use annotate::run_annotate;
pub use compile::run_compile;
pub use normalize::run_normalize;
pub use stats::run_stats;

use anyhow::Result;
use log::info;
use std::time::Instant;

use crate::cli::IndexArgs;
use scholar_signals::common::{create_spinner, format_elapsed};
use scholar_signals::index::{
    apply_parquet_table, compile_quality_index, load_extra_indices, load_settings, ExtraIndices, QualityIndex,
    QualitySettings,
};

/// Load settings, extra indices and Parquet tables, then compile the index.
/// Missing sources are empty, not errors.
pub(crate) fn load_quality_index(args: &IndexArgs) -> Result<(QualitySettings, QualityIndex)> {
    let start = Instant::now();

    let mut settings = match &args.settings {
        Some(path) => load_settings(path)?,
        None => QualitySettings::default(),
    };
    let mut extra = match &args.extra {
        Some(path) => load_extra_indices(path)?,
        None => ExtraIndices::default(),
    };
    for (kind, path) in &args.tables {
        apply_parquet_table(&mut settings, &mut extra, *kind, path)?;
    }

    let spinner = create_spinner("Compiling quality index...");
    let index = compile_quality_index(&settings, &extra);
    spinner.finish_and_clear();
    info!(
        "Quality index ready: {} entries in {}",
        index.len(),
        format_elapsed(start.elapsed())
    );
    Ok((settings, index))
}
