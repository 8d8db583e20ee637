use anyhow::Result;
use log::info;
use rayon::prelude::*;
use std::time::Instant;

use super::load_quality_index;
use crate::cli::StatsArgs;
use scholar_signals::author::{generate_author_name_variations, PositionFilter};
use scholar_signals::common::{
    configure_thread_pool, current_year, format_elapsed, load_paper_records, setup_logging, write_json, Paper,
};
use scholar_signals::metrics::{compute_author_stats, AuthorStats};

pub fn run_stats(args: StatsArgs) -> Result<AuthorStats> {
    let start_time = Instant::now();
    setup_logging(&args.log_level)?;

    info!("Computing author statistics for: {}", args.author);
    info!("Input: {}", args.input);
    info!("Position filter: {}", args.position);

    configure_thread_pool(args.threads);
    let now = args.current_year.unwrap_or_else(current_year);

    let (_, index) = load_quality_index(&args.index)?;

    let records = load_paper_records(&args.input)?;
    let papers: Vec<Paper> = records.par_iter().map(Paper::from_record).collect();
    info!("Loaded {} papers", papers.len());

    let variations = generate_author_name_variations(&args.author);
    let filter = PositionFilter::parse(&args.position);
    let stats = compute_author_stats(&papers, &variations, &index, &filter, now);

    write_json(args.output.as_deref(), &stats)?;

    info!("==================== FINAL SUMMARY ====================");
    info!("Total execution time: {}", format_elapsed(start_time.elapsed()));
    info!("Publications counted: {}", stats.total_publications);
    info!("Total citations: {}", stats.total_citations);
    info!("h-index: {}", stats.indices.h_index);
    if let Some(path) = &args.output {
        info!("Output file: {}", path);
    }
    info!("========================================================");

    Ok(stats)
}
