use anyhow::{Context, Result};
use log::info;
use serde::Serialize;
use std::io::BufRead;

use crate::cli::NormalizeArgs;
use scholar_signals::common::{open_input, setup_logging, write_jsonl};
use scholar_signals::venue::{normalize_venue_name, venue_grouping_key};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct NormalizedVenue {
    raw: String,
    key: String,
    grouping_key: String,
}

pub fn run_normalize(args: NormalizeArgs) -> Result<usize> {
    setup_logging(&args.log_level)?;

    let mut venues = args.venues.clone();
    if let Some(path) = &args.input {
        info!("Reading venues from: {}", path);
        for line in open_input(path)?.lines() {
            let line = line.with_context(|| format!("Failed to read {}", path))?;
            if !line.trim().is_empty() {
                venues.push(line);
            }
        }
    }

    let rows: Vec<NormalizedVenue> = venues
        .into_iter()
        .map(|raw| NormalizedVenue {
            key: normalize_venue_name(&raw),
            grouping_key: venue_grouping_key(&raw),
            raw,
        })
        .collect();

    match &args.output {
        Some(path) => {
            write_jsonl(path, &rows)?;
            info!("Wrote {} venues to {}", rows.len(), path);
        }
        None => {
            for row in &rows {
                println!("{}\t{}", row.key, row.raw);
            }
        }
    }
    Ok(rows.len())
}
