use anyhow::Result;
use log::info;
use rayon::prelude::*;
use serde::Serialize;
use std::time::Instant;

use super::load_quality_index;
use crate::cli::AnnotateArgs;
use scholar_signals::common::{
    configure_thread_pool, create_count_progress_bar, current_year, format_elapsed, load_paper_records,
    setup_logging, write_jsonl, Paper,
};
use scholar_signals::extract::Artifacts;
use scholar_signals::index::{QualityIndex, QualitySettings};
use scholar_signals::metrics::{
    age_bias_color, contribution_score, format_velocity, velocity, velocity_trajectory, years_since,
    BucketAverages, ContributionScore, Trajectory,
};
use scholar_signals::venue::{quality_badges_for_venue, venue_weight_for_badges, RenderedBadge};

/// One renderer-ready paper
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AnnotatedPaper {
    key: String,
    title: String,
    venue: Option<String>,
    year: Option<i32>,
    citation_count: Option<u64>,
    badges: Vec<RenderedBadge>,
    venue_weight: f64,
    velocity: Option<f64>,
    velocity_text: Option<String>,
    trajectory: Option<Trajectory>,
    age_color: String,
    contribution: Option<ContributionScore>,
    artifacts: Artifacts,
}

fn annotate_paper(
    paper: &Paper,
    settings: &QualitySettings,
    index: &QualityIndex,
    averages: &BucketAverages,
    now: i32,
) -> AnnotatedPaper {
    let badges = paper
        .venue
        .as_deref()
        .map(|venue| quality_badges_for_venue(venue, index))
        .unwrap_or_default();
    // toggles only hide badges; the weight sees all of them
    let venue_weight = venue_weight_for_badges(&badges);

    let velocity = velocity(paper.citation_count, paper.year, now);
    let trajectory = match (velocity, paper.year) {
        (Some(v), Some(year)) => velocity_trajectory(v, years_since(year, now), averages),
        _ => None,
    };

    AnnotatedPaper {
        key: paper.key.clone(),
        title: paper.title.clone(),
        venue: paper.venue.clone(),
        year: paper.year,
        citation_count: paper.citation_count,
        badges: badges
            .into_iter()
            .filter(|b| settings.badge_enabled(b.kind()))
            .map(RenderedBadge::from)
            .collect(),
        venue_weight,
        velocity,
        velocity_text: velocity.map(format_velocity),
        trajectory,
        age_color: age_bias_color(paper.year.map(|y| now - y)),
        contribution: contribution_score(paper.citation_count, paper.year, venue_weight, paper.artifacts, now),
        artifacts: paper.artifacts,
    }
}

pub fn run_annotate(args: AnnotateArgs) -> Result<usize> {
    let start_time = Instant::now();
    setup_logging(&args.log_level)?;

    info!("Starting paper annotation");
    info!("Input: {}", args.input);
    info!("Output: {}", args.output);

    configure_thread_pool(args.threads);
    let now = args.current_year.unwrap_or_else(current_year);

    let (settings, index) = load_quality_index(&args.index)?;

    let records = load_paper_records(&args.input)?;
    info!("Loaded {} paper records", records.len());
    let papers: Vec<Paper> = records.par_iter().map(Paper::from_record).collect();

    let samples: Vec<(f64, i32)> = papers
        .iter()
        .filter_map(|p| Some((velocity(p.citation_count, p.year, now)?, years_since(p.year?, now))))
        .collect();
    let averages = BucketAverages::from_samples(&samples);

    let pb = create_count_progress_bar(papers.len() as u64);
    let annotated: Vec<AnnotatedPaper> = papers
        .par_iter()
        .map(|paper| {
            let row = annotate_paper(paper, &settings, &index, &averages, now);
            pb.inc(1);
            row
        })
        .collect();
    pb.finish_with_message("done");

    let written = write_jsonl(&args.output, &annotated)?;

    let with_badges = annotated.iter().filter(|a| !a.badges.is_empty()).count();
    info!("==================== FINAL SUMMARY ====================");
    info!("Total execution time: {}", format_elapsed(start_time.elapsed()));
    info!("Papers annotated: {}", written);
    info!("Papers with at least one badge: {}", with_badges);
    info!("Output file: {}", args.output);
    info!("========================================================");

    Ok(written)
}
