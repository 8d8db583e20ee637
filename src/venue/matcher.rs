use lazy_static::lazy_static;
use regex::Regex;

use super::badge::{Badge, CoreRank};
use super::normalize::normalize_venue_name;
use super::preprint::preprint_server;
use crate::index::QualityIndex;

lazy_static! {
    static ref WORKSHOP: Regex = Regex::new(r"\bworkshops?\b").unwrap();
}

const ICIS: &str = "international conference on information systems";
const AMCIS: &str = "americas conference on information systems";
const HICSS: &str = "hawaii international conference on system sciences";

/// Resolve every ranking-system badge that applies to a raw venue string.
///
/// Emission order follows [`super::BadgeKind`]: pre-print first, impact factor
/// last, at most one badge per kind. An exact quartile hit marks the venue as
/// a journal and suppresses CORE/CCF; a CORE/CCF hit (without an exact
/// quartile) marks it as a conference and suppresses the quartile badge.
/// Workshops never inherit a journal quartile through prefix matching.
pub fn quality_badges_for_venue(venue_raw: &str, index: &QualityIndex) -> Vec<Badge> {
    let v = normalize_venue_name(venue_raw);
    if v.is_empty() {
        return Vec::new();
    }

    let mut badges = Vec::new();

    if let Some(server) = preprint_server(venue_raw) {
        badges.push(Badge::Preprint { server });
    }

    if let Some(rank) = index.abdc.lookup(&v) {
        badges.push(Badge::Abdc { rank: *rank });
    }
    if let Some(rank) = index.vhb.lookup(&v) {
        badges.push(Badge::Vhb { rank: *rank });
    }
    if let Some(rank) = index.abs.lookup(&v) {
        badges.push(Badge::Abs { rank: *rank });
    }
    if let Some(metrics) = index.jcr.get(&v) {
        badges.push(Badge::Jcr {
            metrics: metrics.clone(),
        });
    }

    let exact_quartile = index.quartiles.get(&v);
    let (core, ccf) = match exact_quartile {
        Some(_) => (None, None),
        None => (core_rank(&v, index), index.ccf.lookup(&v).copied()),
    };
    let is_conference = core.is_some() || ccf.is_some();

    let quartile = match exact_quartile {
        Some(q) => Some(*q),
        None if is_conference || WORKSHOP.is_match(&v) => None,
        None => index.quartiles.fuzzy_get(&v).copied(),
    };
    if let Some(quartile) = quartile {
        badges.push(Badge::Quartile { quartile });
    }

    if index.ft50.abbreviation_match(&v) {
        badges.push(Badge::Ft50);
    }
    if index.utd24.abbreviation_match(&v) {
        badges.push(Badge::Utd24);
    }

    if let Some(rank) = core {
        badges.push(Badge::Core { rank });
    }
    if let Some(rank) = ccf {
        badges.push(Badge::Ccf { rank });
    }

    if index.era.lookup(&v).is_some() {
        badges.push(Badge::Era);
    }
    if let Some(level) = index.norwegian.lookup(&v) {
        badges.push(Badge::Norwegian { level: *level });
    }
    if let Some(h5) = index.h5.lookup(&v) {
        badges.push(Badge::H5 { h5: *h5 });
    }
    if let Some(impact) = index.impact.lookup(&v) {
        badges.push(Badge::ImpactFactor { impact: *impact });
    }

    badges
}

/// CORE lookup: exact, then the known conference aliases, then fuzzy
fn core_rank(v: &str, index: &QualityIndex) -> Option<CoreRank> {
    if let Some(rank) = index.core.get(v) {
        return Some(*rank);
    }
    conference_alias(v)
        .and_then(|canonical| index.core.get(canonical))
        .or_else(|| index.core.fuzzy_get(v))
        .copied()
}

/// Canonical CORE key for conferences that show up under many renderings
/// ("icis 2023", "42nd international conference on information systems icis 1 8").
/// Other "international conference on information systems ..." events (ISD and
/// friends) only resolve when the ICIS acronym is present.
pub fn conference_alias(v: &str) -> Option<&'static str> {
    if v == "icis" || v.starts_with("icis ") {
        return Some(ICIS);
    }
    if v.starts_with(ICIS) && (v == ICIS || v.contains(" icis")) {
        return Some(ICIS);
    }
    if v.starts_with("americas") && v.contains("conference on information systems") {
        return Some(AMCIS);
    }
    if v.starts_with(HICSS) {
        return Some(HICSS);
    }
    None
}

/// True when the venue resolves to a conference ranking
pub fn is_conference_venue(venue_raw: &str, index: &QualityIndex) -> bool {
    quality_badges_for_venue(venue_raw, index)
        .iter()
        .any(|b| matches!(b, Badge::Core { .. } | Badge::Ccf { .. }))
}
