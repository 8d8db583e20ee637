use super::badge::{AbdcRank, AbsRank, Badge, CcfRank, CoreRank, NorwegianLevel, Quartile, VhbRank};
use super::matcher::quality_badges_for_venue;
use crate::index::QualityIndex;

/// Weight of a venue with no ranking badge at all ("unknown", not "bad")
pub const BASELINE_VENUE_WEIGHT: f64 = 0.2;

pub const TOP_LIST_WEIGHT: f64 = 1.0;
pub const ERA_WEIGHT: f64 = 0.75;
pub const PREPRINT_WEIGHT: f64 = 0.15;

fn abdc_weight(rank: AbdcRank) -> f64 {
    match rank {
        AbdcRank::AStar => 0.95,
        AbdcRank::A => 0.85,
        AbdcRank::B => 0.6,
        AbdcRank::C => 0.4,
        AbdcRank::D => 0.25,
    }
}

fn vhb_weight(rank: VhbRank) -> f64 {
    match rank {
        VhbRank::APlus => 0.95,
        VhbRank::A => 0.85,
        VhbRank::B => 0.6,
        VhbRank::C => 0.4,
        VhbRank::D => 0.25,
        VhbRank::E => 0.15,
    }
}

fn abs_weight(rank: AbsRank) -> f64 {
    match rank {
        AbsRank::FourStar => 0.95,
        AbsRank::Four => 0.8,
        AbsRank::Three => 0.55,
        AbsRank::Two => 0.35,
        AbsRank::One => 0.2,
    }
}

fn quartile_weight(quartile: Quartile) -> f64 {
    match quartile {
        Quartile::Q1 => 0.75,
        Quartile::Q2 => 0.5,
        Quartile::Q3 => 0.35,
        Quartile::Q4 => 0.2,
    }
}

fn core_weight(rank: CoreRank) -> f64 {
    match rank {
        CoreRank::AStar => 0.9,
        CoreRank::A => 0.8,
        CoreRank::B => 0.6,
        CoreRank::C => 0.4,
    }
}

fn ccf_weight(rank: CcfRank) -> f64 {
    match rank {
        CcfRank::A => 0.85,
        CcfRank::B => 0.6,
        CcfRank::C => 0.4,
    }
}

fn norwegian_weight(level: NorwegianLevel) -> f64 {
    match level {
        NorwegianLevel::One => 0.8,
        NorwegianLevel::Two => 0.6,
    }
}

/// Influence weight of a single badge. h5 and impact-factor badges are
/// informational and carry no weight.
pub fn badge_weight(badge: &Badge) -> Option<f64> {
    match badge {
        Badge::Ft50 | Badge::Utd24 => Some(TOP_LIST_WEIGHT),
        Badge::Preprint { .. } => Some(PREPRINT_WEIGHT),
        Badge::Abdc { rank } => Some(abdc_weight(*rank)),
        Badge::Vhb { rank } => Some(vhb_weight(*rank)),
        Badge::Abs { rank } => Some(abs_weight(*rank)),
        Badge::Quartile { quartile } => Some(quartile_weight(*quartile)),
        Badge::Jcr { metrics } => metrics.best_quartile().map(quartile_weight),
        Badge::Core { rank } => Some(core_weight(*rank)),
        Badge::Ccf { rank } => Some(ccf_weight(*rank)),
        Badge::Era => Some(ERA_WEIGHT),
        Badge::Norwegian { level } => Some(norwegian_weight(*level)),
        Badge::H5 { .. } | Badge::ImpactFactor { .. } => None,
    }
}

/// Maximum badge weight, floored at [`BASELINE_VENUE_WEIGHT`]
pub fn venue_weight_for_badges(badges: &[Badge]) -> f64 {
    badges
        .iter()
        .filter_map(badge_weight)
        .fold(BASELINE_VENUE_WEIGHT, f64::max)
}

/// Venue tier weight in `[0, 1]` used by the contribution signal score
pub fn venue_weight_for_venue(venue_raw: &str, index: &QualityIndex) -> f64 {
    venue_weight_for_badges(&quality_badges_for_venue(venue_raw, index))
}
