//! Citation-distribution indices over one author's publication list.
//!
//! Every function takes a complete citation snapshot and is total: an empty
//! list yields `0` or `None`, never NaN.

use serde::Serialize;

use crate::author::AuthorRole;

/// MSSI authorship weights
pub const SOLO_POSITION_WEIGHT: f64 = 1.0;
pub const FIRST_POSITION_WEIGHT: f64 = 0.4;
pub const LAST_POSITION_WEIGHT: f64 = 0.35;
pub const MIDDLE_POSITION_WEIGHT: f64 = 0.25;

/// MSSI component scales (impact, velocity, longevity) and overall multiplier
pub const MSSI_IMPACT_SCALE: f64 = 50.0;
pub const MSSI_VELOCITY_SCALE: f64 = 5.0;
pub const MSSI_LONGEVITY_SCALE: f64 = 10.0;
pub const MSSI_MULTIPLIER: f64 = 10.0;

fn sorted_desc(citations: &[u64]) -> Vec<u64> {
    let mut sorted = citations.to_vec();
    sorted.sort_unstable_by(|a, b| b.cmp(a));
    sorted
}

/// Largest h such that h papers have at least h citations each
pub fn h_index(citations: &[u64]) -> u32 {
    sorted_desc(citations)
        .iter()
        .enumerate()
        .take_while(|(i, c)| **c >= (*i as u64 + 1))
        .count() as u32
}

/// Largest g such that the top g papers together have at least g² citations
pub fn g_index(citations: &[u64]) -> Option<u32> {
    let mut cumulative = 0u64;
    let mut g = 0u32;
    for (i, c) in sorted_desc(citations).iter().enumerate() {
        cumulative += c;
        let rank = i as u64 + 1;
        if cumulative >= rank * rank {
            g = rank as u32;
        }
    }
    (g > 0).then_some(g)
}

/// Square root of the citations in the h-core beyond h each.
/// `None` when h is zero or there is no excess.
pub fn e_index(citations: &[u64]) -> Option<f64> {
    let h = h_index(citations) as u64;
    if h == 0 {
        return None;
    }
    let excess: u64 = sorted_desc(citations)
        .iter()
        .take(h as usize)
        .map(|c| c.saturating_sub(h))
        .sum();
    (excess > 0).then(|| (excess as f64).sqrt())
}

/// Gini coefficient over citation counts, clamped to [0, 1].
/// `None` without citations.
pub fn citation_gini(citations: &[u64]) -> Option<f64> {
    let n = citations.len();
    let total: u64 = citations.iter().sum();
    if n == 0 || total == 0 {
        return None;
    }
    let mut ascending = citations.to_vec();
    ascending.sort_unstable();
    let weighted: f64 = ascending
        .iter()
        .enumerate()
        .map(|(i, c)| (i + 1) as f64 * *c as f64)
        .sum();
    let n = n as f64;
    let gini = (2.0 * weighted) / (n * total as f64) - (n + 1.0) / n;
    Some(gini.clamp(0.0, 1.0))
}

/// Share of all citations held by the h-core
pub fn h_core_share(citations: &[u64]) -> Option<f64> {
    let h = h_index(citations) as usize;
    let total: u64 = citations.iter().sum();
    if h == 0 || total == 0 {
        return None;
    }
    let core: u64 = sorted_desc(citations).iter().take(h).sum();
    Some(core as f64 / total as f64)
}

pub fn median_citations(citations: &[u64]) -> Option<f64> {
    if citations.is_empty() {
        return None;
    }
    let mut sorted = citations.to_vec();
    sorted.sort_unstable();
    let mid = sorted.len() / 2;
    Some(if sorted.len() % 2 == 1 {
        sorted[mid] as f64
    } else {
        (sorted[mid - 1] + sorted[mid]) as f64 / 2.0
    })
}

pub fn mean_citations(citations: &[u64]) -> Option<f64> {
    if citations.is_empty() {
        return None;
    }
    Some(citations.iter().sum::<u64>() as f64 / citations.len() as f64)
}

/// Coefficient of variation σ/μ (population σ). Needs two papers and a citation.
pub fn consistency_index(citations: &[u64]) -> Option<f64> {
    if citations.len() < 2 {
        return None;
    }
    let mean = mean_citations(citations)?;
    if mean <= 0.0 {
        return None;
    }
    let variance = citations
        .iter()
        .map(|c| (*c as f64 - mean).powi(2))
        .sum::<f64>()
        / citations.len() as f64;
    Some(variance.sqrt() / mean)
}

/// Publication year at which cumulative citations, counted oldest first,
/// reach half of the total. Rows are `(year, citations)`.
pub fn citation_half_life_year(rows: &[(i32, u64)]) -> Option<i32> {
    let mut by_year = rows.to_vec();
    by_year.sort_by_key(|(year, _)| *year);
    let last_year = by_year.last()?.0;

    let total: u64 = by_year.iter().map(|(_, c)| c).sum();
    let half = total as f64 / 2.0;
    let mut cumulative = 0u64;
    for (year, c) in &by_year {
        cumulative += c;
        if cumulative as f64 >= half {
            return Some(*year);
        }
    }
    Some(last_year)
}

/// h per career year, with at least one year of career
pub fn m_index(h: u32, years_since_first: i32) -> f64 {
    h as f64 / years_since_first.max(1) as f64
}

/// One paper's contribution to the L-index sum: c / (authors × years)
pub fn l_index_term(citations: u64, authors: usize, years_ago: i32) -> f64 {
    citations as f64 / (authors.max(1) as f64 * years_ago.max(1) as f64)
}

/// ln(Σ terms) + 1, clamped at zero. `None` for a zero sum.
pub fn l_index(term_sum: f64) -> Option<f64> {
    (term_sum > 0.0).then(|| (term_sum.ln() + 1.0).max(0.0))
}

/// Venue prestige weight for the eigenfactor-style sum: 1 + ln(1 + h5)
pub fn eigenfactor_venue_weight(h5: Option<u32>) -> f64 {
    1.0 + (1.0 + h5.unwrap_or(0) as f64).ln()
}

pub fn position_weight(role: AuthorRole) -> f64 {
    match role {
        AuthorRole::Solo => SOLO_POSITION_WEIGHT,
        AuthorRole::First => FIRST_POSITION_WEIGHT,
        AuthorRole::Last => LAST_POSITION_WEIGHT,
        AuthorRole::Middle => MIDDLE_POSITION_WEIGHT,
    }
}

/// Composite of authorship-weighted impact, career velocity and longevity.
///
/// `impact` is Σ c·(position weight / authors); velocity is total citations per
/// career year; longevity is the career length in years.
pub fn mssi(impact: f64, total_citations: u64, years_since_first: i32) -> Option<f64> {
    let years = years_since_first.max(1) as f64;
    let velocity = total_citations as f64 / years;
    let raw = (1.0 + impact / MSSI_IMPACT_SCALE).ln()
        + (1.0 + velocity / MSSI_VELOCITY_SCALE).ln()
        + (1.0 + years / MSSI_LONGEVITY_SCALE).ln();
    (raw.is_finite() && raw > 0.0).then_some(raw * MSSI_MULTIPLIER)
}

/// Distribution indices that depend only on the citation list
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CitationIndices {
    pub h_index: u32,
    pub g_index: Option<u32>,
    pub e_index: Option<f64>,
    pub citation_gini: Option<f64>,
    pub h_core_share: Option<f64>,
    pub median_citations: Option<f64>,
    pub mean_citations: Option<f64>,
    pub consistency_index: Option<f64>,
}

impl CitationIndices {
    pub fn compute(citations: &[u64]) -> Self {
        Self {
            h_index: h_index(citations),
            g_index: g_index(citations),
            e_index: e_index(citations),
            citation_gini: citation_gini(citations),
            h_core_share: h_core_share(citations),
            median_citations: median_citations(citations),
            mean_citations: mean_citations(citations),
            consistency_index: consistency_index(citations),
        }
    }
}
