//! Author-level statistics over a profile's publication list.
//!
//! Papers are examined independently in parallel (role, co-authors, venue
//! badges, title tokens); every aggregate index is computed afterwards from
//! the complete snapshot.

use lazy_static::lazy_static;
use log::debug;
use rayon::prelude::*;
use regex::Regex;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap, HashSet};

use super::indices::{
    citation_half_life_year, eigenfactor_venue_weight, h_index, l_index, l_index_term, m_index, mssi,
    position_weight, CitationIndices,
};
use super::paper::years_since;
use crate::author::{
    authorship_drift, get_author_role, is_author_variation, normalize_author_name, AuthorRole, AuthorshipDrift,
    PositionFilter, RoleShares,
};
use crate::common::Paper;
use crate::index::QualityIndex;
use crate::venue::{
    clean_proceedings_venue, pick_venue_display, quality_badges_for_venue, venue_grouping_key, AbdcRank, AbsRank,
    Badge, CoreRank, Quartile,
};

pub const TOP_VENUE_COUNT: usize = 3;
pub const TOP_TITLE_TOKEN_COUNT: usize = 10;

lazy_static! {
    static ref TITLE_TOKEN: Regex = Regex::new(r"[A-Za-z0-9]+").unwrap();
    static ref INITIAL_ONLY: Regex = Regex::new(r"^[A-Z]\.?$").unwrap();

    static ref TOPIC_STOPWORDS: HashSet<&'static str> = [
        "the", "a", "an", "and", "or", "but", "of", "in", "on", "at", "to", "for", "with", "by", "from",
        "as", "is", "was", "are", "were", "been", "be", "have", "has", "had", "do", "does", "did",
        "this", "that", "these", "those", "it", "its",
        "using", "based", "approach", "approaches", "analysis", "model", "models", "framework",
        "study", "studies", "toward", "towards", "via", "new", "results", "evidence", "case", "cases",
        "effect", "effects", "method", "methods", "system", "systems", "data", "dataset", "datasets",
        "paper", "papers", "survey", "review",
    ]
    .into_iter()
    .collect();
}

/// Papers per rank for the ranking systems summarised on a profile
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CoreCounts {
    #[serde(rename = "A*")]
    pub a_star: usize,
    #[serde(rename = "A")]
    pub a: usize,
    #[serde(rename = "B")]
    pub b: usize,
    #[serde(rename = "C")]
    pub c: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct QualityCounts {
    pub q1: usize,
    pub q2: usize,
    pub q3: usize,
    pub q4: usize,
    /// ABDC A* or A
    #[serde(rename = "a")]
    pub abdc_a: usize,
    pub utd24: usize,
    pub ft50: usize,
    pub abs4star: usize,
    pub core: CoreCounts,
    pub era: usize,
}

impl QualityCounts {
    fn add(&mut self, badges: &[Badge]) {
        for badge in badges {
            match badge {
                Badge::Quartile { quartile } => match quartile {
                    Quartile::Q1 => self.q1 += 1,
                    Quartile::Q2 => self.q2 += 1,
                    Quartile::Q3 => self.q3 += 1,
                    Quartile::Q4 => self.q4 += 1,
                },
                Badge::Abdc {
                    rank: AbdcRank::AStar | AbdcRank::A,
                } => self.abdc_a += 1,
                Badge::Utd24 => self.utd24 += 1,
                Badge::Ft50 => self.ft50 += 1,
                Badge::Abs {
                    rank: AbsRank::FourStar,
                } => self.abs4star += 1,
                Badge::Core { rank } => match rank {
                    CoreRank::AStar => self.core.a_star += 1,
                    CoreRank::A => self.core.a += 1,
                    CoreRank::B => self.core.b += 1,
                    CoreRank::C => self.core.c += 1,
                },
                Badge::Era => self.era += 1,
                _ => {}
            }
        }
    }
}

/// Papers published within the last 1, 3 and 5 years
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentActivity {
    pub last1_year: usize,
    pub last3_years: usize,
    pub last5_years: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoAuthorStat {
    /// Most complete rendering seen across the profile
    pub name: String,
    pub count: usize,
    pub citations: u64,
    /// h-index over the shared papers only
    pub h_index: u32,
    /// Owner's role shares on the shared papers
    pub role_share: RoleShares,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopVenue {
    pub venue: String,
    pub count: usize,
    pub key: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TitleToken {
    pub token: String,
    pub display: String,
    pub count: usize,
}

/// Everything shown on a profile's statistics panel
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorStats {
    pub total_publications: usize,
    pub total_citations: u64,
    pub most_cited: u64,
    pub first_author_citations: u64,
    pub solo_citations: u64,

    pub solo_authored: usize,
    pub co_authored: usize,
    pub first_author: usize,
    pub middle_author: usize,
    pub last_author: usize,
    pub authorship_drift: Option<AuthorshipDrift>,

    pub recent_activity: RecentActivity,
    pub quality_counts: QualityCounts,
    pub top_venues: Vec<TopVenue>,
    pub venue_diversity: usize,
    pub top_title_tokens: Vec<TitleToken>,

    pub co_authors: Vec<CoAuthorStat>,
    pub unique_co_authors: usize,
    pub avg_team_size: Option<f64>,

    pub first_year: Option<i32>,
    pub last_year: Option<i32>,
    pub year_span: Option<i32>,
    pub years_since_first: i32,
    pub career_age: Option<i32>,

    #[serde(flatten)]
    pub indices: CitationIndices,
    pub m_index: Option<f64>,
    pub l_index: Option<f64>,
    pub eigenfactor_style: Option<f64>,
    pub mssi: Option<f64>,
    pub citation_half_life_year: Option<i32>,
}

/// Per-paper facts gathered before aggregation
struct PaperFacts {
    role: AuthorRole,
    citations: u64,
    year: Option<i32>,
    team_size: usize,
    /// `(normalized, as listed)`, owner excluded, deduplicated
    co_authors: Vec<(String, String)>,
    /// `(grouping key, display)`
    venue: Option<(String, String)>,
    badges: Vec<Badge>,
    title_tokens: Vec<String>,
}

fn title_tokens(title: &str) -> Vec<String> {
    TITLE_TOKEN
        .find_iter(title)
        .map(|m| m.as_str())
        .filter(|tok| {
            let lower = tok.to_lowercase();
            lower.len() >= 2
                && !TOPIC_STOPWORDS.contains(lower.as_str())
                && !lower.chars().all(|c| c.is_ascii_digit())
        })
        .map(str::to_string)
        .collect()
}

fn paper_facts(paper: &Paper, owner: &[String], index: &QualityIndex) -> PaperFacts {
    let role = get_author_role(&paper.authors, owner);

    let mut seen = HashSet::new();
    let co_authors = paper
        .authors
        .iter()
        .filter(|a| !is_author_variation(&a.name, owner))
        .filter_map(|a| {
            let normalized = normalize_author_name(&a.name);
            (!normalized.is_empty() && seen.insert(normalized.clone())).then(|| (normalized, a.name.clone()))
        })
        .collect();

    let (venue, badges) = match paper.venue.as_deref() {
        Some(raw) => {
            let display = clean_proceedings_venue(raw);
            let key = venue_grouping_key(&display);
            let grouped = (!key.is_empty()).then_some((key, display));
            (grouped, quality_badges_for_venue(raw, index))
        }
        None => (None, Vec::new()),
    };

    PaperFacts {
        role,
        citations: paper.citation_count.unwrap_or(0),
        year: paper.year,
        team_size: paper.team_size(),
        co_authors,
        venue,
        badges,
        title_tokens: title_tokens(&paper.title),
    }
}

#[derive(Default)]
struct CoAuthorTally {
    name: String,
    count: usize,
    citations: u64,
    cite_list: Vec<u64>,
    roles: BTreeMap<AuthorRole, usize>,
    variations: Vec<String>,
}

fn word_count(name: &str) -> usize {
    name.split_whitespace().count()
}

impl CoAuthorTally {
    fn add(&mut self, listed: &str, citations: u64, role: AuthorRole) {
        self.count += 1;
        self.citations += citations;
        self.cite_list.push(citations);
        *self.roles.entry(role).or_default() += 1;

        let (new_words, cur_words) = (word_count(listed), word_count(&self.name));
        if self.name.is_empty()
            || new_words > cur_words
            || (new_words == cur_words && listed.len() > self.name.len())
        {
            self.name = listed.to_string();
        }
        if !self.variations.iter().any(|v| v == listed) {
            self.variations.push(listed.to_string());
        }
    }

    /// Most words, then longest; a spelled-out given name with the same
    /// surname beats initials.
    fn best_name(&self) -> String {
        if self.variations.len() <= 1 {
            return self.name.clone();
        }
        let mut sorted = self.variations.clone();
        sorted.sort_by(|a, b| word_count(b).cmp(&word_count(a)).then(b.len().cmp(&a.len())));
        let best = &sorted[0];
        let last = best.split_whitespace().last().unwrap_or_default();

        sorted
            .iter()
            .find(|v| {
                let parts: Vec<&str> = v.split_whitespace().collect();
                parts.len() >= 2
                    && parts[parts.len() - 1] == last
                    && parts[0].len() > 1
                    && !INITIAL_ONLY.is_match(parts[0])
            })
            .unwrap_or(best)
            .clone()
    }

    fn into_stat(self) -> CoAuthorStat {
        let total = self.roles.values().sum::<usize>().max(1) as f64;
        let share = |role: AuthorRole| *self.roles.get(&role).unwrap_or(&0) as f64 / total;
        CoAuthorStat {
            name: self.best_name(),
            count: self.count,
            citations: self.citations,
            h_index: h_index(&self.cite_list),
            role_share: RoleShares {
                first: share(AuthorRole::First),
                middle: share(AuthorRole::Middle),
                last: share(AuthorRole::Last),
                solo: share(AuthorRole::Solo),
            },
        }
    }
}

struct VenueTally {
    key: String,
    display: String,
    count: usize,
}

struct TokenTally {
    display: String,
    count: usize,
}

fn has_upper(s: &str) -> bool {
    s.chars().any(|c| c.is_ascii_uppercase())
}

/// Profile statistics for the person described by `owner` (name variations).
///
/// Papers whose owner role fails `filter` are left out before anything is
/// counted. Missing citation counts count as zero; papers without a year are
/// skipped by year-based measures only.
pub fn compute_author_stats(
    papers: &[Paper],
    owner: &[String],
    index: &QualityIndex,
    filter: &PositionFilter,
    current_year: i32,
) -> AuthorStats {
    let facts: Vec<PaperFacts> = papers
        .par_iter()
        .map(|paper| paper_facts(paper, owner, index))
        .filter(|f| filter.matches(f.role))
        .collect();

    let mut stats = AuthorStats {
        total_publications: facts.len(),
        ..Default::default()
    };

    let mut citations: Vec<u64> = Vec::with_capacity(facts.len());
    let mut years: Vec<i32> = Vec::new();
    let mut year_citations: Vec<(i32, u64)> = Vec::new();
    let mut roles_by_year: Vec<(i32, AuthorRole)> = Vec::new();
    let mut co_authors: BTreeMap<String, CoAuthorTally> = BTreeMap::new();
    let mut venues: Vec<VenueTally> = Vec::new();
    let mut venue_slots: HashMap<String, usize> = HashMap::new();
    let mut tokens: HashMap<String, TokenTally> = HashMap::new();
    let mut team_sizes = 0usize;
    let mut l_sum = 0.0;
    let mut eigenfactor_sum = 0.0;
    let mut mssi_impact = 0.0;

    for f in &facts {
        let c = f.citations;
        stats.total_citations += c;
        stats.most_cited = stats.most_cited.max(c);
        citations.push(c);

        match f.role {
            AuthorRole::Solo => {
                stats.solo_authored += 1;
                stats.solo_citations += c;
            }
            AuthorRole::First => {
                stats.first_author += 1;
                stats.first_author_citations += c;
            }
            AuthorRole::Last => stats.last_author += 1,
            AuthorRole::Middle => stats.middle_author += 1,
        }

        for (normalized, listed) in &f.co_authors {
            co_authors.entry(normalized.clone()).or_default().add(listed, c, f.role);
        }

        if let Some(year) = f.year {
            years.push(year);
            year_citations.push((year, c));
            roles_by_year.push((year, f.role));
            let ago = current_year - year;
            if ago <= 1 {
                stats.recent_activity.last1_year += 1;
            }
            if ago <= 3 {
                stats.recent_activity.last3_years += 1;
            }
            if ago <= 5 {
                stats.recent_activity.last5_years += 1;
            }
        }

        if let Some((key, display)) = &f.venue {
            match venue_slots.get(key) {
                Some(&slot) => {
                    let tally = &mut venues[slot];
                    tally.count += 1;
                    tally.display = pick_venue_display(&tally.display, display).to_string();
                }
                None => {
                    venue_slots.insert(key.clone(), venues.len());
                    venues.push(VenueTally {
                        key: key.clone(),
                        display: display.clone(),
                        count: 1,
                    });
                }
            }
        }
        stats.quality_counts.add(&f.badges);

        for tok in &f.title_tokens {
            let entry = tokens.entry(tok.to_lowercase()).or_insert_with(|| TokenTally {
                display: tok.clone(),
                count: 0,
            });
            entry.count += 1;
            if (has_upper(tok) && !has_upper(&entry.display)) || tok.len() > entry.display.len() {
                entry.display = tok.clone();
            }
        }

        team_sizes += f.team_size;
        let years_ago = f.year.map(|y| years_since(y, current_year)).unwrap_or(1);
        l_sum += l_index_term(c, f.team_size, years_ago);
        let h5 = f.badges.iter().find_map(|b| match b {
            Badge::H5 { h5 } => Some(*h5),
            _ => None,
        });
        eigenfactor_sum += c as f64 * eigenfactor_venue_weight(h5);
        mssi_impact += c as f64 * position_weight(f.role) / f.team_size as f64;
    }

    stats.co_authored = stats.total_publications - stats.solo_authored;
    stats.authorship_drift = authorship_drift(&roles_by_year);

    venues.sort_by(|a, b| b.count.cmp(&a.count));
    stats.venue_diversity = venues.len();
    stats.top_venues = venues
        .into_iter()
        .take(TOP_VENUE_COUNT)
        .map(|v| TopVenue {
            venue: v.display,
            count: v.count,
            key: v.key,
        })
        .collect();

    let mut top_tokens: Vec<TitleToken> = tokens
        .into_iter()
        .map(|(token, t)| TitleToken {
            token,
            display: t.display,
            count: t.count,
        })
        .collect();
    top_tokens.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.token.cmp(&b.token)));
    top_tokens.truncate(TOP_TITLE_TOKEN_COUNT);
    stats.top_title_tokens = top_tokens;

    stats.unique_co_authors = co_authors.len();
    let mut co_author_stats: Vec<CoAuthorStat> = co_authors.into_values().map(CoAuthorTally::into_stat).collect();
    co_author_stats.sort_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then(b.citations.cmp(&a.citations))
            .then_with(|| a.name.cmp(&b.name))
    });
    stats.co_authors = co_author_stats;

    if !facts.is_empty() {
        stats.avg_team_size = Some(team_sizes as f64 / facts.len() as f64);
    }

    stats.first_year = years.iter().min().copied();
    stats.last_year = years.iter().max().copied();
    if let (Some(first), Some(last)) = (stats.first_year, stats.last_year) {
        stats.year_span = Some(last - first + 1);
    }
    stats.years_since_first = stats.first_year.map(|y| years_since(y, current_year)).unwrap_or(1);
    stats.career_age = stats.first_year.map(|y| current_year - y);

    stats.indices = CitationIndices::compute(&citations);
    stats.citation_half_life_year = citation_half_life_year(&year_citations);
    stats.l_index = l_index(l_sum);
    stats.eigenfactor_style = (eigenfactor_sum > 0.0).then_some(eigenfactor_sum);
    if !facts.is_empty() {
        stats.m_index = Some(m_index(stats.indices.h_index, stats.years_since_first));
        stats.mssi = mssi(mssi_impact, stats.total_citations, stats.years_since_first);
    }

    debug!(
        "Author stats: {} of {} papers, {} citations, h={}, {} co-authors",
        stats.total_publications,
        papers.len(),
        stats.total_citations,
        stats.indices.h_index,
        stats.unique_co_authors
    );
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::author::generate_author_name_variations;
    use crate::common::PaperRecord;
    use crate::index::{compile_quality_index, ExtraIndices, QualitySettings};

    const NOW: i32 = 2026;

    fn paper(title: &str, authors_venue: &str, year: i32, citations: u64) -> Paper {
        Paper::from_record(&PaperRecord {
            title: title.to_string(),
            authors_venue: authors_venue.to_string(),
            year: Some(serde_json::json!(year)),
            citations: Some(serde_json::json!(citations)),
            ..Default::default()
        })
    }

    fn index() -> QualityIndex {
        let settings = QualitySettings {
            ft50_list: "MIS Quarterly\n".to_string(),
            abdc_ranks: "MIS Quarterly,A*\nDecision Support Systems,A\n".to_string(),
            quartiles: "MIS Quarterly,Q1\nDecision Support Systems,Q1\n".to_string(),
            core_ranks: "Hawaii International Conference on System Sciences,A\n".to_string(),
            ..Default::default()
        };
        let mut index = compile_quality_index(&settings, &ExtraIndices::default());
        index.h5.insert("mis quarterly".to_string(), 120);
        index
    }

    fn profile() -> Vec<Paper> {
        vec![
            paper(
                "Deep Learning for Cyber Threat Intelligence",
                "BM Ampel, S Samtani, H Chen - MIS Quarterly, 2016",
                2016,
                50,
            ),
            paper(
                "Dark Web Hacker Forums",
                "S Samtani, H Zhu, H Chen - Decision Support Systems, 2018",
                2018,
                40,
            ),
            paper("Cyber Threat Intelligence Mining", "H Chen - MIS Quarterly, 2020", 2020, 30),
            paper(
                "Phishing Detection",
                "H Chen, Sagar Samtani - Proceedings of the 55th Hawaii International Conference on System Sciences, 2022",
                2022,
                1,
            ),
            paper("Untitled", "H Chen, K Lee", 2025, 1),
        ]
    }

    #[test]
    fn test_counts_and_indices() {
        let owner = generate_author_name_variations("Hsinchun Chen");
        let stats = compute_author_stats(&profile(), &owner, &index(), &PositionFilter::All, NOW);

        assert_eq!(stats.total_publications, 5);
        assert_eq!(stats.total_citations, 122);
        assert_eq!(stats.most_cited, 50);
        assert_eq!(stats.indices.h_index, 3);
        assert_eq!(stats.solo_authored, 1);
        assert_eq!(stats.solo_citations, 30);
        assert_eq!(stats.first_author, 2);
        assert_eq!(stats.first_author_citations, 2);
        assert_eq!(stats.last_author, 2);
        assert_eq!(stats.middle_author, 0);
        assert_eq!(stats.co_authored, 4);

        assert_eq!(stats.first_year, Some(2016));
        assert_eq!(stats.last_year, Some(2025));
        assert_eq!(stats.year_span, Some(10));
        assert_eq!(stats.years_since_first, 10);
        assert!((stats.m_index.unwrap() - 0.3).abs() < 1e-9);
        assert_eq!(stats.recent_activity.last1_year, 1);
        assert_eq!(stats.recent_activity.last5_years, 2);
        assert!(stats.mssi.unwrap() > 0.0);
        assert!(stats.l_index.is_some());
        assert!(stats.authorship_drift.is_none());
    }

    #[test]
    fn test_quality_and_venues() {
        let owner = generate_author_name_variations("Hsinchun Chen");
        let stats = compute_author_stats(&profile(), &owner, &index(), &PositionFilter::All, NOW);

        assert_eq!(stats.quality_counts.q1, 3);
        assert_eq!(stats.quality_counts.abdc_a, 3);
        assert_eq!(stats.quality_counts.ft50, 2);
        assert_eq!(stats.quality_counts.core.a, 1);

        assert_eq!(stats.top_venues[0].venue, "MIS Quarterly");
        assert_eq!(stats.top_venues[0].count, 2);
        // the author-only line on the last paper has no venue
        assert_eq!(stats.venue_diversity, 3);
        assert!(stats.top_venues.iter().all(|v| v.venue != "H Chen, K Lee"));

        // MISQ papers carry h5 = 120; others weigh 1
        let misq_weight = 1.0 + 121f64.ln();
        let expected = 80.0 * misq_weight + 42.0;
        assert!((stats.eigenfactor_style.unwrap() - expected).abs() < 1e-9);
    }

    #[test]
    fn test_co_authors() {
        let owner = generate_author_name_variations("Hsinchun Chen");
        let stats = compute_author_stats(&profile(), &owner, &index(), &PositionFilter::All, NOW);

        // "S Samtani" and "Sagar Samtani" normalize differently
        assert_eq!(stats.unique_co_authors, 5);
        let top = &stats.co_authors[0];
        assert_eq!(top.name, "S Samtani");
        assert_eq!(top.count, 2);
        assert_eq!(top.citations, 90);
        assert_eq!(top.h_index, 2);
        assert_eq!(top.role_share.last, 1.0);
    }

    #[test]
    fn test_best_name_prefers_spelled_out() {
        let mut tally = CoAuthorTally::default();
        tally.add("S Samtani", 5, AuthorRole::Last);
        tally.add("Sagar Samtani", 3, AuthorRole::First);
        tally.add("S. Samtani", 1, AuthorRole::Middle);
        let stat = tally.into_stat();
        assert_eq!(stat.name, "Sagar Samtani");
        assert_eq!(stat.count, 3);
        assert!((stat.role_share.first - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_position_filter() {
        let owner = generate_author_name_variations("Hsinchun Chen");
        let filter = PositionFilter::parse("first+solo");
        let stats = compute_author_stats(&profile(), &owner, &index(), &filter, NOW);
        assert_eq!(stats.total_publications, 3);
        assert_eq!(stats.total_citations, 32);
        assert_eq!(stats.last_author, 0);
    }

    #[test]
    fn test_title_tokens() {
        let owner = generate_author_name_variations("Hsinchun Chen");
        let stats = compute_author_stats(&profile(), &owner, &index(), &PositionFilter::All, NOW);
        let first = &stats.top_title_tokens[0];
        // "cyber", "intelligence" and "threat" appear twice; ties sort by token
        assert_eq!(first.token, "cyber");
        assert_eq!(first.display, "Cyber");
        assert_eq!(first.count, 2);
        assert!(stats.top_title_tokens.iter().all(|t| t.token != "for"));
        assert_eq!(title_tokens("A 2020 Study of AI in 5G"), vec!["AI", "5G"]);
    }

    #[test]
    fn test_empty_profile() {
        let stats = compute_author_stats(&[], &[], &QualityIndex::new(), &PositionFilter::All, NOW);
        assert_eq!(stats.total_publications, 0);
        assert_eq!(stats.indices.h_index, 0);
        assert_eq!(stats.indices.citation_gini, None);
        assert_eq!(stats.m_index, None);
        assert_eq!(stats.mssi, None);
        assert_eq!(stats.avg_team_size, None);
        assert_eq!(stats.years_since_first, 1);
        assert!(stats.top_venues.is_empty());
        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["hIndex"], 0);
        assert!(json["citationGini"].is_null());
    }

    #[test]
    fn test_drift_reported_with_enough_dated_papers() {
        let owner = generate_author_name_variations("Hsinchun Chen");
        let mut papers = Vec::new();
        for year in 2010..2013 {
            papers.push(paper("Early", "H Chen, S Samtani", year, 5));
        }
        for year in 2020..2023 {
            papers.push(paper("Late", "S Samtani, H Chen", year, 5));
        }
        let stats = compute_author_stats(&papers, &owner, &QualityIndex::new(), &PositionFilter::All, NOW);
        assert_eq!(stats.authorship_drift.unwrap().label, "first → last");
    }
}
