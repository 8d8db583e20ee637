use log::debug;
use std::collections::BTreeMap;
use std::time::Instant;

use super::sources::{value_as_positive_f64, value_as_token, ExtraIndices, JcrRecord, QualitySettings};
use super::{QualityIndex, RankTable, VenueSet};
use crate::common::format_elapsed;
use crate::venue::{
    normalize_venue_name, AbdcRank, AbsRank, CcfRank, CoreRank, JcrMetrics, NorwegianLevel, Quartile,
    VhbRank,
};

/// Merge every ranking source into one [`QualityIndex`].
///
/// Pre-built indices from `extra` go in first so that `name,rank` lines typed
/// into `settings` override them on conflicting keys. Every name runs through
/// [`normalize_venue_name`]; tokens that fail the per-system format check are
/// dropped.
pub fn compile_quality_index(settings: &QualitySettings, extra: &ExtraIndices) -> QualityIndex {
    let start = Instant::now();
    let mut index = QualityIndex::new();
    let mut dropped = 0usize;

    ingest_list(&settings.ft50_list, &mut index.ft50);
    ingest_list(&settings.utd24_list, &mut index.utd24);

    dropped += ingest_rank_lines(&settings.abdc_ranks, &mut index.abdc, AbdcRank::parse);

    if let Some(map) = &extra.vhb_index {
        dropped += ingest_map(map.iter().map(|(k, v)| (k, v.as_str())), &mut index.vhb, VhbRank::parse);
    }
    dropped += ingest_rank_lines(&settings.vhb_ranks, &mut index.vhb, VhbRank::parse);

    if let Some(map) = &extra.quartiles_index {
        dropped += ingest_map(map.iter().map(|(k, v)| (k, v.as_str())), &mut index.quartiles, Quartile::parse);
    }

    if let Some(map) = &extra.jcr_index {
        for (name, record) in map {
            match jcr_metrics(record) {
                Some(metrics) => index.jcr.insert(normalize_venue_name(name), metrics),
                None => dropped += 1,
            }
        }
    }

    if let Some(map) = &extra.impact_index {
        for (name, value) in map {
            match value_as_positive_f64(value) {
                Some(impact) => index.impact.insert(normalize_venue_name(name), impact),
                None => dropped += 1,
            }
        }
    }

    dropped += ingest_rank_lines(&settings.quartiles, &mut index.quartiles, Quartile::parse);
    dropped += ingest_rank_lines(&settings.core_ranks, &mut index.core, CoreRank::parse);
    dropped += ingest_rank_lines(&settings.ccf_ranks, &mut index.ccf, CcfRank::parse);

    if let Some(list) = &extra.era_set {
        for name in list {
            index.era.insert_key(normalize_venue_name(name));
        }
    }

    if let Some(map) = &extra.norwegian_map {
        dropped += ingest_value_map(map, &mut index.norwegian, NorwegianLevel::parse);
    }

    if let Some(map) = &extra.abs_index {
        dropped += ingest_value_map(map, &mut index.abs, AbsRank::parse);
    }

    if let Some(map) = &extra.h5_index {
        for (name, value) in map {
            match value_as_positive_f64(value).map(|h| h.round() as u32).filter(|h| *h > 0) {
                Some(h5) => index.h5.insert(normalize_venue_name(name), h5),
                None => dropped += 1,
            }
        }
    }

    debug!(
        "Compiled quality index: {} entries, {} invalid rank tokens dropped in {}",
        index.len(),
        dropped,
        format_elapsed(start.elapsed())
    );

    index
}

/// Non-empty, non-comment lines, trimmed
pub fn parse_lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
}

/// Split a `name,rank` line at its last comma so names may contain commas
pub fn split_rank_line(line: &str) -> Option<(&str, &str)> {
    let idx = line.rfind(',')?;
    if idx == 0 || idx >= line.len() - 1 {
        return None;
    }
    let name = line[..idx].trim();
    let rank = line[idx + 1..].trim();
    if name.is_empty() || rank.is_empty() {
        return None;
    }
    Some((name, rank))
}

/// Normalized keys for every `|`-separated synonym of a name
fn synonym_keys(name: &str) -> impl Iterator<Item = String> + '_ {
    name.split('|')
        .map(normalize_venue_name)
        .filter(|key| !key.is_empty())
}

fn ingest_list(text: &str, set: &mut VenueSet) {
    for line in parse_lines(text) {
        for key in synonym_keys(line) {
            set.insert_key(key);
        }
    }
}

/// Returns the number of lines dropped
fn ingest_rank_lines<V: Clone>(
    text: &str,
    table: &mut RankTable<V>,
    parse: impl Fn(&str) -> Option<V>,
) -> usize {
    let mut dropped = 0;
    for line in parse_lines(text) {
        let parsed = split_rank_line(line).and_then(|(name, rank)| parse(rank).map(|r| (name, r)));
        match parsed {
            Some((name, rank)) => {
                for key in synonym_keys(name) {
                    table.insert(key, rank.clone());
                }
            }
            None => dropped += 1,
        }
    }
    dropped
}

fn ingest_map<'a, V>(
    entries: impl Iterator<Item = (&'a String, &'a str)>,
    table: &mut RankTable<V>,
    parse: impl Fn(&str) -> Option<V>,
) -> usize {
    let mut dropped = 0;
    for (name, raw) in entries {
        match parse(raw) {
            Some(rank) => table.insert(normalize_venue_name(name), rank),
            None => dropped += 1,
        }
    }
    dropped
}

fn ingest_value_map<V>(
    map: &BTreeMap<String, serde_json::Value>,
    table: &mut RankTable<V>,
    parse: impl Fn(&str) -> Option<V>,
) -> usize {
    let mut dropped = 0;
    for (name, value) in map {
        match value_as_token(value).as_deref().and_then(&parse) {
            Some(rank) => table.insert(normalize_venue_name(name), rank),
            None => dropped += 1,
        }
    }
    dropped
}

/// Validated JCR metrics, or `None` when no indicator carries a valid quartile
fn jcr_metrics(record: &JcrRecord) -> Option<JcrMetrics> {
    let quartile = |q: &Option<String>| q.as_deref().and_then(Quartile::parse);
    let number = |v: &Option<serde_json::Value>| v.as_ref().and_then(value_as_positive_f64);

    let metrics = JcrMetrics {
        jif_quartile: quartile(&record.jif_q),
        jif: number(&record.jif),
        jci_quartile: quartile(&record.jci_q),
        jci: number(&record.jci),
        ais_quartile: quartile(&record.ais_q),
        ais: number(&record.ais),
        five_year_quartile: quartile(&record.five_y_jif_q),
        five_year_jif: number(&record.five_y_jif),
    };
    metrics.best_quartile().map(|_| metrics)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn settings() -> QualitySettings {
        QualitySettings {
            ft50_list: "# FT50\nMIS Quarterly|MISQ\nManagement Science\n\n".to_string(),
            utd24_list: "Information Systems Research".to_string(),
            abdc_ranks: "Journal of Management Information Systems,A*\nBad Line\nDecision Support Systems,Z\n"
                .to_string(),
            core_ranks: "International Conference on Information Systems,A\nHawaii International Conference on System Sciences,A\n"
                .to_string(),
            ccf_ranks: "Knowledge Discovery and Data Mining,A*\nSIGIR,A\n".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_parse_lines_skips_comments_and_blanks() {
        let lines: Vec<&str> = parse_lines("# header\n a \n\n#x\nb").collect();
        assert_eq!(lines, vec!["a", "b"]);
    }

    #[test]
    fn test_split_rank_line_uses_last_comma() {
        assert_eq!(
            split_rank_line("Journal of Law, Economics, and Organization,A"),
            Some(("Journal of Law, Economics, and Organization", "A"))
        );
        assert_eq!(split_rank_line(",A"), None);
        assert_eq!(split_rank_line("Name,"), None);
        assert_eq!(split_rank_line("No comma"), None);
    }

    #[test]
    fn test_lists_and_synonyms() {
        let index = compile_quality_index(&settings(), &ExtraIndices::default());
        assert!(index.ft50.contains("mis quarterly"));
        assert!(index.ft50.contains("misq"));
        assert!(index.ft50.contains("management science"));
        assert_eq!(index.ft50.len(), 3);
        assert!(index.utd24.contains("information systems research"));
    }

    #[test]
    fn test_invalid_ranks_dropped() {
        let index = compile_quality_index(&settings(), &ExtraIndices::default());
        assert_eq!(
            index.abdc.get("journal of management information systems"),
            Some(&AbdcRank::AStar)
        );
        assert!(index.abdc.get("decision support systems").is_none());
        assert_eq!(index.abdc.len(), 1);
        // CCF has no A*
        assert!(index.ccf.get("knowledge discovery and data mining").is_none());
        assert_eq!(index.ccf.get("sigir"), Some(&CcfRank::A));
    }

    #[test]
    fn test_settings_override_extra_quartiles() {
        let mut s = settings();
        s.quartiles = "MIS Quarterly,Q2".to_string();
        let extra = ExtraIndices {
            quartiles_index: Some(
                [
                    ("mis quarterly".to_string(), "Q1".to_string()),
                    ("journal of finance".to_string(), "Q1".to_string()),
                    ("broken".to_string(), "Q9".to_string()),
                ]
                .into_iter()
                .collect(),
            ),
            ..Default::default()
        };
        let index = compile_quality_index(&s, &extra);
        assert_eq!(index.quartiles.get("mis quarterly"), Some(&Quartile::Q2));
        assert_eq!(index.quartiles.get("journal of finance"), Some(&Quartile::Q1));
        assert!(index.quartiles.get("broken").is_none());
    }

    #[test]
    fn test_vhb_extra_then_settings() {
        let mut s = QualitySettings::default();
        s.vhb_ranks = "Management Science,A*".to_string();
        let extra = ExtraIndices {
            vhb_index: Some(
                [
                    ("Management Science".to_string(), "A".to_string()),
                    ("Marketing Science".to_string(), "a+".to_string()),
                ]
                .into_iter()
                .collect(),
            ),
            ..Default::default()
        };
        let index = compile_quality_index(&s, &extra);
        assert_eq!(index.vhb.get("management science"), Some(&VhbRank::APlus));
        assert_eq!(index.vhb.get("marketing science"), Some(&VhbRank::APlus));
    }

    #[test]
    fn test_extra_value_maps() {
        let extra: ExtraIndices = serde_json::from_value(json!({
            "jcrIndex": {
                "MIS Quarterly": { "jifQ": "Q1", "jif": 7.3 },
                "Nowhere Journal": { "jifQ": "Q7" }
            },
            "impactIndex": { "MIS Quarterly": "7.3", "Zero Journal": 0 },
            "absIndex": { "MIS Quarterly": "4*", "Other": 4, "Bad": "5" },
            "norwegianMap": { "MIS Quarterly": "2", "Level Zero": "0" },
            "eraSet": ["The MIS Quarterly"],
            "h5Index": { "ICIS": 45, "Empty": 0 }
        }))
        .unwrap();
        let index = compile_quality_index(&QualitySettings::default(), &extra);

        let jcr = index.jcr.get("mis quarterly").unwrap();
        assert_eq!(jcr.jif_quartile, Some(Quartile::Q1));
        assert_eq!(jcr.jif, Some(7.3));
        assert!(index.jcr.get("nowhere journal").is_none());

        assert_eq!(index.impact.get("mis quarterly"), Some(&7.3));
        assert!(index.impact.get("zero journal").is_none());

        assert_eq!(index.abs.get("mis quarterly"), Some(&AbsRank::FourStar));
        assert_eq!(index.abs.get("other"), Some(&AbsRank::Four));
        assert!(index.abs.get("bad").is_none());

        assert_eq!(index.norwegian.get("mis quarterly"), Some(&NorwegianLevel::Two));
        assert!(index.norwegian.get("level zero").is_none());

        assert!(index.era.contains("mis quarterly"));
        assert_eq!(index.h5.get("icis"), Some(&45));
        assert!(index.h5.get("empty").is_none());
    }

    #[test]
    fn test_empty_inputs_compile_to_empty_index() {
        let index = compile_quality_index(&QualitySettings::default(), &ExtraIndices::default());
        assert!(index.is_empty());
    }
}
