//! Venue keys for grouping a publication list ("top venues") and tidy display names.
//!
//! Coarser than [`super::normalize_venue_name`]: generic words such as
//! "journal", "conference" or "ieee" are dropped so that different renderings
//! of one venue collapse together.

use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;

lazy_static! {
    static ref TRAILING_ELLIPSIS: Regex = Regex::new(r"\s*(?:\.{2,}|\u{2026})\s*$").unwrap();
    static ref LEADING_PROCEEDINGS: Regex =
        Regex::new(r"(?i)^\s*(?:proceedings|proc\.)(?:\s+of)?(?:\s+the)?\s+|^\s*in:\s*").unwrap();
    static ref BRACKETED_YEAR: Regex = Regex::new(r"[(\[]\s*(?:19|20)\d{2}\s*[)\]]").unwrap();
    static ref YEAR: Regex = Regex::new(r"\b(?:19|20)\d{2}\b").unwrap();
    static ref ORDINAL: Regex = Regex::new(r"(?i)\b\d+(?:st|nd|rd|th)\b").unwrap();
    static ref MULTI_SPACE: Regex = Regex::new(r"\s{2,}").unwrap();
    static ref TRAILING_PUNCT: Regex = Regex::new(r"[\s,;-]+$").unwrap();
    static ref NON_ALNUM: Regex = Regex::new(r"[^a-z0-9\s]").unwrap();
    static ref HAWAII_CONFERENCE: Regex = Regex::new(r"conference|hicss|system|international|annual").unwrap();

    static ref GROUPING_STOPWORDS: HashSet<&'static str> = [
        "proceedings", "proceeding", "proc", "conference", "conf", "symposium", "workshop", "meeting",
        "annual", "international", "intl", "on", "of", "the", "and", "for", "in",
        "journal", "transactions", "letters", "communications", "review", "reviews",
        "studies", "research", "science", "sciences", "technology", "technologies",
        "ieee", "acm", "ais", "association", "institute", "society",
    ]
    .into_iter()
    .collect();

    static ref TITLE_LOWER: HashSet<&'static str> = [
        "a", "an", "and", "as", "at", "but", "by", "for", "if", "in", "nor", "of", "on", "or", "per",
        "the", "to", "vs", "via",
    ]
    .into_iter()
    .collect();
}

/// Acronyms that stand for a whole venue name
const VENUE_ACRONYMS: &[(&str, &str)] = &[
    ("hicss", "hawaii international conference on system sciences"),
    ("jmis", "journal of management information systems"),
    ("misq", "management information systems quarterly"),
    ("icis", "international conference on information systems"),
    ("amcis", "americas conference on information systems"),
    ("pacis", "pacific asia conference on information systems"),
    ("ecis", "european conference on information systems"),
];

/// Acronyms kept upper-case by [`venue_display_name`]
const DISPLAY_ACRONYMS: &[(&str, &str)] = &[
    ("mis", "MIS"),
    ("jmis", "JMIS"),
    ("hicss", "HICSS"),
    ("icis", "ICIS"),
    ("amcis", "AMCIS"),
    ("pacis", "PACIS"),
    ("ecis", "ECIS"),
];

/// Strip proceedings boilerplate, years, ordinals and everything after the first comma.
/// Falls back to the trimmed input when nothing is left.
pub fn clean_proceedings_venue(venue: &str) -> String {
    let v = venue.trim();
    if v.is_empty() {
        return String::new();
    }

    let mut out = v.split(',').next().unwrap_or(v).trim().to_string();
    out = TRAILING_ELLIPSIS.replace(&out, "").into_owned();
    out = LEADING_PROCEEDINGS.replace(&out, "").into_owned();
    out = BRACKETED_YEAR.replace_all(&out, "").into_owned();
    out = YEAR.replace_all(&out, "").into_owned();
    out = ORDINAL.replace_all(&out, "").into_owned();
    out = MULTI_SPACE.replace_all(&out, " ").trim().to_string();
    out = TRAILING_PUNCT.replace(&out, "").trim().to_string();

    if out.is_empty() {
        v.to_string()
    } else {
        out
    }
}

fn singular(token: &str) -> String {
    if token.len() > 4 && token.ends_with("ies") {
        format!("{}y", &token[..token.len() - 3])
    } else if token.len() > 4 && token.ends_with('s') {
        token[..token.len() - 1].to_string()
    } else {
        token.to_string()
    }
}

fn significant_tokens(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(singular)
        .filter(|t| !GROUPING_STOPWORDS.contains(t.as_str()))
        .filter(|t| !t.chars().all(|c| c.is_ascii_digit()))
        .collect()
}

/// Grouping key: acronym-expanded, singularized, stopword-free tokens.
/// "ICIS 2021" and "International Conference on Information Systems" share a key.
pub fn venue_grouping_key(venue: &str) -> String {
    let cleaned = clean_proceedings_venue(venue);
    if cleaned.is_empty() {
        return String::new();
    }

    let lower = cleaned.to_lowercase();
    let text = if lower.contains("hawaii") && HAWAII_CONFERENCE.is_match(&lower) {
        "hawaii international conference on system sciences".to_string()
    } else {
        let spaced = NON_ALNUM.replace_all(&lower.replace('&', " and "), " ").into_owned();
        spaced
            .split_whitespace()
            .find_map(|t| VENUE_ACRONYMS.iter().find(|(a, _)| *a == t).map(|(_, full)| full.to_string()))
            .unwrap_or(spaced)
    };

    let tokens = significant_tokens(&text);
    if tokens.is_empty() {
        let trimmed = text.trim();
        return if trimmed == "proceedings" || trimmed == "proceeding" {
            String::new()
        } else {
            trimmed.to_string()
        };
    }
    tokens.join(" ")
}

/// Title-case a venue for display, keeping acronyms and known short forms upper-case
pub fn venue_display_name(venue: &str) -> String {
    let mut out = String::with_capacity(venue.len());
    let mut word_index = 0;

    for (i, piece) in venue.trim().split(' ').enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let word: &str = piece.trim_matches(|c: char| !c.is_ascii_alphanumeric());
        if word.is_empty() {
            out.push_str(piece);
            continue;
        }
        let lower = word.to_lowercase();
        let replacement = if let Some((_, acronym)) = DISPLAY_ACRONYMS.iter().find(|(a, _)| *a == lower) {
            acronym.to_string()
        } else if word.chars().filter(|c| c.is_ascii_uppercase()).count() >= 2 {
            word.to_string()
        } else {
            let keep_lower = word_index > 0 && TITLE_LOWER.contains(lower.as_str());
            word_index += 1;
            if keep_lower {
                lower
            } else {
                let mut chars = lower.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect(),
                    None => lower,
                }
            }
        };
        out.push_str(&piece.replacen(word, &replacement, 1));
    }
    out
}

/// Of two renderings of the same venue, the one with more letters and capitals
pub fn pick_venue_display<'a>(current: &'a str, candidate: &'a str) -> &'a str {
    fn score(s: &str) -> usize {
        let letters = s.chars().filter(|c| c.is_ascii_alphabetic()).count();
        let uppers = s.chars().filter(|c| c.is_ascii_uppercase()).count();
        uppers * 2 + letters + s.len()
    }
    if current.is_empty() {
        return candidate;
    }
    if candidate.is_empty() || current == candidate {
        return current;
    }
    if score(candidate) > score(current) {
        candidate
    } else {
        current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_proceedings_venue() {
        assert_eq!(
            clean_proceedings_venue("Proceedings of the 44th International Conference on Information Systems, 2023"),
            "International Conference on Information Systems"
        );
        assert_eq!(clean_proceedings_venue("Proc. of the ACM (2021) CHI …"), "ACM CHI");
        assert_eq!(clean_proceedings_venue("2021"), "2021");
        assert_eq!(clean_proceedings_venue("   "), "");
    }

    #[test]
    fn test_grouping_key_collapses_renderings() {
        let a = venue_grouping_key("ICIS 2021 Proceedings");
        let b = venue_grouping_key("Proceedings of the International Conference on Information Systems");
        assert_eq!(a, b);
        assert_eq!(a, "information system");

        assert_eq!(
            venue_grouping_key("Proceedings of the 52nd Hawaii International Conference on System Sciences"),
            venue_grouping_key("HICSS")
        );
    }

    #[test]
    fn test_grouping_key_stopwords_and_plurals() {
        assert_eq!(venue_grouping_key("Journal of Consumer Psychology"), "consumer psychology");
        assert_eq!(venue_grouping_key("Decision Support Systems"), "decision support system");
        assert_eq!(venue_grouping_key("Communications of the ACM"), "communication");
        assert_eq!(venue_grouping_key("Proceedings"), "");
    }

    #[test]
    fn test_display_name() {
        assert_eq!(
            venue_display_name("journal of management information systems"),
            "Journal of Management Information Systems"
        );
        assert_eq!(venue_display_name("mis quarterly"), "MIS Quarterly");
        assert_eq!(venue_display_name("the IEEE transactions"), "The IEEE Transactions");
        assert_eq!(venue_display_name("icis (2021)"), "ICIS (2021)");
    }

    #[test]
    fn test_pick_display() {
        assert_eq!(pick_venue_display("", "MIS Quarterly"), "MIS Quarterly");
        assert_eq!(pick_venue_display("mis quarterly", "MIS Quarterly"), "MIS Quarterly");
        assert_eq!(pick_venue_display("MIS Quarterly", "misq"), "MIS Quarterly");
    }
}
