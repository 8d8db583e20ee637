//! Author name cleanup and comparison keys.
//!
//! Listings render the same person as "Benjamin M. Ampel", "BM Ampel" or
//! "Dr. Benjamin Ampel, PhD". The functions here peel titles, credentials and
//! generational suffixes off so names can be compared.

use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;

lazy_static! {
    /// Segment separators: ASCII and full-width commas, low quotes, semicolons
    static ref SEGMENT_SEPARATOR: Regex = Regex::new(r"\s*[,，‚‛﹐﹑;]+\s*").unwrap();

    static ref NAME_SUFFIXES: HashSet<&'static str> =
        ["jr", "sr", "ii", "iii", "iv", "v"].into_iter().collect();

    static ref NAME_TITLES: HashSet<&'static str> =
        ["dr", "prof", "professor", "mr", "mrs", "ms", "miss", "sir", "dame"].into_iter().collect();

    static ref CREDENTIALS: HashSet<&'static str> = [
        "phd", "dphil", "md", "mba", "jd", "esq", "dds", "dmd", "dvm", "pharmd", "do", "dnp", "dpt", "od",
        "ms", "ma", "msc", "mcs", "mse", "meng", "mph", "mpa", "mpp", "msw",
        "bs", "ba", "bsc", "beng",
        "cpa", "cfa", "cissp", "cism", "cisa", "csp", "pe", "peng",
        "rn", "lcsw", "lmft", "lpc", "np", "pa",
        "facp", "facc", "facs", "frcpc", "frcs", "frs",
    ]
    .into_iter()
    .collect();

    /// Credentials that double as surnames or initials ("Minh Do", "Li Ma").
    /// Only stripped when set off by a comma.
    static ref AMBIGUOUS_CREDENTIALS: HashSet<&'static str> =
        ["do", "ma", "ba", "ms", "pa", "pe", "np", "od", "bs", "rn", "jd"].into_iter().collect();
}

/// Lowercase alphanumerics only ("Ph.D." -> "phd")
pub fn normalize_name_token(token: &str) -> String {
    token
        .chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

pub fn is_credential_token(token: &str) -> bool {
    let t = normalize_name_token(token);
    !t.is_empty() && CREDENTIALS.contains(t.as_str())
}

pub fn is_suffix_token(token: &str) -> bool {
    let t = normalize_name_token(token.trim_end_matches(['.', ',']));
    !t.is_empty() && NAME_SUFFIXES.contains(t.as_str())
}

/// Every whitespace token is a credential ("PhD", "M.D. MPH")
pub fn is_credential_only(name: &str) -> bool {
    let tokens: Vec<String> = name
        .split_whitespace()
        .map(normalize_name_token)
        .filter(|t| !t.is_empty())
        .collect();
    !tokens.is_empty() && tokens.iter().all(|t| CREDENTIALS.contains(t.as_str()))
}

/// Drop honorifics in front of a name ("Dr. Prof. Jane Doe" -> "Jane Doe").
/// A lone token is never dropped.
pub fn strip_leading_titles(name: &str) -> String {
    let mut tokens: Vec<&str> = name.split_whitespace().collect();
    while tokens.len() > 1 {
        let raw = tokens[0]
            .trim_start_matches(|c: char| !c.is_alphanumeric())
            .trim_end_matches(['.', ',']);
        if NAME_TITLES.contains(normalize_name_token(raw).as_str()) {
            tokens.remove(0);
        } else {
            break;
        }
    }
    tokens.join(" ")
}

/// Drop credential tokens glued to the end without a comma ("Jane Doe MBA").
fn strip_trailing_credentials_no_comma(name: &str) -> String {
    let mut tokens: Vec<&str> = name.split_whitespace().collect();
    while tokens.len() > 1 {
        let last = tokens[tokens.len() - 1].trim_end_matches(['.', ',']);
        let norm = normalize_name_token(last);
        if is_credential_token(last) && !AMBIGUOUS_CREDENTIALS.contains(norm.as_str()) {
            tokens.pop();
        } else {
            break;
        }
    }
    tokens.join(" ")
}

/// Remove titles, a trailing `*` marker and credential clauses, keeping
/// generational suffixes.
///
/// Comma-separated clauses after the primary name are dropped when every token
/// in them is a credential; a clause that is exactly one suffix ("Jr.", "II")
/// stays attached.
///
/// "Amrou Awaysheh, PhD, MBA" -> "Amrou Awaysheh";
/// "Carlos M. Ruiz, II, MD, MPH" -> "Carlos M. Ruiz, II".
pub fn strip_name_credentials(name: &str) -> String {
    let base = strip_leading_titles(name.trim().trim_end_matches('*').trim());
    if base.is_empty() {
        return String::new();
    }

    let mut parts = SEGMENT_SEPARATOR
        .split(&base)
        .map(str::trim)
        .filter(|p| !p.is_empty());
    let primary = parts.next().unwrap_or_default();

    let kept: Vec<&str> = parts
        .filter(|segment| {
            let tokens: Vec<&str> = segment.split_whitespace().collect();
            if tokens.len() == 1 && is_suffix_token(tokens[0]) {
                return true;
            }
            !(!tokens.is_empty() && tokens.iter().all(|t| is_credential_token(t)))
        })
        .collect();

    let joined = if kept.is_empty() {
        primary.to_string()
    } else {
        format!("{}, {}", primary, kept.join(", "))
    };
    strip_trailing_credentials_no_comma(&joined)
}

/// Drop generational suffixes at the end ("Mary Ann Smith Jr." -> "Mary Ann Smith").
/// Trailing commas left behind are trimmed as well.
pub fn strip_trailing_suffix_tokens(name: &str) -> String {
    let mut tokens: Vec<&str> = name.split_whitespace().collect();
    while tokens.len() > 1 && is_suffix_token(tokens[tokens.len() - 1]) {
        tokens.pop();
    }
    tokens.join(" ").trim_end_matches([',', ';']).to_string()
}

/// Credentials and suffixes removed, `*` dropped
fn core_name(name: &str) -> String {
    strip_trailing_suffix_tokens(&strip_name_credentials(name))
        .trim_end_matches('*')
        .trim()
        .to_string()
}

/// Lowercased comparison key
pub fn normalize_author_name(name: &str) -> String {
    core_name(name).to_lowercase()
}

/// Lowercased last token ("Dr. Paul T. Bartone" -> "bartone")
pub fn extract_last_name(name: &str) -> String {
    core_name(name)
        .split_whitespace()
        .last()
        .map(|s| s.trim_end_matches([',', ';', '.']).to_lowercase())
        .unwrap_or_default()
}

/// Lowercased initials of every token but the last.
///
/// Hyphenated parts each contribute an initial and short all-capital tokens are
/// read as packed initials, so "Chi-Heng Yang" and "CH Yang" both give "ch".
pub fn extract_initials(name: &str) -> String {
    let cleaned = core_name(name);
    let tokens: Vec<&str> = cleaned.split_whitespace().collect();
    if tokens.len() < 2 {
        return String::new();
    }

    let mut initials = String::new();
    for token in &tokens[..tokens.len() - 1] {
        for part in token.split('-') {
            let word: String = part.chars().filter(|c| c.is_alphanumeric()).collect();
            let packed = (2..=3).contains(&word.chars().count()) && word.chars().all(|c| c.is_uppercase());
            if packed {
                initials.extend(word.chars().flat_map(char::to_lowercase));
            } else if let Some(first) = word.chars().next() {
                initials.extend(first.to_lowercase());
            }
        }
    }
    initials
}

/// First token of the cleaned name, lowercased
pub(crate) fn first_name_part(name: &str) -> String {
    core_name(name)
        .split_whitespace()
        .next()
        .map(str::to_lowercase)
        .unwrap_or_default()
}
