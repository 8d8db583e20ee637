use serde::{Deserialize, Serialize};
use std::fmt;

use super::names::{is_credential_only, is_suffix_token, strip_name_credentials};
use super::variations::is_author_variation;

/// One name from an author list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorEntry {
    /// Cleaned name, credentials removed
    pub name: String,
    /// Carried a `*` corresponding-author marker
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub corresponding: bool,
}

fn is_ellipsis(segment: &str) -> bool {
    let squeezed: String = segment.chars().filter(|c| !c.is_whitespace()).collect();
    squeezed.is_empty() || squeezed.chars().all(|c| c == '.' || c == '…')
}

/// Split the author part of an author/venue line into names.
///
/// Only the text before the first " - " is read. Ellipses and credential-only
/// clauses are dropped; a lone generational suffix ("Jr.") is glued back onto
/// the preceding name.
pub fn parse_authors(authors_venue: &str) -> Vec<AuthorEntry> {
    let authors_text = authors_venue.split(" - ").next().unwrap_or_default();
    let mut authors: Vec<AuthorEntry> = Vec::new();

    for segment in authors_text.split(',') {
        let segment = segment.trim().trim_end_matches('…').trim_end_matches("...").trim();
        if is_ellipsis(segment) {
            continue;
        }

        let corresponding = segment.contains('*');
        let name = strip_name_credentials(segment);
        if name.is_empty() || is_credential_only(&name) {
            continue;
        }

        if is_suffix_token(&name) && !name.contains(' ') {
            if let Some(prev) = authors.last_mut() {
                prev.name = format!("{} {}", prev.name, name);
                prev.corresponding |= corresponding;
                continue;
            }
        }

        authors.push(AuthorEntry { name, corresponding });
    }

    authors
}

/// Profile owner's position on a paper
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthorRole {
    Solo,
    First,
    Middle,
    Last,
}

impl AuthorRole {
    pub const ALL: [AuthorRole; 4] = [AuthorRole::Solo, AuthorRole::First, AuthorRole::Middle, AuthorRole::Last];

    pub fn as_str(&self) -> &'static str {
        match self {
            AuthorRole::Solo => "solo",
            AuthorRole::First => "first",
            AuthorRole::Middle => "middle",
            AuthorRole::Last => "last",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "solo" => Some(AuthorRole::Solo),
            "first" => Some(AuthorRole::First),
            "middle" => Some(AuthorRole::Middle),
            "last" => Some(AuthorRole::Last),
            _ => None,
        }
    }
}

impl fmt::Display for AuthorRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Role of the person described by `variations` in an author list.
///
/// Solo when nobody else is listed. First when at position 0 or when one of
/// the owner's entries carries the corresponding marker; first wins over last.
/// Last needs at least two authors. Anything else, including an unknown
/// owner or an empty list, is middle.
pub fn get_author_role(authors: &[AuthorEntry], variations: &[String]) -> AuthorRole {
    if variations.is_empty() || authors.is_empty() {
        return AuthorRole::Middle;
    }

    let is_owner: Vec<bool> = authors
        .iter()
        .map(|a| is_author_variation(&a.name, variations))
        .collect();

    if is_owner.iter().all(|owner| *owner) {
        return AuthorRole::Solo;
    }

    let is_first = is_owner[0]
        || authors
            .iter()
            .zip(&is_owner)
            .any(|(a, owner)| *owner && a.corresponding);
    if is_first {
        return AuthorRole::First;
    }

    if authors.len() >= 2 && is_owner[authors.len() - 1] {
        return AuthorRole::Last;
    }
    AuthorRole::Middle
}

/// Authorship position filter, e.g. `all`, `first`, `first+last`
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PositionFilter {
    #[default]
    All,
    Roles(Vec<AuthorRole>),
}

impl PositionFilter {
    /// Unknown role names are ignored; nothing recognisable means `All`
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.is_empty() || raw.eq_ignore_ascii_case("all") {
            return PositionFilter::All;
        }
        let roles: Vec<AuthorRole> = raw.split('+').filter_map(AuthorRole::parse).collect();
        if roles.is_empty() {
            PositionFilter::All
        } else {
            PositionFilter::Roles(roles)
        }
    }

    pub fn matches(&self, role: AuthorRole) -> bool {
        match self {
            PositionFilter::All => true,
            PositionFilter::Roles(roles) => roles.contains(&role),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::author::generate_author_name_variations;

    fn names(authors: &[AuthorEntry]) -> Vec<&str> {
        authors.iter().map(|a| a.name.as_str()).collect()
    }

    #[test]
    fn test_parse_authors_basic() {
        let authors = parse_authors("BM Ampel, S Samtani, H Zhu, H Chen - MIS Quarterly, 2023 - misq.org");
        assert_eq!(names(&authors), vec!["BM Ampel", "S Samtani", "H Zhu", "H Chen"]);
    }

    #[test]
    fn test_parse_authors_suffix_credentials_and_ellipsis() {
        let authors = parse_authors("S Samtani, JF Nunamaker, Jr., H Chen, PhD, … - HICSS");
        assert_eq!(names(&authors), vec!["S Samtani", "JF Nunamaker Jr.", "H Chen"]);
    }

    #[test]
    fn test_parse_authors_corresponding_marker() {
        let authors = parse_authors("S Samtani, H Chen*");
        assert_eq!(names(&authors), vec!["S Samtani", "H Chen"]);
        assert!(!authors[0].corresponding);
        assert!(authors[1].corresponding);
    }

    #[test]
    fn test_parse_authors_empty() {
        assert!(parse_authors("").is_empty());
        assert!(parse_authors(" - Some Venue").is_empty());
    }

    fn owner() -> Vec<String> {
        generate_author_name_variations("Hsinchun Chen")
    }

    #[test]
    fn test_roles() {
        let v = owner();
        assert_eq!(get_author_role(&parse_authors("H Chen"), &v), AuthorRole::Solo);
        assert_eq!(get_author_role(&parse_authors("H Chen, S Samtani"), &v), AuthorRole::First);
        assert_eq!(get_author_role(&parse_authors("S Samtani, H Chen"), &v), AuthorRole::Last);
        assert_eq!(
            get_author_role(&parse_authors("S Samtani, H Chen, H Zhu"), &v),
            AuthorRole::Middle
        );
        assert_eq!(
            get_author_role(&parse_authors("S Samtani, H Zhu, H Chen*"), &v),
            AuthorRole::First
        );
    }

    #[test]
    fn test_role_without_owner_or_authors() {
        assert_eq!(get_author_role(&parse_authors("S Samtani"), &[]), AuthorRole::Middle);
        assert_eq!(get_author_role(&[], &owner()), AuthorRole::Middle);
        // owner not on the paper at all
        assert_eq!(get_author_role(&parse_authors("S Samtani, H Zhu"), &owner()), AuthorRole::Middle);
    }

    #[test]
    fn test_position_filter() {
        assert_eq!(PositionFilter::parse("all"), PositionFilter::All);
        assert_eq!(PositionFilter::parse("bogus"), PositionFilter::All);
        let filter = PositionFilter::parse("first+last");
        assert!(filter.matches(AuthorRole::First));
        assert!(filter.matches(AuthorRole::Last));
        assert!(!filter.matches(AuthorRole::Middle));
        assert!(PositionFilter::All.matches(AuthorRole::Solo));
    }
}
