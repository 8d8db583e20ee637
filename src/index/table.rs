use std::collections::BTreeMap;
use std::ops::Bound;

/// Minimum length of a key used as a prefix of a longer venue, unless the key
/// is multi-word. Keeps short keys like "ais" from matching
/// "ais transactions on replication research".
pub const MIN_PREFIX_MATCH_LEN: usize = 12;

/// Minimum venue length for the abbreviation rule used by flat lists (FT50, UTD24)
pub const MIN_ABBREVIATION_LEN: usize = 5;

/// Lookup table keyed by normalized venue name.
///
/// Keys are kept sorted so every scan has a deterministic order and
/// prefix scans are range queries instead of full passes.
#[derive(Debug, Clone)]
pub struct RankTable<V> {
    entries: BTreeMap<String, V>,
}

/// Flat venue list (FT50, UTD24, ERA)
pub type VenueSet = RankTable<()>;

impl<V> Default for RankTable<V> {
    fn default() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }
}

impl<V> RankTable<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert under an already-normalized key. Later inserts win.
    pub fn insert(&mut self, key: String, value: V) {
        if !key.is_empty() {
            self.entries.insert(key, value);
        }
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.entries.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Exact match, then fuzzy prefix match
    pub fn lookup(&self, venue: &str) -> Option<&V> {
        self.get(venue).or_else(|| self.fuzzy_get(venue))
    }

    /// Word-boundary prefix match in either direction.
    ///
    /// 1. The longest key that is a word prefix of `venue`
    ///    ("information systems research" for "information systems research 12").
    /// 2. Otherwise the first key (in sorted order) that `venue` is a word prefix of
    ///    ("mis quarterly" for key "mis quarterly management information systems").
    ///
    /// Only keys matched in direction 1 must pass [`is_prefix_candidate`]; a short
    /// venue ("misq") may still resolve to a longer key it abbreviates.
    pub fn fuzzy_get(&self, venue: &str) -> Option<&V> {
        if venue.is_empty() {
            return None;
        }

        let key_prefix_of_venue = venue
            .char_indices()
            .rev()
            .filter(|(_, c)| *c == ' ')
            .map(|(i, _)| &venue[..i])
            .filter(|prefix| is_prefix_candidate(prefix))
            .find_map(|prefix| self.entries.get(prefix));
        if key_prefix_of_venue.is_some() {
            return key_prefix_of_venue;
        }

        self.extensions_of(venue).next().map(|(_, v)| v)
    }

    /// Keys that extend `venue` by at least one whole word, in sorted order
    fn extensions_of<'a>(&'a self, venue: &str) -> impl Iterator<Item = (&'a String, &'a V)> + 'a {
        let with_space = format!("{} ", venue);
        self.entries
            .range::<str, _>((Bound::Included(with_space.as_str()), Bound::Unbounded))
            .take_while(move |(key, _)| key.starts_with(&with_space))
    }
}

impl RankTable<()> {
    pub fn insert_key(&mut self, key: String) {
        self.insert(key, ());
    }

    /// Stricter rule for flat top-journal lists: exact, or `venue` abbreviates an
    /// entry ("mis quarterly" for "mis quarterly management information systems").
    /// An entry that is a prefix of the venue never matches, so "journal of marketing"
    /// stays off "journal of marketing analytics".
    pub fn abbreviation_match(&self, venue: &str) -> bool {
        if self.contains(venue) {
            return true;
        }
        venue.len() >= MIN_ABBREVIATION_LEN && self.extensions_of(venue).next().is_some()
    }
}

/// A prefix may stand in for a longer name only if it is long or multi-word
pub fn is_prefix_candidate(prefix: &str) -> bool {
    prefix.len() >= MIN_PREFIX_MATCH_LEN || prefix.contains(' ')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(entries: &[(&str, &str)]) -> RankTable<String> {
        let mut t = RankTable::new();
        for (k, v) in entries {
            t.insert(k.to_string(), v.to_string());
        }
        t
    }

    #[test]
    fn test_exact_lookup() {
        let t = table(&[("mis quarterly", "A*")]);
        assert_eq!(t.lookup("mis quarterly").map(String::as_str), Some("A*"));
        assert!(t.lookup("quarterly").is_none());
    }

    #[test]
    fn test_key_prefix_of_venue() {
        let t = table(&[("information systems research", "A*")]);
        assert_eq!(
            t.fuzzy_get("information systems research seminar in scandinavia").map(String::as_str),
            Some("A*")
        );
    }

    #[test]
    fn test_venue_prefix_of_key() {
        let t = table(&[("mis quarterly management information systems", "A*")]);
        assert_eq!(t.fuzzy_get("mis quarterly").map(String::as_str), Some("A*"));
    }

    #[test]
    fn test_word_boundary_required() {
        let t = table(&[("journal of finance", "A*")]);
        assert!(t.fuzzy_get("journal of financial economics").is_none());
    }

    #[test]
    fn test_short_key_guarded_short_venue_allowed() {
        // a short key never stands in for a longer venue
        let t = table(&[("ais", "B")]);
        assert!(t.fuzzy_get("ais transactions on replication research").is_none());

        // a short venue still reaches the longer key it abbreviates
        let t = table(&[("misq management information systems quarterly", "A*")]);
        assert_eq!(t.lookup("misq").map(String::as_str), Some("A*"));
        assert!(t.lookup("mis").is_none());
    }

    #[test]
    fn test_long_single_word_prefix_allowed() {
        let t = table(&[("econometrica", "A*")]);
        assert_eq!(t.fuzzy_get("econometrica supplement").map(String::as_str), Some("A*"));
    }

    #[test]
    fn test_longest_key_prefix_wins() {
        let t = table(&[
            ("ieee transactions", "C"),
            ("ieee transactions on software engineering", "A*"),
        ]);
        assert_eq!(
            t.fuzzy_get("ieee transactions on software engineering early access").map(String::as_str),
            Some("A*")
        );
    }

    #[test]
    fn test_extension_order_is_deterministic() {
        let t = table(&[
            ("decision sciences journal", "B"),
            ("decision sciences institute", "C"),
        ]);
        // sorted order: "...institute" < "...journal"
        assert_eq!(t.fuzzy_get("decision sciences").map(String::as_str), Some("C"));
    }

    #[test]
    fn test_abbreviation_match_rules() {
        let mut set = VenueSet::new();
        set.insert_key("journal of marketing".to_string());
        set.insert_key("mis quarterly management information systems".to_string());

        assert!(set.abbreviation_match("journal of marketing"));
        assert!(set.abbreviation_match("mis quarterly"));
        assert!(!set.abbreviation_match("journal of marketing analytics"));
        assert!(!set.abbreviation_match("mis"));
    }

    #[test]
    fn test_empty_key_ignored() {
        let mut t: RankTable<u32> = RankTable::new();
        t.insert(String::new(), 1);
        assert!(t.is_empty());
        assert!(t.fuzzy_get("").is_none());
    }
}
