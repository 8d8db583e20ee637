use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref NON_ALNUM: Regex = Regex::new(r"[^a-z0-9]+").unwrap();

    // "proceedings of the 30th ..." and "proceedings of ..."
    static ref LEADING_PROCEEDINGS: Regex = Regex::new(r"^proceedings of (?:the )?").unwrap();

    static ref LEADING_THE: Regex = Regex::new(r"^the ").unwrap();

    // "30th ", "1st ", "22nd ", "43rd "
    static ref LEADING_ORDINAL: Regex = Regex::new(r"^\d+(?:st|nd|rd|th) ").unwrap();

    // Bare year in 1900-2099
    static ref LEADING_YEAR: Regex = Regex::new(r"^(?:19|20)\d{2} ").unwrap();

    // Page ranges lose their hyphen in the first pass, so "1-10" arrives as "1 10".
    // Chained volume/issue/pages are peeled one pair at a time.
    static ref TRAILING_NUMBER_PAIR: Regex = Regex::new(r" \d+ \d+$").unwrap();

    static ref TRAILING_NUMBER: Regex = Regex::new(r" \d+$").unwrap();

    // Disambiguation suffixes some sources append, e.g. "ACM Transactions on Information Systems (TOIS)"
    static ref TRAILING_ABBREVIATION: Regex = Regex::new(
        r" (?:tois|isr|isj|jmis|misq|ejis|jais|jsis|dss|kais|tkdd|tocs|tods|tis)$"
    ).unwrap();
}

/// Canonicalize a free-text venue string into a comparable key.
///
/// Lowercases, maps `&` to `and`, collapses every non-alphanumeric run to a
/// single space, then strips decoration from the edges only:
/// 1. leading "proceedings of (the)"
/// 2. leading "the"
/// 3. leading ordinal ("30th")
/// 4. leading bare year
/// 5. trailing page range and chained number pairs (volume, issue, pages)
/// 6. a trailing bare number
/// 7. a trailing disambiguation abbreviation ("tois", "misq", ...)
///
/// Interior tokens are never touched. The strip pass is repeated until the
/// key stops changing, so `normalize_venue_name(normalize_venue_name(x))`
/// always equals `normalize_venue_name(x)`.
pub fn normalize_venue_name(raw: &str) -> String {
    let lowered = raw.to_lowercase().replace('&', " and ");
    let mut key = NON_ALNUM.replace_all(&lowered, " ").trim().to_string();

    loop {
        let next = strip_pass(&key);
        if next == key {
            return key;
        }
        key = next;
    }
}

/// One ordered pass of edge strips. Each step assumes the previous ones ran.
fn strip_pass(key: &str) -> String {
    let mut t = LEADING_PROCEEDINGS.replace(key, "").trim().to_string();
    t = LEADING_THE.replace(&t, "").trim().to_string();
    t = LEADING_ORDINAL.replace(&t, "").trim().to_string();
    t = LEADING_YEAR.replace(&t, "").trim().to_string();

    while TRAILING_NUMBER_PAIR.is_match(&t) {
        t = TRAILING_NUMBER_PAIR.replace(&t, "").trim().to_string();
    }

    t = TRAILING_NUMBER.replace(&t, "").trim().to_string();
    TRAILING_ABBREVIATION.replace(&t, "").trim().to_string()
}
