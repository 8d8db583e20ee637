use super::names::{
    extract_initials, extract_last_name, first_name_part, normalize_author_name, strip_name_credentials,
    strip_trailing_suffix_tokens,
};

/// Given name -> short forms used in author lists
const NICKNAMES: &[(&str, &[&str])] = &[
    ("william", &["bill", "will"]),
    ("robert", &["bob", "rob"]),
    ("richard", &["rick", "dick"]),
    ("james", &["jim"]),
    ("benjamin", &["ben"]),
    ("michael", &["mike"]),
    ("elizabeth", &["liz", "beth"]),
    ("katherine", &["kate"]),
    ("thomas", &["tom"]),
    ("joseph", &["joe"]),
    ("daniel", &["dan"]),
    ("christopher", &["chris"]),
    ("alexander", &["alex"]),
    ("jonathan", &["jon"]),
    ("nicholas", &["nick"]),
    ("matthew", &["matt"]),
    ("andrew", &["andy"]),
    ("edward", &["ed"]),
    ("samuel", &["sam"]),
    ("margaret", &["maggie", "peggy"]),
];

fn nicknames_for(first: &str) -> &'static [&'static str] {
    let lower = first.to_lowercase();
    NICKNAMES
        .iter()
        .find(|(given, _)| *given == lower)
        .map(|(_, nicks)| *nicks)
        .unwrap_or(&[])
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn first_letter(word: &str) -> Option<char> {
    word.chars().find(|c| c.is_alphanumeric())
}

/// Renderings of a profile owner's name as they show up in author lists.
///
/// "Benjamin M. Ampel" yields "Ampel", "B Ampel", "BAmpel", "BM Ampel",
/// "BMAmpel", "Benjamin Ampel", "Ben Ampel" and so on. First occurrence order
/// is kept and duplicates are removed.
pub fn generate_author_name_variations(full_name: &str) -> Vec<String> {
    let full_name = full_name.trim();
    let base = strip_name_credentials(full_name);
    let base_no_suffix = strip_trailing_suffix_tokens(&base);

    let mut variations: Vec<String> = Vec::new();
    let mut push = |v: String| {
        if !v.is_empty() && !variations.contains(&v) {
            variations.push(v);
        }
    };

    push(full_name.to_string());
    push(base.clone());
    push(base_no_suffix.clone());

    let parts: Vec<&str> = base_no_suffix.split_whitespace().collect();
    if parts.len() >= 2 {
        let last = parts[parts.len() - 1];
        let given = &parts[..parts.len() - 1];

        push(last.to_string());

        if let Some(f) = first_letter(given[0]) {
            push(format!("{} {}", f, last));
            push(format!("{}{}", f, last));
        }

        let initials: String = given.iter().filter_map(|p| first_letter(p)).collect();
        if !initials.is_empty() {
            push(format!("{} {}", initials, last));
            push(format!("{}{}", initials, last));
        }

        push(format!("{} {}", given[0], last));

        for nick in nicknames_for(given[0].trim_end_matches('.')) {
            push(format!("{} {}", capitalize(nick), last));
            if let Some(n) = first_letter(nick) {
                push(format!("{} {}", n.to_ascii_uppercase(), last));
            }
        }
    }

    variations
}

/// Whether `name` from an author list refers to the person described by `variations`.
///
/// Matches on equal normalized names, or on an equal last name together with
/// compatible initials ("CH Yang" / "Chi-Heng Yang", "B Ampel" / "BM Ampel").
pub fn is_author_variation(name: &str, variations: &[String]) -> bool {
    if variations.is_empty() {
        return false;
    }

    let normalized = normalize_author_name(name);
    if normalized.is_empty() {
        return false;
    }
    if variations.iter().any(|v| normalize_author_name(v) == normalized) {
        return true;
    }

    let last = extract_last_name(name);
    if last.is_empty() {
        return false;
    }
    let initials = extract_initials(name);
    let first_part = first_name_part(name);

    variations.iter().any(|variation| {
        if extract_last_name(variation) != last {
            return false;
        }
        let var_initials = extract_initials(variation);

        if !initials.is_empty()
            && !var_initials.is_empty()
            && (initials.starts_with(&var_initials) || var_initials.starts_with(&initials))
        {
            return true;
        }
        if !initials.is_empty() && first_name_part(variation).starts_with(&initials) {
            return true;
        }
        !var_initials.is_empty() && first_part.starts_with(&var_initials)
    })
}
