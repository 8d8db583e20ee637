pub mod paper;
pub mod venue;

pub use paper::{
    clean_title, compute_paper_key, detect_artifacts, parse_year, Artifacts, MAX_FINGERPRINT_LEN,
};
pub use venue::extract_venue_from_authors_venue;
