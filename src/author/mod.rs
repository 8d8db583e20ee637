//! Author name resolution, co-author attribution and authorship roles.

pub mod drift;
pub mod names;
pub mod role;
pub mod variations;

pub use drift::{authorship_drift, AuthorshipDrift, RoleShares};
pub use names::{
    extract_initials, extract_last_name, is_credential_only, normalize_author_name, strip_leading_titles,
    strip_name_credentials, strip_trailing_suffix_tokens,
};
pub use role::{get_author_role, parse_authors, AuthorEntry, AuthorRole, PositionFilter};
pub use variations::{generate_author_name_variations, is_author_variation};
