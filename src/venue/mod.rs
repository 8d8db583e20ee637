//! Venue classification: normalization, ranking badges and the weight model.

pub mod badge;
pub mod grouping;
pub mod matcher;
pub mod normalize;
pub mod preprint;
pub mod weight;

pub use badge::*;
pub use grouping::{clean_proceedings_venue, pick_venue_display, venue_display_name, venue_grouping_key};
pub use matcher::{conference_alias, is_conference_venue, quality_badges_for_venue};
pub use normalize::normalize_venue_name;
pub use preprint::{is_preprint_venue, preprint_server};
pub use weight::{badge_weight, venue_weight_for_badges, venue_weight_for_venue, BASELINE_VENUE_WEIGHT};
