pub mod author_stats;
pub mod indices;
pub mod paper;

pub use author_stats::{
    compute_author_stats, AuthorStats, CoAuthorStat, CoreCounts, QualityCounts, RecentActivity, TitleToken, TopVenue,
};
pub use indices::*;
pub use paper::*;
