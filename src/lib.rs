//! Bibliometric signals for scholarly search listings: venue quality badges,
//! citation indices and author career statistics.

pub mod author;
pub mod common;
pub mod extract;
pub mod index;
pub mod metrics;
pub mod venue;
