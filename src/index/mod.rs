pub mod builder;
pub mod cache;
pub mod persistence;
pub mod sources;
pub mod table;

pub use builder::*;
pub use cache::*;
pub use persistence::*;
pub use sources::*;
pub use table::*;

use serde::Serialize;

use crate::venue::{
    AbdcRank, AbsRank, BadgeKind, CcfRank, CoreRank, JcrMetrics, NorwegianLevel, Quartile, VhbRank,
};

/// Compiled venue quality lookup structures, keyed by normalized venue name.
///
/// Built once by [`compile_quality_index`] and shared read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct QualityIndex {
    pub ft50: VenueSet,
    pub utd24: VenueSet,
    pub era: VenueSet,
    pub abdc: RankTable<AbdcRank>,
    pub vhb: RankTable<VhbRank>,
    pub abs: RankTable<AbsRank>,
    pub quartiles: RankTable<Quartile>,
    pub core: RankTable<CoreRank>,
    pub ccf: RankTable<CcfRank>,
    pub norwegian: RankTable<NorwegianLevel>,
    pub jcr: RankTable<JcrMetrics>,
    pub impact: RankTable<f64>,
    pub h5: RankTable<u32>,
}

/// Entry count for one ranking system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TableSize {
    pub kind: BadgeKind,
    pub entries: usize,
}

impl QualityIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries per ranking system, in badge order. Pre-print detection
    /// is pattern based and has no table.
    pub fn summary(&self) -> Vec<TableSize> {
        BadgeKind::ALL
            .iter()
            .filter(|kind| **kind != BadgeKind::Preprint)
            .map(|kind| TableSize {
                kind: *kind,
                entries: self.table_len(*kind),
            })
            .collect()
    }

    pub fn table_len(&self, kind: BadgeKind) -> usize {
        match kind {
            BadgeKind::Preprint => 0,
            BadgeKind::Abdc => self.abdc.len(),
            BadgeKind::Vhb => self.vhb.len(),
            BadgeKind::Abs => self.abs.len(),
            BadgeKind::Jcr => self.jcr.len(),
            BadgeKind::Quartile => self.quartiles.len(),
            BadgeKind::Ft50 => self.ft50.len(),
            BadgeKind::Utd24 => self.utd24.len(),
            BadgeKind::Core => self.core.len(),
            BadgeKind::Ccf => self.ccf.len(),
            BadgeKind::Era => self.era.len(),
            BadgeKind::Norwegian => self.norwegian.len(),
            BadgeKind::H5 => self.h5.len(),
            BadgeKind::ImpactFactor => self.impact.len(),
        }
    }

    /// Total entries across all tables
    pub fn len(&self) -> usize {
        BadgeKind::ALL.iter().map(|kind| self.table_len(*kind)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// `(venue, value)` rows of one table as plain strings, for export.
    /// JCR rows carry the strongest quartile.
    pub fn table_rows(&self, kind: BadgeKind) -> Vec<(String, String)> {
        fn rows<V>(table: &RankTable<V>, f: impl Fn(&V) -> String) -> Vec<(String, String)> {
            table.iter().map(|(k, v)| (k.to_string(), f(v))).collect()
        }

        match kind {
            BadgeKind::Preprint => Vec::new(),
            BadgeKind::Abdc => rows(&self.abdc, |r| r.as_str().to_string()),
            BadgeKind::Vhb => rows(&self.vhb, |r| r.as_str().to_string()),
            BadgeKind::Abs => rows(&self.abs, |r| r.as_str().to_string()),
            BadgeKind::Jcr => rows(&self.jcr, |m| {
                m.best_quartile().map(|q| q.as_str().to_string()).unwrap_or_default()
            }),
            BadgeKind::Quartile => rows(&self.quartiles, |q| q.as_str().to_string()),
            BadgeKind::Ft50 => rows(&self.ft50, |_| "1".to_string()),
            BadgeKind::Utd24 => rows(&self.utd24, |_| "1".to_string()),
            BadgeKind::Core => rows(&self.core, |r| r.as_str().to_string()),
            BadgeKind::Ccf => rows(&self.ccf, |r| r.as_str().to_string()),
            BadgeKind::Era => rows(&self.era, |_| "1".to_string()),
            BadgeKind::Norwegian => rows(&self.norwegian, |l| l.as_str().to_string()),
            BadgeKind::H5 => rows(&self.h5, |h| h.to_string()),
            BadgeKind::ImpactFactor => rows(&self.impact, |i| i.to_string()),
        }
    }
}
