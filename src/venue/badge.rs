use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

lazy_static! {
    // VHB lists mix "A+", "A*", "A+ (top)"; the first rank-looking token wins
    static ref VHB_RANK_TOKEN: Regex = Regex::new(r"A\+?|[BCDE]").unwrap();
}

/// Ranking system a badge belongs to. Variant order is the emission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeKind {
    Preprint,
    Abdc,
    Vhb,
    Abs,
    Jcr,
    Quartile,
    Ft50,
    Utd24,
    Core,
    Ccf,
    Era,
    Norwegian,
    H5,
    #[serde(rename = "if")]
    ImpactFactor,
}

impl BadgeKind {
    pub const ALL: [BadgeKind; 14] = [
        BadgeKind::Preprint,
        BadgeKind::Abdc,
        BadgeKind::Vhb,
        BadgeKind::Abs,
        BadgeKind::Jcr,
        BadgeKind::Quartile,
        BadgeKind::Ft50,
        BadgeKind::Utd24,
        BadgeKind::Core,
        BadgeKind::Ccf,
        BadgeKind::Era,
        BadgeKind::Norwegian,
        BadgeKind::H5,
        BadgeKind::ImpactFactor,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BadgeKind::Preprint => "preprint",
            BadgeKind::Abdc => "abdc",
            BadgeKind::Vhb => "vhb",
            BadgeKind::Abs => "abs",
            BadgeKind::Jcr => "jcr",
            BadgeKind::Quartile => "quartile",
            BadgeKind::Ft50 => "ft50",
            BadgeKind::Utd24 => "utd24",
            BadgeKind::Core => "core",
            BadgeKind::Ccf => "ccf",
            BadgeKind::Era => "era",
            BadgeKind::Norwegian => "norwegian",
            BadgeKind::H5 => "h5",
            BadgeKind::ImpactFactor => "if",
        }
    }
}

impl fmt::Display for BadgeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// ABDC Journal Quality List rank
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AbdcRank {
    #[serde(rename = "A*")]
    AStar,
    A,
    B,
    C,
    D,
}

impl AbdcRank {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_uppercase().as_str() {
            "A*" => Some(AbdcRank::AStar),
            "A" => Some(AbdcRank::A),
            "B" => Some(AbdcRank::B),
            "C" => Some(AbdcRank::C),
            "D" => Some(AbdcRank::D),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AbdcRank::AStar => "A*",
            AbdcRank::A => "A",
            AbdcRank::B => "B",
            AbdcRank::C => "C",
            AbdcRank::D => "D",
        }
    }
}

/// VHB JOURQUAL rank
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum VhbRank {
    #[serde(rename = "A+")]
    APlus,
    A,
    B,
    C,
    D,
    E,
}

impl VhbRank {
    /// Lenient parse: uppercases, reads `*` as `+`, then takes the first rank token.
    pub fn parse(raw: &str) -> Option<Self> {
        let upper = raw.trim().to_uppercase().replace('*', "+");
        let token = VHB_RANK_TOKEN.find(&upper)?;
        match token.as_str() {
            "A+" => Some(VhbRank::APlus),
            "A" => Some(VhbRank::A),
            "B" => Some(VhbRank::B),
            "C" => Some(VhbRank::C),
            "D" => Some(VhbRank::D),
            "E" => Some(VhbRank::E),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            VhbRank::APlus => "A+",
            VhbRank::A => "A",
            VhbRank::B => "B",
            VhbRank::C => "C",
            VhbRank::D => "D",
            VhbRank::E => "E",
        }
    }
}

/// ABS Academic Journal Guide grade
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AbsRank {
    #[serde(rename = "4*")]
    FourStar,
    #[serde(rename = "4")]
    Four,
    #[serde(rename = "3")]
    Three,
    #[serde(rename = "2")]
    Two,
    #[serde(rename = "1")]
    One,
}

impl AbsRank {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "4*" => Some(AbsRank::FourStar),
            "4" => Some(AbsRank::Four),
            "3" => Some(AbsRank::Three),
            "2" => Some(AbsRank::Two),
            "1" => Some(AbsRank::One),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AbsRank::FourStar => "4*",
            AbsRank::Four => "4",
            AbsRank::Three => "3",
            AbsRank::Two => "2",
            AbsRank::One => "1",
        }
    }
}

/// SCImago-style journal quartile
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Quartile {
    Q1,
    Q2,
    Q3,
    Q4,
}

impl Quartile {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_uppercase().as_str() {
            "Q1" => Some(Quartile::Q1),
            "Q2" => Some(Quartile::Q2),
            "Q3" => Some(Quartile::Q3),
            "Q4" => Some(Quartile::Q4),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Quartile::Q1 => "Q1",
            Quartile::Q2 => "Q2",
            Quartile::Q3 => "Q3",
            Quartile::Q4 => "Q4",
        }
    }
}

/// CORE / ICORE conference rank
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CoreRank {
    #[serde(rename = "A*")]
    AStar,
    A,
    B,
    C,
}

impl CoreRank {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_uppercase().as_str() {
            "A*" => Some(CoreRank::AStar),
            "A" => Some(CoreRank::A),
            "B" => Some(CoreRank::B),
            "C" => Some(CoreRank::C),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CoreRank::AStar => "A*",
            CoreRank::A => "A",
            CoreRank::B => "B",
            CoreRank::C => "C",
        }
    }
}

/// China Computer Federation rank
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CcfRank {
    A,
    B,
    C,
}

impl CcfRank {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_uppercase().as_str() {
            "A" => Some(CcfRank::A),
            "B" => Some(CcfRank::B),
            "C" => Some(CcfRank::C),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CcfRank::A => "A",
            CcfRank::B => "B",
            CcfRank::C => "C",
        }
    }
}

/// Norwegian Register level. Level 0 and "X" are not badges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum NorwegianLevel {
    #[serde(rename = "1")]
    One,
    #[serde(rename = "2")]
    Two,
}

impl NorwegianLevel {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "1" => Some(NorwegianLevel::One),
            "2" => Some(NorwegianLevel::Two),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            NorwegianLevel::One => "1",
            NorwegianLevel::Two => "2",
        }
    }
}

/// Journal Citation Reports indicators for one journal.
/// Only constructed when at least one quartile is valid.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct JcrMetrics {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jif_quartile: Option<Quartile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jif: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jci_quartile: Option<Quartile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jci: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ais_quartile: Option<Quartile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ais: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub five_year_quartile: Option<Quartile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub five_year_jif: Option<f64>,
}

impl JcrMetrics {
    /// Labelled quartiles in display order (JIF, JCI, AIS, 5Y)
    pub fn quartiles(&self) -> Vec<(&'static str, Quartile)> {
        [
            ("JIF", self.jif_quartile),
            ("JCI", self.jci_quartile),
            ("AIS", self.ais_quartile),
            ("5Y", self.five_year_quartile),
        ]
        .into_iter()
        .filter_map(|(label, q)| q.map(|q| (label, q)))
        .collect()
    }

    /// Strongest quartile across all indicators
    pub fn best_quartile(&self) -> Option<Quartile> {
        self.quartiles().into_iter().map(|(_, q)| q).min()
    }
}

/// One ranking-system verdict for a venue
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Badge {
    Preprint { server: &'static str },
    Abdc { rank: AbdcRank },
    Vhb { rank: VhbRank },
    Abs { rank: AbsRank },
    Jcr { metrics: JcrMetrics },
    Quartile { quartile: Quartile },
    Ft50,
    Utd24,
    Core { rank: CoreRank },
    Ccf { rank: CcfRank },
    Era,
    Norwegian { level: NorwegianLevel },
    H5 { h5: u32 },
    #[serde(rename = "if")]
    ImpactFactor { impact: f64 },
}

impl Badge {
    pub fn kind(&self) -> BadgeKind {
        match self {
            Badge::Preprint { .. } => BadgeKind::Preprint,
            Badge::Abdc { .. } => BadgeKind::Abdc,
            Badge::Vhb { .. } => BadgeKind::Vhb,
            Badge::Abs { .. } => BadgeKind::Abs,
            Badge::Jcr { .. } => BadgeKind::Jcr,
            Badge::Quartile { .. } => BadgeKind::Quartile,
            Badge::Ft50 => BadgeKind::Ft50,
            Badge::Utd24 => BadgeKind::Utd24,
            Badge::Core { .. } => BadgeKind::Core,
            Badge::Ccf { .. } => BadgeKind::Ccf,
            Badge::Era => BadgeKind::Era,
            Badge::Norwegian { .. } => BadgeKind::Norwegian,
            Badge::H5 { .. } => BadgeKind::H5,
            Badge::ImpactFactor { .. } => BadgeKind::ImpactFactor,
        }
    }

    /// Short label painted on the badge
    pub fn text(&self) -> String {
        match self {
            Badge::Preprint { server } => server.to_string(),
            Badge::Abdc { rank } => format!("ABDC {}", rank.as_str()),
            Badge::Vhb { rank } => format!("VHB {}", rank.as_str()),
            Badge::Abs { rank } => format!("ABS {}", rank.as_str()),
            Badge::Jcr { metrics } => metrics
                .quartiles()
                .iter()
                .map(|(label, q)| format!("{} {}", label, q.as_str()))
                .collect::<Vec<_>>()
                .join(" · "),
            Badge::Quartile { quartile } => quartile.as_str().to_string(),
            Badge::Ft50 => "FT50".to_string(),
            Badge::Utd24 => "UTD24".to_string(),
            Badge::Core { rank } => format!("CORE {}", rank.as_str()),
            Badge::Ccf { rank } => format!("CCF {}", rank.as_str()),
            Badge::Era => "ERA 2023".to_string(),
            Badge::Norwegian { level } => format!("Level {}", level.as_str()),
            Badge::H5 { h5 } => format!("h5: {}", h5),
            Badge::ImpactFactor { impact } => format!("IF {:.1}", impact),
        }
    }

    /// Full name of the ranking system, for tooltips
    pub fn system(&self) -> &'static str {
        match self {
            Badge::Preprint { .. } => "Pre-print server",
            Badge::Abdc { .. } => "ABDC Journal Quality List",
            Badge::Vhb { .. } => "VHB JOURQUAL 2024",
            Badge::Abs { .. } => "ABS Academic Journal Guide 2024",
            Badge::Jcr { .. } => "Journal Citation Reports",
            Badge::Quartile { .. } => "SCImago Journal Rank (SJR)",
            Badge::Ft50 => "Financial Times 50 Top Research Journals",
            Badge::Utd24 => "UT Dallas Top 100 Business School Research Rankings",
            Badge::Core { .. } => "CORE/ICORE Conference Rankings",
            Badge::Ccf { .. } => "China Computer Federation Conference Rankings",
            Badge::Era => "Excellence in Research for Australia 2023",
            Badge::Norwegian { .. } => "Norwegian Register for Scientific Journals",
            Badge::H5 { .. } => "Google Scholar 5-year h-index",
            Badge::ImpactFactor { .. } => "Journal Impact Factor (2024)",
        }
    }
}

/// Badge as handed to the renderer: payload plus display strings
#[derive(Debug, Clone, Serialize)]
pub struct RenderedBadge {
    pub text: String,
    pub system: &'static str,
    #[serde(flatten)]
    pub badge: Badge,
}

impl From<Badge> for RenderedBadge {
    fn from(badge: Badge) -> Self {
        Self {
            text: badge.text(),
            system: badge.system(),
            badge,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_abdc_parse() {
        assert_eq!(AbdcRank::parse("a*"), Some(AbdcRank::AStar));
        assert_eq!(AbdcRank::parse(" B "), Some(AbdcRank::B));
        assert_eq!(AbdcRank::parse("E"), None);
        assert_eq!(AbdcRank::parse("A**"), None);
    }

    #[test]
    fn test_vhb_lenient_parse() {
        assert_eq!(VhbRank::parse("A*"), Some(VhbRank::APlus));
        assert_eq!(VhbRank::parse("a+ (top)"), Some(VhbRank::APlus));
        assert_eq!(VhbRank::parse("e"), Some(VhbRank::E));
        assert_eq!(VhbRank::parse("k.R."), None);
        assert_eq!(VhbRank::parse(""), None);
    }

    #[test]
    fn test_strict_parsers_reject_noise() {
        assert_eq!(Quartile::parse("q3"), Some(Quartile::Q3));
        assert_eq!(Quartile::parse("Q5"), None);
        assert_eq!(CoreRank::parse("A*"), Some(CoreRank::AStar));
        assert_eq!(CoreRank::parse("Australasian"), None);
        assert_eq!(CcfRank::parse("A*"), None);
        assert_eq!(AbsRank::parse("4*"), Some(AbsRank::FourStar));
        assert_eq!(AbsRank::parse("5"), None);
        assert_eq!(NorwegianLevel::parse("0"), None);
        assert_eq!(NorwegianLevel::parse("2"), Some(NorwegianLevel::Two));
    }

    #[test]
    fn test_badge_text() {
        assert_eq!(Badge::Abdc { rank: AbdcRank::AStar }.text(), "ABDC A*");
        assert_eq!(Badge::Quartile { quartile: Quartile::Q2 }.text(), "Q2");
        assert_eq!(Badge::ImpactFactor { impact: 7.345 }.text(), "IF 7.3");
        assert_eq!(Badge::H5 { h5: 120 }.text(), "h5: 120");
        assert_eq!(Badge::Norwegian { level: NorwegianLevel::One }.text(), "Level 1");
    }

    #[test]
    fn test_jcr_text_and_best_quartile() {
        let metrics = JcrMetrics {
            jif_quartile: Some(Quartile::Q2),
            jci_quartile: Some(Quartile::Q1),
            ..Default::default()
        };
        assert_eq!(metrics.best_quartile(), Some(Quartile::Q1));
        assert_eq!(Badge::Jcr { metrics }.text(), "JIF Q2 · JCI Q1");
    }

    #[test]
    fn test_rendered_badge_serialization() {
        let rendered = RenderedBadge::from(Badge::Core { rank: CoreRank::AStar });
        let json = serde_json::to_value(&rendered).unwrap();
        assert_eq!(json["kind"], "core");
        assert_eq!(json["rank"], "A*");
        assert_eq!(json["text"], "CORE A*");

        let json = serde_json::to_value(RenderedBadge::from(Badge::ImpactFactor { impact: 2.0 })).unwrap();
        assert_eq!(json["kind"], "if");
    }

    #[test]
    fn test_kind_order_matches_all() {
        let mut sorted = BadgeKind::ALL.to_vec();
        sorted.sort();
        assert_eq!(sorted, BadgeKind::ALL.to_vec());
    }
}
