//! Input contracts for ranking data.
//!
//! `QualitySettings` carries the user-editable text blobs (flat lists and
//! `name,rank` CSV lines). `ExtraIndices` carries large pre-built maps that
//! are shipped as data files. Field aliases accept the camelCase names used
//! by exported browser settings.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use crate::venue::BadgeKind;

/// User-supplied ranking lists and badge display toggles
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QualitySettings {
    /// One venue per line, `|` separates synonyms
    #[serde(alias = "qualityFt50List")]
    pub ft50_list: String,
    #[serde(alias = "qualityUtd24List")]
    pub utd24_list: String,
    /// `name,rank` per line
    #[serde(alias = "qualityAbdcRanks")]
    pub abdc_ranks: String,
    #[serde(alias = "qualityVhbRanks")]
    pub vhb_ranks: String,
    #[serde(alias = "qualityQuartiles")]
    pub quartiles: String,
    #[serde(alias = "qualityCoreRanks")]
    pub core_ranks: String,
    #[serde(alias = "qualityCcfRanks")]
    pub ccf_ranks: String,
    /// Missing kinds are shown
    #[serde(alias = "qualityBadgeKinds")]
    pub badge_kinds: BTreeMap<BadgeKind, bool>,
}

impl QualitySettings {
    pub fn badge_enabled(&self, kind: BadgeKind) -> bool {
        self.badge_kinds.get(&kind).copied().unwrap_or(true)
    }
}

/// Raw JCR record as found in the JCR data file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct JcrRecord {
    pub jif_q: Option<String>,
    pub jif: Option<Value>,
    pub jci_q: Option<String>,
    pub jci: Option<Value>,
    pub ais_q: Option<String>,
    pub ais: Option<Value>,
    pub five_y_jif_q: Option<String>,
    pub five_y_jif: Option<Value>,
}

/// Pre-built indices. Every field is optional; absent means "system not loaded".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExtraIndices {
    pub quartiles_index: Option<BTreeMap<String, String>>,
    pub jcr_index: Option<BTreeMap<String, JcrRecord>>,
    /// Impact factor as a number or a numeric string
    pub impact_index: Option<BTreeMap<String, Value>>,
    pub vhb_index: Option<BTreeMap<String, String>>,
    pub abs_index: Option<BTreeMap<String, Value>>,
    pub era_set: Option<Vec<String>>,
    pub norwegian_map: Option<BTreeMap<String, Value>>,
    pub h5_index: Option<BTreeMap<String, Value>>,
}

/// Read a JSON scalar as a rank token ("4*", 4 -> "4")
pub fn value_as_token(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Read a JSON scalar as a positive finite number.
/// Strings are stripped to digits and dots first ("7.3*" -> 7.3).
pub fn value_as_positive_f64(value: &Value) -> Option<f64> {
    let num = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => {
            let digits: String = s.chars().filter(|c| c.is_ascii_digit() || *c == '.').collect();
            digits.parse::<f64>().ok()?
        }
        _ => return None,
    };
    (num.is_finite() && num > 0.0).then_some(num)
}
