use log::debug;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, Mutex};

use super::builder::compile_quality_index;
use super::sources::{ExtraIndices, QualitySettings};
use super::QualityIndex;

/// Content fingerprint of every input that feeds [`compile_quality_index`].
///
/// Hashes full contents rather than sizes, so editing a single rank letter
/// produces a different fingerprint.
pub fn settings_fingerprint(settings: &QualitySettings, extra: &ExtraIndices) -> u64 {
    let mut hasher = DefaultHasher::new();
    settings.ft50_list.hash(&mut hasher);
    settings.utd24_list.hash(&mut hasher);
    settings.abdc_ranks.hash(&mut hasher);
    settings.vhb_ranks.hash(&mut hasher);
    settings.quartiles.hash(&mut hasher);
    settings.core_ranks.hash(&mut hasher);
    settings.ccf_ranks.hash(&mut hasher);
    // BTreeMap-backed, so serialization order is stable
    serde_json::to_string(extra).unwrap_or_default().hash(&mut hasher);
    hasher.finish()
}

/// Inputs a compiled index was built from, minus the display toggles
#[derive(Debug)]
struct CachedIndex {
    fingerprint: u64,
    settings: QualitySettings,
    extra: ExtraIndices,
    index: Arc<QualityIndex>,
}

impl CachedIndex {
    /// The fingerprint is only a fast reject; a hit also needs equal contents
    fn matches(&self, fingerprint: u64, settings: &QualitySettings, extra: &ExtraIndices) -> bool {
        self.fingerprint == fingerprint && self.extra == *extra && self.settings == compile_inputs(settings)
    }
}

fn compile_inputs(settings: &QualitySettings) -> QualitySettings {
    QualitySettings {
        badge_kinds: Default::default(),
        ..settings.clone()
    }
}

/// Memoizes the last compiled [`QualityIndex`].
///
/// Holds at most one index. A request whose inputs differ from the cached
/// ones recompiles and replaces it, so a stale index is never served.
/// Badge display toggles are not compared; they do not change the compiled
/// tables.
#[derive(Debug, Default)]
pub struct QualityIndexCache {
    slot: Mutex<Option<CachedIndex>>,
}

impl QualityIndexCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_compile(&self, settings: &QualitySettings, extra: &ExtraIndices) -> Arc<QualityIndex> {
        let fingerprint = settings_fingerprint(settings, extra);
        let mut slot = self.slot.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

        if let Some(cached) = slot.as_ref() {
            if cached.matches(fingerprint, settings, extra) {
                debug!("Quality index cache hit ({:016x})", fingerprint);
                return Arc::clone(&cached.index);
            }
        }

        debug!("Quality index cache miss ({:016x}), compiling", fingerprint);
        let index = Arc::new(compile_quality_index(settings, extra));
        *slot = Some(CachedIndex {
            fingerprint,
            settings: compile_inputs(settings),
            extra: extra.clone(),
            index: Arc::clone(&index),
        });
        index
    }

    /// Drop the cached index; the next request recompiles
    pub fn invalidate(&self) {
        let mut slot = self.slot.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        *slot = None;
    }

    pub fn is_cached(&self) -> bool {
        self.slot
            .lock()
            .map(|slot| slot.is_some())
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(core: &str) -> QualitySettings {
        QualitySettings {
            core_ranks: core.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_fingerprint_tracks_content() {
        let extra = ExtraIndices::default();
        let a = settings_fingerprint(&settings("ICIS,A"), &extra);
        let b = settings_fingerprint(&settings("ICIS,B"), &extra);
        let c = settings_fingerprint(&settings("ICIS,A"), &extra);
        assert_ne!(a, b);
        assert_eq!(a, c);

        let mut extra = ExtraIndices::default();
        extra.era_set = Some(vec!["mis quarterly".to_string()]);
        assert_ne!(a, settings_fingerprint(&settings("ICIS,A"), &extra));
    }

    #[test]
    fn test_cache_hit_returns_same_index() {
        let cache = QualityIndexCache::new();
        let extra = ExtraIndices::default();
        let first = cache.get_or_compile(&settings("ICIS,A"), &extra);
        let second = cache.get_or_compile(&settings("ICIS,A"), &extra);
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_changed_settings_recompile() {
        let cache = QualityIndexCache::new();
        let extra = ExtraIndices::default();
        let first = cache.get_or_compile(&settings("ICIS,A"), &extra);
        let second = cache.get_or_compile(&settings("ICIS,B"), &extra);
        assert!(!Arc::ptr_eq(&first, &second));
        assert_eq!(
            second.core.get("icis").map(|r| r.as_str()),
            Some("B")
        );
    }

    #[test]
    fn test_fingerprint_collision_still_recompiles() {
        let cache = QualityIndexCache::new();
        let extra = ExtraIndices::default();
        let stale = Arc::new(compile_quality_index(&settings("ICIS,A"), &extra));
        let wanted = settings("ICIS,B");
        // slot claims the fingerprint of `wanted` but holds other contents
        *cache.slot.lock().unwrap() = Some(CachedIndex {
            fingerprint: settings_fingerprint(&wanted, &extra),
            settings: settings("ICIS,A"),
            extra: extra.clone(),
            index: Arc::clone(&stale),
        });

        let index = cache.get_or_compile(&wanted, &extra);
        assert!(!Arc::ptr_eq(&stale, &index));
        assert_eq!(index.core.get("icis").map(|r| r.as_str()), Some("B"));
    }

    #[test]
    fn test_toggles_do_not_invalidate() {
        let cache = QualityIndexCache::new();
        let extra = ExtraIndices::default();
        let first = cache.get_or_compile(&settings("ICIS,A"), &extra);
        let mut toggled = settings("ICIS,A");
        toggled.badge_kinds.insert(crate::venue::BadgeKind::Core, false);
        let second = cache.get_or_compile(&toggled, &extra);
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_invalidate() {
        let cache = QualityIndexCache::new();
        let extra = ExtraIndices::default();
        let first = cache.get_or_compile(&settings("ICIS,A"), &extra);
        assert!(cache.is_cached());
        cache.invalidate();
        assert!(!cache.is_cached());
        let second = cache.get_or_compile(&settings("ICIS,A"), &extra);
        assert!(!Arc::ptr_eq(&first, &second));
    }
}
