//! Process-lifetime cache of decoded unit structures
//!
//! The cache only ever grows: once a unit's blob has been decoded, the
//! resulting structure stays available for the remaining process lifetime.
//! There is no global instance; callers that need isolation (tests in
//! particular) construct their own cache over their own store.

use std::fmt;
use std::sync::Arc;

use dashmap::DashMap;
use tracing::debug;

use crate::codec;
use crate::error::CldrUnitsResult;
use crate::patterns::UnitPatterns;
use crate::store::PatternStore;

/// Concurrent, monotonically growing map from unit index to decoded
/// pattern structure.
pub struct UnitPatternCache {
    store: Box<dyn PatternStore>,
    units: DashMap<u32, Arc<UnitPatterns>>,
}

impl UnitPatternCache {
    /// Create a cache that decodes blobs from the given store on demand.
    pub fn new(store: impl PatternStore + 'static) -> Self {
        Self {
            store: Box::new(store),
            units: DashMap::new(),
        }
    }

    /// Structure for a unit, decoding its blob on first access.
    ///
    /// Concurrent first accesses may decode redundantly; the map's entry
    /// API guarantees that only one result is retained and that no caller
    /// ever observes a partially built structure.
    pub fn patterns(&self, unit: u32) -> CldrUnitsResult<Arc<UnitPatterns>> {
        if let Some(hit) = self.units.get(&unit) {
            return Ok(Arc::clone(&hit));
        }

        debug!("Decoding blob for unit {} into pattern cache", unit);
        let blob = self.store.load_blob(unit)?;
        let decoded = Arc::new(codec::decode_unit(&blob)?);

        let entry = self.units.entry(unit).or_insert(decoded);
        Ok(Arc::clone(&entry))
    }

    /// Number of units decoded so far.
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Whether no unit has been decoded yet.
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

impl fmt::Debug for UnitPatternCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnitPatternCache")
            .field("store", &"<PatternStore>")
            .field("cached_units", &self.units.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use super::*;
    use crate::codec::{encode_unit, PatternRecord, UnitRecordSet};
    use crate::enums::{GrammaticalCase, PluralCategory, PluralFormLength};
    use crate::error::CldrUnitsError;
    use crate::store::MemoryPatternStore;

    /// Store wrapper that counts how often each blob is fetched.
    struct CountingStore {
        inner: MemoryPatternStore,
        loads: Arc<AtomicUsize>,
    }

    impl PatternStore for CountingStore {
        fn load_blob(&self, unit: u32) -> CldrUnitsResult<Vec<u8>> {
            self.loads.fetch_add(1, Ordering::SeqCst);
            self.inner.load_blob(unit)
        }
    }

    fn sample_blob() -> Vec<u8> {
        encode_unit(&UnitRecordSet {
            patterns: vec![PatternRecord {
                language: "en".to_owned(),
                length: PluralFormLength::Long,
                case: GrammaticalCase::None,
                category: PluralCategory::Other,
                text: "{0} weeks".to_owned(),
            }],
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn second_access_hits_the_cache() {
        let mut inner = MemoryPatternStore::new();
        inner.insert(0, sample_blob());
        let loads = Arc::new(AtomicUsize::new(0));
        let cache = UnitPatternCache::new(CountingStore {
            inner,
            loads: Arc::clone(&loads),
        });

        let first = cache.patterns(0).unwrap();
        let second = cache.patterns(0).unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(loads.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn missing_unit_surfaces_data_not_found() {
        let cache = UnitPatternCache::new(MemoryPatternStore::new());
        assert!(matches!(
            cache.patterns(9),
            Err(CldrUnitsError::DataNotFound { unit: 9 })
        ));
        assert!(cache.is_empty());
    }

    #[test]
    fn concurrent_first_access_retains_one_structure() {
        let mut inner = MemoryPatternStore::new();
        inner.insert(0, sample_blob());
        let cache = Arc::new(UnitPatternCache::new(inner));

        let results = Mutex::new(Vec::new());
        std::thread::scope(|scope| {
            for _ in 0..8 {
                let cache = Arc::clone(&cache);
                let results = &results;
                scope.spawn(move || {
                    let patterns = cache.patterns(0).unwrap();
                    results.lock().unwrap().push(patterns);
                });
            }
        });

        let results = results.into_inner().unwrap();
        assert_eq!(results.len(), 8);
        assert_eq!(cache.len(), 1);
        for patterns in &results {
            assert!(Arc::ptr_eq(patterns, &results[0]));
        }
    }
}
