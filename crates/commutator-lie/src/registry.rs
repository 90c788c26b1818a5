//! Process-wide canonicalization of algebraic structures.
//!
//! Structurally equal construction requests must yield the *same* live
//! instance, so that parent identity can be checked by pointer comparison.
//! The registry maps a construction key (instance type + a hash of the
//! normalized construction data) to weak handles on live instances.
//! Lookup and insert happen under one lock, so a construction race
//! collapses to a single winner. Entries are weak: an instance is
//! reclaimed once no external owner remains, and dead entries are purged
//! whenever their bucket is touched.

use std::any::{Any, TypeId};
use std::hash::{Hash, Hasher};
use std::sync::{Arc, LazyLock, Weak};

use parking_lot::Mutex;
use rustc_hash::{FxHashMap, FxHasher};

static REGISTRY: LazyLock<CanonicalRegistry> = LazyLock::new(CanonicalRegistry::default);

/// Hashes construction data into a registry key.
pub fn hash_key<K: Hash + ?Sized>(key: &K) -> u64 {
    let mut hasher = FxHasher::default();
    key.hash(&mut hasher);
    hasher.finish()
}

/// Returns the canonical instance for the given key, constructing it if
/// no live instance matches.
///
/// `hash` must be derived from the construction data (see [`hash_key`]);
/// `matches` performs the deep comparison against a candidate, so hash
/// collisions cost a comparison but never conflate distinct instances.
pub fn lookup_or_insert<T, M, F>(hash: u64, matches: M, make: F) -> Arc<T>
where
    T: Any + Send + Sync,
    M: Fn(&T) -> bool,
    F: FnOnce() -> Arc<T>,
{
    REGISTRY.lookup_or_insert(hash, matches, make)
}

#[derive(Default)]
struct CanonicalRegistry {
    entries: Mutex<FxHashMap<(TypeId, u64), Vec<Weak<dyn Any + Send + Sync>>>>,
}

impl CanonicalRegistry {
    fn lookup_or_insert<T, M, F>(&self, hash: u64, matches: M, make: F) -> Arc<T>
    where
        T: Any + Send + Sync,
        M: Fn(&T) -> bool,
        F: FnOnce() -> Arc<T>,
    {
        let key = (TypeId::of::<T>(), hash);
        let mut entries = self.entries.lock();
        let bucket = entries.entry(key).or_default();
        bucket.retain(|weak| weak.strong_count() > 0);

        for weak in bucket.iter() {
            if let Some(instance) = weak.upgrade() {
                if let Ok(typed) = instance.downcast::<T>() {
                    if matches(&typed) {
                        return typed;
                    }
                }
            }
        }

        let created = make();
        let erased: Arc<dyn Any + Send + Sync> = created.clone();
        bucket.push(Arc::downgrade(&erased));
        created
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(PartialEq)]
    struct Probe(Vec<u32>);

    fn canonical_probe(data: &[u32]) -> Arc<Probe> {
        let owned = data.to_vec();
        lookup_or_insert(hash_key(data), |p: &Probe| p.0 == owned, || {
            Arc::new(Probe(owned.clone()))
        })
    }

    #[test]
    fn test_equal_keys_share_an_instance() {
        let a = canonical_probe(&[1, 2, 3]);
        let b = canonical_probe(&[1, 2, 3]);
        let c = canonical_probe(&[4, 5]);

        assert!(Arc::ptr_eq(&a, &b));
        assert!(!Arc::ptr_eq(&a, &c));
    }

    #[test]
    fn test_dropped_instances_are_reclaimed() {
        let first = canonical_probe(&[9, 9, 9, 1]);
        let first_ptr = Arc::as_ptr(&first);
        drop(first);

        // No owner remains, so a fresh instance is built. The pointer may
        // or may not be reused by the allocator; what matters is that the
        // lookup still succeeds and canonicalizes again.
        let second = canonical_probe(&[9, 9, 9, 1]);
        let third = canonical_probe(&[9, 9, 9, 1]);
        assert!(Arc::ptr_eq(&second, &third));
        let _ = first_ptr;
    }

    #[test]
    fn test_construction_race_has_one_winner() {
        let handles: Vec<_> = (0..8)
            .map(|_| std::thread::spawn(|| canonical_probe(&[7, 7, 7, 2])))
            .collect();
        let instances: Vec<Arc<Probe>> =
            handles.into_iter().map(|h| h.join().unwrap()).collect();

        for instance in &instances[1..] {
            assert!(Arc::ptr_eq(&instances[0], instance));
        }
    }
}
