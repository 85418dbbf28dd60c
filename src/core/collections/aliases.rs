use rustc_hash::{FxBuildHasher, FxHashMap, FxHashSet};
use smallvec::SmallVec;

#[cfg(not(feature = "dense-slotmap"))]
use slotmap::SlotMap;

#[cfg(feature = "dense-slotmap")]
use slotmap::DenseSlotMap;

// =============================================================================
// STORAGE BACKEND
// =============================================================================

/// Storage backend for mesh vertices and quad-edge records.
///
/// # Feature Flags
///
/// - **default**: `DenseSlotMap` (via the default `dense-slotmap` feature)
/// - **--no-default-features**: `SlotMap`
///
/// Public methods return iterators rather than exposing this type, so the
/// backend can change without touching signatures.
#[cfg(not(feature = "dense-slotmap"))]
pub type StorageMap<K, V> = SlotMap<K, V>;

#[cfg(feature = "dense-slotmap")]
pub type StorageMap<K, V> = DenseSlotMap<K, V>;

// =============================================================================
// CORE OPTIMIZED TYPES
// =============================================================================

/// `HashMap` hashed with `rustc_hash::FxHasher`.
///
/// # Security Warning
///
/// Not DoS-resistant. Only use with internal keys such as slotmap keys.
///
/// # Examples
///
/// ```rust
/// use quadedge_delaunay::core::collections::FastHashMap;
///
/// let mut map: FastHashMap<u64, usize> = FastHashMap::default();
/// map.insert(123, 456);
/// ```
pub type FastHashMap<K, V> = FxHashMap<K, V>;

/// Build hasher for [`FastHashMap`] and [`FastHashSet`].
pub type FastBuildHasher = FxBuildHasher;

/// Re-export of the entry API used with [`FastHashMap`].
pub use std::collections::hash_map::Entry;

/// `HashSet` hashed with `rustc_hash::FxHasher`.
///
/// # Examples
///
/// ```rust
/// use quadedge_delaunay::core::collections::FastHashSet;
///
/// let mut set: FastHashSet<u64> = FastHashSet::default();
/// set.insert(7);
/// assert!(set.contains(&7));
/// ```
pub type FastHashSet<T> = FxHashSet<T>;

/// Small-optimized `Vec`: inline storage for up to `N` elements, heap beyond.
///
/// # Size Guidelines
///
/// - **N=3**: face corners
/// - **N=8**: typical vertex degree in a planar Delaunay mesh (mean < 6)
/// - **N=16**: scratch buffers in validation
///
/// # Examples
///
/// ```rust
/// use quadedge_delaunay::core::collections::SmallBuffer;
///
/// let mut buffer: SmallBuffer<i32, 8> = SmallBuffer::new();
/// for i in 0..5 {
///     buffer.push(i);
/// }
/// assert!(!buffer.spilled());
/// ```
pub type SmallBuffer<T, const N: usize> = SmallVec<[T; N]>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fast_collections_basic_operations() {
        let mut map: FastHashMap<u64, usize> = FastHashMap::default();
        assert!(map.is_empty());
        map.insert(123, 456);
        assert_eq!(map.get(&123), Some(&456));

        match map.entry(123) {
            Entry::Occupied(mut e) => *e.get_mut() += 1,
            Entry::Vacant(_) => unreachable!("key was inserted above"),
        }
        assert_eq!(map[&123], 457);

        let mut set: FastHashSet<u64> = FastHashSet::default();
        set.insert(789);
        assert!(set.contains(&789));
        assert!(!set.contains(&999));
    }

    #[test]
    fn test_small_buffer_spills_past_inline_capacity() {
        let mut buffer: SmallBuffer<i32, 4> = SmallBuffer::new();
        buffer.extend(0..4);
        assert!(!buffer.spilled());
        buffer.push(4);
        assert!(buffer.spilled());
    }

    #[test]
    fn test_storage_map_insert_with_key() {
        slotmap::new_key_type! { struct TestKey; }
        let mut map: StorageMap<TestKey, (TestKey, u8)> = StorageMap::with_key();
        let key = map.insert_with_key(|k| (k, 3));
        assert_eq!(map.get(key), Some(&(key, 3)));
        assert!(map.remove(key).is_some());
        assert!(map.get(key).is_none());
    }
}
