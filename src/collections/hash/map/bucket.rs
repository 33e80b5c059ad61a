/// A single entry of a [`HashMap`](super::HashMap). Each primary bucket has a root entry stored
/// directly in the map's roots, while colliding entries are stacked in the overflow [`Vector`]
/// and linked from the root through `next`.
///
/// [`Vector`]: crate::collections::contiguous::Vector
pub(crate) struct Bucket<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
    pub(crate) hash: u64,
    /// The overflow index of the next entry in the same bucket.
    pub(crate) next: Option<usize>,
}

impl<K, V> Bucket<K, V> {
    pub(crate) const fn new(hash: u64, key: K, value: V, next: Option<usize>) -> Bucket<K, V> {
        Bucket {
            key,
            value,
            hash,
            next,
        }
    }

    pub(crate) fn into_entry(self) -> (K, V) {
        (self.key, self.value)
    }
}

/// The position of a [`Bucket`] within a map: either a root, indexed by its primary bucket, or an
/// overflow entry, indexed within the overflow storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Location {
    Root(usize),
    Overflow(usize),
}
