use std::hash::{BuildHasher, Hash, Hasher};

/// A value which hashes to a chosen `hash` but compares by `value`, for forcing collisions.
#[derive(Debug, Clone)]
pub struct ManualHash<T: Eq> {
    hash: u64,
    value: T,
}

impl<T: Eq> ManualHash<T> {
    pub const fn new(hash: u64, value: T) -> ManualHash<T> {
        ManualHash {
            hash,
            value,
        }
    }

    pub fn value(self) -> T {
        self.value
    }
}

impl<T: Eq> Hash for ManualHash<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.hash.hash(state);
    }
}

impl<T: Eq> PartialEq for ManualHash<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: Eq> Eq for ManualHash<T> {}

/// Folds the written bytes into a u64, so integer keys hash to themselves (on little endian).
#[derive(Debug)]
pub struct IdentityHasher {
    state: u64,
    offset: u64,
    mask: u64,
}

impl Hasher for IdentityHasher {
    fn finish(&self) -> u64 {
        self.state & self.mask
    }

    fn write(&mut self, bytes: &[u8]) {
        for byte in bytes {
            self.state ^= (*byte as u64) << (self.offset * 8);
            self.offset = (self.offset + 1) % 8;
        }
    }
}

#[derive(Debug, Default)]
pub struct IdentityHasherBuilder;

impl BuildHasher for IdentityHasherBuilder {
    type Hasher = IdentityHasher;

    fn build_hasher(&self) -> Self::Hasher {
        IdentityHasher {
            state: 0,
            offset: 0,
            mask: u64::MAX,
        }
    }
}

/// Like [`IdentityHasherBuilder`] but clears the low three bits, so every integer key in `0..8`
/// lands in the same bucket of a map with 8 buckets.
#[derive(Debug, Default)]
pub struct CoarseHasherBuilder;

impl BuildHasher for CoarseHasherBuilder {
    type Hasher = IdentityHasher;

    fn build_hasher(&self) -> Self::Hasher {
        IdentityHasher {
            state: 0,
            offset: 0,
            mask: !0b111,
        }
    }
}
