use std::borrow::Borrow;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{BuildHasher, Hash, RandomState};
use std::mem;
use std::ops::Index;

use super::bucket::{Bucket, Location};
use super::{Cursor, KeyNotFound, IntoKeys, IntoValues, Iter, IterMut, Keys, Values, ValuesMut};
use crate::collections::contiguous::{Array, Vector};
use crate::util::error::CapacityOverflow;
use crate::util::fmt::DebugRaw;
use crate::util::option::OptionExtension;
use crate::util::result::ResultExtension;

const MIN_ALLOCATED_CAP: usize = 8;

const GROWTH_FACTOR: usize = 2;

const LOAD_FACTOR_NUMERATOR: usize = 3;
const LOAD_FACTOR_DENOMINATOR: usize = 4;

/// A map of keys to values which relies on the keys implementing [`Hash`].
///
/// Each key is hashed to one of `cap` primary buckets, where `cap` is always 0 or a power of two.
/// The first entry in a bucket is stored directly in the map's roots; entries that collide with it
/// are "stacked" in a single overflow [`Vector`] and linked from the root. There are no
/// tombstones: removing a root promotes the next entry in its bucket, and removing any entry
/// compacts the overflow storage immediately.
///
/// The load factor is fixed at 3/4. The map grows (doubling its capacity, starting from 8) before
/// an insertion that would bring it to that load.
///
/// It is a logic error for keys in a HashMap to be manipulated in a way that changes their hash.
/// Because of this, HashMap's API prevents mutable access to its keys.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the HashMap.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `insert` / `write` / `ensure` | `O(1)`**, `O(n)` |
/// | `get` | `O(1)`* |
/// | `remove` | `O(1)`* |
/// | `contains` | `O(1)`* |
/// | `reserve` | `O(n)`***, `O(1)` |
///
/// \* In the event of a hash collision, these methods also walk the entries stacked in the same
/// bucket. Removal walks the bucket of the overflow entry that gets moved into the vacated space
/// as well.
///
/// \** If the HashMap needs to grow for the new entry, `O(n)`. \* applies as well.
///
/// \*** If the HashMap has enough capacity already, `reserve` is `O(1)`.
pub struct HashMap<K: Hash + Eq, V, B: BuildHasher = RandomState> {
    pub(crate) roots: Array<Option<Bucket<K, V>>>,
    pub(crate) overflow: Vector<Bucket<K, V>>,
    pub(crate) len: usize,
    pub(crate) hasher: B,
}

impl<K: Hash + Eq, V, B: BuildHasher + Default> HashMap<K, V, B> {
    /// Creates a new HashMap with capacity 0 and the default value for `B`. Memory will be
    /// allocated on the first insertion.
    pub fn new() -> HashMap<K, V, B> {
        HashMap::with_hasher(B::default())
    }

    /// Creates a new HashMap with at least the provided `cap`acity (rounded up to a power of two).
    /// The default hasher will be used.
    pub fn with_cap(cap: usize) -> HashMap<K, V, B> {
        HashMap::with_cap_and_hasher(cap, B::default())
    }
}

impl<K: Hash + Eq, V, B: BuildHasher> HashMap<K, V, B> {
    /// Creates a new HashMap with capacity 0 and the provided `hasher`.
    pub fn with_hasher(hasher: B) -> HashMap<K, V, B> {
        HashMap {
            roots: Array::new(),
            overflow: Vector::new(),
            len: 0,
            hasher,
        }
    }

    /// Creates a new HashMap with at least the provided `cap`acity and `hasher`.
    pub fn with_cap_and_hasher(cap: usize, hasher: B) -> HashMap<K, V, B> {
        let mut map = HashMap::with_hasher(hasher);
        map.reserve(cap);
        map
    }

    /// Returns the number of entries in the HashMap.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the HashMap contains no entries.
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the current capacity (number of primary buckets) of the HashMap.
    pub const fn cap(&self) -> usize {
        self.roots.size()
    }

    /// Returns a mutable reference to the value for `key` and whether it was just created. New
    /// values start as [`V::default()`](Default::default).
    ///
    /// # Examples
    /// ```
    /// # use container_lib::collections::hash::HashMap;
    /// let mut map: HashMap<&str, u32> = HashMap::new();
    /// let (count, is_new) = map.ensure("a");
    /// assert!(is_new);
    /// *count += 1;
    /// let (count, is_new) = map.ensure("a");
    /// assert!(!is_new);
    /// assert_eq!(*count, 1);
    /// ```
    pub fn ensure(&mut self, key: K) -> (&mut V, bool)
    where
        V: Default,
    {
        let (location, is_new) = self.find_or_insert_with(key, V::default);
        (&mut self.bucket_mut(location).value, is_new)
    }

    /// Creates a new entry for `key` with a default value and returns a reference to it, or
    /// returns [`None`] without modifying anything if `key` is already present.
    pub fn emplace(&mut self, key: K) -> Option<&mut V>
    where
        V: Default,
    {
        match self.find_or_insert_with(key, V::default) {
            (location, true) => Some(&mut self.bucket_mut(location).value),
            (_, false) => None,
        }
    }

    /// Writes `value` for `key`, replacing any existing value. Returns true if a new entry was
    /// created.
    ///
    /// As with the standard library, the key isn't changed if it already exists.
    pub fn write(&mut self, key: K, value: V) -> bool {
        let hash = self.hasher.hash_one(&key);

        match self.find(hash, &key) {
            Some(location) => {
                self.bucket_mut(location).value = value;
                false
            },
            None => {
                self.insert_new(hash, key, value);
                true
            },
        }
    }

    /// Inserts `value` for `key` only if `key` isn't already present. Returns true if the value
    /// was inserted; otherwise the existing value is untouched and `value` is dropped.
    ///
    /// # Examples
    /// ```
    /// # use container_lib::collections::hash::HashMap;
    /// let mut map: HashMap<u32, &str> = HashMap::new();
    /// assert!(map.insert(1, "one"));
    /// assert!(!map.insert(1, "uno"));
    /// assert_eq!(map.get(&1), Some(&"one"));
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> bool {
        let hash = self.hasher.hash_one(&key);

        if self.find(hash, &key).is_some() {
            return false;
        }

        self.insert_new(hash, key, value);
        true
    }

    /// Returns the entry for the provided `key` as a key-value pair or None if there is no entry.
    pub fn get_entry<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        // Q represents a borrowed version of K where equality and hashing carry over the borrow.
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let location = self.find(self.hasher.hash_one(key), key)?;
        let bucket = self.bucket(location);
        Some((&bucket.key, &bucket.value))
    }

    /// Returns a reference to the value associated with the provided `key` or None if the map
    /// contains no values for `key`.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get_entry(key).map(|(_, v)| v)
    }

    /// Returns a mutable reference to the value associated with the provided `key` or None if the
    /// map contains no values for `key`.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let location = self.find(self.hasher.hash_one(key), key)?;
        Some(&mut self.bucket_mut(location).value)
    }

    /// Returns true if there is a value associated with the provided `key`.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.find(self.hasher.hash_one(key), key).is_some()
    }

    /// Removes the entry associated with `key`, returning it if it exists.
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let hash = self.hasher.hash_one(key);
        let index = self.index_for_hash(hash)?;
        let root = self.roots[index].as_ref()?;

        let removed = if root.hash == hash && root.key.borrow() == key {
            match root.next {
                None => self.roots[index].take(),
                Some(successor) => {
                    // Unlink the successor, then promote it into the root.
                    let after = self.overflow[successor].next;
                    // UNREACHABLE: The root was matched above.
                    unsafe { self.roots[index].as_mut().unreachable() }.next = after;

                    let mut promoted = self.take_overflow(successor);
                    // UNREACHABLE: The root is still present, it has only been relinked.
                    let root = unsafe { self.roots[index].as_mut().unreachable() };
                    promoted.next = root.next;
                    Some(mem::replace(root, promoted))
                },
            }
        } else {
            let mut previous = Location::Root(index);
            let mut current = root.next;
            let mut found = None;

            while let Some(i) = current {
                let bucket = &self.overflow[i];
                if bucket.hash == hash && bucket.key.borrow() == key {
                    found = Some((previous, i, bucket.next));
                    break;
                }
                previous = Location::Overflow(i);
                current = bucket.next;
            }

            let (previous, i, after) = found?;
            self.bucket_mut(previous).next = after;
            Some(self.take_overflow(i))
        };

        self.len -= 1;
        removed.map(Bucket::into_entry)
    }

    /// Removes the entry associated with `key`, returning the value if it exists.
    pub fn take<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.remove_entry(key).map(|(_, v)| v)
    }

    /// Removes the entry associated with `key`. Returns true if anything was removed.
    ///
    /// # Examples
    /// ```
    /// # use container_lib::collections::hash::HashMap;
    /// let mut map: HashMap<u32, u32> = [(1, 10), (2, 20)].into_iter().collect();
    /// assert!(map.remove(&1));
    /// assert!(!map.remove(&1));
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn remove<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.remove_entry(key).is_some()
    }

    /// Ensures that the HashMap has at least `cap` primary buckets, rounding up to a power of two.
    /// All entries are rehashed if the capacity changes. Does nothing if the current capacity is
    /// already sufficient.
    pub fn reserve(&mut self, cap: usize) {
        if cap <= self.cap() { return; }

        let new_cap = cap.checked_next_power_of_two()
            .ok_or(CapacityOverflow)
            .throw()
            .max(MIN_ALLOCATED_CAP);

        self.realloc_with_cap(new_cap);
    }

    /// Shrinks the HashMap to the smallest capacity that holds its current entries below the load
    /// factor, releasing all memory if the map is empty.
    pub fn trim(&mut self) {
        let new_cap = if self.len == 0 {
            0
        } else {
            let mut cap = MIN_ALLOCATED_CAP;
            while self.len * LOAD_FACTOR_DENOMINATOR >= cap * LOAD_FACTOR_NUMERATOR {
                cap *= GROWTH_FACTOR;
            }
            cap
        };

        if new_cap < self.cap() {
            self.realloc_with_cap(new_cap);
            self.overflow.trim();
        }
    }

    /// Removes all entries, keeping the allocated capacity.
    pub fn clear(&mut self) {
        for root in self.roots.iter_mut() {
            *root = None;
        }
        self.overflow.clear();
        self.len = 0;
    }

    /// Returns the entry stored after `cursor` in storage order, along with a cursor for that
    /// entry, or the first entry if `cursor` is [`None`]. Storage order visits the roots by bucket,
    /// then the overflow storage, so it is unrelated to insertion order.
    ///
    /// Any insertion or removal invalidates previously returned cursors.
    ///
    /// # Examples
    /// ```
    /// # use container_lib::collections::hash::HashMap;
    /// let map: HashMap<u32, u32> = (0..10).map(|i| (i, i * i)).collect();
    /// let mut cursor = None;
    /// let mut sum = 0;
    /// while let Some((next, _, value)) = map.next_entry(cursor) {
    ///     sum += value;
    ///     cursor = Some(next);
    /// }
    /// assert_eq!(sum, 285);
    /// ```
    pub fn next_entry(&self, cursor: Option<Cursor>) -> Option<(Cursor, &K, &V)> {
        let start = cursor.map_or(0, |c| c.0 + 1);
        let cap = self.cap();

        for position in start..cap {
            if let Some(bucket) = &self.roots[position] {
                return Some((Cursor(position), &bucket.key, &bucket.value));
            }
        }

        let offset = start.saturating_sub(cap);
        self.overflow.get(offset)
            .map(|bucket| (Cursor(cap + offset), &bucket.key, &bucket.value))
    }

    /// Returns an iterator over all key-value pairs in the HashMap, as references.
    pub fn iter(&self) -> Iter<'_, K, V> {
        self.into_iter()
    }

    /// Returns an iterator over all key-value pairs in the HashMap, with mutable values.
    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        self.into_iter()
    }

    /// Consumes self and returns an iterator over all contained keys.
    pub fn into_keys(self) -> IntoKeys<K, V> {
        IntoKeys(self.into_iter())
    }

    /// Returns an iterator over all keys in the HashMap, as references.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys(self.iter())
    }

    /// Consumes self and returns an iterator over all contained values.
    pub fn into_values(self) -> IntoValues<K, V> {
        IntoValues(self.into_iter())
    }

    /// Returns an iterator over all values in the HashMap, as mutable references.
    pub fn values_mut(&mut self) -> ValuesMut<'_, K, V> {
        ValuesMut(self.iter_mut())
    }

    /// Returns an iterator over all values in the HashMap, as references.
    pub fn values(&self) -> Values<'_, K, V> {
        Values(self.iter())
    }
}

impl<K: Hash + Eq, V, B: BuildHasher> HashMap<K, V, B> {
    /// Determines whether inserting another entry would bring the HashMap to its load factor,
    /// meaning that it should grow first.
    pub(crate) const fn should_grow(&self) -> bool {
        (self.len + 1) * LOAD_FACTOR_DENOMINATOR >= self.cap() * LOAD_FACTOR_NUMERATOR
    }

    /// Grows the HashMap by the growth factor, ensuring that it can hold additional entries.
    pub(crate) fn grow(&mut self) {
        let new_cap = (self.cap() * GROWTH_FACTOR).max(MIN_ALLOCATED_CAP);
        self.realloc_with_cap(new_cap)
    }

    /// Reallocates the HashMap to have `new_cap` primary buckets and rehashes every entry into
    /// them. `new_cap` must be 0 or a power of two, and large enough to hold all entries.
    pub(crate) fn realloc_with_cap(&mut self, new_cap: usize) {
        log::trace!("rehashing HashMap of {} entries from cap {} to {}", self.len, self.cap(), new_cap);

        let old_roots = mem::replace(&mut self.roots, Array::repeat_with(|| None, new_cap));
        let old_overflow = mem::take(&mut self.overflow);
        self.len = 0;

        // Hashes are stored, so the keys don't need to be hashed again.
        for bucket in old_roots.into_iter().flatten().chain(old_overflow) {
            self.place(bucket.hash, bucket.key, bucket.value);
        }
    }

    /// Calculates the primary bucket for the provided `hash`, or None if the HashMap has 0
    /// capacity.
    pub(crate) const fn index_for_hash(&self, hash: u64) -> Option<usize> {
        match self.cap() {
            0 => None,
            // The capacity is a power of two, so masking is equivalent to modulo.
            cap => Some(hash as usize & (cap - 1)),
        }
    }

    /// Finds the location of the entry with the provided `key` (and its `hash`), if present.
    pub(crate) fn find<Q>(&self, hash: u64, key: &Q) -> Option<Location>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.index_for_hash(hash)?;
        let root = self.roots[index].as_ref()?;

        if root.hash == hash && root.key.borrow() == key {
            return Some(Location::Root(index));
        }

        let mut current = root.next;
        while let Some(i) = current {
            let bucket = &self.overflow[i];
            if bucket.hash == hash && bucket.key.borrow() == key {
                return Some(Location::Overflow(i));
            }
            current = bucket.next;
        }

        None
    }

    /// Finds the entry for `key`, or inserts one with the value produced by `f`. Returns the
    /// location of the entry and whether it was inserted.
    pub(crate) fn find_or_insert_with<F>(&mut self, key: K, f: F) -> (Location, bool)
    where
        F: FnOnce() -> V,
    {
        let hash = self.hasher.hash_one(&key);

        match self.find(hash, &key) {
            Some(location) => (location, false),
            None => (self.insert_new(hash, key, f()), true),
        }
    }

    /// Inserts an entry which is known not to be present, growing first if required.
    pub(crate) fn insert_new(&mut self, hash: u64, key: K, value: V) -> Location {
        if self.should_grow() {
            self.grow();
        }

        self.place(hash, key, value)
    }

    /// Places an entry which is known not to be present, without checking the load factor. The
    /// HashMap must have a non-zero capacity.
    ///
    /// A colliding entry is stacked directly behind the root of its bucket.
    pub(crate) fn place(&mut self, hash: u64, key: K, value: V) -> Location {
        // UNREACHABLE: Callers ensure that the capacity isn't 0.
        let index = unsafe { self.index_for_hash(hash).unreachable() };
        self.len += 1;

        match &mut self.roots[index] {
            Some(root) => {
                let i = self.overflow.len();
                self.overflow.push(Bucket::new(hash, key, value, root.next));
                root.next = Some(i);
                Location::Overflow(i)
            },
            empty => {
                *empty = Some(Bucket::new(hash, key, value, None));
                Location::Root(index)
            },
        }
    }

    /// Removes the overflow entry at `index`, which must already be unlinked from its bucket. The
    /// last overflow entry is moved into its place and relinked.
    pub(crate) fn take_overflow(&mut self, index: usize) -> Bucket<K, V> {
        let last = self.overflow.len() - 1;
        let removed = self.overflow.swap_remove(index);

        if index != last {
            let hash = self.overflow[index].hash;
            self.relink(hash, last, index);
        }

        removed
    }

    /// Updates the link pointing at overflow index `from`, in the bucket for `hash`, to point at
    /// `to` instead.
    fn relink(&mut self, hash: u64, from: usize, to: usize) {
        // UNREACHABLE: The moved entry belongs to a bucket, which must have a root.
        let index = unsafe { self.index_for_hash(hash).unreachable() };
        let root = unsafe { self.roots[index].as_mut().unreachable() };

        if root.next == Some(from) {
            root.next = Some(to);
            return;
        }

        let mut current = root.next;
        while let Some(i) = current {
            let bucket = &mut self.overflow[i];
            if bucket.next == Some(from) {
                bucket.next = Some(to);
                return;
            }
            current = bucket.next;
        }
    }

    pub(crate) fn bucket(&self, location: Location) -> &Bucket<K, V> {
        match location {
            // UNREACHABLE: Locations always refer to occupied roots.
            Location::Root(i) => unsafe { self.roots[i].as_ref().unreachable() },
            Location::Overflow(i) => &self.overflow[i],
        }
    }

    pub(crate) fn bucket_mut(&mut self, location: Location) -> &mut Bucket<K, V> {
        match location {
            // UNREACHABLE: Locations always refer to occupied roots.
            Location::Root(i) => unsafe { self.roots[i].as_mut().unreachable() },
            Location::Overflow(i) => &mut self.overflow[i],
        }
    }
}

impl<K: Hash + Eq, V, B: BuildHasher + Default> Default for HashMap<K, V, B> {
    fn default() -> Self {
        HashMap::new()
    }
}

impl<K: Hash + Eq, V, B: BuildHasher> Extend<(K, V)> for HashMap<K, V, B> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.write(key, value);
        }
    }
}

impl<K: Hash + Eq, V, B: BuildHasher + Default> FromIterator<(K, V)> for HashMap<K, V, B> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = HashMap::new();
        map.extend(iter);
        map
    }
}

impl<K, Q, V, B> Index<&Q> for HashMap<K, V, B>
where
    K: Hash + Eq + Borrow<Q>,
    Q: Hash + Eq + ?Sized,
    B: BuildHasher,
{
    type Output = V;

    /// # Panics
    /// Panics if the HashMap doesn't contain `key`.
    fn index(&self, key: &Q) -> &Self::Output {
        self.get(key).ok_or(KeyNotFound).throw()
    }
}

impl<K: Hash + Eq + Debug, V: Debug, B: BuildHasher + Debug> Debug for HashMap<K, V, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let buckets: Vector<DebugRaw> = self.roots.iter()
            .map(|root| DebugRaw(match root {
                Some(root) => {
                    let mut chain = format!("({:?}: {:?})", root.key, root.value);
                    let mut current = root.next;
                    while let Some(i) = current {
                        let bucket = &self.overflow[i];
                        chain.push_str(&format!(" -> ({:?}: {:?})", bucket.key, bucket.value));
                        current = bucket.next;
                    }
                    chain
                },
                None => "-".into(),
            }))
            .collect();

        f.debug_struct("HashMap")
            .field("buckets", &buckets.view())
            .field("len", &self.len)
            .field("cap", &self.cap())
            .field("hasher", &self.hasher)
            .finish()
    }
}

impl<K: Hash + Eq + Debug, V: Debug, B: BuildHasher> Display for HashMap<K, V, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "#")?;
        f.debug_map().entries(self.iter()).finish()
    }
}
