use std::fmt::{self, Debug, Formatter};
use std::mem;
use std::ops::{Index, IndexMut};

use super::{InvalidKey, Iter, IterMut, Key, Keys, Slot, Values, ValuesMut};
use crate::collections::contiguous::Array;
use crate::util::error::{CapacityOverflow, GenerationOverflow};
use crate::util::fmt::DebugRaw;
use crate::util::option::OptionExtension;
use crate::util::result::ResultExtension;

const MIN_ALLOCATED_CAP: usize = 8;

/// Keys index slots with a u32.
const MAX_CAP: usize = u32::MAX as usize;

/// A container which stores values in reusable slots and hands out a [`Key`] for each one.
///
/// Keys stay valid for as long as their value is present, regardless of other insertions and
/// removals. Each insertion takes a fresh generation from a counter that is never reset, so a key
/// to a removed value will never match whatever reuses its slot later.
///
/// Free slots are kept in an intrusive list and reused most recently freed first. When no slot is
/// free, the SlotMap grows by half of its capacity (to at least 8 slots), up to [`u32::MAX`]
/// slots.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of slots in the SlotMap.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `insert` / `emplace` | `O(1)`*, `O(n)` |
/// | `get` | `O(1)` |
/// | `remove` | `O(1)` |
/// | `next` | `O(n)`** |
/// | `clear` / `trim` | `O(n)` |
///
/// \* If the SlotMap needs to grow for the new value, `O(n)`.
///
/// \** Amortized over a full iteration, each call is `O(1)`.
pub struct SlotMap<T> {
    pub(crate) slots: Array<Slot<T>>,
    /// The most recently freed slot.
    pub(crate) head: Option<u32>,
    pub(crate) len: usize,
    /// The last generation handed out.
    pub(crate) generation: u64,
}

impl<T> SlotMap<T> {
    /// Creates a new SlotMap with capacity 0. Memory will be allocated on the first insertion.
    pub fn new() -> SlotMap<T> {
        SlotMap {
            slots: Array::new(),
            head: None,
            len: 0,
            generation: 0,
        }
    }

    /// Creates a new SlotMap with `cap` free slots.
    ///
    /// # Panics
    /// Panics if `cap` exceeds [`u32::MAX`].
    pub fn with_cap(cap: usize) -> SlotMap<T> {
        let mut map = SlotMap::new();
        map.reserve(cap);
        map
    }

    /// Returns the number of values in the SlotMap.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the SlotMap contains no values.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of slots in the SlotMap, free or occupied.
    pub const fn cap(&self) -> usize {
        self.slots.size()
    }

    /// Grows the SlotMap to `cap` slots if it has fewer. The new slots are free and will be used
    /// in ascending order, before any previously freed slots.
    ///
    /// # Panics
    /// Panics if `cap` exceeds [`u32::MAX`].
    pub fn reserve(&mut self, cap: usize) {
        if cap <= self.cap() { return; }

        Self::check_cap(cap).throw();
        self.grow_to(cap);
    }

    /// Inserts `value`, returning its Key.
    ///
    /// # Panics
    /// Panics if the SlotMap already holds [`u32::MAX`] values, or if the generation counter is
    /// exhausted.
    ///
    /// # Examples
    /// ```
    /// # use container_lib::collections::slot::SlotMap;
    /// let mut map = SlotMap::new();
    /// let key = map.insert("value");
    /// assert_eq!(map.get(key), Some(&"value"));
    /// assert_eq!(map.remove(key), Some("value"));
    /// assert_eq!(map.get(key), None);
    /// ```
    pub fn insert(&mut self, value: T) -> Key {
        self.insert_with_key(|_| value)
    }

    /// Inserts the value produced by `f`, which is given the Key that the value will be stored
    /// under. Useful for values that need to refer to themselves.
    ///
    /// # Panics
    /// Panics under the same conditions as [`SlotMap::insert`].
    pub fn insert_with_key<F: FnOnce(Key) -> T>(&mut self, f: F) -> Key {
        let index = self.next_free();
        let generation = self.generation.checked_add(1).ok_or(GenerationOverflow).throw();
        let key = Key {
            index,
            generation,
        };

        let value = f(key);

        let slot = &mut self.slots[index as usize];
        self.head = match slot {
            Slot::Free { next } => *next,
            // UNREACHABLE: The free list only links free slots.
            Slot::Occupied { .. } => unreachable!(),
        };
        *slot = Slot::Occupied {
            generation,
            value,
        };

        self.generation = generation;
        self.len += 1;
        key
    }

    /// Inserts a default value, returning its Key along with a mutable reference to the value.
    ///
    /// # Panics
    /// Panics under the same conditions as [`SlotMap::insert`].
    pub fn emplace(&mut self) -> (Key, &mut T)
    where
        T: Default,
    {
        let key = self.insert(T::default());
        // UNREACHABLE: The key was just inserted.
        (key, unsafe { self.get_mut(key).unreachable() })
    }

    /// Returns a reference to the value for `key`, or None if `key` is stale or invalid.
    pub fn get(&self, key: Key) -> Option<&T> {
        self.slots.get(key.index as usize)?.get(key.generation)
    }

    /// Returns a mutable reference to the value for `key`, or None if `key` is stale or invalid.
    pub fn get_mut(&mut self, key: Key) -> Option<&mut T> {
        self.slots.get_mut(key.index as usize)?.get_mut(key.generation)
    }

    /// Returns true if `key` refers to a value in the SlotMap.
    pub fn contains(&self, key: Key) -> bool {
        self.get(key).is_some()
    }

    /// Returns a clone of the value for `key`, or None if `key` is stale or invalid.
    pub fn read(&self, key: Key) -> Option<T>
    where
        T: Clone,
    {
        self.get(key).cloned()
    }

    /// Removes and returns the value for `key`. Stale or invalid keys remove nothing and return
    /// None.
    ///
    /// The freed slot is the next one to be reused.
    pub fn remove(&mut self, key: Key) -> Option<T> {
        let slot = self.slots.get_mut(key.index as usize)?;
        slot.get(key.generation)?;

        let old = mem::replace(slot, Slot::Free { next: self.head });
        self.head = Some(key.index);
        self.len -= 1;
        old.into_value()
    }

    /// Advances `cursor` to the next occupied slot and returns its value. Iteration starts from
    /// the first slot when `cursor` is [`Key::NULL`], otherwise it continues after the slot of
    /// `cursor`. Returns None once the end is reached, leaving `cursor` unchanged.
    ///
    /// # Examples
    /// ```
    /// # use container_lib::collections::slot::{Key, SlotMap};
    /// let mut map = SlotMap::new();
    /// for i in 1..=3 {
    ///     map.insert(i);
    /// }
    ///
    /// let mut cursor = Key::NULL;
    /// let mut total = 0;
    /// while let Some(value) = map.next(&mut cursor) {
    ///     total += value;
    /// }
    /// assert_eq!(total, 6);
    /// ```
    pub fn next(&self, cursor: &mut Key) -> Option<&T> {
        let start = if cursor.is_null() { 0 } else { cursor.index as usize + 1 };

        for (index, slot) in self.slots.iter().enumerate().skip(start) {
            if let Slot::Occupied { generation, value } = slot {
                *cursor = Key {
                    index: index as u32,
                    generation: *generation,
                };
                return Some(value);
            }
        }

        None
    }

    /// Removes all values, keeping the allocated slots. The generation counter isn't reset, so
    /// keys from before the clear remain invalid.
    pub fn clear(&mut self) {
        log::trace!("clearing SlotMap of {} values", self.len);

        for slot in self.slots.iter_mut() {
            *slot = Slot::Free { next: None };
        }
        self.len = 0;
        self.relink_free();
    }

    /// Removes all values and releases all slots. The generation counter isn't reset.
    pub fn free(&mut self) {
        log::trace!("freeing SlotMap with cap {}", self.cap());

        self.slots = Array::new();
        self.head = None;
        self.len = 0;
    }

    /// Releases any free slots after the last occupied one.
    pub fn trim(&mut self) {
        let new_cap = self.slots.iter()
            .rposition(Slot::is_occupied)
            .map_or(0, |last| last + 1);

        if new_cap < self.cap() {
            log::trace!("trimming SlotMap from cap {} to {}", self.cap(), new_cap);

            self.slots.realloc_with(|| Slot::Free { next: None }, new_cap);
            self.relink_free();
        }
    }

    /// Returns an iterator over all keys and values in the SlotMap, as references.
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    /// Returns an iterator over all keys and values in the SlotMap, with mutable values.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.into_iter()
    }

    /// Returns an iterator over all keys in the SlotMap.
    pub fn keys(&self) -> Keys<'_, T> {
        Keys(self.iter())
    }

    /// Returns an iterator over all values in the SlotMap, as references.
    pub fn values(&self) -> Values<'_, T> {
        Values(self.iter())
    }

    /// Returns an iterator over all values in the SlotMap, as mutable references.
    pub fn values_mut(&mut self) -> ValuesMut<'_, T> {
        ValuesMut(self.iter_mut())
    }
}

impl<T> SlotMap<T> {
    pub(crate) fn check_cap(cap: usize) -> Result<usize, CapacityOverflow> {
        if cap > MAX_CAP {
            Err(CapacityOverflow)
        } else {
            Ok(cap)
        }
    }

    pub(crate) fn next_cap(&self) -> usize {
        (self.cap() + self.cap() / 2).clamp(MIN_ALLOCATED_CAP, MAX_CAP)
    }

    /// Returns the index of the next free slot, growing if there isn't one. The slot isn't
    /// removed from the free list.
    pub(crate) fn next_free(&mut self) -> u32 {
        if let Some(index) = self.head {
            return index;
        }

        if self.cap() >= MAX_CAP {
            Err::<(), _>(CapacityOverflow).throw();
        }
        self.grow_to(self.next_cap());

        // UNREACHABLE: Growing always adds at least one free slot.
        unsafe { self.head.unreachable() }
    }

    /// Grows to `new_cap` slots, linking the new slots in ascending order ahead of the current
    /// free list.
    pub(crate) fn grow_to(&mut self, new_cap: usize) {
        let old_cap = self.cap();
        log::trace!("growing SlotMap from cap {} to {}", old_cap, new_cap);

        self.slots.realloc_with(|| Slot::Free { next: None }, new_cap);

        for index in (old_cap..new_cap).rev() {
            self.slots[index] = Slot::Free { next: self.head };
            self.head = Some(index as u32);
        }
    }

    /// Rebuilds the free list from every free slot, in ascending order.
    pub(crate) fn relink_free(&mut self) {
        self.head = None;

        for (index, slot) in self.slots.iter_mut().enumerate().rev() {
            if let Slot::Free { next } = slot {
                *next = self.head;
                self.head = Some(index as u32);
            }
        }
    }
}

impl<T> Default for SlotMap<T> {
    fn default() -> Self {
        SlotMap::new()
    }
}

impl<T: Clone> Clone for SlotMap<T> {
    fn clone(&self) -> Self {
        SlotMap {
            slots: self.slots.clone(),
            head: self.head,
            len: self.len,
            generation: self.generation,
        }
    }
}

impl<T> Index<Key> for SlotMap<T> {
    type Output = T;

    /// # Panics
    /// Panics if `key` doesn't refer to a value in the SlotMap.
    fn index(&self, key: Key) -> &Self::Output {
        self.get(key).ok_or(InvalidKey { key }).throw()
    }
}

impl<T> IndexMut<Key> for SlotMap<T> {
    /// # Panics
    /// Panics if `key` doesn't refer to a value in the SlotMap.
    fn index_mut(&mut self, key: Key) -> &mut Self::Output {
        self.get_mut(key).ok_or(InvalidKey { key }).throw()
    }
}

impl<T: Debug> Debug for SlotMap<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("SlotMap")
            .field("values", &DebugEntries(self))
            .field("len", &self.len)
            .field("cap", &self.cap())
            .field("generation", &self.generation)
            .finish()
    }
}

struct DebugEntries<'a, T>(&'a SlotMap<T>);

impl<T: Debug> Debug for DebugEntries<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.0.iter().map(|(key, value)| (DebugRaw(key.to_string()), value)))
            .finish()
    }
}
