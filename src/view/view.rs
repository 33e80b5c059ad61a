use std::cmp::Ordering;
use std::fmt::{self, Debug, Formatter};
use std::ops::Deref;
use std::slice::Iter;

use super::{clamp_bound, normalize_index};

/// A read-only, non-owning window over contiguous memory.
///
/// All indices are [`isize`] and may be negative, counting back from the end of the View, so `-1`
/// refers to the last element. Indexing that falls outside of the View after this normalization
/// returns [`None`], while range adjusting methods (`subview`, `take`, `skip`, `split_at`) clamp
/// to the bounds of the View and never panic.
///
/// A View derefs to `[T]` for everything else, although the inherent methods here take priority.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the View.
///
/// | Method | Complexity |
/// |-|-|
/// | `get` | `O(1)` |
/// | `subview` | `O(1)` |
/// | `take` / `skip` | `O(1)` |
/// | `find` / `position` | `O(n)` |
/// | `binary_search` | `O(log n)` |
/// | `partition_point` | `O(log n)` |
pub struct View<'a, T> {
    pub(crate) slice: &'a [T],
}

impl<'a, T> View<'a, T> {
    /// Creates a new View over the provided slice.
    pub const fn new(slice: &'a [T]) -> View<'a, T> {
        View {
            slice
        }
    }

    /// Creates a View with no elements.
    pub const fn empty() -> View<'a, T> {
        View {
            slice: &[]
        }
    }

    /// Returns the number of elements in the View.
    pub const fn len(&self) -> usize {
        self.slice.len()
    }

    /// Returns the number of bytes covered by the View.
    pub fn size_bytes(&self) -> usize {
        self.len() * size_of::<T>()
    }

    /// Returns true if the View contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.slice.is_empty()
    }

    /// Returns the underlying slice, with the full lifetime of the View.
    pub const fn as_slice(&self) -> &'a [T] {
        self.slice
    }

    /// Returns an iterator over references to the elements of the View.
    pub fn iter(&self) -> Iter<'a, T> {
        self.slice.iter()
    }

    /// Returns a reference to the element at `index`, or [`None`] if `index` is out of bounds.
    /// Negative indices count back from the end.
    ///
    /// # Examples
    /// ```
    /// # use container_lib::view::View;
    /// let view = View::new(&[1, 2, 3]);
    /// assert_eq!(view.get(0), Some(&1));
    /// assert_eq!(view.get(-1), Some(&3));
    /// assert_eq!(view.get(3), None);
    /// assert_eq!(view.get(-4), None);
    /// ```
    pub fn get(&self, index: isize) -> Option<&'a T> {
        normalize_index(index, self.len()).map(|i| &self.slice[i])
    }

    pub fn front(&self) -> Option<&'a T> {
        self.slice.first()
    }

    pub fn back(&self) -> Option<&'a T> {
        self.slice.last()
    }

    /// Returns the View between `start` (inclusive) and `end` (exclusive). Both bounds may be
    /// negative and are clamped to the View. If `start` ends up after `end`, the result is empty.
    ///
    /// # Examples
    /// ```
    /// # use container_lib::view::View;
    /// let view = View::new(&[1, 2, 3, 4, 5, 6]);
    /// assert_eq!(*view.subview(-6, 6), [1, 2, 3, 4, 5, 6]);
    /// assert_eq!(*view.subview(1, -1), [2, 3, 4, 5]);
    /// assert!(view.subview(10, 20).is_empty());
    /// ```
    pub fn subview(&self, start: isize, end: isize) -> View<'a, T> {
        let len = self.len();
        let start = clamp_bound(start, len);
        let end = clamp_bound(end, len);

        if start >= end {
            // Keep the position, even though no elements remain.
            return View::new(&self.slice[start..start]);
        }

        View::new(&self.slice[start..end])
    }

    /// Returns the first `count` elements, or the last `-count` elements if `count` is negative.
    /// Counts that exceed the length of the View return the whole View.
    ///
    /// # Examples
    /// ```
    /// # use container_lib::view::View;
    /// let view = View::new(&[3, 32, 58, 201, 3874, 9841]);
    /// assert_eq!(*view.take(2), [3, 32]);
    /// assert_eq!(*view.take(-2), [3874, 9841]);
    /// assert_eq!(view.take(100).len(), 6);
    /// ```
    pub fn take(&self, count: isize) -> View<'a, T> {
        let len = self.len();
        if count >= 0 {
            View::new(&self.slice[..clamp_bound(count, len)])
        } else {
            View::new(&self.slice[clamp_bound(count, len)..])
        }
    }

    /// Returns the View without its first `count` elements, or without its last `-count` elements
    /// if `count` is negative. Counts that exceed the length of the View return an empty View.
    ///
    /// # Examples
    /// ```
    /// # use container_lib::view::View;
    /// let view = View::new(&[1, 2, 3, 4]);
    /// assert_eq!(*view.skip(1), [2, 3, 4]);
    /// assert_eq!(*view.skip(-1), [1, 2, 3]);
    /// assert!(view.skip(-10).is_empty());
    /// ```
    pub fn skip(&self, count: isize) -> View<'a, T> {
        let len = self.len();
        if count >= 0 {
            View::new(&self.slice[clamp_bound(count, len)..])
        } else {
            View::new(&self.slice[..clamp_bound(count, len)])
        }
    }

    /// Splits the View in two at `pivot`, which is clamped and may be negative. The element at the
    /// pivot begins the second View.
    pub fn split_at(&self, pivot: isize) -> (View<'a, T>, View<'a, T>) {
        let (left, right) = self.slice.split_at(clamp_bound(pivot, self.len()));
        (View::new(left), View::new(right))
    }

    /// Returns true if both Views refer to the exact same memory. No elements are compared.
    pub fn ptr_eq(&self, other: &View<'_, T>) -> bool {
        self.slice.as_ptr() == other.slice.as_ptr() && self.len() == other.len()
    }

    /// Compares both Views element-wise using `compare`, returning true if they are the same length
    /// and every pair of elements compares as [`Ordering::Equal`].
    pub fn eq_by<F>(&self, other: &View<'_, T>, mut compare: F) -> bool
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.len() == other.len()
            && self.slice.iter()
                .zip(other.slice.iter())
                .all(|(a, b)| compare(a, b) == Ordering::Equal)
    }

    /// Returns the index of the first element that matches the `predicate`.
    pub fn find<P>(&self, predicate: P) -> Option<usize>
    where
        P: FnMut(&T) -> bool,
    {
        self.slice.iter().position(predicate)
    }

    /// Returns the index of the first element for which `compare` returns [`Ordering::Equal`]
    /// against `value`.
    pub fn position_by<F>(&self, value: &T, mut compare: F) -> Option<usize>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.find(|item| compare(item, value) == Ordering::Equal)
    }

    /// Searches the View for `value` using `compare`, returning its index if found. If there are
    /// multiple matches, any of them may be returned.
    ///
    /// The View must already be sorted according to `compare`. If it isn't, the result is
    /// unspecified (but still either [`None`] or a valid index).
    pub fn binary_search_by<F>(&self, value: &T, mut compare: F) -> Option<usize>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let mut low = 0;
        let mut high = self.len();

        while low < high {
            let mid = low + (high - low) / 2;
            match compare(&self.slice[mid], value) {
                Ordering::Less => low = mid + 1,
                Ordering::Greater => high = mid,
                Ordering::Equal => return Some(mid),
            }
        }

        None
    }

    /// Returns the index of the first element for which `predicate` returns false, assuming that
    /// the View is already partitioned so that all matching elements come first.
    pub fn partition_point<P>(&self, predicate: P) -> usize
    where
        P: FnMut(&T) -> bool,
    {
        self.slice.partition_point(predicate)
    }

    /// Splits a partitioned View into the elements matching `predicate` and the rest. See
    /// [`View::partition_point`].
    pub fn split_by<P>(&self, predicate: P) -> (View<'a, T>, View<'a, T>)
    where
        P: FnMut(&T) -> bool,
    {
        let (left, right) = self.slice.split_at(self.partition_point(predicate));
        (View::new(left), View::new(right))
    }
}

impl<T: PartialEq> View<'_, T> {
    /// Returns the index of the first element equal to `value`.
    pub fn position(&self, value: &T) -> Option<usize> {
        self.find(|item| item == value)
    }

    pub fn contains(&self, value: &T) -> bool {
        self.position(value).is_some()
    }

    pub fn starts_with(&self, prefix: &[T]) -> bool {
        self.slice.starts_with(prefix)
    }

    pub fn ends_with(&self, suffix: &[T]) -> bool {
        self.slice.ends_with(suffix)
    }
}

impl<T: Ord> View<'_, T> {
    /// Binary searches a sorted View for `value`. See [`View::binary_search_by`].
    pub fn binary_search(&self, value: &T) -> Option<usize> {
        self.binary_search_by(value, T::cmp)
    }
}

impl<T> Clone for View<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for View<'_, T> {}

impl<T> Default for View<'_, T> {
    fn default() -> Self {
        View::empty()
    }
}

impl<T> Deref for View<'_, T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        self.slice
    }
}

impl<'a, T> From<&'a [T]> for View<'a, T> {
    fn from(value: &'a [T]) -> Self {
        View::new(value)
    }
}

impl<'a, T, const N: usize> From<&'a [T; N]> for View<'a, T> {
    fn from(value: &'a [T; N]) -> Self {
        View::new(value)
    }
}

impl<'a, T> IntoIterator for View<'a, T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.slice.iter()
    }
}

impl<T: PartialEq> PartialEq for View<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.slice == other.slice
    }
}

impl<T: Eq> Eq for View<'_, T> {}

impl<T: Debug> Debug for View<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.slice.iter()).finish()
    }
}
