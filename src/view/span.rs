use std::cmp::Ordering;
use std::fmt::{self, Debug, Formatter};
use std::ops::{Deref, DerefMut};
use std::{ptr, slice};

#[cfg(feature = "shuffle")]
use rand::Rng;

use super::{View, clamp_bound, normalize_index};
use crate::util::error::IndexOutOfBounds;
use crate::util::result::ResultExtension;

/// A mutable, non-owning window over contiguous memory.
///
/// A Span provides everything that a [`View`] does (via [`Span::as_view`]), along with in-place
/// mutation: filling, sorting, reversing, rotating, shuffling, swapping and filtering. Like a View,
/// a Span never allocates and never changes the amount of memory it refers to.
pub struct Span<'a, T> {
    pub(crate) slice: &'a mut [T],
}

impl<'a, T> Span<'a, T> {
    /// Creates a new Span over the provided slice.
    pub const fn new(slice: &'a mut [T]) -> Span<'a, T> {
        Span {
            slice
        }
    }

    pub const fn len(&self) -> usize {
        self.slice.len()
    }

    pub fn size_bytes(&self) -> usize {
        self.len() * size_of::<T>()
    }

    pub const fn is_empty(&self) -> bool {
        self.slice.is_empty()
    }

    /// Borrows the Span as a read-only [`View`].
    pub fn as_view(&self) -> View<'_, T> {
        View::new(self.slice)
    }

    /// Consumes the Span, producing a [`View`] with the same lifetime.
    pub fn into_view(self) -> View<'a, T> {
        View::new(self.slice)
    }

    /// Returns a mutable reference to the element at `index`, or [`None`] if it is out of bounds.
    /// Negative indices count back from the end.
    pub fn get_mut(&mut self, index: isize) -> Option<&mut T> {
        normalize_index(index, self.len()).map(|i| &mut self.slice[i])
    }

    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.slice.first_mut()
    }

    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.slice.last_mut()
    }

    /// Reborrows the section between `start` and `end` as a new Span. Bounds are handled the same
    /// way as [`View::subview`].
    pub fn subspan(&mut self, start: isize, end: isize) -> Span<'_, T> {
        let len = self.len();
        let start = clamp_bound(start, len);
        let end = clamp_bound(end, len).max(start);

        Span::new(&mut self.slice[start..end])
    }

    /// Splits the Span into two disjoint Spans at `pivot`, which is clamped and may be negative.
    pub fn split_at_mut(&mut self, pivot: isize) -> (Span<'_, T>, Span<'_, T>) {
        let (left, right) = self.slice.split_at_mut(clamp_bound(pivot, self.len()));
        (Span::new(left), Span::new(right))
    }

    /// Sets every byte covered by the Span to `byte`.
    ///
    /// # Safety
    /// The caller must ensure that a value of `T` consisting only of `byte` is valid. Any values
    /// previously held are overwritten without being dropped.
    pub unsafe fn write_bytes(&mut self, byte: u8) {
        // SAFETY: The pointer is valid for writes of len elements. Validity of the resulting
        // values is the responsibility of the caller.
        unsafe {
            ptr::write_bytes(self.slice.as_mut_ptr(), byte, self.len());
        }
    }

    /// Sorts the Span using `compare`. The sort is stable.
    pub fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.slice.sort_by(compare);
    }

    /// Reverses the order of the elements in the Span.
    pub fn reverse(&mut self) {
        let len = self.len();
        for i in 0..len / 2 {
            self.slice.swap(i, len - 1 - i);
        }
    }

    /// Reverses the bytes covered by the Span, rather than the elements.
    ///
    /// # Safety
    /// The caller must ensure that every element is still a valid `T` once its bytes (and
    /// position) have been reversed. This is only true in general for plain integer types.
    pub unsafe fn reverse_bytes(&mut self) {
        let bytes = self.size_bytes();
        // SAFETY: The Span covers exactly `bytes` initialized bytes, which are reinterpreted as u8
        // for the lifetime of this borrow only.
        let raw = unsafe {
            slice::from_raw_parts_mut(self.slice.as_mut_ptr().cast::<u8>(), bytes)
        };
        raw.reverse();
    }

    /// Rotates the Span left by `count` positions, so that the element at `count` becomes the
    /// first. A negative `count` rotates to the right. Counts larger than the Span wrap around.
    ///
    /// # Examples
    /// ```
    /// # use container_lib::view::Span;
    /// let mut values = [1, 2, 3, 4, 5];
    /// Span::new(&mut values).rotate(2);
    /// assert_eq!(values, [3, 4, 5, 1, 2]);
    /// Span::new(&mut values).rotate(-2);
    /// assert_eq!(values, [1, 2, 3, 4, 5]);
    /// ```
    pub fn rotate(&mut self, count: isize) {
        let len = self.len();
        if len == 0 {
            return;
        }

        let shift = count.rem_euclid(len as isize) as usize;
        if shift == 0 {
            return;
        }

        // Reverse the whole, then each of the halves.
        self.reverse();
        let (mut left, mut right) = self.split_at_mut((len - shift) as isize);
        left.reverse();
        right.reverse();
    }

    /// Shuffles the Span in place with a Fisher-Yates shuffle driven by `rng`.
    #[cfg(feature = "shuffle")]
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for i in (1..self.len()).rev() {
            let j = rng.gen_range(0..=i);
            self.slice.swap(i, j);
        }
    }

    /// Shuffles the Span using the thread local random number generator.
    #[cfg(feature = "shuffle")]
    pub fn shuffle_thread(&mut self) {
        self.shuffle(&mut rand::thread_rng());
    }

    /// Swaps the elements at indices `a` and `b`. Negative indices count back from the end.
    ///
    /// # Panics
    /// Panics if either index is out of bounds.
    pub fn swap(&mut self, a: isize, b: isize) {
        let a = self.check_index(a);
        let b = self.check_index(b);
        self.slice.swap(a, b);
    }

    /// Swaps the element at `index` with the last element of the Span.
    ///
    /// # Panics
    /// Panics if the index is out of bounds.
    pub fn swap_with_last(&mut self, index: isize) {
        self.swap(index, -1);
    }

    /// Moves every element matching `predicate` to the front of the Span, preserving their
    /// relative order, and returns the section containing them. The order of the remaining
    /// elements is unspecified.
    ///
    /// # Examples
    /// ```
    /// # use container_lib::view::Span;
    /// let mut values = [1, 2, 3, 4, 5, 6];
    /// let mut span = Span::new(&mut values);
    /// let evens = span.filter(|v| v % 2 == 0);
    /// assert_eq!(*evens, [2, 4, 6]);
    /// ```
    pub fn filter<P>(&mut self, mut predicate: P) -> Span<'_, T>
    where
        P: FnMut(&T) -> bool,
    {
        let mut live = 0;
        for i in 0..self.len() {
            if predicate(&self.slice[i]) {
                self.slice.swap(live, i);
                live += 1;
            }
        }

        Span::new(&mut self.slice[..live])
    }

    /// Checks that `index` is within the Span, returning it in normalized form.
    ///
    /// # Panics
    /// Panics if the index is out of bounds.
    pub(crate) fn check_index(&self, index: isize) -> usize {
        match normalize_index(index, self.len()) {
            Some(i) => i,
            None => Err(IndexOutOfBounds {
                index,
                len: self.len(),
            }).throw(),
        }
    }
}

impl<T: Clone> Span<'_, T> {
    /// Sets every element of the Span to a clone of `value`.
    pub fn fill(&mut self, value: T) {
        self.slice.fill(value);
    }
}

impl<T: Ord> Span<'_, T> {
    /// Sorts the Span in ascending order. The sort is stable.
    pub fn sort(&mut self) {
        self.sort_by(T::cmp);
    }
}

impl<T> Deref for Span<'_, T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        self.slice
    }
}

impl<T> DerefMut for Span<'_, T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.slice
    }
}

impl<'a, T> From<&'a mut [T]> for Span<'a, T> {
    fn from(value: &'a mut [T]) -> Self {
        Span::new(value)
    }
}

impl<'a, T, const N: usize> From<&'a mut [T; N]> for Span<'a, T> {
    fn from(value: &'a mut [T; N]) -> Self {
        Span::new(value)
    }
}

impl<T: Debug> Debug for Span<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.slice.iter()).finish()
    }
}
