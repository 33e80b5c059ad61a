use std::borrow::{Borrow, BorrowMut};
use std::cmp;
use std::fmt::{self, Debug, Formatter};
use std::hash::{Hash, Hasher};
use std::mem::{self, MaybeUninit};
use std::ops::{Deref, DerefMut};
use std::ptr::{self, NonNull};
use std::slice;

use crate::collections::contiguous::Array;
use crate::util::error::{CapacityOverflow, IndexOrCapOverflow, IndexOutOfBounds};
use crate::util::option::OptionExtension;
use crate::util::result::ResultExtension;
use crate::view::{Span, View};

const MIN_CAP: usize = 8;
const MAX_CAP: usize = isize::MAX as usize;

/// A variable size contiguous collection, based on [`Array<T>`].
///
/// Growth is geometric: when a push would exceed the capacity, the new capacity is one and a half
/// times the old one, and at least 8.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the Vector.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `get` | `O(1)` |
/// | `len` | `O(1)` |
/// | `push` | `O(1)`*, `O(n)` |
/// | `pop` | `O(1)` |
/// | `insert` | `O(n-i)` |
/// | `remove` | `O(n-i)` |
/// | `swap_remove` | `O(1)` |
/// | `reserve` | `O(n)`**, `O(1)` |
/// | `trim` | `O(n)` |
/// | `truncate` | `O(n)` |
///
/// \* If the Vector doesn't have enough capacity for the new element, `push` will take `O(n)`.
///
/// \** If the Vector has enough capacity for the additional items already, `reserve` is `O(1)`.
pub struct Vector<T> {
    pub(crate) arr: Array<MaybeUninit<T>>,
    pub(crate) len: usize,
}

impl<T> Vector<T> {
    /// Creates a new Vector with length and capacity 0. Memory will be allocated when the capacity
    /// changes.
    ///
    /// # Examples
    /// ```
    /// # use container_lib::collections::contiguous::Vector;
    /// let vec: Vector<u8> = Vector::new();
    /// assert_eq!(vec.len(), 0);
    /// assert_eq!(vec.cap(), 0);
    /// ```
    pub fn new() -> Vector<T> {
        Vector {
            arr: Array::new(),
            len: 0,
        }
    }

    /// Creates a new Vector with capacity exactly equal to the provided value.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    pub fn with_cap(cap: usize) -> Vector<T> {
        Vector {
            arr: Array::new_uninit(cap),
            len: 0,
        }
    }

    /// Returns the number of items in the Vector.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the Vector contains no items.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the current capacity of the Vector. The capacity is exactly the value provided to
    /// any of the capacity manipulation methods.
    pub const fn cap(&self) -> usize {
        self.arr.size()
    }

    /// Pushes the provided value onto the end of the Vector, increasing the capacity if required.
    ///
    /// # Panics
    /// Panics if the memory layout of the Vector would have a size that exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use container_lib::collections::contiguous::Vector;
    /// let mut vec = Vector::<u8>::new();
    /// for i in 0..=5 {
    ///     vec.push(i);
    /// }
    /// assert_eq!(&*vec, &[0, 1, 2, 3, 4, 5]);
    /// assert_eq!(vec.cap(), 8);
    /// ```
    pub fn push(&mut self, value: T) {
        if self.len == self.cap() {
            self.grow();
        }
        // SAFETY: The capacity has just been adjusted to support the addition of the new item.
        unsafe { self.push_unchecked(value) }
    }

    /// Pushes the provided value onto the end of the Vector, assuming that there is enough
    /// capacity to do so.
    ///
    /// # Safety
    /// The caller must ensure that `len < cap`, using methods like [`reserve`](Vector::reserve) or
    /// [`with_cap`](Vector::with_cap).
    pub unsafe fn push_unchecked(&mut self, value: T) {
        // SAFETY: The caller guarantees that the write is within the allocation.
        unsafe { self.arr.ptr.add(self.len).write(MaybeUninit::new(value)); }
        self.len += 1;
    }

    /// Pushes the default value of `T` and returns a mutable reference to it, so that it can be
    /// initialized in place.
    pub fn emplace(&mut self) -> &mut T
    where
        T: Default,
    {
        self.push(T::default());
        let last = self.len - 1;
        &mut self[last]
    }

    /// Pops the last value off the end of the Vector.
    ///
    /// # Examples
    /// ```
    /// # use container_lib::collections::contiguous::Vector;
    /// let mut vec: Vector<_> = (0..3).collect();
    /// assert_eq!(vec.pop(), Some(2));
    /// assert_eq!(vec.pop(), Some(1));
    /// assert_eq!(vec.pop(), Some(0));
    /// assert_eq!(vec.pop(), None);
    /// ```
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }

        self.len -= 1;
        // SAFETY: The value at the old last index is initialized and, now that len has been
        // decremented, is never read again.
        Some(unsafe { self.arr.ptr.add(self.len).read().assume_init() })
    }

    /// Inserts the provided value at the given index, shifting all following values back.
    /// Inserting at `len` is equivalent to a push.
    ///
    /// # Panics
    /// Panics if the provided index is greater than `len`.
    ///
    /// # Examples
    /// ```
    /// # use container_lib::collections::contiguous::Vector;
    /// let mut vec: Vector<_> = (0..3).collect();
    /// vec.insert(1, 100);
    /// vec.insert(4, 200);
    /// assert_eq!(&*vec, &[0, 100, 1, 2, 200]);
    /// ```
    pub fn insert(&mut self, index: usize, value: T) {
        self.try_insert(index, value).throw()
    }

    /// Inserts the provided value at the given index, returning an error instead of panicking when
    /// the index is out of bounds or the capacity would overflow.
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<(), IndexOrCapOverflow> {
        if index > self.len {
            return Err(IndexOutOfBounds {
                index: index as isize,
                len: self.len,
            }.into());
        }

        if self.len == self.cap() {
            self.try_reserve(1)?;
        }

        // SAFETY: index <= len < cap. The values from index onwards are shifted back by one, into
        // capacity that exists, before the gap is written.
        unsafe {
            let gap = self.arr.ptr.add(index).as_ptr();
            ptr::copy(gap, gap.add(1), self.len - index);
            gap.write(MaybeUninit::new(value));
        }

        self.len += 1;
        Ok(())
    }

    /// Removes the element at the provided index, moving all following values forward to fill in
    /// the gap. Preserves order.
    ///
    /// # Panics
    /// Panics if the provided index is out of bounds.
    pub fn remove(&mut self, index: usize) -> T {
        self.check_index(index);

        // SAFETY: index < len, so the value is initialized. The following values are moved over
        // it, and len is reduced so the old last slot is no longer considered initialized.
        unsafe {
            let gap = self.arr.ptr.add(index).as_ptr();
            let value = gap.read().assume_init();
            ptr::copy(gap.add(1), gap, self.len - index - 1);
            self.len -= 1;
            value
        }
    }

    /// Removes the element at the provided index, replacing it with the last element. Doesn't
    /// preserve order, but runs in constant time.
    ///
    /// # Panics
    /// Panics if the provided index is out of bounds.
    ///
    /// # Examples
    /// ```
    /// # use container_lib::collections::contiguous::Vector;
    /// let mut vec: Vector<_> = (0..5).collect();
    /// assert_eq!(vec.swap_remove(1), 1);
    /// assert_eq!(&*vec, &[0, 4, 2, 3]);
    /// ```
    pub fn swap_remove(&mut self, index: usize) -> T {
        self.check_index(index);

        let last = self.len - 1;
        self.swap(index, last);
        // UNREACHABLE: The Vector contains at least one element.
        unsafe { self.pop().unreachable() }
    }

    /// Replaces the element at the provided index with `new_value`, returning the old value.
    ///
    /// # Panics
    /// Panics if the provided index is out of bounds.
    pub fn replace(&mut self, index: usize, new_value: T) -> T {
        self.check_index(index);
        mem::replace(&mut self[index], new_value)
    }

    /// Ensures that the Vector has capacity to hold an additional `extra` elements.
    ///
    /// # Panics
    /// Panics if the memory layout of the Vector would have a size that exceeds [`isize::MAX`].
    pub fn reserve(&mut self, extra: usize) {
        self.try_reserve(extra).throw()
    }

    /// Ensures that the Vector has capacity to hold an additional `extra` elements, returning an
    /// error if the new capacity can't be represented.
    pub fn try_reserve(&mut self, extra: usize) -> Result<(), CapacityOverflow> {
        let required = self.len.checked_add(extra).ok_or(CapacityOverflow)?;
        if required <= self.cap() {
            return Ok(());
        }

        let new_cap = cmp::max(required, self.next_cap());
        if new_cap.checked_mul(size_of::<T>()).is_none_or(|bytes| bytes > MAX_CAP) {
            return Err(CapacityOverflow);
        }

        self.realloc_with_cap(new_cap);
        Ok(())
    }

    /// Shrinks the Vector so that its capacity is equal to its length.
    pub fn trim(&mut self) {
        self.realloc_with_cap(self.len);
    }

    /// Drops all elements from `len` onwards. Does nothing if `len` is at least the current length.
    /// The capacity is unchanged.
    pub fn truncate(&mut self, len: usize) {
        while self.len > len {
            self.len -= 1;
            // SAFETY: The value at the old last index is initialized and is now out of range.
            unsafe { self.arr.ptr.add(self.len).as_mut().assume_init_drop(); }
        }
    }

    /// Drops all elements, keeping the capacity.
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Moves all elements from `other` onto the end of self.
    pub fn append(&mut self, mut other: Vector<T>) {
        self.reserve(other.len);

        // SAFETY: self has capacity for other.len more values, and the two allocations are
        // distinct. other.len is zeroed afterwards, so the values are only owned by self.
        unsafe {
            ptr::copy_nonoverlapping(
                other.arr.ptr.as_ptr().cast_const(),
                self.arr.ptr.add(self.len).as_ptr(),
                other.len,
            );
        }

        self.len += other.len;
        other.len = 0;
    }

    /// Detaches the buffer from the Vector, returning the initialized values as an [`Array`]
    /// without copying them. Any spare capacity is released first.
    pub fn release(self) -> Array<T> {
        Array::from(self)
    }

    /// Decomposes the Vector into a pointer to its buffer, its length and its capacity.
    pub fn into_parts(self) -> (NonNull<MaybeUninit<T>>, usize, usize) {
        let ret = (self.arr.ptr, self.len, self.arr.size);
        mem::forget(self);
        ret
    }

    /// Recreates a Vector from the parts returned by [`Vector::into_parts`].
    ///
    /// # Safety
    /// The parts must have been produced by [`Vector::into_parts`] (with values of the same type)
    /// and not used to create another Vector since.
    pub unsafe fn from_parts(ptr: NonNull<MaybeUninit<T>>, len: usize, cap: usize) -> Vector<T> {
        Vector {
            // SAFETY: The caller guarantees that these are valid parts of an Array.
            arr: unsafe { Array::from_parts(ptr, cap) },
            len,
        }
    }

    /// Borrows the contents of the Vector as a [`View`].
    pub fn view(&self) -> View<'_, T> {
        View::new(self)
    }

    /// Borrows the contents of the Vector as a [`Span`].
    pub fn span(&mut self) -> Span<'_, T> {
        Span::new(self)
    }

    /// Reallocates the internal Array with the provided capacity. Values beyond the new capacity
    /// must have been dropped already.
    pub(crate) fn realloc_with_cap(&mut self, new_cap: usize) {
        log::trace!("reallocating Vector from cap {} to {}", self.cap(), new_cap);
        self.arr.realloc(new_cap);
    }

    /// The capacity that the Vector would grow to for a single additional element.
    pub(crate) fn next_cap(&self) -> usize {
        let cap = self.cap();
        cmp::max(cap.saturating_add(cap / 2), MIN_CAP)
    }

    /// Grows the internal Array to allow for the insertion of additional elements.
    ///
    /// # Panics
    /// Panics if the memory layout of the Vector would have a size that exceeds [`isize::MAX`].
    pub(crate) fn grow(&mut self) {
        self.reserve(1);
    }

    /// Checks that the provided index is within the bounds of self.
    ///
    /// # Panics
    /// Panics if the provided index is out of bounds.
    pub(crate) fn check_index(&self, index: usize) {
        if index >= self.len {
            Err(IndexOutOfBounds {
                index: index as isize,
                len: self.len,
            }).throw()
        }
    }
}

impl<T> Extend<T> for Vector<T> {
    fn extend<A: IntoIterator<Item = T>>(&mut self, iter: A) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);

        for item in iter {
            self.push(item);
        }
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(value: I) -> Self {
        let mut vec = Vector::new();
        vec.extend(value);
        vec
    }
}

impl<T: Clone> From<&[T]> for Vector<T> {
    fn from(value: &[T]) -> Self {
        value.iter().cloned().collect()
    }
}

impl<T> Default for Vector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Vector<T> {
    fn drop(&mut self) {
        // Drop all initialized values in place, the Array then releases the memory.
        self.clear();
    }
}

impl<T> Deref for Vector<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        // SAFETY: The first len values are initialized, properly aligned and within the allocation.
        // MaybeUninit<T> has the same layout as T.
        unsafe { slice::from_raw_parts(self.arr.ptr.as_ptr().cast(), self.len) }
    }
}

impl<T> DerefMut for Vector<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: As with deref, with exclusive access guaranteed by &mut self.
        unsafe { slice::from_raw_parts_mut(self.arr.ptr.as_ptr().cast(), self.len) }
    }
}

impl<T> AsRef<[T]> for Vector<T> {
    fn as_ref(&self) -> &[T] {
        self
    }
}

impl<T> AsMut<[T]> for Vector<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self
    }
}

impl<T> Borrow<[T]> for Vector<T> {
    fn borrow(&self) -> &[T] {
        self
    }
}

impl<T> BorrowMut<[T]> for Vector<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self
    }
}

// SAFETY: Vectors uniquely own their allocation, so they are Send when T is.
unsafe impl<T: Send> Send for Vector<T> {}
// SAFETY: Vector's safe API has no interior mutability, so it is Sync when T is.
unsafe impl<T: Sync> Sync for Vector<T> {}

impl<T: Clone> Clone for Vector<T> {
    fn clone(&self) -> Self {
        let mut vec = Self::with_cap(self.cap());
        vec.extend(self.iter().cloned());
        vec
    }
}

impl<T> From<Vector<T>> for Array<T> {
    fn from(mut value: Vector<T>) -> Self {
        value.trim();

        let (ptr, len, _) = value.into_parts();
        // SAFETY: After trimming, the Vector's Array holds exactly len initialized values.
        unsafe { Array::from_parts(ptr.cast(), len) }
    }
}

impl<T> From<Array<T>> for Vector<T> {
    fn from(value: Array<T>) -> Self {
        let len = value.size();
        Vector {
            arr: value.forget_init(),
            len,
        }
    }
}

impl<T: PartialEq> PartialEq for Vector<T> {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl<T: Eq> Eq for Vector<T> {}

impl<T: Hash> Hash for Vector<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (**self).hash(state);
    }
}

impl<T: Debug> Debug for Vector<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector")
            .field("contents", &self.view())
            .field("len", &self.len)
            .field("cap", &self.cap())
            .finish()
    }
}
