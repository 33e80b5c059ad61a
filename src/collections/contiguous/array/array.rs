use std::alloc::{self, Layout};
use std::borrow::{Borrow, BorrowMut};
use std::fmt::{self, Debug, Formatter};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::mem::{self, MaybeUninit};
use std::ops::{Deref, DerefMut};
use std::ptr::{self, NonNull};
use std::slice;

use crate::collections::contiguous::Vector;
use crate::util::error::CapacityOverflow;
use crate::util::result::ResultExtension;
use crate::view::{Span, View};

/// A heap allocated array with a size chosen at runtime. Similar to a [`Box<[T]>`](Box<T>), but
/// able to change size in place via [`Array::realloc`] and [`Array::realloc_with`].
///
/// Arrays are the backing storage for every other container in this crate.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the Array.
///
/// | Method | Complexity |
/// |-|-|
/// | `get` | `O(1)` |
/// | `size` | `O(1)` |
/// | `realloc` | `O(n)`*, `O(1)` |
/// | `realloc_with` | `O(n)` |
///
/// \* The global allocator may be able to resize in place.
pub struct Array<T> {
    pub(crate) ptr: NonNull<T>,
    pub(crate) size: usize,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T> Array<T> {
    /// Returns the size of the Array.
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Creates a new Array with size 0, without allocating.
    pub fn new() -> Array<T> {
        // SAFETY: There are no values, so they are all initialized.
        unsafe { Self::new_uninit(0).assume_init() }
    }

    /// Creates a new Array of [`MaybeUninit<T>`] with the provided `size`. All values are
    /// uninitialized.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    pub fn new_uninit(size: usize) -> Array<MaybeUninit<T>> {
        let layout = Array::<MaybeUninit<T>>::make_layout(size);

        Array {
            ptr: Array::<MaybeUninit<T>>::make_ptr(layout),
            size,
            _phantom: PhantomData,
        }
    }

    /// Creates a new Array of `count` values, each produced by calling `f`.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    pub fn repeat_with<F: FnMut() -> T>(mut f: F, count: usize) -> Array<T> {
        let arr = Self::new_uninit(count);

        for i in 0..count {
            // SAFETY: i is within the allocated range of the Array.
            unsafe { arr.ptr.add(i).write(MaybeUninit::new(f())); }
        }

        // SAFETY: All values have been initialized by f.
        unsafe { arr.assume_init() }
    }

    /// Creates an Array from an iterator. The Array is exactly as large as the number of items
    /// produced.
    pub fn from_iter_sized<I: IntoIterator<Item = T>>(iter: I) -> Array<T> {
        Array::from(iter.into_iter().collect::<Vector<T>>())
    }

    /// Decomposes an `Array<T>` into its raw components: a pointer to the data and the number of
    /// elements. The caller becomes responsible for the allocation, which can be reclaimed with
    /// [`Array::from_parts`].
    pub const fn into_parts(self) -> (NonNull<T>, usize) {
        let ret = (self.ptr, self.size);
        mem::forget(self);
        ret
    }

    /// Creates an `Array<T>` from its raw components.
    ///
    /// # Safety
    /// - `ptr` needs to be currently allocated within the global allocator with the layout of
    ///   `[T; size]` (or dangling if that layout has size 0).
    /// - `ptr` needs to refer to `size` properly initialized values of `T`.
    pub const unsafe fn from_parts(ptr: NonNull<T>, size: usize) -> Array<T> {
        Array {
            ptr,
            size,
            _phantom: PhantomData,
        }
    }

    /// Interprets self as an `Array<MaybeUninit<T>>`, which can be reallocated.
    pub fn forget_init(self) -> Array<MaybeUninit<T>> {
        let (ptr, size) = self.into_parts();
        // SAFETY: MaybeUninit<T> has the same layout as T and initialized values are valid
        // MaybeUninit values.
        unsafe { Array::from_parts(ptr.cast(), size) }
    }

    /// Reallocates self to `new_size`. When growing, new elements are produced by calling `f`;
    /// when shrinking, the trailing elements are dropped.
    ///
    /// # Panics
    /// Panics if the memory layout of the new allocation would have a size that exceeds
    /// [`isize::MAX`].
    pub fn realloc_with<F: FnMut() -> T>(&mut self, mut f: F, new_size: usize) {
        let (ptr, old_size) = mem::take(self).into_parts();

        for i in new_size..old_size {
            // SAFETY: i is in bounds and initialized. The values beyond new_size are released by
            // the reallocation below without being read.
            unsafe { ptr::drop_in_place(ptr.add(i).as_ptr()); }
        }

        // SAFETY: ptr was allocated for old_size values of T. Treating them as MaybeUninit means
        // that the dropped values won't be dropped again.
        let mut wip: Array<MaybeUninit<T>> = unsafe { Array::from_parts(ptr.cast(), old_size) };
        wip.realloc(new_size);

        for i in old_size..new_size {
            // SAFETY: i is within the newly allocated range of the Array.
            unsafe { wip.ptr.add(i).write(MaybeUninit::new(f())); }
        }

        // SAFETY: Values below old_size were already initialized, the rest were produced by f.
        *self = unsafe { wip.assume_init() };
    }

    /// Borrows the Array as a [`View`].
    pub fn view(&self) -> View<'_, T> {
        View::new(self)
    }

    /// Borrows the Array as a [`Span`].
    pub fn span(&mut self) -> Span<'_, T> {
        Span::new(self)
    }
}

impl<T> Array<T> {
    /// Creates a [`Layout`] for `size` elements of type `T`.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    pub(crate) fn make_layout(size: usize) -> Layout {
        Layout::array::<T>(size).map_err(|_| CapacityOverflow).throw()
    }

    /// Allocates memory for the provided [`Layout`], returning a dangling pointer for zero-sized
    /// layouts.
    ///
    /// # Errors
    /// Calls [`alloc::handle_alloc_error`] on allocation failure.
    pub(crate) fn make_ptr(layout: Layout) -> NonNull<T> {
        if layout.size() == 0 {
            NonNull::dangling()
        } else {
            NonNull::new(
                // SAFETY: Zero-sized layouts have been guarded against.
                unsafe { alloc::alloc(layout).cast() }
            ).unwrap_or_else(|| alloc::handle_alloc_error(layout))
        }
    }
}

impl<T: Default> Array<T> {
    /// Creates a new `Array<T>` by repeating the default value of `T` `count` times.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    pub fn repeat_default(count: usize) -> Array<T> {
        Array::repeat_with(T::default, count)
    }

    /// Reallocates self with `new_size`, filling any extra elements with the default value of `T`.
    pub fn realloc_with_default(&mut self, new_size: usize) {
        self.realloc_with(T::default, new_size);
    }
}

impl<T> Array<MaybeUninit<T>> {
    /// Assume that all values of an `Array<MaybeUninit<T>>` are initialized.
    ///
    /// # Safety
    /// It is up to the caller to guarantee that every value in the Array is initialized.
    pub unsafe fn assume_init(self) -> Array<T> {
        let (ptr, size) = self.into_parts();
        // SAFETY: The caller guarantees that all values are initialized, and the layouts match.
        unsafe { Array::from_parts(ptr.cast(), size) }
    }

    /// Reallocates the Array to have size equal to `new_size`. New locations are uninitialized and
    /// removed locations are not dropped.
    ///
    /// # Panics
    /// Panics if the memory layout of the new allocation would have a size that exceeds
    /// [`isize::MAX`].
    pub fn realloc(&mut self, new_size: usize) {
        if size_of::<T>() == 0 {
            // Zero-sized types are never allocated, the dangling pointer stays valid.
            self.size = new_size;
            return;
        }

        let new_ptr = match (self.size, new_size) {
            (old, new) if old == new => return,
            (0, _) => Self::make_ptr(Self::make_layout(new_size)),
            (_, 0) => {
                // SAFETY: ptr is allocated with this exact layout, which has a non-zero size.
                unsafe { alloc::dealloc(self.ptr.as_ptr().cast(), Self::make_layout(self.size)); }
                NonNull::dangling()
            },
            (_, _) => {
                let old_layout = Self::make_layout(self.size);
                let new_layout = Self::make_layout(new_size);

                // SAFETY: The same layout and allocator are used for the allocation, and the new
                // layout size is > 0 and <= isize::MAX.
                let raw_ptr: *mut MaybeUninit<T> = unsafe {
                    alloc::realloc(self.ptr.as_ptr().cast(), old_layout, new_layout.size()).cast()
                };

                NonNull::new(raw_ptr).unwrap_or_else(|| alloc::handle_alloc_error(new_layout))
            },
        };

        self.ptr = new_ptr;
        self.size = new_size;
    }
}

impl<T> Default for Array<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Array<T> {
    fn drop(&mut self) {
        // SAFETY: All values are initialized and are never accessed again.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.ptr.as_ptr(), self.size));
        }

        let layout = Array::<T>::make_layout(self.size);
        if layout.size() != 0 {
            // SAFETY: ptr is allocated in the global allocator with this layout. Zero-sized
            // layouts are never allocated.
            unsafe { alloc::dealloc(self.ptr.as_ptr().cast(), layout) }
        }
    }
}

impl<T> Deref for Array<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        // SAFETY: The held data uses Layout::array(size), is properly aligned and initialized. The
        // borrow checker prevents mutation for the lifetime of the slice.
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.size) }
    }
}

impl<T> DerefMut for Array<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: As with deref, with exclusive access guaranteed by &mut self.
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), self.size) }
    }
}

impl<T> AsRef<[T]> for Array<T> {
    fn as_ref(&self) -> &[T] {
        self
    }
}

impl<T> AsMut<[T]> for Array<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self
    }
}

impl<T> Borrow<[T]> for Array<T> {
    fn borrow(&self) -> &[T] {
        self
    }
}

impl<T> BorrowMut<[T]> for Array<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self
    }
}

// SAFETY: Arrays uniquely own their allocation, so they are Send when T is.
unsafe impl<T: Send> Send for Array<T> {}
// SAFETY: Array's safe API has no interior mutability, so it is Sync when T is.
unsafe impl<T: Sync> Sync for Array<T> {}

impl<T: Clone> Clone for Array<T> {
    fn clone(&self) -> Self {
        Array::from_iter_sized(self.iter().cloned())
    }
}

impl<T: PartialEq> PartialEq for Array<T> {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl<T: Eq> Eq for Array<T> {}

impl<T: Hash> Hash for Array<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (**self).hash(state);
    }
}

impl<T: Debug> Debug for Array<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
