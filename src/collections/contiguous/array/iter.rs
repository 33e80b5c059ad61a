use std::iter::FusedIterator;
use std::marker::PhantomData;
use std::ptr::{self, NonNull};

use super::Array;

impl<T> IntoIterator for Array<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        let (ptr, size) = self.into_parts();
        IntoIter {
            buf: ptr,
            cap: size,
            start: 0,
            end: size,
            _phantom: PhantomData,
        }
    }
}

/// Owned iteration over an [`Array`] (or a [`Vector`](crate::collections::contiguous::Vector)).
/// The allocation is released when the iterator is dropped, along with any remaining values.
pub struct IntoIter<T> {
    pub(crate) buf: NonNull<T>,
    pub(crate) cap: usize,
    pub(crate) start: usize,
    pub(crate) end: usize,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        for i in self.start..self.end {
            // SAFETY: Values between start and end haven't been read out yet.
            unsafe { ptr::drop_in_place(self.buf.add(i).as_ptr()) }
        }

        // SAFETY: buf and cap are the original parts of the Array, whose values have all been
        // moved out or dropped. Treating them as uninit releases the memory only.
        drop(unsafe { Array::from_parts(self.buf.cast::<std::mem::MaybeUninit<T>>(), self.cap) });
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.start < self.end {
            // SAFETY: The value at start is initialized and is never read again once start is
            // incremented.
            let value = unsafe { self.buf.add(self.start).read() };
            self.start += 1;
            Some(value)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.end - self.start;
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.start < self.end {
            self.end -= 1;
            // SAFETY: The value at the decremented end is initialized and is now out of range.
            let value = unsafe { self.buf.add(self.end).read() };
            Some(value)
        } else {
            None
        }
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> ExactSizeIterator for IntoIter<T> {}
