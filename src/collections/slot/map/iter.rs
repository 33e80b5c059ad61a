use std::iter::{Enumerate, FusedIterator};
use std::slice;

use super::{Key, Slot, SlotMap};
use crate::collections::contiguous::array::IntoIter as ArrIntoIter;

impl<T> IntoIterator for SlotMap<T> {
    type Item = (Key, T);

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            len: self.len,
            inner: self.slots.into_iter().enumerate(),
        }
    }
}

pub struct IntoIter<T> {
    pub(crate) inner: Enumerate<ArrIntoIter<Slot<T>>>,
    pub(crate) len: usize,
}

impl<T> Iterator for IntoIter<T> {
    type Item = (Key, T);

    fn next(&mut self) -> Option<Self::Item> {
        for (index, slot) in self.inner.by_ref() {
            if let Slot::Occupied { generation, value } = slot {
                self.len -= 1;
                return Some((Key { index: index as u32, generation }, value));
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<'a, T> IntoIterator for &'a mut SlotMap<T> {
    type Item = (Key, &'a mut T);

    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        IterMut {
            len: self.len,
            inner: self.slots.iter_mut().enumerate(),
        }
    }
}

pub struct IterMut<'a, T> {
    pub(crate) inner: Enumerate<slice::IterMut<'a, Slot<T>>>,
    pub(crate) len: usize,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = (Key, &'a mut T);

    fn next(&mut self) -> Option<Self::Item> {
        for (index, slot) in self.inner.by_ref() {
            if let Slot::Occupied { generation, value } = slot {
                self.len -= 1;
                return Some((Key { index: index as u32, generation: *generation }, value));
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

impl<T> FusedIterator for IterMut<'_, T> {}

impl<'a, T> IntoIterator for &'a SlotMap<T> {
    type Item = (Key, &'a T);

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            len: self.len,
            inner: self.slots.iter().enumerate(),
        }
    }
}

pub struct Iter<'a, T> {
    pub(crate) inner: Enumerate<slice::Iter<'a, Slot<T>>>,
    pub(crate) len: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = (Key, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        for (index, slot) in self.inner.by_ref() {
            if let Slot::Occupied { generation, value } = slot {
                self.len -= 1;
                return Some((Key { index: index as u32, generation: *generation }, value));
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

pub struct Keys<'a, T>(
    pub(crate) Iter<'a, T>
);

impl<T> Iterator for Keys<'_, T> {
    type Item = Key;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|e| e.0)
    }
}

pub struct Values<'a, T>(
    pub(crate) Iter<'a, T>
);

impl<'a, T> Iterator for Values<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|e| e.1)
    }
}

pub struct ValuesMut<'a, T>(
    pub(crate) IterMut<'a, T>
);

impl<'a, T> Iterator for ValuesMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|e| e.1)
    }
}
