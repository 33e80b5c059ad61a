//! A module containing [`Vector`] and associated types.
//!
//! Owned iteration uses [`IntoIter`], a re-export of [`array::IntoIter`](super::array::IntoIter).
//! [`IterMut`](std::slice::IterMut) and [`Iter`](std::slice::Iter) from [`std::slice`] are used for
//! borrowed iteration.
//!
//! [`Vector`] is also re-exported under the parent module.

mod iter;
mod vector;

pub use iter::*;
pub use vector::*;
