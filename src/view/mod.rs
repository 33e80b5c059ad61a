//! Non-owning windows over contiguous memory: [`View`] for reading and [`Span`] for in-place
//! mutation.
//!
//! Both types borrow their memory, so the borrow checker guarantees that the referent outlives
//! them. Collections in this crate expose their contents as Views (and Spans where mutation is
//! allowed), so searching, comparing, sorting and partitioning are implemented once, here.
//!
//! Indices and counts are signed. Negative values count back from the end, in the same manner as
//! Python or JavaScript slicing.

mod span;
mod tests;
mod view;

pub use span::*;
pub use view::*;

/// Converts a possibly negative `index` into an index within `0..len`, or [`None`] if it falls
/// outside of that range.
pub(crate) const fn normalize_index(index: isize, len: usize) -> Option<usize> {
    let index = if index < 0 {
        let back = index.unsigned_abs();
        if back > len {
            return None;
        }
        len - back
    } else {
        index as usize
    };

    if index < len { Some(index) } else { None }
}

/// Converts a possibly negative bound into a bound within `0..=len`, clamping rather than failing.
pub(crate) const fn clamp_bound(bound: isize, len: usize) -> usize {
    if bound < 0 {
        len.saturating_sub(bound.unsigned_abs())
    } else if bound as usize > len {
        len
    } else {
        bound as usize
    }
}
