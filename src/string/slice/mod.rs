//! A module containing [`Slice`] and the iterators produced by splitting one.
//!
//! [`Slice`] is also re-exported under the parent module.

mod slice;
mod split;

pub use slice::*;
pub use split::*;
