//! Hash-based collections. [`HashMap`] stores its first entry per bucket inline and stacks
//! collisions in a shared overflow [`Vector`](crate::collections::contiguous::Vector).

pub mod map;

#[doc(inline)]
pub use map::HashMap;
