//! Byte oriented string handling: [`Slice`](slice::Slice), a borrowed byte string built on
//! [`View`](crate::view::View), and a positional `{}` formatter in [`format`].
//!
//! Nothing here is Unicode aware. Searching, splitting and trimming all work on bytes and ASCII
//! whitespace.

pub mod format;
pub mod slice;

#[doc(inline)]
pub use format::{Arg, format};
#[doc(inline)]
pub use slice::Slice;
