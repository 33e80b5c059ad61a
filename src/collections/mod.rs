//! Owning collection types.
//!
//! # Purpose
//! Every collection here is built on top of [`Array`](contiguous::Array), a runtime sized heap
//! allocation, rather than on [`Vec`] or any other std collection.
//!
//! # Method
//! Applicable types here implement [`Deref<Target = [T]>`](std::ops::Deref) (and DerefMut), which
//! saves writing some of the more repetitive functionality. Borrowed access to contiguous storage
//! is also available through [`View`](crate::view::View) and [`Span`](crate::view::Span), which
//! add negative indexing and clamped sub-ranges.

#[cfg(feature = "contiguous")]
pub mod contiguous;
#[cfg(feature = "hash")]
pub mod hash;
#[cfg(feature = "slot")]
pub mod slot;
