//! A small library of containers and the borrowed types used to work with them.
//!
//! # Contents
//! - [`Array`](collections::contiguous::Array) and [`Vector`](collections::contiguous::Vector):
//!   fixed and growable contiguous storage.
//! - [`HashMap`](collections::hash::HashMap): a hash map which stacks colliding entries behind
//!   the first entry of their bucket, without tombstones.
//! - [`SlotMap`](collections::slot::SlotMap): stable, generation-checked [`Key`]s for stored
//!   values.
//! - [`View`](view::View) and [`Span`](view::Span): borrowed windows over contiguous memory, with
//!   negative indexing and sub-ranges that clamp instead of panicking.
//! - [`Slice`](string::slice::Slice) and [`format`](string::format::format): byte string handling
//!   and a positional `{}` formatter.
//!
//! [`Key`]: collections::slot::Key
//!
//! # Error Handling
//! Absence is an expected outcome and is reported with [`Option`]s or `bool`s: a missing key, a
//! stale slot key or an empty container. Breaking a method's contract is not, so out of bounds
//! indices and capacity overflows panic instead of forcing callers to handle an error on every
//! push. Imagine having to handle the possibility of a capacity overflow every time you push into a
//! Vector.
//!
//! When this crate employs errors via [`Result`]s, it does so in a method that is strongly typed,
//! using enums for static dispatch rather than dynamic, with structs (often ZSTs) that implement
//! [`Error`](std::error::Error). Panics carry the [`Display`](std::fmt::Display) message of the
//! same error types.
//!
//! # Dependencies
//! This crate doesn't use [`Vec`] at all, every container is built on
//! [`Array`](collections::contiguous::Array). It depends on some derive macros because they remove
//! the need for some very repetitive programming, on `log` for tracing reallocations and on `rand`
//! for shuffling spans (behind the `shuffle` feature).
//!
//! No logger is installed, so the trace output only appears if the application sets one up.

// #![warn(missing_docs)]
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod collections;
#[cfg(feature = "string")]
pub mod string;
pub mod view;

pub(crate) mod util;
