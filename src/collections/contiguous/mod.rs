//! Contiguous collection types. [`Array`] for a runtime sized allocation and [`Vector`] for a
//! growable one.
#![warn(missing_docs)]

pub mod array;
pub mod vector;

#[doc(inline)]
pub use array::Array;
#[doc(inline)]
pub use vector::Vector;
