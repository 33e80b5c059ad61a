//! A module containing [`SlotMap`], its [`Key`] type and iterators.
//!
//! [`SlotMap`] and [`Key`] are also re-exported under the parent module.

mod error;
mod iter;
mod key;
mod slot;
mod slot_map;
mod tests;

pub use error::*;
pub use iter::*;
pub use key::*;
pub(crate) use slot::*;
pub use slot_map::*;
