//! Slot maps, which hand out stable [`Key`]s for stored values instead of taking keys from the
//! caller.

pub mod map;

#[doc(inline)]
pub use map::{Key, SlotMap};
