use std::fmt::{self, Display, Formatter};

/// A handle to a value stored in a [`SlotMap`](super::SlotMap), made of the index of its slot and
/// the generation that the slot was occupied with.
///
/// A Key only resolves while the slot still holds the same generation, so keys to removed values
/// stay invalid even after their slot is reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Key {
    pub(crate) index: u32,
    pub(crate) generation: u64,
}

impl Key {
    /// A Key which never refers to a value. Generations start at 1, so no live slot can match it.
    ///
    /// Also used as the starting cursor for [`SlotMap::next`](super::SlotMap::next).
    pub const NULL: Key = Key {
        index: 0,
        generation: 0,
    };

    /// Returns true if this Key is [`Key::NULL`].
    pub const fn is_null(&self) -> bool {
        self.generation == 0
    }

    /// Returns the index of the slot that this Key refers to.
    pub const fn index(&self) -> u32 {
        self.index
    }

    /// Returns the generation of the value that this Key refers to.
    pub const fn generation(&self) -> u64 {
        self.generation
    }
}

impl Default for Key {
    fn default() -> Self {
        Key::NULL
    }
}

impl Display for Key {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}v{}", self.index, self.generation)
    }
}
