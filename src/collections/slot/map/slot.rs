/// A single slot of a [`SlotMap`](super::SlotMap).
///
/// Free slots form an intrusive singly linked list through `next`, occupied slots remember the
/// generation that their value was inserted with.
#[derive(Debug, Clone)]
pub(crate) enum Slot<T> {
    Free {
        next: Option<u32>,
    },
    Occupied {
        generation: u64,
        value: T,
    },
}

impl<T> Slot<T> {
    pub(crate) const fn is_occupied(&self) -> bool {
        matches!(self, Slot::Occupied { .. })
    }

    /// Returns the value if this slot is occupied with exactly `generation`.
    pub(crate) fn get(&self, generation: u64) -> Option<&T> {
        match self {
            Slot::Occupied { generation: g, value } if *g == generation => Some(value),
            _ => None,
        }
    }

    pub(crate) fn get_mut(&mut self, generation: u64) -> Option<&mut T> {
        match self {
            Slot::Occupied { generation: g, value } if *g == generation => Some(value),
            _ => None,
        }
    }

    pub(crate) fn into_value(self) -> Option<T> {
        match self {
            Slot::Occupied { value, .. } => Some(value),
            Slot::Free { .. } => None,
        }
    }
}
