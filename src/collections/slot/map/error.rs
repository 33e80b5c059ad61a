use std::error::Error;
use std::fmt::{self, Display, Formatter};

use super::Key;

#[derive(Debug)]
pub struct InvalidKey {
    pub key: Key,
}

impl Display for InvalidKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Key {} doesn't refer to a value in this SlotMap!", self.key)
    }
}

impl Error for InvalidKey {}
