use std::error::Error;
use std::fmt::{self, Display, Formatter};

#[derive(Debug)]
pub struct KeyNotFound;

impl Display for KeyNotFound {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Key not present in HashMap!")
    }
}

impl Error for KeyNotFound {}
