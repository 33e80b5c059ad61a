use std::hint;

pub(crate) trait OptionExtension<T> {
    unsafe fn unreachable(self) -> T;
}

impl<T> OptionExtension<T> for Option<T> {
    /// Unwraps a value that the caller has already proven to be [`Some`]. Debug builds still
    /// check with [`unreachable!`], release builds use
    /// [`unreachable_unchecked`](hint::unreachable_unchecked).
    unsafe fn unreachable(self) -> T {
        match self {
            Some(val) => val,
            None if cfg!(debug_assertions) => unreachable!(),
            // SAFETY: It is the responsibility of the caller to ensure that None is impossible.
            None => unsafe { hint::unreachable_unchecked() },
        }
    }
}
