use std::error::Error;

pub(crate) trait ResultExtension<T, E: Error> {
    /// Unwraps the [`Result`], panicking with the [`Display`](std::fmt::Display) message of the
    /// error itself. Used where an `Err` represents a broken contract rather than something a
    /// caller is expected to handle.
    ///
    /// # Panics
    /// Panics if the [`Result`] is an [`Err`].
    fn throw(self) -> T;
}

impl<T, E: Error> ResultExtension<T, E> for Result<T, E> {
    #[track_caller]
    fn throw(self) -> T {
        match self {
            Ok(val) => val,
            Err(error) => panic!("{error}"),
        }
    }
}
