//! A positional `{}` formatter for building strings at runtime from a template and a list of
//! [`Arg`]s.
//!
//! # Syntax
//! Each replacement field has the form `{[index][:[[fill]align][+][#][0][width][.precision][type]]}`.
//!
//! - `index`: the position of the argument to use. Fields without one take the next argument.
//! - `fill` and `align`: `<` (left), `>` (right) or `^` (center), padded with `fill` (a space by
//!   default). Text is left aligned and numbers right aligned unless specified.
//! - `+`: always write a sign for numbers.
//! - `#`: prefix hexadecimal, binary and octal numbers with `0x`, `0b` or `0o`.
//! - `0`: pad numbers with zeros after their sign and prefix.
//! - `width`: the minimum number of characters to write.
//! - `precision`: the number of fractional digits for floats, or the maximum number of characters
//!   for text.
//! - `type`: `d` (decimal), `x`/`X` (hexadecimal), `b` (binary), `o` (octal), `e` (exponent),
//!   `f` (fixed point), `s` (text), `c` (character) or `?` (debug, quoting text).
//!
//! `{{` and `}}` write literal braces.
//!
//! # Errors
//! Formatting never fails. A malformed field, an index without an argument or a type that doesn't
//! suit its argument is written to the output exactly as it appears in the template.
//!
//! # Examples
//! ```
//! use container_lib::fmt;
//!
//! assert_eq!(fmt!("{} + {} = {}", 1, 2, 3), "1 + 2 = 3");
//! assert_eq!(fmt!("{1}{0}", "a", "b"), "ba");
//! assert_eq!(fmt!("[{:>6.2f}]", 3.14159), "[  3.14]");
//! assert_eq!(fmt!("{:#06x}", 255), "0x00ff");
//! assert_eq!(fmt!("{:*^9}", "mid"), "***mid***");
//! assert_eq!(fmt!("{2} {:q}", 1), "{2} {:q}");
//! ```

mod arg;
mod format;
mod spec;
mod tests;

pub use arg::*;
pub use format::*;

/// Formats a template with any number of arguments, converting each with [`Arg::from`]. See
/// [`format`](crate::string::format) for the syntax.
#[macro_export]
macro_rules! fmt {
    ($template:expr $(, $arg:expr)* $(,)?) => {
        $crate::string::format::format(
            $template,
            &[$($crate::string::format::Arg::from($arg)),*],
        )
    };
}
