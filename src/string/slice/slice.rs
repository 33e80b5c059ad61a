use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::str::{self, Utf8Error};

use super::{Split, Tokens};
use crate::collections::contiguous::Vector;
use crate::view::View;

/// A borrowed, immutable byte string. Slices are [`View`]s of bytes with string algorithms on
/// top: searching, trimming, splitting and partitioning.
///
/// All operations are byte oriented. No UTF-8 validation happens unless a Slice is converted with
/// [`Slice::to_str`], and trimming only considers ASCII whitespace.
#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub struct Slice<'a> {
    pub(crate) view: View<'a, u8>,
}

impl<'a> Slice<'a> {
    pub const fn new(bytes: &'a [u8]) -> Slice<'a> {
        Slice {
            view: View::new(bytes),
        }
    }

    pub const fn as_bytes(&self) -> &'a [u8] {
        self.view.as_slice()
    }

    pub const fn len(&self) -> usize {
        self.view.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.view.is_empty()
    }

    /// Returns the byte at `index`, which may be negative to count from the end.
    pub fn get(&self, index: isize) -> Option<u8> {
        self.view.get(index).copied()
    }

    /// Returns the underlying [`View`] of bytes.
    pub const fn view(&self) -> View<'a, u8> {
        self.view
    }

    /// Interprets the Slice as UTF-8.
    ///
    /// # Errors
    /// Returns a [`Utf8Error`] if the bytes aren't valid UTF-8.
    pub fn to_str(&self) -> Result<&'a str, Utf8Error> {
        str::from_utf8(self.as_bytes())
    }

    pub fn starts_with<P: AsRef<[u8]>>(&self, prefix: P) -> bool {
        self.view.starts_with(prefix.as_ref())
    }

    pub fn ends_with<P: AsRef<[u8]>>(&self, suffix: P) -> bool {
        self.view.ends_with(suffix.as_ref())
    }

    /// Returns the index of the first occurrence of `needle`. An empty needle is found at 0.
    ///
    /// # Examples
    /// ```
    /// # use container_lib::string::Slice;
    /// let slice = Slice::from("abcabc");
    /// assert_eq!(slice.find("bc"), Some(1));
    /// assert_eq!(slice.rfind("bc"), Some(4));
    /// assert_eq!(slice.find("d"), None);
    /// ```
    pub fn find<P: AsRef<[u8]>>(&self, needle: P) -> Option<usize> {
        let needle = needle.as_ref();
        if needle.is_empty() {
            return Some(0);
        }

        self.as_bytes().windows(needle.len()).position(|w| w == needle)
    }

    /// Returns the index of the last occurrence of `needle`. An empty needle is found at the end.
    pub fn rfind<P: AsRef<[u8]>>(&self, needle: P) -> Option<usize> {
        let needle = needle.as_ref();
        if needle.is_empty() {
            return Some(self.len());
        }

        self.as_bytes().windows(needle.len()).rposition(|w| w == needle)
    }

    pub fn find_byte(&self, byte: u8) -> Option<usize> {
        self.view.position(&byte)
    }

    pub fn contains<P: AsRef<[u8]>>(&self, needle: P) -> bool {
        self.find(needle).is_some()
    }

    /// Returns the Slice between `start` (inclusive) and `end` (exclusive). Both bounds may be
    /// negative to count from the end and are clamped, so this never panics.
    ///
    /// # Examples
    /// ```
    /// # use container_lib::string::Slice;
    /// let slice = Slice::from("hello world");
    /// assert_eq!(slice.substr(0, 5), "hello");
    /// assert_eq!(slice.substr(-5, 11), "world");
    /// assert_eq!(slice.substr(6, -2), "wor");
    /// assert_eq!(slice.substr(8, 3), "");
    /// ```
    pub fn substr(&self, start: isize, end: isize) -> Slice<'a> {
        Slice {
            view: self.view.subview(start, end),
        }
    }

    /// Returns the Slice without leading and trailing ASCII whitespace.
    pub fn trim(&self) -> Slice<'a> {
        self.trim_start().trim_end()
    }

    pub fn trim_start(&self) -> Slice<'a> {
        let bytes = self.as_bytes();
        let start = bytes.iter()
            .position(|b| !b.is_ascii_whitespace())
            .unwrap_or(bytes.len());

        Slice::new(&bytes[start..])
    }

    pub fn trim_end(&self) -> Slice<'a> {
        let bytes = self.as_bytes();
        let end = bytes.iter()
            .rposition(|b| !b.is_ascii_whitespace())
            .map_or(0, |i| i + 1);

        Slice::new(&bytes[..end])
    }

    /// Returns an iterator over the pieces of the Slice between each occurrence of `delim`.
    /// See [`Slice::split`].
    pub fn splits<'d>(&self, delim: &'d [u8]) -> Split<'a, 'd> {
        Split::new(*self, delim)
    }

    /// Splits the Slice on every occurrence of `delim`.
    ///
    /// `n` delimiters always produce `n + 1` pieces, so empty pieces are kept: splitting a Slice
    /// equal to `delim` produces two empty Slices. An empty `delim` splits the Slice into single
    /// bytes instead, producing nothing for an empty Slice.
    ///
    /// # Examples
    /// ```
    /// # use container_lib::string::Slice;
    /// let parts = Slice::from("a,b,,c").split(",");
    /// assert_eq!(parts.len(), 4);
    /// assert_eq!(parts[2], "");
    ///
    /// assert_eq!(Slice::from("abc").split("").len(), 3);
    /// assert_eq!(Slice::from("--").split("--").len(), 2);
    /// ```
    pub fn split<P: AsRef<[u8]>>(&self, delim: P) -> Vector<Slice<'a>> {
        self.splits(delim.as_ref()).collect()
    }

    /// Returns an iterator over the tokens of the Slice, as separated by any bytes in `delims`.
    /// See [`Slice::tokenize`].
    pub fn tokens<'d>(&self, delims: &'d [u8]) -> Tokens<'a, 'd> {
        Tokens::new(*self, delims)
    }

    /// Splits the Slice into tokens separated by runs of any of the bytes in `delims`. Unlike
    /// [`Slice::split`], empty tokens are never produced.
    ///
    /// # Examples
    /// ```
    /// # use container_lib::string::Slice;
    /// let tokens = Slice::from("  let x =\t5; ").tokenize(" \t;");
    /// assert_eq!(tokens.len(), 4);
    /// assert_eq!(tokens[3], "5");
    /// ```
    pub fn tokenize<P: AsRef<[u8]>>(&self, delims: P) -> Vector<Slice<'a>> {
        self.tokens(delims.as_ref()).collect()
    }

    /// Splits the Slice around the first occurrence of `delim`, which is excluded from both
    /// halves. Returns None if `delim` doesn't occur.
    ///
    /// # Examples
    /// ```
    /// # use container_lib::string::Slice;
    /// let (key, value) = Slice::from("key=value=more").partition("=").unwrap();
    /// assert_eq!(key, "key");
    /// assert_eq!(value, "value=more");
    ///
    /// let (key, value) = Slice::from("key=value=more").rpartition("=").unwrap();
    /// assert_eq!(key, "key=value");
    /// assert_eq!(value, "more");
    /// ```
    pub fn partition<P: AsRef<[u8]>>(&self, delim: P) -> Option<(Slice<'a>, Slice<'a>)> {
        let delim = delim.as_ref();
        let index = self.find(delim)?;
        Some(self.split_around(index, delim.len()))
    }

    /// Splits the Slice around the last occurrence of `delim`. Returns None if `delim` doesn't
    /// occur.
    pub fn rpartition<P: AsRef<[u8]>>(&self, delim: P) -> Option<(Slice<'a>, Slice<'a>)> {
        let delim = delim.as_ref();
        let index = self.rfind(delim)?;
        Some(self.split_around(index, delim.len()))
    }

    pub(crate) fn split_around(&self, index: usize, gap: usize) -> (Slice<'a>, Slice<'a>) {
        let bytes = self.as_bytes();
        (Slice::new(&bytes[..index]), Slice::new(&bytes[index + gap..]))
    }
}

impl<'a> From<&'a str> for Slice<'a> {
    fn from(value: &'a str) -> Self {
        Slice::new(value.as_bytes())
    }
}

impl<'a> From<&'a [u8]> for Slice<'a> {
    fn from(value: &'a [u8]) -> Self {
        Slice::new(value)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for Slice<'a> {
    fn from(value: &'a [u8; N]) -> Self {
        Slice::new(value)
    }
}

impl<'a> From<View<'a, u8>> for Slice<'a> {
    fn from(view: View<'a, u8>) -> Self {
        Slice { view }
    }
}

impl<'a> From<&'a Vector<u8>> for Slice<'a> {
    fn from(value: &'a Vector<u8>) -> Self {
        Slice::new(value)
    }
}

impl AsRef<[u8]> for Slice<'_> {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl PartialEq<str> for Slice<'_> {
    fn eq(&self, other: &str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl PartialEq<&str> for Slice<'_> {
    fn eq(&self, other: &&str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Hash for Slice<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_bytes().hash(state);
    }
}

impl Display for Slice<'_> {
    /// Writes the Slice as UTF-8, replacing invalid sequences with U+FFFD.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&String::from_utf8_lossy(self.as_bytes()), f)
    }
}

impl Debug for Slice<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"", self.as_bytes().escape_ascii())
    }
}
