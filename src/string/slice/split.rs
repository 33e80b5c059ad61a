use std::iter::FusedIterator;

use super::Slice;

/// An iterator over the pieces of a [`Slice`] between each occurrence of a delimiter. Created by
/// [`Slice::splits`].
#[derive(Debug, Clone)]
pub struct Split<'a, 'd> {
    /// The unsplit remainder, or None once the last piece has been produced.
    pub(crate) rest: Option<Slice<'a>>,
    pub(crate) delim: &'d [u8],
}

impl<'a, 'd> Split<'a, 'd> {
    pub(crate) fn new(slice: Slice<'a>, delim: &'d [u8]) -> Split<'a, 'd> {
        Split {
            // An empty delimiter produces nothing for an empty Slice.
            rest: Some(slice).filter(|s| !delim.is_empty() || !s.is_empty()),
            delim,
        }
    }
}

impl<'a> Iterator for Split<'a, '_> {
    type Item = Slice<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = self.rest?;

        if self.delim.is_empty() {
            let (byte, remainder) = rest.split_around(1, 0);
            self.rest = Some(remainder).filter(|r| !r.is_empty());
            return Some(byte);
        }

        match rest.find(self.delim) {
            Some(index) => {
                let (piece, remainder) = rest.split_around(index, self.delim.len());
                self.rest = Some(remainder);
                Some(piece)
            },
            None => {
                self.rest = None;
                Some(rest)
            },
        }
    }
}

impl FusedIterator for Split<'_, '_> {}

/// An iterator over the non-empty tokens of a [`Slice`], separated by runs of any of a set of
/// delimiter bytes. Created by [`Slice::tokens`].
#[derive(Debug, Clone)]
pub struct Tokens<'a, 'd> {
    pub(crate) rest: Slice<'a>,
    pub(crate) delims: &'d [u8],
}

impl<'a, 'd> Tokens<'a, 'd> {
    pub(crate) fn new(slice: Slice<'a>, delims: &'d [u8]) -> Tokens<'a, 'd> {
        Tokens {
            rest: slice,
            delims,
        }
    }

    fn is_delim(&self, byte: &u8) -> bool {
        self.delims.contains(byte)
    }
}

impl<'a> Iterator for Tokens<'a, '_> {
    type Item = Slice<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let bytes = self.rest.as_bytes();
        let start = bytes.iter().position(|b| !self.is_delim(b))?;
        let end = bytes[start..].iter()
            .position(|b| self.is_delim(b))
            .map_or(bytes.len(), |len| start + len);

        self.rest = Slice::new(&bytes[end..]);
        Some(Slice::new(&bytes[start..end]))
    }
}

impl FusedIterator for Tokens<'_, '_> {}
