use crate::string::Slice;

/// A single argument for [`format`](super::format).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Arg<'a> {
    Int(i64),
    Uint(u64),
    Float(f64),
    Str(&'a str),
    Char(char),
    Bool(bool),
    Bytes(Slice<'a>),
}

impl Arg<'_> {
    pub(crate) const fn is_number(&self) -> bool {
        matches!(self, Arg::Int(_) | Arg::Uint(_) | Arg::Float(_))
    }
}

macro_rules! impl_from {
    ($variant:ident($target:ty): $($source:ty),*) => {
        $(
            impl From<$source> for Arg<'_> {
                fn from(value: $source) -> Self {
                    Arg::$variant(value as $target)
                }
            }
        )*
    };
}

impl_from!(Int(i64): i8, i16, i32, i64, isize);
impl_from!(Uint(u64): u8, u16, u32, u64, usize);
impl_from!(Float(f64): f32, f64);

impl From<char> for Arg<'_> {
    fn from(value: char) -> Self {
        Arg::Char(value)
    }
}

impl From<bool> for Arg<'_> {
    fn from(value: bool) -> Self {
        Arg::Bool(value)
    }
}

impl<'a> From<&'a str> for Arg<'a> {
    fn from(value: &'a str) -> Self {
        Arg::Str(value)
    }
}

impl<'a> From<&'a String> for Arg<'a> {
    fn from(value: &'a String) -> Self {
        Arg::Str(value)
    }
}

impl<'a> From<Slice<'a>> for Arg<'a> {
    fn from(value: Slice<'a>) -> Self {
        Arg::Bytes(value)
    }
}
