use std::iter::Peekable;
use std::str::Chars;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Align {
    Left,
    Right,
    Center,
}

impl Align {
    const fn from_char(c: char) -> Option<Align> {
        match c {
            '<' => Some(Align::Left),
            '>' => Some(Align::Right),
            '^' => Some(Align::Center),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Kind {
    Default,
    Decimal,
    LowerHex,
    UpperHex,
    Binary,
    Octal,
    Exponent,
    Fixed,
    Text,
    Char,
    Debug,
}

impl Kind {
    const fn from_char(c: char) -> Option<Kind> {
        match c {
            'd' => Some(Kind::Decimal),
            'x' => Some(Kind::LowerHex),
            'X' => Some(Kind::UpperHex),
            'b' => Some(Kind::Binary),
            'o' => Some(Kind::Octal),
            'e' => Some(Kind::Exponent),
            'f' => Some(Kind::Fixed),
            's' => Some(Kind::Text),
            'c' => Some(Kind::Char),
            '?' => Some(Kind::Debug),
            _ => None,
        }
    }
}

/// A parsed replacement field, without its braces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Spec {
    pub(crate) index: Option<usize>,
    pub(crate) fill: char,
    pub(crate) align: Option<Align>,
    pub(crate) sign: bool,
    pub(crate) alternate: bool,
    pub(crate) zero: bool,
    pub(crate) width: Option<usize>,
    pub(crate) precision: Option<usize>,
    pub(crate) kind: Kind,
}

impl Default for Spec {
    fn default() -> Self {
        Spec {
            index: None,
            fill: ' ',
            align: None,
            sign: false,
            alternate: false,
            zero: false,
            width: None,
            precision: None,
            kind: Kind::Default,
        }
    }
}

impl Spec {
    /// Parses the contents of a replacement field, returning None if they are malformed.
    pub(crate) fn parse(field: &str) -> Option<Spec> {
        let mut spec = Spec::default();
        let mut chars = field.chars().peekable();

        spec.index = parse_number(&mut chars)?;

        match chars.next() {
            None => return Some(spec),
            Some(':') => {},
            Some(_) => return None,
        }

        // A fill character is only present if an alignment follows it.
        let mut lookahead = chars.clone();
        match (lookahead.next(), lookahead.next().and_then(Align::from_char)) {
            (Some(fill), Some(align)) => {
                spec.fill = fill;
                spec.align = Some(align);
                chars = lookahead;
            },
            (Some(c), None) if Align::from_char(c).is_some() => {
                spec.align = Align::from_char(c);
                chars.next();
            },
            _ => {},
        }

        spec.sign = chars.next_if_eq(&'+').is_some();
        spec.alternate = chars.next_if_eq(&'#').is_some();
        spec.zero = chars.next_if_eq(&'0').is_some();
        spec.width = parse_number(&mut chars)?;

        if chars.next_if_eq(&'.').is_some() {
            // A precision needs at least one digit.
            spec.precision = Some(parse_number(&mut chars)??);
        }

        if let Some(c) = chars.next() {
            spec.kind = Kind::from_char(c)?;
        }

        match chars.next() {
            None => Some(spec),
            Some(_) => None,
        }
    }
}

/// Parses a run of decimal digits. Returns `Some(None)` if there are no digits and `None` if the
/// number overflows.
fn parse_number(chars: &mut Peekable<Chars<'_>>) -> Option<Option<usize>> {
    let mut number: Option<usize> = None;

    while let Some(digit) = chars.peek().and_then(|c| c.to_digit(10)) {
        chars.next();
        number = Some(number.unwrap_or(0).checked_mul(10)?.checked_add(digit as usize)?);
    }

    Some(number)
}
