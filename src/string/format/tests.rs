#![cfg(test)]

use super::*;
use super::spec::{Align, Kind, Spec};
use crate::fmt;
use crate::string::Slice;

#[test]
fn test_positional() {
    assert_eq!(fmt!("{} {} {}", "a", 'b', 3), "a b 3");
    assert_eq!(fmt!("{2}{1}{0}", 1, 2, 3), "321");
    assert_eq!(fmt!("{0}{0}", "echo"), "echoecho");
    assert_eq!(fmt!("{1} {} {}", "x", "y"), "y x y", "Explicit indices shouldn't consume arguments.");
    assert_eq!(fmt!("no fields"), "no fields");
    assert_eq!(format("{}", &[]), "{}");
}

#[test]
fn test_escapes() {
    assert_eq!(fmt!("{{}}"), "{}");
    assert_eq!(fmt!("{{{}}}", 1), "{1}");
    assert_eq!(fmt!("a } b", 1), "a } b", "A lone closing brace should be written as is.");
    assert_eq!(fmt!("open { ended", 1), "open { ended");
    assert_eq!(fmt!("{}}", 7), "7}");
    assert_eq!(fmt!("}}}"), "}}");
}

#[test]
fn test_malformed() {
    assert_eq!(fmt!("{:q}", 1), "{:q}");
    assert_eq!(fmt!("{x}", 1), "{x}");
    assert_eq!(fmt!("{:.}", 1.5), "{:.}");
    assert_eq!(fmt!("{:5x}", "text"), "{:5x}", "Mismatched types should be written as is.");
    assert_eq!(fmt!("{3}", 1), "{3}");
    assert_eq!(fmt!("{} {}", 1), "1 {}");
}

#[test]
fn test_alignment() {
    assert_eq!(fmt!("[{:5}]", "ab"), "[ab   ]", "Text should be left aligned by default.");
    assert_eq!(fmt!("[{:5}]", 42), "[   42]", "Numbers should be right aligned by default.");
    assert_eq!(fmt!("[{:>5}]", "ab"), "[   ab]");
    assert_eq!(fmt!("[{:<5}]", 42), "[42   ]");
    assert_eq!(fmt!("[{:^6}]", "ab"), "[  ab  ]");
    assert_eq!(fmt!("[{:-^7}]", "ab"), "[--ab---]");
    assert_eq!(fmt!("[{:2}]", "long"), "[long]", "Width is only a minimum.");
}

#[test]
fn test_numbers() {
    assert_eq!(fmt!("{:+}", 5), "+5");
    assert_eq!(fmt!("{:+}", -5), "-5");
    assert_eq!(fmt!("{:05}", -42), "-0042");
    assert_eq!(fmt!("{:x} {:X}", 255, 255_u8), "ff FF");
    assert_eq!(fmt!("{:#b} {:#o}", 5, 8), "0b101 0o10");
    assert_eq!(fmt!("{:#010x}", 0xbeef), "0x0000beef");
    assert_eq!(fmt!("{:x}", -255), "-ff");
    assert_eq!(fmt!("{:d}", u64::MAX), "18446744073709551615");
    assert_eq!(fmt!("{:c}", 65), "A");
}

#[test]
fn test_floats() {
    assert_eq!(fmt!("{}", 1.5), "1.5");
    assert_eq!(fmt!("{:.2}", 3.14159), "3.14");
    assert_eq!(fmt!("{:f}", 2.5), "2.500000");
    assert_eq!(fmt!("{:.1f}", -0.3_f32), "-0.3");
    assert_eq!(fmt!("{:e}", 1500.0), "1.5e3");
    assert_eq!(fmt!("{:.2e}", 1500.0), "1.50e3");
    assert_eq!(fmt!("{:08.3f}", -3.5), "-003.500");
    assert_eq!(fmt!("{:.1f}", 7), "7.0");
}

#[test]
fn test_text() {
    assert_eq!(fmt!("{:.3}", "truncated"), "tru");
    assert_eq!(fmt!("{:s}", true), "true");
    assert_eq!(fmt!("{:?}", "quote\"d"), "\"quote\\\"d\"");
    assert_eq!(fmt!("{:?}", 'c'), "'c'");
    assert_eq!(fmt!("{}", Slice::from("bytes")), "bytes");
    assert_eq!(fmt!("{:?}", Slice::from(b"\x00")), "\"\\x00\"");

    let owned = String::from("owned");
    assert_eq!(fmt!("{:>7}", &owned), "  owned");
}

#[test]
fn test_parse_spec() {
    assert_eq!(Spec::parse(""), Some(Spec::default()));
    assert_eq!(
        Spec::parse("1:_^+#012.4x"),
        Some(Spec {
            index: Some(1),
            fill: '_',
            align: Some(Align::Center),
            sign: true,
            alternate: true,
            zero: true,
            width: Some(12),
            precision: Some(4),
            kind: Kind::LowerHex,
        })
    );
    assert_eq!(Spec::parse(":>").map(|s| s.align), Some(Some(Align::Right)));
    assert_eq!(Spec::parse(":>>").map(|s| s.fill), Some('>'));
    assert_eq!(Spec::parse("99999999999999999999999"), None, "Overflowing indices are malformed.");
    assert_eq!(Spec::parse(":5s "), None);
}
