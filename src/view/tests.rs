#![cfg(test)]

use std::cmp::Ordering;

use super::*;
use crate::util::panic::assert_panics;

const VALUES: [u32; 6] = [3, 32, 58, 201, 3874, 9841];

#[test]
fn test_negative_indexing() {
    let view = View::new(&VALUES);

    assert_eq!(view.get(0), Some(&3));
    assert_eq!(view.get(5), Some(&9841));
    assert_eq!(view.get(-1), Some(&9841), "-1 should refer to the last element.");
    assert_eq!(view.get(-6), Some(&3), "-len should refer to the first element.");
    assert_eq!(view.get(6), None);
    assert_eq!(view.get(-7), None);
    assert_eq!(view.get(isize::MIN), None);

    assert_eq!(View::<u8>::empty().get(0), None);
    assert_eq!(View::<u8>::empty().get(-1), None);
    assert_eq!(view.front(), Some(&3));
    assert_eq!(view.back(), Some(&9841));
}

#[test]
fn test_subview_clamping() {
    let view = View::new(&VALUES);

    assert!(
        view.subview(-6, view.len() as isize).ptr_eq(&view),
        "A subview from -len to len should be the whole View."
    );
    assert_eq!(*view.subview(1, 3), [32, 58]);
    assert_eq!(*view.subview(-3, -1), [201, 3874]);
    assert_eq!(*view.subview(-100, 2), [3, 32]);
    assert_eq!(*view.subview(4, 100), [3874, 9841]);
    assert!(view.subview(4, 2).is_empty(), "Reversed bounds should produce an empty View.");
    assert!(view.subview(100, 200).is_empty());
    assert!(view.subview(isize::MIN, isize::MIN).is_empty());
}

#[test]
fn test_take_and_skip() {
    let view = View::new(&VALUES);

    assert_eq!(*view.take(-2), [3874, 9841], "Negative take should return the last elements.");
    assert_eq!(*view.take(2), [3, 32]);
    assert!(view.take(100).ptr_eq(&view), "Excessive take should return the whole View.");
    assert!(view.take(-100).ptr_eq(&view));
    assert!(view.take(0).is_empty());

    assert_eq!(*view.skip(4), [3874, 9841]);
    assert_eq!(*view.skip(-4), [3, 32]);
    assert!(view.skip(100).is_empty(), "Excessive skip should return an empty View.");
    assert!(view.skip(-100).is_empty());
    assert!(view.skip(0).ptr_eq(&view));
}

#[test]
fn test_split_and_partition() {
    let view = View::new(&VALUES);

    let (left, right) = view.split_at(2);
    assert_eq!(*left, [3, 32]);
    assert_eq!(*right, [58, 201, 3874, 9841]);

    let (left, right) = view.split_at(-1);
    assert_eq!(left.len(), 5);
    assert_eq!(*right, [9841]);

    let (left, right) = view.split_at(isize::MAX);
    assert_eq!(left.len(), 6);
    assert!(right.is_empty());

    assert_eq!(view.partition_point(|v| *v < 100), 3);
    let (small, large) = view.split_by(|v| *v < 1000);
    assert_eq!(*small, [3, 32, 58, 201]);
    assert_eq!(*large, [3874, 9841]);
}

#[test]
fn test_equality() {
    let view = View::new(&VALUES);
    let copy = VALUES;
    let other = View::new(&copy);

    assert_eq!(view, other, "Element-wise equality should hold for copies.");
    assert!(!view.ptr_eq(&other), "Copies don't share memory.");
    assert!(view.ptr_eq(&view.subview(0, 6)));

    let halves = [1.5_f64, 2.5, 3.5];
    let rounded = [1.0_f64, 2.0, 3.0];
    assert!(View::new(&halves).eq_by(&View::new(&rounded), |a, b| {
        a.floor().partial_cmp(&b.floor()).unwrap_or(Ordering::Less)
    }));
    assert!(!View::new(&halves).eq_by(&View::new(&rounded[..2]), |_, _| Ordering::Equal));
}

#[test]
fn test_searching() {
    let view = View::new(&VALUES);

    assert_eq!(view.find(|v| *v > 100), Some(3));
    assert_eq!(view.find(|v| *v > 100_000), None);
    assert_eq!(view.position(&58), Some(2));
    assert_eq!(view.position_by(&3875, |a, b| (a / 10).cmp(&(b / 10))), Some(4));
    assert!(view.contains(&9841));

    for (i, value) in VALUES.iter().enumerate() {
        assert_eq!(view.binary_search(value), Some(i));
    }
    assert_eq!(view.binary_search(&4), None);
    assert_eq!(view.binary_search(&0), None);
    assert_eq!(view.binary_search(&10_000), None);
    assert_eq!(View::<u32>::empty().binary_search(&1), None);
    assert_eq!(View::<u32>::empty().find(|_| true), None);
}

#[test]
fn test_span_mutation() {
    let mut values = [5, 1, 4, 2, 3];
    let mut span = Span::new(&mut values);

    span.sort();
    assert_eq!(*span, [1, 2, 3, 4, 5]);

    span.reverse();
    assert_eq!(*span, [5, 4, 3, 2, 1]);

    span.swap(0, -1);
    assert_eq!(*span, [1, 4, 3, 2, 5]);

    span.swap_with_last(1);
    assert_eq!(*span, [1, 5, 3, 2, 4]);

    span.sort_by(|a, b| b.cmp(a));
    assert_eq!(*span, [5, 4, 3, 2, 1]);

    span.subspan(1, -1).fill(0);
    assert_eq!(*span, [5, 0, 0, 0, 1]);

    *span.get_mut(-1).unwrap() = 7;
    assert_eq!(span.as_view().back(), Some(&7));

    assert_panics!({
        let mut values = [1, 2, 3];
        Span::new(&mut values).swap(0, 3);
    });
}

#[test]
fn test_span_bytes() {
    let mut values = [0x0102_u16, 0x0304];
    let mut span = Span::new(&mut values);

    // SAFETY: Every bit pattern is a valid u16.
    unsafe { span.reverse_bytes(); }
    assert_eq!(*span, [0x0403, 0x0201]);

    // SAFETY: Every bit pattern is a valid u16.
    unsafe { span.write_bytes(0xFF); }
    assert_eq!(*span, [u16::MAX, u16::MAX]);
    assert_eq!(span.size_bytes(), 4);
}

#[test]
fn test_rotate() {
    let mut values = [0, 1, 2, 3, 4, 5];

    Span::new(&mut values).rotate(1);
    assert_eq!(values, [1, 2, 3, 4, 5, 0]);

    Span::new(&mut values).rotate(-1);
    assert_eq!(values, [0, 1, 2, 3, 4, 5]);

    Span::new(&mut values).rotate(8);
    assert_eq!(values, [2, 3, 4, 5, 0, 1], "Rotation should wrap around the length.");

    Span::new(&mut values).rotate(6);
    assert_eq!(values, [2, 3, 4, 5, 0, 1]);

    let mut empty: [u8; 0] = [];
    Span::new(&mut empty).rotate(3);
}

#[test]
fn test_filter() {
    let mut values = [1, 2, 3, 4, 5, 6, 7, 8];
    let mut span = Span::new(&mut values);

    let live = span.filter(|v| v % 3 != 0);
    assert_eq!(*live, [1, 2, 4, 5, 7, 8], "Filter should keep live elements in order.");

    let mut values = [1, 3, 5];
    assert!(Span::new(&mut values).filter(|v| v % 2 == 0).is_empty());
}

#[test]
#[cfg(feature = "shuffle")]
fn test_shuffle() {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    let mut values: [u32; 32] = std::array::from_fn(|i| i as u32);
    let mut rng = StdRng::seed_from_u64(0x5EED);

    let mut span = Span::new(&mut values);
    span.shuffle(&mut rng);
    span.sort();

    assert!(
        span.iter().enumerate().all(|(i, v)| i as u32 == *v),
        "Shuffling should only reorder elements."
    );
}
