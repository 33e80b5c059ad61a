#![cfg(test)]

use super::*;
use crate::collections::contiguous::Vector;
use crate::util::alloc::CountedDrop;
use crate::util::hash::{CoarseHasherBuilder, IdentityHasherBuilder, ManualHash};
use crate::util::panic::assert_panics;

#[test]
fn test_colliding_root_removal() {
    let mut map = HashMap::with_cap_and_hasher(8, CoarseHasherBuilder);
    assert!(map.insert(2_u32, 10));
    assert!(map.insert(4_u32, 20));
    assert_eq!(map.cap(), 8);
    assert_eq!(map.overflow.len(), 1, "The second key should be stacked behind the first.");

    assert!(map.remove(&2));
    assert_eq!(map.get(&4), Some(&20), "Removing the root shouldn't lose the stacked entry.");
    assert_eq!(map.get(&2), None);
    assert!(map.overflow.is_empty(), "The stacked entry should have been promoted.");

    let mut map = HashMap::with_cap_and_hasher(8, CoarseHasherBuilder);
    map.insert(2_u32, 10);
    map.insert(4_u32, 20);

    assert!(map.remove(&4));
    assert_eq!(map.get(&2), Some(&10), "Removing a stacked entry shouldn't lose the root.");
    assert_eq!(map.len(), 1);
}

#[test]
fn test_modulo_collisions() {
    let mut map = HashMap::with_hasher(IdentityHasherBuilder);
    map.insert(2_u64, "two");
    map.insert(10_u64, "ten");
    map.insert(18_u64, "eighteen");
    assert_eq!(map.cap(), 8);

    assert_eq!(map.take(&10), Some("ten"));
    assert_eq!(map.get(&2), Some(&"two"));
    assert_eq!(map.get(&18), Some(&"eighteen"));
    assert_eq!(map.take(&2), Some("two"));
    assert_eq!(map.get(&18), Some(&"eighteen"));
    assert_eq!(map.len(), 1);
}

#[test]
fn test_hash_collisions() {
    let mut map = HashMap::with_cap_and_hasher(8, IdentityHasherBuilder);
    for (hash, value) in [(0, "zero"), (0, "one"), (2, "two"), (0, "three"), (2, "four"), (1, "five")] {
        assert!(map.insert(ManualHash::new(hash, value), ()));
    }

    assert!(map.remove(&ManualHash::new(0, "zero")));
    assert!(map.remove(&ManualHash::new(2, "two")));
    assert!(map.remove(&ManualHash::new(0, "one")));

    let mut remaining = map.into_keys().map(|k| k.value()).collect::<Vector<_>>();
    remaining.span().sort();
    assert_eq!(
        *remaining,
        ["five", "four", "three"],
        "No entries should be lost while removing from stacked buckets."
    );
}

#[test]
fn test_growth() {
    let mut map = HashMap::<u32, u32>::new();
    assert_eq!(map.cap(), 0, "A new HashMap shouldn't allocate.");

    for key in 1..=5 {
        map.write(key, key * 5);
    }
    assert_eq!(map.cap(), 8);

    map.write(6, 30);
    assert_eq!(map.cap(), 16, "The 6th entry should reach the load factor of 8 buckets.");

    for key in 1..=6 {
        assert_eq!(map.get(&key), Some(&(key * 5)), "Values should survive a rehash.");
    }
}

#[test]
fn test_ensure() {
    let mut map = HashMap::<&str, Vector<u8>>::new();

    let (value, is_new) = map.ensure("bytes");
    assert!(is_new);
    value.push(7);
    assert_eq!(map.cap(), 8, "The first ensure should allocate the minimum capacity.");

    let (value, is_new) = map.ensure("bytes");
    assert!(!is_new);
    assert_eq!(**value, [7]);
    assert_eq!(map.len(), 1);

    assert!(map.emplace("bytes").is_none(), "Emplacing an existing key should do nothing.");
    assert!(map.emplace("other").is_some_and(|v| v.is_empty()));
}

#[test]
fn test_insert_and_write() {
    let mut map = HashMap::<u8, &str>::new();

    assert!(map.insert(1, "a"));
    assert!(!map.insert(1, "b"), "Insert shouldn't overwrite.");
    assert_eq!(map[&1], "a");

    assert!(!map.write(1, "c"), "Write should report an existing key.");
    assert_eq!(map[&1], "c");
    assert!(map.write(2, "d"));

    *map.get_mut(&2).unwrap() = "e";
    assert_eq!(map.get_entry(&2), Some((&2, &"e")));
    assert!(map.contains(&2));
    assert!(!map.contains(&3));
    assert_eq!(map.remove_entry(&2), Some((2, "e")));

    assert_panics!({ map[&3] });
}

#[test]
fn test_borrowed_lookup() {
    let map: HashMap<String, usize> = ["alpha", "beta"].into_iter()
        .map(|s| (s.to_string(), s.len()))
        .collect();

    assert_eq!(map.get("alpha"), Some(&5));
    assert!(map.contains("beta"));
    assert!(!map.contains("gamma"));
}

#[test]
fn test_key_uniqueness() {
    let mut map = HashMap::<u32, u32>::new();
    for i in 0..200 {
        map.write(i % 50, i);
    }

    assert_eq!(map.len(), 50);
    assert_eq!(map.iter().count(), 50);
    for key in 0..50 {
        assert_eq!(map[&key], key + 150, "The last write should win.");
    }
}

#[test]
fn test_reserve_and_trim() {
    let mut map = HashMap::<u32, u32>::with_cap(20);
    assert_eq!(map.cap(), 32, "Capacity should be rounded up to a power of two.");

    map.reserve(10);
    assert_eq!(map.cap(), 32, "Reserving less than the capacity should do nothing.");

    map.extend((0..5).map(|i| (i, i)));
    map.trim();
    assert_eq!(map.cap(), 8);
    assert!((0..5).all(|i| map.get(&i) == Some(&i)));

    map.extend((5..7).map(|i| (i, i)));
    map.trim();
    assert_eq!(map.cap(), 16, "Trimming shouldn't go below the load factor.");

    map.clear();
    assert!(map.is_empty());
    assert_eq!(map.cap(), 16, "Clearing should keep the capacity.");

    map.trim();
    assert_eq!(map.cap(), 0, "Trimming an empty map should release it.");
    assert_eq!(map.get(&1), None);
}

#[test]
fn test_next_entry() {
    let mut map = HashMap::with_hasher(CoarseHasherBuilder);
    for i in 0..5_u32 {
        map.insert(i, i * 10);
    }

    let mut cursor = None;
    let mut seen = Vector::new();
    while let Some((next, key, value)) = map.next_entry(cursor) {
        assert_eq!(*value, key * 10);
        seen.push(*key);
        cursor = Some(next);
    }
    seen.span().sort();
    assert_eq!(*seen, [0, 1, 2, 3, 4], "Cursors should visit roots and stacked entries.");

    map.clear();
    assert!(map.next_entry(None).is_none());
}

#[test]
fn test_iterators() {
    let mut map: HashMap<u32, u32> = (0..20).map(|i| (i, i)).collect();

    for value in map.values_mut() {
        *value *= 2;
    }
    for (key, value) in map.iter_mut() {
        assert_eq!(*value, key * 2);
    }

    assert_eq!(map.iter().len(), 20);
    assert_eq!(map.keys().sum::<u32>(), 190);
    assert_eq!(map.values().sum::<u32>(), 380);
    assert_eq!(map.into_values().sum::<u32>(), 380);
}

#[test]
fn test_drop() {
    let counter = CountedDrop::new();
    let mut map = HashMap::with_hasher(CoarseHasherBuilder);
    for i in 0..6_u32 {
        map.insert(i, counter.clone());
    }

    drop(map.take(&0));
    assert_eq!(counter.dropped(), 1);

    let mut iter = map.into_iter();
    drop(iter.next());
    drop(iter);
    assert_eq!(counter.dropped(), 6, "Every value should be dropped exactly once.");
}

#[test]
fn test_display() {
    let mut map = HashMap::with_hasher(IdentityHasherBuilder);
    map.insert(1_u8, 'a');
    assert_eq!(format!("{map}"), "#{1: 'a'}");
}
