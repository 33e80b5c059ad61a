#![cfg(test)]

use super::*;
use crate::collections::contiguous::Vector;
use crate::util::alloc::CountedDrop;
use crate::util::panic::assert_panics;

#[test]
fn test_generation_reuse() {
    let mut map = SlotMap::<u32>::new();

    let (first, value) = map.emplace();
    *value = 42;
    assert_eq!(first.index(), 0);
    assert_eq!(first.generation(), 1, "Generations should start at 1.");
    assert_eq!(map.get(first), Some(&42));

    assert_eq!(map.remove(first), Some(42));
    assert_eq!(map.get(first), None, "Removed keys should no longer resolve.");

    let (second, _) = map.emplace();
    assert_eq!(second.index(), 0, "The freed slot should be reused.");
    assert_eq!(second.generation(), 2);
    assert_ne!(first, second);
    assert_eq!(map.get(first), None, "Stale keys shouldn't resolve to the new value.");
    assert_eq!(map.get(second), Some(&0));
}

#[test]
fn test_lifo_reuse() {
    let mut map = SlotMap::new();
    let keys: Vector<Key> = (0..5).map(|i| map.insert(i)).collect();

    map.remove(keys[1]);
    map.remove(keys[3]);

    let reused = map.insert(30);
    assert_eq!(reused.index(), 3, "The most recently freed slot should be reused first.");
    assert!(reused.generation() > keys[4].generation());

    let reused = map.insert(10);
    assert_eq!(reused.index(), 1);

    let fresh = map.insert(50);
    assert_eq!(fresh.index(), 5, "Unused slots should be handed out in order.");
}

#[test]
fn test_identity_stability() {
    let mut map = SlotMap::new();
    let keys: Vector<Key> = (0..100).map(|i| map.insert(i * 3)).collect();

    for key in keys.iter().step_by(2) {
        map.remove(*key);
    }
    for i in 0..50 {
        map.insert(i);
    }

    for (i, key) in keys.iter().enumerate().skip(1).step_by(2) {
        assert_eq!(map[*key], i * 3, "Keys should survive unrelated insertions and removals.");
    }
    assert_eq!(map.len(), 100);
}

#[test]
fn test_invalid_keys() {
    let mut map = SlotMap::new();
    let key = map.insert("value");

    assert_eq!(map.get(Key::NULL), None);
    assert!(Key::NULL.is_null());
    assert!(!key.is_null());

    let out_of_range = Key { index: 1000, generation: 1 };
    assert_eq!(map.get(out_of_range), None);
    assert_eq!(map.remove(out_of_range), None);

    let wrong_generation = Key { index: key.index, generation: key.generation + 1 };
    assert_eq!(map.remove(wrong_generation), None);
    assert_eq!(map.len(), 1, "Invalid keys shouldn't remove anything.");

    assert_panics!({ map[out_of_range] });
    assert_eq!(map.remove(key), Some("value"));
    assert_eq!(map.remove(key), None, "A key can only be removed once.");
}

#[test]
fn test_growth() {
    let mut map = SlotMap::new();
    assert_eq!(map.cap(), 0);

    map.insert(0);
    assert_eq!(map.cap(), 8);

    for i in 1..9 {
        map.insert(i);
    }
    assert_eq!(map.cap(), 12, "Capacity should grow by half.");

    let mut map = SlotMap::<u8>::with_cap(4);
    assert_eq!(map.cap(), 4);
    assert_eq!(map.insert(1).index(), 0, "Reserved slots should be used in ascending order.");

    map.reserve(2);
    assert_eq!(map.cap(), 4);
    map.reserve(6);
    assert_eq!(map.insert(2).index(), 4, "New slots should be used before older free slots.");
    assert_eq!(map.insert(3).index(), 5);
    assert_eq!(map.insert(4).index(), 1);

    assert_panics!({ SlotMap::<u8>::with_cap(u32::MAX as usize + 1) });
}

#[test]
fn test_read_and_mutate() {
    let mut map = SlotMap::new();
    let key = map.insert(String::from("a"));

    map.get_mut(key).unwrap().push('b');
    map[key].push('c');
    assert_eq!(map.read(key), Some(String::from("abc")));
    assert!(map.contains(key));

    let own = map.insert_with_key(|k| k.to_string());
    assert_eq!(map[own], "1v2");
}

#[test]
fn test_cursor() {
    let mut map = SlotMap::new();
    let keys: Vector<Key> = (0..6).map(|i| map.insert(i)).collect();
    map.remove(keys[0]);
    map.remove(keys[3]);

    let mut cursor = Key::NULL;
    let mut seen = Vector::new();
    while let Some(value) = map.next(&mut cursor) {
        assert_eq!(map.get(cursor), Some(value), "The cursor should be a valid key.");
        seen.push(*value);
    }

    assert_eq!(*seen, [1, 2, 4, 5], "Free slots should be skipped.");
    assert_eq!(cursor, keys[5]);
}

#[test]
fn test_clear_free_and_trim() {
    let mut map = SlotMap::new();
    let keys: Vector<Key> = (0..10).map(|i| map.insert(i)).collect();

    map.clear();
    assert!(map.is_empty());
    assert_eq!(map.cap(), 12, "Clearing should keep the slots.");
    assert!(keys.iter().all(|k| !map.contains(*k)));

    let after_clear = map.insert(0);
    assert_eq!(after_clear.index(), 0, "Clearing should rebuild the free list in order.");
    assert!(after_clear.generation() > keys[9].generation(), "Generations should never reset.");

    map.insert(1);
    let last = map.insert(2);
    map.remove(last);
    map.trim();
    assert_eq!(map.cap(), 2, "Trailing free slots should be released.");
    assert_eq!(map.get(last), None);
    assert_eq!(map.insert(3).index(), 2);

    let generation = map.generation;
    map.free();
    assert_eq!(map.cap(), 0);
    assert!(map.insert(4).generation() > generation);

    map.clear();
    map.trim();
    assert_eq!(map.cap(), 0, "Trimming an empty SlotMap should release every slot.");
}

#[test]
fn test_iterators() {
    let mut map = SlotMap::new();
    let keys: Vector<Key> = (0..5).map(|i| map.insert(i)).collect();
    map.remove(keys[2]);

    for value in map.values_mut() {
        *value *= 10;
    }
    for (key, value) in map.iter_mut() {
        *value += key.index();
    }

    assert_eq!(map.iter().len(), 4);
    assert_eq!(*map.keys().collect::<Vector<_>>(), [keys[0], keys[1], keys[3], keys[4]]);
    assert_eq!(*map.values().copied().collect::<Vector<_>>(), [0, 11, 33, 44]);
    assert_eq!(
        *map.clone().into_iter().collect::<Vector<_>>(),
        [(keys[0], 0), (keys[1], 11), (keys[3], 33), (keys[4], 44)]
    );
}

#[test]
fn test_drop() {
    let counter = CountedDrop::new();
    let mut map = SlotMap::new();
    let keys: Vector<Key> = (0..6).map(|_| map.insert(counter.clone())).collect();

    drop(map.remove(keys[0]));
    assert_eq!(counter.dropped(), 1);

    map.clear();
    assert_eq!(counter.dropped(), 6, "Clearing should drop every value.");

    for _ in 0..3 {
        map.insert(counter.clone());
    }
    let mut iter = map.into_iter();
    drop(iter.next());
    drop(iter);
    assert_eq!(counter.dropped(), 9);
}
