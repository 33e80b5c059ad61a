use std::collections::HashMap as StdHashMap;

use container_lib::collections::hash::HashMap;
use proptest::prelude::*;

// Model HashMap against std's HashMap. A small key space forces rewrites, removals of present
// keys and, once the map has grown a few times, stacked buckets.
proptest! {
    #[test]
    fn prop_hash_map_matches_model(ops in proptest::collection::vec((0u8..=4u8, 0u16..64u16, any::<u32>()), 1..400)) {
        let mut map: HashMap<u16, u32> = HashMap::new();
        let mut model: StdHashMap<u16, u32> = StdHashMap::new();

        for (op, key, value) in ops {
            match op {
                0 => prop_assert_eq!(map.write(key, value), model.insert(key, value).is_none()),
                1 => {
                    let inserted = map.insert(key, value);
                    prop_assert_eq!(inserted, !model.contains_key(&key));
                    model.entry(key).or_insert(value);
                }
                2 => prop_assert_eq!(map.take(&key), model.remove(&key)),
                3 => {
                    let (slot, is_new) = map.ensure(key);
                    prop_assert_eq!(is_new, !model.contains_key(&key));
                    *slot = slot.wrapping_add(value);
                    let entry = model.entry(key).or_insert(0);
                    *entry = entry.wrapping_add(value);
                }
                4 => map.trim(),
                _ => unreachable!(),
            }

            prop_assert_eq!(map.len(), model.len());
            prop_assert_eq!(map.get(&key), model.get(&key));
        }

        // Every key is unique and every value matches.
        prop_assert_eq!(map.iter().count(), model.len());
        for (key, value) in map.iter() {
            prop_assert_eq!(model.get(key), Some(value));
        }

        // The load factor always stays below 3/4.
        prop_assert!(map.len() * 4 < map.cap() * 3 || map.cap() == 0);
    }

    #[test]
    fn prop_hash_map_cursor_visits_everything(keys in proptest::collection::hash_set(any::<u64>(), 0..200)) {
        let map: HashMap<u64, ()> = keys.iter().map(|k| (*k, ())).collect();

        let mut visited = 0;
        let mut cursor = None;
        while let Some((next, key, _)) = map.next_entry(cursor) {
            prop_assert!(keys.contains(key));
            visited += 1;
            cursor = Some(next);
        }
        prop_assert_eq!(visited, keys.len());
    }
}
