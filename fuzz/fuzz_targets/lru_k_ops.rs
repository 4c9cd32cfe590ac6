#![no_main]

use std::collections::HashMap;

use libfuzzer_sys::fuzz_target;
use lrukit::{LruKCache, ThresholdPolicy};

// Fuzz arbitrary operation sequences on LruKCache
//
// The first two bytes pick a configuration (capacity, policy, strict
// promotion); the rest drive inserts, gets, removes, peeks, and clears
// over a small key space. A value shadow map checks that every hit
// returns the last written value. Evictions make presence itself
// nondeterministic from the shadow's point of view, so absence is
// never asserted except right after remove or clear.
fuzz_target!(|data: &[u8]| {
    if data.len() < 3 {
        return;
    }

    let capacity = usize::from(data[0] % 16) + 1;
    let strict = data[1] & 1 == 1;
    let policy: ThresholdPolicy<u8, u32> = match (data[1] >> 1) % 6 {
        0 => ThresholdPolicy::fixed(1),
        1 => ThresholdPolicy::fixed(2),
        2 => ThresholdPolicy::fixed(3),
        3 => ThresholdPolicy::by_access_count(),
        4 => ThresholdPolicy::adaptive(),
        _ => ThresholdPolicy::smart(),
    };

    let mut cache: LruKCache<u8, u32> = LruKCache::builder()
        .capacity(capacity)
        .policy(policy)
        .strict_capacity_on_promotion(strict)
        .build()
        .unwrap_or_else(|err| panic!("nonzero capacity rejected: {err}"));

    // key -> last written value
    let mut written: HashMap<u8, u32> = HashMap::new();

    let mut idx = 2;
    let mut ops = 0u32;
    while idx + 1 < data.len() {
        let op = data[idx] % 8;
        let key = data[idx + 1] % 32;
        let value = u32::from(data[idx + 1]) ^ (ops << 8);

        match op {
            0 | 1 | 2 => {
                // insert or update
                let had_key = cache.contains(&key);
                let displaced = cache.insert(key, value);
                assert_eq!(displaced.is_some(), had_key);
                if let (Some(old), Some(expected)) = (displaced, written.get(&key)) {
                    assert_eq!(old, *expected);
                }
                written.insert(key, value);
                assert!(cache.contains(&key), "a fresh write must be resident");
            }
            3 | 4 => {
                // get: a hit must return the last written value
                if let Some(found) = cache.get(&key) {
                    assert_eq!(Some(found), written.get(&key));
                }
            }
            5 => {
                // peek agrees with contains and never perturbs counters
                let total_before = cache.stats().total_accesses();
                let peeked = cache.peek(&key).copied();
                assert_eq!(peeked.is_some(), cache.contains(&key));
                if let Some(found) = peeked {
                    assert_eq!(Some(&found), written.get(&key));
                }
                assert_eq!(cache.stats().total_accesses(), total_before);
            }
            6 => {
                // remove
                let removed = cache.remove(&key);
                if let Some(old) = removed {
                    assert_eq!(Some(&old), written.get(&key));
                }
                assert!(!cache.contains(&key));
                written.remove(&key);
            }
            _ => {
                // occasional clear
                if data[idx + 1] % 17 == 0 {
                    cache.clear();
                    written.clear();
                    assert!(cache.is_empty());
                }
            }
        }

        // Structural properties hold after every operation.
        assert!(cache.len() <= cache.capacity());
        assert_eq!(cache.history_len() + cache.cache_len(), cache.len());
        if cache.contains(&key) {
            assert!(cache.in_history(&key) != cache.in_cache(&key));
        }

        ops += 1;
        if ops % 32 == 0 {
            cache.check_invariants().unwrap_or_else(|err| {
                panic!("invariant violation after {ops} ops: {err}");
            });
        }

        idx += 2;
    }

    cache
        .check_invariants()
        .unwrap_or_else(|err| panic!("final invariant violation: {err}"));
    let stats = cache.stats();
    assert_eq!(stats.hits() + stats.misses(), stats.total_accesses());
});
