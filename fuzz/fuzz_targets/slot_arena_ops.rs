#![no_main]

use libfuzzer_sys::fuzz_target;
use lrukit::ds::SlotArena;

// Fuzz arbitrary operation sequences on SlotArena
//
// Tracks live and retired handles separately so every generation
// property is checked: live ids always resolve, retired ids never do,
// even after their slot has been reused by later inserts.
fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    let mut arena: SlotArena<u32> = SlotArena::new();
    let mut live = Vec::new();
    let mut retired = Vec::new();

    let mut idx = 0;
    while idx + 1 < data.len() {
        let op = data[idx] % 6;
        let arg = data[idx + 1];
        let value = u32::from(arg);

        match op {
            0 => {
                // insert
                let id = arena.insert(value);
                assert_eq!(arena.get(id), Some(&value));
                assert!(arena.contains(id));
                live.push((id, value));
            }
            1 => {
                // remove a live handle
                if !live.is_empty() {
                    let pick = (value as usize) % live.len();
                    let (id, expected) = live.swap_remove(pick);
                    assert_eq!(arena.remove(id), Some(expected));
                    assert!(!arena.contains(id));
                    retired.push(id);
                }
            }
            2 => {
                // remove a retired handle: must be a no-op
                if !retired.is_empty() {
                    let pick = (value as usize) % retired.len();
                    let old_len = arena.len();
                    assert_eq!(arena.remove(retired[pick]), None);
                    assert_eq!(arena.len(), old_len);
                }
            }
            3 => {
                // get / get_mut on a live handle
                if !live.is_empty() {
                    let pick = (value as usize) % live.len();
                    let (id, expected) = live[pick];
                    assert_eq!(arena.get(id), Some(&expected));
                    let new_value = expected.wrapping_add(1);
                    if let Some(slot) = arena.get_mut(id) {
                        *slot = new_value;
                    }
                    live[pick].1 = new_value;
                }
            }
            4 => {
                // stale handles stay dead after slot reuse
                for id in &retired {
                    assert!(!arena.contains(*id));
                    assert_eq!(arena.get(*id), None);
                }
            }
            5 => {
                // clear retires everything
                arena.clear();
                retired.extend(live.drain(..).map(|(id, _)| id));
                assert!(arena.is_empty());
                assert_eq!(arena.iter().count(), 0);
            }
            _ => unreachable!(),
        }

        assert_eq!(arena.len(), live.len());
        assert_eq!(arena.is_empty(), live.is_empty());
        assert_eq!(arena.iter().count(), live.len());

        idx += 2;
    }

    // Final sweep: every live handle resolves to its shadow value.
    for (id, expected) in &live {
        assert_eq!(arena.get(*id), Some(expected));
    }
    for id in &retired {
        assert_eq!(arena.get(*id), None);
    }
});
