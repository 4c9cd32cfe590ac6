#![no_main]

use std::collections::VecDeque;

use libfuzzer_sys::fuzz_target;
use lrukit::ds::IntrusiveList;

// Fuzz arbitrary operation sequences on IntrusiveList
//
// Mirrors the list in a VecDeque shadow model (front to back) and
// checks full order agreement plus the link-structure invariants.
// Only live handles are handed to remove and move_to_front since the
// list treats a stale handle as a caller bug.
fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    let mut list: IntrusiveList<u16> = IntrusiveList::new();
    let mut shadow: VecDeque<(lrukit::ds::SlotId, u16)> = VecDeque::new();

    let mut idx = 0;
    let mut ops = 0u32;
    while idx + 1 < data.len() {
        let op = data[idx] % 7;
        let arg = data[idx + 1];
        let value = u16::from(arg);

        match op {
            0 => {
                // push_front
                let id = list.push_front(value);
                shadow.push_front((id, value));
                assert_eq!(list.front(), Some(&value));
                assert_eq!(list.front_id(), Some(id));
            }
            1 => {
                // pop_back
                let popped = list.pop_back();
                let expected = shadow.pop_back();
                assert_eq!(popped, expected.map(|(_, v)| v));
            }
            2 => {
                // move_to_front on a live handle
                if !shadow.is_empty() {
                    let pick = (arg as usize) % shadow.len();
                    let entry = shadow
                        .remove(pick)
                        .unwrap_or_else(|| unreachable!("pick is bounded by the shadow length"));
                    list.move_to_front(entry.0);
                    shadow.push_front(entry);
                    assert_eq!(list.front_id(), Some(entry.0));
                }
            }
            3 => {
                // remove a live handle
                if !shadow.is_empty() {
                    let pick = (arg as usize) % shadow.len();
                    let (id, expected) = shadow
                        .remove(pick)
                        .unwrap_or_else(|| unreachable!("pick is bounded by the shadow length"));
                    assert_eq!(list.remove(id), expected);
                    assert!(!list.contains(id));
                }
            }
            4 => {
                // get on a live handle
                if !shadow.is_empty() {
                    let pick = (arg as usize) % shadow.len();
                    let (id, expected) = shadow[pick];
                    assert_eq!(list.get(id), Some(&expected));
                    assert!(list.contains(id));
                }
            }
            5 => {
                // front / back agreement
                assert_eq!(list.front(), shadow.front().map(|(_, v)| v));
                assert_eq!(list.back(), shadow.back().map(|(_, v)| v));
                assert_eq!(list.front_id(), shadow.front().map(|(id, _)| *id));
                assert_eq!(list.back_id(), shadow.back().map(|(id, _)| *id));
            }
            6 => {
                // clear
                list.clear();
                shadow.clear();
                assert!(list.is_empty());
                assert_eq!(list.front(), None);
                assert_eq!(list.back(), None);
            }
            _ => unreachable!(),
        }

        assert_eq!(list.len(), shadow.len());
        assert_eq!(list.is_empty(), shadow.is_empty());

        ops += 1;
        if ops % 16 == 0 {
            list.check_invariants().unwrap_or_else(|err| {
                panic!("invariant violation after {ops} ops: {err}");
            });
            let order: Vec<u16> = list.iter().copied().collect();
            let expected: Vec<u16> = shadow.iter().map(|(_, v)| *v).collect();
            assert_eq!(order, expected, "list order diverged from the shadow");
        }

        idx += 2;
    }

    list.check_invariants()
        .unwrap_or_else(|err| panic!("final invariant violation: {err}"));
    let order: Vec<u16> = list.iter().copied().collect();
    let expected: Vec<u16> = shadow.iter().map(|(_, v)| *v).collect();
    assert_eq!(order, expected);
});
