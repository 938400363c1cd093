//! Ordered change detection with sequential positions.
//!
//! The records produced here form a replayable script: applying them in
//! order to a mutable copy of the old list, at the position each record
//! specifies, reproduces the new list.  Every position is valid at the
//! moment its change is conceptually applied, which makes this the
//! variant to feed APIs that apply one edit at a time (list adapters,
//! incremental renderers and the like).
//!
//! Because each change shifts the working list that the following
//! changes' positions are computed against, all four phases here
//! maintain one shared working copy of the old list: removals delete
//! from it, insertions splice into it, and the move pass physically
//! relocates items within it while iterating over a snapshot of the
//! candidates.  The scan order (first match, left to right,
//! snapshot-then-mutate) is part of the contract and must not be
//! reordered.

use crate::changes::ListChange;
use crate::compare::{Comparable, Compare, Intrinsic};
use crate::detect::utils::{contains, index_of, insert_clamped};

/// Detects changes between two ordered snapshots with an injected
/// comparison strategy, reporting sequentially replayable positions.
pub fn detect<'a, T, C>(cmp: &C, new_items: &'a [T], old_items: &'a [T]) -> Vec<ListChange<'a, T>>
where
    C: Compare<T> + ?Sized,
{
    let new_copy: Vec<&T> = new_items.iter().collect();
    let mut old_copy: Vec<&T> = old_items.iter().collect();
    let mut changes = Vec::new();

    // removals; deleting as we go keeps every reported index valid at
    // replay time, and the next element shifts into the index we just
    // examined
    let mut i = 0;
    while i < old_copy.len() {
        let old_item = old_copy[i];
        if contains(cmp, &new_copy, old_item) {
            i += 1;
        } else {
            old_copy.remove(i);
            changes.push(ListChange::Removed {
                old_item,
                old_position: i,
            });
        }
    }

    // insertions; splicing each inserted item into the working copy
    // keeps its shape congruent with the new list so the later phases
    // locate correct positions
    for (i, &new_item) in new_copy.iter().enumerate() {
        if !contains(cmp, &old_copy, new_item) {
            changes.push(ListChange::Inserted {
                new_item,
                new_position: i.min(old_copy.len()),
            });
            insert_clamped(&mut old_copy, i, new_item);
        }
    }

    // moves; iterate over a snapshot of the candidates while relocating
    // within the live working copy, so each subsequent check sees the
    // corrected layout
    let items_to_move = old_copy.clone();
    for &item in &items_to_move {
        if let (Some(pos1), Some(pos2)) = (
            index_of(cmp, &old_copy, item),
            index_of(cmp, &new_copy, item),
        ) {
            if pos2 < items_to_move.len() && pos1 != pos2 {
                changes.push(ListChange::Moved {
                    old_item: old_copy[pos1],
                    new_item: new_copy[pos2],
                    old_position: pos1,
                    new_position: pos2,
                });
                let moved = old_copy.remove(pos1);
                insert_clamped(&mut old_copy, pos2, moved);
            }
        }
    }

    // content updates, positions relative to the new list
    for (pos, &new_item) in new_copy.iter().enumerate() {
        if let Some(old_pos) = index_of(cmp, &old_copy, new_item) {
            let old_item = old_copy[old_pos];
            if !cmp.equal_content(new_item, old_item) {
                changes.push(ListChange::Updated {
                    old_item,
                    new_item,
                    new_position: pos,
                });
            }
        }
    }

    changes
}

/// Shortcut for detecting sequential-position changes between slices of
/// [`Comparable`] items.
pub fn detect_comparable<'a, T: Comparable>(
    new_items: &'a [T],
    old_items: &'a [T],
) -> Vec<ListChange<'a, T>> {
    detect(&Intrinsic, new_items, old_items)
}

#[cfg(test)]
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
struct Item(u32, &'static str);

#[cfg(test)]
impl Comparable for Item {
    fn same_item(&self, other: &Self) -> bool {
        self.0 == other.0
    }
    fn equal_content(&self, other: &Self) -> bool {
        self.1 == other.1
    }
}

/// Replays changes against a copy of the old list, applying each record
/// at the position it specifies.
#[cfg(test)]
fn replay<'a>(changes: &[ListChange<'a, Item>], old_items: &'a [Item]) -> Vec<Item> {
    let mut working: Vec<&Item> = old_items.iter().collect();
    for change in changes {
        match *change {
            ListChange::Removed { old_position, .. } => {
                working.remove(old_position);
            }
            ListChange::Inserted {
                new_item,
                new_position,
            } => {
                working.insert(new_position, new_item);
            }
            ListChange::Moved {
                old_position,
                new_position,
                ..
            } => {
                let item = working.remove(old_position);
                let pos = new_position.min(working.len());
                working.insert(pos, item);
            }
            ListChange::Updated {
                new_item,
                new_position,
                ..
            } => {
                working[new_position] = new_item;
            }
        }
    }
    working.into_iter().copied().collect()
}

#[test]
fn test_empty() {
    let changes = detect_comparable::<Item>(&[], &[]);
    assert!(changes.is_empty());
}

#[test]
fn test_equal_lists() {
    let items = [Item(1, "item1"), Item(2, "item2")];
    let changes = detect_comparable(&items, &items);
    assert!(changes.is_empty());
}

#[test]
fn test_insert() {
    let old: [Item; 0] = [];
    let new = [Item(1, "item1")];
    let changes = detect_comparable(&new, &old);
    assert_eq!(
        changes,
        vec![ListChange::Inserted {
            new_item: &new[0],
            new_position: 0,
        }]
    );
}

#[test]
fn test_insert_at_beginning() {
    let old = [Item(1, "item1")];
    let new = [Item(2, "item2"), Item(1, "item1")];
    let changes = detect_comparable(&new, &old);
    assert_eq!(
        changes,
        vec![ListChange::Inserted {
            new_item: &new[0],
            new_position: 0,
        }]
    );
}

#[test]
fn test_insert_at_end() {
    let old = [Item(1, "item1")];
    let new = [Item(1, "item1"), Item(2, "item2")];
    let changes = detect_comparable(&new, &old);
    assert_eq!(
        changes,
        vec![ListChange::Inserted {
            new_item: &new[1],
            new_position: 1,
        }]
    );
}

#[test]
fn test_multiple_inserts() {
    let old = [Item(1, "item1")];
    let new = [Item(3, "item3"), Item(1, "item1"), Item(2, "item2")];
    let changes = detect_comparable(&new, &old);
    assert_eq!(
        changes,
        vec![
            ListChange::Inserted {
                new_item: &new[0],
                new_position: 0,
            },
            ListChange::Inserted {
                new_item: &new[2],
                new_position: 2,
            },
        ]
    );
}

#[test]
fn test_remove() {
    let old = [Item(1, "item1")];
    let new: [Item; 0] = [];
    let changes = detect_comparable(&new, &old);
    assert_eq!(
        changes,
        vec![ListChange::Removed {
            old_item: &old[0],
            old_position: 0,
        }]
    );
}

#[test]
fn test_multiple_removes_use_shifted_positions() {
    let old = [Item(3, "item3"), Item(1, "item1"), Item(2, "item2")];
    let new = [Item(1, "item1")];
    let changes = detect_comparable(&new, &old);
    // item2 sits at index 1 once item3 is gone
    assert_eq!(
        changes,
        vec![
            ListChange::Removed {
                old_item: &old[0],
                old_position: 0,
            },
            ListChange::Removed {
                old_item: &old[2],
                old_position: 1,
            },
        ]
    );
}

#[test]
fn test_swap_reports_single_move() {
    let old = [Item(1, "item1"), Item(2, "item2")];
    let new = [Item(2, "item2"), Item(1, "item1")];
    let changes = detect_comparable(&new, &old);
    // relocating item1 displaces item2 implicitly
    assert_eq!(
        changes,
        vec![ListChange::Moved {
            old_item: &old[0],
            new_item: &new[1],
            old_position: 0,
            new_position: 1,
        }]
    );
}

#[test]
fn test_reversal() {
    let old = [Item(1, "item1"), Item(2, "item2"), Item(3, "item3")];
    let new = [Item(3, "item3"), Item(2, "item2"), Item(1, "item1")];
    let changes = detect_comparable(&new, &old);
    assert_eq!(
        changes,
        vec![
            ListChange::Moved {
                old_item: &old[0],
                new_item: &new[2],
                old_position: 0,
                new_position: 2,
            },
            ListChange::Moved {
                old_item: &old[1],
                new_item: &new[1],
                old_position: 0,
                new_position: 1,
            },
        ]
    );
}

#[test]
fn test_update() {
    let old = [Item(1, "item1"), Item(2, "item2")];
    let new = [Item(1, "item1"), Item(2, "item2b")];
    let changes = detect_comparable(&new, &old);
    assert_eq!(
        changes,
        vec![ListChange::Updated {
            old_item: &old[1],
            new_item: &new[1],
            new_position: 1,
        }]
    );
}

#[test]
fn test_move_and_update_are_separate_records() {
    let old = [Item(1, "item1"), Item(2, "item2")];
    let new = [Item(2, "item2b"), Item(1, "item1")];
    let changes = detect_comparable(&new, &old);
    assert_eq!(
        changes,
        vec![
            ListChange::Moved {
                old_item: &old[0],
                new_item: &new[1],
                old_position: 0,
                new_position: 1,
            },
            ListChange::Updated {
                old_item: &old[1],
                new_item: &new[0],
                new_position: 0,
            },
        ]
    );
}

#[test]
fn test_combined() {
    let old = [
        Item(1, "item1"),
        Item(2, "item2"),
        Item(3, "item3"),
        Item(4, "item4"),
    ];
    let new = [
        Item(3, "item3"),
        Item(2, "item2b"),
        Item(1, "item1"),
        Item(5, "item5"),
    ];
    let changes = detect_comparable(&new, &old);

    fn describe(changes: &[ListChange<'_, Item>]) -> Vec<String> {
        changes
            .iter()
            .map(|change| match *change {
                ListChange::Inserted {
                    new_item,
                    new_position,
                } => format!("inserted {} at {}", new_item.1, new_position),
                ListChange::Removed {
                    old_item,
                    old_position,
                } => format!("removed {} from {}", old_item.1, old_position),
                ListChange::Updated {
                    new_item,
                    new_position,
                    ..
                } => format!("updated {} at {}", new_item.1, new_position),
                ListChange::Moved {
                    old_item,
                    old_position,
                    new_position,
                    ..
                } => format!("moved {} from {} to {}", old_item.1, old_position, new_position),
            })
            .collect()
    }

    insta::assert_yaml_snapshot!(&describe(&changes), @r###"
    ---
    - removed item4 from 3
    - inserted item5 at 3
    - moved item1 from 0 to 2
    - moved item2 from 0 to 1
    - updated item2b at 1
    "###);
}

#[test]
fn test_replay_reproduces_new_list() {
    let scenarios: &[(&[Item], &[Item])] = &[
        (&[], &[Item(1, "item1")]),
        (&[Item(1, "item1")], &[]),
        (
            &[Item(1, "item1"), Item(2, "item2")],
            &[Item(2, "item2"), Item(1, "item1")],
        ),
        (
            &[Item(1, "item1"), Item(2, "item2"), Item(3, "item3")],
            &[Item(3, "item3"), Item(2, "item2"), Item(1, "item1")],
        ),
        (
            &[
                Item(1, "item1"),
                Item(2, "item2"),
                Item(3, "item3"),
                Item(4, "item4"),
            ],
            &[
                Item(3, "item3"),
                Item(2, "item2b"),
                Item(1, "item1"),
                Item(5, "item5"),
            ],
        ),
        (
            &[
                Item(1, "item1"),
                Item(2, "item2"),
                Item(3, "item3"),
                Item(4, "item4"),
                Item(5, "item5"),
            ],
            &[
                Item(4, "item4"),
                Item(1, "item1"),
                Item(5, "item5"),
                Item(2, "item2"),
                Item(3, "item3"),
            ],
        ),
        (
            &[Item(1, "item1"), Item(2, "item2"), Item(3, "item3")],
            &[Item(2, "item2"), Item(4, "item4"), Item(1, "item1")],
        ),
    ];

    for (old, new) in scenarios {
        let changes = detect_comparable(new, old);
        assert_eq!(&replay(&changes, old), new, "old: {:?} new: {:?}", old, new);
    }
}

#[test]
fn test_inputs_untouched() {
    let old = vec![Item(1, "item1"), Item(2, "item2"), Item(3, "item3")];
    let new = vec![Item(3, "item3"), Item(1, "item1b")];
    let old_before = old.clone();
    let new_before = new.clone();
    detect_comparable(&new, &old);
    assert_eq!(old, old_before);
    assert_eq!(new, new_before);
}
