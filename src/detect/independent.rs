//! Ordered change detection with independent positions.
//!
//! Every position in a record produced here is an index into the
//! *original*, unmodified old or new list, unaffected by the other
//! changes.  That makes the records easy to interpret on their own but
//! means they cannot be replayed one by one; use
//! [`sequential`](crate::detect::sequential) for that.
//!
//! Every identity match whose index differs between the two lists is
//! reported as moved.  There is no suppression of moves that are implied
//! by other moves, so a swap of two items yields two move records.

use crate::changes::ListChange;
use crate::compare::{Comparable, Compare, Intrinsic};
use crate::detect::utils::{contains, index_of};

/// Detects changes between two ordered snapshots with an injected
/// comparison strategy, reporting independent positions.
pub fn detect<'a, T, C>(cmp: &C, new_items: &'a [T], old_items: &'a [T]) -> Vec<ListChange<'a, T>>
where
    C: Compare<T> + ?Sized,
{
    let new_copy: Vec<&T> = new_items.iter().collect();
    let old_copy: Vec<&T> = old_items.iter().collect();
    let mut changes = Vec::new();

    // removals; the working copy is left untouched so that old
    // positions stay stable for the later phases
    for (i, &old_item) in old_copy.iter().enumerate() {
        if !contains(cmp, &new_copy, old_item) {
            changes.push(ListChange::Removed {
                old_item,
                old_position: i,
            });
        }
    }

    // insertions
    for (i, &new_item) in new_copy.iter().enumerate() {
        if !contains(cmp, &old_copy, new_item) {
            changes.push(ListChange::Inserted {
                new_item,
                new_position: i,
            });
        }
    }

    // moves; every identity match with a position delta is reported
    for (i, &old_item) in old_copy.iter().enumerate() {
        if let Some(pos2) = index_of(cmp, &new_copy, old_item) {
            if i != pos2 {
                changes.push(ListChange::Moved {
                    old_item,
                    new_item: new_copy[pos2],
                    old_position: i,
                    new_position: pos2,
                });
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

/// Shortcut for detecting independent-position changes between slices
/// of [`Comparable`] items.
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
fn test_insert_at_beginning_shifts_the_rest() {
    let old = [Item(1, "item1")];
    let new = [Item(2, "item2"), Item(1, "item1")];
    let changes = detect_comparable(&new, &old);
    // the surviving item ends up at index 1 of the new list, which is a
    // position delta against its old index and therefore a move
    assert_eq!(
        changes,
        vec![
            ListChange::Inserted {
                new_item: &new[0],
                new_position: 0,
            },
            ListChange::Moved {
                old_item: &old[0],
                new_item: &new[1],
                old_position: 0,
                new_position: 1,
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
fn test_remove_positions_stay_original() {
    let old = [Item(1, "item1"), Item(2, "item2"), Item(3, "item3")];
    let new = [Item(2, "item2")];
    let changes = detect_comparable(&new, &old);
    assert_eq!(
        changes,
        vec![
            ListChange::Removed {
                old_item: &old[0],
                old_position: 0,
            },
            ListChange::Removed {
                old_item: &old[2],
                old_position: 2,
            },
            ListChange::Moved {
                old_item: &old[1],
                new_item: &new[0],
                old_position: 1,
                new_position: 0,
            },
        ]
    );
}

#[test]
fn test_swap_reports_both_moves() {
    let old = [Item(1, "item1"), Item(2, "item2")];
    let new = [Item(2, "item2"), Item(1, "item1")];
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
            ListChange::Moved {
                old_item: &old[1],
                new_item: &new[0],
                old_position: 1,
                new_position: 0,
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
    - moved item3 from 2 to 0
    - updated item2b at 1
    "###);
}

#[test]
fn test_positions_refer_to_original_lists() {
    let old = [Item(1, "item1"), Item(2, "item2"), Item(3, "item3")];
    let new = [Item(4, "item4"), Item(3, "item3"), Item(5, "item5")];
    let changes = detect_comparable(&new, &old);
    for change in &changes {
        if let Some(pos) = change.old_position() {
            let old_item = change.old_item().unwrap();
            assert!(old[pos].same_item(old_item));
        }
        if let Some(pos) = change.new_position() {
            if let Some(new_item) = change.new_item() {
                assert!(new[pos].same_item(new_item));
            }
        }
    }
}
