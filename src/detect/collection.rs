//! Change detection over unordered collections.
//!
//! Items carry no position here, so only insertions, removals and
//! content updates are reported and records hold items only.  Emission
//! order is all removals, then all insertions, then all updates, each
//! group in scan order.

use crate::changes::CollectionChange;
use crate::compare::{Comparable, Compare, Intrinsic};
use crate::detect::utils::{contains, index_of, insert_clamped};

/// Detects changes between two unordered snapshots with an injected
/// comparison strategy.
///
/// The inputs are scanned with `cmp` deciding identity and content
/// equality; neither slice is mutated.
pub fn detect<'a, T, C>(
    cmp: &C,
    new_items: &'a [T],
    old_items: &'a [T],
) -> Vec<CollectionChange<'a, T>>
where
    C: Compare<T> + ?Sized,
{
    let new_copy: Vec<&T> = new_items.iter().collect();
    let mut old_copy: Vec<&T> = old_items.iter().collect();
    let mut changes = Vec::new();

    // removals; dropped from the working copy so the later phases never
    // re-examine them
    let mut i = 0;
    while i < old_copy.len() {
        if contains(cmp, &new_copy, old_copy[i]) {
            i += 1;
        } else {
            changes.push(CollectionChange::Removed {
                old_item: old_copy.remove(i),
            });
        }
    }

    // insertions; each inserted item is also spliced into the working
    // copy at its new-side index so the update phase can pair items up
    // by identity
    for (i, &new_item) in new_copy.iter().enumerate() {
        if !contains(cmp, &old_copy, new_item) {
            changes.push(CollectionChange::Inserted { new_item });
            insert_clamped(&mut old_copy, i, new_item);
        }
    }

    // content updates
    for &new_item in &new_copy {
        if let Some(old_pos) = index_of(cmp, &old_copy, new_item) {
            let old_item = old_copy[old_pos];
            if !cmp.equal_content(new_item, old_item) {
                changes.push(CollectionChange::Updated { old_item, new_item });
            }
        }
    }

    changes
}

/// Shortcut for detecting unordered changes between slices of
/// [`Comparable`] items.
pub fn detect_comparable<'a, T: Comparable>(
    new_items: &'a [T],
    old_items: &'a [T],
) -> Vec<CollectionChange<'a, T>> {
    detect(&Intrinsic, new_items, old_items)
}

#[cfg(test)]
use crate::compare::FnCompare;

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
fn test_equal_snapshots() {
    let items = [Item(1, "item1"), Item(2, "item2")];
    let changes = detect_comparable(&items, &items);
    assert!(changes.is_empty());
}

#[test]
fn test_insert() {
    let old: [Item; 0] = [];
    let new = [Item(1, "item1")];
    let changes = detect_comparable(&new, &old);
    assert_eq!(changes, vec![CollectionChange::Inserted { new_item: &new[0] }]);
}

#[test]
fn test_remove() {
    let old = [Item(1, "item1")];
    let new: [Item; 0] = [];
    let changes = detect_comparable(&new, &old);
    assert_eq!(changes, vec![CollectionChange::Removed { old_item: &old[0] }]);
}

#[test]
fn test_update() {
    let old = [Item(1, "item1")];
    let new = [Item(1, "item1b")];
    let changes = detect_comparable(&new, &old);
    assert_eq!(
        changes,
        vec![CollectionChange::Updated {
            old_item: &old[0],
            new_item: &new[0],
        }]
    );
}

#[test]
fn test_combined() {
    let old = [Item(1, "item1"), Item(2, "item2"), Item(3, "item3")];
    let new = [Item(2, "item2b"), Item(4, "item4")];
    let changes = detect_comparable(&new, &old);
    assert_eq!(
        changes,
        vec![
            CollectionChange::Removed { old_item: &old[0] },
            CollectionChange::Removed { old_item: &old[2] },
            CollectionChange::Inserted { new_item: &new[1] },
            CollectionChange::Updated {
                old_item: &old[1],
                new_item: &new[0],
            },
        ]
    );
}

#[test]
fn test_injected_comparator() {
    let cmp = FnCompare::new(
        |a: &Item, b: &Item| a.0 == b.0,
        |a: &Item, b: &Item| a.1 == b.1,
    );
    let old = [Item(1, "item1")];
    let new = [Item(1, "item1b"), Item(2, "item2")];
    let changes = detect(&cmp, &new, &old);
    assert_eq!(
        changes,
        vec![
            CollectionChange::Inserted { new_item: &new[1] },
            CollectionChange::Updated {
                old_item: &old[0],
                new_item: &new[0],
            },
        ]
    );
}

#[test]
fn test_inputs_untouched() {
    let old = vec![Item(1, "item1"), Item(2, "item2")];
    let new = vec![Item(2, "item2b")];
    let old_before = old.clone();
    let new_before = new.clone();
    detect_comparable(&new, &old);
    assert_eq!(old, old_before);
    assert_eq!(new, new_before);
}
