//! Identity scan helpers shared by the detectors.
//!
//! The working copies the detectors mutate are vectors of references
//! into the caller's slices, so membership and position lookups here
//! operate on `&[&T]`.  All scans are left to right and first match
//! wins, which is what gives the detectors their documented tie policy
//! for duplicate identities.

use crate::compare::Compare;

/// Returns `true` if `items` contains an item identity equal to `probe`.
pub(crate) fn contains<T, C>(cmp: &C, items: &[&T], probe: &T) -> bool
where
    C: Compare<T> + ?Sized,
{
    items.iter().any(|item| cmp.same_item(probe, item))
}

/// Returns the index of the first item in `items` identity equal to
/// `probe`.
pub(crate) fn index_of<T, C>(cmp: &C, items: &[&T], probe: &T) -> Option<usize>
where
    C: Compare<T> + ?Sized,
{
    items.iter().position(|item| cmp.same_item(probe, item))
}

/// Inserts `item` at `index`, clamped to the current length.
pub(crate) fn insert_clamped<'a, T>(items: &mut Vec<&'a T>, index: usize, item: &'a T) {
    let index = index.min(items.len());
    items.insert(index, item);
}

#[cfg(test)]
use crate::compare::FnCompare;

#[test]
fn test_first_match_wins() {
    let cmp = FnCompare::new(
        |a: &(u32, u32), b: &(u32, u32)| a.0 == b.0,
        |a: &(u32, u32), b: &(u32, u32)| a.1 == b.1,
    );
    let a = (1, 10);
    let b = (1, 20);
    let c = (2, 30);
    let items = [&a, &b, &c];
    assert_eq!(index_of(&cmp, &items, &(1, 99)), Some(0));
    assert_eq!(index_of(&cmp, &items, &(2, 99)), Some(2));
    assert_eq!(index_of(&cmp, &items, &(3, 99)), None);
    assert!(contains(&cmp, &items, &(1, 99)));
    assert!(!contains(&cmp, &items, &(3, 99)));
}

#[test]
fn test_insert_clamped() {
    let a = 1;
    let b = 2;
    let c = 3;
    let mut items = vec![&a, &b];
    insert_clamped(&mut items, 1, &c);
    assert_eq!(items, vec![&a, &c, &b]);
    insert_clamped(&mut items, 10, &c);
    assert_eq!(items, vec![&a, &c, &b, &c]);
}
