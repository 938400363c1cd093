//! The change detection algorithms.
//!
//! All three detectors share one shape: given a new and an old slice of
//! items they produce the change records in four fixed phases — removals,
//! insertions, moves (ordered variants only), updates — executed in that
//! order against private working copies of the inputs.  The caller's
//! slices are never mutated and every call is independent, so detection
//! is safe to run from multiple threads as long as the items themselves
//! are not mutated concurrently.
//!
//! Which detector to use depends on the container semantics:
//!
//! * [`collection`]: unordered data, identity and content only.
//! * [`independent`]: ordered data, every reported position refers to
//!   the original old or new list.
//! * [`sequential`]: ordered data, positions are valid when the changes
//!   are replayed one after another against a mutating copy of the old
//!   list.
//!
//! The detectors use a direct position scan, not a minimal alignment:
//! they do not guarantee the fewest possible edits and make no attempt
//! to minimize the move count.  Matching is first match wins, left to
//! right, so duplicate identities pair up in scan order.  Cost is
//! `O(n * m)` comparisons.
//!
//! Most callers go through the [`detect_collection_changes`] and
//! [`detect_list_changes`] entry points which abstract over the ordered
//! variants with [`PositionMode`].

mod utils;

pub mod collection;
pub mod independent;
pub mod sequential;

use crate::changes::{CollectionChange, ListChange};
use crate::compare::{Comparable, Compare};

/// How positions in list change records are to be interpreted.
#[derive(Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub enum PositionMode {
    /// Every position refers to the original, untouched old or new list.
    Independent,
    /// Positions are valid at the moment each change is applied, when
    /// the changes are replayed in order against a mutating copy of the
    /// old list.
    Sequential,
}

impl Default for PositionMode {
    /// Returns the default mode ([`PositionMode::Independent`]).
    fn default() -> PositionMode {
        PositionMode::Independent
    }
}

/// Detects changes between two unordered snapshots.
///
/// This is the entry point for the unordered detector with an injected
/// comparison strategy; see [`collection::detect`].
pub fn detect_collection_changes<'a, T, C>(
    cmp: &C,
    new_items: &'a [T],
    old_items: &'a [T],
) -> Vec<CollectionChange<'a, T>>
where
    C: Compare<T> + ?Sized,
{
    collection::detect(cmp, new_items, old_items)
}

/// Shortcut for detecting unordered changes between slices of
/// [`Comparable`] items.
pub fn detect_collection_changes_comparable<'a, T: Comparable>(
    new_items: &'a [T],
    old_items: &'a [T],
) -> Vec<CollectionChange<'a, T>> {
    collection::detect_comparable(new_items, old_items)
}

/// Detects changes between two ordered snapshots with the given position
/// mode.
///
/// Dispatches to [`independent::detect`] or [`sequential::detect`].
pub fn detect_list_changes<'a, T, C>(
    mode: PositionMode,
    cmp: &C,
    new_items: &'a [T],
    old_items: &'a [T],
) -> Vec<ListChange<'a, T>>
where
    C: Compare<T> + ?Sized,
{
    match mode {
        PositionMode::Independent => independent::detect(cmp, new_items, old_items),
        PositionMode::Sequential => sequential::detect(cmp, new_items, old_items),
    }
}

/// Shortcut for detecting ordered changes between slices of
/// [`Comparable`] items.
pub fn detect_list_changes_comparable<'a, T: Comparable>(
    mode: PositionMode,
    new_items: &'a [T],
    old_items: &'a [T],
) -> Vec<ListChange<'a, T>> {
    match mode {
        PositionMode::Independent => independent::detect_comparable(new_items, old_items),
        PositionMode::Sequential => sequential::detect_comparable(new_items, old_items),
    }
}
