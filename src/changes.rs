//! The change records produced by the detectors.
//!
//! Each detected edit is one immutable record: a tagged variant carrying
//! references into the caller's input slices plus, for the ordered
//! variants, the position(s) the edit refers to.  How those positions
//! are to be interpreted depends on the
//! [`PositionMode`](crate::detect::PositionMode) the detection ran with.
//!
//! Records never own the items; they borrow from the slices handed to
//! the detector and are plain values from then on.

use std::fmt;

/// The tag of a change.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Ord, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ChangeTag {
    /// The item only exists in the new snapshot.
    Inserted,
    /// The item only exists in the old snapshot.
    Removed,
    /// The item exists in both snapshots but its content differs.
    Updated,
    /// The item exists in both snapshots at different positions.
    ///
    /// Only ever produced by the ordered detectors.
    Moved,
}

impl fmt::Display for ChangeTag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            match &self {
                ChangeTag::Inserted => '+',
                ChangeTag::Removed => '-',
                ChangeTag::Updated => '~',
                ChangeTag::Moved => '>',
            }
        )
    }
}

/// A single detected change in an unordered collection.
///
/// Unordered collections have no position semantics, so records carry
/// items only and there is no moved variant.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "tag", rename_all = "snake_case"))]
pub enum CollectionChange<'a, T> {
    /// An item that only exists in the new snapshot.
    Inserted {
        /// The inserted item.
        new_item: &'a T,
    },
    /// An item that only exists in the old snapshot.
    Removed {
        /// The removed item.
        old_item: &'a T,
    },
    /// An item present in both snapshots whose content differs.
    Updated {
        /// The item as it was in the old snapshot.
        old_item: &'a T,
        /// The item as it is in the new snapshot.
        new_item: &'a T,
    },
}

impl<'a, T> CollectionChange<'a, T> {
    /// Returns the change tag.
    pub fn tag(&self) -> ChangeTag {
        match self {
            CollectionChange::Inserted { .. } => ChangeTag::Inserted,
            CollectionChange::Removed { .. } => ChangeTag::Removed,
            CollectionChange::Updated { .. } => ChangeTag::Updated,
        }
    }

    /// Returns the old item if this change carries one.
    pub fn old_item(&self) -> Option<&'a T> {
        match *self {
            CollectionChange::Inserted { .. } => None,
            CollectionChange::Removed { old_item } => Some(old_item),
            CollectionChange::Updated { old_item, .. } => Some(old_item),
        }
    }

    /// Returns the new item if this change carries one.
    pub fn new_item(&self) -> Option<&'a T> {
        match *self {
            CollectionChange::Inserted { new_item } => Some(new_item),
            CollectionChange::Removed { .. } => None,
            CollectionChange::Updated { new_item, .. } => Some(new_item),
        }
    }
}

/// A single detected change in an ordered list.
///
/// Positions are indices into the old or new list.  Whether they refer
/// to the original, untouched lists or to a working copy mutated by the
/// preceding changes depends on the
/// [`PositionMode`](crate::detect::PositionMode) the detection ran with.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "tag", rename_all = "snake_case"))]
pub enum ListChange<'a, T> {
    /// An item that only exists in the new list.
    Inserted {
        /// The inserted item.
        new_item: &'a T,
        /// The position the item is inserted at.
        new_position: usize,
    },
    /// An item that only exists in the old list.
    Removed {
        /// The removed item.
        old_item: &'a T,
        /// The position the item is removed from.
        old_position: usize,
    },
    /// An item present in both lists whose content differs.
    Updated {
        /// The item as it was in the old list.
        old_item: &'a T,
        /// The item as it is in the new list.
        new_item: &'a T,
        /// The position of the updated item in the new list.
        new_position: usize,
    },
    /// An item present in both lists at different positions.
    Moved {
        /// The item as it was in the old list.
        old_item: &'a T,
        /// The item as it is in the new list.
        new_item: &'a T,
        /// The position the item moves away from.
        old_position: usize,
        /// The position the item moves to.
        new_position: usize,
    },
}

impl<'a, T> ListChange<'a, T> {
    /// Returns the change tag.
    pub fn tag(&self) -> ChangeTag {
        match self {
            ListChange::Inserted { .. } => ChangeTag::Inserted,
            ListChange::Removed { .. } => ChangeTag::Removed,
            ListChange::Updated { .. } => ChangeTag::Updated,
            ListChange::Moved { .. } => ChangeTag::Moved,
        }
    }

    /// Returns the old item if this change carries one.
    pub fn old_item(&self) -> Option<&'a T> {
        match *self {
            ListChange::Inserted { .. } => None,
            ListChange::Removed { old_item, .. } => Some(old_item),
            ListChange::Updated { old_item, .. } => Some(old_item),
            ListChange::Moved { old_item, .. } => Some(old_item),
        }
    }

    /// Returns the new item if this change carries one.
    pub fn new_item(&self) -> Option<&'a T> {
        match *self {
            ListChange::Inserted { new_item, .. } => Some(new_item),
            ListChange::Removed { .. } => None,
            ListChange::Updated { new_item, .. } => Some(new_item),
            ListChange::Moved { new_item, .. } => Some(new_item),
        }
    }

    /// Returns the old position if this change carries one.
    pub fn old_position(&self) -> Option<usize> {
        match *self {
            ListChange::Removed { old_position, .. } => Some(old_position),
            ListChange::Moved { old_position, .. } => Some(old_position),
            _ => None,
        }
    }

    /// Returns the new position if this change carries one.
    pub fn new_position(&self) -> Option<usize> {
        match *self {
            ListChange::Inserted { new_position, .. } => Some(new_position),
            ListChange::Updated { new_position, .. } => Some(new_position),
            ListChange::Moved { new_position, .. } => Some(new_position),
            ListChange::Removed { .. } => None,
        }
    }
}

#[test]
fn test_change_tag_display() {
    assert_eq!(ChangeTag::Inserted.to_string(), "+");
    assert_eq!(ChangeTag::Removed.to_string(), "-");
    assert_eq!(ChangeTag::Updated.to_string(), "~");
    assert_eq!(ChangeTag::Moved.to_string(), ">");
}

#[test]
fn test_collection_change_accessors() {
    let old = "old";
    let new = "new";

    let inserted = CollectionChange::Inserted { new_item: &new };
    assert_eq!(inserted.tag(), ChangeTag::Inserted);
    assert_eq!(inserted.old_item(), None);
    assert_eq!(inserted.new_item(), Some(&new));

    let removed = CollectionChange::Removed { old_item: &old };
    assert_eq!(removed.tag(), ChangeTag::Removed);
    assert_eq!(removed.old_item(), Some(&old));
    assert_eq!(removed.new_item(), None);

    let updated = CollectionChange::Updated {
        old_item: &old,
        new_item: &new,
    };
    assert_eq!(updated.tag(), ChangeTag::Updated);
    assert_eq!(updated.old_item(), Some(&old));
    assert_eq!(updated.new_item(), Some(&new));
}

#[test]
fn test_list_change_accessors() {
    let old = "old";
    let new = "new";

    let inserted = ListChange::Inserted {
        new_item: &new,
        new_position: 2,
    };
    assert_eq!(inserted.tag(), ChangeTag::Inserted);
    assert_eq!(inserted.old_item(), None);
    assert_eq!(inserted.new_item(), Some(&new));
    assert_eq!(inserted.old_position(), None);
    assert_eq!(inserted.new_position(), Some(2));

    let removed = ListChange::Removed {
        old_item: &old,
        old_position: 1,
    };
    assert_eq!(removed.tag(), ChangeTag::Removed);
    assert_eq!(removed.old_item(), Some(&old));
    assert_eq!(removed.new_item(), None);
    assert_eq!(removed.old_position(), Some(1));
    assert_eq!(removed.new_position(), None);

    let updated = ListChange::Updated {
        old_item: &old,
        new_item: &new,
        new_position: 3,
    };
    assert_eq!(updated.tag(), ChangeTag::Updated);
    assert_eq!(updated.old_item(), Some(&old));
    assert_eq!(updated.new_item(), Some(&new));
    assert_eq!(updated.old_position(), None);
    assert_eq!(updated.new_position(), Some(3));

    let moved = ListChange::Moved {
        old_item: &old,
        new_item: &new,
        old_position: 0,
        new_position: 4,
    };
    assert_eq!(moved.tag(), ChangeTag::Moved);
    assert_eq!(moved.old_item(), Some(&old));
    assert_eq!(moved.new_item(), Some(&new));
    assert_eq!(moved.old_position(), Some(0));
    assert_eq!(moved.new_position(), Some(4));
}

#[cfg(feature = "serde")]
#[test]
fn test_serde_serialization() {
    let change: ListChange<'_, u32> = ListChange::Moved {
        old_item: &1,
        new_item: &1,
        old_position: 0,
        new_position: 2,
    };
    assert_eq!(
        serde_json::to_string(&change).unwrap(),
        r#"{"tag":"moved","old_item":1,"new_item":1,"old_position":0,"new_position":2}"#
    );

    let tag: ChangeTag = serde_json::from_str(r#""inserted""#).unwrap();
    assert_eq!(tag, ChangeTag::Inserted);
}
