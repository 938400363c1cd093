//! This crate implements change detection between two snapshots of a
//! dataset.  Given an "old" and a "new" sequence of items it produces the
//! discrete edits (insertions, removals, content updates and positional
//! moves) that turn the old snapshot into the new one, which is the
//! building block for incremental UI updates and synchronization layers
//! that must not recompute everything from scratch.
//!
//! The crate is split into three levels:
//!
//! * [`compare`]: The comparison seam.  Detection needs to know when two
//!   values are the same logical item and when two matched items carry
//!   the same content; items can provide this themselves or it can be
//!   injected from the outside.
//! * [`changes`]: The change records returned by the detectors, one
//!   tagged variant per edit kind.
//! * [`detect`]: The detection algorithms themselves, in three variants
//!   that differ in how (and whether) positions are reported.
//!
//! # Example
//!
//! ```
//! use reconcile::{detect_list_changes, Comparable, Intrinsic, ListChange, PositionMode};
//!
//! #[derive(Debug, PartialEq)]
//! struct Task {
//!     id: u32,
//!     title: &'static str,
//! }
//!
//! impl Comparable for Task {
//!     fn same_item(&self, other: &Self) -> bool {
//!         self.id == other.id
//!     }
//!     fn equal_content(&self, other: &Self) -> bool {
//!         self.title == other.title
//!     }
//! }
//!
//! let old = [Task { id: 1, title: "write" }, Task { id: 2, title: "ship" }];
//! let new = [Task { id: 2, title: "ship" }, Task { id: 1, title: "rewrite" }];
//! let changes = detect_list_changes(PositionMode::Sequential, &Intrinsic, &new, &old);
//! assert!(matches!(changes[0], ListChange::Moved { .. }));
//! assert!(matches!(changes[1], ListChange::Updated { .. }));
//! ```
//!
//! # Serde
//!
//! With the optional `serde` feature the change records implement
//! `Serialize` (for item types that do) and [`ChangeTag`] implements both
//! `Serialize` and `Deserialize`.
pub mod changes;
pub mod compare;
pub mod detect;

pub use crate::changes::{ChangeTag, CollectionChange, ListChange};
pub use crate::compare::{Comparable, Compare, FnCompare, Intrinsic};
pub use crate::detect::{detect_collection_changes, detect_list_changes, PositionMode};
