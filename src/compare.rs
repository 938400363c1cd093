//! Comparison strategies consumed by the detectors.
//!
//! Detection is built on two relations over items: *identity* ("are these
//! two values the same logical item") and *content* ("do two identity
//! equal items carry the same payload").  Identity equality is what
//! drives removal, insertion and move detection; content equality is only
//! ever consulted between two items already known to be the same logical
//! item, to decide whether an update needs to be reported.
//!
//! There are two functionally interchangeable ways to supply the
//! relations: the item type implements [`Comparable`] itself, or a
//! [`Compare`] strategy is injected from the outside (for item types you
//! do not own, or when one item type needs several notions of identity).

/// An item that carries its own identity and content comparisons.
///
/// Implement this when the item type itself knows what makes two values
/// the same logical item.  The [`Intrinsic`] strategy adapts any
/// `Comparable` type to the [`Compare`] interface the detectors consume.
pub trait Comparable {
    /// Returns `true` if `other` refers to the same logical item.
    ///
    /// This is not necessarily content equality; a typical
    /// implementation compares a key or id field only.  The relation
    /// must be reflexive and stable for the duration of a detection
    /// call.
    fn same_item(&self, other: &Self) -> bool;

    /// Returns `true` if `other` carries the same content.
    ///
    /// Only ever evaluated between two items already known to be
    /// identity equal.
    fn equal_content(&self, other: &Self) -> bool;
}

/// An externally injected comparison strategy for items of type `T`.
///
/// This is the counterpart to [`Comparable`] for callers that want to
/// supply the two relations from the outside.  [`FnCompare`] builds one
/// from a pair of closures.
pub trait Compare<T> {
    /// Returns `true` if `a` and `b` refer to the same logical item.
    fn same_item(&self, a: &T, b: &T) -> bool;

    /// Returns `true` if `a` and `b` carry the same content.
    fn equal_content(&self, a: &T, b: &T) -> bool;
}

/// A [`Compare`] strategy that defers to the item's own [`Comparable`]
/// implementation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Intrinsic;

impl<T: Comparable> Compare<T> for Intrinsic {
    fn same_item(&self, a: &T, b: &T) -> bool {
        a.same_item(b)
    }

    fn equal_content(&self, a: &T, b: &T) -> bool {
        a.equal_content(b)
    }
}

/// A [`Compare`] strategy built from two closures.
///
/// The first closure decides identity equality, the second content
/// equality.
///
/// ```
/// use reconcile::{Compare, FnCompare};
///
/// let by_first_char = FnCompare::new(
///     |a: &&str, b: &&str| a.chars().next() == b.chars().next(),
///     |a: &&str, b: &&str| a == b,
/// );
/// assert!(by_first_char.same_item(&"alpha", &"arrow"));
/// assert!(!by_first_char.equal_content(&"alpha", &"arrow"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FnCompare<S, C> {
    same_item: S,
    equal_content: C,
}

impl<S, C> FnCompare<S, C> {
    /// Creates a strategy from an identity closure and a content closure.
    pub fn new(same_item: S, equal_content: C) -> FnCompare<S, C> {
        FnCompare {
            same_item,
            equal_content,
        }
    }
}

impl<T, S, C> Compare<T> for FnCompare<S, C>
where
    S: Fn(&T, &T) -> bool,
    C: Fn(&T, &T) -> bool,
{
    fn same_item(&self, a: &T, b: &T) -> bool {
        (self.same_item)(a, b)
    }

    fn equal_content(&self, a: &T, b: &T) -> bool {
        (self.equal_content)(a, b)
    }
}

#[test]
fn test_intrinsic_defers_to_item() {
    struct Record(u32, &'static str);

    impl Comparable for Record {
        fn same_item(&self, other: &Self) -> bool {
            self.0 == other.0
        }
        fn equal_content(&self, other: &Self) -> bool {
            self.1 == other.1
        }
    }

    let a = Record(1, "one");
    let b = Record(1, "uno");
    let c = Record(2, "one");
    assert!(Intrinsic.same_item(&a, &b));
    assert!(!Intrinsic.equal_content(&a, &b));
    assert!(!Intrinsic.same_item(&a, &c));
    assert!(Intrinsic.equal_content(&a, &c));
}

#[test]
fn test_fn_compare() {
    let cmp = FnCompare::new(
        |a: &(u32, u32), b: &(u32, u32)| a.0 == b.0,
        |a: &(u32, u32), b: &(u32, u32)| a.1 == b.1,
    );
    assert!(cmp.same_item(&(1, 2), &(1, 3)));
    assert!(!cmp.equal_content(&(1, 2), &(1, 3)));
    assert!(cmp.equal_content(&(1, 2), &(2, 2)));
}
