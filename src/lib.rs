//! # settheory
//!
//! settheory models the objects of naive set theory in Rust. An object is
//! either an atom, an opaque named thing, or a set of other objects. Sets are
//! trees: each set is a node and each of its elements is a child.
//!
//! Objects are immutable, cheap to clone and totally ordered, so they can be
//! used directly as keys of a `BTreeSet` or `BTreeMap`. Operations such as
//! union or power set are left to callers; this crate only constructs,
//! inspects and prints objects.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::object::Object;

/// Provides the error types for object inspection.
///
/// This module defines the errors raised when an object is used as a shape it
/// does not have. Such errors are caller mistakes; the panicking accessors on
/// [`Object`] report them with the same messages.
///
/// # Responsibilities
/// - Defines the `SetError` enum.
/// - Implements `Display` and `std::error::Error` for reporting.
pub mod error;
/// Defines the object type and everything it supports.
///
/// This module declares the `Object` handle, the atom and set shapes behind
/// it, the total order used to deduplicate and compare objects, and the
/// textual rendering.
///
/// # Responsibilities
/// - Builds atoms and sets, sorting and deduplicating set elements.
/// - Answers whether an object is a set and exposes its elements.
/// - Orders, compares and hashes objects structurally.
/// - Renders objects in `{a, b, {c}}` notation.
pub mod object;

/// Creates an atom with the given name.
///
/// Two atoms made from the same name are equal, even though they are
/// separate allocations.
///
/// # Example
/// ```
/// use settheory::{is_set, make_atom};
///
/// let a = make_atom("1");
///
/// assert!(!is_set(&a));
/// assert_eq!(a.to_string(), "1");
/// assert_eq!(a, make_atom("1"));
/// ```
#[must_use]
pub fn make_atom(name: &str) -> Object {
    Object::atom(name)
}

/// Creates the set of the given objects, sorted and without duplicates.
///
/// # Example
/// ```
/// use settheory::{as_set, make_atom, make_set};
///
/// let a = make_atom("1");
/// let b = make_atom("2");
///
/// let s = make_set([b.clone(), a.clone()]);
/// assert_eq!(s.to_string(), "{1, 2}");
/// assert_eq!(as_set(&s), &[a.clone(), b.clone()]);
/// assert_eq!(s, make_set([a, b]));
/// ```
#[must_use]
pub fn make_set<I>(children: I) -> Object
    where I: IntoIterator<Item = Object>
{
    Object::set(children)
}

/// Returns `true` if the object is a set.
#[must_use]
pub fn is_set(object: &Object) -> bool {
    object.is_set()
}

/// Returns the elements of a set in ascending order.
///
/// # Panics
/// Panics if `object` is an atom.
///
/// # Example
/// ```should_panic
/// use settheory::{as_set, make_atom};
///
/// let _ = as_set(&make_atom("1"));
/// ```
#[must_use]
pub fn as_set(object: &Object) -> &[Object] {
    object.as_set()
}
