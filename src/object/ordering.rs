use std::{
    cmp::Ordering,
    hash::{Hash, Hasher},
    sync::Arc,
};

use crate::object::core::{Node, Object};

/// Orders objects totally.
///
/// - Two atoms compare by name, lexicographically.
/// - Two sets compare their ascending element sequences lexicographically. A
///   set whose elements are a proper prefix of the other's is `Less`.
/// - Every atom is `Less` than every set, the empty set included.
///
/// The relation recurses into nested sets. Objects are finite trees, so the
/// recursion always terminates.
///
/// # Example
/// ```
/// use std::cmp::Ordering;
///
/// use settheory::object::Object;
///
/// let empty = Object::empty_set();
/// let singleton = Object::set([empty.clone()]);
///
/// assert_eq!(empty.cmp(&singleton), Ordering::Less);
/// assert_eq!(Object::atom("z").cmp(&empty), Ordering::Less);
/// assert_eq!(Object::atom("a").cmp(&Object::atom("b")), Ordering::Less);
/// ```
impl Ord for Object {
    fn cmp(&self, other: &Self) -> Ordering {
        if Arc::ptr_eq(&self.node, &other.node) {
            return Ordering::Equal;
        }

        match (&*self.node, &*other.node) {
            (Node::Atom(left), Node::Atom(right)) => left.cmp(right),
            (Node::Set(left), Node::Set(right)) => left.cmp(right),
            (Node::Atom(_), Node::Set(_)) => Ordering::Less,
            (Node::Set(_), Node::Atom(_)) => Ordering::Greater,
        }
    }
}

impl PartialOrd for Object {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Two objects are equal exactly when they are order-equal.
impl PartialEq for Object {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Object {}

impl Hash for Object {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match &*self.node {
            Node::Atom(name) => {
                state.write_u8(0);
                name.hash(state);
            },
            Node::Set(children) => {
                state.write_u8(1);
                children.hash(state);
            },
        }
    }
}
