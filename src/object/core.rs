use std::{mem, slice, sync::Arc};

use crate::error::SetError;

/// The shape behind an [`Object`] handle.
pub(crate) enum Node {
    /// A non-set object identified by its name.
    Atom(String),
    /// A set. Children are strictly ascending and free of duplicates.
    Set(Vec<Object>),
}

/// Tears nested sets down with an explicit stack instead of recursing once
/// per nesting level, so arbitrarily deep objects can be dropped.
impl Drop for Node {
    fn drop(&mut self) {
        let Self::Set(children) = self else {
            return;
        };

        let mut pending = mem::take(children);
        while let Some(child) = pending.pop() {
            if let Some(mut node) = Arc::into_inner(child.node)
               && let Self::Set(grandchildren) = &mut node
            {
                pending.append(grandchildren);
            }
        }
    }
}

/// An object of naive set theory: either an atom or a set of objects.
///
/// An `Object` is a cheap handle to immutable, shared structure. Cloning it
/// never copies the underlying tree, and the same sub-object may appear in
/// any number of sets. Handles are `Send` and `Sync`.
///
/// Objects are compared only through their total order (see
/// [`crate::object::ordering`]). `==` means "order-equal", so two atoms built
/// separately from the same name are equal, and two sets with the same
/// elements are equal regardless of how they were built.
///
/// # Example
/// ```
/// use settheory::object::Object;
///
/// let one = Object::atom("1");
/// let two = Object::atom("2");
/// let pair = Object::set([two.clone(), one.clone(), two]);
///
/// assert!(pair.is_set());
/// assert_eq!(pair.as_set(), &[one, Object::atom("2")]);
/// assert_eq!(pair.to_string(), "{1, 2}");
/// ```
#[derive(Clone)]
pub struct Object {
    pub(crate) node: Arc<Node>,
}

impl Object {
    /// Creates an atom identified by `name`.
    #[must_use]
    pub fn atom(name: impl Into<String>) -> Self {
        Self { node: Arc::new(Node::Atom(name.into())), }
    }

    /// Creates the set of the given objects.
    ///
    /// The children are sorted by the total order on objects and order-equal
    /// duplicates are dropped, keeping the first one seen (the sort is stable).
    /// The input order is not remembered.
    ///
    /// # Example
    /// ```
    /// use settheory::object::Object;
    ///
    /// let x = Object::atom("x");
    /// let s = Object::set([x.clone(), x.clone(), x]);
    ///
    /// assert_eq!(s.len(), 1);
    /// ```
    #[must_use]
    pub fn set<I>(children: I) -> Self
        where I: IntoIterator<Item = Self>
    {
        let mut unique: Vec<Self> = children.into_iter().collect();
        let offered = unique.len();

        unique.sort();
        unique.dedup();

        log::trace!("built set with {} element(s), {} duplicate(s) dropped",
                    unique.len(),
                    offered - unique.len());

        Self { node: Arc::new(Node::Set(unique)), }
    }

    /// Creates the empty set, `{}`.
    #[must_use]
    pub fn empty_set() -> Self {
        Self::set(std::iter::empty())
    }

    /// Returns `true` if the object was built as a set.
    #[must_use]
    pub fn is_set(&self) -> bool {
        matches!(*self.node, Node::Set(..))
    }

    /// Returns `true` if the object is an atom.
    #[must_use]
    pub fn is_atom(&self) -> bool {
        matches!(*self.node, Node::Atom(..))
    }

    /// Returns the name of an atom, or `None` for a set.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match &*self.node {
            Node::Atom(name) => Some(name),
            Node::Set(_) => None,
        }
    }

    /// Views the object as a set of its elements.
    ///
    /// # Returns
    /// - `Ok(&[Object])`: The elements in ascending order.
    /// - `Err(SetError::NotASet)`: If the object is an atom.
    ///
    /// # Example
    /// ```
    /// use settheory::{error::SetError, object::Object};
    ///
    /// let atom = Object::atom("a");
    /// assert_eq!(atom.try_as_set(),
    ///            Err(SetError::NotASet { name: "a".to_string() }));
    ///
    /// let empty = Object::empty_set();
    /// assert_eq!(empty.try_as_set(), Ok(&[][..]));
    /// ```
    pub fn try_as_set(&self) -> Result<&[Self], SetError> {
        match &*self.node {
            Node::Set(children) => Ok(children),
            Node::Atom(name) => Err(SetError::NotASet { name: name.clone() }),
        }
    }

    /// Views the object as a set of its elements, in ascending order.
    ///
    /// # Panics
    /// Panics if the object is an atom. An atom is never treated as an empty
    /// set; use [`Object::try_as_set`] to check instead.
    #[must_use]
    pub fn as_set(&self) -> &[Self] {
        match self.try_as_set() {
            Ok(children) => children,
            Err(e) => panic!("{e}"),
        }
    }

    /// Returns the number of elements of a set.
    ///
    /// # Panics
    /// Panics if the object is an atom.
    #[must_use]
    pub fn len(&self) -> usize {
        self.as_set().len()
    }

    /// Returns `true` if the object is the empty set.
    ///
    /// # Panics
    /// Panics if the object is an atom.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.as_set().is_empty()
    }

    /// Returns `true` if `element` is order-equal to one of the elements of
    /// this set.
    ///
    /// # Panics
    /// Panics if the object is an atom.
    ///
    /// # Example
    /// ```
    /// use settheory::object::Object;
    ///
    /// let empty = Object::empty_set();
    /// let s = Object::set([Object::atom("a"), empty]);
    ///
    /// assert!(s.contains(&Object::empty_set()));
    /// assert!(s.contains(&Object::atom("a")));
    /// assert!(!s.contains(&Object::atom("b")));
    /// ```
    #[must_use]
    pub fn contains(&self, element: &Self) -> bool {
        self.as_set().binary_search(element).is_ok()
    }

    /// Iterates over the elements of a set in ascending order.
    ///
    /// # Panics
    /// Panics if the object is an atom.
    pub fn iter(&self) -> slice::Iter<'_, Self> {
        self.as_set().iter()
    }
}

impl<'a> IntoIterator for &'a Object {
    type IntoIter = slice::Iter<'a, Object>;
    type Item = &'a Object;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Self> for Object {
    fn from_iter<I: IntoIterator<Item = Self>>(iter: I) -> Self {
        Self::set(iter)
    }
}

impl From<&str> for Object {
    fn from(name: &str) -> Self {
        Self::atom(name)
    }
}

impl From<String> for Object {
    fn from(name: String) -> Self {
        Self::atom(name)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::Object;

    #[test]
    fn dedup_keeps_first_occurrence() {
        let first = Object::atom("x");
        let second = Object::atom("x");

        let s = Object::set([Object::atom("y"), first.clone(), second.clone()]);

        assert_eq!(s.len(), 2);
        assert!(Arc::ptr_eq(&s.as_set()[0].node, &first.node));
        assert!(!Arc::ptr_eq(&s.as_set()[0].node, &second.node));
    }

    #[test]
    fn deep_chain_drops_without_recursion() {
        let mut chain = Object::atom("a");
        for _ in 0..200_000 {
            chain = Object::set([chain]);
        }

        drop(chain);
    }

    #[test]
    fn drop_leaves_shared_children_alive() {
        let inner = Object::set([Object::atom("a"), Object::empty_set()]);
        let outer = Object::set([Object::set([inner.clone()])]);

        drop(outer);

        assert_eq!(inner.len(), 2);
        assert_eq!(inner.to_string(), "{a, {}}");
    }
}
