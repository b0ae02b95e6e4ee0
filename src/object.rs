/// Object representation and inspection.
///
/// Defines the `Object` handle and its two underlying shapes, atoms and sets.
/// Sets are built from previously constructed objects, so every object is a
/// finite tree whose leaves are atoms or empty sets. Construction sorts and
/// deduplicates the children of a set once; nothing is mutated afterwards.
pub mod core;
/// Total order over objects.
///
/// Atoms compare by name, sets compare their sorted children
/// lexicographically, and every atom sorts before every set. Equality and
/// hashing are derived from this order, never from allocation identity.
pub mod ordering;
/// Textual rendering of objects in `{a, b, {c}}` notation.
pub mod render;

pub use self::core::Object;
