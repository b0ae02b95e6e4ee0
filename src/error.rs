/// Object inspection errors.
///
/// Defines the errors raised when an object is used as something it is not,
/// such as viewing an atom as a set. These are contract violations on the
/// caller's side and are never recovered from silently.
pub mod set_error;

pub use set_error::SetError;
