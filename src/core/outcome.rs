//! Eager or deferred results for a successful match.

use std::fmt;

/// The result handed to [`Attempt::evaluate`](crate::Attempt::evaluate).
///
/// A literal value is stored as-is. A deferred computation is only run
/// when the attempt it is handed to actually matched, and is dropped
/// uncalled otherwise.
///
/// # Example
///
/// ```rust
/// use itch::{create, Outcome};
///
/// let eager = create(1).matches(1).evaluate(Outcome::value("one"));
/// let lazy = create(1).matches(1).evaluate(Outcome::deferred(|| "one"));
///
/// assert_eq!(eager.result(), Some(&"one"));
/// assert_eq!(lazy.result(), Some(&"one"));
/// ```
pub enum Outcome<'a, R> {
    /// Already computed result
    Value(R),
    /// Zero-argument computation producing the result
    Deferred(Box<dyn FnOnce() -> R + 'a>),
}

impl<'a, R> Outcome<'a, R> {
    /// Wrap an already computed result.
    pub fn value(result: R) -> Self {
        Outcome::Value(result)
    }

    /// Wrap a computation to run only if the result is needed.
    pub fn deferred<F>(compute: F) -> Self
    where
        F: FnOnce() -> R + 'a,
    {
        Outcome::Deferred(Box::new(compute))
    }

    /// Produce the result, running the computation if it is deferred.
    pub fn resolve(self) -> R {
        match self {
            Outcome::Value(result) => result,
            Outcome::Deferred(compute) => compute(),
        }
    }

    /// Whether the result still has to be computed.
    pub fn is_deferred(&self) -> bool {
        matches!(self, Outcome::Deferred(_))
    }
}

impl<'a, R> From<R> for Outcome<'a, R> {
    fn from(result: R) -> Self {
        Outcome::Value(result)
    }
}

impl<R: fmt::Debug> fmt::Debug for Outcome<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Value(result) => f.debug_tuple("Value").field(result).finish(),
            Outcome::Deferred(_) => f.write_str("Deferred(..)"),
        }
    }
}
