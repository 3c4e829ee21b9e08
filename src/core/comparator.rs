//! Comparator predicates for testing a seed against a candidate.
//!
//! Comparators are pure boolean functions of `(seed, candidate)`. They are
//! the only notion of "equality" a match chain knows about, so swapping one
//! out changes what counts as a match without touching the chain itself.
//!
//! The `'a` lifetime bounds whatever the predicate borrows, including the
//! seed and candidate types themselves, so comparators can work over
//! borrowed runtime data such as a trimmed input line.

use std::fmt;
use std::sync::Arc;

/// Pure predicate deciding whether a candidate matches a seed.
///
/// The predicate is shared behind an `Arc`, so cloning a comparator is
/// cheap and a chain can hand the same comparator to every attempt.
///
/// # Example
///
/// ```rust
/// use itch::Comparator;
///
/// let close = Comparator::new(|seed: &f64, candidate: &f64| (seed - candidate).abs() < 1.0);
///
/// assert!(close.check(&5.0, &5.5));
/// assert!(!close.check(&5.0, &7.0));
/// ```
pub struct Comparator<'a, T: ?Sized, C: ?Sized = T> {
    predicate: Arc<dyn Fn(&T, &C) -> bool + Send + Sync + 'a>,
}

impl<'a, T: ?Sized, C: ?Sized> Comparator<'a, T, C> {
    /// Create a comparator from a pure predicate function.
    ///
    /// The predicate must be deterministic and free of side effects, and
    /// thread-safe (Send + Sync).
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&T, &C) -> bool + Send + Sync + 'a,
    {
        Comparator {
            predicate: Arc::new(predicate),
        }
    }

    /// Test `candidate` against `seed`.
    pub fn check(&self, seed: &T, candidate: &C) -> bool {
        (self.predicate)(seed, candidate)
    }
}

impl<'a, T, C> Comparator<'a, T, C>
where
    T: PartialEq<C> + ?Sized + 'a,
    C: ?Sized + 'a,
{
    /// Strict value equality, the comparator every new chain starts with.
    ///
    /// # Example
    ///
    /// ```rust
    /// use itch::Comparator;
    ///
    /// let strict = Comparator::<i32>::strict();
    ///
    /// assert!(strict.check(&3, &3));
    /// assert!(!strict.check(&3, &4));
    /// ```
    pub fn strict() -> Self {
        Comparator::new(|seed: &T, candidate: &C| seed == candidate)
    }
}

impl<'a, T, C> Comparator<'a, T, C>
where
    T: ?Sized + 'a,
    C: 'a,
{
    /// Lift this comparator over an ordered collection of candidates.
    ///
    /// The adapted comparator succeeds if any element matches. Elements are
    /// tested in order and testing stops at the first hit; an empty
    /// collection never matches.
    ///
    /// # Example
    ///
    /// ```rust
    /// use itch::Comparator;
    ///
    /// let any = Comparator::<i32>::strict().one_of();
    ///
    /// assert!(any.check(&3, &[1, 2, 3]));
    /// assert!(!any.check(&3, &[1, 2]));
    /// assert!(!any.check(&3, &[]));
    /// ```
    pub fn one_of(&self) -> Comparator<'a, T, [C]> {
        let scalar = self.clone();
        Comparator::new(move |seed: &T, candidates: &[C]| {
            candidates.iter().any(|candidate| scalar.check(seed, candidate))
        })
    }
}

/// Free-standing form of [`Comparator::one_of`].
pub fn one_of<'a, T, C>(comparator: &Comparator<'a, T, C>) -> Comparator<'a, T, [C]>
where
    T: ?Sized + 'a,
    C: 'a,
{
    comparator.one_of()
}

impl<T: ?Sized, C: ?Sized> Clone for Comparator<'_, T, C> {
    fn clone(&self) -> Self {
        Self {
            predicate: Arc::clone(&self.predicate),
        }
    }
}

impl<'a, T, C> Default for Comparator<'a, T, C>
where
    T: PartialEq<C> + ?Sized + 'a,
    C: ?Sized + 'a,
{
    fn default() -> Self {
        Self::strict()
    }
}

impl<T: ?Sized, C: ?Sized> fmt::Debug for Comparator<'_, T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Comparator").finish_non_exhaustive()
    }
}
