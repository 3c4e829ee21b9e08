//! The immutable match chain.
//!
//! A chain is either still looking for a match (it owns the seed and the
//! comparator in force) or already committed to a result. Every operation
//! consumes the chain and hands back a new one; once resolved, nothing can
//! change the result or bring the seed back.
//!
//! The `'a` lifetime is the lifetime of the comparator the chain carries,
//! so seeds, candidates and comparators may all borrow local data.

use super::attempt::Attempt;
use super::comparator::Comparator;
use crate::error::MatchError;
use std::fmt;

enum ChainState<'a, T, R, C> {
    Unresolved {
        seed: T,
        comparator: Comparator<'a, T, C>,
    },
    Resolved {
        result: R,
    },
}

/// Immutable switch/case expression over a seed value.
///
/// `T` is the seed type, `R` the result type and `C` the candidate type
/// (the seed type unless a chain is built with [`Chain::new`] or
/// [`Chain::with_comparator`]).
///
/// # Example
///
/// ```rust
/// use itch::create;
///
/// let size = create(3)
///     .matches(0).then("none")
///     .matches_one_of([1, 2, 3]).then("few")
///     .scratch()("many");
///
/// assert_eq!(size, "few");
/// ```
pub struct Chain<'a, T, R, C = T> {
    state: ChainState<'a, T, R, C>,
}

impl<'a, T, R> Chain<'a, T, R, T>
where
    T: PartialEq + 'a,
{
    /// Start an unresolved chain that compares candidates of the seed's own
    /// type with strict equality.
    pub fn create(seed: T) -> Self {
        Self::with_comparator(seed, Comparator::strict())
    }
}

impl<'a, T, R, C> Chain<'a, T, R, C>
where
    T: PartialEq<C> + 'a,
    C: 'a,
{
    /// Start an unresolved chain over candidates of a different type, using
    /// strict `T: PartialEq<C>` equality.
    ///
    /// # Example
    ///
    /// ```rust
    /// use itch::Chain;
    ///
    /// let kind = Chain::new(String::from("dir"))
    ///     .matches("file").then(1)
    ///     .matches("dir").then(2)
    ///     .scratch()(0);
    ///
    /// assert_eq!(kind, 2);
    /// ```
    pub fn new(seed: T) -> Self {
        Self::with_comparator(seed, Comparator::strict())
    }
}

impl<'a, T, R, C> Chain<'a, T, R, C> {
    /// Start an unresolved chain with a custom comparator.
    pub fn with_comparator(seed: T, comparator: Comparator<'a, T, C>) -> Self {
        Self {
            state: ChainState::Unresolved { seed, comparator },
        }
    }

    pub(crate) fn resolved(result: R) -> Self {
        Self {
            state: ChainState::Resolved { result },
        }
    }

    /// Replace the comparator used by every later `matches` or
    /// `matches_one_of` call that does not bring its own.
    ///
    /// A resolved chain is returned unchanged.
    ///
    /// # Example
    ///
    /// ```rust
    /// use itch::create;
    ///
    /// let label = create(5.0_f64)
    ///     .using(|seed: &f64, candidate: &f64| (seed - candidate).abs() < 1.0)
    ///     .matches(5.5).then("close")
    ///     .scratch()("far");
    ///
    /// assert_eq!(label, "close");
    /// ```
    pub fn using<F>(self, comparator: F) -> Self
    where
        F: Fn(&T, &C) -> bool + Send + Sync + 'a,
    {
        self.using_comparator(Comparator::new(comparator))
    }

    /// Same as [`Chain::using`], taking an existing [`Comparator`].
    pub fn using_comparator(self, comparator: Comparator<'a, T, C>) -> Self {
        match self.state {
            ChainState::Unresolved { seed, .. } => Self::with_comparator(seed, comparator),
            resolved @ ChainState::Resolved { .. } => Self { state: resolved },
        }
    }

    /// Compare `candidate` against the seed with the chain's comparator.
    ///
    /// On a resolved chain no comparison happens and the returned attempt
    /// always yields the same resolved chain.
    pub fn matches(self, candidate: C) -> Attempt<'a, T, R, C> {
        let matched = match &self.state {
            ChainState::Unresolved { seed, comparator } => comparator.check(seed, &candidate),
            ChainState::Resolved { .. } => false,
        };
        Attempt::new(self, matched)
    }

    /// Compare `candidate` against the seed with a one-off comparator.
    ///
    /// The override only applies to this attempt. If it fails, the chain
    /// comes back with the comparator it had before.
    ///
    /// # Example
    ///
    /// ```rust
    /// use itch::{create, Comparator};
    ///
    /// let shout = Comparator::new(|s: &&str, c: &&str| s.eq_ignore_ascii_case(c));
    ///
    /// let greeting = create("HELLO")
    ///     .matches("hello").then(1)
    ///     .matches_with("hello", shout).then(2)
    ///     .scratch()(0);
    ///
    /// assert_eq!(greeting, 2);
    /// ```
    pub fn matches_with(
        self,
        candidate: C,
        comparator: Comparator<'_, T, C>,
    ) -> Attempt<'a, T, R, C> {
        let matched = match &self.state {
            ChainState::Unresolved { seed, .. } => comparator.check(seed, &candidate),
            ChainState::Resolved { .. } => false,
        };
        Attempt::new(self, matched)
    }

    /// Produce a fallback function: it returns the committed result if the
    /// chain is resolved, or its argument unchanged if not.
    ///
    /// `chain.scratch()(fallback)` reads the same whichever arm (if any)
    /// matched. The returned function always takes the fallback argument;
    /// to read a committed result without supplying one, use
    /// [`Chain::result`] or [`Chain::into_result`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use itch::create;
    ///
    /// assert_eq!(create(1).matches(2).then("two").scratch()("default"), "default");
    /// assert_eq!(create(2).matches(2).then("two").scratch()("default"), "two");
    /// ```
    pub fn scratch(self) -> impl FnOnce(R) -> R {
        or_fallback(self.into_option())
    }

    /// Like `scratch()(fallback())`, but `fallback` only runs when the chain
    /// is unresolved.
    pub fn scratch_or_else<F>(self, fallback: F) -> R
    where
        F: FnOnce() -> R,
    {
        self.into_option().unwrap_or_else(fallback)
    }

    /// Extract the committed result, treating "nothing matched" as an error.
    ///
    /// # Example
    ///
    /// ```rust
    /// use itch::{create, MatchError};
    ///
    /// let missed = create(1).matches(2).then("two").into_result();
    /// assert_eq!(missed, Err(MatchError::Unmatched));
    /// ```
    pub fn into_result(self) -> Result<R, MatchError> {
        self.into_option().ok_or(MatchError::Unmatched)
    }

    /// Whether a candidate has matched and a result has been committed.
    pub fn is_resolved(&self) -> bool {
        matches!(self.state, ChainState::Resolved { .. })
    }

    /// Borrow the committed result, if any.
    pub fn result(&self) -> Option<&R> {
        match &self.state {
            ChainState::Resolved { result } => Some(result),
            ChainState::Unresolved { .. } => None,
        }
    }

    /// Compare the seed against every element of `candidates` with the
    /// chain's comparator, succeeding if any of them matches.
    ///
    /// # Example
    ///
    /// ```rust
    /// use itch::create;
    ///
    /// assert_eq!(create(3).matches_one_of([1, 2, 3]).then("hit").scratch()("miss"), "hit");
    /// assert_eq!(create(3).matches_one_of([1, 2]).then("hit").scratch()("miss"), "miss");
    /// ```
    pub fn matches_one_of<I>(self, candidates: I) -> Attempt<'a, T, R, C>
    where
        I: AsRef<[C]>,
    {
        let matched = match &self.state {
            ChainState::Unresolved { seed, comparator } => candidates
                .as_ref()
                .iter()
                .any(|candidate| comparator.check(seed, candidate)),
            ChainState::Resolved { .. } => false,
        };
        Attempt::new(self, matched)
    }

    /// [`Chain::matches_one_of`] with a one-off comparator, which is not
    /// kept by the chain.
    pub fn matches_one_of_with<I>(
        self,
        candidates: I,
        comparator: Comparator<'_, T, C>,
    ) -> Attempt<'a, T, R, C>
    where
        I: AsRef<[C]>,
    {
        let matched = match &self.state {
            ChainState::Unresolved { seed, .. } => candidates
                .as_ref()
                .iter()
                .any(|candidate| comparator.check(seed, candidate)),
            ChainState::Resolved { .. } => false,
        };
        Attempt::new(self, matched)
    }

    fn into_option(self) -> Option<R> {
        match self.state {
            ChainState::Resolved { result } => Some(result),
            ChainState::Unresolved { .. } => None,
        }
    }
}

fn or_fallback<R>(committed: Option<R>) -> impl FnOnce(R) -> R {
    move |fallback| committed.unwrap_or(fallback)
}

impl<T: Clone, R: Clone, C> Clone for Chain<'_, T, R, C> {
    fn clone(&self) -> Self {
        let state = match &self.state {
            ChainState::Unresolved { seed, comparator } => ChainState::Unresolved {
                seed: seed.clone(),
                comparator: comparator.clone(),
            },
            ChainState::Resolved { result } => ChainState::Resolved {
                result: result.clone(),
            },
        };
        Self { state }
    }
}

impl<T: fmt::Debug, R: fmt::Debug, C> fmt::Debug for Chain<'_, T, R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.state {
            ChainState::Unresolved { seed, comparator } => f
                .debug_struct("Unresolved")
                .field("seed", seed)
                .field("comparator", comparator)
                .finish(),
            ChainState::Resolved { result } => {
                f.debug_struct("Resolved").field("result", result).finish()
            }
        }
    }
}
