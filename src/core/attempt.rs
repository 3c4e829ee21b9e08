//! Single comparison attempts and their finalizers.

use super::chain::Chain;
use super::outcome::Outcome;
use std::fmt;

/// Outcome of one `matches` / `matches_one_of` call, waiting for a result.
///
/// An attempt only remembers whether its comparison succeeded and the chain
/// it was made on. Both finalizers consume it, so it can be finalized at
/// most once:
///
/// - if the comparison succeeded, the finalizer commits its result and
///   returns a resolved chain;
/// - otherwise the argument is dropped and the original chain comes back
///   unchanged.
#[must_use = "an attempt does nothing until finalized with .then() or .evaluate()"]
pub struct Attempt<'a, T, R, C = T> {
    chain: Chain<'a, T, R, C>,
    matched: bool,
}

impl<'a, T, R, C> Attempt<'a, T, R, C> {
    pub(crate) fn new(chain: Chain<'a, T, R, C>, matched: bool) -> Self {
        Self { chain, matched }
    }

    /// Whether this attempt's comparison succeeded.
    ///
    /// Always false for an attempt made on an already resolved chain, since
    /// no comparison takes place there.
    pub fn is_match(&self) -> bool {
        self.matched
    }

    /// Commit `result` as-is if the comparison succeeded.
    ///
    /// `result` is never called, even when `R` is itself a function.
    ///
    /// # Example
    ///
    /// ```rust
    /// use itch::create;
    ///
    /// let double: fn(i32) -> i32 = |x| x * 2;
    /// let chain = create("double").matches("double").then(double);
    ///
    /// let op = chain.result().copied();
    /// assert_eq!(op.map(|f| f(21)), Some(42));
    /// ```
    pub fn then(self, result: R) -> Chain<'a, T, R, C> {
        if self.matched {
            return Self::commit(result);
        }
        self.fall_through()
    }

    /// Commit a literal or deferred result if the comparison succeeded.
    ///
    /// A deferred computation runs only on a successful comparison. A panic
    /// inside it is not caught.
    ///
    /// # Example
    ///
    /// ```rust
    /// use itch::{create, Outcome};
    ///
    /// fn expensive() -> i32 {
    ///     40 + 2
    /// }
    ///
    /// let answer = create(2)
    ///     .matches(1)
    ///     .evaluate(Outcome::value(1))
    ///     .matches(2)
    ///     .evaluate(Outcome::deferred(expensive))
    ///     .scratch()(0);
    ///
    /// assert_eq!(answer, 42);
    /// ```
    pub fn evaluate(self, outcome: Outcome<'_, R>) -> Chain<'a, T, R, C> {
        if self.matched {
            return Self::commit(outcome.resolve());
        }
        self.fall_through()
    }

    /// Commit the result of a fallible computation if the comparison
    /// succeeded.
    ///
    /// `compute` only runs on a successful comparison; its error is returned
    /// to the caller unchanged.
    ///
    /// # Example
    ///
    /// ```rust
    /// use itch::create;
    ///
    /// let parsed = create("num")
    ///     .matches("num")
    ///     .try_evaluate(|| "17".parse::<i32>())
    ///     .map(|chain| chain.scratch()(0));
    ///
    /// assert_eq!(parsed, Ok(17));
    /// ```
    pub fn try_evaluate<E, F>(self, compute: F) -> Result<Chain<'a, T, R, C>, E>
    where
        F: FnOnce() -> Result<R, E>,
    {
        if self.matched {
            return Ok(Self::commit(compute()?));
        }
        Ok(self.fall_through())
    }

    fn commit(result: R) -> Chain<'a, T, R, C> {
        tracing::trace!("candidate matched, committing result");
        Chain::resolved(result)
    }

    fn fall_through(self) -> Chain<'a, T, R, C> {
        if !self.chain.is_resolved() {
            tracing::trace!("candidate did not match, chain stays unresolved");
        }
        self.chain
    }
}

impl<T: fmt::Debug, R: fmt::Debug, C> fmt::Debug for Attempt<'_, T, R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Attempt")
            .field("chain", &self.chain)
            .field("matched", &self.matched)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Comparator;
    use std::cell::Cell;

    #[derive(Debug, PartialEq)]
    struct ParseFailed(&'static str);

    #[test]
    fn successful_attempt_reports_match() {
        let attempt: Attempt<'_, i32, &str> = Chain::create(1).matches(1);

        assert!(attempt.is_match());
    }

    #[test]
    fn attempt_on_resolved_chain_never_matches() {
        let attempt = Chain::create(1).matches(1).then("done").matches(1);

        assert!(!attempt.is_match());
        assert_eq!(attempt.then("again").result(), Some(&"done"));
    }

    #[test]
    fn then_stores_callables_without_calling_them() {
        let calls = Cell::new(0);
        let bump = || calls.set(calls.get() + 1);

        let chain = Chain::create(1).matches(1).then(&bump);

        assert_eq!(calls.get(), 0);
        if let Some(stored) = chain.result() {
            stored();
        }
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn evaluate_value_commits_literal() {
        let chain = Chain::create(1).matches(1).evaluate(Outcome::value("lit"));

        assert_eq!(chain.result(), Some(&"lit"));
    }

    #[test]
    fn evaluate_runs_deferred_only_on_match() {
        let calls = Cell::new(0);
        let compute = || {
            calls.set(calls.get() + 1);
            "computed"
        };

        let missed = Chain::create(1).matches(2).evaluate(Outcome::deferred(compute));
        assert!(!missed.is_resolved());
        assert_eq!(calls.get(), 0);

        let hit = missed.matches(1).evaluate(Outcome::deferred(compute));
        assert_eq!(hit.result(), Some(&"computed"));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn evaluate_on_resolved_chain_skips_deferred() {
        let calls = Cell::new(0);

        let chain = Chain::create(1)
            .matches(1)
            .then("first")
            .matches(1)
            .evaluate(Outcome::deferred(|| {
                calls.set(calls.get() + 1);
                "second"
            }));

        assert_eq!(chain.result(), Some(&"first"));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn failed_attempt_keeps_stored_comparator() {
        let chain = Chain::create(3)
            .using(|s: &i32, c: &i32| s * 2 == *c)
            .matches_with(6, Comparator::new(|_: &i32, _: &i32| false))
            .then("override");

        let chain = chain.matches(6).then("stored");

        assert_eq!(chain.result(), Some(&"stored"));
    }

    #[test]
    fn try_evaluate_commits_ok_result() {
        let chain = Chain::create(1)
            .matches(1)
            .try_evaluate(|| Ok::<_, ParseFailed>(10));

        assert_eq!(chain.map(|c| c.scratch()(0)), Ok(10));
    }

    #[test]
    fn try_evaluate_propagates_error_unchanged() {
        let chain: Result<Chain<'_, i32, i32>, ParseFailed> = Chain::create(1)
            .matches(1)
            .try_evaluate(|| Err(ParseFailed("bad digit")));

        assert_eq!(chain.map(|c| c.is_resolved()), Err(ParseFailed("bad digit")));
    }

    #[test]
    fn try_evaluate_skips_compute_on_miss() {
        let calls = Cell::new(0);

        let chain = Chain::create(1).matches(2).try_evaluate(|| {
            calls.set(calls.get() + 1);
            Err::<i32, _>(ParseFailed("unreachable"))
        });

        assert_eq!(calls.get(), 0);
        assert_eq!(chain.map(|c| c.is_resolved()), Ok(false));
    }

    #[test]
    #[should_panic(expected = "thunk failed")]
    fn panicking_thunk_propagates() {
        let _ = Chain::create(1)
            .matches(1)
            .evaluate(Outcome::deferred(|| -> i32 { panic!("thunk failed") }));
    }

    #[test]
    fn debug_shows_match_flag() {
        let attempt = Chain::create(1).matches(2).then("x").matches(2);

        assert_eq!(
            format!("{:?}", attempt),
            "Attempt { chain: Unresolved { seed: 1, comparator: Comparator { .. } }, matched: false }"
        );
    }
}
