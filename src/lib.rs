//! Itch: an immutable match-expression builder
//!
//! Itch is the functional analogue of a `switch`/`case` expression. Start a
//! chain from a seed value, try candidates one after another, and commit to
//! a result on the first hit. What counts as a hit is decided by a pluggable
//! comparator, results can be eager or lazy, and a fallback is supplied at
//! the very end.
//!
//! # Core Concepts
//!
//! - **Chain**: Either unresolved (still holding the seed and comparator) or
//!   resolved (holding only the result). Resolved is absorbing.
//! - **Comparator**: Pure `(seed, candidate) -> bool` predicate, strict
//!   equality by default
//! - **Attempt**: The single-use value returned by `matches`, finalized
//!   with `then` or `evaluate`
//! - **Outcome**: A literal result or a deferred computation
//!
//! Every operation consumes its receiver and returns a new value. Nothing
//! is mutated in place, and "no candidate matched" is an ordinary state
//! rather than an error.
//!
//! # Example
//!
//! ```rust
//! use itch::{create, Outcome};
//!
//! let status = 404;
//!
//! let message = create(status)
//!     .matches(200)
//!     .then("ok")
//!     .matches_one_of([301, 302])
//!     .then("redirect")
//!     .using(|seed: &i32, class: &i32| seed / 100 == *class)
//!     .matches(4)
//!     .evaluate(Outcome::deferred(|| "client error"))
//!     .scratch()("unknown");
//!
//! assert_eq!(message, "client error");
//! ```

pub mod builder;
pub mod core;
pub mod error;

// Re-export commonly used types
pub use crate::core::{one_of, Attempt, Chain, Comparator, Outcome};
pub use error::MatchError;

/// Start an unresolved chain over `seed`, comparing candidates of the same
/// type with strict equality.
///
/// This is the entry point of every chain.
///
/// # Example
///
/// ```rust
/// use itch::create;
///
/// let chain = create('x').matches('x').then(24);
///
/// assert_eq!(chain.result(), Some(&24));
///
/// // Seeds may borrow runtime data.
/// let line = String::from("  quit ");
/// let code = create(line.trim()).matches("quit").then(0).scratch()(1);
/// assert_eq!(code, 0);
/// ```
pub fn create<'a, T, R>(seed: T) -> Chain<'a, T, R>
where
    T: PartialEq + 'a,
{
    Chain::create(seed)
}
