//! Core match chain types and logic.
//!
//! This module contains the pure functional core of the match chain:
//! - Comparators and the collection adapter
//! - The two-state chain and its single-use attempts
//! - Eager or deferred results
//!
//! Nothing in this module mutates shared state or performs I/O. Every
//! operation consumes a value and returns a new one.

mod attempt;
mod chain;
mod comparator;
mod outcome;

pub use attempt::Attempt;
pub use chain::Chain;
pub use comparator::{one_of, Comparator};
pub use outcome::Outcome;
