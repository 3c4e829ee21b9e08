//! Declarative sugar for building match chains.
//!
//! The [`cases!`](crate::cases) macro expands to a plain chain of
//! `matches` / `matches_one_of` calls, so it follows exactly the same
//! rules as a hand-written chain: first matching arm wins, and only the
//! winning arm's result expression is evaluated.

pub mod macros;
