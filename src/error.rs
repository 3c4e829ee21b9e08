//! Errors for fallible chain extraction.

use thiserror::Error;

/// Errors that can occur when extracting a result from a match chain.
///
/// Failing to match is a normal chain state, not an error. This type only
/// shows up when a caller opts into treating it as one via
/// [`Chain::into_result`](crate::Chain::into_result).
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum MatchError {
    #[error("No candidate matched the seed. Use .scratch() to supply a fallback")]
    Unmatched,
}
