//! Macros for ergonomic match chain construction.

/// Build and finish a match chain from `candidate => result` arms.
///
/// Arms are tried top to bottom and the first one that matches wins:
///
/// - `candidate => result` compares with strict equality;
/// - `one_of candidates => result` matches if any element of the
///   collection is equal to the seed;
/// - a final `_ => fallback` arm finishes the chain and yields the result
///   (or the fallback, if nothing matched).
///
/// Result and fallback expressions are evaluated lazily: only the arm that
/// wins is ever run. Without a `_` arm the macro yields the [`Chain`]
/// itself, so it can be extended further.
///
/// [`Chain`]: crate::Chain
///
/// # Example
///
/// ```
/// use itch::cases;
///
/// fn describe(n: u32) -> &'static str {
///     cases!(n;
///         0 => "none",
///         one_of [1, 2, 3] => "a few",
///         _ => "many",
///     )
/// }
///
/// assert_eq!(describe(0), "none");
/// assert_eq!(describe(2), "a few");
/// assert_eq!(describe(40), "many");
/// ```
#[macro_export]
macro_rules! cases {
    (@arm $chain:expr; ) => {
        $chain
    };

    (@arm $chain:expr; _ => $fallback:expr $(,)?) => {
        $chain.scratch_or_else(|| $fallback)
    };

    (@arm $chain:expr; one_of $candidates:expr => $result:expr $(, $($rest:tt)*)?) => {
        $crate::cases!(
            @arm $chain
                .matches_one_of($candidates)
                .evaluate($crate::Outcome::deferred(|| $result));
            $($($rest)*)?
        )
    };

    (@arm $chain:expr; $candidate:expr => $result:expr $(, $($rest:tt)*)?) => {
        $crate::cases!(
            @arm $chain
                .matches($candidate)
                .evaluate($crate::Outcome::deferred(|| $result));
            $($($rest)*)?
        )
    };

    ($seed:expr; $($arms:tt)*) => {
        $crate::cases!(@arm $crate::create($seed); $($arms)*)
    };
}
