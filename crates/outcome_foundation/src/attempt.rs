//! Early return on error.
//!
//! Disable the default `try-macro` feature to define your own version,
//! for instance one that attaches extra context while propagating.

/// Unwraps a [`Result`](crate::Result) or returns its error from the
/// enclosing function.
///
/// On `Ok` the macro evaluates to the success value. On `Err` the enclosing
/// function returns `Result::Err(From::from(error))` immediately, so the
/// same error comes back when the error types coincide. The enclosing
/// function must itself return a [`Result`](crate::Result).
///
/// ```
/// use outcome_foundation::{Failure, Result, attempt};
///
/// fn parse(input: &str) -> Result<i32> {
///     input
///         .parse::<i32>()
///         .map_err(|_| Failure::domain(format!("not a number: {input}")))
///         .into()
/// }
///
/// fn sum(a: &str, b: &str) -> Result<i32> {
///     let a = attempt!(parse(a));
///     let b = attempt!(parse(b));
///     Result::Ok(a + b)
/// }
///
/// assert_eq!(sum("40", "2").unwrap(), 42);
/// assert!(sum("forty", "2").is_error());
/// ```
#[macro_export]
macro_rules! attempt {
    ($expr:expr $(,)?) => {
        match $crate::Result::into_std($expr) {
            ::core::result::Result::Ok(value) => value,
            ::core::result::Result::Err(error) => {
                $crate::__private::tracing::trace!(
                    target: "outcome::attempt",
                    "propagating error to caller"
                );
                return $crate::Result::Err(::core::convert::From::from(error));
            }
        }
    };
}
