//! The `Result` type: a success value or an error, never both.
//!
//! Every method that moves a payload out takes `self` by value, so a
//! `Result` cannot be read again once it has been consumed.
//!
//! ```
//! use outcome_foundation::{Failure, Result};
//!
//! fn divide(lhs: i32, rhs: i32) -> Result<i32> {
//!     if rhs == 0 {
//!         return Result::Err(Failure::domain("division by zero"));
//!     }
//!     Result::Ok(lhs / rhs)
//! }
//!
//! assert_eq!(divide(4, 2).unwrap(), 2);
//! assert!(divide(4, 0).is_error());
//! ```

use std::error::Error;
use std::panic;
use std::result::Result as StdResult;

use tracing::debug;

use crate::error::{Failure, UsageError};

/// Either a success value of type `R` or an error of type `E`.
///
/// The error type defaults to [`Failure`]. Operations that extract the
/// payload require `E` to implement [`std::error::Error`].
#[must_use = "this `Result` may be an `Err` variant, which should be handled"]
#[derive(Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Result<R, E = Failure> {
    /// The computation succeeded.
    Ok(R),
    /// The computation failed.
    Err(E),
}

impl<R, E> Result<R, E> {
    /// Returns true if this holds a success value.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    /// Returns true if this holds an error.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Err(_))
    }

    /// Borrows the payload without consuming the result.
    pub const fn as_ref(&self) -> Result<&R, &E> {
        match self {
            Self::Ok(value) => Result::Ok(value),
            Self::Err(error) => Result::Err(error),
        }
    }

    /// Converts into the standard library's result, so `?` can be used.
    ///
    /// ```
    /// use outcome_foundation::{Failure, Result};
    ///
    /// fn half(n: i32) -> Result<i32> {
    ///     if n % 2 == 0 { Result::Ok(n / 2) } else { Result::Err(Failure::domain("odd")) }
    /// }
    ///
    /// fn quarter(n: i32) -> std::result::Result<i32, Failure> {
    ///     let h = half(n).into_std()?;
    ///     half(h).into_std()
    /// }
    ///
    /// assert_eq!(quarter(8), Ok(2));
    /// assert!(quarter(6).is_err());
    /// ```
    pub fn into_std(self) -> StdResult<R, E> {
        match self {
            Self::Ok(value) => Ok(value),
            Self::Err(error) => Err(error),
        }
    }

    /// Returns the success value, discarding any error.
    #[must_use]
    pub fn ok(self) -> Option<R> {
        match self {
            Self::Ok(value) => Some(value),
            Self::Err(_) => None,
        }
    }

    /// Returns the error, discarding any success value.
    #[must_use]
    pub fn err(self) -> Option<E> {
        match self {
            Self::Ok(_) => None,
            Self::Err(error) => Some(error),
        }
    }
}

impl<R, E: Error> Result<R, E> {
    /// Returns the success value, or panics with the error as payload.
    ///
    /// # Panics
    ///
    /// Panics if this is an `Err`. The panic payload is the error value
    /// itself, unchanged, so a `catch_unwind` boundary can downcast it
    /// back to `E`.
    #[track_caller]
    pub fn unwrap(self) -> R
    where
        E: Send + 'static,
    {
        match self {
            Self::Ok(value) => value,
            Self::Err(error) => {
                debug!(target: "outcome::result", %error, "unwrap on an error result");
                panic::panic_any(error)
            }
        }
    }

    /// Returns the success value, or panics with `other_error` as payload.
    ///
    /// # Panics
    ///
    /// Panics if this is an `Err`. The original error is dropped.
    #[track_caller]
    pub fn expect<EE>(self, other_error: EE) -> R
    where
        EE: Error + Send + 'static,
    {
        match self {
            Self::Ok(value) => value,
            Self::Err(error) => {
                debug!(
                    target: "outcome::result",
                    %error,
                    replacement = %other_error,
                    "expect on an error result"
                );
                panic::panic_any(other_error)
            }
        }
    }

    /// Returns the error.
    ///
    /// # Panics
    ///
    /// Panics with [`UsageError::ErrorOfOk`] as payload if this is an `Ok`.
    #[track_caller]
    pub fn unwrap_err(self) -> E {
        match self {
            Self::Ok(_) => {
                debug!(target: "outcome::result", "unwrap_err on a valid result");
                panic::panic_any(UsageError::ErrorOfOk)
            }
            Self::Err(error) => error,
        }
    }

    /// Returns the success value.
    ///
    /// # Errors
    ///
    /// Returns [`UsageError::ValueOfError`] if this is an `Err`.
    pub fn value(self) -> StdResult<R, UsageError> {
        match self {
            Self::Ok(value) => Ok(value),
            Self::Err(_) => Err(UsageError::ValueOfError),
        }
    }

    /// Returns the error.
    ///
    /// # Errors
    ///
    /// Returns [`UsageError::ErrorOfOk`] if this is an `Ok`.
    pub fn error(self) -> StdResult<E, UsageError> {
        match self {
            Self::Ok(_) => Err(UsageError::ErrorOfOk),
            Self::Err(error) => Ok(error),
        }
    }

    /// Returns the success value, or computes one from the error.
    pub fn unwrap_or_else<F>(self, f: F) -> R
    where
        F: FnOnce(E) -> R,
    {
        match self {
            Self::Ok(value) => value,
            Self::Err(error) => f(error),
        }
    }

    /// Applies `f` to the success value; an error passes through untouched.
    ///
    /// ```
    /// use outcome_foundation::Result;
    ///
    /// let res: Result<i32> = Result::Ok(89);
    /// let c = res.map_res(|i| u8::try_from(i).unwrap_or(0)).unwrap();
    /// assert_eq!(c, 89);
    /// ```
    pub fn map_res<RR, F>(self, f: F) -> Result<RR, E>
    where
        F: FnOnce(R) -> RR,
    {
        match self {
            Self::Ok(value) => Result::Ok(f(value)),
            Self::Err(error) => Result::Err(error),
        }
    }

    /// Applies `f` to the error; a success value passes through untouched.
    pub fn map_err<EE, F>(self, f: F) -> Result<R, EE>
    where
        EE: Error,
        F: FnOnce(E) -> EE,
    {
        match self {
            Self::Ok(value) => Result::Ok(value),
            Self::Err(error) => Result::Err(f(error)),
        }
    }

    /// Calls `f` with the success value and returns its result.
    ///
    /// Short-circuits on an error without calling `f`.
    pub fn and_then<RR, F>(self, f: F) -> Result<RR, E>
    where
        F: FnOnce(R) -> Result<RR, E>,
    {
        match self {
            Self::Ok(value) => f(value),
            Self::Err(error) => Result::Err(error),
        }
    }

    /// Calls `f` with the error and returns its result.
    ///
    /// A success value passes through without calling `f`.
    pub fn or_else<EE, F>(self, f: F) -> Result<R, EE>
    where
        EE: Error,
        F: FnOnce(E) -> Result<R, EE>,
    {
        match self {
            Self::Ok(value) => Result::Ok(value),
            Self::Err(error) => f(error),
        }
    }
}

impl<R, E> From<StdResult<R, E>> for Result<R, E> {
    fn from(result: StdResult<R, E>) -> Self {
        match result {
            Ok(value) => Self::Ok(value),
            Err(error) => Self::Err(error),
        }
    }
}

impl<R, E> From<Result<R, E>> for StdResult<R, E> {
    fn from(result: Result<R, E>) -> Self {
        result.into_std()
    }
}
