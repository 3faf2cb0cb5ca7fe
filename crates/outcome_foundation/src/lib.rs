//! Core Result type and failure types for outcome.
//!
//! This crate provides:
//! - [`Result`] - A success value or an error, consumed by value
//! - [`Failure`] - The default error type, with a [`FailureKind`]
//! - [`UsageError`] - Violations of the `Result` contract itself
//! - `attempt!` - Early return on error (feature `try-macro`)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

#[cfg(feature = "try-macro")]
mod attempt;
pub mod error;
pub mod result;

pub use error::{Failure, FailureKind, UsageError};
pub use result::Result;

#[doc(hidden)]
pub mod __private {
    pub use tracing;
}
