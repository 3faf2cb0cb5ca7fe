//! outcome - a move-only Result type with a small combinator algebra
//!
//! This crate re-exports the foundation layer for convenient access.
//! For detailed documentation, see [`outcome_foundation`].
//!
//! # Architecture
//!
//! ```text
//! Layer 0: outcome_foundation — Result, Failure, UsageError, attempt!
//! ```

pub use outcome_foundation as foundation;
pub use outcome_foundation::{Failure, FailureKind, Result, UsageError};

#[cfg(feature = "try-macro")]
pub use outcome_foundation::attempt;
