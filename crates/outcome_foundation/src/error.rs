//! Failure types for the outcome system.
//!
//! [`Failure`] is the default error payload of [`crate::Result`].
//! [`UsageError`] describes violations of the `Result` contract itself.

use thiserror::Error;

/// The default error type carried by a [`crate::Result`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[error("{kind}{}", context_suffix(.context.as_deref()))]
pub struct Failure {
    /// The kind of failure that occurred.
    pub kind: FailureKind,
    /// Optional note about where or why the failure occurred.
    pub context: Option<String>,
}

fn context_suffix(context: Option<&str>) -> String {
    context.map(|c| format!(" ({c})")).unwrap_or_default()
}

impl Failure {
    /// Creates a new failure with the given kind.
    #[must_use]
    pub fn new(kind: FailureKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Creates a failure that carries no further information.
    #[must_use]
    pub fn unspecified() -> Self {
        Self::new(FailureKind::Unspecified)
    }

    /// Creates a logic error: a mistake the calling code could have avoided.
    #[must_use]
    pub fn logic(message: impl Into<String>) -> Self {
        Self::new(FailureKind::Logic(message.into()))
    }

    /// Creates a domain error: an input outside the domain of a computation.
    #[must_use]
    pub fn domain(message: impl Into<String>) -> Self {
        Self::new(FailureKind::Domain(message.into()))
    }

    /// Creates a failure with a free-form message.
    #[must_use]
    pub fn other(message: impl Into<String>) -> Self {
        Self::new(FailureKind::Other(message.into()))
    }

    /// Attaches context to this failure, replacing any previous context.
    #[must_use]
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Returns the message of this failure, if its kind carries one.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match &self.kind {
            FailureKind::Unspecified => None,
            FailureKind::Logic(msg) | FailureKind::Domain(msg) | FailureKind::Other(msg) => {
                Some(msg.as_str())
            }
        }
    }
}

impl Default for Failure {
    fn default() -> Self {
        Self::unspecified()
    }
}

/// Categorized failure kinds for pattern matching.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FailureKind {
    /// A failure with no further detail.
    #[error("unspecified failure")]
    Unspecified,

    /// Violated precondition or broken invariant in calling code.
    #[error("logic error: {0}")]
    Logic(String),

    /// Argument outside the domain of the computation.
    #[error("domain error: {0}")]
    Domain(String),

    /// Anything else.
    #[error("{0}")]
    Other(String),
}

/// A violation of the [`crate::Result`] contract.
///
/// Moving the payload out consumes the `Result`, so reuse after
/// consumption is rejected at compile time. What remains is asking a
/// `Result` for the payload it does not hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum UsageError {
    /// The success value of an `Err` was requested.
    #[error("attempt to read the value of an error result")]
    ValueOfError,

    /// The error of an `Ok` was requested.
    #[error("attempt to read the error of a valid result")]
    ErrorOfOk,
}
