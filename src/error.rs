//! The error type shared by every fallible operation in this crate.

use thiserror::Error;

/// Rejection of a malformed or out-of-domain input.
///
/// "Valid input, no answer" is never an error: those cases are reported as
/// `None`, `false`, or an empty collection by the individual functions.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The argument is outside the domain the operation is defined on.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
}

/// Shorthand for `core::result::Result<T, dsa_kit::Error>`.
pub type Result<T> = core::result::Result<T, Error>;

/// Logs and builds an [`Error::InvalidArgument`].
pub(crate) fn invalid(reason: &'static str) -> Error {
    tracing::debug!(reason, "rejecting argument");
    Error::InvalidArgument(reason)
}
