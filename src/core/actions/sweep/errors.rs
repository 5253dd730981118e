use crate::core::actions::cancellation::Cancelled;
use std::error::Error;
use std::fmt;

/// Error type for cancelable sweeps.
///
/// Distinguishes between algorithm failures and cancellation, allowing callers
/// to handle each case appropriately (e.g., not displaying cancellation as
/// an error).
#[derive(Debug)]
pub enum SweepError<E> {
    /// The sweep was cancelled before completion.
    Cancelled(Cancelled),
    /// The per-pixel algorithm reported a failure.
    Algorithm(E),
}

impl<E: fmt::Display> fmt::Display for SweepError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SweepError::Cancelled(c) => write!(f, "{}", c),
            SweepError::Algorithm(e) => write!(f, "algorithm error: {}", e),
        }
    }
}

impl<E: Error + 'static> Error for SweepError<E> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SweepError::Cancelled(c) => Some(c),
            SweepError::Algorithm(e) => Some(e),
        }
    }
}
