//! Failure payloads for the fetch boundary.
//!
//! The failure shapes form a tagged union with a shared message accessor.
//! Every message extends the base `"Operation failed"` prefix with
//! variant-specific detail; only `Moved` carries a structured field beyond
//! the message.

use reqwest::Url;
use thiserror::Error;

/// Everything that can go wrong while fetching a resource.
///
/// Failures are data, never raised: the fetch boundary converts each broken
/// request into one of these payloads and hands it to the caller inside the
/// failure track of an `Outcome`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchFailure {
    /// The request failed for no more specific reason.
    #[error("Operation failed")]
    Generic,
    /// The transport layer reported an error with a description.
    #[error("Operation failed: {0}")]
    Other(String),
    /// The server does not have the resource.
    #[error("Operation failed: Resource not found")]
    NotFound,
    /// The server redirected to another address.
    #[error("Operation failed: Moved to {location}")]
    Moved {
        /// Where the server points instead.
        location: Url,
    },
    /// The request did not complete within the client timeout.
    #[error("Operation failed: Connection timeout")]
    Timeout,
}

impl FetchFailure {
    /// Human-readable description, shared across all variants.
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// The redirect target, present only on [`Moved`](Self::Moved).
    pub const fn redirect_target(&self) -> Option<&Url> {
        match self {
            Self::Moved { location } => Some(location),
            _ => None,
        }
    }
}
