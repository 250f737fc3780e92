//! Error types for the Muse generation gateway.
//!
//! This crate provides the foundation error types used throughout the Muse
//! workspace. Each domain error captures its source location at construction.

mod authorization;
mod candidate;
mod exhaustion;
mod http;
mod validation;

pub use authorization::{AuthorizationError, AuthorizationErrorKind};
pub use candidate::CandidateError;
pub use exhaustion::{AttemptRecord, ExhaustionError};
pub use http::HttpError;
pub use validation::ValidationError;

/// Crate-level error variants.
#[derive(Debug, derive_more::From)]
pub enum MuseErrorKind {
    /// Missing or malformed request input
    Validation(ValidationError),
    /// Tier lacks permission for the requested mode
    Authorization(AuthorizationError),
    /// A single backend invocation failed
    Candidate(CandidateError),
    /// Every candidate in a category failed
    Exhaustion(ExhaustionError),
    /// HTTP transport error
    Http(HttpError),
}

impl std::fmt::Display for MuseErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MuseErrorKind::Validation(e) => write!(f, "{}", e),
            MuseErrorKind::Authorization(e) => write!(f, "{}", e),
            MuseErrorKind::Candidate(e) => write!(f, "{}", e),
            MuseErrorKind::Exhaustion(e) => write!(f, "{}", e),
            MuseErrorKind::Http(e) => write!(f, "{}", e),
        }
    }
}

/// Muse error with kind discrimination.
#[derive(Debug)]
pub struct MuseError(Box<MuseErrorKind>);

impl MuseError {
    /// Create a new error from a kind.
    pub fn new(kind: MuseErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &MuseErrorKind {
        &self.0
    }
}

impl std::fmt::Display for MuseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Muse Error: {}", self.0)
    }
}

impl std::error::Error for MuseError {}

// Generic From implementation for any type that converts to MuseErrorKind
impl<T> From<T> for MuseError
where
    T: Into<MuseErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Muse operations.
pub type MuseResult<T> = std::result::Result<T, MuseError>;
