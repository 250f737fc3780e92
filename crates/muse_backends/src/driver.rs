//! The backend driver trait.

use async_trait::async_trait;
use muse_core::{BackendCall, BackendOutput};
use muse_error::CandidateError;

/// One upstream inference backend, addressable as a fallback candidate.
///
/// Implementations are stateless aside from their HTTP client and
/// credentials, so a single instance serves concurrent requests.
#[async_trait]
pub trait Backend: Send + Sync {
    /// Candidate identifier, as it appears in the category's fallback list.
    fn id(&self) -> &str;

    /// Invoke the backend with a prepared call shape.
    ///
    /// # Errors
    ///
    /// Returns a [`CandidateError`] on any failure: transport, quota, missing
    /// credential, or a response the adapter cannot classify.
    async fn invoke(&self, call: &BackendCall) -> Result<BackendOutput, CandidateError>;
}
