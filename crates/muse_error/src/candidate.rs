//! Candidate error types.

/// Failure of a single backend invocation.
///
/// Recorded by the fallback executor and never surfaced directly; it either
/// triggers the next candidate or folds into an [`crate::ExhaustionError`].
/// A credential missing at call time is reported through this type as well,
/// so a misconfigured candidate fails closed instead of being skipped.
#[derive(Debug, Clone)]
pub struct CandidateError {
    /// Identifier of the candidate that failed
    pub candidate: String,
    /// Error message
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl CandidateError {
    /// Create a new CandidateError at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use muse_error::CandidateError;
    ///
    /// let err = CandidateError::new("gemini-2.5-flash", "quota exceeded");
    /// assert_eq!(err.candidate, "gemini-2.5-flash");
    /// ```
    #[track_caller]
    pub fn new(candidate: impl Into<String>, message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            candidate: candidate.into(),
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}

impl std::fmt::Display for CandidateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Candidate Error: {} failed: {} at line {} in {}",
            self.candidate, self.message, self.line, self.file
        )
    }
}

impl std::error::Error for CandidateError {}
