//! Exhaustion error types.

use crate::CandidateError;

/// One failed attempt within a fallback traversal.
///
/// Transient diagnostic data: accumulated during a single execution and
/// discarded with the response, never persisted.
#[derive(Debug, Clone)]
pub struct AttemptRecord {
    /// Identifier of the candidate that was attempted
    pub candidate: String,
    /// Failure message from that attempt
    pub message: String,
}

impl From<&CandidateError> for AttemptRecord {
    fn from(err: &CandidateError) -> Self {
        Self {
            candidate: err.candidate.clone(),
            message: err.message.clone(),
        }
    }
}

/// Every candidate in a category's fallback list failed.
///
/// All attempts are retained for diagnostics; the display message surfaces
/// the last candidate's failure detail.
#[derive(Debug, Clone)]
pub struct ExhaustionError {
    /// Category whose candidate list was exhausted
    pub category: String,
    /// Every failed attempt, in traversal order
    pub attempts: Vec<AttemptRecord>,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ExhaustionError {
    /// Create a new ExhaustionError at the current location.
    #[track_caller]
    pub fn new(category: impl Into<String>, attempts: Vec<AttemptRecord>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            category: category.into(),
            attempts,
            line: location.line(),
            file: location.file(),
        }
    }

    /// The final attempt of the traversal, if any candidate was tried.
    pub fn last_attempt(&self) -> Option<&AttemptRecord> {
        self.attempts.last()
    }
}

impl std::fmt::Display for ExhaustionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.attempts.last() {
            Some(last) => write!(
                f,
                "Exhaustion Error: all {} candidates for '{}' failed; last: {} failed: {} at line {} in {}",
                self.attempts.len(),
                self.category,
                last.candidate,
                last.message,
                self.line,
                self.file
            ),
            None => write!(
                f,
                "Exhaustion Error: no candidates configured for '{}' at line {} in {}",
                self.category, self.line, self.file
            ),
        }
    }
}

impl std::error::Error for ExhaustionError {}
