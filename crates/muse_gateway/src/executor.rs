//! The fallback executor.

use muse_backends::Backend;
use muse_core::{BackendCall, BackendOutput, Category};
use muse_error::{AttemptRecord, ExhaustionError, MuseResult};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// The result of a successful traversal: the raw output and which candidate
/// served it. The serving identity is diagnostic only, never persisted here.
#[derive(Debug, Clone)]
pub struct ExecutionOutcome {
    /// Raw output from the serving backend
    pub output: BackendOutput,
    /// Identifier of the candidate that succeeded
    pub served_by: String,
}

/// Traversal state. One request moves Pending(0) → … → a terminal state.
#[derive(Debug)]
enum ExecutionState {
    /// About to attempt the candidate at this index.
    Pending(usize),
    /// A candidate succeeded; traversal stops immediately.
    Succeeded(ExecutionOutcome),
    /// Every candidate failed.
    Exhausted,
}

/// Execute a category's candidate list strictly in declared order.
///
/// At most one candidate succeeds; attempt N+1 never starts before attempt
/// N's outcome is known, and a failed candidate is never re-attempted within
/// the same request. Candidates are metered upstreams, so trials are
/// sequential with early exit rather than raced in parallel.
///
/// # Errors
///
/// Returns an [`ExhaustionError`] retaining every attempt when all
/// candidates fail.
#[instrument(skip(backends, call), fields(%category, candidates = backends.len()))]
pub async fn execute(
    category: Category,
    backends: &[Arc<dyn Backend>],
    call: &BackendCall,
) -> MuseResult<ExecutionOutcome> {
    let mut attempts: Vec<AttemptRecord> = Vec::new();
    let mut state = ExecutionState::Pending(0);

    loop {
        state = match state {
            ExecutionState::Pending(index) => match backends.get(index) {
                None => ExecutionState::Exhausted,
                Some(backend) => {
                    debug!(candidate = backend.id(), index, "Attempting candidate");
                    match backend.invoke(call).await {
                        Ok(output) => ExecutionState::Succeeded(ExecutionOutcome {
                            output,
                            served_by: backend.id().to_string(),
                        }),
                        Err(err) => {
                            warn!(
                                candidate = backend.id(),
                                error = %err,
                                "Candidate failed, falling back"
                            );
                            attempts.push(AttemptRecord::from(&err));
                            ExecutionState::Pending(index + 1)
                        }
                    }
                }
            },
            ExecutionState::Succeeded(outcome) => {
                info!(
                    %category,
                    served_by = %outcome.served_by,
                    attempts = attempts.len(),
                    "Generation served"
                );
                return Ok(outcome);
            }
            ExecutionState::Exhausted => {
                warn!(%category, attempts = attempts.len(), "Candidate list exhausted");
                return Err(ExhaustionError::new(category.to_string(), attempts).into());
            }
        };
    }
}
