//! Side-effect-free health reporting.

use crate::CandidateConfig;
use serde::Serialize;
use std::collections::BTreeMap;

/// Snapshot of the gateway's static configuration and credential presence.
///
/// Credential values are never included, only presence booleans.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthSnapshot {
    /// Category label → ordered candidate identifiers
    pub categories: BTreeMap<String, Vec<String>>,
    /// Provider name → credential configured
    pub credentials: BTreeMap<String, bool>,
}

/// Builds health snapshots. Performs no upstream calls and has no failure
/// mode.
#[derive(Debug, Clone)]
pub struct HealthReporter {
    candidates: CandidateConfig,
    credentials: BTreeMap<String, bool>,
}

impl HealthReporter {
    /// Create a reporter over the candidate table and credential presence map.
    pub fn new(candidates: CandidateConfig, credentials: BTreeMap<String, bool>) -> Self {
        Self {
            candidates,
            credentials,
        }
    }

    /// Produce the current snapshot.
    pub fn report(&self) -> HealthSnapshot {
        HealthSnapshot {
            categories: self.candidates.snapshot(),
            credentials: self.credentials.clone(),
        }
    }
}
