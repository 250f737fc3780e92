//! Classification, access gating, fallback execution, and result
//! normalization for the Muse generation gateway.
//!
//! The [`Gateway`] facade wires the pipeline: classify the mode, gate the
//! tier, traverse the category's candidate list in order until one backend
//! succeeds, and normalize the raw output into the uniform string envelope.

mod candidates;
mod executor;
mod gate;
mod gateway;
mod health;
mod normalize;
mod source;

pub use candidates::CandidateConfig;
pub use executor::{execute, ExecutionOutcome};
pub use gate::AccessGate;
pub use gateway::{BackendResolver, Gateway};
pub use health::{HealthReporter, HealthSnapshot};
pub use normalize::{normalize, strip_code_fences};
pub use source::resolve_image_source;
