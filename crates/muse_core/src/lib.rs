//! Core data types for the Muse generation gateway.
//!
//! This crate provides the foundation data types shared by the backend
//! adapters, the gateway, and the HTTP front door.

mod call;
mod category;
mod media;
mod output;
mod request;
mod tier;

pub use call::{BackendCall, CallOptions};
pub use category::{classify, Category, KNOWN_MODES};
pub use media::MediaSource;
pub use output::BackendOutput;
pub use request::{GenerationRequest, GenerationResult, ImagePrompt};
pub use tier::{Tier, TierPermissions};

/// The special mode that bypasses classification, gating, and execution.
pub const HEALTH_MODE: &str = "health";
