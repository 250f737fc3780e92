//! Upstream inference backend adapters for the Muse gateway.
//!
//! Each adapter speaks one upstream wire format and classifies its response
//! into the tagged [`muse_core::BackendOutput`] before returning, so callers
//! never inspect provider-specific shapes.

mod chat;
mod conditioned;
mod credentials;
mod driver;
pub mod dto;
mod media;
mod registry;

pub use chat::ChatClient;
pub use conditioned::ConditionedClient;
pub use credentials::Credentials;
pub use driver::Backend;
pub use media::MediaClient;
pub use registry::BackendRegistry;
