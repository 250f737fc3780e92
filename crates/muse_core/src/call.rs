//! Call shapes and options for backend invocations.

use serde::{Deserialize, Serialize};

/// Category-appropriate call shape handed to a backend.
///
/// The fallback executor builds exactly one of these per request and reuses
/// it unchanged across every candidate attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BackendCall {
    /// System + user message pair (text, code, and analysis categories).
    Chat {
        /// Optional system instruction
        system: Option<String>,
        /// User prompt
        user: String,
        /// Token budget
        max_tokens: Option<u32>,
        /// Sampling temperature
        temperature: Option<f32>,
    },
    /// Single-shot generative call (image, video, audio, music categories).
    Generate {
        /// Generation prompt
        prompt: String,
        /// Negative prompt for image-family backends
        negative_prompt: Option<String>,
    },
    /// Binary-conditioned call (upscale and img2img categories).
    ///
    /// The image bytes were resolved exactly once before the first attempt.
    Conditioned {
        /// Target sub-prompt describing the transformation
        prompt: String,
        /// Source image bytes, shared across all fallback attempts
        image: Vec<u8>,
    },
}

/// Per-request call options with the gateway's defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct CallOptions {
    /// System instruction for conversational categories
    system_instruction: Option<String>,
    /// Sampling temperature default
    temperature: Option<f32>,
    /// Token budget default
    max_tokens: Option<u32>,
    /// Negative prompt, only defaulted for image-family categories when the
    /// call shape is built
    negative_prompt: Option<String>,
}

impl CallOptions {
    /// Create options from the raw request fields, applying gateway defaults
    /// where the caller left an override unset.
    pub fn new(
        system_instruction: Option<String>,
        temperature: Option<f32>,
        max_tokens: Option<u32>,
        negative_prompt: Option<String>,
    ) -> Self {
        Self {
            system_instruction,
            temperature: temperature.or(Some(0.7)),
            max_tokens: max_tokens.or(Some(8192)),
            negative_prompt,
        }
    }
}

impl Default for CallOptions {
    fn default() -> Self {
        Self::new(None, None, None, None)
    }
}
