//! Wire request and response types.

use serde::{Deserialize, Serialize};

fn default_tier() -> String {
    "novice".to_string()
}

/// The inbound generation request, created per call and discarded with the
/// response. Never persisted by the gateway.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    /// Client-facing mode discriminator, or the special mode "health"
    mode: String,
    /// Prompt text, or a JSON-encoded object for image-conditioned modes
    #[serde(default)]
    prompt: Option<String>,
    /// Optional system instruction for conversational categories
    #[serde(default)]
    system_instruction: Option<String>,
    /// Subscription tier label, defaulting to the entry tier
    #[serde(default = "default_tier")]
    subscription_tier: String,
    /// Sampling temperature override
    #[serde(default)]
    temperature: Option<f32>,
    /// Token budget override
    #[serde(default)]
    max_tokens: Option<u32>,
}

impl GenerationRequest {
    /// Create a request with just mode and prompt, for tests and the
    /// diagnostic harness.
    pub fn simple(mode: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            mode: mode.into(),
            prompt: Some(prompt.into()),
            system_instruction: None,
            subscription_tier: default_tier(),
            temperature: None,
            max_tokens: None,
        }
    }

    /// Replace the subscription tier label.
    pub fn with_tier(mut self, tier: impl Into<String>) -> Self {
        self.subscription_tier = tier.into();
        self
    }

    /// Replace the system instruction.
    pub fn with_system_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.system_instruction = Some(instruction.into());
        self
    }
}

/// Prompt payload for upscale and img2img modes: the wire prompt field holds
/// this object JSON-encoded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
#[serde(rename_all = "camelCase")]
pub struct ImagePrompt {
    /// Source image reference: remote URL or embedded data URI
    image_url: String,
    /// Sub-prompt describing the desired transformation
    #[serde(default)]
    target_prompt: Option<String>,
}

impl ImagePrompt {
    /// Create an image prompt.
    pub fn new(image_url: impl Into<String>, target_prompt: Option<String>) -> Self {
        Self {
            image_url: image_url.into(),
            target_prompt,
        }
    }
}

/// The uniform response envelope: every category's result is one string,
/// either verbatim text or a MIME-tagged base64 data URI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct GenerationResult {
    /// The normalized payload
    result: String,
}

impl GenerationResult {
    /// Wrap a normalized payload.
    pub fn new(result: impl Into<String>) -> Self {
        Self {
            result: result.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_defaults_to_novice() {
        let req: GenerationRequest =
            serde_json::from_str(r#"{"mode":"chat","prompt":"hi"}"#).unwrap();
        assert_eq!(req.subscription_tier(), "novice");
    }

    #[test]
    fn test_camel_case_fields() {
        let req: GenerationRequest = serde_json::from_str(
            r#"{"mode":"chat","prompt":"hi","systemInstruction":"be brief","subscriptionTier":"adept"}"#,
        )
        .unwrap();
        assert_eq!(req.system_instruction().as_deref(), Some("be brief"));
        assert_eq!(req.subscription_tier(), "adept");
    }

    #[test]
    fn test_image_prompt_decoding() {
        let payload: ImagePrompt = serde_json::from_str(
            r#"{"imageUrl":"https://example.com/a.png","targetPrompt":"make it night"}"#,
        )
        .unwrap();
        assert_eq!(payload.image_url(), "https://example.com/a.png");
        assert_eq!(payload.target_prompt().as_deref(), Some("make it night"));
    }
}
