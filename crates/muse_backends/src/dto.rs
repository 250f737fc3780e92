//! Wire DTOs for the upstream APIs.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// OpenAI-compatible chat completion request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct ChatCompletionRequest {
    /// Model identifier
    model: String,
    /// Conversation messages
    messages: Vec<ChatMessage>,
    /// Maximum tokens to generate
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    max_tokens: Option<u32>,
    /// Temperature for sampling
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    temperature: Option<f32>,
}

/// A message in the conversation.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, Getters, derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct ChatMessage {
    /// Role of the message sender (system, user, assistant)
    role: String,
    /// Message content
    content: String,
}

impl ChatMessage {
    /// Create a system message.
    pub fn system(content: impl Into<String>) -> Self {
        ChatMessageBuilder::default()
            .role("system")
            .content(content)
            .build()
            .expect("Valid ChatMessage")
    }

    /// Create a user message.
    pub fn user(content: impl Into<String>) -> Self {
        ChatMessageBuilder::default()
            .role("user")
            .content(content)
            .build()
            .expect("Valid ChatMessage")
    }
}

/// OpenAI-compatible chat completion response.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionResponse {
    /// Completion choices; the first is used
    pub choices: Vec<ChatChoice>,
}

/// One completion choice.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoice {
    /// The assistant message
    pub message: ChatChoiceMessage,
}

/// The message within a completion choice.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoiceMessage {
    /// Generated content
    pub content: Option<String>,
}

/// Request body for the media prediction endpoint.
#[derive(Debug, Clone, Serialize, PartialEq, Getters)]
#[serde(rename_all = "camelCase")]
pub struct MediaRequest {
    /// Prompt instances
    instances: Vec<MediaInstance>,
    /// Generation parameters
    parameters: MediaParameters,
}

impl MediaRequest {
    /// Build a single-prompt media request.
    pub fn new(prompt: impl Into<String>, negative_prompt: Option<String>) -> Self {
        Self {
            instances: vec![MediaInstance {
                prompt: prompt.into(),
            }],
            parameters: MediaParameters {
                sample_count: 1,
                negative_prompt,
            },
        }
    }
}

/// One prompt instance.
#[derive(Debug, Clone, Serialize, PartialEq, Getters)]
#[serde(rename_all = "camelCase")]
pub struct MediaInstance {
    /// Generation prompt
    prompt: String,
}

/// Media generation parameters.
#[derive(Debug, Clone, Serialize, PartialEq, Getters)]
#[serde(rename_all = "camelCase")]
pub struct MediaParameters {
    /// Number of samples to generate
    sample_count: u32,
    /// Negative prompt, if the category uses one
    #[serde(skip_serializing_if = "Option::is_none")]
    negative_prompt: Option<String>,
}

/// Response body from the media prediction endpoint.
///
/// Providers differ in envelope shape: most return `predictions` with inline
/// base64 payloads; the audio and music upstreams wrap the payload in a
/// single named field at the top level instead.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct MediaResponse {
    /// Inline prediction payloads
    #[serde(default)]
    pub predictions: Vec<MediaPrediction>,
    /// Wrapper field used by audio upstreams
    #[serde(default)]
    pub audio: Option<String>,
    /// Wrapper field used by video upstreams
    #[serde(default)]
    pub video: Option<String>,
    /// MIME type accompanying a wrapper field
    #[serde(default)]
    pub mime_type: Option<String>,
}

/// One media prediction payload.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaPrediction {
    /// Base64-encoded content
    pub bytes_base64_encoded: Option<String>,
    /// Provider-declared MIME type
    pub mime_type: Option<String>,
}

/// Request body for the image-conditioned endpoint.
#[derive(Debug, Clone, Serialize, PartialEq, Getters)]
#[serde(rename_all = "camelCase")]
pub struct ConditionedRequest {
    /// Transformation prompt
    prompt: String,
    /// Source image carried as base64
    image: ConditionedImage,
}

impl ConditionedRequest {
    /// Build a conditioned request from a prompt and raw image bytes.
    pub fn new(prompt: impl Into<String>, image_base64: String) -> Self {
        Self {
            prompt: prompt.into(),
            image: ConditionedImage {
                bytes_base64_encoded: image_base64,
            },
        }
    }
}

/// Base64 image carrier.
#[derive(Debug, Clone, Serialize, PartialEq, Getters)]
#[serde(rename_all = "camelCase")]
pub struct ConditionedImage {
    /// Base64-encoded source image
    bytes_base64_encoded: String,
}
