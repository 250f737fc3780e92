//! Chat-completions client for OpenAI-compatible upstreams.

use crate::dto::{
    ChatCompletionRequestBuilder, ChatCompletionResponse, ChatMessage,
};
use crate::Backend;
use async_trait::async_trait;
use muse_core::{BackendCall, BackendOutput};
use muse_error::CandidateError;
use reqwest::Client;
use tracing::{debug, error, instrument};

/// Client for any OpenAI-compatible chat completions API.
///
/// Serves both the Gemini OpenAI-compatibility endpoint and Groq, which share
/// the chat completions wire format.
#[derive(Debug, Clone)]
pub struct ChatClient {
    client: Client,
    api_key: Option<String>,
    model: String,
    base_url: String,
    candidate_id: String,
    provider_name: &'static str,
}

impl ChatClient {
    /// Creates a new chat client.
    ///
    /// `api_key` may be absent; invocation then fails closed with a
    /// candidate error instead of skipping the candidate.
    pub fn new(
        candidate_id: impl Into<String>,
        api_key: Option<String>,
        model: impl Into<String>,
        base_url: impl Into<String>,
        provider_name: &'static str,
    ) -> Self {
        let model = model.into();
        let base_url = base_url.into();
        debug!(
            provider = provider_name,
            model = %model,
            url = %base_url,
            "Created chat client"
        );
        Self {
            client: Client::new(),
            api_key,
            model,
            base_url,
            candidate_id: candidate_id.into(),
            provider_name,
        }
    }
}

#[async_trait]
impl Backend for ChatClient {
    fn id(&self) -> &str {
        &self.candidate_id
    }

    #[instrument(skip(self, call), fields(provider = self.provider_name, model = %self.model))]
    async fn invoke(&self, call: &BackendCall) -> Result<BackendOutput, CandidateError> {
        let BackendCall::Chat {
            system,
            user,
            max_tokens,
            temperature,
        } = call
        else {
            return Err(CandidateError::new(
                &self.candidate_id,
                "chat backend received a non-chat call shape",
            ));
        };

        let api_key = self.api_key.as_ref().ok_or_else(|| {
            CandidateError::new(
                &self.candidate_id,
                format!("{} credential not configured", self.provider_name),
            )
        })?;

        let mut messages = Vec::with_capacity(2);
        if let Some(system) = system {
            messages.push(ChatMessage::system(system.clone()));
        }
        messages.push(ChatMessage::user(user.clone()));

        let request = ChatCompletionRequestBuilder::default()
            .model(self.model.clone())
            .messages(messages)
            .max_tokens(*max_tokens)
            .temperature(*temperature)
            .build()
            .map_err(|e| {
                CandidateError::new(&self.candidate_id, format!("request build failed: {}", e))
            })?;

        debug!(provider = self.provider_name, model = %self.model, "Sending chat request");

        let response = self
            .client
            .post(&self.base_url)
            .header("Authorization", format!("Bearer {}", api_key))
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                error!(provider = self.provider_name, error = ?e, "HTTP request failed");
                CandidateError::new(&self.candidate_id, format!("request failed: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!(
                provider = self.provider_name,
                status = %status,
                error = %error_text,
                "API error"
            );
            return Err(CandidateError::new(
                &self.candidate_id,
                format!("status {}: {}", status.as_u16(), error_text),
            ));
        }

        let chat_response: ChatCompletionResponse = response.json().await.map_err(|e| {
            error!(provider = self.provider_name, error = ?e, "Failed to parse response");
            CandidateError::new(&self.candidate_id, format!("failed to parse JSON: {}", e))
        })?;

        let content = chat_response
            .choices
            .first()
            .and_then(|choice| choice.message.content.clone())
            .ok_or_else(|| {
                CandidateError::new(&self.candidate_id, "response carried no content")
            })?;

        debug!(
            provider = self.provider_name,
            chars = content.len(),
            "Received chat response"
        );

        Ok(BackendOutput::text(content))
    }
}
