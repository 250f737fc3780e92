//! Image-conditioned client for upscale and img2img upstreams.

use crate::dto::{ConditionedRequest, MediaResponse};
use crate::Backend;
use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine};
use muse_core::{BackendCall, BackendOutput};
use muse_error::CandidateError;
use reqwest::Client;
use tracing::{debug, error, instrument};

/// Client for endpoints that transform an existing image (upscale, img2img).
///
/// The source bytes arrive already resolved; this client only encodes them
/// for transport. Resolution happens once per request, upstream of fallback.
#[derive(Debug, Clone)]
pub struct ConditionedClient {
    client: Client,
    api_key: Option<String>,
    model: String,
    base_url: String,
    candidate_id: String,
}

impl ConditionedClient {
    /// Creates a new image-conditioned client.
    pub fn new(
        candidate_id: impl Into<String>,
        api_key: Option<String>,
        model: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        let model = model.into();
        debug!(model = %model, "Created conditioned client");
        Self {
            client: Client::new(),
            api_key,
            model,
            base_url: base_url.into(),
            candidate_id: candidate_id.into(),
        }
    }
}

#[async_trait]
impl Backend for ConditionedClient {
    fn id(&self) -> &str {
        &self.candidate_id
    }

    #[instrument(skip(self, call), fields(model = %self.model))]
    async fn invoke(&self, call: &BackendCall) -> Result<BackendOutput, CandidateError> {
        let BackendCall::Conditioned { prompt, image } = call else {
            return Err(CandidateError::new(
                &self.candidate_id,
                "conditioned backend received an unconditioned call shape",
            ));
        };

        let api_key = self.api_key.as_ref().ok_or_else(|| {
            CandidateError::new(&self.candidate_id, "gemini credential not configured")
        })?;

        let request = ConditionedRequest::new(prompt.clone(), STANDARD.encode(image));
        let url = format!("{}/models/{}:editImage", self.base_url, self.model);

        debug!(model = %self.model, image_bytes = image.len(), "Sending conditioned request");

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                error!(model = %self.model, error = ?e, "HTTP request failed");
                CandidateError::new(&self.candidate_id, format!("request failed: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!(model = %self.model, status = %status, error = %error_text, "API error");
            return Err(CandidateError::new(
                &self.candidate_id,
                format!("status {}: {}", status.as_u16(), error_text),
            ));
        }

        let body: MediaResponse = response.json().await.map_err(|e| {
            error!(model = %self.model, error = ?e, "Failed to parse response");
            CandidateError::new(&self.candidate_id, format!("failed to parse JSON: {}", e))
        })?;

        let prediction = body.predictions.into_iter().next().ok_or_else(|| {
            CandidateError::new(&self.candidate_id, "response carried no predictions")
        })?;
        let encoded = prediction.bytes_base64_encoded.ok_or_else(|| {
            CandidateError::new(&self.candidate_id, "prediction carried no payload")
        })?;
        let data = STANDARD.decode(encoded.as_bytes()).map_err(|e| {
            CandidateError::new(&self.candidate_id, format!("invalid base64 payload: {}", e))
        })?;

        Ok(BackendOutput::Binary {
            mime: prediction.mime_type,
            data,
        })
    }
}
