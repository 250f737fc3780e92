//! Media generation client for prompt-to-binary upstreams.

use crate::dto::{MediaRequest, MediaResponse};
use crate::Backend;
use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine};
use muse_core::{BackendCall, BackendOutput};
use muse_error::CandidateError;
use reqwest::Client;
use tracing::{debug, error, instrument};

/// Client for the single-shot media prediction endpoints (image, video,
/// audio, music candidates).
#[derive(Debug, Clone)]
pub struct MediaClient {
    client: Client,
    api_key: Option<String>,
    model: String,
    base_url: String,
    candidate_id: String,
}

impl MediaClient {
    /// Creates a new media generation client.
    pub fn new(
        candidate_id: impl Into<String>,
        api_key: Option<String>,
        model: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        let model = model.into();
        debug!(model = %model, "Created media client");
        Self {
            client: Client::new(),
            api_key,
            model,
            base_url: base_url.into(),
            candidate_id: candidate_id.into(),
        }
    }

    /// Classify the provider envelope into a tagged output.
    fn classify_response(&self, body: MediaResponse) -> Result<BackendOutput, CandidateError> {
        if let Some(prediction) = body.predictions.into_iter().next() {
            let encoded = prediction.bytes_base64_encoded.ok_or_else(|| {
                CandidateError::new(&self.candidate_id, "prediction carried no payload")
            })?;
            let data = STANDARD.decode(encoded.as_bytes()).map_err(|e| {
                CandidateError::new(&self.candidate_id, format!("invalid base64 payload: {}", e))
            })?;
            return Ok(BackendOutput::Binary {
                mime: prediction.mime_type,
                data,
            });
        }

        // Wrapper envelopes: one named binary field at the top level.
        let (field, encoded) = if let Some(audio) = body.audio {
            ("audio", audio)
        } else if let Some(video) = body.video {
            ("video", video)
        } else {
            return Err(CandidateError::new(
                &self.candidate_id,
                "response carried neither predictions nor a media field",
            ));
        };
        let data = STANDARD.decode(encoded.as_bytes()).map_err(|e| {
            CandidateError::new(&self.candidate_id, format!("invalid base64 payload: {}", e))
        })?;
        Ok(BackendOutput::Wrapped {
            field: field.to_string(),
            mime: body.mime_type,
            data,
        })
    }
}

#[async_trait]
impl Backend for MediaClient {
    fn id(&self) -> &str {
        &self.candidate_id
    }

    #[instrument(skip(self, call), fields(model = %self.model))]
    async fn invoke(&self, call: &BackendCall) -> Result<BackendOutput, CandidateError> {
        let BackendCall::Generate {
            prompt,
            negative_prompt,
        } = call
        else {
            return Err(CandidateError::new(
                &self.candidate_id,
                "media backend received a non-generative call shape",
            ));
        };

        let api_key = self.api_key.as_ref().ok_or_else(|| {
            CandidateError::new(&self.candidate_id, "gemini credential not configured")
        })?;

        let request = MediaRequest::new(prompt.clone(), negative_prompt.clone());
        let url = format!("{}/models/{}:predict", self.base_url, self.model);

        debug!(model = %self.model, "Sending media request");

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

        self.classify_response(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> MediaClient {
        MediaClient::new("test-media", Some("key".to_string()), "test-model", "http://localhost")
    }

    #[test]
    fn test_prediction_classifies_as_binary() {
        let body: MediaResponse = serde_json::from_str(
            r#"{"predictions":[{"bytesBase64Encoded":"AQID","mimeType":"image/png"}]}"#,
        )
        .unwrap();
        let output = client().classify_response(body).unwrap();
        assert_eq!(
            output,
            BackendOutput::Binary {
                mime: Some("image/png".to_string()),
                data: vec![1, 2, 3],
            }
        );
    }

    #[test]
    fn test_audio_field_classifies_as_wrapped() {
        let body: MediaResponse =
            serde_json::from_str(r#"{"audio":"AQID","mimeType":"audio/wav"}"#).unwrap();
        let output = client().classify_response(body).unwrap();
        assert_eq!(
            output,
            BackendOutput::Wrapped {
                field: "audio".to_string(),
                mime: Some("audio/wav".to_string()),
                data: vec![1, 2, 3],
            }
        );
    }

    #[test]
    fn test_empty_envelope_is_an_error() {
        let body = MediaResponse::default();
        assert!(client().classify_response(body).is_err());
    }
}
