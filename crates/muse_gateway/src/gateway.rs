//! The gateway facade: classify → gate → execute → normalize.

use crate::{
    executor, normalize::normalize, source::resolve_image_source, AccessGate, CandidateConfig,
    HealthReporter, HealthSnapshot,
};
use muse_backends::{Backend, BackendRegistry};
use muse_core::{
    classify, BackendCall, CallOptions, Category, GenerationRequest, GenerationResult,
    ImagePrompt, MediaSource, TierPermissions,
};
use muse_error::{MuseResult, ValidationError};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Seam between the gateway and candidate resolution, so tests can substitute
/// mock backends for the wire clients.
pub trait BackendResolver: Send + Sync {
    /// Resolve an ordered candidate list for a category, preserving order.
    fn resolve_all(&self, candidates: &[&str], category: Category) -> Vec<Arc<dyn Backend>>;

    /// Provider name → credential configured, for the health report.
    fn credential_presence(&self) -> BTreeMap<String, bool>;
}

impl BackendResolver for BackendRegistry {
    fn resolve_all(&self, candidates: &[&str], category: Category) -> Vec<Arc<dyn Backend>> {
        BackendRegistry::resolve_all(self, candidates, category)
    }

    fn credential_presence(&self) -> BTreeMap<String, bool> {
        self.credentials().presence()
    }
}

/// The generation gateway.
///
/// All configuration is loaded at construction and read-only thereafter;
/// each request is an independent, stateless execution over shared tables,
/// so concurrent requests need no synchronization.
pub struct Gateway {
    candidates: Arc<CandidateConfig>,
    gate: AccessGate,
    resolver: Arc<dyn BackendResolver>,
}

impl Gateway {
    /// Create a gateway over a backend resolver with the current
    /// configuration tables.
    pub fn new(resolver: Arc<dyn BackendResolver>) -> Self {
        Self {
            candidates: Arc::new(CandidateConfig::current()),
            gate: AccessGate::new(TierPermissions::current()),
            resolver,
        }
    }

    /// The candidate table, for the diagnostic harness.
    pub fn candidates(&self) -> &CandidateConfig {
        &self.candidates
    }

    /// Handle one generation request end to end.
    ///
    /// Validation and gating short-circuit before any upstream call; upstream
    /// failures are absorbed by fallback and only total exhaustion escalates.
    /// Exactly one success or one failure results, never a partial.
    ///
    /// # Errors
    ///
    /// Validation, authorization, or exhaustion errors per the gateway's
    /// error taxonomy. The special mode "health" never reaches this method.
    #[instrument(skip(self, request), fields(mode = %request.mode()))]
    pub async fn generate(&self, request: &GenerationRequest) -> MuseResult<GenerationResult> {
        let prompt = request
            .prompt()
            .as_deref()
            .filter(|p| !p.is_empty())
            .ok_or_else(|| ValidationError::new("Missing prompt"))?;

        let category = classify(request.mode())?;
        let tier = self.gate.check(request.subscription_tier(), request.mode())?;
        debug!(%category, %tier, "Request classified and gated");

        let options = CallOptions::new(
            request.system_instruction().clone(),
            *request.temperature(),
            *request.max_tokens(),
            None,
        );
        let call = build_call(category, prompt, &options).await?;

        let candidate_ids = self.candidates.for_category(category);
        let backends = self.resolver.resolve_all(candidate_ids, category);
        let outcome = executor::execute(category, &backends, &call).await?;

        info!(%category, served_by = %outcome.served_by, "Request complete");
        Ok(GenerationResult::new(normalize(category, outcome.output)))
    }

    /// Produce the health snapshot. Invokes no candidates.
    pub fn health(&self) -> HealthSnapshot {
        HealthReporter::new(
            self.candidates.as_ref().clone(),
            self.resolver.credential_presence(),
        )
        .report()
    }
}

/// Build the category-appropriate call shape.
///
/// For image-conditioned categories the prompt field carries a JSON-encoded
/// [`ImagePrompt`]; its source image is resolved to one byte buffer here,
/// exactly once, before any candidate attempt.
async fn build_call(
    category: Category,
    prompt: &str,
    options: &CallOptions,
) -> MuseResult<BackendCall> {
    if category.is_conversational() {
        return Ok(BackendCall::Chat {
            system: options.system_instruction().clone(),
            user: prompt.to_string(),
            max_tokens: *options.max_tokens(),
            temperature: *options.temperature(),
        });
    }

    if category.is_image_conditioned() {
        let payload: ImagePrompt = serde_json::from_str(prompt).map_err(|e| {
            ValidationError::new(format!(
                "{} prompt must be a JSON object with imageUrl: {}",
                category, e
            ))
        })?;
        let source = MediaSource::from_image_ref(payload.image_url());
        let image = resolve_image_source(&source).await?;
        return Ok(BackendCall::Conditioned {
            prompt: payload
                .target_prompt()
                .clone()
                .unwrap_or_else(|| "enhance".to_string()),
            image,
        });
    }

    // The negative-prompt default applies to visual generation only; audio
    // and music candidates get one only if the caller supplied it.
    let negative_prompt = match category {
        Category::Image | Category::Video => options
            .negative_prompt()
            .clone()
            .or_else(|| Some("blurry, low quality, watermark".to_string())),
        _ => options.negative_prompt().clone(),
    };
    Ok(BackendCall::Generate {
        prompt: prompt.to_string(),
        negative_prompt,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_conversational_call_shape() {
        let options = CallOptions::new(Some("be brief".to_string()), None, None, None);
        let call = build_call(Category::Code, "add two numbers", &options)
            .await
            .unwrap();
        match call {
            BackendCall::Chat { system, user, .. } => {
                assert_eq!(system.as_deref(), Some("be brief"));
                assert_eq!(user, "add two numbers");
            }
            other => panic!("unexpected call shape: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_generative_call_carries_negative_prompt_default() {
        let call = build_call(Category::Image, "a red circle", &CallOptions::default())
            .await
            .unwrap();
        match call {
            BackendCall::Generate {
                prompt,
                negative_prompt,
            } => {
                assert_eq!(prompt, "a red circle");
                assert!(negative_prompt.is_some());
            }
            other => panic!("unexpected call shape: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_audio_family_gets_no_negative_prompt_default() {
        for category in [Category::Audio, Category::Music] {
            let call = build_call(category, "a calm piano loop", &CallOptions::default())
                .await
                .unwrap();
            match call {
                BackendCall::Generate {
                    negative_prompt, ..
                } => assert_eq!(negative_prompt, None, "{} defaulted", category),
                other => panic!("unexpected call shape: {:?}", other),
            }
        }
    }

    #[tokio::test]
    async fn test_caller_negative_prompt_passes_through_for_music() {
        let options = CallOptions::new(None, None, None, Some("distorted".to_string()));
        let call = build_call(Category::Music, "a calm piano loop", &options)
            .await
            .unwrap();
        match call {
            BackendCall::Generate {
                negative_prompt, ..
            } => assert_eq!(negative_prompt.as_deref(), Some("distorted")),
            other => panic!("unexpected call shape: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_conditioned_prompt_must_be_json() {
        use muse_error::MuseErrorKind;
        let err = build_call(Category::Upscale, "not json", &CallOptions::default())
            .await
            .unwrap_err();
        assert!(matches!(err.kind(), MuseErrorKind::Validation(_)));
    }

    #[tokio::test]
    async fn test_conditioned_resolves_inline_image_once() {
        let prompt = r#"{"imageUrl":"data:image/png;base64,AQID","targetPrompt":"sharpen"}"#;
        let call = build_call(Category::Img2Img, prompt, &CallOptions::default())
            .await
            .unwrap();
        match call {
            BackendCall::Conditioned { prompt, image } => {
                assert_eq!(prompt, "sharpen");
                assert_eq!(image, vec![1, 2, 3]);
            }
            other => panic!("unexpected call shape: {:?}", other),
        }
    }
}
