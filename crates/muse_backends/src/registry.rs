//! Candidate resolution: candidate identifiers to backend instances.

use crate::{Backend, ChatClient, ConditionedClient, Credentials, MediaClient};
use muse_core::Category;
use std::sync::Arc;
use tracing::debug;

/// Gemini OpenAI-compatibility chat completions endpoint.
const GEMINI_CHAT_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta/openai/chat/completions";

/// Gemini REST base for media prediction and image editing.
const GEMINI_MEDIA_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Groq chat completions endpoint.
const GROQ_CHAT_URL: &str = "https://api.groq.com/openai/v1/chat/completions";

/// Resolves candidate identifiers to concrete backend clients.
///
/// Candidate identifiers are model names; a `groq/` prefix routes to Groq,
/// everything else to the Gemini API surface appropriate for the category.
/// Construction never fails: a candidate whose credential is missing still
/// resolves, and fails closed when invoked.
#[derive(Debug, Clone)]
pub struct BackendRegistry {
    credentials: Credentials,
}

impl BackendRegistry {
    /// Create a registry over the given credentials.
    pub fn new(credentials: Credentials) -> Self {
        Self { credentials }
    }

    /// The credentials this registry was built with.
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Resolve one candidate identifier for a category.
    pub fn resolve(&self, candidate: &str, category: Category) -> Arc<dyn Backend> {
        debug!(candidate, %category, "Resolving candidate");

        if let Some(model) = candidate.strip_prefix("groq/") {
            return Arc::new(ChatClient::new(
                candidate,
                self.credentials.groq().clone(),
                model,
                GROQ_CHAT_URL,
                "groq",
            ));
        }

        let gemini_key = self.credentials.gemini().clone();
        if category.is_conversational() {
            Arc::new(ChatClient::new(
                candidate,
                gemini_key,
                candidate,
                GEMINI_CHAT_URL,
                "gemini",
            ))
        } else if category.is_image_conditioned() {
            Arc::new(ConditionedClient::new(
                candidate,
                gemini_key,
                candidate,
                GEMINI_MEDIA_URL,
            ))
        } else {
            Arc::new(MediaClient::new(
                candidate,
                gemini_key,
                candidate,
                GEMINI_MEDIA_URL,
            ))
        }
    }

    /// Resolve an ordered candidate list for a category, preserving order.
    pub fn resolve_all(&self, candidates: &[&str], category: Category) -> Vec<Arc<dyn Backend>> {
        candidates
            .iter()
            .map(|candidate| self.resolve(candidate, category))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolution_preserves_order_and_ids() {
        let registry = BackendRegistry::new(Credentials::new(None, None));
        let candidates = ["imagen-4.0-generate-001", "gemini-2.5-flash-image"];
        let backends = registry.resolve_all(&candidates, Category::Image);
        let ids: Vec<&str> = backends.iter().map(|b| b.id()).collect();
        assert_eq!(ids, candidates);
    }

    #[tokio::test]
    async fn test_missing_credential_fails_closed() {
        use muse_core::BackendCall;

        let registry = BackendRegistry::new(Credentials::new(None, None));
        let backend = registry.resolve("gemini-2.5-flash", Category::Text);
        let call = BackendCall::Chat {
            system: None,
            user: "hello".to_string(),
            max_tokens: None,
            temperature: None,
        };
        let err = backend.invoke(&call).await.unwrap_err();
        assert!(err.message.contains("credential not configured"));
    }
}
