//! Upstream credential configuration.

use derive_getters::Getters;
use std::collections::BTreeMap;

/// API keys for the upstream providers, read once from the environment.
///
/// Keys are optional: a missing key is reported as absent by the health
/// endpoint and makes the affected candidates fail closed at call time.
/// The key values themselves are never echoed anywhere.
#[derive(Debug, Clone, Default, Getters)]
pub struct Credentials {
    /// Gemini API key (chat, media generation, image editing)
    gemini: Option<String>,
    /// Groq API key (chat fallback candidates)
    groq: Option<String>,
}

impl Credentials {
    /// Read credentials from the environment.
    ///
    /// Reads `GEMINI_API_KEY` and `GROQ_API_KEY`; both are optional.
    pub fn from_env() -> Self {
        Self {
            gemini: std::env::var("GEMINI_API_KEY").ok(),
            groq: std::env::var("GROQ_API_KEY").ok(),
        }
    }

    /// Construct explicit credentials, for tests and the diagnostic harness.
    pub fn new(gemini: Option<String>, groq: Option<String>) -> Self {
        Self { gemini, groq }
    }

    /// Presence booleans per provider, safe to expose over the wire.
    pub fn presence(&self) -> BTreeMap<String, bool> {
        let mut map = BTreeMap::new();
        map.insert("gemini".to_string(), self.gemini.is_some());
        map.insert("groq".to_string(), self.groq.is_some());
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presence_never_contains_values() {
        let creds = Credentials::new(Some("super-secret".to_string()), None);
        let presence = creds.presence();
        assert_eq!(presence.get("gemini"), Some(&true));
        assert_eq!(presence.get("groq"), Some(&false));
        let rendered = format!("{:?}", presence);
        assert!(!rendered.contains("super-secret"));
    }
}
