//! Static candidate configuration.

use muse_core::Category;
use std::collections::BTreeMap;

/// Category → ordered candidate lists.
///
/// Built once at startup and shared read-only; order encodes fallback
/// priority, best quality and availability first. Never mutated per request.
#[derive(Debug, Clone)]
pub struct CandidateConfig {
    lists: BTreeMap<Category, Vec<&'static str>>,
}

impl CandidateConfig {
    /// The current candidate table.
    pub fn current() -> Self {
        let mut lists: BTreeMap<Category, Vec<&'static str>> = BTreeMap::new();
        lists.insert(
            Category::Text,
            vec![
                "gemini-2.5-flash",
                "gemini-2.0-flash",
                "groq/llama-3.3-70b-versatile",
            ],
        );
        lists.insert(
            Category::Code,
            vec![
                "gemini-2.5-pro",
                "gemini-2.5-flash",
                "groq/llama-3.3-70b-versatile",
            ],
        );
        lists.insert(
            Category::Analysis,
            vec!["gemini-2.5-pro", "gemini-2.5-flash"],
        );
        lists.insert(
            Category::Image,
            vec!["imagen-4.0-generate-001", "gemini-2.5-flash-image"],
        );
        lists.insert(
            Category::Video,
            vec!["veo-3.0-generate-001", "veo-2.0-generate-001"],
        );
        lists.insert(
            Category::Audio,
            vec!["gemini-2.5-flash-tts", "gemini-2.0-flash-tts"],
        );
        lists.insert(Category::Music, vec!["lyria-002"]);
        lists.insert(
            Category::Upscale,
            vec!["gemini-2.5-flash-image", "imagen-3.0-capability-001"],
        );
        lists.insert(
            Category::Img2Img,
            vec!["gemini-2.5-flash-image", "imagen-3.0-capability-001"],
        );
        Self { lists }
    }

    /// Ordered candidates for a category.
    pub fn for_category(&self, category: Category) -> &[&'static str] {
        self.lists
            .get(&category)
            .map(|list| list.as_slice())
            .unwrap_or(&[])
    }

    /// Owned snapshot keyed by category label, for the health report.
    pub fn snapshot(&self) -> BTreeMap<String, Vec<String>> {
        self.lists
            .iter()
            .map(|(category, list)| {
                (
                    category.to_string(),
                    list.iter().map(|c| c.to_string()).collect(),
                )
            })
            .collect()
    }
}

impl Default for CandidateConfig {
    fn default() -> Self {
        Self::current()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_every_category_has_candidates() {
        let config = CandidateConfig::current();
        for category in Category::iter() {
            assert!(
                !config.for_category(category).is_empty(),
                "{} has no candidates",
                category
            );
        }
    }

    #[test]
    fn test_snapshot_matches_lists() {
        let config = CandidateConfig::current();
        let snapshot = config.snapshot();
        assert_eq!(snapshot.len(), Category::iter().count());
        assert_eq!(
            snapshot.get("music").map(|v| v.as_slice()),
            Some(["lyria-002".to_string()].as_slice())
        );
    }
}
