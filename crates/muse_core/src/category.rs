//! Capability categories and mode classification.

use muse_error::{MuseResult, ValidationError};
use serde::{Deserialize, Serialize};

/// Fixed capability class determining candidate list and call shape.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Category {
    /// Conversational and freeform text generation.
    Text,
    /// Source code generation.
    Code,
    /// Still image generation.
    Image,
    /// Video generation.
    Video,
    /// Speech and sound generation.
    Audio,
    /// Music generation.
    Music,
    /// Resolution enhancement of an existing image.
    Upscale,
    /// Image-to-image transformation.
    Img2Img,
    /// Analytical text tasks (summarization, critique, extraction).
    Analysis,
}

impl Category {
    /// Whether this category's call shape is the system/user message pair.
    pub fn is_conversational(&self) -> bool {
        matches!(self, Category::Text | Category::Code | Category::Analysis)
    }

    /// Whether this category conditions generation on a source image.
    pub fn is_image_conditioned(&self) -> bool {
        matches!(self, Category::Upscale | Category::Img2Img)
    }

    /// Default MIME type for binary results in this category, used when the
    /// provider declares none.
    pub fn default_mime(&self) -> &'static str {
        match self {
            Category::Video => "video/mp4",
            Category::Audio | Category::Music => "audio/wav",
            _ => "image/png",
        }
    }
}

/// Maps a client-facing mode string to its capability category.
///
/// The mapping is explicit table data: every known mode literal appears here,
/// and several modes alias the same category. The special mode `"health"`
/// never reaches this function; the front door short-circuits it first.
///
/// # Errors
///
/// Returns a validation error for an unknown mode.
///
/// # Examples
///
/// ```
/// use muse_core::{classify, Category};
///
/// assert_eq!(classify("code-generation").unwrap(), Category::Code);
/// assert_eq!(classify("tts").unwrap(), Category::Audio);
/// assert!(classify("telepathy").is_err());
/// ```
pub fn classify(mode: &str) -> MuseResult<Category> {
    let category = match mode {
        "chat" => Category::Text,
        "code-generation" => Category::Code,
        "image" => Category::Image,
        "video" => Category::Video,
        "tts" => Category::Audio,
        "narration" => Category::Audio,
        "music" => Category::Music,
        "upscale" => Category::Upscale,
        "img2img" => Category::Img2Img,
        "analysis" => Category::Analysis,
        _ => {
            return Err(ValidationError::new(format!("Unknown mode '{}'", mode)).into());
        }
    };
    Ok(category)
}

/// Every mode literal the classifier accepts, in declaration order.
pub const KNOWN_MODES: [&str; 10] = [
    "chat",
    "code-generation",
    "image",
    "video",
    "tts",
    "narration",
    "music",
    "upscale",
    "img2img",
    "analysis",
];

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_every_known_mode_classifies() {
        for mode in KNOWN_MODES {
            assert!(classify(mode).is_ok(), "mode '{}' failed to classify", mode);
        }
    }

    #[test]
    fn test_classification_is_stable() {
        for mode in KNOWN_MODES {
            let first = classify(mode).unwrap();
            let second = classify(mode).unwrap();
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_audio_aliases() {
        assert_eq!(classify("tts").unwrap(), Category::Audio);
        assert_eq!(classify("narration").unwrap(), Category::Audio);
    }

    #[test]
    fn test_unknown_mode_rejected() {
        assert!(classify("").is_err());
        assert!(classify("health ").is_err());
        assert!(classify("codegeneration").is_err());
    }

    #[test]
    fn test_every_category_reachable() {
        let reached: std::collections::HashSet<Category> =
            KNOWN_MODES.iter().map(|m| classify(m).unwrap()).collect();
        for category in Category::iter() {
            assert!(reached.contains(&category), "{} unreachable", category);
        }
    }

    #[test]
    fn test_default_mimes() {
        assert_eq!(Category::Video.default_mime(), "video/mp4");
        assert_eq!(Category::Audio.default_mime(), "audio/wav");
        assert_eq!(Category::Music.default_mime(), "audio/wav");
        assert_eq!(Category::Image.default_mime(), "image/png");
        assert_eq!(Category::Upscale.default_mime(), "image/png");
    }
}
