//! Media source types for image-conditioned generation.

use serde::{Deserialize, Serialize};

/// Where source media content comes from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MediaSource {
    /// URL to fetch the content from
    Url(String),
    /// Base64-encoded content, with or without a data-URI prefix
    Base64(String),
    /// Raw binary data
    Binary(Vec<u8>),
}

impl MediaSource {
    /// Classify an image reference string from the wire.
    ///
    /// Data URIs carry their payload inline; anything else is treated as a
    /// remote URL.
    pub fn from_image_ref(reference: &str) -> Self {
        if reference.starts_with("data:") {
            MediaSource::Base64(reference.to_string())
        } else {
            MediaSource::Url(reference.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_uri_is_base64() {
        let source = MediaSource::from_image_ref("data:image/png;base64,AAAA");
        assert!(matches!(source, MediaSource::Base64(_)));
    }

    #[test]
    fn test_url_is_url() {
        let source = MediaSource::from_image_ref("https://example.com/cat.png");
        assert_eq!(
            source,
            MediaSource::Url("https://example.com/cat.png".to_string())
        );
    }
}
