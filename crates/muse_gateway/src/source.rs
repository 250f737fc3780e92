//! One-time resolution of image sources for conditioned categories.

use base64::{engine::general_purpose::STANDARD, Engine};
use muse_core::MediaSource;
use muse_error::{HttpError, MuseResult, ValidationError};
use tracing::{debug, instrument};

/// Resolve a media source to a single byte buffer.
///
/// Called exactly once per request, before the first candidate attempt; the
/// buffer is reused across all fallback attempts so a slow remote source is
/// never re-fetched per candidate.
///
/// # Errors
///
/// A remote fetch failure surfaces as an HTTP error; an undecodable data URI
/// is a validation error since the payload came from the caller.
#[instrument(skip(source))]
pub async fn resolve_image_source(source: &MediaSource) -> MuseResult<Vec<u8>> {
    match source {
        MediaSource::Url(url) => {
            debug!(url = %url, "Fetching source image");
            let response = reqwest::get(url)
                .await
                .map_err(|e| HttpError::new(format!("failed to fetch source image: {}", e)))?;
            let status = response.status();
            if !status.is_success() {
                return Err(HttpError::new(format!(
                    "source image fetch returned status {}",
                    status.as_u16()
                ))
                .into());
            }
            let bytes = response
                .bytes()
                .await
                .map_err(|e| HttpError::new(format!("failed to read source image: {}", e)))?;
            Ok(bytes.to_vec())
        }
        MediaSource::Base64(encoded) => {
            // Accept both bare base64 and a full data URI.
            let payload = match encoded.find("base64,") {
                Some(idx) => &encoded[idx + "base64,".len()..],
                None => encoded.as_str(),
            };
            STANDARD
                .decode(payload.as_bytes())
                .map_err(|e| ValidationError::new(format!("invalid base64 image: {}", e)).into())
        }
        MediaSource::Binary(bytes) => Ok(bytes.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_data_uri_decodes() {
        let source = MediaSource::Base64("data:image/png;base64,AQID".to_string());
        assert_eq!(resolve_image_source(&source).await.unwrap(), vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_bare_base64_decodes() {
        let source = MediaSource::Base64("AQID".to_string());
        assert_eq!(resolve_image_source(&source).await.unwrap(), vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_binary_passes_through() {
        let source = MediaSource::Binary(vec![9, 8, 7]);
        assert_eq!(resolve_image_source(&source).await.unwrap(), vec![9, 8, 7]);
    }

    #[tokio::test]
    async fn test_garbage_base64_is_validation_error() {
        use muse_error::MuseErrorKind;
        let source = MediaSource::Base64("data:image/png;base64,!!!".to_string());
        let err = resolve_image_source(&source).await.unwrap_err();
        assert!(matches!(err.kind(), MuseErrorKind::Validation(_)));
    }
}
