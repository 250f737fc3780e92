//! Result normalization into the uniform string envelope.

use base64::{engine::general_purpose::STANDARD, Engine};
use muse_core::{BackendOutput, Category};
use tracing::debug;

/// Normalize a tagged backend output into the transport envelope payload.
///
/// Text passes through verbatim, except code results which lose any
/// enclosing fenced-code markup. Binary content (raw or unwrapped from a
/// structured wrapper) becomes a MIME-tagged base64 data URI, so the
/// JSON-only transport represents every category's result in one shape.
pub fn normalize(category: Category, output: BackendOutput) -> String {
    match output {
        BackendOutput::Text { content } => {
            if category == Category::Code {
                strip_code_fences(&content)
            } else {
                content
            }
        }
        BackendOutput::Binary { mime, data }
        | BackendOutput::Wrapped { mime, data, .. } => to_data_uri(category, mime, &data),
    }
}

/// Strip an enclosing fenced-code block from a code result.
///
/// Only a balanced enclosure is removed: a leading ``` line (with optional
/// language tag) together with a trailing ``` line. Anything else is
/// returned verbatim.
pub fn strip_code_fences(text: &str) -> String {
    let trimmed = text.trim_start();
    let Some(after_open) = trimmed.strip_prefix("```") else {
        return text.to_string();
    };
    let Some(newline) = after_open.find('\n') else {
        return text.to_string();
    };
    let body = &after_open[newline + 1..];
    match body.trim_end().strip_suffix("```") {
        Some(inner) => inner.to_string(),
        None => text.to_string(),
    }
}

/// Assemble a data URI, preferring the provider-declared MIME type over the
/// category default.
fn to_data_uri(category: Category, mime: Option<String>, data: &[u8]) -> String {
    let mime = mime.unwrap_or_else(|| category.default_mime().to_string());
    debug!(%category, mime = %mime, bytes = data.len(), "Encoding binary result");
    format!("data:{};base64,{}", mime, STANDARD.encode(data))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_passes_through_verbatim() {
        let output = BackendOutput::text("hello there");
        assert_eq!(normalize(Category::Text, output), "hello there");
    }

    #[test]
    fn test_code_fences_stripped() {
        let output = BackendOutput::text("```python\ndef add(a,b): return a+b\n```");
        assert_eq!(
            normalize(Category::Code, output),
            "def add(a,b): return a+b\n"
        );
    }

    #[test]
    fn test_unfenced_code_untouched() {
        let output = BackendOutput::text("def add(a,b): return a+b\n");
        assert_eq!(
            normalize(Category::Code, output),
            "def add(a,b): return a+b\n"
        );
    }

    #[test]
    fn test_unbalanced_fence_untouched() {
        let text = "```python\ndef add(a,b): return a+b\n";
        assert_eq!(strip_code_fences(text), text);
    }

    #[test]
    fn test_fence_without_language_tag() {
        assert_eq!(strip_code_fences("```\nx = 1\n```"), "x = 1\n");
    }

    #[test]
    fn test_fences_only_stripped_for_code() {
        let fenced = "```python\nx = 1\n```";
        assert_eq!(normalize(Category::Text, BackendOutput::text(fenced)), fenced);
    }

    #[test]
    fn test_binary_uses_provider_mime() {
        let output = BackendOutput::binary(Some("image/webp".to_string()), vec![1, 2, 3]);
        assert_eq!(
            normalize(Category::Image, output),
            format!("data:image/webp;base64,{}", STANDARD.encode([1, 2, 3]))
        );
    }

    #[test]
    fn test_binary_falls_back_to_category_default() {
        let output = BackendOutput::binary(None, vec![1, 2, 3]);
        assert!(normalize(Category::Video, output).starts_with("data:video/mp4;base64,"));
        let output = BackendOutput::binary(None, vec![1, 2, 3]);
        assert!(normalize(Category::Music, output).starts_with("data:audio/wav;base64,"));
    }

    #[test]
    fn test_data_uri_round_trips_bytes() {
        let original = vec![0u8, 255, 17, 42, 128];
        let output = BackendOutput::binary(None, original.clone());
        let payload = normalize(Category::Video, output);
        let encoded = payload
            .strip_prefix("data:video/mp4;base64,")
            .expect("data URI prefix");
        assert_eq!(STANDARD.decode(encoded).unwrap(), original);
    }

    #[test]
    fn test_wrapper_is_transparent() {
        let bytes = vec![7u8, 7, 7];
        let wrapped = BackendOutput::Wrapped {
            field: "audio".to_string(),
            mime: None,
            data: bytes.clone(),
        };
        let bare = BackendOutput::binary(None, bytes);
        assert_eq!(
            normalize(Category::Audio, wrapped),
            normalize(Category::Audio, bare)
        );
    }
}
