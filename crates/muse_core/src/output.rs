//! Tagged output types returned by backend adapters.

use serde::{Deserialize, Serialize};

/// The raw result of one successful backend invocation.
///
/// Every adapter classifies its response into one of these variants, so the
/// normalizer switches on the tag instead of sniffing shapes at runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum BackendOutput {
    /// Plain text or code output, passed through verbatim.
    Text {
        /// The generated text
        content: String,
    },
    /// Raw binary payload.
    Binary {
        /// Provider-declared MIME type, if any
        mime: Option<String>,
        /// Binary content
        data: Vec<u8>,
    },
    /// Structured wrapper carrying one named binary field.
    ///
    /// Some upstreams wrap their bytes in an envelope like `{audio: <bytes>}`;
    /// the wrapper is transparent to normalization.
    Wrapped {
        /// Name of the wrapping field (e.g. "audio", "video")
        field: String,
        /// Provider-declared MIME type, if any
        mime: Option<String>,
        /// Binary content
        data: Vec<u8>,
    },
}

impl BackendOutput {
    /// Convenience constructor for text output.
    pub fn text(content: impl Into<String>) -> Self {
        BackendOutput::Text {
            content: content.into(),
        }
    }

    /// Convenience constructor for binary output.
    pub fn binary(mime: Option<String>, data: Vec<u8>) -> Self {
        BackendOutput::Binary { mime, data }
    }
}
