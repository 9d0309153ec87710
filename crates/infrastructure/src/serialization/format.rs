//! File format detection.

use std::path::Path;

use serde::de::DeserializeOwned;

use super::json::{SerializationError, from_json_bytes, from_yaml};

/// Format of a descriptor or environment file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    /// `.json`
    Json,
    /// `.yaml` or `.yml`
    Yaml,
}

impl DocumentFormat {
    /// Detects the format from the file extension (case-insensitive).
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }
}

/// Decodes `bytes` in the given format.
///
/// # Errors
///
/// Returns an error if the document is malformed or doesn't match `T`.
pub fn decode<T: DeserializeOwned>(
    format: DocumentFormat,
    bytes: &[u8],
) -> Result<T, SerializationError> {
    match format {
        DocumentFormat::Json => from_json_bytes(bytes),
        DocumentFormat::Yaml => from_yaml(bytes),
    }
}
