//! The extracted callout record

use serde::{Deserialize, Serialize};

/// A callout extracted from a note, tagged with its source.
///
/// Immutable once produced; the pipeline only concatenates and filters
/// sequences of these. Every field is an always-present string: a missing
/// title or empty body is an empty string, never an absent value. The serde
/// field names fix the persisted frontmatter layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Callout {
    /// Tag inside the opening marker, verbatim
    #[serde(rename = "type")]
    pub callout_type: String,

    /// Trailing text on the opening line, empty if absent
    pub title: String,

    /// Block body, raw or flattened per pipeline configuration
    pub content: String,

    /// Vault-relative path of the source note
    #[serde(rename = "filePath")]
    pub file_path: String,

    /// Display name of the source note
    #[serde(rename = "fileName")]
    pub file_name: String,
}

impl Callout {
    /// Create a new callout record.
    pub fn new(
        callout_type: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
        file_path: impl Into<String>,
        file_name: impl Into<String>,
    ) -> Self {
        Self {
            callout_type: callout_type.into(),
            title: title.into(),
            content: content.into(),
            file_path: file_path.into(),
            file_name: file_name.into(),
        }
    }
}
