//! Supplementary-resources models

use serde::{Deserialize, Serialize};

/// Response of `GET perplexity/?video_uuid=` and `POST perplexity/`.
///
/// Absence of generated resources is an expected outcome, represented as a
/// value with `error` set rather than as a thrown error; see the resources
/// service for the 404 translation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resources {
    pub title: Option<String>,
    pub summary: Option<String>,
    pub resources_markdown: Option<String>,
    pub updated_at: Option<String>,
    pub error: Option<String>,
}

impl Resources {
    /// The sentinel value for "nothing generated yet"
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            title: None,
            summary: None,
            resources_markdown: None,
            updated_at: None,
            error: Some(message.into()),
        }
    }
}
