//! Request wire types for comment operations.

use serde::Serialize;

/// Body for creating or updating a comment.
#[derive(Debug, Clone, Serialize)]
pub struct CreateComment {
    pub text: String,
    /// Position in the media, in seconds, for timeline comments.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<f64>,
    /// Serialized drawing overlay, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotation: Option<String>,
    /// Page number for document assets.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
}

impl CreateComment {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            timestamp: None,
            annotation: None,
            page: None,
        }
    }
}
