//! Request wire types for presentation links.

use serde::Serialize;

/// Parameters for creating a presentation link on an asset.
#[derive(Debug, Clone, Serialize)]
pub struct CreatePresentation {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}
