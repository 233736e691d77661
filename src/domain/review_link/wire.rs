//! Request wire types for review link operations.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Parameters for creating a review link on a project.
#[derive(Debug, Clone, Serialize)]
pub struct CreateReviewLink {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
    /// Let viewers approve or reject items from the link.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_approvals: Option<bool>,
}

/// Settings updatable on an existing review link.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateReviewLink {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

/// Body for replacing the assets attached to a review link.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct ReviewLinkAssets {
    pub asset_ids: Vec<String>,
}
