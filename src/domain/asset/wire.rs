//! Request wire types for asset operations.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetType {
    File,
    Folder,
}

/// Parameters for creating an asset under a parent folder.
#[derive(Debug, Clone, Serialize)]
pub struct CreateAsset {
    pub name: String,
    #[serde(rename = "type")]
    pub asset_type: AssetType,
    /// MIME type, e.g. `video/mp4`. Required by the service for files.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filetype: Option<String>,
    /// Size in bytes, used to provision the upload.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filesize: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Fields updatable on an existing asset.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateAsset {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Target of a single-asset copy or move.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct AssetRef {
    pub id: String,
}

/// Body of a batch copy/move request.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct BatchAssets {
    pub batch: Vec<AssetRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copy_comments: Option<&'static str>,
}

impl BatchAssets {
    /// Builds a fresh batch from the given ids; never reuses a shared list.
    pub fn new(asset_ids: &[&str], copy_comments: bool) -> Self {
        Self {
            batch: asset_ids
                .iter()
                .map(|id| AssetRef { id: (*id).to_string() })
                .collect(),
            copy_comments: copy_comments.then_some("all"),
        }
    }
}
