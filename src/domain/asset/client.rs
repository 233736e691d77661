//! Assets sub-client — CRUD, copy/move, and the transfer paths.

use crate::client::FramelightClient;
use crate::domain::asset::wire::{AssetRef, BatchAssets, CreateAsset, UpdateAsset};
use crate::domain::ListParams;
use crate::error::SdkError;
use crate::http::ApiResponse;
use crate::upload::Uploader;

use serde_json::Value;
use std::path::{Path, PathBuf};

pub struct Assets<'a> {
    pub(crate) client: &'a FramelightClient,
}

impl<'a> Assets<'a> {
    pub async fn get(&self, asset_id: &str) -> Result<ApiResponse, SdkError> {
        let endpoint = format!("/assets/{asset_id}");
        Ok(self.client.http.get(&endpoint).await?)
    }

    /// Children of a folder asset.
    pub async fn children(
        &self,
        asset_id: &str,
        params: &ListParams,
    ) -> Result<ApiResponse, SdkError> {
        let endpoint = format!("/assets/{asset_id}/children");
        Ok(self.client.http.get_with(&endpoint, params).await?)
    }

    pub async fn create(
        &self,
        parent_asset_id: &str,
        asset: &CreateAsset,
    ) -> Result<ApiResponse, SdkError> {
        let endpoint = format!("/assets/{parent_asset_id}/children");
        Ok(self.client.http.post(&endpoint, asset).await?)
    }

    pub async fn update(
        &self,
        asset_id: &str,
        changes: &UpdateAsset,
    ) -> Result<ApiResponse, SdkError> {
        let endpoint = format!("/assets/{asset_id}");
        Ok(self.client.http.put(&endpoint, changes).await?)
    }

    pub async fn delete(&self, asset_id: &str) -> Result<(), SdkError> {
        let endpoint = format!("/assets/{asset_id}");
        self.client.http.delete(&endpoint).await?;
        Ok(())
    }

    /// Copy one asset into a destination folder.
    pub async fn copy(
        &self,
        destination_folder_id: &str,
        asset_id: &str,
    ) -> Result<ApiResponse, SdkError> {
        let endpoint = format!("/assets/{destination_folder_id}/copy");
        let body = AssetRef {
            id: asset_id.to_string(),
        };
        Ok(self.client.http.post(&endpoint, &body).await?)
    }

    /// Copy several assets into a destination folder in one request.
    /// `copy_comments` carries each asset's comments along.
    pub async fn bulk_copy(
        &self,
        destination_folder_id: &str,
        asset_ids: &[&str],
        copy_comments: bool,
    ) -> Result<ApiResponse, SdkError> {
        let endpoint = format!("/batch/assets/{destination_folder_id}/copy");
        let body = BatchAssets::new(asset_ids, copy_comments);
        Ok(self.client.http.post(&endpoint, &body).await?)
    }

    /// Move one asset into a destination folder.
    pub async fn move_to(
        &self,
        destination_folder_id: &str,
        asset_id: &str,
    ) -> Result<ApiResponse, SdkError> {
        let endpoint = format!("/assets/{destination_folder_id}/move");
        let body = AssetRef {
            id: asset_id.to_string(),
        };
        Ok(self.client.http.post(&endpoint, &body).await?)
    }

    /// Move several assets into a destination folder in one request.
    pub async fn bulk_move(
        &self,
        destination_folder_id: &str,
        asset_ids: &[&str],
    ) -> Result<ApiResponse, SdkError> {
        let endpoint = format!("/batch/assets/{destination_folder_id}/move");
        let body = BatchAssets::new(asset_ids, false);
        Ok(self.client.http.post(&endpoint, &body).await?)
    }

    /// Download an asset's original bytes into `dir`.
    ///
    /// `asset` is the descriptor as returned by [`Assets::get`] (at minimum
    /// `name` and the pre-signed `original` URL). Blocks until the file is
    /// fully on disk; see [`crate::download::AssetDownloader`].
    pub async fn download(&self, asset: &Value, dir: &Path) -> Result<PathBuf, SdkError> {
        Ok(self.client.downloader.download(asset, dir).await?)
    }

    /// Upload a local file as the content of a created asset, delegating to
    /// the chunked-upload collaborator.
    pub async fn upload_with<U: Uploader>(
        &self,
        uploader: &U,
        asset: &Value,
        file: tokio::fs::File,
    ) -> Result<(), SdkError> {
        uploader.upload(asset, file).await
    }
}
