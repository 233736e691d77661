//! Comments sub-client.

use crate::client::FramelightClient;
use crate::domain::comment::wire::CreateComment;
use crate::domain::ListParams;
use crate::error::SdkError;
use crate::http::ApiResponse;

pub struct Comments<'a> {
    pub(crate) client: &'a FramelightClient,
}

impl<'a> Comments<'a> {
    pub async fn get(&self, comment_id: &str) -> Result<ApiResponse, SdkError> {
        let endpoint = format!("/comments/{comment_id}");
        Ok(self.client.http.get(&endpoint).await?)
    }

    /// Comments on an asset.
    pub async fn list(
        &self,
        asset_id: &str,
        params: &ListParams,
    ) -> Result<ApiResponse, SdkError> {
        let endpoint = format!("/assets/{asset_id}/comments");
        Ok(self.client.http.get_with(&endpoint, params).await?)
    }

    pub async fn create(
        &self,
        asset_id: &str,
        comment: &CreateComment,
    ) -> Result<ApiResponse, SdkError> {
        let endpoint = format!("/assets/{asset_id}/comments");
        Ok(self.client.http.post(&endpoint, comment).await?)
    }

    pub async fn update(
        &self,
        comment_id: &str,
        comment: &CreateComment,
    ) -> Result<ApiResponse, SdkError> {
        let endpoint = format!("/comments/{comment_id}");
        Ok(self.client.http.post(&endpoint, comment).await?)
    }

    pub async fn delete(&self, comment_id: &str) -> Result<(), SdkError> {
        let endpoint = format!("/comments/{comment_id}");
        self.client.http.delete(&endpoint).await?;
        Ok(())
    }
}
