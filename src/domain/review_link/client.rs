//! Review links sub-client.

use crate::client::FramelightClient;
use crate::domain::review_link::wire::{CreateReviewLink, ReviewLinkAssets, UpdateReviewLink};
use crate::error::SdkError;
use crate::http::ApiResponse;

pub struct ReviewLinks<'a> {
    pub(crate) client: &'a FramelightClient,
}

impl<'a> ReviewLinks<'a> {
    /// Review links on a project.
    pub async fn list(&self, project_id: &str) -> Result<ApiResponse, SdkError> {
        let endpoint = format!("/projects/{project_id}/review_links");
        Ok(self.client.http.get(&endpoint).await?)
    }

    pub async fn create(
        &self,
        project_id: &str,
        link: &CreateReviewLink,
    ) -> Result<ApiResponse, SdkError> {
        let endpoint = format!("/projects/{project_id}/review_links");
        Ok(self.client.http.post(&endpoint, link).await?)
    }

    pub async fn get(&self, link_id: &str) -> Result<ApiResponse, SdkError> {
        let endpoint = format!("/review_links/{link_id}");
        Ok(self.client.http.get(&endpoint).await?)
    }

    pub async fn update(
        &self,
        link_id: &str,
        changes: &UpdateReviewLink,
    ) -> Result<ApiResponse, SdkError> {
        let endpoint = format!("/review_links/{link_id}");
        Ok(self.client.http.put(&endpoint, changes).await?)
    }

    /// Attach or replace the assets shared through a review link.
    pub async fn update_assets(
        &self,
        link_id: &str,
        asset_ids: &[&str],
    ) -> Result<ApiResponse, SdkError> {
        let endpoint = format!("/review_links/{link_id}/assets");
        let body = ReviewLinkAssets {
            asset_ids: asset_ids.iter().map(|id| (*id).to_string()).collect(),
        };
        Ok(self.client.http.post(&endpoint, &body).await?)
    }

    /// Items currently shared through a review link.
    pub async fn items(&self, link_id: &str) -> Result<ApiResponse, SdkError> {
        let endpoint = format!("/review_links/{link_id}/items");
        Ok(self.client.http.get(&endpoint).await?)
    }
}
