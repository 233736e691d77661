//! Presentations sub-client.
//!
//! An asset can carry at most one presentation link; creating a second one
//! fails with [`ApiError::PresentationConstraint`](crate::error::ApiError),
//! which callers can match on to recover.

use crate::client::FramelightClient;
use crate::domain::presentation::wire::CreatePresentation;
use crate::error::SdkError;
use crate::http::ApiResponse;

pub struct Presentations<'a> {
    pub(crate) client: &'a FramelightClient,
}

impl<'a> Presentations<'a> {
    pub async fn create(
        &self,
        asset_id: &str,
        presentation: &CreatePresentation,
    ) -> Result<ApiResponse, SdkError> {
        let endpoint = format!("/assets/{asset_id}/presentations");
        Ok(self.client.http.post(&endpoint, presentation).await?)
    }
}
