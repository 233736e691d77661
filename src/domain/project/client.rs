//! Projects sub-client.

use crate::client::FramelightClient;
use crate::domain::project::wire::CreateProject;
use crate::domain::ListParams;
use crate::error::SdkError;
use crate::http::ApiResponse;

pub struct Projects<'a> {
    pub(crate) client: &'a FramelightClient,
}

impl<'a> Projects<'a> {
    pub async fn create(
        &self,
        team_id: &str,
        project: &CreateProject,
    ) -> Result<ApiResponse, SdkError> {
        let endpoint = format!("/teams/{team_id}/projects");
        Ok(self.client.http.post(&endpoint, project).await?)
    }

    pub async fn get(&self, project_id: &str) -> Result<ApiResponse, SdkError> {
        let endpoint = format!("/projects/{project_id}");
        Ok(self.client.http.get(&endpoint).await?)
    }

    /// Projects owned by a team.
    pub async fn list(
        &self,
        team_id: &str,
        params: &ListParams,
    ) -> Result<ApiResponse, SdkError> {
        let endpoint = format!("/teams/{team_id}/projects");
        Ok(self.client.http.get_with(&endpoint, params).await?)
    }

    pub async fn collaborators(
        &self,
        project_id: &str,
        params: &ListParams,
    ) -> Result<ApiResponse, SdkError> {
        let endpoint = format!("/projects/{project_id}/collaborators");
        Ok(self.client.http.get_with(&endpoint, params).await?)
    }

    /// Invited collaborators who have not yet joined.
    pub async fn pending_collaborators(
        &self,
        project_id: &str,
        params: &ListParams,
    ) -> Result<ApiResponse, SdkError> {
        let endpoint = format!("/projects/{project_id}/pending_collaborators");
        Ok(self.client.http.get_with(&endpoint, params).await?)
    }
}
