//! Teams sub-client.

use crate::client::FramelightClient;
use crate::domain::team::wire::CreateTeam;
use crate::domain::ListParams;
use crate::error::SdkError;
use crate::http::ApiResponse;

pub struct Teams<'a> {
    pub(crate) client: &'a FramelightClient,
}

impl<'a> Teams<'a> {
    /// Create a team. The session token must carry team-create scopes.
    pub async fn create(
        &self,
        account_id: &str,
        team: &CreateTeam,
    ) -> Result<ApiResponse, SdkError> {
        let endpoint = format!("/accounts/{account_id}/teams");
        Ok(self.client.http.post(&endpoint, team).await?)
    }

    /// Teams owned by one account. See [`Teams::list_all`] for every team
    /// visible to the authenticated user.
    pub async fn list(
        &self,
        account_id: &str,
        params: &ListParams,
    ) -> Result<ApiResponse, SdkError> {
        let endpoint = format!("/accounts/{account_id}/teams");
        Ok(self.client.http.get_with(&endpoint, params).await?)
    }

    /// All teams for the authenticated user, across accounts.
    pub async fn list_all(&self, params: &ListParams) -> Result<ApiResponse, SdkError> {
        Ok(self.client.http.get_with("/teams", params).await?)
    }

    pub async fn get(&self, team_id: &str) -> Result<ApiResponse, SdkError> {
        let endpoint = format!("/teams/{team_id}");
        Ok(self.client.http.get(&endpoint).await?)
    }
}
