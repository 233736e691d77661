//! Accounts sub-client — current user and account audit logs.

use crate::client::FramelightClient;
use crate::error::SdkError;
use crate::http::ApiResponse;

pub struct Accounts<'a> {
    pub(crate) client: &'a FramelightClient,
}

impl<'a> Accounts<'a> {
    /// Get the authenticated user.
    pub async fn me(&self) -> Result<ApiResponse, SdkError> {
        Ok(self.client.http.get("/me").await?)
    }

    /// Get audit logs for an account.
    pub async fn audit_logs(&self, account_id: &str) -> Result<ApiResponse, SdkError> {
        let endpoint = format!("/accounts/{account_id}/audit_logs");
        Ok(self.client.http.get(&endpoint).await?)
    }
}
