//! High-level client — `FramelightClient` with nested sub-client accessors.
//!
//! Each resource has its own sub-client in `domain/<name>/client.rs`. This
//! module keeps the builder and the accessor methods.

use crate::domain::account::client::Accounts;
use crate::domain::asset::client::Assets;
use crate::domain::comment::client::Comments;
use crate::domain::presentation::client::Presentations;
use crate::domain::project::client::Projects;
use crate::domain::review_link::client::ReviewLinks;
use crate::domain::team::client::Teams;
use crate::download::AssetDownloader;
use crate::error::SdkError;
use crate::http::{FramelightHttp, RetryConfig};

// Re-export sub-client types for convenience.
pub use crate::domain::account::client::Accounts as AccountsClient;
pub use crate::domain::asset::client::Assets as AssetsClient;
pub use crate::domain::comment::client::Comments as CommentsClient;
pub use crate::domain::presentation::client::Presentations as PresentationsClient;
pub use crate::domain::project::client::Projects as ProjectsClient;
pub use crate::domain::review_link::client::ReviewLinks as ReviewLinksClient;
pub use crate::domain::team::client::Teams as TeamsClient;

/// The primary entry point for the Framelight SDK.
///
/// Holds the immutable session state (bearer token, API host, client
/// version) and provides per-resource accessors: `client.assets()`,
/// `client.projects()`, etc. Cloning is cheap and clones share the
/// underlying connection pool; session state never changes after
/// construction, so a client can be shared freely across tasks.
#[derive(Clone)]
pub struct FramelightClient {
    pub(crate) http: FramelightHttp,
    pub(crate) downloader: AssetDownloader,
}

impl FramelightClient {
    /// A client for the default API host with the given bearer token.
    pub fn new(token: &str) -> Self {
        Self {
            http: FramelightHttp::new(crate::network::DEFAULT_API_URL, token, RetryConfig::default()),
            downloader: AssetDownloader::new(),
        }
    }

    pub fn builder() -> FramelightClientBuilder {
        FramelightClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn accounts(&self) -> Accounts<'_> {
        Accounts { client: self }
    }

    pub fn teams(&self) -> Teams<'_> {
        Teams { client: self }
    }

    pub fn projects(&self) -> Projects<'_> {
        Projects { client: self }
    }

    pub fn assets(&self) -> Assets<'_> {
        Assets { client: self }
    }

    pub fn comments(&self) -> Comments<'_> {
        Comments { client: self }
    }

    pub fn review_links(&self) -> ReviewLinks<'_> {
        ReviewLinks { client: self }
    }

    pub fn presentations(&self) -> Presentations<'_> {
        Presentations { client: self }
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct FramelightClientBuilder {
    host: String,
    token: Option<String>,
    retry: RetryConfig,
}

impl Default for FramelightClientBuilder {
    fn default() -> Self {
        Self {
            host: crate::network::DEFAULT_API_URL.to_string(),
            token: None,
            retry: RetryConfig::default(),
        }
    }
}

impl FramelightClientBuilder {
    pub fn host(mut self, host: &str) -> Self {
        self.host = host.to_string();
        self
    }

    /// The bearer token for this session. Required; the SDK does not
    /// acquire or refresh tokens.
    pub fn token(mut self, token: &str) -> Self {
        self.token = Some(token.to_string());
        self
    }

    /// Override the rate-limit retry configuration.
    pub fn retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    pub fn build(self) -> Result<FramelightClient, SdkError> {
        let token = self
            .token
            .ok_or_else(|| SdkError::Other("a bearer token is required".to_string()))?;
        Ok(FramelightClient {
            http: FramelightHttp::new(&self.host, &token, self.retry),
            downloader: AssetDownloader::new(),
        })
    }
}
