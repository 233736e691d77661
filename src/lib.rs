//! # Framelight SDK
//!
//! A Rust client for the Framelight media-review API: teams, projects,
//! assets, comments, review links and presentation links over HTTPS.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **HTTP core** — `FramelightHttp`: authenticated dispatch with bounded
//!    retry on rate limiting, and uniform classification of responses into
//!    plain JSON, paginated pages, or typed errors
//! 2. **Transfers** — `AssetDownloader` for pre-signed originals; the
//!    chunked upload is consumed through the [`upload::Uploader`] seam
//! 3. **Resources** — thin per-resource sub-clients mapping parameters to
//!    endpoints over the HTTP core
//! 4. **High-Level Client** — `FramelightClient` with nested sub-clients
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use framelight_sdk::prelude::*;
//!
//! let client = FramelightClient::builder()
//!     .token(&std::env::var("FRAMELIGHT_TOKEN")?)
//!     .build()?;
//!
//! let me = client.accounts().me().await?;
//! let children = client.assets().children("asset_id", &ListParams::default()).await?;
//! ```

/// Unified SDK error types.
pub mod error;

/// Network constants: API host, versioned prefix, client version.
pub mod network;

/// HTTP request pipeline: dispatch, retry, response classification.
pub mod http;

/// Asset byte downloads from pre-signed storage URLs.
pub mod download;

/// Narrow seam to the external chunked-upload component.
pub mod upload;

/// Resource modules (vertical slices).
pub mod domain;

/// `FramelightClient` — the primary entry point.
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    pub use crate::client::{FramelightClient, FramelightClientBuilder};
    pub use crate::domain::asset::{AssetType, CreateAsset, UpdateAsset};
    pub use crate::domain::comment::CreateComment;
    pub use crate::domain::presentation::CreatePresentation;
    pub use crate::domain::project::CreateProject;
    pub use crate::domain::review_link::{CreateReviewLink, UpdateReviewLink};
    pub use crate::domain::team::CreateTeam;
    pub use crate::domain::ListParams;
    pub use crate::download::AssetDownloader;
    pub use crate::error::{ApiError, DownloadError, SdkError};
    pub use crate::http::{ApiResponse, PaginatedResponse, RetryConfig};
    pub use crate::network::DEFAULT_API_URL;
    pub use crate::upload::Uploader;
}
