//! Unified SDK error types.

use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    #[error("Download error: {0}")]
    Download(#[from] DownloadError),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

/// Errors from the API request pipeline.
///
/// Every terminal outcome of a dispatched request maps to exactly one of
/// these variants, so callers can branch on the failure kind instead of
/// re-parsing status codes.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Connection-level failure (DNS, TLS, reset) before a response existed.
    #[error("Transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    /// Terminal non-2xx response, carrying status and raw body.
    #[error("Request failed with status {status}: {body}")]
    RequestFailed { status: u16, body: String },

    /// Every retry attempt against a 429 was consumed.
    #[error("Rate limit still in effect after {attempts} attempts")]
    RateLimitExhausted { attempts: u32 },

    /// 422 on a presentation endpoint — the service refused the presentation
    /// parameters. Distinct from generic validation failures so callers can
    /// retry with different parameters.
    #[error("Presentation constraint violated: {body}")]
    PresentationConstraint { body: String },

    /// The response declared a page number but its pagination headers could
    /// not be read as integers.
    #[error("Malformed pagination header {header}: {value:?}")]
    InvalidPageHeader {
        header: &'static str,
        value: String,
    },
}

/// Errors while fetching an asset's bytes to local storage.
///
/// On any of these, no partially-written file is left under the final name.
#[derive(Error, Debug)]
pub enum DownloadError {
    /// The asset descriptor is missing a required key.
    #[error("Asset descriptor missing field {0:?}")]
    MissingField(&'static str),

    /// The storage URL answered with a non-success status.
    #[error("Asset fetch failed with status {status}")]
    RequestFailed { status: u16 },

    #[error("Transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("I/O failure: {0}")]
    Io(#[from] std::io::Error),
}
