//! Upload collaborator seam.
//!
//! The chunked multi-part upload lives outside this crate; the SDK consumes
//! it through this narrow interface only.

use crate::error::SdkError;
use serde_json::Value;

/// An opaque chunked-upload implementation.
///
/// `asset` is the created asset's descriptor (carrying the service's upload
/// URLs); `file` is the local source, opened by the caller.
pub trait Uploader {
    fn upload(
        &self,
        asset: &Value,
        file: tokio::fs::File,
    ) -> impl std::future::Future<Output = Result<(), SdkError>> + Send;
}
