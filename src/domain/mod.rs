//! Resource modules (vertical slices): sub-client + request wire types.

pub mod account;
pub mod asset;
pub mod comment;
pub mod presentation;
pub mod project;
pub mod review_link;
pub mod team;

use serde::Serialize;

/// Common listing parameters accepted by collection endpoints.
///
/// Responses spanning more than one page come back as
/// [`ApiResponse::Paginated`](crate::http::ApiResponse); advance by
/// re-issuing the call with an incremented `page`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}
