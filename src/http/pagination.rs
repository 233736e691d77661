//! Paginated list responses.
//!
//! The API signals pagination out-of-band through the `page-number`,
//! `per-page`, `total-pages` and `total` response headers rather than a body
//! envelope, so list bodies stay plain JSON arrays and single-page listings
//! come back unwrapped.

use crate::error::ApiError;
use reqwest::header::HeaderMap;
use serde_json::Value;

pub const PAGE_NUMBER: &str = "page-number";
pub const PER_PAGE: &str = "per-page";
pub const TOTAL_PAGES: &str = "total-pages";
pub const TOTAL: &str = "total";

/// One page of a multi-page listing, with its page metadata.
///
/// Iterating yields the page's results in server order. Advancing to the
/// next page is the caller's job — re-issue the originating call with an
/// incremented page parameter.
#[derive(Debug, Clone)]
pub struct PaginatedResponse {
    pub results: Vec<Value>,
    pub page: u32,
    pub page_size: u32,
    pub total: u64,
    pub total_pages: u32,
}

impl PaginatedResponse {
    /// Build a page from a decoded 2xx body plus its pagination headers.
    ///
    /// Malformed header values are an upstream contract violation and fail
    /// with [`ApiError::InvalidPageHeader`] rather than defaulting.
    pub(crate) fn from_headers(body: Value, headers: &HeaderMap) -> Result<Self, ApiError> {
        let results = match body {
            Value::Array(items) => items,
            other => vec![other],
        };
        Ok(Self {
            results,
            page: header_int(headers, PAGE_NUMBER)? as u32,
            page_size: header_int(headers, PER_PAGE)? as u32,
            total: header_int(headers, TOTAL)?,
            total_pages: header_int(headers, TOTAL_PAGES)? as u32,
        })
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.results.iter()
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

impl IntoIterator for PaginatedResponse {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.into_iter()
    }
}

impl<'a> IntoIterator for &'a PaginatedResponse {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.iter()
    }
}

/// Read a pagination header as an integer, failing fast on anything else.
pub(crate) fn header_int(headers: &HeaderMap, name: &'static str) -> Result<u64, ApiError> {
    let raw = headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .ok_or(ApiError::InvalidPageHeader {
            header: name,
            value: String::new(),
        })?;
    raw.trim()
        .parse()
        .map_err(|_| ApiError::InvalidPageHeader {
            header: name,
            value: raw.to_string(),
        })
}
