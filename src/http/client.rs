//! Low-level HTTP client — `FramelightHttp`.
//!
//! One dispatch path shared by every resource operation: compose the
//! versioned URL, attach the session headers, send with the retry policy,
//! then classify the terminal response as a plain JSON value, a paginated
//! page, or an error. Internal to the SDK — the resource sub-clients wrap
//! this.

use crate::error::ApiError;
use crate::http::pagination::{self, PaginatedResponse};
use crate::http::retry::RetryConfig;
use crate::network;

use reqwest::header::AUTHORIZATION;
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;

/// Name of the client-identification header sent on every request.
pub const CLIENT_HEADER: &str = "x-framelight-client";

/// A classified 2xx response: either a plain decoded body or one page of a
/// multi-page listing.
#[derive(Debug, Clone)]
pub enum ApiResponse {
    Single(Value),
    Paginated(PaginatedResponse),
}

impl ApiResponse {
    /// The decoded body, flattening a paginated page back to its JSON array.
    pub fn into_json(self) -> Value {
        match self {
            ApiResponse::Single(value) => value,
            ApiResponse::Paginated(page) => Value::Array(page.results),
        }
    }

    /// Deserialize a single (non-paginated) body into `T`.
    pub fn deserialize<T: DeserializeOwned>(self) -> Result<T, serde_json::Error> {
        serde_json::from_value(self.into_json())
    }
}

/// Low-level HTTP client holding the immutable session state.
#[derive(Clone)]
pub struct FramelightHttp {
    host: String,
    token: String,
    client: Client,
    retry: RetryConfig,
}

impl FramelightHttp {
    pub fn new(host: &str, token: &str, retry: RetryConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .pool_max_idle_per_host(10)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            host: host.trim_end_matches('/').to_string(),
            token: token.to_string(),
            client,
            retry,
        }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    // ── Per-method entry points ──────────────────────────────────────────

    pub async fn get(&self, endpoint: &str) -> Result<ApiResponse, ApiError> {
        self.request(Method::GET, endpoint, None::<&()>).await
    }

    pub async fn get_with<B: Serialize>(
        &self,
        endpoint: &str,
        payload: &B,
    ) -> Result<ApiResponse, ApiError> {
        self.request(Method::GET, endpoint, Some(payload)).await
    }

    pub async fn post<B: Serialize>(
        &self,
        endpoint: &str,
        payload: &B,
    ) -> Result<ApiResponse, ApiError> {
        self.request(Method::POST, endpoint, Some(payload)).await
    }

    pub async fn put<B: Serialize>(
        &self,
        endpoint: &str,
        payload: &B,
    ) -> Result<ApiResponse, ApiError> {
        self.request(Method::PUT, endpoint, Some(payload)).await
    }

    pub async fn delete(&self, endpoint: &str) -> Result<ApiResponse, ApiError> {
        self.request(Method::DELETE, endpoint, None::<&()>).await
    }

    // ── Dispatch with retry ──────────────────────────────────────────────

    /// Send one authenticated request, applying the retry policy, and
    /// classify the terminal response.
    ///
    /// `endpoint` must begin with `/`. When `payload` is present it is
    /// serialized as the JSON request body regardless of method.
    pub async fn request<B: Serialize>(
        &self,
        method: Method,
        endpoint: &str,
        payload: Option<&B>,
    ) -> Result<ApiResponse, ApiError> {
        debug_assert!(endpoint.starts_with('/'), "endpoint path must begin with '/'");
        let url = format!("{}{}{}", self.host, network::API_PREFIX, endpoint);

        let attempts = self.retry.max_attempts.max(1);
        for attempt in 0..attempts {
            match self.do_request(&method, &url, endpoint, payload).await {
                Ok(resp) => return Ok(resp),
                Err(ApiError::RequestFailed { status, .. })
                    if self.retry.should_retry(&method, status) =>
                {
                    if attempt + 1 == attempts {
                        tracing::warn!(attempts, %url, "rate limit retries exhausted");
                        return Err(ApiError::RateLimitExhausted { attempts });
                    }
                    let delay = self.retry.delay_for_attempt(attempt);
                    tracing::debug!(
                        attempt = attempt + 1,
                        delay_ms = delay.as_millis() as u64,
                        %url,
                        "rate limited, retrying"
                    );
                    futures_timer::Delay::new(delay).await;
                }
                Err(e) => return Err(e),
            }
        }

        Err(ApiError::RateLimitExhausted { attempts })
    }

    async fn do_request<B: Serialize>(
        &self,
        method: &Method,
        url: &str,
        endpoint: &str,
        payload: Option<&B>,
    ) -> Result<ApiResponse, ApiError> {
        let mut req = self
            .client
            .request(method.clone(), url)
            .header(AUTHORIZATION, format!("Bearer {}", self.token))
            .header(CLIENT_HEADER, network::CLIENT_VERSION);

        if let Some(body) = payload {
            req = req.json(body);
        }

        let resp = req.send().await?;
        let status = resp.status();

        if status.is_success() {
            let headers = resp.headers().clone();
            if headers.contains_key(pagination::PAGE_NUMBER) {
                let total_pages = pagination::header_int(&headers, pagination::TOTAL_PAGES)?;
                if total_pages > 1 {
                    let body = resp.json::<Value>().await?;
                    let page = PaginatedResponse::from_headers(body, &headers)?;
                    return Ok(ApiResponse::Paginated(page));
                }
            }
            let body = resp.json::<Value>().await?;
            return Ok(ApiResponse::Single(body));
        }

        let status_code = status.as_u16();
        let body_text = resp.text().await.unwrap_or_default();

        if status_code == 422 && endpoint.contains("presentation") {
            return Err(ApiError::PresentationConstraint { body: body_text });
        }

        Err(ApiError::RequestFailed {
            status: status_code,
            body: body_text,
        })
    }
}
