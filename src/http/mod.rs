//! HTTP request pipeline — dispatch, retry, and response classification.

pub mod client;
pub mod pagination;
pub mod retry;

pub use client::{ApiResponse, FramelightHttp};
pub use pagination::PaginatedResponse;
pub use retry::RetryConfig;
