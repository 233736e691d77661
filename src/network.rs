//! Network constants for the Framelight SDK.

/// Default REST API host.
pub const DEFAULT_API_URL: &str = "https://api.framelight.io";

/// Versioned API prefix prepended to every endpoint path.
pub const API_PREFIX: &str = "/v2";

/// Value of the client-identification header, resolved at build time.
pub const CLIENT_VERSION: &str = concat!("rust-sdk/", env!("CARGO_PKG_VERSION"));
