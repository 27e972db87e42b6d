//! HTTP client factory with consistent timeout configuration.
//!
//! All outbound calls share one memoized client. New call sites MUST go
//! through [`shared_client`] rather than constructing `reqwest::Client`
//! directly.

use std::time::Duration;

use once_cell::sync::Lazy;
use reqwest::Client;

/// Default connect timeout (TCP handshake + TLS).
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Default request timeout (total request/response time). Identity provider
/// calls are expected to complete within seconds.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

static SHARED_CLIENT: Lazy<Client> = Lazy::new(build_client);

/// Process-wide client handle, constructed at most once and reused for every
/// outbound call. The process lifetime bounds it; there is no teardown.
pub fn shared_client() -> &'static Client {
    &SHARED_CLIENT
}

fn build_client() -> Client {
    Client::builder()
        .connect_timeout(DEFAULT_CONNECT_TIMEOUT)
        .timeout(DEFAULT_REQUEST_TIMEOUT)
        .build()
        .expect("Failed to build HTTP client")
}
