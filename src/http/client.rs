//! HTTP client setup.
//!
//! This module provides blocking HTTP client creation with optional proxy
//! configuration and custom default headers. The whole fetch runs on the
//! caller's thread; timeouts are whatever the client defaults to.

use reqwest::{blocking::Client, header::HeaderMap, Proxy};

/// Configuration for HTTP client setup.
#[derive(Debug, Clone, Default)]
pub struct HttpClientConfig {
    /// Optional proxy configuration.
    pub proxy: Option<Proxy>,
    /// Default headers to include with all requests.
    pub headers: Option<HeaderMap>,
}

/// Creates a blocking HTTP client from the given configuration.
///
/// # Example
///
/// ```rust
/// use statscan::http::{create_http_client, HttpClientConfig};
///
/// let config = HttpClientConfig::default();
/// let client = create_http_client(config).unwrap();
/// ```
pub fn create_http_client(config: HttpClientConfig) -> Result<Client, reqwest::Error> {
    let mut builder = Client::builder();

    if let Some(proxy) = config.proxy {
        builder = builder.proxy(proxy);
    }

    if let Some(headers) = config.headers {
        builder = builder.default_headers(headers);
    }

    builder.build()
}
