//! HTTP module containing HTTP client functionality.
//!
//! This module provides blocking HTTP client creation with optional proxy
//! support and default headers. The client performs a single GET per cache
//! miss; there is no retry policy.
//!
//! # Examples
//!
//! ## Creating an HTTP Client
//!
//! ```rust
//! use statscan::http::{create_http_client, HttpClientConfig};
//! use reqwest::header::{HeaderMap, USER_AGENT};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut headers = HeaderMap::new();
//! headers.insert(USER_AGENT, "MyApp/1.0".parse()?);
//!
//! let config = HttpClientConfig {
//!     proxy: None,
//!     headers: Some(headers),
//! };
//!
//! let client = create_http_client(config)?;
//! # Ok(())
//! # }
//! ```

pub mod client;

pub use client::{create_http_client, HttpClientConfig};
