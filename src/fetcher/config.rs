//! Configuration structure and defaults for the table fetcher.

use std::path::PathBuf;

use reqwest::{header::HeaderMap, Proxy};

use crate::cache::default_cache_dir;
use crate::table::{Language, STATCAN_CSV_BASE};

/// Configuration structure for the fetcher.
#[derive(Debug, Clone)]
pub struct FetcherConfig {
    /// Root directory of the local table cache.
    pub cache_dir: PathBuf,
    /// Localized edition to download.
    pub language: Language,
    /// Root of the provider's download URL template.
    pub base_url: String,
    /// Custom HTTP headers.
    pub headers: Option<HeaderMap>,
    /// Optional proxy configuration.
    pub proxy: Option<Proxy>,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            cache_dir: default_cache_dir(),
            language: Language::default(),
            base_url: String::from(STATCAN_CSV_BASE),
            headers: None,
            proxy: None,
        }
    }
}
