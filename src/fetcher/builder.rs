//! Builder pattern implementation for creating TableFetcher instances.
//!
//! This module provides the [`TableFetcherBuilder`] struct for configuring
//! and creating [`TableFetcher`] instances: cache location, language
//! variant, provider URL, and HTTP settings.
//!
//! # Examples
//!
//! ## Basic Builder Usage
//!
//! ```rust
//! use statscan::fetcher::TableFetcherBuilder;
//! use statscan::table::Language;
//! use std::path::PathBuf;
//!
//! let fetcher = TableFetcherBuilder::new()
//!     .cache_dir(PathBuf::from("./statscan-cache"))
//!     .language(Language::French)
//!     .build();
//! ```

use super::{config::FetcherConfig, fetcher::TableFetcher};
use crate::table::Language;

use reqwest::header::{HeaderMap, HeaderValue, IntoHeaderName};
use reqwest::Proxy;
use std::path::PathBuf;

/// A builder used to create a [`TableFetcher`].
///
/// ```rust
/// # fn main()  {
/// use statscan::fetcher::TableFetcherBuilder;
///
/// let f = TableFetcherBuilder::new().cache_dir("cache".into()).build();
/// # }
/// ```
#[derive(Default)]
pub struct TableFetcherBuilder {
    config: FetcherConfig,
}

impl TableFetcherBuilder {
    /// Creates a builder with the default options.
    pub fn new() -> Self {
        TableFetcherBuilder::default()
    }

    /// Sets the root directory of the local table cache.
    ///
    /// The directory is created on the first cache miss if it does not
    /// exist.
    pub fn cache_dir(mut self, cache_dir: PathBuf) -> Self {
        self.config.cache_dir = cache_dir;
        self
    }

    /// Sets the language variant to download.
    pub fn language(mut self, language: Language) -> Self {
        self.config.language = language;
        self
    }

    /// Sets the root of the provider's download URL template.
    ///
    /// Defaults to the Statistics Canada CSV endpoint; mainly useful for
    /// pointing tests at a local server.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config.base_url = base_url.into();
        self
    }

    /// Sets the proxy used for downloads.
    pub fn proxy(mut self, proxy: Proxy) -> Self {
        self.config.proxy = Some(proxy);
        self
    }

    /// Helper method to get or create a new HeaderMap.
    fn new_header(&self) -> HeaderMap {
        match self.config.headers {
            Some(ref h) => h.to_owned(),
            _ => HeaderMap::new(),
        }
    }

    /// Add the http headers.
    ///
    /// You can call `.headers()` multiple times and all `HeaderMap` will be
    /// merged into a single one.
    ///
    /// # Example
    ///
    /// ```
    /// use reqwest::header::{self, HeaderValue, HeaderMap};
    /// use statscan::fetcher::TableFetcherBuilder;
    ///
    /// let ua = HeaderValue::from_str("curl/7.87").expect("Invalid UA");
    ///
    /// let builder = TableFetcherBuilder::new()
    ///     .headers(HeaderMap::from_iter([(header::USER_AGENT, ua)]))
    ///     .build();
    /// ```
    ///
    /// See also [`header()`].
    ///
    /// [`header()`]: TableFetcherBuilder::header
    pub fn headers(mut self, headers: HeaderMap) -> Self {
        let mut new = self.new_header();
        new.extend(headers);

        self.config.headers = Some(new);
        self
    }

    /// Add the http header
    ///
    /// # Example
    ///
    /// You can use the `.header()` chain to add multiple headers
    ///
    /// ```
    /// use reqwest::header::{self, HeaderValue};
    /// use statscan::fetcher::TableFetcherBuilder;
    ///
    /// let ua = HeaderValue::from_str("statscan-ci").expect("Invalid UA");
    /// let auth = HeaderValue::from_str("Basic aGk6MTIzNDU2Cg==").expect("Invalid auth");
    ///
    /// let builder = TableFetcherBuilder::new()
    ///     .header(header::USER_AGENT, ua)
    ///     .header(header::AUTHORIZATION, auth)
    ///     .build();
    /// ```
    ///
    /// If you need to pass in a `HeaderMap`, instead of calling `.header()`
    /// multiple times, see also [`headers()`].
    ///
    /// [`headers()`]: TableFetcherBuilder::headers
    pub fn header<K: IntoHeaderName>(mut self, name: K, value: HeaderValue) -> Self {
        let mut new = self.new_header();

        new.insert(name, value);

        self.config.headers = Some(new);
        self
    }

    /// Create the [`TableFetcher`] with the specified options.
    pub fn build(self) -> TableFetcher {
        TableFetcher::new(self.config)
    }
}
