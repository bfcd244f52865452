//! Core fetcher implementation with the cache-or-download logic.
//!
//! This module contains the main [`TableFetcher`] struct that turns a table
//! identifier into a Polars `DataFrame`: compute the cache paths, download
//! and extract the provider archive on a cache miss, and parse the cached
//! CSV.
//!
//! # Examples
//!
//! ```rust,no_run
//! use statscan::fetcher::TableFetcherBuilder;
//! use statscan::table::Language;
//!
//! # fn example() -> Result<(), statscan::Error> {
//! let fetcher = TableFetcherBuilder::new()
//!     .language(Language::French)
//!     .build();
//!
//! let df = fetcher.get_table("14-10-0287")?;
//! println!("{} rows", df.height());
//! # Ok(())
//! # }
//! ```

use super::config::FetcherConfig;
use crate::archive::extract_table_csv;
use crate::cache::CacheLocation;
use crate::error::Result;
use crate::http::{create_http_client, HttpClientConfig};
use crate::table::{Language, Table};

use polars::prelude::{CsvParseOptions, CsvReadOptions, DataFrame, SerReader};
use reqwest::header::HeaderMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Fetches provider tables through a local download cache.
///
/// A fetcher can be created via its builder:
///
/// ```rust
/// # fn main()  {
/// use statscan::fetcher::TableFetcherBuilder;
///
/// let f = TableFetcherBuilder::new().build();
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct TableFetcher {
    config: FetcherConfig,
}

impl TableFetcher {
    /// Creates a new TableFetcher with the given configuration.
    pub(crate) fn new(config: FetcherConfig) -> Self {
        Self { config }
    }

    /// Gets the root directory of the local table cache.
    pub fn cache_dir(&self) -> &Path {
        &self.config.cache_dir
    }

    /// Gets the language variant downloads use.
    pub fn language(&self) -> Language {
        self.config.language
    }

    /// Gets the root of the provider's download URL template.
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Gets the custom headers.
    pub fn headers(&self) -> Option<&HeaderMap> {
        self.config.headers.as_ref()
    }

    /// Downloads the table archive if it is not cached yet and returns the
    /// path of the cached table CSV.
    ///
    /// On a cache hit no network access happens at all. On a miss, a single
    /// blocking GET downloads the archive, the CSV is extracted next to it,
    /// and the archive is removed.
    pub fn download_table(&self, table_id: &str) -> Result<PathBuf> {
        let table = Table::new(table_id, self.config.language);
        let location = CacheLocation::new(&self.config.cache_dir, &table);

        if location.is_hit() {
            debug!(table = %table, "cache hit, skipping download");
            return Ok(location.csv_path);
        }

        fs::create_dir_all(&location.table_dir)?;

        let client = create_http_client(HttpClientConfig {
            proxy: self.config.proxy.clone(),
            headers: self.config.headers.clone(),
        })?;

        let url = table.url(&self.config.base_url);
        debug!(%url, "cache miss, downloading archive");
        let response = client.get(url.as_str()).send()?.error_for_status()?;
        let bytes = response.bytes()?;
        fs::write(&location.archive_path, &bytes)?;

        let csv_path =
            extract_table_csv(&location.archive_path, &location.table_dir, &table.csv_name())?;
        fs::remove_file(&location.archive_path)?;
        debug!(path = %csv_path.display(), "table cached");

        Ok(csv_path)
    }

    /// Fetches a table and returns it as a Polars `DataFrame`.
    ///
    /// The cached CSV is trusted blindly; a corrupt file surfaces as
    /// [`Error::Parse`](crate::Error::Parse) rather than triggering a
    /// re-download.
    pub fn get_table(&self, table_id: &str) -> Result<DataFrame> {
        let csv_path = self.download_table(table_id)?;

        let df = CsvReadOptions::default()
            .with_has_header(true)
            .with_parse_options(
                CsvParseOptions::default().with_separator(self.config.language.separator()),
            )
            .try_into_reader_with_file_path(Some(csv_path))?
            .finish()?;

        Ok(df)
    }
}

impl Default for TableFetcher {
    fn default() -> Self {
        Self::new(FetcherConfig::default())
    }
}
