//! Statscan is a crate aiming at providing a simple way to fetch Statistics
//! Canada data tables as Polars data frames, with a local download cache.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use statscan::get_table;
//!
//! # fn main() -> Result<(), statscan::Error> {
//! // Labour Force Survey data, downloaded on first use, cached afterwards.
//! let df = get_table("14-10-0287")?;
//! println!("{} rows x {} columns", df.height(), df.width());
//! # Ok(())
//! # }
//! ```
//!
//! The French edition of the same table, with a custom cache location:
//!
//! ```rust,no_run
//! use statscan::{Language, TableFetcherBuilder};
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<(), statscan::Error> {
//! let fetcher = TableFetcherBuilder::new()
//!     .cache_dir(PathBuf::from("/tmp/statscan"))
//!     .language(Language::French)
//!     .build();
//! let df = fetcher.get_table("14-10-0287")?;
//! # Ok(())
//! # }
//! ```
//!
//! # Module Organization
//!
//! The statscan crate is organized into several modules:
//!
//! - [`archive`] - Extraction of the table CSV from downloaded ZIP archives
//! - [`cache`] - Cache directory resolution and on-disk layout
//! - [`error`] - Centralized error handling with the `Error` enum
//! - [`fetcher`] - The main `TableFetcher` and `TableFetcherBuilder`
//! - [`http`] - Blocking HTTP client creation
//! - [`table`] - Table identification and download-URL construction

pub mod archive;
pub mod cache;
pub mod error;
pub mod fetcher;
pub mod http;
pub mod table;

pub use cache::{default_cache_dir, CacheLocation};
pub use error::{Error, Result};
pub use fetcher::{get_table, TableFetcher, TableFetcherBuilder};
pub use http::{create_http_client, HttpClientConfig};
pub use polars::prelude::DataFrame;
pub use table::{Language, Table, STATCAN_CSV_BASE};
