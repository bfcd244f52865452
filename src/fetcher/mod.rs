//! Fetcher module containing the table fetcher, builder pattern, and configuration.
//!
//! This module provides the main [`TableFetcher`] struct and its associated
//! builder for configuring and executing table fetches, plus the
//! [`get_table`] convenience function for one-off calls with defaults.
//!
//! # Overview
//!
//! The fetcher module is organized into three main components:
//!
//! - `fetcher` - Core TableFetcher struct with the cache-or-download logic
//! - `builder` - TableFetcherBuilder for flexible configuration
//! - `config` - Configuration structure and defaults
//!
//! # Examples
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! use statscan::fetcher::get_table;
//!
//! # fn example() -> Result<(), statscan::Error> {
//! let df = get_table("14-10-0287")?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Advanced Configuration
//!
//! ```rust,no_run
//! use statscan::fetcher::TableFetcherBuilder;
//! use statscan::table::Language;
//! use std::path::PathBuf;
//!
//! # fn example() -> Result<(), statscan::Error> {
//! let fetcher = TableFetcherBuilder::new()
//!     .cache_dir(PathBuf::from("/tmp/statscan"))
//!     .language(Language::French)
//!     .build();
//!
//! let df = fetcher.get_table("14-10-0287")?;
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod config;
pub mod fetcher;

pub use builder::TableFetcherBuilder;
pub use config::FetcherConfig;
pub use fetcher::TableFetcher;

use crate::error::Result;
use polars::prelude::DataFrame;

/// Fetches a table with the default options (English, default cache
/// directory, provider endpoint) and returns it as a Polars `DataFrame`.
pub fn get_table(table_id: &str) -> Result<DataFrame> {
    TableFetcher::default().get_table(table_id)
}
