//! Error handling for the statscan library.
//!
//! This module provides centralized error handling with the three error kinds
//! a fetch can surface: transport, filesystem, and parse failures. All errors
//! implement the standard Error trait and chain their underlying cause.

use std::io;
use thiserror::Error;

/// Errors that can happen when fetching a table.
#[derive(Error, Debug)]
pub enum Error {
    /// Network or HTTP failure while downloading a table archive.
    ///
    /// This variant wraps errors from the reqwest library, including
    /// connection failures, invalid request URLs, and non-success HTTP
    /// statuses such as a 404 for an identifier the provider does not know.
    #[error("Transport error")]
    Transport {
        #[from]
        source: reqwest::Error,
    },

    /// Cache directory or file could not be created, written, or read.
    #[error("Filesystem error")]
    Filesystem {
        #[from]
        source: io::Error,
    },

    /// Downloaded or cached content could not be decoded into tabular form.
    ///
    /// Covers malformed ZIP archives, archives without a CSV member, and CSV
    /// contents the dataframe reader rejects.
    #[error("Parse error: {message}")]
    Parse {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl Error {
    /// Builds a [`Error::Parse`] without an underlying cause.
    pub(crate) fn parse(message: impl Into<String>) -> Self {
        Error::Parse {
            message: message.into(),
            source: None,
        }
    }
}

impl From<zip::result::ZipError> for Error {
    fn from(source: zip::result::ZipError) -> Self {
        Error::Parse {
            message: "invalid table archive".into(),
            source: Some(Box::new(source)),
        }
    }
}

impl From<polars::error::PolarsError> for Error {
    fn from(source: polars::error::PolarsError) -> Self {
        Error::Parse {
            message: "invalid table contents".into(),
            source: Some(Box::new(source)),
        }
    }
}

/// Result type alias for operations that can fail with a statscan error.
pub type Result<T> = std::result::Result<T, Error>;
