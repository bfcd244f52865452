//! Table identification and download-URL construction.
//!
//! This module contains the [`Table`] struct pairing a table identifier with
//! a [`Language`] variant, and the logic turning that pair into the
//! provider's download URL and the file names used by the local cache.
//!
//! # Examples
//!
//! ```rust
//! use statscan::table::{Language, Table, STATCAN_CSV_BASE};
//!
//! let table = Table::new("14-10-0287", Language::English);
//! assert_eq!(
//!     table.url(STATCAN_CSV_BASE),
//!     "https://www150.statcan.gc.ca/n1/tbl/csv/14100287-eng.zip"
//! );
//! assert_eq!(table.csv_name(), "14-10-0287-eng.csv");
//! ```

use std::fmt;

/// Root of the provider's CSV download URL template.
pub const STATCAN_CSV_BASE: &str = "https://www150.statcan.gc.ca/n1/tbl/csv/";

/// Which localized edition of a table is requested.
///
/// The language selects the archive variant to download and the field
/// separator of the CSV inside it: the provider publishes English tables
/// comma-separated and French tables semicolon-separated.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    #[default]
    English,
    French,
}

impl Language {
    /// The language code used in archive file names and download URLs.
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "eng",
            Language::French => "fra",
        }
    }

    /// The CSV field separator the provider uses for this language.
    pub fn separator(&self) -> u8 {
        match self {
            Language::English => b',',
            Language::French => b';',
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Represents a table to be fetched.
///
/// The identifier is the provider's public table number, with or without
/// dashes (e.g. `"14-10-0287"` or `"14100287"`). It is not validated against
/// the catalog; an unknown identifier surfaces as a transport error when the
/// provider rejects the download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    /// Identifier as supplied by the caller. Names the cache files.
    pub id: String,
    /// Localized edition to download.
    pub language: Language,
}

impl Table {
    /// Creates a new [`Table`].
    pub fn new(id: &str, language: Language) -> Self {
        Self {
            id: String::from(id),
            language,
        }
    }

    /// The provider's product id: the identifier with dashes and spaces
    /// stripped, as it appears in download URLs.
    pub fn product_id(&self) -> String {
        self.id.replace('-', "").replace(' ', "")
    }

    /// The download URL for this table under the given base URL.
    pub fn url(&self, base_url: &str) -> String {
        format!(
            "{}/{}-{}.zip",
            base_url.trim_end_matches('/'),
            self.product_id(),
            self.language.code()
        )
    }

    /// File name of the downloaded archive inside the cache root.
    pub fn archive_name(&self) -> String {
        format!("{}-{}.zip", self.id, self.language.code())
    }

    /// Directory name holding the extracted table files.
    pub fn dir_name(&self) -> String {
        format!("{}-{}", self.id, self.language.code())
    }

    /// Canonical file name of the cached table CSV.
    pub fn csv_name(&self) -> String {
        format!("{}-{}.csv", self.id, self.language.code())
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.id, self.language)
    }
}
