//! Archive extraction functionality.
//!
//! This module extracts the table CSV out of a downloaded ZIP archive on
//! disk and renames it to the canonical cache file name.

pub mod zip;

pub use zip::extract_table_csv;
