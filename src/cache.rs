//! Cache directory resolution and on-disk layout.
//!
//! Cached tables live under a single root directory, one subdirectory per
//! (identifier, language) pair. The paths are a pure function of the inputs;
//! entries are never invalidated or refreshed.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::table::Table;

/// Returns the default per-user cache root.
///
/// Uses the XDG-compliant cache directory (`~/.cache/statscan/` on Linux, or
/// the platform equivalent). Falls back to a relative `.statscan-cache`
/// directory when no home directory can be determined.
pub fn default_cache_dir() -> PathBuf {
    ProjectDirs::from("", "", "statscan")
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from(".statscan-cache"))
}

/// The cache paths of a single table.
///
/// - `archive_path`: where the downloaded ZIP is written. Transient; removed
///   after extraction.
/// - `table_dir`: directory the archive members are extracted into.
/// - `csv_path`: the canonical table CSV. Its existence is what makes a
///   cache hit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheLocation {
    pub archive_path: PathBuf,
    pub table_dir: PathBuf,
    pub csv_path: PathBuf,
}

impl CacheLocation {
    /// Computes the cache paths for `table` under `cache_dir`.
    pub fn new(cache_dir: &Path, table: &Table) -> Self {
        let table_dir = cache_dir.join(table.dir_name());
        Self {
            archive_path: cache_dir.join(table.archive_name()),
            csv_path: table_dir.join(table.csv_name()),
            table_dir,
        }
    }

    /// Whether the table CSV already exists locally.
    pub fn is_hit(&self) -> bool {
        self.csv_path.exists()
    }
}
