//! ZIP extraction for downloaded table archives.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use tracing::debug;
use zip::ZipArchive;

use crate::error::{Error, Result};

/// Extracts a downloaded table archive into `table_dir` and returns the path
/// of the table CSV, renamed to `csv_name`.
///
/// The archive members are extracted as-is (provider archives carry a
/// metadata CSV next to the data). The first member whose name ends in
/// `.csv` is treated as the table data, matching the provider's archive
/// layout.
pub fn extract_table_csv(archive_path: &Path, table_dir: &Path, csv_name: &str) -> Result<PathBuf> {
    let file = File::open(archive_path)?;
    let mut archive = ZipArchive::new(file)?;

    let mut member: Option<String> = None;
    for i in 0..archive.len() {
        let entry = archive.by_index(i)?;
        if entry.name().to_lowercase().ends_with(".csv") {
            member = Some(entry.name().to_string());
            break;
        }
    }
    let member = member.ok_or_else(|| {
        Error::parse(format!(
            "no CSV member in archive {}",
            archive_path.display()
        ))
    })?;

    archive.extract(table_dir)?;
    debug!(member = %member, dir = %table_dir.display(), "extracted table archive");

    let extracted = table_dir.join(&member);
    let target = table_dir.join(csv_name);
    if extracted != target {
        fs::rename(&extracted, &target)?;
    }

    Ok(target)
}
