// csv_export.rs
use crate::export::ExportError;
use crate::scraper::Listing;
use chrono::Local;
use std::path::{Path, PathBuf};

/// CSV column names, in output order.
const COLUMNS: [&str; 5] = ["Title", "Price", "Location", "Date Posted", "URL"];

/// Builds a fresh timestamped CSV path under `dir`.
///
/// Names follow `olx_car_covers_<YYYYMMDD_HHMMSS>.csv`. If a file with that
/// name already exists (two runs inside the same second), a numeric suffix
/// is bumped until the name is free, so a prior run's output is never
/// overwritten.
pub fn timestamped_path(dir: &Path) -> PathBuf {
    let stamp = Local::now().format("%Y%m%d_%H%M%S");
    let mut path = dir.join(format!("olx_car_covers_{stamp}.csv"));
    let mut n = 1;
    while path.exists() {
        n += 1;
        path = dir.join(format!("olx_car_covers_{stamp}_{n}.csv"));
    }
    path
}

/// Writes all listings to `path`: one header row, then one row per listing
/// in collection order. Returns the path written on success.
pub fn save_to_csv(listings: &[Listing], path: &Path) -> Result<PathBuf, ExportError> {
    let mut writer = csv::Writer::from_path(path).map_err(|e| ExportError::Io(e.to_string()))?;

    // serialize() emits the header from the field renames on the first
    // record; an empty run still needs one
    if listings.is_empty() {
        writer
            .write_record(COLUMNS)
            .map_err(|e| ExportError::Csv(e.to_string()))?;
    }

    for listing in listings {
        writer
            .serialize(listing)
            .map_err(|e| ExportError::Csv(e.to_string()))?;
    }

    writer.flush().map_err(|e| ExportError::Io(e.to_string()))?;
    Ok(path.to_path_buf())
}
