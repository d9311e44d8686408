use crate::geotriage_core::error::{GeotriageError, Result};
use crate::geotriage_core::exif::read_gps_coordinates;
use crate::geotriage_core::photo::PhotoResult;
use std::path::Path;
use walkdir::WalkDir;

/// File name suffixes selected during a directory walk (lowercase).
const PHOTO_SUFFIXES: &[&str] = &[".jpg", ".jpeg"];

/// Analyze a photo file or a directory tree of photos.
///
/// A single file is handed straight to the extractor (no extension check),
/// yielding exactly one entry. A directory is walked recursively in traversal
/// order, selecting `.jpg`/`.jpeg` files case-insensitively; everything else
/// is skipped. An empty result is valid output, not an error.
pub fn collect_results(path: &Path) -> Result<Vec<PhotoResult>> {
    if path.is_file() {
        return Ok(vec![photo_result(path)]);
    }

    if !path.is_dir() {
        return Err(GeotriageError::PathNotFound(path.to_path_buf()));
    }

    let mut results = Vec::new();

    for entry in WalkDir::new(path) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                // Unreadable entries (permissions, vanished files) are skipped,
                // not fatal
                log::warn!("Skipping unreadable entry: {}", e);
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        if !is_photo_name(&entry.file_name().to_string_lossy()) {
            continue;
        }

        results.push(photo_result(entry.path()));
    }

    Ok(results)
}

/// Extract one photo into a result row, keeping only the base file name.
fn photo_result(path: &Path) -> PhotoResult {
    let file_name = path
        .file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string();

    PhotoResult {
        file_name,
        coordinates: read_gps_coordinates(path),
    }
}

fn is_photo_name(file_name: &str) -> bool {
    let name = file_name.to_lowercase();
    PHOTO_SUFFIXES.iter().any(|suffix| name.ends_with(suffix))
}
