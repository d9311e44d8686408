use crate::geotriage_core::error::{GeotriageError, Result};
use crate::geotriage_core::photo::PhotoResult;
use std::path::Path;

/// Fixed report file name, written to the working directory and overwritten
/// on every run.
pub const REPORT_FILE_NAME: &str = "image_geodata.csv";

/// Column text for photos without coordinates. Written to both the latitude
/// and longitude columns, never just one.
const NO_GPS_DATA: &str = "No GPS data";

/// Serialize results to a CSV report at `path`, replacing any existing file.
///
/// The header row is always written, so an empty result sequence still
/// produces a valid report. A write failure is fatal to the run: without the
/// report there is nothing to distribute.
pub fn write_report(path: &Path, results: &[PhotoResult]) -> Result<()> {
    let fail = |reason: String| GeotriageError::ReportWrite {
        path: path.to_path_buf(),
        reason,
    };

    let mut writer = csv::Writer::from_path(path).map_err(|e| fail(e.to_string()))?;

    writer
        .write_record(["File Name", "Latitude", "Longitude"])
        .map_err(|e| fail(e.to_string()))?;

    for result in results {
        writer
            .write_record(record_for(result))
            .map_err(|e| fail(e.to_string()))?;
    }

    writer.flush().map_err(|e| fail(e.to_string()))?;

    Ok(())
}

/// Render one result as its three report columns.
fn record_for(result: &PhotoResult) -> [String; 3] {
    match result.coordinates {
        Some(coordinates) => [
            result.file_name.clone(),
            coordinates.latitude.to_string(),
            coordinates.longitude.to_string(),
        ],
        None => [
            result.file_name.clone(),
            NO_GPS_DATA.to_string(),
            NO_GPS_DATA.to_string(),
        ],
    }
}
