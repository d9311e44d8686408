/// A position in signed decimal degrees, rounded to 6 places.
/// Negative latitude is south of the equator, negative longitude west of the
/// prime meridian.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GpsCoordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Per-photo outcome of GPS extraction.
///
/// `coordinates` is `Some` only when both latitude and longitude tags were
/// readable; a photo never contributes a partial pair.
#[derive(Debug, Clone, PartialEq)]
pub struct PhotoResult {
    /// Base file name, no path prefix.
    pub file_name: String,
    pub coordinates: Option<GpsCoordinates>,
}
