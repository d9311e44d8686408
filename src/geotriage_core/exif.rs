use crate::geotriage_core::photo::GpsCoordinates;
use exif::{Exif, In, Reader, Tag, Value};
use std::fs;
use std::io::BufReader;
use std::path::Path;

/// Read the GPS position embedded in a photo's EXIF block.
///
/// Fails softly: an unreadable or corrupt file is logged and reported as no
/// data, so one bad photo never aborts a batch run. Returns `None` unless
/// both the latitude and longitude tags are present and well-formed.
pub fn read_gps_coordinates(path: &Path) -> Option<GpsCoordinates> {
    let exif = match read_exif(path) {
        Ok(exif) => exif,
        Err(e) => {
            log::warn!("Failed to read EXIF data from {}: {}", path.display(), e);
            return None;
        }
    };

    let latitude = dms_field(&exif, Tag::GPSLatitude)?;
    let longitude = dms_field(&exif, Tag::GPSLongitude)?;

    Some(GpsCoordinates {
        latitude: latitude * hemisphere_sign(&exif, Tag::GPSLatitudeRef, "S"),
        longitude: longitude * hemisphere_sign(&exif, Tag::GPSLongitudeRef, "W"),
    })
}

fn read_exif(path: &Path) -> Result<Exif, exif::Error> {
    let file = fs::File::open(path)?;
    let mut bufreader = BufReader::new(file);
    Reader::new().read_from_container(&mut bufreader)
}

/// Extract a degrees/minutes/seconds tag as unsigned decimal degrees,
/// rounded to 6 places. `None` when the tag is absent or not a rational
/// triple.
fn dms_field(exif: &Exif, tag: Tag) -> Option<f64> {
    let field = exif.get_field(tag, In::PRIMARY)?;

    match &field.value {
        Value::Rational(parts) => match parts.as_slice() {
            [d, m, s, ..] => Some(dms_to_decimal(d.to_f64(), m.to_f64(), s.to_f64())),
            _ => None,
        },
        Value::SRational(parts) => match parts.as_slice() {
            [d, m, s, ..] => Some(dms_to_decimal(d.to_f64(), m.to_f64(), s.to_f64())),
            _ => None,
        },
        _ => None,
    }
}

/// Sign factor from a hemisphere reference tag. The reference letter for
/// south/west flips the sign; a missing or unrecognized tag leaves the value
/// positive.
fn hemisphere_sign(exif: &Exif, tag: Tag, negative_ref: &str) -> f64 {
    match exif.get_field(tag, In::PRIMARY) {
        Some(field) if field.display_value().to_string() == negative_ref => -1.0,
        _ => 1.0,
    }
}

/// Convert a degrees/minutes/seconds triple to decimal degrees.
fn dms_to_decimal(degrees: f64, minutes: f64, seconds: f64) -> f64 {
    round6(degrees + minutes / 60.0 + seconds / 3600.0)
}

fn round6(value: f64) -> f64 {
    (value * 1_000_000.0).round() / 1_000_000.0
}
