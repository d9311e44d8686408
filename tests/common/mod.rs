// Shared test fixtures: minimal JPEG files with hand-assembled EXIF blocks,
// so the test suite carries no binary photo assets.
//
// Layout produced: SOI, one APP1 segment ("Exif\0\0" + little-endian TIFF),
// EOI. The TIFF holds IFD0 with either a GPS sub-IFD pointer or a camera tag,
// which is all the extractor ever looks at.

/// Degrees/minutes/seconds as whole numbers, written as rationals over 1.
pub type Dms = (u32, u32, u32);

enum Payload {
    Inline([u8; 4]),
    Rationals(Vec<(u32, u32)>),
}

struct Entry {
    tag: u16,
    kind: u16,
    count: u32,
    payload: Payload,
}

/// A photo carrying both GPS coordinate tags and both hemisphere refs.
pub fn jpeg_with_gps(lat: Dms, lat_ref: &str, lon: Dms, lon_ref: &str) -> Vec<u8> {
    build_jpeg(Some(lat), Some(lat_ref), Some(lon), Some(lon_ref))
}

/// A photo with coordinate tags but no hemisphere refs (reads as positive).
pub fn jpeg_with_gps_no_refs(lat: Dms, lon: Dms) -> Vec<u8> {
    build_jpeg(Some(lat), None, Some(lon), None)
}

/// A photo with a latitude tag only; the extractor must report no data.
pub fn jpeg_with_partial_gps(lat: Dms) -> Vec<u8> {
    build_jpeg(Some(lat), Some("N"), None, None)
}

/// A photo with EXIF (a camera tag) but no GPS tag group at all.
pub fn jpeg_without_gps() -> Vec<u8> {
    build_jpeg(None, None, None, None)
}

/// A JPEG with no EXIF segment whatsoever.
pub fn jpeg_without_exif() -> Vec<u8> {
    vec![0xFF, 0xD8, 0xFF, 0xD9]
}

/// Not an image at all.
pub fn corrupt_bytes() -> Vec<u8> {
    b"this is not a jpeg".to_vec()
}

fn build_jpeg(
    lat: Option<Dms>,
    lat_ref: Option<&str>,
    lon: Option<Dms>,
    lon_ref: Option<&str>,
) -> Vec<u8> {
    let mut gps_entries = Vec::new();

    // GPS IFD entries must stay in ascending tag order
    if let Some(r) = lat_ref {
        gps_entries.push(ascii_entry(0x0001, r));
    }
    if let Some(d) = lat {
        gps_entries.push(dms_entry(0x0002, d));
    }
    if let Some(r) = lon_ref {
        gps_entries.push(ascii_entry(0x0003, r));
    }
    if let Some(d) = lon {
        gps_entries.push(dms_entry(0x0004, d));
    }

    let tiff = build_tiff(gps_entries);

    let mut jpeg = vec![0xFF, 0xD8]; // SOI
    jpeg.extend_from_slice(&[0xFF, 0xE1]); // APP1
    let segment_len = 2 + 6 + tiff.len(); // length field + "Exif\0\0" + TIFF
    jpeg.extend_from_slice(&(segment_len as u16).to_be_bytes());
    jpeg.extend_from_slice(b"Exif\0\0");
    jpeg.extend_from_slice(&tiff);
    jpeg.extend_from_slice(&[0xFF, 0xD9]); // EOI
    jpeg
}

fn ascii_entry(tag: u16, letter: &str) -> Entry {
    let mut value = [0u8; 4];
    value[0] = letter.as_bytes()[0];
    Entry {
        tag,
        kind: 2, // ASCII, NUL-terminated
        count: 2,
        payload: Payload::Inline(value),
    }
}

fn dms_entry(tag: u16, (d, m, s): Dms) -> Entry {
    Entry {
        tag,
        kind: 5, // RATIONAL
        count: 3,
        payload: Payload::Rationals(vec![(d, 1), (m, 1), (s, 1)]),
    }
}

fn build_tiff(gps_entries: Vec<Entry>) -> Vec<u8> {
    let mut tiff = Vec::new();
    tiff.extend_from_slice(b"II"); // little-endian
    tiff.extend_from_slice(&42u16.to_le_bytes());
    tiff.extend_from_slice(&8u32.to_le_bytes()); // IFD0 offset

    if gps_entries.is_empty() {
        // IFD0 with a lone camera make tag, no GPS sub-IFD
        write_ifd(
            &mut tiff,
            vec![Entry {
                tag: 0x010F,
                kind: 2,
                count: 4,
                payload: Payload::Inline(*b"Cam\0"),
            }],
            8,
        );
        return tiff;
    }

    // IFD0 holds only the GPS sub-IFD pointer; the sub-IFD follows it
    let gps_ifd_offset = 8 + ifd_size(1);
    write_ifd(
        &mut tiff,
        vec![Entry {
            tag: 0x8825, // GPSInfo pointer
            kind: 4,     // LONG
            count: 1,
            payload: Payload::Inline(gps_ifd_offset.to_le_bytes()),
        }],
        8,
    );
    write_ifd(&mut tiff, gps_entries, gps_ifd_offset);
    tiff
}

fn ifd_size(entry_count: u32) -> u32 {
    2 + 12 * entry_count + 4
}

fn write_ifd(tiff: &mut Vec<u8>, entries: Vec<Entry>, ifd_offset: u32) {
    // Out-of-line values land immediately after the IFD itself
    let mut data_offset = ifd_offset + ifd_size(entries.len() as u32);
    let mut tail = Vec::new();

    tiff.extend_from_slice(&(entries.len() as u16).to_le_bytes());
    for entry in &entries {
        tiff.extend_from_slice(&entry.tag.to_le_bytes());
        tiff.extend_from_slice(&entry.kind.to_le_bytes());
        tiff.extend_from_slice(&entry.count.to_le_bytes());
        match &entry.payload {
            Payload::Inline(value) => tiff.extend_from_slice(value),
            Payload::Rationals(parts) => {
                tiff.extend_from_slice(&data_offset.to_le_bytes());
                for (num, den) in parts {
                    tail.extend_from_slice(&num.to_le_bytes());
                    tail.extend_from_slice(&den.to_le_bytes());
                }
                data_offset += 8 * parts.len() as u32;
            }
        }
    }
    tiff.extend_from_slice(&0u32.to_le_bytes()); // no next IFD
    tiff.extend_from_slice(&tail);
}
