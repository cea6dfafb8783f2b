use crate::error::{Result, TagError};
use crate::image::sniff_image;
use crate::text::{decode_latin1, encode_latin1};

/// Picture type codes from the `APIC` frame definition.
pub mod picture_type {
    pub const OTHER: u8 = 0x00;
    pub const FILE_ICON: u8 = 0x01;
    pub const OTHER_FILE_ICON: u8 = 0x02;
    pub const FRONT_COVER: u8 = 0x03;
    pub const BACK_COVER: u8 = 0x04;
    pub const LEAFLET_PAGE: u8 = 0x05;
    pub const MEDIA: u8 = 0x06;
    pub const LEAD_ARTIST: u8 = 0x07;
    pub const ARTIST: u8 = 0x08;
    pub const CONDUCTOR: u8 = 0x09;
    pub const BAND: u8 = 0x0A;
    pub const COMPOSER: u8 = 0x0B;
    pub const LYRICIST: u8 = 0x0C;
    pub const RECORDING_LOCATION: u8 = 0x0D;
    pub const DURING_RECORDING: u8 = 0x0E;
    pub const DURING_PERFORMANCE: u8 = 0x0F;
    pub const SCREEN_CAPTURE: u8 = 0x10;
    pub const BRIGHT_COLOURED_FISH: u8 = 0x11;
    pub const ILLUSTRATION: u8 = 0x12;
    pub const BAND_LOGOTYPE: u8 = 0x13;
    pub const PUBLISHER_LOGOTYPE: u8 = 0x14;

    /// Human-readable name for a picture type code.
    pub fn describe(value: u8) -> Option<&'static str> {
        let name = match value {
            OTHER => "Other",
            FILE_ICON => "32x32 pixels file icon",
            OTHER_FILE_ICON => "Other file icon",
            FRONT_COVER => "Cover (front)",
            BACK_COVER => "Cover (back)",
            LEAFLET_PAGE => "Leaflet page",
            MEDIA => "Media",
            LEAD_ARTIST => "Lead artist/lead performer/soloist",
            ARTIST => "Artist/performer",
            CONDUCTOR => "Conductor",
            BAND => "Band/Orchestra",
            COMPOSER => "Composer",
            LYRICIST => "Lyricist/text writer",
            RECORDING_LOCATION => "Recording location",
            DURING_RECORDING => "During recording",
            DURING_PERFORMANCE => "During performance",
            SCREEN_CAPTURE => "Movie/video screen capture",
            BRIGHT_COLOURED_FISH => "A bright coloured fish",
            ILLUSTRATION => "Illustration",
            BAND_LOGOTYPE => "Band/artist logotype",
            PUBLISHER_LOGOTYPE => "Publisher/Studio logotype",
            _ => return None,
        };
        Some(name)
    }
}

/// Decoded `APIC` frame body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Picture {
    /// MIME type string ("image/jpeg" or "image/png" from this writer;
    /// arbitrary on read).
    pub mime: String,
    /// Semantic picture category (see [`picture_type`]).
    pub picture_type: u8,
    /// Description string; may be empty.
    pub description: String,
    /// Raw image bytes.
    pub data: Vec<u8>,
}

/// Encode raw image bytes as an `APIC` body: front cover, sniffed MIME,
/// empty description.
pub fn encode_picture(image: &[u8]) -> Vec<u8> {
    encode_picture_with(image, picture_type::FRONT_COVER, "")
}

/// Encode an `APIC` body with an explicit picture type and description.
///
/// Layout: encoding byte (always 0 — the MIME and description fields are
/// Latin-1), MIME string + NUL, picture type byte, description + NUL, then
/// the image bytes appended verbatim.
pub fn encode_picture_with(image: &[u8], picture_type: u8, description: &str) -> Vec<u8> {
    let mime = sniff_image(image).mime();
    let mut out = Vec::with_capacity(image.len() + mime.len() + description.len() + 4);
    out.push(0);
    out.extend_from_slice(mime.as_bytes());
    out.push(0);
    out.push(picture_type);
    out.extend_from_slice(&encode_latin1(description));
    out.push(0);
    out.extend_from_slice(image);
    out
}

/// Decode an `APIC` body by walking its three variable-length prefix fields;
/// whatever follows the description terminator is the image data.
pub fn decode_picture(body: &[u8]) -> Result<Picture> {
    let Some((_encoding, rest)) = body.split_first() else {
        return Err(TagError::TruncatedPicture {
            field: "text encoding",
        });
    };
    let (mime, rest) = take_cstr(rest, "MIME type")?;
    let Some((&picture_type, rest)) = rest.split_first() else {
        return Err(TagError::TruncatedPicture {
            field: "picture type",
        });
    };
    let (description, rest) = take_cstr(rest, "description")?;
    Ok(Picture {
        mime: decode_latin1(mime),
        picture_type,
        description: decode_latin1(description),
        data: rest.to_vec(),
    })
}

/// Split a NUL-terminated field off the front of `buf`, returning the field
/// bytes (terminator excluded) and the remainder after the terminator.
fn take_cstr<'a>(buf: &'a [u8], field: &'static str) -> Result<(&'a [u8], &'a [u8])> {
    let Some(nul) = buf.iter().position(|&b| b == 0) else {
        return Err(TagError::TruncatedPicture { field });
    };
    Ok((&buf[..nul], &buf[nul + 1..]))
}

#[cfg(test)]
mod tests {
    use super::*;

    const JPEG: &[u8] = &[0xFF, 0xD8, 0xFF, 0xE0, 0x12, 0x34];
    const PNG: &[u8] = &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A];

    #[test]
    fn test_jpeg_round_trip() {
        let body = encode_picture(JPEG);
        let picture = decode_picture(&body).unwrap();
        assert_eq!(picture.mime, "image/jpeg");
        assert_eq!(picture.picture_type, picture_type::FRONT_COVER);
        assert_eq!(picture.description, "");
        assert_eq!(picture.data, JPEG);
    }

    #[test]
    fn test_png_mime_and_description() {
        let body = encode_picture_with(PNG, picture_type::BACK_COVER, "rear scan");
        let picture = decode_picture(&body).unwrap();
        assert_eq!(picture.mime, "image/png");
        assert_eq!(picture.picture_type, picture_type::BACK_COVER);
        assert_eq!(picture.description, "rear scan");
        assert_eq!(picture.data, PNG);
    }

    #[test]
    fn test_unknown_image_encodes_as_jpeg() {
        let body = encode_picture(&[0x00, 0x01, 0x02]);
        assert_eq!(decode_picture(&body).unwrap().mime, "image/jpeg");
    }

    #[test]
    fn test_truncated_mime() {
        // Encoding byte then a MIME string that never terminates.
        let err = decode_picture(b"\x00image/jpeg").unwrap_err();
        assert!(matches!(
            err,
            TagError::TruncatedPicture { field: "MIME type" }
        ));
    }

    #[test]
    fn test_truncated_description() {
        let mut body = vec![0u8];
        body.extend_from_slice(b"image/png\x00");
        body.push(picture_type::FRONT_COVER);
        body.extend_from_slice(b"endless");
        let err = decode_picture(&body).unwrap_err();
        assert!(matches!(
            err,
            TagError::TruncatedPicture {
                field: "description"
            }
        ));
    }

    #[test]
    fn test_empty_body() {
        assert!(decode_picture(&[]).is_err());
    }

    #[test]
    fn test_image_bytes_may_contain_nul() {
        let image = [0xFF, 0xD8, 0x00, 0x00, 0x11];
        let picture = decode_picture(&encode_picture(&image)).unwrap();
        assert_eq!(picture.data, image);
    }

    #[test]
    fn test_picture_type_describe() {
        assert_eq!(picture_type::describe(0x03), Some("Cover (front)"));
        assert_eq!(picture_type::describe(0x11), Some("A bright coloured fish"));
        assert_eq!(picture_type::describe(0x15), None);
    }
}
