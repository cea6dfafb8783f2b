//! Read-only extraction of the legacy ID3v1 trailer tag.
//!
//! Layout (128 bytes at the very end of the file):
//! `"TAG"(3) title(30) artist(30) album(30) year(4) comment(30) genre(1)`.
//! There is no write path — the trailer format is kept only so callers can
//! surface whatever a legacy tagger left behind.

use crate::text::decode_latin1;

pub const TRAILER_LEN: usize = 128;
pub const TRAILER_MAGIC: &[u8; 3] = b"TAG";

/// Decoded ID3v1 trailer fields.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub struct TrailerTag {
    pub title: String,
    pub artist: String,
    pub album: String,
    pub year: String,
    pub comment: String,
    pub genre: u8,
}

/// Extract the trailer from the last 128 bytes of a whole-file buffer.
/// Returns `None` when the buffer is too short or the magic is absent.
pub fn parse_trailer(buf: &[u8]) -> Option<TrailerTag> {
    if buf.len() < TRAILER_LEN {
        return None;
    }
    let trailer = &buf[buf.len() - TRAILER_LEN..];
    if &trailer[..3] != TRAILER_MAGIC {
        return None;
    }
    Some(TrailerTag {
        title: fixed_field(&trailer[3..33]),
        artist: fixed_field(&trailer[33..63]),
        album: fixed_field(&trailer[63..93]),
        year: fixed_field(&trailer[93..97]),
        comment: fixed_field(&trailer[97..127]),
        genre: trailer[127],
    })
}

/// Decode a fixed-width Latin-1 field, stripping NUL/space padding.
fn fixed_field(bytes: &[u8]) -> String {
    let text = decode_latin1(bytes);
    text.trim_end_matches(['\0', ' ']).to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_trailer() -> Vec<u8> {
        let mut buf = vec![0u8; TRAILER_LEN];
        buf[..3].copy_from_slice(b"TAG");
        buf[3..8].copy_from_slice(b"Title");
        buf[33..39].copy_from_slice(b"Artist");
        buf[63..68].copy_from_slice(b"Album");
        buf[93..97].copy_from_slice(b"1999");
        buf[97..101].copy_from_slice(b"Note");
        buf[127] = 17;
        buf
    }

    #[test]
    fn test_parse_trailer() {
        let mut file = vec![0xFFu8; 512];
        file.extend_from_slice(&sample_trailer());
        let trailer = parse_trailer(&file).unwrap();
        assert_eq!(trailer.title, "Title");
        assert_eq!(trailer.artist, "Artist");
        assert_eq!(trailer.album, "Album");
        assert_eq!(trailer.year, "1999");
        assert_eq!(trailer.comment, "Note");
        assert_eq!(trailer.genre, 17);
    }

    #[test]
    fn test_missing_magic() {
        assert_eq!(parse_trailer(&vec![0u8; 256]), None);
    }

    #[test]
    fn test_short_buffer() {
        assert_eq!(parse_trailer(b"TAG"), None);
    }
}
