use crate::error::{Result, TagError};
use crate::frame::{FrameHeader, FrameId};

/// Text encoding discriminator carried in the first byte of a text frame body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEncoding {
    /// ISO-8859-1, no marker.
    Latin1,
    /// UTF-16 with a 2-byte byte-order marker. This writer always emits the
    /// little-endian marker `FF FE`.
    Utf16,
    /// UTF-8, no marker.
    Utf8,
}

impl TextEncoding {
    pub fn discriminator(self) -> u8 {
        match self {
            TextEncoding::Latin1 => 0,
            TextEncoding::Utf16 => 1,
            TextEncoding::Utf8 => 2,
        }
    }

    pub fn from_discriminator(byte: u8) -> Option<TextEncoding> {
        match byte {
            0 => Some(TextEncoding::Latin1),
            1 => Some(TextEncoding::Utf16),
            2 => Some(TextEncoding::Utf8),
            _ => None,
        }
    }
}

/// Encode a string as a text frame body: discriminator, then for UTF-16 the
/// BOM, then the encoded string. Non-picture text bodies carry no terminator.
pub fn encode_text(value: &str, encoding: TextEncoding) -> Vec<u8> {
    match encoding {
        TextEncoding::Latin1 => {
            let mut out = Vec::with_capacity(value.len() + 1);
            out.push(0);
            out.extend_from_slice(&encode_latin1(value));
            out
        }
        TextEncoding::Utf16 => {
            let mut out = Vec::with_capacity(value.len() * 2 + 3);
            out.push(1);
            out.extend_from_slice(&[0xFF, 0xFE]);
            for unit in value.encode_utf16() {
                out.extend_from_slice(&unit.to_le_bytes());
            }
            out
        }
        TextEncoding::Utf8 => {
            let mut out = Vec::with_capacity(value.len() + 1);
            out.push(2);
            out.extend_from_slice(value.as_bytes());
            out
        }
    }
}

/// Decode a text frame body, dispatching on the discriminator byte.
///
/// Malformed character sequences decode lossily rather than failing; a
/// discriminator outside the three known encodings is an error.
pub fn decode_text(body: &[u8]) -> Result<String> {
    let Some((&discriminator, rest)) = body.split_first() else {
        return Err(TagError::TruncatedText {
            expected: 1,
            got: 0,
        });
    };
    match TextEncoding::from_discriminator(discriminator) {
        Some(TextEncoding::Latin1) => Ok(decode_latin1(rest)),
        Some(TextEncoding::Utf16) => {
            let Some((bom, units)) = rest.split_first_chunk::<2>() else {
                return Err(TagError::TruncatedText {
                    expected: 3,
                    got: body.len(),
                });
            };
            Ok(decode_utf16(units, bom == &[0xFE, 0xFF]))
        }
        Some(TextEncoding::Utf8) => Ok(String::from_utf8_lossy(rest).into_owned()),
        None => Err(TagError::UnsupportedEncoding { discriminator }),
    }
}

/// Decode the text content of a (header, body) pair as read off the wire.
///
/// `APIC` bodies are never interpreted as text — use
/// [`crate::picture::decode_picture`] for those.
pub fn decode_frame_text(header: &FrameHeader, body: &[u8]) -> Result<String> {
    if header.size as usize != body.len() {
        return Err(TagError::LengthMismatch {
            id: header.id,
            declared: header.size,
            actual: body.len(),
        });
    }
    if header.id == FrameId::APIC {
        return Err(TagError::UnsupportedEncoding {
            discriminator: body.first().copied().unwrap_or(0),
        });
    }
    decode_text(body)
}

pub(crate) fn encode_latin1(value: &str) -> Vec<u8> {
    // Characters outside ISO-8859-1 are replaced with '?', the same
    // substitution the reference encoder performs.
    value
        .chars()
        .map(|c| if (c as u32) <= 0xFF { c as u8 } else { b'?' })
        .collect()
}

pub(crate) fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| b as char).collect()
}

fn decode_utf16(bytes: &[u8], big_endian: bool) -> String {
    let units: Vec<u16> = bytes
        .chunks_exact(2)
        .map(|pair| {
            if big_endian {
                u16::from_be_bytes([pair[0], pair[1]])
            } else {
                u16::from_le_bytes([pair[0], pair[1]])
            }
        })
        .collect();
    String::from_utf16_lossy(&units)
}
