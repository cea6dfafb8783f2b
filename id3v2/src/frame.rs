use std::fmt;

use crate::error::{Result, TagError};
use crate::picture::{self, Picture};
use crate::text::{self, TextEncoding};

/// Length of the fixed frame header: 4-byte identifier, 4-byte size, 2-byte flags.
pub const FRAME_HEADER_LEN: usize = 10;

/// A 4-byte ASCII frame identifier (e.g. `TIT2`, `APIC`).
///
/// Identifiers outside the known vocabulary pass through verbatim — the
/// codec never rejects a frame for its identifier alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameId(pub [u8; 4]);

impl FrameId {
    /// Identifier of an attached-picture frame.
    pub const APIC: FrameId = FrameId(*b"APIC");

    /// Parse an identifier from a string; `None` unless it is exactly four
    /// ASCII characters.
    pub fn parse(s: &str) -> Option<FrameId> {
        let bytes = s.as_bytes();
        if bytes.len() == 4 && bytes.iter().all(u8::is_ascii) {
            Some(FrameId([bytes[0], bytes[1], bytes[2], bytes[3]]))
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &str {
        std::str::from_utf8(&self.0).unwrap_or("????")
    }
}

impl fmt::Display for FrameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl serde::Serialize for FrameId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "jsonschema")]
impl schemars::JsonSchema for FrameId {
    fn schema_name() -> String {
        "FrameId".to_owned()
    }

    fn json_schema(generator: &mut schemars::r#gen::SchemaGenerator) -> schemars::schema::Schema {
        String::json_schema(generator)
    }
}

/// The 16-bit frame flag field, `%abc00000 %ijk00000`.
///
/// Only six bits are defined; all are stored and written back verbatim but
/// never acted upon by this codec.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub struct FrameFlags(pub u16);

impl FrameFlags {
    /// Bit a: discard the frame on tag alteration.
    pub fn tag_protected(self) -> bool {
        self.0 & 0x8000 != 0
    }

    /// Bit b: discard the frame on file alteration.
    pub fn file_protected(self) -> bool {
        self.0 & 0x4000 != 0
    }

    /// Bit c: read-only.
    pub fn read_only(self) -> bool {
        self.0 & 0x2000 != 0
    }

    /// Bit i: body is zlib-compressed.
    pub fn compressed(self) -> bool {
        self.0 & 0x0080 != 0
    }

    /// Bit j: body is encrypted.
    pub fn encrypted(self) -> bool {
        self.0 & 0x0040 != 0
    }

    /// Bit k: frame belongs to a group.
    pub fn grouped(self) -> bool {
        self.0 & 0x0020 != 0
    }
}

/// Decoded fixed frame header.
///
/// The size field is a plain big-endian u32 covering the frame body only —
/// unlike the tag header size it is NOT synchsafe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameHeader {
    pub id: FrameId,
    pub size: u32,
    pub flags: FrameFlags,
}

impl FrameHeader {
    /// Decode the 10-byte frame header at `offset` in `buf`.
    pub fn parse(buf: &[u8], offset: usize) -> Result<FrameHeader> {
        let Some(bytes) = buf.get(offset..offset + FRAME_HEADER_LEN) else {
            return Err(TagError::MalformedFrameHeader { offset });
        };
        Ok(FrameHeader {
            id: FrameId([bytes[0], bytes[1], bytes[2], bytes[3]]),
            size: u32::from_be_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]),
            flags: FrameFlags(u16::from_be_bytes([bytes[8], bytes[9]])),
        })
    }

    pub fn to_bytes(&self) -> [u8; FRAME_HEADER_LEN] {
        let size = self.size.to_be_bytes();
        let flags = self.flags.0.to_be_bytes();
        [
            self.id.0[0], self.id.0[1], self.id.0[2], self.id.0[3],
            size[0], size[1], size[2], size[3],
            flags[0], flags[1],
        ]
    }
}

/// One metadata frame: identifier, flag bitfield and raw body bytes.
///
/// The body is kept in wire form; [`Frame::content`] decodes it on demand.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub struct Frame {
    pub id: FrameId,
    pub flags: FrameFlags,
    pub body: Vec<u8>,
}

/// A frame body decoded at the identifier boundary: `APIC` bodies are
/// pictures, everything else is interpreted as encoded text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameContent {
    Text(String),
    Picture(Picture),
}

impl Frame {
    pub fn new(id: FrameId, body: Vec<u8>) -> Frame {
        Frame {
            id,
            flags: FrameFlags::default(),
            body,
        }
    }

    pub fn with_flags(id: FrameId, flags: FrameFlags, body: Vec<u8>) -> Frame {
        Frame { id, flags, body }
    }

    /// Build a text frame from a string and target encoding.
    pub fn text(id: FrameId, value: &str, encoding: TextEncoding) -> Frame {
        Frame::new(id, text::encode_text(value, encoding))
    }

    /// Build an `APIC` frame from raw image bytes (front cover, sniffed MIME,
    /// empty description).
    pub fn picture(image: &[u8]) -> Frame {
        Frame::new(FrameId::APIC, picture::encode_picture(image))
    }

    /// Serialized body length. Winamp writes a lone NUL for empty frame
    /// contents and counts it in the frame size, and some readers rely on
    /// that, so an empty body serializes as one zero byte.
    pub fn body_len(&self) -> u32 {
        self.body.len().max(1) as u32
    }

    /// Serialize header + body.
    pub fn to_bytes(&self) -> Vec<u8> {
        let header = FrameHeader {
            id: self.id,
            size: self.body_len(),
            flags: self.flags,
        };
        let mut out = Vec::with_capacity(FRAME_HEADER_LEN + self.body_len() as usize);
        out.extend_from_slice(&header.to_bytes());
        if self.body.is_empty() {
            out.push(0);
        } else {
            out.extend_from_slice(&self.body);
        }
        out
    }

    /// Decode the body according to the identifier: `APIC` frames yield a
    /// [`Picture`], all other frames are decoded as encoded text.
    pub fn content(&self) -> Result<FrameContent> {
        if self.id == FrameId::APIC {
            Ok(FrameContent::Picture(picture::decode_picture(&self.body)?))
        } else {
            Ok(FrameContent::Text(text::decode_text(&self.body)?))
        }
    }
}
