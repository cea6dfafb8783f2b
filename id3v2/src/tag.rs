use crate::frame::{FRAME_HEADER_LEN, Frame};
use crate::synchsafe;

/// Length of the fixed tag header.
pub const TAG_HEADER_LEN: usize = 10;

/// Magic signature opening every ID3v2 tag.
pub const TAG_MAGIC: &[u8; 3] = b"ID3";

/// The tag header flag byte, `%abc00000`.
///
/// All three defined bits are carried through unchanged; this codec never
/// acts on any of them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub struct TagFlags(pub u8);

impl TagFlags {
    /// Bit a: unsynchronisation applied.
    pub fn unsynchronisation(self) -> bool {
        self.0 & 0x80 != 0
    }

    /// Bit b: an extended header follows the tag header.
    pub fn extended_header(self) -> bool {
        self.0 & 0x40 != 0
    }

    /// Bit c: experimental tag.
    pub fn experimental(self) -> bool {
        self.0 & 0x20 != 0
    }
}

/// A full ID3v2 tag: header fields plus an ordered frame list.
///
/// Frame order is preserved on read and appended on write; duplicate
/// identifiers are permitted and independent.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub struct Tag {
    pub version: u8,
    pub revision: u8,
    pub flags: TagFlags,
    pub frames: Vec<Frame>,
}

impl Default for Tag {
    /// An empty ID3v2.3 tag.
    fn default() -> Self {
        Tag {
            version: 3,
            revision: 0,
            flags: TagFlags(0),
            frames: Vec::new(),
        }
    }
}

impl Tag {
    /// Total size of the frame span: every frame's serialized body length
    /// plus 10 header bytes per frame. Recomputed on every call — this is
    /// the value written (synchsafe) into the tag header, and it must never
    /// go stale against the frame list.
    pub fn total_size(&self) -> u32 {
        self.frames
            .iter()
            .map(|frame| frame.body_len() + FRAME_HEADER_LEN as u32)
            .sum()
    }

    /// Serialize the 10-byte tag header followed by every frame in list
    /// order. Produces the full byte sequence in one call.
    pub fn to_bytes(&self) -> Vec<u8> {
        let total = self.total_size();
        let mut out = Vec::with_capacity(TAG_HEADER_LEN + total as usize);
        out.extend_from_slice(TAG_MAGIC);
        out.push(self.version);
        out.push(self.revision);
        out.push(self.flags.0);
        out.extend_from_slice(&synchsafe::encode(total));
        for frame in &self.frames {
            out.extend_from_slice(&frame.to_bytes());
        }
        out
    }
}
