//! Parser and writer for ID3v2 metadata tags embedded at the start of MP3
//! files.
//!
//! The tag is a 10-byte header (`"ID3"`, version, revision, flags, synchsafe
//! size) followed by a run of frames, each a 10-byte header plus body. Every
//! decode and encode is a pure transformation over an in-memory buffer; the
//! audio payload after the tag span is carried through untouched.

pub mod error;
pub mod frame;
pub mod image;
pub mod names;
pub mod picture;
pub mod reader;
pub mod synchsafe;
pub mod tag;
pub mod text;
pub mod v1;
pub mod version;
