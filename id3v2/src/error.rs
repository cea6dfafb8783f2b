use thiserror::Error;

use crate::frame::FrameId;

#[derive(Error, Debug)]
pub enum TagError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("bad magic: expected \"ID3\", got {got:02X?}")]
    BadMagic { got: [u8; 3] },

    #[error("tag header truncated: expected {expected} bytes, got {got}")]
    TruncatedHeader { expected: usize, got: usize },

    #[error("malformed frame header at offset {offset}: fewer than 10 bytes remain")]
    MalformedFrameHeader { offset: usize },

    #[error("truncated {id} frame at offset {offset}: declared {expected} body bytes, {got} remain")]
    TruncatedFrame {
        id: FrameId,
        offset: usize,
        expected: usize,
        got: usize,
    },

    #[error("truncated picture body: no terminator for the {field} field")]
    TruncatedPicture { field: &'static str },

    #[error("truncated text body: expected at least {expected} bytes, got {got}")]
    TruncatedText { expected: usize, got: usize },

    #[error("unsupported text encoding {discriminator}")]
    UnsupportedEncoding { discriminator: u8 },

    #[error("{id} frame declares {declared} body bytes but {actual} were supplied")]
    LengthMismatch {
        id: FrameId,
        declared: u32,
        actual: usize,
    },
}

pub type Result<T> = std::result::Result<T, TagError>;
