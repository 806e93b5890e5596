pub mod blob;
pub mod compress;
pub mod text;

use std::{error::Error, fmt::Display};

use anyhow::Result;
use log::debug;

use self::{
    blob::Blob,
    compress::{compress, decompress},
    text::{from_text, to_text},
};

#[derive(Debug)]
pub enum PayloadError {
    /// indicates content that is not valid UTF-8
    ErrInvalidUtf8(String),
    /// indicates a malformed blob header
    ErrInvalidBlob(String),
    /// indicates a blob whose declared length does not match its payload
    ErrBlobLength { expected: usize, found: usize },
    /// indicates content too large for a blob length field
    ErrBlobTooLarge(usize),
    /// indicates text that is not reversed base-32
    ErrInvalidText(String),
    /// indicates an artifact without an embedded literal
    ErrLiteralNotFound(String),
}

impl Error for PayloadError {}

impl Display for PayloadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ErrInvalidUtf8(err) => write!(f, "content is not valid UTF-8: {}", err),
            Self::ErrInvalidBlob(err) => write!(f, "invalid blob: {}", err),
            Self::ErrBlobLength { expected, found } => write!(
                f,
                "incorrect blob length: expected {}, found {}",
                expected, found
            ),
            Self::ErrBlobTooLarge(len) => write!(f, "content of {} bytes is too large", len),
            Self::ErrInvalidText(err) => write!(f, "invalid encoded text: {}", err),
            Self::ErrLiteralNotFound(err) => write!(f, "encoded literal not found: {}", err),
        }
    }
}

/// runs content through blob -> zlib -> base-32 -> reverse
pub fn encode_payload(content: &[u8]) -> Result<String> {
    let serialized = Blob::new(content.to_vec()).encode()?;
    let compressed = compress(&serialized)?;
    debug!(
        "payload: {} bytes serialized, {} bytes compressed",
        serialized.len(),
        compressed.len()
    );

    Ok(to_text(&compressed))
}

/// exact inverse of `encode_payload`
pub fn decode_payload(text: &str) -> Result<Vec<u8>> {
    let compressed = from_text(text)?;
    let serialized = decompress(&compressed[..])?;
    debug!(
        "payload: {} bytes compressed, {} bytes serialized",
        compressed.len(),
        serialized.len()
    );

    let blob = Blob::decode(&serialized)?;

    Ok(blob.data.to_vec())
}
