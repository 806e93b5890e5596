use anyhow::{bail, Result};
use bytes::{Buf, BufMut, Bytes, BytesMut};

use crate::config::{BLOB_REF_FLAG, BLOB_TAG};

use super::PayloadError;

/// tag byte + 4 length bytes
const HEADER_LEN: usize = 5;

/// A length-prefixed byte string.
///
/// Layout: tag `'s'`, payload length as little-endian `i32`, payload.
/// This is the same record the marshal module uses for `bytes`, which is
/// what lets the artifact's decoder load it without any help.
#[derive(Debug, PartialEq, Eq)]
pub struct Blob {
    pub data: Bytes,
}

impl Blob {
    pub fn new(data: impl Into<Bytes>) -> Blob {
        Blob { data: data.into() }
    }

    /// serializes the blob into its wire form
    pub fn encode(&self) -> Result<Vec<u8>> {
        let length = i32::try_from(self.data.len())
            .map_err(|_| PayloadError::ErrBlobTooLarge(self.data.len()))?;

        let mut buf = BytesMut::with_capacity(HEADER_LEN + self.data.len());
        buf.put_u8(BLOB_TAG);
        buf.put_i32_le(length);
        buf.put_slice(&self.data);

        Ok(buf.to_vec())
    }

    /// parses a blob, requiring the declared length to cover the input exactly
    pub fn decode(data: &[u8]) -> Result<Blob> {
        let mut buf = data;
        if buf.remaining() < HEADER_LEN {
            bail!(PayloadError::ErrInvalidBlob(format!(
                "header needs {} bytes but {} were found",
                HEADER_LEN,
                buf.remaining()
            )))
        }

        let tag = buf.get_u8();
        if tag & !BLOB_REF_FLAG != BLOB_TAG {
            bail!(PayloadError::ErrInvalidBlob(format!(
                "unexpected type tag 0x{:02x}",
                tag
            )))
        }

        let length = buf.get_i32_le();
        if length < 0 {
            bail!(PayloadError::ErrInvalidBlob(format!(
                "negative length {}",
                length
            )))
        }

        let expected = length as usize;
        if buf.remaining() != expected {
            bail!(PayloadError::ErrBlobLength {
                expected,
                found: buf.remaining(),
            })
        }

        Ok(Blob {
            data: Bytes::copy_from_slice(buf),
        })
    }
}
