use anyhow::Result;
use data_encoding::BASE32;

use super::PayloadError;

/// base-32 encodes data and reverses the resulting text
pub fn to_text(data: &[u8]) -> String {
    reverse(&BASE32.encode(data))
}

/// undoes `to_text`
pub fn from_text(text: &str) -> Result<Vec<u8>> {
    let forward = reverse(text);
    let data = BASE32
        .decode(forward.as_bytes())
        .map_err(|err| PayloadError::ErrInvalidText(err.to_string()))?;

    Ok(data)
}

fn reverse(text: &str) -> String {
    text.chars().rev().collect()
}
