use std::{fs, path::Path};

use anyhow::{Context, Result};
use log::info;

use crate::{
    artifact::extract_encoded,
    digest::digest,
    payload::{decode_payload, PayloadError},
};

/// recovers the source embedded in an artifact without running it
pub fn recover_source(artifact: &str) -> Result<String> {
    let encoded = extract_encoded(artifact)?;
    let content = decode_payload(encoded)?;

    let source =
        String::from_utf8(content).map_err(|err| PayloadError::ErrInvalidUtf8(err.to_string()))?;

    Ok(source)
}

/// decode_file reads an artifact, decodes its literal, then prints the source to standard output
pub fn decode_file(filename: &str) -> Result<()> {
    let path = Path::new(filename);
    let artifact =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;

    let source = recover_source(&artifact)
        .with_context(|| format!("failed to decode {}", path.display()))?;

    info!(
        "decoded {} ({} bytes, sha1 {:x})",
        filename,
        source.len(),
        digest(source.as_bytes())
    );
    print!("{}", source);

    Ok(())
}
