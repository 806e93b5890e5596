use anyhow::{bail, Result};

use crate::{
    config::{DEFAULT_PORT, LITERAL_END, LITERAL_START},
    payload::PayloadError,
};

/// renders the self-decoding wrapper around an encoded literal
pub fn render(encoded: &str) -> String {
    format!(
        r#"import base64, zlib, marshal, os
from flask import Flask

_ = lambda __ : __import__('marshal').loads(__import__('zlib').decompress(__import__('base64').b32decode(__[::-1])))

{start}{encoded}{end}

if __name__ == "__main__":
    port = int(os.environ.get('PORT', {port}))
    app.run(host='0.0.0.0', port=port, debug=False)
"#,
        start = LITERAL_START,
        encoded = encoded,
        end = LITERAL_END,
        port = DEFAULT_PORT,
    )
}

/// returns the encoded literal embedded in an artifact
pub fn extract_encoded(artifact: &str) -> Result<&str> {
    let (_, rest) = artifact
        .split_once(LITERAL_START)
        .ok_or(PayloadError::ErrLiteralNotFound(format!(
            "missing '{}'",
            LITERAL_START
        )))?;

    let (encoded, _) = rest
        .split_once(LITERAL_END)
        .ok_or(PayloadError::ErrLiteralNotFound(format!(
            "missing '{}'",
            LITERAL_END
        )))?;

    if encoded.contains('\n') {
        bail!(PayloadError::ErrLiteralNotFound(String::from(
            "literal spans multiple lines"
        )))
    }

    Ok(encoded)
}
