use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use log::info;

use crate::{
    artifact::render,
    config::OUTPUT_PREFIX,
    digest::digest,
    payload::{encode_payload, PayloadError},
};

/// name of the artifact produced for `filename`
pub fn output_path(filename: &str) -> PathBuf {
    PathBuf::from(format!("{}{}", OUTPUT_PREFIX, filename))
}

/// reads a source file and writes `encoded_<filename>` wrapping it
pub fn encode_file(filename: &str) -> Result<PathBuf> {
    let out = output_path(filename);
    encode_to(Path::new(filename), &out)?;

    Ok(out)
}

/// wraps the source at `input` into an artifact at `output`
///
/// Nothing is written unless the input reads and decodes as UTF-8.
pub fn encode_to(input: &Path, output: &Path) -> Result<()> {
    let raw = fs::read(input).with_context(|| format!("failed to read {}", input.display()))?;
    let content =
        String::from_utf8(raw).map_err(|err| PayloadError::ErrInvalidUtf8(err.to_string()))?;

    let encoded = encode_payload(content.as_bytes())?;
    let artifact = render(&encoded);

    fs::write(output, artifact)
        .with_context(|| format!("failed to write {}", output.display()))?;

    info!(
        "encoded {} ({} bytes, sha1 {:x}) -> {}",
        input.display(),
        content.len(),
        digest(content.as_bytes()),
        output.display()
    );

    Ok(())
}

#[cfg(test)]
mod test {
    use std::{fs, path::PathBuf};

    use tempfile::tempdir;

    use super::{encode_to, output_path};
    use crate::{
        artifact::extract_encoded,
        payload::{decode_payload, PayloadError},
    };

    fn recover(artifact: &PathBuf) -> String {
        let text = fs::read_to_string(artifact).unwrap();
        let content = decode_payload(extract_encoded(&text).unwrap()).unwrap();
        String::from_utf8(content).unwrap()
    }

    #[test]
    fn output_path_test() {
        assert_eq!(output_path("app.py"), PathBuf::from("encoded_app.py"));
        assert_eq!(
            output_path("src/app.py"),
            PathBuf::from("encoded_src/app.py")
        );
    }

    #[test]
    fn encode_to_test() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("app.py");
        let output = dir.path().join("encoded_app.py");
        fs::write(&input, "print(\"hi\")").unwrap();

        encode_to(&input, &output).unwrap();

        assert_eq!(recover(&output), "print(\"hi\")");
        // input is left untouched
        assert_eq!(fs::read_to_string(&input).unwrap(), "print(\"hi\")");
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 2);
    }

    #[test]
    fn encode_empty_test() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("empty.py");
        let output = dir.path().join("encoded_empty.py");
        fs::write(&input, "").unwrap();

        encode_to(&input, &output).unwrap();

        assert_eq!(recover(&output), "");
    }

    #[test]
    fn encode_deterministic_test() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("app.py");
        let first = dir.path().join("first.py");
        let second = dir.path().join("second.py");
        fs::write(&input, "x = 1\nprint(x)\n").unwrap();

        encode_to(&input, &first).unwrap();
        encode_to(&input, &second).unwrap();

        assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());
    }

    #[test]
    fn reencode_wraps_again_test() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("app.py");
        let once = dir.path().join("encoded_app.py");
        let twice = dir.path().join("encoded_encoded_app.py");
        fs::write(&input, "print(\"hi\")").unwrap();

        encode_to(&input, &once).unwrap();
        encode_to(&once, &twice).unwrap();

        // the second layer recovers the first artifact, not the source
        let inner = recover(&twice);
        assert_eq!(inner, fs::read_to_string(&once).unwrap());
        assert_ne!(inner, "print(\"hi\")");
    }

    #[test]
    fn encode_invalid_utf8_test() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("bin.py");
        let output = dir.path().join("encoded_bin.py");
        fs::write(&input, b"print(\"\xff\xfe\")").unwrap();

        let err = encode_to(&input, &output).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<PayloadError>(),
            Some(PayloadError::ErrInvalidUtf8(_))
        ));
        assert!(!output.exists());
    }

    #[test]
    fn encode_missing_input_test() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("encoded_missing.py");

        assert!(encode_to(&dir.path().join("missing.py"), &output).is_err());
        assert!(!output.exists());
    }
}
