use std::fmt::LowerHex;

use sha1::{Digest as _, Sha1};

/// SHA-1 fingerprint of source content, shown in log lines
#[derive(Debug, Eq, PartialEq)]
pub struct Digest(Vec<u8>);

/// hash data using sha1
pub fn digest(data: &[u8]) -> Digest {
    let mut hash = Sha1::new();
    hash.update(data);
    let digest = hash.finalize();

    Digest(digest[..].to_vec())
}

impl LowerHex for Digest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", hex::encode(&self.0))
    }
}
