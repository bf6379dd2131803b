// infohash.rs
use std::fmt;

use crate::bencode::{encode_bvalue, BValue};

use sha1::{Digest, Sha1};

/// SHA-1 digest of the canonical encoding of a torrent's `info` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InfoHash(pub [u8; 20]);

impl InfoHash {
    /// Hashes `info` after canonically re-encoding it, so the source key
    /// order does not matter.
    pub fn of(info: &BValue) -> Self {
        let encoded = encode_bvalue(info);

        let mut hasher = Sha1::new();
        hasher.update(&encoded);
        let result = hasher.finalize();

        let mut hash_bytes = [0u8; 20];
        hash_bytes.copy_from_slice(&result);
        InfoHash(hash_bytes)
    }

    /// 40 lowercase hex characters.
    pub fn to_hex(&self) -> String {
        hex::encode(self.as_bytes())
    }

    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }
}

impl fmt::Display for InfoHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}
