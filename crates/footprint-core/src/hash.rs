//! Stable fingerprints over serde-serializable values.
//!
//! We hash the canonical JSON encoding with blake3. Struct fields serialize
//! in declaration order, so the same value always yields the same digest.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A 32-byte blake3 digest, displayed as lowercase hex.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fingerprint(pub [u8; 32]);

impl Fingerprint {
    pub fn to_hex(&self) -> String {
        blake3::Hash::from(self.0).to_hex().to_string()
    }

    /// First 12 hex characters, for terminal output.
    pub fn short(&self) -> String {
        let mut s = self.to_hex();
        s.truncate(12);
        s
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fingerprint({})", self.short())
    }
}

pub fn hash_bytes(bytes: &[u8]) -> Fingerprint {
    Fingerprint(*blake3::hash(bytes).as_bytes())
}

pub fn hash_serde<T: Serialize + ?Sized>(value: &T) -> Result<Fingerprint> {
    let bytes = serde_json::to_vec(value)?;
    Ok(hash_bytes(&bytes))
}
