//! Stable digests for plans and run outputs.
//!
//! Values are serialized to JSON and hashed with blake3, so equal values
//! always produce equal digests.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hash256(pub [u8; 32]);

/// Lowercase hex, two characters per byte.
impl fmt::Display for Hash256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|b| write!(f, "{b:02x}"))
    }
}

pub fn hash_serde<T: Serialize>(v: &T) -> Result<Hash256> {
    let bytes = serde_json::to_vec(v)?;
    Ok(Hash256(*blake3::hash(&bytes).as_bytes()))
}
