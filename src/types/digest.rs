use std::fmt;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::codec;
use crate::error::ContextError;
use crate::types::context::EncryptionContext;

/// Content fingerprint of an encryption context.
///
/// Computed over the canonical binary encoding, so two contexts with the same
/// entries always share a digest regardless of how they were built.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContextDigest(String);

impl ContextDigest {
    pub fn of(ctx: &EncryptionContext) -> Result<Self, ContextError> {
        let encoded = codec::to_bytes(ctx)?;
        Ok(Self::from_encoded(&encoded))
    }

    /// Digest of bytes that are already in canonical encoded form.
    pub fn from_encoded(encoded: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(encoded);

        let hash = hasher.finalize();
        let hex = hex::encode(hash);

        ContextDigest(format!("sha256:{hex}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContextDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl EncryptionContext {
    pub fn digest(&self) -> Result<ContextDigest, ContextError> {
        ContextDigest::of(self)
    }
}
