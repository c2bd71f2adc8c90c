//! Encryption context handling for authenticated ciphertext metadata.
//!
//! `enc-context` stores the string-to-string map that travels with encrypted
//! data and turns it into bytes and back. The binary form is canonical:
//! entries are sorted by key, so identical contents always produce identical
//! bytes, which is what authenticating the context relies on. Decoding treats
//! input as untrusted and rejects truncated, oversized, zero-count and
//! duplicate-key encodings. [`reconcile::clone_context`] brings one live map in
//! line with another while reusing what already matches.

pub mod alloc;
pub mod codec;
pub mod error;
pub mod reconcile;
pub mod types;

pub use alloc::{ContextAllocator, SystemAllocator};
pub use codec::{ByteCursor, BoundedBuffer, ByteSink, CodecConfig, ContextCodec};
pub use error::{AllocError, ContextError};
pub use reconcile::clone_context;
pub use types::{ContextDigest, ContextString, EncryptionContext, Ownership};
