//! Canonical binary encoding of an [`EncryptionContext`].
//!
//! ```text
//! EmptyContext    := <0 bytes>
//! NonEmptyContext := entry_count:u16 Entry{entry_count}
//! Entry           := key_len:u16 key:u8[key_len] value_len:u16 value:u8[value_len]
//! ```
//!
//! All integers are big-endian. Entries are sorted by key, byte-lexicographic
//! ascending, and the whole encoding is at most 65535 bytes.

pub mod config;
pub mod cursor;
pub mod deserialize;
pub mod pairs;
pub mod serialize;
pub mod sink;
pub mod sizing;

use crate::alloc::{ContextAllocator, SystemAllocator};
use crate::error::ContextError;
use crate::types::EncryptionContext;

pub use config::CodecConfig;
pub use cursor::ByteCursor;
pub use deserialize::deserialize_with;
pub use pairs::sorted_pairs;
pub use serialize::serialize_with;
pub use sink::{BoundedBuffer, ByteSink};
pub use sizing::{serialized_size, serialized_size_with};

/// Sizes, encodes and decodes contexts under one configuration.
///
/// Stateless between calls; one codec can be shared by any number of
/// contexts.
#[derive(Debug, Clone)]
pub struct ContextCodec<A = SystemAllocator> {
    config: CodecConfig,
    alloc: A,
}

impl ContextCodec<SystemAllocator> {
    pub fn new(config: CodecConfig) -> Result<Self, ContextError> {
        Self::with_allocator(config, SystemAllocator)
    }
}

impl Default for ContextCodec<SystemAllocator> {
    fn default() -> Self {
        Self {
            config: CodecConfig::v1(),
            alloc: SystemAllocator,
        }
    }
}

impl<A: ContextAllocator> ContextCodec<A> {
    pub fn with_allocator(config: CodecConfig, alloc: A) -> Result<Self, ContextError> {
        config.validate()?;
        Ok(Self { config, alloc })
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    pub fn allocator(&self) -> &A {
        &self.alloc
    }

    pub fn size(&self, ctx: &EncryptionContext) -> Result<usize, ContextError> {
        serialized_size_with(ctx, &self.config)
    }

    pub fn serialize<S: ByteSink + ?Sized>(
        &self,
        ctx: &EncryptionContext,
        sink: &mut S,
    ) -> Result<(), ContextError> {
        serialize_with(ctx, sink, &self.config)
    }

    pub fn deserialize(
        &self,
        ctx: &mut EncryptionContext,
        cursor: &mut ByteCursor<'_>,
    ) -> Result<(), ContextError> {
        deserialize_with(&self.alloc, ctx, cursor, &self.config)
    }

    /// Encode into a freshly sized buffer.
    pub fn to_bytes(&self, ctx: &EncryptionContext) -> Result<Vec<u8>, ContextError> {
        let size = self.size(ctx)?;
        let mut sink = BoundedBuffer::with_capacity(size);
        self.serialize(ctx, &mut sink)?;
        Ok(sink.into_vec())
    }

    /// Decode a buffer that holds exactly one encoded context.
    pub fn from_bytes(&self, input: &[u8]) -> Result<EncryptionContext, ContextError> {
        let mut ctx = EncryptionContext::new();
        let mut cursor = ByteCursor::new(input);
        self.deserialize(&mut ctx, &mut cursor)?;
        if !cursor.is_empty() {
            tracing::debug!(trailing = cursor.remaining(), "bytes after encoded encryption context");
            return Err(ContextError::BadCiphertext("trailing bytes"));
        }
        Ok(ctx)
    }
}

/// Encode `ctx` with the format's default limits.
pub fn to_bytes(ctx: &EncryptionContext) -> Result<Vec<u8>, ContextError> {
    ContextCodec::<SystemAllocator>::default().to_bytes(ctx)
}

/// Decode exactly one context from `input` with the format's default limits.
pub fn from_bytes(input: &[u8]) -> Result<EncryptionContext, ContextError> {
    ContextCodec::<SystemAllocator>::default().from_bytes(input)
}

impl EncryptionContext {
    /// See [`serialized_size`].
    pub fn serialized_size(&self) -> Result<usize, ContextError> {
        serialized_size(self)
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, ContextError> {
        to_bytes(self)
    }

    pub fn from_bytes(input: &[u8]) -> Result<Self, ContextError> {
        from_bytes(input)
    }
}
