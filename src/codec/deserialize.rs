use crate::alloc::ContextAllocator;
use crate::codec::config::CodecConfig;
use crate::codec::cursor::ByteCursor;
use crate::error::ContextError;
use crate::types::{ContextString, EncryptionContext};

/// Replace the contents of `ctx` with the context encoded at `cursor`.
///
/// An empty cursor decodes to an empty context. On success the cursor is left
/// just past the encoded region; on failure `ctx` is empty.
pub fn deserialize_with<A: ContextAllocator + ?Sized>(
    alloc: &A,
    ctx: &mut EncryptionContext,
    cursor: &mut ByteCursor<'_>,
    config: &CodecConfig,
) -> Result<(), ContextError> {
    ctx.clear();

    if cursor.is_empty() {
        return Ok(());
    }

    let result = read_entries(alloc, ctx, cursor, config);
    if result.is_err() {
        ctx.clear();
    }
    result
}

fn read_entries<A: ContextAllocator + ?Sized>(
    alloc: &A,
    ctx: &mut EncryptionContext,
    cursor: &mut ByteCursor<'_>,
    config: &CodecConfig,
) -> Result<(), ContextError> {
    let start = cursor.remaining();
    let limit = usize::from(config.max_serialized_len);

    let count = cursor.read_u16_be().ok_or_else(short_read)?;
    if count == 0 {
        tracing::debug!("encryption context header declares zero entries");
        return Err(ContextError::BadCiphertext("zero entry count"));
    }
    if count > config.max_entries {
        tracing::debug!(count, max = config.max_entries, "encryption context has too many entries");
        return Err(ContextError::LimitExceeded);
    }

    for entry in 0..count {
        let key_len = cursor.read_u16_be().ok_or_else(short_read)?;
        let key = cursor.advance(usize::from(key_len)).ok_or_else(short_read)?;
        let value_len = cursor.read_u16_be().ok_or_else(short_read)?;
        let value = cursor.advance(usize::from(value_len)).ok_or_else(short_read)?;

        if start - cursor.remaining() > limit {
            tracing::debug!(entry, limit, "encoded encryption context exceeds size limit");
            return Err(ContextError::LimitExceeded);
        }

        let key = ContextString::new_in(alloc, key)?;
        let value = ContextString::new_in(alloc, value)?;
        if !ctx.insert(key, value) {
            tracing::debug!(entry, "duplicate key in encoded encryption context");
            return Err(ContextError::BadCiphertext("duplicate key"));
        }
    }

    debug_assert_eq!(ctx.len(), usize::from(count));
    Ok(())
}

fn short_read() -> ContextError {
    tracing::debug!("encoded encryption context is truncated");
    ContextError::ShortBuffer
}
