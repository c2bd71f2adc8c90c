use crate::codec::config::CodecConfig;
use crate::error::ContextError;
use crate::types::EncryptionContext;

/// Entry-count prefix.
const COUNT_LEN: usize = 2;
/// Key-length and value-length prefixes of one entry.
const ENTRY_OVERHEAD: usize = 4;

/// Exact length of the canonical encoding of `ctx` under the format ceilings.
pub fn serialized_size(ctx: &EncryptionContext) -> Result<usize, ContextError> {
    serialized_size_with(ctx, &CodecConfig::v1())
}

/// Exact length of the canonical encoding of `ctx`.
///
/// Fails with [`ContextError::LimitExceeded`] as soon as the running total
/// passes `config.max_serialized_len`; the map is never fully summed first.
pub fn serialized_size_with(
    ctx: &EncryptionContext,
    config: &CodecConfig,
) -> Result<usize, ContextError> {
    let entry_count = ctx.len();
    if entry_count > usize::from(config.max_entries) {
        tracing::debug!(count = entry_count, "encryption context has too many entries");
        return Err(ContextError::LimitExceeded);
    }
    if entry_count == 0 {
        return Ok(0);
    }

    let limit = usize::from(config.max_serialized_len);
    let mut size = COUNT_LEN;
    for (key, value) in ctx.iter() {
        size = size
            .checked_add(ENTRY_OVERHEAD)
            .and_then(|s| s.checked_add(key.len()))
            .and_then(|s| s.checked_add(value.len()))
            .ok_or(ContextError::LimitExceeded)?;

        if size > limit {
            tracing::debug!(size, limit, "encryption context exceeds size limit");
            return Err(ContextError::LimitExceeded);
        }
    }

    tracing::trace!(size, entries = entry_count, "sized encryption context");
    Ok(size)
}
