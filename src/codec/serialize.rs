use crate::codec::config::CodecConfig;
use crate::codec::pairs::sorted_pairs;
use crate::codec::sink::ByteSink;
use crate::codec::sizing::serialized_size_with;
use crate::error::ContextError;
use crate::types::EncryptionContext;

/// Write the canonical encoding of `ctx` into `sink`.
///
/// Nothing is written for an empty context. If the sink cannot hold the whole
/// encoding the call fails before writing anything; a write that fails midway
/// cleans the sink up.
pub fn serialize_with<S: ByteSink + ?Sized>(
    ctx: &EncryptionContext,
    sink: &mut S,
    config: &CodecConfig,
) -> Result<(), ContextError> {
    let size = serialized_size_with(ctx, config)?;
    if size == 0 {
        return Ok(());
    }
    if sink.remaining_capacity() < size {
        tracing::debug!(
            size,
            available = sink.remaining_capacity(),
            "sink too small for encryption context"
        );
        return Err(ContextError::ShortBuffer);
    }

    // The sizer has bounded the entry count by `max_entries`.
    let count = u16::try_from(ctx.len()).map_err(|_| ContextError::LimitExceeded)?;
    let pairs = sorted_pairs(ctx)?;

    let written = write_entries(sink, count, &pairs);
    if written.is_err() {
        sink.clean_up();
    }
    written
}

fn write_entries<S: ByteSink + ?Sized>(
    sink: &mut S,
    count: u16,
    pairs: &[crate::codec::pairs::Pair<'_>],
) -> Result<(), ContextError> {
    sink.put_u16_be(count)?;
    for (key, value) in pairs {
        debug_assert!(key.len() <= usize::from(u16::MAX));
        debug_assert!(value.len() <= usize::from(u16::MAX));

        sink.put_u16_be(key.len() as u16)?;
        sink.put_slice(key.as_bytes())?;
        sink.put_u16_be(value.len() as u16)?;
        sink.put_slice(value.as_bytes())?;
    }
    Ok(())
}
