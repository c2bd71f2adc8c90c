//! In-place synchronization of one context to match another.

use crate::alloc::{ContextAllocator, SystemAllocator};
use crate::error::ContextError;
use crate::types::EncryptionContext;

/// Make `dest` hold exactly the entries of `src`.
///
/// Entries of `dest` whose key and value already match are left untouched,
/// so their stored strings keep their identity. Static strings from `src` are
/// shared rather than copied; owned ones are copied through `alloc`.
///
/// On allocation failure the call stops at once. `dest` is then a valid map
/// that holds a mix of its old and new entries, with every key absent from
/// `src` already removed.
pub fn clone_context<A: ContextAllocator + ?Sized>(
    alloc: &A,
    dest: &mut EncryptionContext,
    src: &EncryptionContext,
) -> Result<(), ContextError> {
    // Prune first: dest must never keep a key src does not have.
    let before = dest.len();
    dest.retain(|key, _| src.contains_key(key.as_bytes()));
    let pruned = before - dest.len();

    let mut updated = 0usize;
    let mut inserted = 0usize;
    for (key, value) in src.iter() {
        match dest.get_mut(key.as_bytes()) {
            Some(current) if current == value => {}
            Some(current) => {
                *current = value.clone_or_reuse(alloc)?;
                updated += 1;
            }
            None => {
                let new_key = key.clone_or_reuse(alloc)?;
                let new_value = value.clone_or_reuse(alloc)?;
                dest.insert(new_key, new_value);
                inserted += 1;
            }
        }
    }

    tracing::trace!(pruned, updated, inserted, "synchronized encryption context");
    Ok(())
}

impl EncryptionContext {
    /// [`clone_context`] with the global heap allocator.
    pub fn clone_from_context(&mut self, src: &EncryptionContext) -> Result<(), ContextError> {
        clone_context(&SystemAllocator, self, src)
    }
}
