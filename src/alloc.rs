//! Allocation seam for key and value storage.
//!
//! Every owned string the crate creates (during deserialization or cloning)
//! goes through a [`ContextAllocator`], so callers can bound memory use and
//! tests can observe or fail individual allocations.

use crate::error::AllocError;

pub trait ContextAllocator {
    /// Allocate an owned copy of `bytes`.
    fn alloc_bytes(&self, bytes: &[u8]) -> Result<Box<[u8]>, AllocError>;
}

/// Global-heap allocator using fallible reservation.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemAllocator;

impl ContextAllocator for SystemAllocator {
    fn alloc_bytes(&self, bytes: &[u8]) -> Result<Box<[u8]>, AllocError> {
        let mut buf = Vec::new();
        buf.try_reserve_exact(bytes.len())
            .map_err(|_| AllocError::new(bytes.len()))?;
        buf.extend_from_slice(bytes);
        Ok(buf.into_boxed_slice())
    }
}

impl<A: ContextAllocator + ?Sized> ContextAllocator for &A {
    fn alloc_bytes(&self, bytes: &[u8]) -> Result<Box<[u8]>, AllocError> {
        (**self).alloc_bytes(bytes)
    }
}
