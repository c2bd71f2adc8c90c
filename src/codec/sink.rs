//! Capacity-bounded byte output.

use bytes::{BufMut, Bytes, BytesMut};

use crate::error::ContextError;

/// Destination for encoded bytes with a fixed capacity.
///
/// Writes never grow past the capacity: a write that does not fit fails with
/// [`ContextError::ShortBuffer`] and leaves the sink untouched.
pub trait ByteSink {
    /// Bytes that can still be written.
    fn remaining_capacity(&self) -> usize;

    fn put_slice(&mut self, bytes: &[u8]) -> Result<(), ContextError>;

    fn put_u16_be(&mut self, value: u16) -> Result<(), ContextError> {
        self.put_slice(&value.to_be_bytes())
    }

    /// Discard everything written so far.
    fn clean_up(&mut self);
}

/// A [`ByteSink`] backed by a [`BytesMut`] that refuses to grow.
#[derive(Debug, Clone)]
pub struct BoundedBuffer {
    buf: BytesMut,
    capacity: usize,
}

impl BoundedBuffer {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: BytesMut::with_capacity(capacity),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.buf
    }

    pub fn freeze(self) -> Bytes {
        self.buf.freeze()
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.buf.to_vec()
    }
}

impl ByteSink for BoundedBuffer {
    fn remaining_capacity(&self) -> usize {
        self.capacity - self.buf.len()
    }

    fn put_slice(&mut self, bytes: &[u8]) -> Result<(), ContextError> {
        if bytes.len() > self.remaining_capacity() {
            return Err(ContextError::ShortBuffer);
        }
        self.buf.put_slice(bytes);
        Ok(())
    }

    fn put_u16_be(&mut self, value: u16) -> Result<(), ContextError> {
        if self.remaining_capacity() < 2 {
            return Err(ContextError::ShortBuffer);
        }
        self.buf.put_u16(value);
        Ok(())
    }

    fn clean_up(&mut self) {
        self.buf.clear();
    }
}

impl AsRef<[u8]> for BoundedBuffer {
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}
