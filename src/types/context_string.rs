use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::alloc::ContextAllocator;
use crate::error::AllocError;

/// Who is responsible for a stored string's bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ownership {
    /// Allocated for this map and released when the entry is dropped.
    Owned,
    /// Lives for the whole program; reused without copying.
    Static,
}

#[derive(Clone)]
enum Repr {
    Owned(Box<[u8]>),
    Static(&'static [u8]),
}

/// A key or value stored in an [`EncryptionContext`](super::EncryptionContext).
///
/// Equality, ordering and hashing only look at the bytes; two strings with the
/// same content but different [`Ownership`] compare equal.
#[derive(Clone)]
pub struct ContextString {
    repr: Repr,
}

impl ContextString {
    /// Wrap bytes that outlive every map they are placed in.
    pub const fn from_static(bytes: &'static [u8]) -> Self {
        Self {
            repr: Repr::Static(bytes),
        }
    }

    pub const fn from_static_str(s: &'static str) -> Self {
        Self::from_static(s.as_bytes())
    }

    /// Allocate an owned copy of `bytes` through `alloc`.
    pub fn new_in<A: ContextAllocator + ?Sized>(
        alloc: &A,
        bytes: &[u8],
    ) -> Result<Self, AllocError> {
        Ok(Self {
            repr: Repr::Owned(alloc.alloc_bytes(bytes)?),
        })
    }

    /// Return a string equal to `self` suitable for storing in another map:
    /// static strings are reused as-is, owned strings are copied through `alloc`.
    pub fn clone_or_reuse<A: ContextAllocator + ?Sized>(
        &self,
        alloc: &A,
    ) -> Result<Self, AllocError> {
        match &self.repr {
            Repr::Static(bytes) => Ok(Self::from_static(*bytes)),
            Repr::Owned(bytes) => Self::new_in(alloc, bytes),
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        match &self.repr {
            Repr::Owned(bytes) => &bytes[..],
            Repr::Static(bytes) => *bytes,
        }
    }

    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    pub fn is_empty(&self) -> bool {
        self.as_bytes().is_empty()
    }

    pub fn ownership(&self) -> Ownership {
        match self.repr {
            Repr::Owned(_) => Ownership::Owned,
            Repr::Static(_) => Ownership::Static,
        }
    }

    pub fn is_static(&self) -> bool {
        self.ownership() == Ownership::Static
    }

    /// The bytes as UTF-8, if they are valid.
    pub fn as_str(&self) -> Option<&str> {
        std::str::from_utf8(self.as_bytes()).ok()
    }
}

impl PartialEq for ContextString {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Eq for ContextString {}

impl PartialOrd for ContextString {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ContextString {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_bytes().cmp(other.as_bytes())
    }
}

// Must hash exactly like `[u8]` so `Borrow<[u8]>` lookups stay consistent.
impl Hash for ContextString {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_bytes().hash(state)
    }
}

impl Borrow<[u8]> for ContextString {
    fn borrow(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl AsRef<[u8]> for ContextString {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl fmt::Debug for ContextString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_str() {
            Some(s) => write!(f, "{s:?}"),
            None => write!(f, "0x{}", hex::encode(self.as_bytes())),
        }
    }
}

impl From<&str> for ContextString {
    fn from(s: &str) -> Self {
        Self::from(s.as_bytes())
    }
}

impl From<String> for ContextString {
    fn from(s: String) -> Self {
        Self::from(s.into_bytes())
    }
}

impl From<&[u8]> for ContextString {
    fn from(bytes: &[u8]) -> Self {
        Self::from(bytes.to_vec())
    }
}

impl From<Vec<u8>> for ContextString {
    fn from(bytes: Vec<u8>) -> Self {
        Self {
            repr: Repr::Owned(bytes.into_boxed_slice()),
        }
    }
}
