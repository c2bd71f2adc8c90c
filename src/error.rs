use thiserror::Error;

/// The allocator could not provide storage for a key or value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Allocation of {requested} bytes failed")]
pub struct AllocError {
    pub requested: usize,
}

impl AllocError {
    pub fn new(requested: usize) -> Self {
        Self { requested }
    }
}

#[derive(Debug, Error)]
pub enum ContextError {
    #[error("Encryption context exceeds the 16-bit size or entry limit")]
    LimitExceeded,

    #[error("Buffer too short for encryption context")]
    ShortBuffer,

    #[error("Malformed encryption context: {0}")]
    BadCiphertext(&'static str),

    #[error(transparent)]
    Alloc(#[from] AllocError),

    #[error("Invalid codec configuration: {0}")]
    InvalidConfig(String),
}
