pub mod context;
pub mod context_string;
pub mod digest;

pub use context::{EncryptionContext, DEFAULT_CAPACITY};
pub use context_string::{ContextString, Ownership};
pub use digest::ContextDigest;
