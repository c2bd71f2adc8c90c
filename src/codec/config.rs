use crate::error::ContextError;

/// Smallest non-empty encoding: count + one entry with empty key and value.
pub const MIN_NONEMPTY_LEN: u16 = 2 + 4;

// Limits are 16-bit because the wire format is; a config can only tighten them.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CodecConfig {
    pub max_entries: u16,
    pub max_serialized_len: u16,
}

impl CodecConfig {
    /// The ceilings of the wire format itself.
    pub fn v1() -> Self {
        Self {
            max_entries: u16::MAX,
            max_serialized_len: u16::MAX,
        }
    }

    pub fn validate(&self) -> Result<(), ContextError> {
        if self.max_entries == 0 {
            return Err(ContextError::InvalidConfig(
                "max_entries must be at least 1".into(),
            ));
        }
        if self.max_serialized_len < MIN_NONEMPTY_LEN {
            return Err(ContextError::InvalidConfig(format!(
                "max_serialized_len must be at least {MIN_NONEMPTY_LEN}, got {}",
                self.max_serialized_len
            )));
        }
        Ok(())
    }
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self::v1()
    }
}
