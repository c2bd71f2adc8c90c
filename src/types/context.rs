use std::collections::HashMap;
use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::{Error as _, SerializeMap};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::context_string::ContextString;

/// Initial bucket count for a fresh context; the table grows as needed.
pub const DEFAULT_CAPACITY: usize = 10;

/// Authenticated key/value metadata that travels with a ciphertext.
///
/// Iteration order is unspecified. Use [`crate::codec`] to obtain the
/// canonical, key-sorted binary form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncryptionContext {
    entries: HashMap<ContextString, ContextString>,
}

impl Default for EncryptionContext {
    fn default() -> Self {
        Self::new()
    }
}

impl EncryptionContext {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: HashMap::with_capacity(capacity),
        }
    }

    /// Insert or replace an entry.
    ///
    /// Returns `true` when the key was not present before (the entry was newly
    /// created). On replacement the existing key object is kept and only the
    /// value changes.
    pub fn insert(
        &mut self,
        key: impl Into<ContextString>,
        value: impl Into<ContextString>,
    ) -> bool {
        self.entries.insert(key.into(), value.into()).is_none()
    }

    pub fn get(&self, key: &[u8]) -> Option<&ContextString> {
        self.entries.get(key)
    }

    pub(crate) fn get_mut(&mut self, key: &[u8]) -> Option<&mut ContextString> {
        self.entries.get_mut(key)
    }

    pub fn contains_key(&self, key: &[u8]) -> bool {
        self.entries.contains_key(key)
    }

    pub fn remove(&mut self, key: &[u8]) -> Option<ContextString> {
        self.entries.remove(key)
    }

    pub fn retain(&mut self, mut keep: impl FnMut(&ContextString, &ContextString) -> bool) {
        self.entries.retain(|k, v| keep(k, v))
    }

    /// Drop every entry, keeping the allocated table.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ContextString, &ContextString)> {
        self.entries.iter()
    }
}

impl<K, V> FromIterator<(K, V)> for EncryptionContext
where
    K: Into<ContextString>,
    V: Into<ContextString>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut ctx = Self::new();
        for (k, v) in iter {
            ctx.insert(k, v);
        }
        ctx
    }
}

// Human-readable form: a key-sorted map of UTF-8 strings.
impl Serialize for EncryptionContext {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut pairs: Vec<_> = self.entries.iter().collect();
        pairs.sort_by(|a, b| a.0.cmp(b.0));

        let mut map = serializer.serialize_map(Some(pairs.len()))?;
        for (k, v) in pairs {
            let key = k
                .as_str()
                .ok_or_else(|| S::Error::custom("encryption context key is not UTF-8"))?;
            let value = v
                .as_str()
                .ok_or_else(|| S::Error::custom("encryption context value is not UTF-8"))?;
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for EncryptionContext {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(ContextVisitor)
    }
}

struct ContextVisitor;

impl<'de> Visitor<'de> for ContextVisitor {
    type Value = EncryptionContext;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of string keys to string values")
    }

    fn visit_map<M>(self, mut access: M) -> Result<Self::Value, M::Error>
    where
        M: MapAccess<'de>,
    {
        let capacity = access
            .size_hint()
            .unwrap_or(DEFAULT_CAPACITY)
            .min(u16::MAX as usize);
        let mut ctx = EncryptionContext::with_capacity(capacity);
        while let Some((key, value)) = access.next_entry::<String, String>()? {
            if !ctx.insert(key.as_str(), value) {
                return Err(serde::de::Error::custom(format!(
                    "duplicate encryption context key: {key}"
                )));
            }
        }
        Ok(ctx)
    }
}
