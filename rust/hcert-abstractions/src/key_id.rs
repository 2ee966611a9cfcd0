// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::fmt;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{de::Error as _, Deserialize, Deserializer, Serialize, Serializer};

/// Key identifiers are truncated to this many bytes before matching.
pub const KEY_ID_MAX_LEN: usize = 8;

/// Identifier selecting which trust certificate may have signed a credential.
///
/// Compared by exact byte equality. Rendered as standard base64, which is also how
/// trust lists publish it.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct KeyId(Vec<u8>);

impl KeyId {
    /// Keeps at most the first [`KEY_ID_MAX_LEN`] bytes.
    pub fn new(bytes: &[u8]) -> Self {
        let len = bytes.len().min(KEY_ID_MAX_LEN);
        Self(bytes[..len].to_vec())
    }

    pub fn from_base64(encoded: &str) -> Result<Self, base64::DecodeError> {
        let bytes = STANDARD.decode(encoded.trim())?;
        Ok(Self::new(&bytes))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn to_base64(&self) -> String {
        STANDARD.encode(&self.0)
    }
}

impl fmt::Display for KeyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_base64())
    }
}

impl fmt::Debug for KeyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "KeyId({})", self.to_base64())
    }
}

impl Serialize for KeyId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_base64())
    }
}

impl<'de> Deserialize<'de> for KeyId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        KeyId::from_base64(&raw).map_err(D::Error::custom)
    }
}
