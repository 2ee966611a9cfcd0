// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::collections::BTreeMap;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde_json::{Map, Value};

/// The four parts of a COSE_Sign1 envelope, as they appeared on the wire.
///
/// `unprotected` maps each header label to its value, both kept as their own CBOR
/// encoding so that later stages can decode them independently.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct RawCoseEnvelope {
    pub protected: Vec<u8>,
    pub unprotected: BTreeMap<Vec<u8>, Vec<u8>>,
    pub payload: Vec<u8>,
    pub signature: Vec<u8>,
}

impl RawCoseEnvelope {
    pub fn is_empty(&self) -> bool {
        self.protected.is_empty()
            && self.unprotected.is_empty()
            && self.payload.is_empty()
            && self.signature.is_empty()
    }

    /// Keyed representation used by credential serialization. Byte strings are base64.
    pub fn to_json(&self) -> Value {
        let unprotected = self
            .unprotected
            .iter()
            .map(|(k, v)| (STANDARD.encode(k), Value::String(STANDARD.encode(v))))
            .collect::<Map<_, _>>();

        let mut obj = Map::new();
        obj.insert("protected".into(), Value::String(STANDARD.encode(&self.protected)));
        obj.insert("unprotected".into(), Value::Object(unprotected));
        obj.insert("payload".into(), Value::String(STANDARD.encode(&self.payload)));
        obj.insert("signature".into(), Value::String(STANDARD.encode(&self.signature)));
        Value::Object(obj)
    }

    pub fn from_json(value: &Value) -> Result<Self, String> {
        let obj = value.as_object().ok_or("expected an object")?;

        let bytes = |key: &str| -> Result<Vec<u8>, String> {
            match obj.get(key) {
                None | Some(Value::Null) => Ok(Vec::new()),
                Some(Value::String(s)) => STANDARD.decode(s).map_err(|e| format!("{key}: {e}")),
                Some(_) => Err(format!("{key}: expected a base64 string")),
            }
        };

        let mut unprotected = BTreeMap::new();
        if let Some(Value::Object(map)) = obj.get("unprotected") {
            for (k, v) in map {
                let key = STANDARD.decode(k).map_err(|e| format!("unprotected key: {e}"))?;
                let value = v
                    .as_str()
                    .ok_or("unprotected value: expected a base64 string")
                    .and_then(|s| STANDARD.decode(s).map_err(|_| "unprotected value: invalid base64"))?;
                unprotected.insert(key, value);
            }
        }

        Ok(Self {
            protected: bytes("protected")?,
            unprotected,
            payload: bytes("payload")?,
            signature: bytes("signature")?,
        })
    }
}
