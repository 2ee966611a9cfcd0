// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Projection of the CBOR claims payload into a string-keyed tree.
//!
//! Integer keys become their decimal text (`-260` for CBOR negative argument 259),
//! byte strings become standard base64 text and tags are unwrapped to their content.
//! Entries whose key has no text form (arrays, maps, null) are dropped.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde_json::{Map, Number, Value};

use crate::cbor::{decode_value, CborError, CborValue};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PayloadError {
    #[error(transparent)]
    Cbor(#[from] CborError),
    #[error("payload is not a CBOR map")]
    NotAMap,
}

/// Decode the COSE payload and project it into a claim tree.
pub fn payload_to_claims(payload: &[u8]) -> Result<Value, PayloadError> {
    let value = decode_value(payload)?;
    match strip_tags(&value) {
        CborValue::Map(entries) => Ok(Value::Object(project_map(entries)?)),
        _ => Err(PayloadError::NotAMap),
    }
}

fn strip_tags(value: &CborValue) -> &CborValue {
    match value {
        CborValue::Tag(_, inner) => strip_tags(inner),
        other => other,
    }
}

fn project_map(entries: &[(CborValue, CborValue)]) -> Result<Map<String, Value>, PayloadError> {
    let mut out = Map::new();
    for (k, v) in entries {
        let Some(key) = project_key(k) else {
            tracing::debug!(key = ?k, "skipping map entry with a non-text key");
            continue;
        };
        out.insert(key, project_value(v)?);
    }
    Ok(out)
}

fn project_key(key: &CborValue) -> Option<String> {
    match strip_tags(key) {
        CborValue::Unsigned(n) => Some(n.to_string()),
        CborValue::Negative(n) => Some(format!("-{}", u128::from(*n) + 1)),
        CborValue::Text(s) => Some(s.clone()),
        CborValue::Bytes(b) => Some(STANDARD.encode(b)),
        CborValue::Half(f) | CborValue::Float(f) => Some(f.to_string()),
        CborValue::Double(f) => Some(f.to_string()),
        CborValue::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn project_value(value: &CborValue) -> Result<Value, PayloadError> {
    Ok(match value {
        CborValue::Unsigned(n) => Value::from(*n),
        CborValue::Negative(n) => match i64::try_from(*n) {
            Ok(n) => Value::from(-1 - n),
            Err(_) => float(-1.0 - *n as f64),
        },
        CborValue::Half(f) | CborValue::Float(f) => float(f64::from(*f)),
        CborValue::Double(f) => float(*f),
        CborValue::Bool(b) => Value::Bool(*b),
        CborValue::Null | CborValue::Undefined | CborValue::Simple(_) | CborValue::Break => Value::Null,
        CborValue::Bytes(b) => Value::String(STANDARD.encode(b)),
        CborValue::Text(s) => Value::String(s.clone()),
        CborValue::Array(items) => Value::Array(items.iter().map(project_value).collect::<Result<_, _>>()?),
        CborValue::Map(entries) => Value::Object(project_map(entries)?),
        CborValue::Tag(_, inner) => project_value(inner)?,
    })
}

fn float(f: f64) -> Value {
    Number::from_f64(f).map(Value::Number).unwrap_or(Value::Null)
}
