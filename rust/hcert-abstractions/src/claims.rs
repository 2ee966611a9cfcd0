// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Mapping from a string-keyed claim tree into the [`Credential`] model.
//!
//! The claim tree is what the CBOR payload looks like once integer keys have been
//! stringified: `"1"` issuer, `"6"` issued-at, `"4"` expiry and `"-260"` the versioned
//! health certificate claim.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::content::Content;
use crate::credential::Credential;
use crate::dates::{parse_date, timestamp_from_secs};
use crate::envelope::RawCoseEnvelope;
use crate::name::Name;

pub const ISSUER_KEY: &str = "1";
pub const ISSUED_AT_KEY: &str = "6";
pub const EXPIRES_AT_KEY: &str = "4";
pub const HCERT_KEY: &str = "-260";
pub const HCERT_V1_KEY: &str = "1";

pub const SIGNATURE_RECORD_KEY: &str = "cryptographicSignature";
pub const COMPACT_REPRESENTATION_KEY: &str = "base45Representation";

const CONTENT_KEYS: [&str; 3] = ["v", "t", "r"];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClaimsError {
    #[error("failed to decode `{field}`: {reason}")]
    ModelDecoding { field: String, reason: String },
    #[error("certificate carries no vaccination, test or recovery entry")]
    ContentMissing,
    #[error("certificate carries more than one of vaccination, test or recovery: {0:?}")]
    ContentAmbiguous(Vec<&'static str>),
}

impl ClaimsError {
    fn field(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ModelDecoding {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

pub(crate) fn credential_from_claims(claims: &Value) -> Result<Credential, ClaimsError> {
    let top = object(claims, "$")?;

    let issuer = string(top, ISSUER_KEY)?;
    let issued_at = timestamp(top, ISSUED_AT_KEY)?;
    let expires_at = timestamp(top, EXPIRES_AT_KEY)?;

    let versions = object(required(top, HCERT_KEY)?, HCERT_KEY)?;
    let hcert_path = format!("{HCERT_KEY}.{HCERT_V1_KEY}");
    let hcert = object(required(versions, HCERT_V1_KEY)?, &hcert_path)?;

    let schema_version = string(hcert, "ver")?;
    let dob_raw = string(hcert, "dob")?;
    let date_of_birth = parse_date(&dob_raw)
        .ok_or_else(|| ClaimsError::field("dob", format!("unable to parse date string {dob_raw}")))?;
    let name: Name = typed(required(hcert, "nam")?, "nam")?;
    let content = content(hcert)?;

    let signature_record = match hcert.get(SIGNATURE_RECORD_KEY) {
        None | Some(Value::Null) => RawCoseEnvelope::default(),
        Some(v) => RawCoseEnvelope::from_json(v).map_err(|e| ClaimsError::field(SIGNATURE_RECORD_KEY, e))?,
    };
    let compact_representation = hcert
        .get(COMPACT_REPRESENTATION_KEY)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    Ok(Credential {
        issuer,
        issued_at,
        expires_at,
        schema_version,
        date_of_birth,
        name,
        content,
        signature_record,
        compact_representation,
    })
}

/// Selects the single entry category. Only the first element of its array is used.
fn content(hcert: &Map<String, Value>) -> Result<Content, ClaimsError> {
    let mut present = Vec::new();
    for key in CONTENT_KEYS {
        match hcert.get(key) {
            None | Some(Value::Null) => {}
            Some(Value::Array(items)) if items.is_empty() => {}
            Some(Value::Array(_)) => present.push(key),
            Some(_) => return Err(ClaimsError::field(key, "expected an array")),
        }
    }

    match present.len() {
        0 => Err(ClaimsError::ContentMissing),
        1 => {
            let key = present[0];
            let first = hcert
                .get(key)
                .and_then(Value::as_array)
                .and_then(|items| items.first())
                .ok_or(ClaimsError::ContentMissing)?;
            let field = format!("{key}[0]");
            Ok(match key {
                "v" => Content::Vaccination(typed(first, &field)?),
                "t" => Content::Test(typed(first, &field)?),
                _ => Content::Recovery(typed(first, &field)?),
            })
        }
        _ => Err(ClaimsError::ContentAmbiguous(present)),
    }
}

fn required<'a>(map: &'a Map<String, Value>, key: &str) -> Result<&'a Value, ClaimsError> {
    map.get(key).ok_or_else(|| ClaimsError::field(key, "missing"))
}

fn object<'a>(value: &'a Value, field: &str) -> Result<&'a Map<String, Value>, ClaimsError> {
    value
        .as_object()
        .ok_or_else(|| ClaimsError::field(field, "expected a map"))
}

fn string(map: &Map<String, Value>, key: &str) -> Result<String, ClaimsError> {
    required(map, key)?
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| ClaimsError::field(key, "expected a text string"))
}

fn timestamp(map: &Map<String, Value>, key: &str) -> Result<DateTime<Utc>, ClaimsError> {
    let value = required(map, key)?;
    let secs = value
        .as_i64()
        .or_else(|| value.as_f64().map(|f| f.trunc() as i64))
        .ok_or_else(|| ClaimsError::field(key, "expected a numeric timestamp"))?;
    timestamp_from_secs(secs).ok_or_else(|| ClaimsError::field(key, format!("timestamp {secs} out of range")))
}

fn typed<T: DeserializeOwned>(value: &Value, field: &str) -> Result<T, ClaimsError> {
    T::deserialize(value).map_err(|e| ClaimsError::field(field, e.to_string()))
}
