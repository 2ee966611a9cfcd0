// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Header lookups on a parsed envelope, most importantly the key id.

use hcert_abstractions::{KeyId, RawCoseEnvelope};

use crate::cbor::{decode_value, CborValue};

/// COSE header label for the signature algorithm.
pub const ALG_LABEL: i64 = 1;
/// COSE header label for the key identifier.
pub const KID_LABEL: i64 = 4;

/// The protected header decoded as a map. An empty byte string is an empty map.
///
/// `None` when the bytes are not CBOR or do not hold a map.
pub fn protected_header_map(envelope: &RawCoseEnvelope) -> Option<CborValue> {
    if envelope.protected.is_empty() {
        return Some(CborValue::Map(Vec::new()));
    }
    match decode_value(&envelope.protected) {
        Ok(map @ CborValue::Map(_)) => Some(map),
        Ok(_) => {
            tracing::debug!("protected header is not a map");
            None
        }
        Err(e) => {
            tracing::debug!(error = %e, "protected header is not valid CBOR");
            None
        }
    }
}

/// Value stored under `label` in the protected header.
pub fn protected_header(envelope: &RawCoseEnvelope, label: i64) -> Option<CborValue> {
    protected_header_map(envelope)?.map_get_int(label).cloned()
}

/// Value stored under `label` in the unprotected header.
///
/// Each label/value pair is decoded on its own; pairs that fail to decode are skipped.
pub fn unprotected_header(envelope: &RawCoseEnvelope, label: i64) -> Option<CborValue> {
    envelope.unprotected.iter().find_map(|(k, v)| {
        let key = decode_value(k).ok()?;
        if key.as_integer() != Some(i128::from(label)) {
            return None;
        }
        decode_value(v).ok()
    })
}

/// Protected header first, then unprotected.
pub fn find_header(envelope: &RawCoseEnvelope, label: i64) -> Option<CborValue> {
    protected_header(envelope, label).or_else(|| unprotected_header(envelope, label))
}

/// Resolve the key id of the signer, truncated to 8 bytes.
///
/// The protected header is consulted first and only when it lacks the kid label does
/// the unprotected header count. Whichever value is found must be a byte string. A
/// protected header that is not a map yields `None`.
pub fn resolve_key_id(envelope: &RawCoseEnvelope) -> Option<KeyId> {
    let protected = protected_header_map(envelope)?;
    let kid = match protected.map_get_int(KID_LABEL) {
        Some(value) => value.clone(),
        None => unprotected_header(envelope, KID_LABEL)?,
    };
    into_bytes(kid).map(|kid| KeyId::new(&kid))
}

fn into_bytes(value: CborValue) -> Option<Vec<u8>> {
    match value {
        CborValue::Bytes(b) => Some(b),
        _ => None,
    }
}
