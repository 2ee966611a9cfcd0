// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::collections::BTreeMap;
use std::fmt;

use hcert_abstractions::RawCoseEnvelope;
use minicbor::Encoder;

use crate::cbor::{encode_value, CborError, CborValue};

pub const COSE_SIGN1_TAG: u64 = 18;
pub const SIG_STRUCTURE_CONTEXT_SIGNATURE1: &str = "Signature1";

const ENVELOPE_ITEMS: usize = 4;

/// Positions of the COSE_Sign1 structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoseField {
    /// The tagged array itself.
    Envelope,
    Protected,
    Unprotected,
    Payload,
    Signature,
}

impl fmt::Display for CoseField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CoseField::Envelope => "tagged envelope array",
            CoseField::Protected => "protected header (bstr)",
            CoseField::Unprotected => "unprotected header (map)",
            CoseField::Payload => "payload (bstr)",
            CoseField::Signature => "signature (bstr)",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoseError {
    #[error("COSE structure missing {0}")]
    StructureMissing(CoseField),
    #[error("COSE envelope has {0} items, expected 4")]
    UnexpectedItems(usize),
    #[error(transparent)]
    Cbor(#[from] CborError),
}

/// Extract the four COSE_Sign1 parts from a decoded CBOR value.
///
/// The value must be a tag wrapping an array. Each slot is checked in order, and the
/// first one that is absent or has the wrong type is reported. No signature checks
/// happen here.
pub fn parse_cose_envelope(value: &CborValue) -> Result<RawCoseEnvelope, CoseError> {
    let items = match value {
        CborValue::Tag(tag, inner) => match inner.as_ref() {
            CborValue::Array(items) => {
                if *tag != COSE_SIGN1_TAG {
                    tracing::debug!(tag = *tag, "envelope uses a tag other than COSE_Sign1");
                }
                items
            }
            _ => return Err(CoseError::StructureMissing(CoseField::Envelope)),
        },
        _ => return Err(CoseError::StructureMissing(CoseField::Envelope)),
    };

    let protected = match items.first() {
        Some(CborValue::Bytes(b)) => b.clone(),
        _ => return Err(CoseError::StructureMissing(CoseField::Protected)),
    };

    let unprotected = match items.get(1) {
        // Kept as encoded label/value pairs so lookups do not depend on map ordering.
        Some(CborValue::Map(entries)) => canonical_header_map(entries)?,
        _ => return Err(CoseError::StructureMissing(CoseField::Unprotected)),
    };

    let payload = match items.get(2) {
        Some(CborValue::Bytes(b)) => b.clone(),
        _ => return Err(CoseError::StructureMissing(CoseField::Payload)),
    };

    let signature = match items.get(3) {
        Some(CborValue::Bytes(b)) => b.clone(),
        _ => return Err(CoseError::StructureMissing(CoseField::Signature)),
    };

    // Slots are checked before the count so a short array names its first missing slot.
    if items.len() != ENVELOPE_ITEMS {
        return Err(CoseError::UnexpectedItems(items.len()));
    }

    Ok(RawCoseEnvelope {
        protected,
        unprotected,
        payload,
        signature,
    })
}

/// Re-encode each header label and value on its own. Later duplicates win.
fn canonical_header_map(entries: &[(CborValue, CborValue)]) -> Result<BTreeMap<Vec<u8>, Vec<u8>>, CborError> {
    let mut out = BTreeMap::new();
    for (k, v) in entries {
        out.insert(encode_value(k)?, encode_value(v)?);
    }
    Ok(out)
}

/// CBOR encoding of `["Signature1", protected, h'', payload]`: the bytes that were signed.
pub fn encode_signature1_sig_structure(protected: &[u8], payload: &[u8]) -> Result<Vec<u8>, CborError> {
    let mut out = Vec::with_capacity(32 + protected.len() + payload.len());
    {
        let mut enc = Encoder::new(&mut out);
        enc.array(4)?;
        enc.str(SIG_STRUCTURE_CONTEXT_SIGNATURE1)?;
        // body_protected: the bstr exactly as received, never re-encoded.
        enc.bytes(protected)?;
        // external_aad: HC1 tokens never carry any.
        enc.bytes(&[])?;
        enc.bytes(payload)?;
    }
    Ok(out)
}
