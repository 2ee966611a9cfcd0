// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Decoding stages shared by the health certificate crates.
//!
//! Token text flows through these modules in order: [`base45`] → [`inflate`] → [`cbor`]
//! → [`cose`] → [`payload`]. [`key_id`] works on the parsed envelope and feeds signature
//! verification.

pub mod base45;
pub mod cbor;
pub mod cose;
pub mod inflate;
pub mod key_id;
pub mod payload;

pub use base45::Base45Error;
pub use cbor::{decode_value, encode_value, CborError, CborValue};
pub use cose::{
    encode_signature1_sig_structure, parse_cose_envelope, CoseError, CoseField, COSE_SIGN1_TAG,
    SIG_STRUCTURE_CONTEXT_SIGNATURE1,
};
pub use inflate::{InflateError, DEFAULT_MAX_DECOMPRESSED_LEN};
pub use key_id::{find_header, protected_header, protected_header_map, resolve_key_id, ALG_LABEL, KID_LABEL};
pub use payload::{payload_to_claims, PayloadError};
