// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Minimal DER writer for ECDSA signatures.
//!
//! COSE carries ECDSA signatures as raw `r || s`. The ASN.1 form is
//! `SEQUENCE { INTEGER r, INTEGER s }` with minimal, non-negative integers.

const TAG_INTEGER: u8 = 0x02;
const TAG_SEQUENCE: u8 = 0x30;

/// Length of `s` for P-256.
pub const P256_SCALAR_LEN: usize = 32;

/// Re-encode a raw `r || s` signature as DER.
///
/// `s` is the last 32 bytes and `r` everything before it. Returns `None` when the
/// input is too short to hold both.
pub fn ecdsa_raw_to_der(raw: &[u8]) -> Option<Vec<u8>> {
    if raw.len() <= P256_SCALAR_LEN {
        return None;
    }
    let (r, s) = raw.split_at(raw.len() - P256_SCALAR_LEN);

    let mut body = Vec::with_capacity(raw.len() + 6);
    write_integer(&mut body, r);
    write_integer(&mut body, s);

    let mut out = Vec::with_capacity(body.len() + 4);
    out.push(TAG_SEQUENCE);
    write_length(&mut out, body.len());
    out.extend_from_slice(&body);
    Some(out)
}

fn write_integer(out: &mut Vec<u8>, magnitude: &[u8]) {
    let first_nonzero = magnitude.iter().position(|&b| b != 0).unwrap_or(magnitude.len());
    let mut trimmed = &magnitude[first_nonzero..];
    if trimmed.is_empty() {
        trimmed = &[0];
    }

    let pad = trimmed[0] & 0x80 != 0;
    out.push(TAG_INTEGER);
    write_length(out, trimmed.len() + usize::from(pad));
    if pad {
        out.push(0);
    }
    out.extend_from_slice(trimmed);
}

fn write_length(out: &mut Vec<u8>, len: usize) {
    if len < 0x80 {
        out.push(len as u8);
        return;
    }
    let bytes = len.to_be_bytes();
    let skip = bytes.iter().position(|&b| b != 0).unwrap_or(bytes.len() - 1);
    let significant = &bytes[skip..];
    out.push(0x80 | significant.len() as u8);
    out.extend_from_slice(significant);
}
