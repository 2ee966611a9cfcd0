// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Decompression of the zlib-wrapped COSE bytes.
//!
//! The two byte zlib header is skipped and the rest is inflated as a raw DEFLATE
//! stream. The trailing Adler-32 checksum is not checked.

use std::io::Read;

use flate2::read::DeflateDecoder;

/// Upper bound on inflated output unless configured otherwise.
pub const DEFAULT_MAX_DECOMPRESSED_LEN: usize = 1024 * 1024;

const ZLIB_HEADER_LEN: usize = 2;

#[derive(Debug, thiserror::Error)]
pub enum InflateError {
    #[error("decompression failed: {0}")]
    Stream(#[source] std::io::Error),
    #[error("decompressed data exceeds {limit} bytes")]
    LimitExceeded { limit: usize },
}

/// Inflate `input`. Inputs of two bytes or less are returned unchanged.
pub fn decompress(input: &[u8], max_len: usize) -> Result<Vec<u8>, InflateError> {
    if input.len() <= ZLIB_HEADER_LEN {
        return Ok(input.to_vec());
    }

    let capacity = (4 * input.len() + 8 * 1024).min(max_len);
    let mut out = Vec::with_capacity(capacity);

    let limit = u64::try_from(max_len).unwrap_or(u64::MAX).saturating_add(1);
    DeflateDecoder::new(&input[ZLIB_HEADER_LEN..])
        .take(limit)
        .read_to_end(&mut out)
        .map_err(InflateError::Stream)?;

    if out.len() > max_len {
        return Err(InflateError::LimitExceeded { limit: max_len });
    }

    tracing::trace!(compressed = input.len(), inflated = out.len(), "inflated payload");
    Ok(out)
}
