// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use hcert_abstractions::ClaimsError;
use hcert_common::{Base45Error, CborError, CoseError, InflateError, PayloadError};

/// Why a token could not be turned into a credential. One variant per decode stage.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("base45 decoding failed: {0}")]
    Base45(#[from] Base45Error),
    #[error(transparent)]
    Decompression(#[from] InflateError),
    #[error(transparent)]
    MalformedCbor(#[from] CborError),
    #[error(transparent)]
    Cose(CoseError),
    #[error("payload is not a claim map: {0}")]
    PayloadProjection(PayloadError),
    #[error(transparent)]
    Claims(#[from] ClaimsError),
}

impl From<CoseError> for DecodeError {
    fn from(e: CoseError) -> Self {
        match e {
            CoseError::Cbor(e) => DecodeError::MalformedCbor(e),
            other => DecodeError::Cose(other),
        }
    }
}

impl From<PayloadError> for DecodeError {
    fn from(e: PayloadError) -> Self {
        match e {
            PayloadError::Cbor(e) => DecodeError::MalformedCbor(e),
            other => DecodeError::PayloadProjection(other),
        }
    }
}
