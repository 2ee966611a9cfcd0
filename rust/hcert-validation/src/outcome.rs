// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use hcert_abstractions::{KeyId, TrustCertificate, TrustSourceError};
use hcert_common::CborError;

use crate::public_key::SignatureAlgorithm;

/// Structural or infrastructure failures that prevent a verdict.
#[derive(Debug, thiserror::Error)]
pub enum VerifyError {
    #[error("no key id in protected or unprotected header")]
    KeyIdMissing,
    #[error(transparent)]
    TrustSource(#[from] TrustSourceError),
    #[error("no trust certificate for key id {0}")]
    NoMatchingTrustCertificate(KeyId),
    #[error("no trust certificate for this key id has a supported public key")]
    UnsupportedAlgorithm,
    #[error("declared alg {declared:?} does not match trust certificate key {key}")]
    AlgorithmMismatch {
        declared: Option<i64>,
        key: SignatureAlgorithm,
    },
    #[error("failed to build Sig_structure: {0}")]
    SigStructure(#[from] CborError),
}

/// Result of one verification call.
///
/// `Invalid` means the credential is well formed and a trust certificate exists for
/// its key id, but no signature check succeeded.
#[derive(Debug)]
pub enum VerificationOutcome {
    Valid(TrustCertificate),
    Invalid,
    Error(VerifyError),
}

impl VerificationOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, VerificationOutcome::Valid(_))
    }

    pub fn certificate(&self) -> Option<&TrustCertificate> {
        match self {
            VerificationOutcome::Valid(c) => Some(c),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&VerifyError> {
        match self {
            VerificationOutcome::Error(e) => Some(e),
            _ => None,
        }
    }
}

impl From<VerifyError> for VerificationOutcome {
    fn from(e: VerifyError) -> Self {
        VerificationOutcome::Error(e)
    }
}
