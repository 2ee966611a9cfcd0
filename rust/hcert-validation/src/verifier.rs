// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use hcert_abstractions::{KeyId, RawCoseEnvelope, TrustCertificate};
use hcert_common::{encode_signature1_sig_structure, protected_header, resolve_key_id, ALG_LABEL};

use crate::outcome::{VerificationOutcome, VerifyError};
use crate::public_key::{SignatureAlgorithm, VerificationKey};
use crate::settings::VerificationSettings;

/// One signature check: a signature, the bytes it should cover and one trust certificate.
#[derive(Debug, Clone, Copy)]
pub struct VerificationCandidate<'a> {
    pub signature: &'a [u8],
    pub signed_payload: &'a [u8],
    pub certificate: &'a TrustCertificate,
}

/// Outcome of checking a single candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CandidateResult {
    Valid,
    Invalid,
    Unsupported,
    AlgorithmMismatch(SignatureAlgorithm),
}

impl VerificationCandidate<'_> {
    /// `declared_alg` is only consulted when it is `Some`; pass `None` to select the
    /// scheme from the key alone.
    pub fn verify(&self, declared_alg: Option<Option<i64>>) -> CandidateResult {
        let key = match VerificationKey::from_trust_certificate(self.certificate) {
            Ok(key) => key,
            Err(e) => {
                tracing::debug!(kid = %self.certificate.key_id, error = %e, "skipping trust certificate");
                return CandidateResult::Unsupported;
            }
        };

        if let Some(declared) = declared_alg {
            if declared != Some(key.algorithm().cose_id()) {
                return CandidateResult::AlgorithmMismatch(key.algorithm());
            }
        }

        if key.verify(self.signed_payload, self.signature) {
            CandidateResult::Valid
        } else {
            CandidateResult::Invalid
        }
    }
}

/// Verifies the COSE signature of a decoded envelope against trust certificates.
#[derive(Debug, Clone, Default)]
pub struct SignatureVerifier {
    settings: VerificationSettings,
}

impl SignatureVerifier {
    pub fn new(settings: VerificationSettings) -> Self {
        Self { settings }
    }

    /// Check `envelope` against every certificate carrying its key id.
    ///
    /// Stops at the first certificate that validates. The result depends only on the
    /// protected header, payload, signature and the certificates supplied.
    pub fn verify(&self, envelope: &RawCoseEnvelope, certificates: &[TrustCertificate]) -> VerificationOutcome {
        let Some(key_id) = resolve_key_id(envelope) else {
            return VerifyError::KeyIdMissing.into();
        };
        self.verify_with_key_id(envelope, &key_id, certificates)
    }

    pub fn verify_with_key_id(
        &self,
        envelope: &RawCoseEnvelope,
        key_id: &KeyId,
        certificates: &[TrustCertificate],
    ) -> VerificationOutcome {
        let candidates = certificates
            .iter()
            .filter(|c| &c.key_id == key_id)
            .collect::<Vec<_>>();
        tracing::debug!(kid = %key_id, candidates = candidates.len(), "matched trust certificates");

        if candidates.is_empty() {
            return VerifyError::NoMatchingTrustCertificate(key_id.clone()).into();
        }

        let signed_payload = match encode_signature1_sig_structure(&envelope.protected, &envelope.payload) {
            Ok(bytes) => bytes,
            Err(e) => return VerifyError::SigStructure(e).into(),
        };

        let declared_alg = self.settings.require_algorithm_match.then(|| {
            protected_header(envelope, ALG_LABEL)
                .and_then(|v| v.as_integer())
                .and_then(|v| i64::try_from(v).ok())
        });

        let mut saw_invalid = false;
        let mut mismatch = None;
        for certificate in candidates {
            let candidate = VerificationCandidate {
                signature: &envelope.signature,
                signed_payload: &signed_payload,
                certificate,
            };
            match candidate.verify(declared_alg) {
                CandidateResult::Valid => {
                    tracing::debug!(kid = %key_id, "signature verified");
                    return VerificationOutcome::Valid(certificate.clone());
                }
                CandidateResult::Invalid => saw_invalid = true,
                CandidateResult::AlgorithmMismatch(key) => mismatch = Some(key),
                CandidateResult::Unsupported => {}
            }
        }

        if saw_invalid {
            tracing::debug!(kid = %key_id, "no trust certificate validated the signature");
            return VerificationOutcome::Invalid;
        }
        match mismatch {
            Some(key) => VerifyError::AlgorithmMismatch {
                declared: declared_alg.flatten(),
                key,
            }
            .into(),
            None => VerifyError::UnsupportedAlgorithm.into(),
        }
    }
}
