// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::sync::Arc;

use hcert_abstractions::{Credential, TrustCertificate, TrustSource};
use hcert_common::resolve_key_id;
use hcert_validation::{SignatureVerifier, VerificationOutcome, VerificationSettings, VerifyError};

/// Verifies credential signatures against a trust source.
#[derive(Clone)]
pub struct HcertVerifier {
    trust_source: Arc<dyn TrustSource>,
    signatures: SignatureVerifier,
}

impl HcertVerifier {
    pub fn new(trust_source: Arc<dyn TrustSource>, settings: VerificationSettings) -> Self {
        Self {
            trust_source,
            signatures: SignatureVerifier::new(settings),
        }
    }

    /// Fetch trust certificates and check the credential's signature.
    ///
    /// The key id is resolved before the trust source is contacted; a credential without
    /// one fails without a fetch. The future runs on the caller's executor.
    #[tracing::instrument(level = "debug", skip_all, fields(source = self.trust_source.name()))]
    pub async fn verify(&self, credential: &Credential) -> VerificationOutcome {
        let envelope = &credential.signature_record;
        let Some(key_id) = resolve_key_id(envelope) else {
            return VerifyError::KeyIdMissing.into();
        };

        let certificates = match self.trust_source.fetch_certificates_async().await {
            Ok(certificates) => certificates,
            Err(e) => {
                tracing::debug!(error = %e, "trust source failed");
                return VerifyError::TrustSource(e).into();
            }
        };

        self.signatures.verify_with_key_id(envelope, &key_id, &certificates)
    }

    /// Check the credential's signature against `certificates`, without a fetch.
    pub fn verify_with_certificates(
        &self,
        credential: &Credential,
        certificates: &[TrustCertificate],
    ) -> VerificationOutcome {
        self.signatures.verify(&credential.signature_record, certificates)
    }
}

impl std::fmt::Debug for HcertVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HcertVerifier")
            .field("trust_source", &self.trust_source.name())
            .field("signatures", &self.signatures)
            .finish()
    }
}
