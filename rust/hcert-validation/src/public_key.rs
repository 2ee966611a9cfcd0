// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Public keys derived from trust certificates.
//!
//! Trust lists publish either a DER X.509 certificate or a bare DER
//! SubjectPublicKeyInfo. The key is probed as P-256 first, then RSA; the first
//! that parses decides which signature scheme the certificate supports.

use std::fmt;

use hcert_abstractions::TrustCertificate;
use p256::elliptic_curve::sec1::ToEncodedPoint;
use rsa::pkcs8::DecodePublicKey as _;
use rsa::pss;
use rsa::RsaPublicKey;
use sha2::Sha256;
use signature::Verifier;

use crate::asn1::ecdsa_raw_to_der;

/// Signature schemes a trust certificate key can support, with their COSE `alg` ids.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(i64)]
pub enum SignatureAlgorithm {
    /// ECDSA w/ SHA-256 over P-256.
    ES256 = -7,
    /// RSASSA-PSS w/ SHA-256.
    PS256 = -37,
}

impl SignatureAlgorithm {
    pub fn cose_id(self) -> i64 {
        self as i64
    }
}

impl fmt::Display for SignatureAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} ({})", self, self.cose_id())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KeyError {
    #[error("public key supports neither ECDSA P-256 nor RSA-PSS: {0}")]
    Unsupported(String),
}

/// Verification-only key material. No private key is ever held.
#[derive(Clone)]
pub enum VerificationKey {
    EcdsaP256(p256::ecdsa::VerifyingKey),
    RsaPss(RsaPublicKey),
}

impl fmt::Debug for VerificationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("VerificationKey").field(&self.algorithm()).finish()
    }
}

impl VerificationKey {
    pub fn from_trust_certificate(certificate: &TrustCertificate) -> Result<Self, KeyError> {
        Self::from_der(&certificate.contents)
    }

    /// Accepts a DER certificate or DER SubjectPublicKeyInfo.
    pub fn from_der(der: &[u8]) -> Result<Self, KeyError> {
        // Trust lists mix full certificates and bare keys; normalize to SPKI first.
        let spki = extract_spki_der_from_der_key_or_cert(der);

        if let Ok(pk) = p256::PublicKey::from_public_key_der(&spki) {
            // Round-trip through SEC1 so the verifying key is built from the uncompressed point.
            let ep = pk.to_encoded_point(false);
            let vk = p256::ecdsa::VerifyingKey::from_sec1_bytes(ep.as_bytes())
                .map_err(|e| KeyError::Unsupported(format!("bad P-256 public key: {e}")))?;
            return Ok(VerificationKey::EcdsaP256(vk));
        }

        // Anything that is not P-256 must be an RSA key for PS256.
        RsaPublicKey::from_public_key_der(&spki)
            .map(VerificationKey::RsaPss)
            .map_err(|e| KeyError::Unsupported(e.to_string()))
    }

    pub fn algorithm(&self) -> SignatureAlgorithm {
        match self {
            VerificationKey::EcdsaP256(_) => SignatureAlgorithm::ES256,
            VerificationKey::RsaPss(_) => SignatureAlgorithm::PS256,
        }
    }

    /// Verify a COSE signature over `signed_payload`.
    ///
    /// ECDSA signatures arrive as raw `r || s` and are converted to DER before checking.
    /// RSA-PSS signatures are used as is. Any malformed signature simply fails.
    pub fn verify(&self, signed_payload: &[u8], cose_signature: &[u8]) -> bool {
        match self {
            VerificationKey::EcdsaP256(vk) => {
                // COSE carries fixed-width r || s (64 bytes for P-256); p256 parses DER here.
                let Some(der) = ecdsa_raw_to_der(cose_signature) else {
                    return false;
                };
                match p256::ecdsa::Signature::from_der(&der) {
                    Ok(signature) => vk.verify(signed_payload, &signature).is_ok(),
                    Err(_) => false,
                }
            }
            VerificationKey::RsaPss(key) => {
                // PSS over SHA-256 with MGF1-SHA-256.
                let vk = pss::VerifyingKey::<Sha256>::new(key.clone());
                match pss::Signature::try_from(cose_signature) {
                    Ok(signature) => vk.verify(signed_payload, &signature).is_ok(),
                    Err(_) => false,
                }
            }
        }
    }
}

/// For a DER certificate, the SubjectPublicKeyInfo inside it; otherwise the input.
fn extract_spki_der_from_der_key_or_cert(der: &[u8]) -> Vec<u8> {
    // A bare SPKI does not parse as a certificate and is passed through unchanged.
    if let Ok((_, cert)) = x509_parser::parse_x509_certificate(der) {
        return cert.tbs_certificate.subject_pki.raw.to_vec();
    }
    der.to_vec()
}
