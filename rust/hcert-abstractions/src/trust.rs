// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Trust anchors and the contract for obtaining them.

use std::future::Future;
use std::pin::Pin;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};

use crate::key_id::KeyId;

/// Boxed future used by async trust APIs.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// A certificate (or bare public key) that may have signed credentials.
///
/// `contents` is either a DER X.509 certificate or a DER SubjectPublicKeyInfo.
/// Only public material is ever held here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TrustCertificate {
    pub key_id: KeyId,
    #[serde(with = "base64_bytes")]
    pub contents: Vec<u8>,
}

impl TrustCertificate {
    pub fn new(key_id: KeyId, contents: Vec<u8>) -> Self {
        Self { key_id, contents }
    }

    /// Build from the base64 strings trust lists publish.
    pub fn from_base64(key_id: &str, contents: &str) -> Result<Self, TrustSourceError> {
        let key_id = KeyId::from_base64(key_id)
            .map_err(|e| TrustSourceError::Decoding(format!("invalid key id {key_id:?}: {e}")))?;
        let compact: String = contents.split_whitespace().collect();
        let contents = STANDARD
            .decode(compact)
            .map_err(|e| TrustSourceError::Decoding(format!("invalid certificate contents for {key_id}: {e}")))?;
        Ok(Self { key_id, contents })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TrustSourceError {
    #[error("trust source request failed: {0}")]
    Request(String),
    #[error("trust source responded with HTTP status {0}")]
    Status(u16),
    #[error("trust source response did not contain certificates")]
    CertificatesMissing,
    #[error("trust source response could not be decoded: {0}")]
    Decoding(String),
    #[error("no trust sources configured")]
    NoSources,
    #[error("no trust certificates obtained from any source: [{}]", .0.iter().map(|e| e.to_string()).collect::<Vec<_>>().join("; "))]
    Aggregate(Vec<TrustSourceError>),
}

/// Supplies the trust certificates currently known to a relying party.
///
/// Implementations complete once per call with either the full certificate set or an
/// error. Pagination, timeouts and retries are internal to each implementation.
pub trait TrustSource: Send + Sync {
    fn name(&self) -> &str;

    fn fetch_certificates(&self) -> Result<Vec<TrustCertificate>, TrustSourceError>;

    /// Async form of [`TrustSource::fetch_certificates`].
    ///
    /// The default runs the synchronous fetch when the future is first polled.
    fn fetch_certificates_async<'a>(
        &'a self,
    ) -> BoxFuture<'a, Result<Vec<TrustCertificate>, TrustSourceError>> {
        Box::pin(async move { self.fetch_certificates() })
    }
}

mod base64_bytes {
    use base64::{engine::general_purpose::STANDARD, Engine as _};
    use serde::{de::Error as _, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&STANDARD.encode(value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        STANDARD.decode(raw).map_err(D::Error::custom)
    }
}
