// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! The DSC trust list published by the Robert Koch Institute.
//!
//! The response body is two lines: a signature over the list, then the list itself as
//! JSON. The signature line is not checked.

use std::sync::Arc;
use std::time::Duration;

use hcert_abstractions::{TrustCertificate, TrustSource, TrustSourceError};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::http::{HttpFetcher, UreqFetcher, DEFAULT_TIMEOUT};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RkiTrustList {
    pub certificates: Vec<RkiTrustListEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RkiTrustListEntry {
    pub certificate_type: String,
    pub country: String,
    pub kid: String,
    pub raw_data: String,
    pub signature: String,
    pub thumbprint: String,
    pub timestamp: String,
}

impl RkiTrustListEntry {
    pub fn to_trust_certificate(&self) -> Result<TrustCertificate, TrustSourceError> {
        TrustCertificate::from_base64(&self.kid, &self.raw_data)
    }
}

/// Parse a trust list response body into trust certificates.
pub fn parse_trust_list(body: &str) -> Result<Vec<TrustCertificate>, TrustSourceError> {
    let Some(list) = body.split('\n').nth(1) else {
        return Err(TrustSourceError::CertificatesMissing);
    };
    let list: RkiTrustList =
        serde_json::from_str(list).map_err(|e| TrustSourceError::Decoding(e.to_string()))?;
    list.certificates
        .iter()
        .map(RkiTrustListEntry::to_trust_certificate)
        .collect()
}

pub struct RkiTrustSource {
    url: Url,
    timeout: Duration,
    fetcher: Arc<dyn HttpFetcher>,
}

impl RkiTrustSource {
    pub fn new(url: Url) -> Self {
        Self {
            url,
            timeout: DEFAULT_TIMEOUT,
            fetcher: Arc::new(UreqFetcher),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_fetcher(mut self, fetcher: Arc<dyn HttpFetcher>) -> Self {
        self.fetcher = fetcher;
        self
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

impl std::fmt::Debug for RkiTrustSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RkiTrustSource")
            .field("url", &self.url.as_str())
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl TrustSource for RkiTrustSource {
    fn name(&self) -> &str {
        "rki"
    }

    #[tracing::instrument(level = "debug", skip(self), fields(url = %self.url))]
    fn fetch_certificates(&self) -> Result<Vec<TrustCertificate>, TrustSourceError> {
        let response = self.fetcher.get(&self.url, &[], self.timeout)?;
        if response.status != 200 {
            return Err(TrustSourceError::Status(response.status));
        }
        let certificates = parse_trust_list(&response.body)?;
        tracing::debug!(count = certificates.len(), "trust list parsed");
        Ok(certificates)
    }
}
