// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use hcert_abstractions::{TrustCertificate, TrustSource, TrustSourceError};

/// Always returns the list it was built with.
#[derive(Debug, Clone, Default)]
pub struct StaticTrustSource {
    certificates: Vec<TrustCertificate>,
}

impl StaticTrustSource {
    pub fn new(certificates: Vec<TrustCertificate>) -> Self {
        Self { certificates }
    }

    pub fn certificates(&self) -> &[TrustCertificate] {
        &self.certificates
    }
}

impl From<Vec<TrustCertificate>> for StaticTrustSource {
    fn from(certificates: Vec<TrustCertificate>) -> Self {
        Self::new(certificates)
    }
}

impl TrustSource for StaticTrustSource {
    fn name(&self) -> &str {
        "static"
    }

    fn fetch_certificates(&self) -> Result<Vec<TrustCertificate>, TrustSourceError> {
        Ok(self.certificates.clone())
    }
}
