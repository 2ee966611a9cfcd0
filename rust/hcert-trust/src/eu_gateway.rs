// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Signer certificates from the EU gateway's `signercertificateUpdate` endpoint.
//!
//! The endpoint serves one certificate per response: the body is the base64 DER
//! certificate, `x-kid` carries the base64 key id and `x-resume-token` names the next
//! page. The next page is requested by echoing that token in `X-RESUME-TOKEN`.

use std::sync::Arc;
use std::time::Duration;

use hcert_abstractions::{TrustCertificate, TrustSource, TrustSourceError};
use url::Url;

use crate::http::{HttpFetcher, HttpResponse, UreqFetcher, DEFAULT_TIMEOUT};

pub const RESUME_TOKEN_HEADER: &str = "X-RESUME-TOKEN";
pub const KID_HEADER: &str = "x-kid";

/// The parts of one gateway response that pagination looks at.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GatewayPage {
    pub status: u16,
    pub kid: Option<String>,
    pub resume_token: Option<String>,
    pub body: String,
}

impl From<HttpResponse> for GatewayPage {
    fn from(response: HttpResponse) -> Self {
        Self {
            status: response.status,
            kid: response.header(KID_HEADER).map(str::to_string),
            resume_token: response.header(RESUME_TOKEN_HEADER).map(str::to_string),
            body: response.body,
        }
    }
}

/// Walk the gateway pages, starting without a resume token.
///
/// `fetch_page` receives the resume token to send, if any. Collection ends, keeping
/// what was gathered, on a non-200 page, a page without a key id, a page without a
/// resume token or a token that does not advance. Only the first page can fail the
/// whole fetch: a transport error there is returned as is, a non-200 status as
/// [`TrustSourceError::Status`]. Pages whose contents are not valid base64 are skipped.
pub fn collect_pages<F>(mut fetch_page: F) -> Result<Vec<TrustCertificate>, TrustSourceError>
where
    F: FnMut(Option<&str>) -> Result<GatewayPage, TrustSourceError>,
{
    let mut certificates = Vec::new();
    let mut resume_token: Option<String> = None;

    loop {
        let first = resume_token.is_none();
        let page = match fetch_page(resume_token.as_deref()) {
            Ok(page) => page,
            Err(e) if first => return Err(e),
            Err(e) => {
                tracing::warn!(error = %e, collected = certificates.len(), "gateway pagination aborted");
                break;
            }
        };

        if page.status != 200 {
            if first {
                return Err(TrustSourceError::Status(page.status));
            }
            tracing::debug!(status = page.status, "gateway pagination finished");
            break;
        }

        let Some(kid) = page.kid else {
            tracing::debug!("gateway page without key id");
            break;
        };
        match TrustCertificate::from_base64(&kid, &page.body) {
            Ok(certificate) => certificates.push(certificate),
            Err(e) => tracing::warn!(kid = %kid, error = %e, "skipping gateway certificate"),
        }

        match page.resume_token {
            Some(next) if resume_token.as_deref() != Some(next.as_str()) => resume_token = Some(next),
            _ => break,
        }
    }

    Ok(certificates)
}

pub struct EuGatewayTrustSource {
    url: Url,
    timeout: Duration,
    fetcher: Arc<dyn HttpFetcher>,
}

impl EuGatewayTrustSource {
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

impl std::fmt::Debug for EuGatewayTrustSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EuGatewayTrustSource")
            .field("url", &self.url.as_str())
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl TrustSource for EuGatewayTrustSource {
    fn name(&self) -> &str {
        "eu-gateway"
    }

    #[tracing::instrument(level = "debug", skip(self), fields(url = %self.url))]
    fn fetch_certificates(&self) -> Result<Vec<TrustCertificate>, TrustSourceError> {
        let certificates = collect_pages(|resume_token| {
            let headers = resume_token
                .map(|token| vec![(RESUME_TOKEN_HEADER, token)])
                .unwrap_or_default();
            self.fetcher
                .get(&self.url, &headers, self.timeout)
                .map(GatewayPage::from)
        })?;
        tracing::debug!(count = certificates.len(), "gateway certificates collected");
        Ok(certificates)
    }
}
