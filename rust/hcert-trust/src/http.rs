// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::time::Duration;

use hcert_abstractions::TrustSourceError;
use url::Url;

/// Request timeout used by network sources unless configured otherwise.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// A completed HTTP exchange. Non-2xx statuses are responses, not errors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    /// Header lookup, ignoring ASCII case.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Performs a GET request.
///
/// Only transport failures (DNS, TLS, timeout, unreadable body) are errors.
pub trait HttpFetcher: Send + Sync {
    fn get(&self, url: &Url, headers: &[(&str, &str)], timeout: Duration) -> Result<HttpResponse, TrustSourceError>;
}

/// Blocking fetcher backed by `ureq`.
#[derive(Debug, Default, Clone, Copy)]
pub struct UreqFetcher;

impl HttpFetcher for UreqFetcher {
    fn get(&self, url: &Url, headers: &[(&str, &str)], timeout: Duration) -> Result<HttpResponse, TrustSourceError> {
        let mut request = ureq::get(url.as_str()).timeout(timeout);
        for (name, value) in headers {
            request = request.set(name, value);
        }

        let response = match request.call() {
            Ok(r) => r,
            Err(ureq::Error::Status(_, r)) => r,
            Err(e) => return Err(TrustSourceError::Request(e.to_string())),
        };

        let status = response.status();
        let headers = response
            .headers_names()
            .into_iter()
            .filter_map(|name| {
                let value = response.header(&name)?.to_string();
                Some((name, value))
            })
            .collect();
        let body = response
            .into_string()
            .map_err(|e| TrustSourceError::Request(e.to_string()))?;

        Ok(HttpResponse { status, headers, body })
    }
}
