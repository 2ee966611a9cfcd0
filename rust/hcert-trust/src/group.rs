// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::sync::Arc;

use futures::channel::oneshot;
use futures::executor::block_on;
use futures::future::join_all;
use hcert_abstractions::{BoxFuture, TrustCertificate, TrustSource, TrustSourceError};

/// Merges the certificates of several sources.
///
/// Results are concatenated in source order. A failing source is logged and skipped;
/// the group only fails when no source produced a certificate.
///
/// The async fetch gives every member its own thread, so members whose fetch blocks
/// (the HTTP sources) still run concurrently.
#[derive(Clone, Default)]
pub struct GroupTrustSource {
    sources: Vec<Arc<dyn TrustSource>>,
}

impl GroupTrustSource {
    pub fn new(sources: Vec<Arc<dyn TrustSource>>) -> Self {
        Self { sources }
    }

    pub fn with_source(mut self, source: Arc<dyn TrustSource>) -> Self {
        self.sources.push(source);
        self
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

impl std::fmt::Debug for GroupTrustSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.sources.iter().map(|s| s.name())).finish()
    }
}

impl TrustSource for GroupTrustSource {
    fn name(&self) -> &str {
        "group"
    }

    fn fetch_certificates(&self) -> Result<Vec<TrustCertificate>, TrustSourceError> {
        let results = self
            .sources
            .iter()
            .map(|s| (s.name(), s.fetch_certificates()))
            .collect::<Vec<_>>();
        merge(self.sources.len(), results)
    }

    fn fetch_certificates_async<'a>(&'a self) -> BoxFuture<'a, Result<Vec<TrustCertificate>, TrustSourceError>> {
        Box::pin(async move {
            tracing::debug!(sources = self.sources.len(), "fetching trust sources concurrently");
            let results = join_all(self.sources.iter().map(|s| async move {
                (s.name(), spawn_fetch(Arc::clone(s)).await)
            }))
            .await;
            merge(self.sources.len(), results)
        })
    }
}

/// Drive one member's fetch on a dedicated thread and hand the result back.
async fn spawn_fetch(source: Arc<dyn TrustSource>) -> Result<Vec<TrustCertificate>, TrustSourceError> {
    let (tx, rx) = oneshot::channel();
    let name = source.name().to_string();
    std::thread::Builder::new()
        .name(format!("trust-source-{name}"))
        .spawn(move || {
            // receiver gone means the group future was dropped
            let _ = tx.send(block_on(source.fetch_certificates_async()));
        })
        .map_err(|e| TrustSourceError::Request(format!("could not start fetch for {name}: {e}")))?;

    rx.await
        .map_err(|_| TrustSourceError::Request(format!("fetch for {name} ended without a result")))?
}

fn merge(
    source_count: usize,
    results: Vec<(&str, Result<Vec<TrustCertificate>, TrustSourceError>)>,
) -> Result<Vec<TrustCertificate>, TrustSourceError> {
    if source_count == 0 {
        return Err(TrustSourceError::NoSources);
    }

    let mut certificates = Vec::new();
    let mut errors = Vec::new();
    for (name, result) in results {
        match result {
            Ok(mut found) => {
                tracing::debug!(source = name, count = found.len(), "trust source responded");
                certificates.append(&mut found);
            }
            Err(e) => {
                tracing::warn!(source = name, error = %e, "trust source failed");
                errors.push(e);
            }
        }
    }

    if certificates.is_empty() {
        return Err(TrustSourceError::Aggregate(errors));
    }
    Ok(certificates)
}
