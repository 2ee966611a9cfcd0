// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::sync::Arc;

use hcert_abstractions::Credential;

use crate::context::ValidationContext;
use crate::rule::ValidationRule;
use crate::tag::Tag;

type Extractor<V> = Arc<dyn Fn(&Credential, &ValidationContext) -> V + Send + Sync>;

/// Right-hand side of [`ValidationRule::compare`].
pub enum CompareAgainst<V> {
    Constant(V),
    Extracted(Extractor<V>),
}

impl<V> CompareAgainst<V> {
    pub fn extracted<F>(extract: F) -> Self
    where
        F: Fn(&Credential, &ValidationContext) -> V + Send + Sync + 'static,
    {
        CompareAgainst::Extracted(Arc::new(extract))
    }
}

impl ValidationRule {
    /// Compare a value taken from the credential with a constant or another extracted
    /// value.
    pub fn compare<V, L, Op>(value: L, against: CompareAgainst<V>, op: Op, tag: impl Into<Tag>) -> Self
    where
        V: Send + Sync + 'static,
        L: Fn(&Credential, &ValidationContext) -> V + Send + Sync + 'static,
        Op: Fn(&V, &V) -> bool + Send + Sync + 'static,
    {
        ValidationRule::new(tag, move |c, ctx| {
            let lhs = value(c, ctx);
            match &against {
                CompareAgainst::Constant(rhs) => op(&lhs, rhs),
                CompareAgainst::Extracted(extract) => op(&lhs, &extract(c, ctx)),
            }
        })
    }
}
