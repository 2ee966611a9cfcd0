// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

#[derive(Debug, Clone, Default)]
pub struct VerificationSettings {
    /// If true, the protected `alg` header must name the scheme the trust
    /// certificate's key supports. Off by default: the scheme is chosen from the key alone.
    pub(crate) require_algorithm_match: bool,
}

impl VerificationSettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject candidates whose key does not match the declared `alg` header.
    pub fn with_algorithm_match(mut self) -> Self {
        self.require_algorithm_match = true;
        self
    }

    pub fn require_algorithm_match(&self) -> bool {
        self.require_algorithm_match
    }
}
