// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use chrono::{DateTime, Utc};

/// Inputs to rule evaluation that do not come from the credential.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationContext {
    pub now: DateTime<Utc>,
}

impl ValidationContext {
    /// Context using the system clock.
    pub fn now() -> Self {
        Self { now: Utc::now() }
    }

    pub fn at(now: DateTime<Utc>) -> Self {
        Self { now }
    }
}

impl Default for ValidationContext {
    fn default() -> Self {
        Self::now()
    }
}
