// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::codes::DiseaseAgent;
use crate::coded::Country;

/// Recovery entry (`r`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Recovery {
    #[serde(rename = "tg")]
    pub disease_agent_targeted: DiseaseAgent,
    #[serde(rename = "fr", with = "crate::dates::date")]
    pub date_of_first_positive_test_result: DateTime<Utc>,
    #[serde(rename = "co")]
    pub country_of_test: Country,
    #[serde(rename = "is")]
    pub certificate_issuer: String,
    #[serde(rename = "df", with = "crate::dates::date")]
    pub certificate_valid_from: DateTime<Utc>,
    #[serde(rename = "du", with = "crate::dates::date")]
    pub certificate_valid_until: DateTime<Utc>,
    #[serde(rename = "ci")]
    pub certificate_identifier: String,
}

impl Recovery {
    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        self.certificate_valid_from <= now && now <= self.certificate_valid_until
    }
}
