// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::codes::{DiseaseAgent, TestResult, TestType};
use crate::coded::Country;

/// Test entry (`t`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Test {
    #[serde(rename = "tg")]
    pub disease_agent_targeted: DiseaseAgent,
    #[serde(rename = "tt")]
    pub type_of_test: TestType,
    /// NAA test name; only present for NAAT tests.
    #[serde(rename = "nm", default, skip_serializing_if = "Option::is_none")]
    pub test_name: Option<String>,
    /// RAT test name and manufacturer; only present for rapid antigen tests.
    #[serde(rename = "ma", default, skip_serializing_if = "Option::is_none")]
    pub test_name_and_manufacturer: Option<String>,
    #[serde(rename = "sc", with = "crate::dates::date")]
    pub date_of_sample_collection: DateTime<Utc>,
    #[serde(rename = "tr")]
    pub test_result: TestResult,
    #[serde(rename = "tc")]
    pub testing_centre: String,
    #[serde(rename = "co")]
    pub country_of_test: Country,
    #[serde(rename = "is")]
    pub certificate_issuer: String,
    #[serde(rename = "ci")]
    pub certificate_identifier: String,
}
