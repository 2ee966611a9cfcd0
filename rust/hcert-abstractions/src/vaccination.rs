// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::codes::{DiseaseAgent, MarketingAuthorizationHolder, MedicinalProduct, VaccineProphylaxis};
use crate::coded::Country;

/// Vaccination entry (`v`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Vaccination {
    #[serde(rename = "tg")]
    pub disease_agent_targeted: DiseaseAgent,
    #[serde(rename = "vp")]
    pub vaccine_or_prophylaxis: VaccineProphylaxis,
    #[serde(rename = "mp")]
    pub vaccine_medicinal_product: MedicinalProduct,
    #[serde(rename = "ma")]
    pub marketing_authorization_holder: MarketingAuthorizationHolder,
    #[serde(rename = "dn")]
    pub dose_number: u64,
    #[serde(rename = "sd")]
    pub total_series_of_doses: u64,
    #[serde(rename = "dt", with = "crate::dates::date")]
    pub date_of_vaccination: DateTime<Utc>,
    #[serde(rename = "co")]
    pub country_of_vaccination: Country,
    #[serde(rename = "is")]
    pub certificate_issuer: String,
    #[serde(rename = "ci")]
    pub certificate_identifier: String,
}

impl Vaccination {
    /// True once the last dose of the primary series has been given.
    pub fn is_series_complete(&self) -> bool {
        self.dose_number == self.total_series_of_doses
    }
}
