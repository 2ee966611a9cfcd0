// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use serde::{Deserialize, Serialize};

/// Person name (`nam`).
///
/// Only the standardised (ICAO 9303 transliterated) surname is mandatory.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Name {
    #[serde(rename = "gn", default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(rename = "gnt", default, skip_serializing_if = "Option::is_none")]
    pub standardised_first_name: Option<String>,
    #[serde(rename = "fn", default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(rename = "fnt")]
    pub standardised_last_name: String,
}
