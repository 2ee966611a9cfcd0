// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Date and timestamp codecs shared by the model types.
//!
//! Certificate dates come as ISO 8601 strings that are either full date-times
//! (`2021-05-30T10:12:22Z`) or plain dates (`2021-02-18`). Plain dates are taken as
//! midnight UTC. Claim timestamps are seconds since the Unix epoch.

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};

/// Parse a certificate date: full date-time first, then date-only.
pub fn parse_date(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

pub fn format_date(value: &DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Secs, true)
}

pub fn timestamp_from_secs(secs: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(secs, 0)
}

/// `serde(with = ...)` adapter for certificate date strings.
pub mod date {
    use chrono::{DateTime, Utc};
    use serde::{de::Error as _, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_date(value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_date(&raw).ok_or_else(|| D::Error::custom(format!("unable to parse date string {raw}")))
    }
}
