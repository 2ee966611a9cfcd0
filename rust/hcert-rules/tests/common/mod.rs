// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use hcert_abstractions::Credential;
use hcert_rules::ValidationContext;
use serde_json::{json, Value};

pub fn credential_with(key: &str, entry: Value) -> Credential {
    let claims = json!({
        "1": "DE",
        "6": 1622316073,
        "4": 1687880000,
        "-260": {
            "1": {
                key: [entry],
                "nam": { "fnt": "MUSTERFRAU", "fn": "Musterfrau", "gnt": "ERIKA", "gn": "Erika" },
                "ver": "1.3.0",
                "dob": "1964-08-12"
            }
        }
    });
    Credential::from_claims(&claims).unwrap()
}

pub fn vaccination(dose: u64, series: u64, date: &str, product: &str) -> Credential {
    credential_with(
        "v",
        json!({
            "tg": "840539006",
            "vp": "1119349007",
            "mp": product,
            "ma": "ORG-100030215",
            "dn": dose,
            "sd": series,
            "dt": date,
            "co": "DE",
            "is": "Robert Koch-Institut",
            "ci": "URN:UVCI:01DE/IZ12345A/5CWLU12RNOB9RXSEOP6FG8#W"
        }),
    )
}

pub fn test(test_type: &str, result: &str, sample_collected: &str) -> Credential {
    credential_with(
        "t",
        json!({
            "tg": "840539006",
            "tt": test_type,
            "nm": "Roche LightCycler qPCR",
            "sc": sample_collected,
            "tr": result,
            "tc": "Testzentrum Köln Hbf",
            "co": "DE",
            "is": "Robert Koch-Institut",
            "ci": "URN:UVCI:01DE/IBMT102/18Q12HTUJ7NG3ZVDK6TLT0#G"
        }),
    )
}

pub fn recovery(valid_from: &str, valid_until: &str) -> Credential {
    credential_with(
        "r",
        json!({
            "tg": "840539006",
            "fr": "2021-01-10",
            "co": "DE",
            "is": "Robert Koch-Institut",
            "df": valid_from,
            "du": valid_until,
            "ci": "URN:UVCI:01DE/5CWLU12RNOB9RXSEOP6FG8#W"
        }),
    )
}

pub fn at(y: i32, m: u32, d: u32, h: u32) -> ValidationContext {
    ValidationContext::at(utc(y, m, d, h))
}

pub fn utc(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
}

pub const COMIRNATY: &str = "EU/1/20/1528";
pub const PCR: &str = "LP6464-4";
pub const RAPID: &str = "LP217198-3";
pub const NEGATIVE: &str = "260415000";
pub const POSITIVE: &str = "260373001";
