// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

use crate::claims::{self, ClaimsError};
use crate::content::Content;
use crate::dates::format_date;
use crate::envelope::RawCoseEnvelope;
use crate::name::Name;
use crate::recovery::Recovery;
use crate::test_record::Test;
use crate::vaccination::Vaccination;

/// A decoded health certificate.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Credential {
    pub issuer: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub schema_version: String,
    pub date_of_birth: DateTime<Utc>,
    pub name: Name,
    pub content: Content,
    pub signature_record: RawCoseEnvelope,
    /// The token this credential was decoded from. Empty until decoding completes.
    pub compact_representation: String,
}

/// Controls what [`Credential::to_claims`] embeds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SerializationOptions {
    pub skip_signature_record: bool,
    pub skip_compact_representation: bool,
}

impl SerializationOptions {
    pub fn skip_signature_record(mut self) -> Self {
        self.skip_signature_record = true;
        self
    }

    pub fn skip_compact_representation(mut self) -> Self {
        self.skip_compact_representation = true;
        self
    }
}

impl Credential {
    pub fn vaccination(&self) -> Option<&Vaccination> {
        match &self.content {
            Content::Vaccination(v) => Some(v),
            _ => None,
        }
    }

    pub fn test(&self) -> Option<&Test> {
        match &self.content {
            Content::Test(t) => Some(t),
            _ => None,
        }
    }

    pub fn recovery(&self) -> Option<&Recovery> {
        match &self.content {
            Content::Recovery(r) => Some(r),
            _ => None,
        }
    }

    pub fn with_signature_record(self, signature_record: RawCoseEnvelope) -> Self {
        Self {
            signature_record,
            ..self
        }
    }

    pub fn with_compact_representation(self, compact_representation: impl Into<String>) -> Self {
        Self {
            compact_representation: compact_representation.into(),
            ..self
        }
    }

    /// Map a claim tree (string keys, as produced from the CBOR payload) into a credential.
    pub fn from_claims(claims: &Value) -> Result<Self, ClaimsError> {
        claims::credential_from_claims(claims)
    }

    /// Claim-keyed representation suitable for storage and transport.
    ///
    /// [`Credential::from_claims`] accepts this output.
    pub fn to_claims(&self, options: &SerializationOptions) -> Value {
        let mut hcert = Map::new();
        hcert.insert("ver".into(), Value::String(self.schema_version.clone()));
        hcert.insert("dob".into(), Value::String(format_date(&self.date_of_birth)));
        hcert.insert("nam".into(), serde_json::to_value(&self.name).unwrap_or(Value::Null));

        let entry = match &self.content {
            Content::Vaccination(v) => serde_json::to_value(v),
            Content::Test(t) => serde_json::to_value(t),
            Content::Recovery(r) => serde_json::to_value(r),
        };
        hcert.insert(
            self.content.claim_key().into(),
            Value::Array(vec![entry.unwrap_or(Value::Null)]),
        );

        if !options.skip_signature_record {
            hcert.insert(
                claims::SIGNATURE_RECORD_KEY.into(),
                self.signature_record.to_json(),
            );
        }
        if !options.skip_compact_representation {
            hcert.insert(
                claims::COMPACT_REPRESENTATION_KEY.into(),
                Value::String(self.compact_representation.clone()),
            );
        }

        let mut versions = Map::new();
        versions.insert(claims::HCERT_V1_KEY.into(), Value::Object(hcert));

        let mut top = Map::new();
        top.insert(claims::ISSUER_KEY.into(), Value::String(self.issuer.clone()));
        top.insert(claims::ISSUED_AT_KEY.into(), Value::from(self.issued_at.timestamp()));
        top.insert(claims::EXPIRES_AT_KEY.into(), Value::from(self.expires_at.timestamp()));
        top.insert(claims::HCERT_KEY.into(), Value::Object(versions));
        Value::Object(top)
    }

    pub fn to_json_string(&self, options: &SerializationOptions) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.to_claims(options))
    }

    pub fn from_json_str(json: &str) -> Result<Self, ClaimsError> {
        let value: Value = serde_json::from_str(json).map_err(|e| ClaimsError::ModelDecoding {
            field: "$".into(),
            reason: e.to_string(),
        })?;
        Self::from_claims(&value)
    }
}
