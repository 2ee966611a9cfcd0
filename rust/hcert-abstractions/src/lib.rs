// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Shared interfaces and datatypes for the health certificate crates.
//!
//! This crate exists to prevent circular dependencies across:
//! - the decode pipeline (`hcert-common`)
//! - signature verification (`hcert-validation`)
//! - trust sources (`hcert-trust`) and business rules (`hcert-rules`)
//! - the high-level facade (`hcert`)
//!
//! It holds the decoded credential model, the key id and trust certificate types and the
//! [`TrustSource`] contract. Nothing in here performs I/O or cryptography.

pub mod claims;
pub mod coded;
pub mod codes;
pub mod content;
pub mod credential;
pub mod dates;
pub mod envelope;
pub mod key_id;
pub mod name;
pub mod recovery;
pub mod test_record;
pub mod trust;
pub mod vaccination;

pub use claims::ClaimsError;
pub use coded::{Coded, Country, WellKnownCode};
pub use codes::{
    DiseaseAgent, DiseaseAgentCode, MarketingAuthorizationHolder, MarketingAuthorizationHolderCode,
    MedicinalProduct, MedicinalProductCode, TestResult, TestResultCode, TestType, TestTypeCode,
    VaccineProphylaxis, VaccineProphylaxisCode,
};
pub use content::Content;
pub use credential::{Credential, SerializationOptions};
pub use envelope::RawCoseEnvelope;
pub use key_id::{KeyId, KEY_ID_MAX_LEN};
pub use name::Name;
pub use recovery::Recovery;
pub use test_record::Test;
pub use trust::{BoxFuture, TrustCertificate, TrustSource, TrustSourceError};
pub use vaccination::Vaccination;
