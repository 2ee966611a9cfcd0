// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Decoding and verification of EU Digital COVID Certificates.
//!
//! [`HcertDecoder`] turns an `HC1:` token into a [`Credential`]; [`HcertVerifier`]
//! checks its COSE signature against certificates from a [`TrustSource`].
//! Validation rules live in [`rules`], trust sources in [`trust`].

mod decoder;
mod error;
mod settings;
mod verifier;

pub use decoder::HcertDecoder;
pub use error::DecodeError;
pub use settings::{DecoderSettings, DEFAULT_PREFIX};
pub use verifier::HcertVerifier;

pub use hcert_abstractions::{
    ClaimsError, Coded, Content, Country, Credential, KeyId, Name, RawCoseEnvelope, Recovery, SerializationOptions,
    Test, TrustCertificate, TrustSource, TrustSourceError, Vaccination, WellKnownCode,
};
pub use hcert_common::{Base45Error, CborError, CoseError, CoseField, InflateError, PayloadError};
pub use hcert_validation::{SignatureAlgorithm, VerificationOutcome, VerificationSettings, VerifyError};

pub use hcert_abstractions::codes;
pub use hcert_rules as rules;
pub use hcert_trust as trust;
