// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Signature verification for decoded health certificates.
//!
//! The signer is located by key id among the supplied trust certificates. Each matching
//! certificate is tried in turn; the algorithm is picked from what its public key
//! supports (ECDSA P-256 or RSA-PSS, both with SHA-256).

pub mod asn1;
pub mod outcome;
pub mod public_key;
pub mod settings;
pub mod verifier;

pub use outcome::{VerificationOutcome, VerifyError};
pub use public_key::{KeyError, SignatureAlgorithm, VerificationKey};
pub use settings::VerificationSettings;
pub use verifier::{CandidateResult, SignatureVerifier, VerificationCandidate};
