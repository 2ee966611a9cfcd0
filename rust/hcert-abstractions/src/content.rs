// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use crate::recovery::Recovery;
use crate::test_record::Test;
use crate::vaccination::Vaccination;

/// The single certificate entry carried by a credential.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Content {
    Vaccination(Vaccination),
    Test(Test),
    Recovery(Recovery),
}

impl Content {
    /// Claim key of the array this entry is stored under.
    pub fn claim_key(&self) -> &'static str {
        match self {
            Content::Vaccination(_) => "v",
            Content::Test(_) => "t",
            Content::Recovery(_) => "r",
        }
    }
}
