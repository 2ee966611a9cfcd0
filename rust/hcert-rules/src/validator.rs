// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use hcert_abstractions::Credential;

use crate::context::ValidationContext;
use crate::defaults::DEFAULT_MIN_DAYS_SINCE_VACCINATION;
use crate::rule::ValidationRule;
use crate::tag::Tag;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("validation rule not satisfied: {0}")]
    UnsatisfiedRule(Tag),
}

/// Applies validation rules to credentials.
#[derive(Debug, Clone, Copy, Default)]
pub struct Validator;

impl Validator {
    pub fn new() -> Self {
        Self
    }

    /// Accepts a completed vaccination, a valid negative test or a valid recovery.
    pub fn default_rule() -> ValidationRule {
        ValidationRule::if_then(
            ValidationRule::is_vaccination(),
            ValidationRule::is_fully_immunized(DEFAULT_MIN_DAYS_SINCE_VACCINATION),
        )
            | ValidationRule::if_then(
                ValidationRule::is_test(),
                ValidationRule::is_tested_negative() & ValidationRule::is_test_valid(),
            )
            | ValidationRule::if_then(ValidationRule::is_recovery(), ValidationRule::is_recovery_valid())
    }

    pub fn validate(
        &self,
        credential: &Credential,
        rule: &ValidationRule,
        context: &ValidationContext,
    ) -> Result<(), ValidationError> {
        if rule.evaluate(credential, context) {
            return Ok(());
        }
        tracing::debug!(rule = %rule.tag(), "validation rule not satisfied");
        Err(ValidationError::UnsatisfiedRule(rule.tag().clone()))
    }

    /// [`Validator::validate`] with [`Validator::default_rule`].
    pub fn validate_default(&self, credential: &Credential, context: &ValidationContext) -> Result<(), ValidationError> {
        self.validate(credential, &Self::default_rule(), context)
    }
}
