// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Prebuilt rules for vaccination, test and recovery entries.
//!
//! Every rule that looks into one kind of entry is false for credentials carrying a
//! different kind.

use std::collections::HashSet;

use chrono::Duration;
use hcert_abstractions::{MedicinalProductCode, TestResultCode, TestTypeCode, WellKnownCode};

use crate::compare::CompareAgainst;
use crate::rule::ValidationRule;

pub const DEFAULT_MIN_DAYS_SINCE_VACCINATION: i64 = 15;
pub const DEFAULT_MAX_DAYS_SINCE_VACCINATION: i64 = 365;
pub const PCR_TEST_VALIDITY_HOURS: i64 = 72;
pub const OTHER_TEST_VALIDITY_HOURS: i64 = 48;

/// Validity window of a test result by test type.
pub fn default_test_validity_hours(test_type: TestTypeCode) -> i64 {
    match test_type {
        TestTypeCode::Pcr => PCR_TEST_VALIDITY_HOURS,
        _ => OTHER_TEST_VALIDITY_HOURS,
    }
}

impl ValidationRule {
    pub fn is_vaccination() -> Self {
        Self::new("is_vaccination", |c, _| c.vaccination().is_some())
    }

    pub fn is_test() -> Self {
        Self::new("is_test", |c, _| c.test().is_some())
    }

    pub fn is_recovery() -> Self {
        Self::new("is_recovery", |c, _| c.recovery().is_some())
    }

    /// Dose number equals the total series of doses.
    pub fn is_vaccination_complete() -> Self {
        Self::is_vaccination()
            & Self::compare(
                |c, _| c.vaccination().map(|v| v.dose_number),
                CompareAgainst::extracted(|c, _| c.vaccination().map(|v| v.total_series_of_doses)),
                |dose, series| dose == series,
                "is_vaccination_complete",
            )
    }

    /// Complete vaccination and more than `min_days` since the vaccination date.
    pub fn is_fully_immunized(min_days: i64) -> Self {
        Self::is_vaccination_complete()
            & Self::new(format!("is_fully_immunized_after_{min_days}_days"), move |c, ctx| {
                c.vaccination()
                    .and_then(|v| v.date_of_vaccination.checked_add_signed(Duration::try_days(min_days)?))
                    .is_some_and(|earliest| ctx.now > earliest)
            })
    }

    /// Vaccination older than `max_days`.
    pub fn is_vaccination_expired(max_days: i64) -> Self {
        Self::is_vaccination()
            & Self::new(format!("is_vaccination_expired_after_{max_days}_days"), move |c, ctx| {
                c.vaccination()
                    .and_then(|v| v.date_of_vaccination.checked_add_signed(Duration::try_days(max_days)?))
                    .is_some_and(|latest| ctx.now > latest)
            })
    }

    pub fn is_well_known_vaccine_medicinal_product() -> Self {
        Self::vaccine_medicinal_product_is_one_of(MedicinalProductCode::ALL.iter().copied())
            .with_tag("is_well_known_vaccine_medicinal_product")
    }

    /// The medicinal product is one of `products`. Unknown product codes never match.
    pub fn vaccine_medicinal_product_is_one_of(products: impl IntoIterator<Item = MedicinalProductCode>) -> Self {
        let products: HashSet<MedicinalProductCode> = products.into_iter().collect();
        let mut names = products.iter().map(|p| p.code()).collect::<Vec<_>>();
        names.sort_unstable();
        let tag = format!("vaccine_medicinal_product_is_one_of[{}]", names.join(","));

        Self::is_vaccination()
            & Self::new(tag, move |c, _| {
                c.vaccination()
                    .and_then(|v| v.vaccine_medicinal_product.well_known())
                    .is_some_and(|p| products.contains(&p))
            })
    }

    pub fn is_tested_positive() -> Self {
        Self::is_test()
            & Self::new("is_tested_positive", |c, _| {
                c.test().is_some_and(|t| t.test_result.is(TestResultCode::Positive))
            })
    }

    pub fn is_tested_negative() -> Self {
        Self::is_test()
            & Self::new("is_tested_negative", |c, _| {
                c.test().is_some_and(|t| t.test_result.is(TestResultCode::Negative))
            })
    }

    /// Sample collected no more than 72 hours (PCR) or 48 hours (other types) ago.
    pub fn is_test_valid() -> Self {
        Self::is_test_valid_within(default_test_validity_hours)
    }

    /// Sample collected no more than `hours_for_type` hours ago. Tests of an unknown
    /// type are never valid.
    pub fn is_test_valid_within<F>(hours_for_type: F) -> Self
    where
        F: Fn(TestTypeCode) -> i64 + Send + Sync + 'static,
    {
        Self::is_test()
            & Self::new("is_test_valid", move |c, ctx| {
                let Some(test) = c.test() else {
                    return false;
                };
                let Some(test_type) = test.type_of_test.well_known() else {
                    return false;
                };
                Duration::try_hours(hours_for_type(test_type))
                    .and_then(|window| test.date_of_sample_collection.checked_add_signed(window))
                    .is_some_and(|latest| ctx.now <= latest)
            })
    }

    /// Now lies within the recovery certificate's validity range, bounds included.
    pub fn is_recovery_valid() -> Self {
        Self::is_recovery()
            & Self::new("is_recovery_valid", |c, ctx| {
                c.recovery().is_some_and(|r| r.is_valid_at(ctx.now))
            })
    }

    /// Vaccination: fully immunized with a well-known product and not expired.
    /// Test: negative and still valid. Recovery: valid. Anything else fails.
    pub fn strict() -> Self {
        Self::if_then_else(
            Self::is_vaccination(),
            Self::is_fully_immunized(DEFAULT_MIN_DAYS_SINCE_VACCINATION)
                & Self::is_well_known_vaccine_medicinal_product()
                & !Self::is_vaccination_expired(DEFAULT_MAX_DAYS_SINCE_VACCINATION),
            Self::if_then_else(
                Self::is_test(),
                Self::is_tested_negative() & Self::is_test_valid(),
                Self::if_then_else(Self::is_recovery(), Self::is_recovery_valid(), Self::constant(false)),
            ),
        )
    }
}
