// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Validation rules for decoded credentials.
//!
//! A [`ValidationRule`] is a tagged predicate over a credential and a
//! [`ValidationContext`] (which supplies the clock). Rules compose with `&`, `|`, `!`
//! and the conditional helpers; [`Validator`] applies a rule and reports the tag of a
//! rule that was not satisfied.

pub mod compare;
pub mod context;
pub mod defaults;
pub mod rule;
pub mod tag;
pub mod validator;

pub use compare::CompareAgainst;
pub use context::ValidationContext;
pub use rule::ValidationRule;
pub use tag::Tag;
pub use validator::{ValidationError, Validator};
