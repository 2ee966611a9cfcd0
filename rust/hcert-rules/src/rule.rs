// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{BitAnd, BitOr, Not};
use std::sync::Arc;

use hcert_abstractions::Credential;

use crate::context::ValidationContext;
use crate::tag::Tag;

pub type Predicate = dyn Fn(&Credential, &ValidationContext) -> bool + Send + Sync;

/// A tagged predicate over a credential.
///
/// Cloning is cheap; the predicate is shared.
#[derive(Clone)]
pub struct ValidationRule {
    tag: Tag,
    predicate: Arc<Predicate>,
}

impl ValidationRule {
    pub fn new<F>(tag: impl Into<Tag>, predicate: F) -> Self
    where
        F: Fn(&Credential, &ValidationContext) -> bool + Send + Sync + 'static,
    {
        Self {
            tag: tag.into(),
            predicate: Arc::new(predicate),
        }
    }

    /// A rule with a random tag.
    pub fn untagged<F>(predicate: F) -> Self
    where
        F: Fn(&Credential, &ValidationContext) -> bool + Send + Sync + 'static,
    {
        Self::new(Tag::random(), predicate)
    }

    pub fn tag(&self) -> &Tag {
        &self.tag
    }

    /// Same predicate under a different tag.
    pub fn with_tag(self, tag: impl Into<Tag>) -> Self {
        Self {
            tag: tag.into(),
            predicate: self.predicate,
        }
    }

    pub fn evaluate(&self, credential: &Credential, context: &ValidationContext) -> bool {
        (self.predicate)(credential, context)
    }

    pub fn constant(result: bool) -> Self {
        Self::new(result.to_string(), move |_, _| result)
    }

    /// Both rules hold. `other` is only evaluated when `self` holds.
    pub fn and(self, other: ValidationRule) -> Self {
        let tag = format!("{} && {}", self.tag, other.tag);
        Self::new(tag, move |c, ctx| self.evaluate(c, ctx) && other.evaluate(c, ctx))
    }

    /// Either rule holds. `other` is only evaluated when `self` does not hold.
    pub fn or(self, other: ValidationRule) -> Self {
        let tag = format!("{} || {}", self.tag, other.tag);
        Self::new(tag, move |c, ctx| self.evaluate(c, ctx) || other.evaluate(c, ctx))
    }

    pub fn if_then_else(condition: ValidationRule, then: ValidationRule, otherwise: ValidationRule) -> Self {
        let tag = format!("if {} {{ {} }} else {{ {} }}", condition.tag, then.tag, otherwise.tag);
        Self::new(tag, move |c, ctx| {
            if condition.evaluate(c, ctx) {
                then.evaluate(c, ctx)
            } else {
                otherwise.evaluate(c, ctx)
            }
        })
    }

    /// `then` when `condition` holds, otherwise false.
    pub fn if_then(condition: ValidationRule, then: ValidationRule) -> Self {
        Self::if_then_else(condition, then, Self::constant(false))
    }

    /// Both rules give the same result.
    pub fn equals(lhs: ValidationRule, rhs: ValidationRule) -> Self {
        let tag = format!("{} EQUALS {}", lhs.tag, rhs.tag);
        Self::new(tag, move |c, ctx| lhs.evaluate(c, ctx) == rhs.evaluate(c, ctx))
    }

    /// The rules give different results.
    pub fn not_equals(lhs: ValidationRule, rhs: ValidationRule) -> Self {
        let tag = format!("{} NOT-EQUALS {}", lhs.tag, rhs.tag);
        Self::new(tag, move |c, ctx| lhs.evaluate(c, ctx) != rhs.evaluate(c, ctx))
    }
}

impl Not for ValidationRule {
    type Output = ValidationRule;

    fn not(self) -> Self::Output {
        let tag = format!("!({})", self.tag);
        ValidationRule::new(tag, move |c, ctx| !self.evaluate(c, ctx))
    }
}

impl BitAnd for ValidationRule {
    type Output = ValidationRule;

    fn bitand(self, rhs: ValidationRule) -> Self::Output {
        self.and(rhs)
    }
}

impl BitOr for ValidationRule {
    type Output = ValidationRule;

    fn bitor(self, rhs: ValidationRule) -> Self::Output {
        self.or(rhs)
    }
}

impl PartialEq for ValidationRule {
    fn eq(&self, other: &Self) -> bool {
        self.tag == other.tag
    }
}

impl Eq for ValidationRule {}

impl Hash for ValidationRule {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.tag.hash(state);
    }
}

impl fmt::Debug for ValidationRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidationRule").field("tag", &self.tag).finish_non_exhaustive()
    }
}
