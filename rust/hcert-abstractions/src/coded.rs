// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Coded values: a raw code string with an optional well-known interpretation.
//!
//! Certificates carry codes from value sets that keep growing after software ships.
//! A [`Coded`] value therefore never rejects an unknown code; it keeps the raw string
//! and only offers a typed view when the code is one this crate knows about.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A closed enumeration of known codes for one value set.
pub trait WellKnownCode: Copy + Eq + fmt::Debug + 'static {
    /// Every known member of the value set.
    const ALL: &'static [Self];

    /// The wire representation of this member.
    fn code(self) -> &'static str;

    /// Human readable display name.
    fn display_name(self) -> &'static str;

    fn from_code(code: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|w| w.code() == code)
    }
}

/// A raw code string plus a lookup into the well-known enumeration `W`.
///
/// Equality and hashing use the raw string only.
pub struct Coded<W> {
    value: String,
    _known: PhantomData<fn() -> W>,
}

impl<W: WellKnownCode> Coded<W> {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            _known: PhantomData,
        }
    }

    pub fn from_well_known(known: W) -> Self {
        Self::new(known.code())
    }

    /// The raw code exactly as it appeared in the certificate.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The typed interpretation, or `None` for a code outside the known value set.
    pub fn well_known(&self) -> Option<W> {
        W::from_code(&self.value)
    }

    pub fn is(&self, known: W) -> bool {
        self.value == known.code()
    }
}

impl<W> Clone for Coded<W> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            _known: PhantomData,
        }
    }
}

impl<W> PartialEq for Coded<W> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<W> Eq for Coded<W> {}

impl<W> Hash for Coded<W> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<W: WellKnownCode> fmt::Debug for Coded<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.well_known() {
            Some(known) => write!(f, "{:?}({:?})", known, self.value),
            None => write!(f, "Unknown({:?})", self.value),
        }
    }
}

impl<W> fmt::Display for Coded<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl<W: WellKnownCode> From<&str> for Coded<W> {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl<W> Serialize for Coded<W> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.value)
    }
}

impl<'de, W: WellKnownCode> Deserialize<'de> for Coded<W> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Self::new)
    }
}

/// Country code (ISO 3166-1 alpha-2 in practice, but never validated).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Country(String);

impl Country {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Country {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}
