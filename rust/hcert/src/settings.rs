// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use hcert_common::DEFAULT_MAX_DECOMPRESSED_LEN;

/// Context identifier of version 1 health certificate tokens.
pub const DEFAULT_PREFIX: &str = "HC1:";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecoderSettings {
    /// Stripped from the input when present. Input without it is decoded as is.
    pub(crate) prefix: Option<String>,
    pub(crate) max_decompressed_len: usize,
}

impl DecoderSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    pub fn without_prefix(mut self) -> Self {
        self.prefix = None;
        self
    }

    pub fn with_max_decompressed_len(mut self, max_len: usize) -> Self {
        self.max_decompressed_len = max_len;
        self
    }

    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    pub fn max_decompressed_len(&self) -> usize {
        self.max_decompressed_len
    }
}

impl Default for DecoderSettings {
    fn default() -> Self {
        Self {
            prefix: Some(DEFAULT_PREFIX.to_string()),
            max_decompressed_len: DEFAULT_MAX_DECOMPRESSED_LEN,
        }
    }
}
