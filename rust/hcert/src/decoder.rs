// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use hcert_abstractions::Credential;
use hcert_common::{base45, decode_value, inflate, parse_cose_envelope, payload_to_claims};

use crate::error::DecodeError;
use crate::settings::DecoderSettings;

/// Turns `HC1:` tokens into credentials.
///
/// Decoding does not check the signature; pass the result to
/// [`HcertVerifier`](crate::HcertVerifier) for that.
#[derive(Debug, Clone, Default)]
pub struct HcertDecoder {
    settings: DecoderSettings,
}

impl HcertDecoder {
    pub fn new(settings: DecoderSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &DecoderSettings {
        &self.settings
    }

    /// Decode a token.
    ///
    /// The returned credential carries the parsed COSE envelope as its signature record
    /// and `token` (unchanged, prefix included) as its compact representation.
    #[tracing::instrument(level = "debug", skip_all, fields(len = token.len()))]
    pub fn decode(&self, token: &str) -> Result<Credential, DecodeError> {
        let body = match self.settings.prefix() {
            Some(prefix) => token.strip_prefix(prefix).unwrap_or(token),
            None => token,
        };

        let compressed = base45::decode(body)?;
        let cose = inflate::decompress(&compressed, self.settings.max_decompressed_len())?;
        tracing::debug!(compressed = compressed.len(), cose = cose.len(), "token unpacked");

        let envelope = parse_cose_envelope(&decode_value(&cose)?)?;
        let claims = payload_to_claims(&envelope.payload)?;
        let credential = Credential::from_claims(&claims)?;
        tracing::debug!(issuer = %credential.issuer, kind = credential.content.claim_key(), "credential decoded");

        Ok(credential
            .with_signature_record(envelope)
            .with_compact_representation(token))
    }
}
