//! # Proof Bundles & the Structural Encoder
//!
//! [`RawProofBundle`] is the untrusted inbound shape: three string-encoded
//! fields straight out of a JSON body. [`encode`] is the only way to turn it
//! into a [`ProofBundle`], the validated form the rest of the relay operates
//! on. Validation is purely structural — presence, non-emptiness, and
//! encoding — never cryptographic.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Untrusted proof bundle as received over HTTP.
///
/// Field names match the inbound JSON contract: `vkey` and `proof` are
/// hex-encoded byte strings (with or without a `0x` prefix), `pubsignal` is
/// an ordered array of field-element strings.
#[derive(Debug, Clone, Deserialize, Serialize, utoipa::ToSchema)]
pub struct RawProofBundle {
    /// Hex-encoded verification key bytes.
    pub vkey: String,
    /// Hex-encoded proof bytes.
    pub proof: String,
    /// Ordered field-element strings (decimal or 0x-hex).
    pub pubsignal: Vec<String>,
}

/// A single public signal, preserved verbatim.
///
/// The attestation network interprets field elements itself; the relay only
/// checks the string is a plausible encoding and never reorders or
/// normalizes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldElement(String);

impl FieldElement {
    /// The signal exactly as submitted.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for FieldElement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A validated proof bundle.
///
/// Invariant: verification key, proof, and public signals are all present
/// and non-empty. Constructed exclusively through [`encode`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProofBundle {
    verification_key: Vec<u8>,
    proof: Vec<u8>,
    public_signals: Vec<FieldElement>,
}

impl ProofBundle {
    /// Verification key bytes.
    pub fn verification_key(&self) -> &[u8] {
        &self.verification_key
    }

    /// Proof bytes.
    pub fn proof(&self) -> &[u8] {
        &self.proof
    }

    /// Public signals in submission order.
    pub fn public_signals(&self) -> &[FieldElement] {
        &self.public_signals
    }
}

/// Validate and normalize a raw bundle into a [`ProofBundle`].
///
/// Checks, in order:
/// 1. `vkey` non-empty and valid hex,
/// 2. `proof` non-empty and valid hex,
/// 3. `pubsignal` non-empty, every element a non-empty decimal or 0x-hex
///    field-element string.
///
/// Signal ordering is preserved exactly. No cryptographic checks are
/// performed — whether the proof verifies is the network's job.
///
/// # Errors
///
/// Returns a [`ValidationError`] naming the first offending field.
pub fn encode(raw: &RawProofBundle) -> Result<ProofBundle, ValidationError> {
    let verification_key = decode_hex_field("vkey", &raw.vkey)?;
    let proof = decode_hex_field("proof", &raw.proof)?;

    if raw.pubsignal.is_empty() {
        return Err(ValidationError::EmptyField("pubsignal"));
    }
    let public_signals = raw
        .pubsignal
        .iter()
        .enumerate()
        .map(|(index, signal)| validate_signal(index, signal))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ProofBundle {
        verification_key,
        proof,
        public_signals,
    })
}

/// Decode a hex bundle field, accepting an optional `0x` prefix.
fn decode_hex_field(field: &'static str, value: &str) -> Result<Vec<u8>, ValidationError> {
    let trimmed = value.trim();
    let stripped = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    if stripped.is_empty() {
        return Err(ValidationError::EmptyField(field));
    }
    hex::decode(stripped).map_err(|e| ValidationError::MalformedHex {
        field,
        detail: e.to_string(),
    })
}

/// Check a public signal is a non-empty decimal or 0x-hex string.
fn validate_signal(index: usize, signal: &str) -> Result<FieldElement, ValidationError> {
    let trimmed = signal.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MalformedSignal {
            index,
            detail: "empty string".to_string(),
        });
    }
    let well_formed = if let Some(hex_part) = trimmed.strip_prefix("0x") {
        !hex_part.is_empty() && hex_part.chars().all(|c| c.is_ascii_hexdigit())
    } else {
        trimmed.chars().all(|c| c.is_ascii_digit())
    };
    if !well_formed {
        return Err(ValidationError::MalformedSignal {
            index,
            detail: format!("expected decimal or 0x-hex string, got `{trimmed}`"),
        });
    }
    // Preserve the signal verbatim, including any 0x prefix.
    Ok(FieldElement(signal.to_string()))
}
