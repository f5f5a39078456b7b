//! # Validation Errors
//!
//! Structural validation failures raised by the proof encoder. Each variant
//! names the offending bundle field so callers can correct the request
//! without guessing. Built with `thiserror`; no `Box<dyn Error>`.

use thiserror::Error;

/// Structural validation failure for an inbound proof bundle.
///
/// Raised before any network interaction. A bundle that fails validation is
/// never submitted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required bundle field is empty or absent.
    #[error("field `{0}` is required and must be non-empty")]
    EmptyField(&'static str),

    /// A field that must carry hex-encoded bytes does not.
    #[error("field `{field}` is not valid hex: {detail}")]
    MalformedHex {
        /// The bundle field that failed to decode.
        field: &'static str,
        /// Decoder diagnostic.
        detail: String,
    },

    /// A public signal is not a decimal or 0x-hex field-element string.
    #[error("public signal at index {index} is malformed: {detail}")]
    MalformedSignal {
        /// Position of the offending signal in the submitted array.
        index: usize,
        /// What was wrong with it.
        detail: String,
    },
}

impl ValidationError {
    /// The bundle field this error refers to.
    ///
    /// Signals report the collective `pubsignal` field; the variant carries
    /// the offending index separately.
    pub fn field(&self) -> &'static str {
        match self {
            Self::EmptyField(field) => field,
            Self::MalformedHex { field, .. } => field,
            Self::MalformedSignal { .. } => "pubsignal",
        }
    }
}
