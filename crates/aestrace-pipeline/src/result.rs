//! The result document returned to the consuming layer.

use std::fmt::Display;

use aestrace_engine::BlockTrace;
use serde::{Deserialize, Serialize};

/// What happened to PKCS#7 padding during decryption.
///
/// Not part of the wire document; library callers use it to tell "padding
/// was valid and removed" apart from "padding looked invalid, raw bytes
/// returned".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PaddingVerdict {
    /// Encryption, or an error result: no padding was inspected.
    #[default]
    NotApplicable,
    /// Padding validated and was stripped.
    Stripped,
    /// Padding validation failed; `finalResult` carries the unstripped bytes.
    Invalid,
}

/// Outcome of one encrypt/decrypt invocation.
///
/// Serializes to exactly the `{blocks, finalResult}` document the
/// visualization consumers expect; error outcomes keep the same shape with
/// an empty `blocks` list and an explanatory `finalResult`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CipherResult {
    /// One trace per processed 16-byte block, in input order.
    pub blocks: Vec<BlockTrace>,
    /// Base64 ciphertext, decoded plaintext, or an error message.
    #[serde(rename = "finalResult")]
    pub final_result: String,
    /// Padding outcome for decryption; never serialized.
    #[serde(skip)]
    pub padding: PaddingVerdict,
}

impl CipherResult {
    /// Builds the error-shaped result: empty trace, explanatory message.
    pub fn error(message: impl Display) -> Self {
        Self {
            blocks: Vec::new(),
            final_result: format!("Error: {message}"),
            padding: PaddingVerdict::NotApplicable,
        }
    }

    /// True when `finalResult` carries an error message instead of data.
    pub fn is_error(&self) -> bool {
        self.final_result.starts_with("Error:")
    }
}
