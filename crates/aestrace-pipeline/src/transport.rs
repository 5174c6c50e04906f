//! Base64 transport encoding for ciphertext.

use base64::{engine::general_purpose, Engine as _};

/// Encodes raw ciphertext for transport.
pub fn encode(bytes: &[u8]) -> String {
    general_purpose::STANDARD.encode(bytes)
}

/// Decodes transport text back into raw ciphertext bytes.
pub fn decode(text: &str) -> Result<Vec<u8>, base64::DecodeError> {
    general_purpose::STANDARD.decode(text)
}
