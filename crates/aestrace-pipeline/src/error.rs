//! Pipeline error taxonomy.

use thiserror::Error;

/// Everything that can go wrong between the request boundary and the engine.
///
/// The engine and the primitives below it are total over their input
/// domains; every variant here is produced by the block-mode layer itself
/// and converted into an error-shaped [`crate::CipherResult`] before it
/// reaches the caller.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Decrypt input was not valid base64.
    #[error("invalid base64 input for decryption: {0}")]
    InvalidBase64(#[from] base64::DecodeError),
    /// Decrypt input decoded to zero bytes.
    #[error("ciphertext is empty")]
    EmptyCiphertext,
    /// Decrypt input decoded to a length that is not a multiple of 16.
    #[error("ciphertext length {0} is not a multiple of the 16-byte block size")]
    CiphertextLength(usize),
    /// The key was rejected by [`crate::KeyCoercion::Strict`].
    #[error("key must be exactly 16 bytes, got {0}")]
    KeyLength(usize),
    /// The operation string was neither `encrypt` nor `decrypt`.
    #[error("unknown operation {0:?}, expected \"encrypt\" or \"decrypt\"")]
    UnknownOperation(String),
}
