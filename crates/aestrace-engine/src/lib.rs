//! Round-by-round AES-128 tracing engine.
//!
//! Drives the fixed 10-round encrypt or decrypt sequence over one 16-byte
//! block, capturing a named snapshot of the state after every stage. The
//! snapshot layout is the wire contract consumed by the visualization
//! front end; see [`snapshot`] for the exact field names.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod snapshot;
mod tracer;

pub use crate::snapshot::{BlockTrace, DecryptRound, EncryptRound, RoundSnapshot};
pub use crate::tracer::{trace_decrypt_block, trace_encrypt_block, TraceDetail};
