//! Block-mode layer over the AES-128 tracing engine.
//!
//! Coerces text keys, applies PKCS#7 padding, splits input into 16-byte
//! blocks, drives the round engine per block and assembles the transport
//! encoded [`CipherResult`] together with one block trace per block. All
//! error conditions are absorbed at this boundary: `process` always returns
//! a well-formed result the consuming layer can render.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod padding;
pub mod transport;

mod error;
mod process;
mod result;

pub use crate::error::PipelineError;
pub use crate::process::{process, process_with, KeyCoercion, Operation, ProcessOptions};
pub use crate::result::{CipherResult, PaddingVerdict};

pub use aestrace_engine::TraceDetail;
