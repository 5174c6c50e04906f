//! AES-128 primitives for the traced cipher engine.
//!
//! This crate mirrors the FIPS-197 specification and provides:
//! - GF(2^8) arithmetic and the substitution tables.
//! - Key schedule for AES-128.
//! - The eight round transformations over a 16-byte state.
//! - Untraced single-block encryption and decryption.
//!
//! The implementation aims for clarity and testability rather than
//! constant-time guarantees; it should not be treated as side-channel
//! hardened.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod gf;
mod cipher;
mod key;
mod round;
mod sbox;
mod state;

pub use crate::cipher::{decrypt_block, encrypt_block, expand_key, RCON};
pub use crate::key::{Aes128Key, RoundKeys};
pub use crate::round::{
    add_round_key, inv_mix_columns, inv_shift_rows, inv_sub_bytes, mix_columns, shift_rows,
    sub_bytes,
};
pub use crate::sbox::{inv_sbox, sbox};
pub use crate::state::{index, xor_in_place, Block};
