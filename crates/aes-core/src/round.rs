//! AES round transformations.
//!
//! All eight transforms mutate the 16-byte state in place; callers that need
//! value semantics copy the state before or after the call.

use crate::gf;
use crate::sbox::{inv_sbox, sbox};
use crate::state::{index, xor_in_place, Block};

/// MixColumns coefficients, row-rotated per FIPS-197 §5.1.3.
const MIX: [[u8; 4]; 4] = [
    [0x02, 0x03, 0x01, 0x01],
    [0x01, 0x02, 0x03, 0x01],
    [0x01, 0x01, 0x02, 0x03],
    [0x03, 0x01, 0x01, 0x02],
];

/// InvMixColumns coefficients per FIPS-197 §5.3.3.
const INV_MIX: [[u8; 4]; 4] = [
    [0x0e, 0x0b, 0x0d, 0x09],
    [0x09, 0x0e, 0x0b, 0x0d],
    [0x0d, 0x09, 0x0e, 0x0b],
    [0x0b, 0x0d, 0x09, 0x0e],
];

/// Applies SubBytes to the state in place.
#[inline]
pub fn sub_bytes(state: &mut Block) {
    for byte in state.iter_mut() {
        *byte = sbox(*byte);
    }
}

/// Applies the inverse SubBytes transformation.
#[inline]
pub fn inv_sub_bytes(state: &mut Block) {
    for byte in state.iter_mut() {
        *byte = inv_sbox(*byte);
    }
}

/// Performs ShiftRows in place: row `r` rotates left by `r` positions.
#[inline]
pub fn shift_rows(state: &mut Block) {
    let src = *state;
    for row in 1..4 {
        for col in 0..4 {
            state[index(row, col)] = src[index(row, (col + row) % 4)];
        }
    }
}

/// Performs the inverse of ShiftRows: row `r` rotates right by `r` positions.
#[inline]
pub fn inv_shift_rows(state: &mut Block) {
    let src = *state;
    for row in 1..4 {
        for col in 0..4 {
            state[index(row, col)] = src[index(row, (col + 4 - row) % 4)];
        }
    }
}

fn mix_single_column(col: &mut [u8; 4], coefficients: &[[u8; 4]; 4]) {
    let input = *col;
    for (row, coeffs) in coefficients.iter().enumerate() {
        col[row] = coeffs
            .iter()
            .zip(input.iter())
            .fold(0, |acc, (&c, &b)| acc ^ gf::mul(c, b));
    }
}

fn mix_all_columns(state: &mut Block, coefficients: &[[u8; 4]; 4]) {
    for chunk in state.chunks_exact_mut(4) {
        let mut column = [chunk[0], chunk[1], chunk[2], chunk[3]];
        mix_single_column(&mut column, coefficients);
        chunk.copy_from_slice(&column);
    }
}

/// MixColumns over all four columns.
#[inline]
pub fn mix_columns(state: &mut Block) {
    mix_all_columns(state, &MIX);
}

/// Inverse MixColumns over all four columns.
#[inline]
pub fn inv_mix_columns(state: &mut Block) {
    mix_all_columns(state, &INV_MIX);
}

/// Adds (XORs) a round key into the state.
#[inline]
pub fn add_round_key(state: &mut Block, round_key: &Block) {
    xor_in_place(state, round_key);
}
