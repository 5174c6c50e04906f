//! Drives the AES-128 round sequence over one block, recording snapshots.

use aes_core::{
    add_round_key, inv_mix_columns, inv_shift_rows, inv_sub_bytes, mix_columns, shift_rows,
    sub_bytes, Block, RoundKeys,
};

use crate::snapshot::{DecryptRound, EncryptRound, RoundSnapshot};

/// How much of the round-by-round state to record.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TraceDetail {
    /// Record every stage of every round.
    #[default]
    Full,
    /// Run the cipher without recording; the trace comes back empty.
    Disabled,
}

fn hex_state(state: &Block) -> String {
    hex::encode_upper(state)
}

/// Encrypts one block, returning the ciphertext and the recorded rounds.
///
/// The initial whitening with round key 0 is not a round of its own; it
/// shows up as `startOfRound` of round 1.
pub fn trace_encrypt_block(
    detail: TraceDetail,
    block: &Block,
    round_keys: &RoundKeys,
) -> (Block, Vec<RoundSnapshot>) {
    if detail == TraceDetail::Disabled {
        return (aes_core::encrypt_block(block, round_keys), Vec::new());
    }

    let mut state = *block;
    let mut rounds = Vec::with_capacity(10);

    add_round_key(&mut state, round_keys.get(0));

    for round in 1..=10usize {
        let start_of_round = hex_state(&state);
        sub_bytes(&mut state);
        let after_sub_bytes = hex_state(&state);
        shift_rows(&mut state);
        let after_shift_rows = hex_state(&state);
        if round < 10 {
            mix_columns(&mut state);
        }
        // Round 10 has no MixColumns; the unchanged state is still recorded
        // so every round carries the same field set.
        let after_mix_columns = hex_state(&state);
        add_round_key(&mut state, round_keys.get(round));
        let after_add_round_key = hex_state(&state);

        rounds.push(RoundSnapshot::Encrypt(EncryptRound {
            round: round as u8,
            start_of_round,
            after_sub_bytes,
            after_shift_rows,
            after_mix_columns,
            after_add_round_key,
        }));
    }

    (state, rounds)
}

/// Decrypts one block, returning the plaintext and the recorded rounds.
///
/// The key schedule is consumed top-down: after the initial whitening with
/// round key 10, trace rounds 1..=10 use round keys 9 down to 0. InvMixColumns
/// runs after AddRoundKey and is skipped in the final round, where the
/// unchanged state is recorded under the same name.
pub fn trace_decrypt_block(
    detail: TraceDetail,
    block: &Block,
    round_keys: &RoundKeys,
) -> (Block, Vec<RoundSnapshot>) {
    if detail == TraceDetail::Disabled {
        return (aes_core::decrypt_block(block, round_keys), Vec::new());
    }

    let mut state = *block;
    let mut rounds = Vec::with_capacity(10);

    add_round_key(&mut state, round_keys.get(10));

    for key_index in (0..10usize).rev() {
        let start_of_round = hex_state(&state);
        inv_shift_rows(&mut state);
        let after_inv_shift_rows = hex_state(&state);
        inv_sub_bytes(&mut state);
        let after_inv_sub_bytes = hex_state(&state);
        add_round_key(&mut state, round_keys.get(key_index));
        let after_add_round_key = hex_state(&state);
        if key_index > 0 {
            inv_mix_columns(&mut state);
        }
        let after_inv_mix_columns = hex_state(&state);

        rounds.push(RoundSnapshot::Decrypt(DecryptRound {
            round: (10 - key_index) as u8,
            start_of_round,
            after_inv_shift_rows,
            after_inv_sub_bytes,
            after_add_round_key,
            after_inv_mix_columns,
        }));
    }

    (state, rounds)
}
