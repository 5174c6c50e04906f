//! Trace data model.
//!
//! Field names serialize in camelCase and are part of the external contract;
//! every hex string is exactly 32 uppercase characters for the 16-byte state
//! at that stage. Encryption and decryption carry different stage sets and
//! the two are never mixed inside one trace.

use serde::{Deserialize, Serialize};

/// States recorded during one encryption round.
///
/// In round 10 the state is recorded unchanged under `afterMixColumns`, so
/// every round carries the same five fields.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncryptRound {
    /// Round number, 1..=10.
    pub round: u8,
    /// State entering the round.
    pub start_of_round: String,
    /// State after SubBytes.
    pub after_sub_bytes: String,
    /// State after ShiftRows.
    pub after_shift_rows: String,
    /// State after MixColumns (unchanged in round 10).
    pub after_mix_columns: String,
    /// State after AddRoundKey.
    pub after_add_round_key: String,
}

/// States recorded during one decryption round.
///
/// Trace rounds count 1..=10 while the key schedule is consumed from round
/// key 9 down to 0; round 10 records the state unchanged under
/// `afterInvMixColumns`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecryptRound {
    /// Round number, 1..=10.
    pub round: u8,
    /// State entering the round.
    pub start_of_round: String,
    /// State after InvShiftRows.
    pub after_inv_shift_rows: String,
    /// State after InvSubBytes.
    pub after_inv_sub_bytes: String,
    /// State after AddRoundKey.
    pub after_add_round_key: String,
    /// State after InvMixColumns (unchanged in round 10).
    pub after_inv_mix_columns: String,
}

/// One recorded round of either direction.
///
/// Serialized without a tag: the stage names alone identify the direction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RoundSnapshot {
    /// A round of the encryption sequence.
    Encrypt(EncryptRound),
    /// A round of the decryption sequence.
    Decrypt(DecryptRound),
}

impl RoundSnapshot {
    /// Returns the trace round number (1..=10).
    pub fn round(&self) -> u8 {
        match self {
            RoundSnapshot::Encrypt(r) => r.round,
            RoundSnapshot::Decrypt(r) => r.round,
        }
    }
}

/// The 10 recorded rounds of one processed block.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockTrace {
    /// 1-based index of the block in input order.
    pub block: usize,
    /// The rounds, in execution order.
    pub rounds: Vec<RoundSnapshot>,
}
