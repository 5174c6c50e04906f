//! Request processing: key coercion, block fan-out and result assembly.

use std::str::FromStr;

use aes_core::{expand_key, Aes128Key, Block, RoundKeys};
use aestrace_engine::{trace_decrypt_block, trace_encrypt_block, BlockTrace, TraceDetail};
use log::{debug, warn};

use crate::error::PipelineError;
use crate::padding::{self, Unpadded, BLOCK_SIZE};
use crate::result::{CipherResult, PaddingVerdict};
use crate::transport;

/// Direction of one invocation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    /// UTF-8 message in, base64 ciphertext out.
    Encrypt,
    /// Base64 ciphertext in, decoded plaintext out.
    Decrypt,
}

impl FromStr for Operation {
    type Err = PipelineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("encrypt") {
            Ok(Self::Encrypt)
        } else if s.eq_ignore_ascii_case("decrypt") {
            Ok(Self::Decrypt)
        } else {
            Err(PipelineError::UnknownOperation(s.to_owned()))
        }
    }
}

/// Policy for turning a text key into exactly 16 key bytes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum KeyCoercion {
    /// UTF-8 encode, truncate past 16 bytes, right-pad shorter keys with
    /// zero bytes. Matches the historical behavior of the portal.
    #[default]
    TruncateOrZeroPad,
    /// Reject any key that is not exactly 16 bytes.
    Strict,
}

impl KeyCoercion {
    /// Applies the policy to a text key.
    pub fn coerce(self, key: &str) -> Result<Aes128Key, PipelineError> {
        let bytes = key.as_bytes();
        match self {
            Self::TruncateOrZeroPad => {
                if bytes.len() != 16 {
                    debug!("coercing {}-byte key to 16 bytes", bytes.len());
                }
                let mut coerced = [0u8; 16];
                let used = bytes.len().min(16);
                coerced[..used].copy_from_slice(&bytes[..used]);
                Ok(Aes128Key::from(coerced))
            }
            Self::Strict => {
                let exact: [u8; 16] = bytes
                    .try_into()
                    .map_err(|_| PipelineError::KeyLength(bytes.len()))?;
                Ok(Aes128Key::from(exact))
            }
        }
    }
}

/// Knobs for one invocation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ProcessOptions {
    /// Trace detail recorded per round.
    pub trace: TraceDetail,
    /// Key coercion policy.
    pub key_coercion: KeyCoercion,
}

/// Processes a request with default options (full trace, historical key
/// coercion). Never fails: error conditions come back as an error-shaped
/// [`CipherResult`].
pub fn process(operation: Operation, message: &str, key: &str) -> CipherResult {
    process_with(&ProcessOptions::default(), operation, message, key)
}

/// Processes a request with explicit options.
pub fn process_with(
    options: &ProcessOptions,
    operation: Operation,
    message: &str,
    key: &str,
) -> CipherResult {
    let outcome = match operation {
        Operation::Encrypt => encrypt(options, message, key),
        Operation::Decrypt => decrypt(options, message, key),
    };
    outcome.unwrap_or_else(|err| {
        warn!("{operation:?} request rejected: {err}");
        CipherResult::error(err)
    })
}

fn encrypt(
    options: &ProcessOptions,
    message: &str,
    key: &str,
) -> Result<CipherResult, PipelineError> {
    let key = options.key_coercion.coerce(key)?;
    let round_keys = expand_key(&key);

    let padded = padding::pad(message.as_bytes());
    debug!("encrypting {} block(s)", padded.len() / BLOCK_SIZE);
    let (ciphertext, blocks) = run_blocks(options.trace, Operation::Encrypt, &padded, &round_keys);

    Ok(CipherResult {
        blocks,
        final_result: transport::encode(&ciphertext),
        padding: PaddingVerdict::NotApplicable,
    })
}

fn decrypt(
    options: &ProcessOptions,
    message: &str,
    key: &str,
) -> Result<CipherResult, PipelineError> {
    let key = options.key_coercion.coerce(key)?;

    let ciphertext = transport::decode(message.trim())?;
    if ciphertext.is_empty() {
        return Err(PipelineError::EmptyCiphertext);
    }
    if ciphertext.len() % BLOCK_SIZE != 0 {
        return Err(PipelineError::CiphertextLength(ciphertext.len()));
    }

    let round_keys = expand_key(&key);
    debug!("decrypting {} block(s)", ciphertext.len() / BLOCK_SIZE);
    let (padded, blocks) = run_blocks(options.trace, Operation::Decrypt, &ciphertext, &round_keys);

    let (plaintext, verdict) = match padding::unpad(padded) {
        Unpadded::Stripped(bytes) => (bytes, PaddingVerdict::Stripped),
        Unpadded::Invalid(bytes) => {
            warn!("padding validation failed, returning unstripped plaintext");
            (bytes, PaddingVerdict::Invalid)
        }
    };

    Ok(CipherResult {
        blocks,
        final_result: String::from_utf8_lossy(&plaintext).into_owned(),
        padding: verdict,
    })
}

/// Runs the round engine over every 16-byte block of `data`.
///
/// Output bytes and traces preserve input block order, also under the
/// `parallel` feature where blocks are computed on the rayon pool (the round
/// keys are shared read-only, each block's state is owned by its worker).
fn run_blocks(
    detail: TraceDetail,
    operation: Operation,
    data: &[u8],
    round_keys: &RoundKeys,
) -> (Vec<u8>, Vec<BlockTrace>) {
    debug_assert_eq!(data.len() % BLOCK_SIZE, 0);

    let run_one = |(index, chunk): (usize, &[u8])| {
        let mut block: Block = [0u8; BLOCK_SIZE];
        block.copy_from_slice(chunk);
        let (output, rounds) = match operation {
            Operation::Encrypt => trace_encrypt_block(detail, &block, round_keys),
            Operation::Decrypt => trace_decrypt_block(detail, &block, round_keys),
        };
        (
            output,
            BlockTrace {
                block: index + 1,
                rounds,
            },
        )
    };

    #[cfg(feature = "parallel")]
    let per_block: Vec<(Block, BlockTrace)> = {
        use rayon::prelude::*;
        data.par_chunks(BLOCK_SIZE).enumerate().map(run_one).collect()
    };
    #[cfg(not(feature = "parallel"))]
    let per_block: Vec<(Block, BlockTrace)> =
        data.chunks(BLOCK_SIZE).enumerate().map(run_one).collect();

    let mut bytes = Vec::with_capacity(data.len());
    let mut traces = Vec::with_capacity(per_block.len());
    for (output, trace) in per_block {
        bytes.extend_from_slice(&output);
        if detail == TraceDetail::Full {
            traces.push(trace);
        }
    }
    (bytes, traces)
}
