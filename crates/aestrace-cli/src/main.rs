//! Command-line interface for the AES-128 round-tracing engine.

#![forbid(unsafe_code)]

use aestrace_pipeline::{
    process_with, CipherResult, KeyCoercion, Operation, ProcessOptions, TraceDetail,
};
use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};

/// AES-128 round-tracing CLI.
#[derive(Parser)]
#[command(
    name = "aestrace",
    version,
    author,
    about = "AES-128 encryption and decryption with a round-by-round state trace"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct RequestArgs {
    /// UTF-8 message (encrypt) or base64 ciphertext (decrypt).
    #[arg(long, value_name = "TEXT")]
    message: String,
    /// Cipher key; coerced to 16 bytes unless --strict-key is set.
    #[arg(long, value_name = "TEXT")]
    key: String,
    /// Reject keys that are not exactly 16 bytes instead of coercing.
    #[arg(long, default_value_t = false)]
    strict_key: bool,
    /// Skip the round-by-round trace; `blocks` comes back empty.
    #[arg(long, default_value_t = false)]
    no_trace: bool,
    /// Print the result document on a single line.
    #[arg(long, default_value_t = false)]
    compact: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt a message and print the trace document.
    Encrypt(RequestArgs),
    /// Decrypt base64 ciphertext and print the trace document.
    Decrypt(RequestArgs),
    /// Process a raw request with the operation given as text.
    Process {
        /// Operation name, matched case-insensitively.
        #[arg(long, value_name = "OP")]
        operation: String,
        #[command(flatten)]
        request: RequestArgs,
    },
    /// Run an encrypt/decrypt round trip on a sample message.
    Demo,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.command {
        Commands::Encrypt(request) => cmd_request(Operation::Encrypt, &request),
        Commands::Decrypt(request) => cmd_request(Operation::Decrypt, &request),
        Commands::Process { operation, request } => cmd_process(&operation, &request),
        Commands::Demo => cmd_demo(),
    }
}

fn options_for(request: &RequestArgs) -> ProcessOptions {
    ProcessOptions {
        trace: if request.no_trace {
            TraceDetail::Disabled
        } else {
            TraceDetail::Full
        },
        key_coercion: if request.strict_key {
            KeyCoercion::Strict
        } else {
            KeyCoercion::TruncateOrZeroPad
        },
    }
}

fn cmd_request(operation: Operation, request: &RequestArgs) -> Result<()> {
    let options = options_for(request);
    let result = process_with(&options, operation, &request.message, &request.key);
    print_result(&result, request.compact)
}

fn cmd_process(operation: &str, request: &RequestArgs) -> Result<()> {
    // An unknown operation is an input-format error, reported in the same
    // document shape as every other request failure.
    let result = match operation.parse::<Operation>() {
        Ok(operation) => {
            process_with(&options_for(request), operation, &request.message, &request.key)
        }
        Err(err) => CipherResult::error(err),
    };
    print_result(&result, request.compact)
}

fn cmd_demo() -> Result<()> {
    let message = "ATTACK AT DAWN";
    let key = "1234567890123456";
    let options = ProcessOptions::default();

    let encrypted = process_with(&options, Operation::Encrypt, message, key);
    if encrypted.is_error() {
        bail!("demo encryption failed: {}", encrypted.final_result);
    }
    let raw = aestrace_pipeline::transport::decode(&encrypted.final_result)
        .context("decode demo ciphertext")?;

    println!("demo message: {message}");
    println!("ciphertext (base64): {}", encrypted.final_result);
    println!("ciphertext (hex): {}", hex::encode(raw));
    println!("blocks traced: {}", encrypted.blocks.len());

    let decrypted = process_with(&options, Operation::Decrypt, &encrypted.final_result, key);
    println!("decrypted: {}", decrypted.final_result);
    if decrypted.final_result != message {
        bail!("demo roundtrip failed");
    }
    Ok(())
}

fn print_result(result: &CipherResult, compact: bool) -> Result<()> {
    let document = if compact {
        serde_json::to_string(result)
    } else {
        serde_json::to_string_pretty(result)
    }
    .context("serialize result document")?;
    println!("{document}");
    Ok(())
}
