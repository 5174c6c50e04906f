//! Encrypts a short message, prints a slice of the round trace, then
//! decrypts the ciphertext back.

use aestrace_pipeline::{process, Operation};

fn main() {
    let message = "ATTACK AT DAWN";
    let key = "1234567890123456";

    let encrypted = process(Operation::Encrypt, message, key);
    println!("ciphertext (base64): {}", encrypted.final_result);
    println!("blocks traced: {}", encrypted.blocks.len());
    for snapshot in &encrypted.blocks[0].rounds {
        println!("  round {:2}", snapshot.round());
    }

    let decrypted = process(Operation::Decrypt, &encrypted.final_result, key);
    println!("recovered: {}", decrypted.final_result);
    assert_eq!(decrypted.final_result, message);
}
