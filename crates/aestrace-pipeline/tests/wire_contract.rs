//! The serialized result document is an external contract; these tests pin
//! the exact field names and shapes consumers rely on.

use aestrace_pipeline::{process, Operation};
use serde_json::Value;

const KEY: &str = "1234567890123456";

fn to_json(result: &aestrace_pipeline::CipherResult) -> Value {
    serde_json::to_value(result).expect("serialize result")
}

#[test]
fn encrypt_document_has_exact_shape() {
    let result = process(Operation::Encrypt, "HELLO", KEY);
    let json = to_json(&result);

    let document = json.as_object().expect("top-level object");
    assert_eq!(document.len(), 2);
    assert!(document.contains_key("blocks"));
    assert!(document.contains_key("finalResult"));

    let blocks = document["blocks"].as_array().expect("blocks array");
    assert_eq!(blocks.len(), 1);
    let block = blocks[0].as_object().expect("block object");
    assert_eq!(block.len(), 2);
    assert_eq!(block["block"], 1);

    let rounds = block["rounds"].as_array().expect("rounds array");
    assert_eq!(rounds.len(), 10);
    for (i, round) in rounds.iter().enumerate() {
        let round = round.as_object().expect("round object");
        assert_eq!(round["round"], (i + 1) as u64);
        for name in [
            "startOfRound",
            "afterSubBytes",
            "afterShiftRows",
            "afterMixColumns",
            "afterAddRoundKey",
        ] {
            let hex = round[name].as_str().expect("hex string");
            assert_eq!(hex.len(), 32);
            assert!(hex
                .chars()
                .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_lowercase()));
        }
        assert_eq!(round.len(), 6);
    }
}

#[test]
fn decrypt_document_uses_inverse_stage_names() {
    let encrypted = process(Operation::Encrypt, "HELLO", KEY);
    let result = process(Operation::Decrypt, &encrypted.final_result, KEY);
    let json = to_json(&result);

    let rounds = json["blocks"][0]["rounds"].as_array().expect("rounds");
    assert_eq!(rounds.len(), 10);
    for round in rounds {
        let round = round.as_object().expect("round object");
        for name in [
            "startOfRound",
            "afterInvShiftRows",
            "afterInvSubBytes",
            "afterAddRoundKey",
            "afterInvMixColumns",
        ] {
            assert!(round.contains_key(name), "missing {name}");
        }
        assert!(!round.contains_key("afterSubBytes"));
        assert!(!round.contains_key("afterMixColumns"));
    }
    assert_eq!(json["finalResult"], "HELLO");
}

#[test]
fn error_document_keeps_the_contract_shape() {
    let result = process(Operation::Decrypt, "!!!not base64!!!", KEY);
    let json = to_json(&result);

    let document = json.as_object().expect("top-level object");
    assert_eq!(document.len(), 2);
    assert_eq!(document["blocks"].as_array().expect("blocks").len(), 0);
    let message = document["finalResult"].as_str().expect("message");
    assert!(message.starts_with("Error:"));
}

#[test]
fn padding_verdict_never_reaches_the_wire() {
    let encrypted = process(Operation::Encrypt, "HELLO", KEY);
    let result = process(Operation::Decrypt, &encrypted.final_result, KEY);
    let json = serde_json::to_string(&result).expect("serialize");
    assert!(!json.contains("padding"));
    assert!(!json.contains("Stripped"));
}
