//! Verify error normalization against JSON test vectors stored in `test-vectors/`.
//!
//! Each vector describes a classified failure and the message and status the
//! resulting `ApiError` must carry.

use notice_core::{
    derive_message, to_api_error, to_webhook_error, ApiError, Failure, HttpResponse, NetworkKind,
};
use serde_json::Value;

/// Build the `Failure` described by a vector's `failure` object.
fn parse_failure(v: &Value) -> Failure {
    match v["kind"].as_str().unwrap() {
        "transport" => Failure::Transport(HttpResponse {
            status: v["status"].as_u64().unwrap() as u16,
            headers: Vec::new(),
            body: v["body"].as_str().unwrap().to_string(),
        }),
        "timeout" => Failure::Network {
            kind: NetworkKind::Timeout,
            detail: v["detail"].as_str().unwrap().to_string(),
        },
        "connect" => Failure::Network {
            kind: NetworkKind::Connect,
            detail: v["detail"].as_str().unwrap().to_string(),
        },
        "other" => Failure::Other {
            message: v["message"].as_str().map(str::to_string),
        },
        other => panic!("unknown failure kind: {other}"),
    }
}

fn check(name: &str, case: &Value, err: &ApiError) {
    assert_eq!(
        err.message,
        case["expected_message"].as_str().unwrap(),
        "{name}: message"
    );
    let expected_status = case["expected_status"].as_u64().map(|s| s as u16);
    assert_eq!(err.status, expected_status, "{name}: status");
    assert_eq!(
        err.response.as_ref().map(|r| r.status),
        expected_status,
        "{name}: response"
    );
}

// ---------------------------------------------------------------------------
// Generic mapper
// ---------------------------------------------------------------------------

#[test]
fn error_message_vectors() {
    let raw = include_str!("../../test-vectors/error-messages.json");
    let vectors: Value = serde_json::from_str(raw).unwrap();
    let default_message = vectors["default_message"].as_str().unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let failure = parse_failure(&case["failure"]);
        let err = to_api_error(failure, default_message);
        check(name, case, &err);
    }
}

#[test]
fn derive_message_matches_mapper_when_non_empty() {
    let raw = include_str!("../../test-vectors/error-messages.json");
    let vectors: Value = serde_json::from_str(raw).unwrap();
    let default_message = vectors["default_message"].as_str().unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let failure = parse_failure(&case["failure"]);
        let derived = derive_message(&failure);
        let expected = case["expected_message"].as_str().unwrap();
        if expected == default_message {
            assert!(derived.is_empty(), "{name}: expected empty derived message");
        } else {
            assert_eq!(derived, expected, "{name}: derived message");
        }
    }
}

// ---------------------------------------------------------------------------
// Webhook mapper
// ---------------------------------------------------------------------------

#[test]
fn webhook_error_vectors() {
    let raw = include_str!("../../test-vectors/webhook-errors.json");
    let vectors: Value = serde_json::from_str(raw).unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let failure = parse_failure(&case["failure"]);
        let err = to_webhook_error(failure);
        check(name, case, &err);
    }
}
