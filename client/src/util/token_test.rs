use super::*;
use base64::Engine as _;

fn encode_token(claims: &serde_json::Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(claims.to_string());
    format!("{header}.{payload}.signature")
}

#[test]
fn decode_extracts_numeric_user_id() {
    let token = encode_token(&serde_json::json!({ "user_id": 42, "exp": 1_700_000_000 }));
    let claims = decode(&token).unwrap();
    assert_eq!(claims.user_id, Id::Int(42));
    assert_eq!(claims.extra.get("exp"), Some(&serde_json::json!(1_700_000_000)));
}

#[test]
fn decode_extracts_string_user_id() {
    let token = encode_token(&serde_json::json!({ "user_id": "u-9" }));
    assert_eq!(decode(&token).unwrap().user_id, Id::Text("u-9".to_owned()));
}

#[test]
fn decode_tolerates_padded_payload() {
    let payload = base64::engine::general_purpose::URL_SAFE.encode(r#"{"user_id":1}"#);
    assert!(payload.ends_with('='));
    let token = format!("h.{payload}.s");
    assert_eq!(decode(&token).unwrap().user_id, Id::Int(1));
}

#[test]
fn decode_does_not_check_signature() {
    let token = encode_token(&serde_json::json!({ "user_id": 3 }));
    let tampered = format!("{}.forged", token.rsplit_once('.').unwrap().0);
    assert_eq!(decode(&tampered).unwrap().user_id, Id::Int(3));
}

#[test]
fn decode_rejects_wrong_segment_count() {
    assert_eq!(decode("not-a-token"), Err(DecodeError::Segments(1)));
    assert_eq!(decode("a.b.c.d"), Err(DecodeError::Segments(4)));
}

#[test]
fn decode_rejects_invalid_base64() {
    assert!(matches!(decode("h.!!!.s"), Err(DecodeError::Base64(_))));
}

#[test]
fn decode_rejects_payload_without_user_id() {
    let token = encode_token(&serde_json::json!({ "sub": "alice" }));
    assert!(matches!(decode(&token), Err(DecodeError::Claims(_))));
}

#[test]
fn decode_rejects_non_json_payload() {
    let token = format!("h.{}.s", URL_SAFE_NO_PAD.encode("plain text"));
    assert!(matches!(decode(&token), Err(DecodeError::Claims(_))));
}
