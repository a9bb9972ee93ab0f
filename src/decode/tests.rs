//! Tests for decoder module

use super::*;
use crate::error::Error;
use serde_json::json;
use test_case::test_case;

fn item(id: &str) -> serde_json::Value {
    json!({"sys": {"id": id}, "title": format!("Title {id}")})
}

fn ids(items: &[crate::article::RawArticle]) -> Vec<String> {
    items
        .iter()
        .filter_map(|i| i.sys.as_ref().and_then(|s| s.id.clone()))
        .collect()
}

// ============================================================================
// EnvelopeAlias Tests
// ============================================================================

#[test_case(EnvelopeAlias::News, "news", "posts: items" ; "news alias")]
#[test_case(EnvelopeAlias::Post, "post", "items" ; "post alias")]
#[test_case(EnvelopeAlias::Posts, "posts", "items" ; "posts alias")]
fn test_alias_names(alias: EnvelopeAlias, key: &str, selection: &str) {
    assert_eq!(alias.key(), key);
    assert_eq!(alias.items_selection(), selection);
    assert_eq!(EnvelopeAlias::from_key(key), Some(alias));
}

#[test]
fn test_alias_unknown_key() {
    assert_eq!(EnvelopeAlias::from_key("bookReaderCollection"), None);
}

// ============================================================================
// Envelope Tests
// ============================================================================

#[test]
fn test_decode_news_envelope() {
    let envelope = decode_envelope(json!({
        "data": {"news": {"posts": [item("a"), item("b")]}}
    }))
    .unwrap();

    assert_eq!(envelope.alias(), EnvelopeAlias::News);
    assert_eq!(ids(envelope.items()), vec!["a", "b"]);
}

#[test]
fn test_decode_post_envelope() {
    let envelope = decode_envelope(json!({
        "data": {"post": {"items": [item("a")]}}
    }))
    .unwrap();

    assert!(matches!(envelope, Envelope::Post { .. }));
    assert_eq!(envelope.into_items().len(), 1);
}

#[test]
fn test_decode_posts_envelope_empty() {
    let envelope = decode_envelope(json!({
        "data": {"posts": {"items": []}}
    }))
    .unwrap();

    assert_eq!(envelope.alias(), EnvelopeAlias::Posts);
    assert!(envelope.items().is_empty());
}

#[test]
fn test_decode_preserves_order() {
    let envelope = decode_envelope(json!({
        "data": {"posts": {"items": [item("z"), item("m"), item("a")]}}
    }))
    .unwrap();
    assert_eq!(ids(envelope.items()), vec!["z", "m", "a"]);
}

#[test_case(json!({"data": {"bookReaderCollection": {"items": []}}}) ; "unknown alias")]
#[test_case(json!({"data": {"post": {"items": []}, "posts": {"items": []}}}) ; "two root fields")]
#[test_case(json!({"data": {}}) ; "no root field")]
#[test_case(json!({"data": {"post": null}}) ; "null collection")]
#[test_case(json!({"data": {"post": {"posts": []}}}) ; "wrong item key")]
#[test_case(json!({"data": {"news": {"items": []}}}) ; "news without posts")]
#[test_case(json!({"data": {"post": {"items": null}}}) ; "null items")]
#[test_case(json!({"data": {"post": []}}) ; "collection is array")]
#[test_case(json!({"data": []}) ; "data is array")]
#[test_case(json!({}) ; "no data")]
fn test_decode_rejects_unrecognized(body: serde_json::Value) {
    let err = decode_envelope(body).unwrap_err();
    assert!(
        matches!(err, Error::UnrecognizedEnvelope { .. }),
        "unexpected error: {err:?}"
    );
}

#[test]
fn test_decode_graphql_errors_without_data() {
    let err = decode_envelope(json!({
        "data": null,
        "errors": [{"message": "Query cannot be executed"}, {"message": "Unknown field"}]
    }))
    .unwrap_err();

    match err {
        Error::GraphQl { messages } => {
            assert_eq!(messages, vec!["Query cannot be executed", "Unknown field"]);
        }
        other => panic!("Expected GraphQl, got {other:?}"),
    }
}

#[test]
fn test_decode_partial_errors_keep_data() {
    let envelope = decode_envelope(json!({
        "data": {"posts": {"items": [item("a")]}},
        "errors": [{"message": "Link to unresolvable entry"}]
    }))
    .unwrap();
    assert_eq!(envelope.items().len(), 1);
}

#[test]
fn test_decode_drops_unresolved_entries() {
    let envelope = decode_envelope(json!({
        "data": {"news": {"posts": [null, item("a"), null, item("b")]}},
        "errors": [{"message": "Link to unresolvable entry"}]
    }))
    .unwrap();

    assert_eq!(envelope.alias(), EnvelopeAlias::News);
    assert_eq!(ids(envelope.items()), vec!["a", "b"]);
}

#[test]
fn test_decode_all_entries_unresolved() {
    let items = EnvelopeDecoder::new(EnvelopeAlias::Post)
        .decode_value(json!({"data": {"post": {"items": [null]}}}))
        .unwrap();
    assert!(items.is_empty());
}

#[test]
fn test_decode_non_object_body() {
    let err = decode_envelope(json!("nope")).unwrap_err();
    assert!(matches!(err, Error::Decode { .. }));
}

// ============================================================================
// EnvelopeDecoder Tests
// ============================================================================

#[test]
fn test_decoder_accepts_expected_alias() {
    let decoder = EnvelopeDecoder::new(EnvelopeAlias::News);
    let items = decoder
        .decode(r#"{"data": {"news": {"posts": [{"sys": {"id": "a"}}]}}}"#)
        .unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(decoder.expected(), EnvelopeAlias::News);
}

#[test]
fn test_decoder_rejects_other_alias() {
    let decoder = EnvelopeDecoder::new(EnvelopeAlias::Post);
    let err = decoder
        .decode_value(json!({"data": {"posts": {"items": []}}}))
        .unwrap_err();

    assert!(matches!(err, Error::UnrecognizedEnvelope { .. }));
    assert!(err.to_string().contains("expected 'post'"));
}

#[test]
fn test_decoder_invalid_json() {
    let decoder = EnvelopeDecoder::new(EnvelopeAlias::Post);
    let err = decoder.decode("{not json").unwrap_err();
    assert!(matches!(err, Error::Decode { .. }));
}
