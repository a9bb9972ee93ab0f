//! Tests for the article module

use super::*;
use crate::error::Error;
use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;
use serde_json::json;

fn raw(value: serde_json::Value) -> RawArticle {
    serde_json::from_value(value).unwrap()
}

// ============================================================================
// Raw Shape Tests
// ============================================================================

#[test]
fn test_raw_article_full_item() {
    let item = raw(json!({
        "sys": {"id": "a1"},
        "title": "Regenerative Agriculture",
        "slug": "regenerative-agriculture",
        "excerpt": "Restoring soil health",
        "coverImage": {"url": "https://images.example.com/cover.jpg"},
        "category": "Soil Health",
        "author": "Sarah Mitchell",
        "date": "2024-05-20T00:00:00.000Z",
        "readTime": "8 min read",
        "body": {
            "json": {"nodeType": "document", "content": []},
            "links": {"assets": {"block": [
                {"sys": {"id": "img1"}, "url": "https://images.example.com/1.jpg", "description": "Field"}
            ]}}
        }
    }));

    assert_eq!(raw_id(&item), Some("a1"));
    assert_eq!(item.read_time.as_deref(), Some("8 min read"));
    assert_eq!(
        item.author,
        Some(RawAuthor::Name("Sarah Mitchell".to_string()))
    );
}

#[test]
fn test_raw_author_profile() {
    let item = raw(json!({
        "sys": {"id": "a1"},
        "author": {"name": "Sarah", "picture": {"url": "https://images.example.com/sarah.jpg"}}
    }));

    match item.author {
        Some(RawAuthor::Profile { name, picture }) => {
            assert_eq!(name.as_deref(), Some("Sarah"));
            assert!(picture.unwrap().url.is_some());
        }
        other => panic!("Expected profile author, got {other:?}"),
    }
}

#[test]
fn test_raw_nulls_are_absent() {
    let item = raw(json!({
        "sys": {"id": "a1"},
        "title": null,
        "coverImage": null,
        "body": null
    }));
    assert!(item.title.is_none());
    assert!(item.cover_image.is_none());
    assert!(item.body.is_none());
}

fn raw_id(item: &RawArticle) -> Option<&str> {
    item.sys.as_ref().and_then(|sys| sys.id.as_deref())
}

// ============================================================================
// Normalization Tests
// ============================================================================

#[test]
fn test_normalize_full_item() {
    let article = normalize(raw(json!({
        "sys": {"id": "a1"},
        "title": "Regenerative Agriculture",
        "slug": "regenerative-agriculture",
        "excerpt": "Restoring soil health",
        "coverImage": {"url": "https://images.example.com/cover.jpg"},
        "category": "Soil Health",
        "author": "Sarah Mitchell",
        "date": "2024-05-20T00:00:00.000Z",
        "readTime": "8 min read",
        "body": {
            "json": {"nodeType": "document", "content": []},
            "links": {"assets": {"block": [
                {"sys": {"id": "img1"}, "url": "https://images.example.com/1.jpg", "description": "Field"}
            ]}}
        }
    })))
    .unwrap();

    assert_eq!(article.id, "a1");
    assert_eq!(article.title, "Regenerative Agriculture");
    assert_eq!(article.slug, "regenerative-agriculture");
    assert_eq!(article.category, "Soil Health");
    assert_eq!(article.author, "Sarah Mitchell");
    assert_eq!(article.read_time, "8 min read");
    assert_eq!(
        article.cover_image_url.as_deref(),
        Some("https://images.example.com/cover.jpg")
    );
    assert_eq!(
        article.date,
        Some(Utc.with_ymd_and_hms(2024, 5, 20, 0, 0, 0).unwrap())
    );

    let body = article.body.unwrap();
    assert_eq!(body.document["nodeType"], "document");
    assert_eq!(
        body.asset("img1"),
        Some(&LinkedAsset {
            id: "img1".to_string(),
            url: Some("https://images.example.com/1.jpg".to_string()),
            description: Some("Field".to_string()),
        })
    );
    assert!(body.asset("missing").is_none());
}

#[test]
fn test_normalize_missing_fields_stay_absent() {
    let article = normalize(raw(json!({"sys": {"id": "a1"}}))).unwrap();

    assert_eq!(article.title, "");
    assert_eq!(article.excerpt, "");
    assert_eq!(article.author, "");
    assert!(article.cover_image_url.is_none());
    assert!(article.date.is_none());
    assert!(article.body.is_none());
    assert!(article.display_date(DateStyle::Us).is_none());
}

#[test]
fn test_normalize_empty_cover_url_is_absent() {
    let article = normalize(raw(json!({
        "sys": {"id": "a1"},
        "coverImage": {"url": ""}
    })))
    .unwrap();
    assert!(article.cover_image_url.is_none());
}

#[test]
fn test_normalize_legacy_content_wrapper() {
    let article = normalize(raw(json!({
        "sys": {"id": "a1"},
        "content": {"json": {"nodeType": "document"}}
    })))
    .unwrap();

    let body = article.body.unwrap();
    assert_eq!(body.document["nodeType"], "document");
    assert!(body.assets.is_empty());
}

#[test]
fn test_normalize_prefers_body_over_content() {
    let article = normalize(raw(json!({
        "sys": {"id": "a1"},
        "body": {"json": {"v": "body"}},
        "content": {"json": {"v": "content"}}
    })))
    .unwrap();
    assert_eq!(article.body.unwrap().document["v"], "body");
}

#[test]
fn test_normalize_profile_author() {
    let article = normalize(raw(json!({
        "sys": {"id": "a1"},
        "author": {"name": "Sarah", "picture": {"url": "https://images.example.com/sarah.jpg"}}
    })))
    .unwrap();

    assert_eq!(article.author, "Sarah");
    assert_eq!(
        article.author_avatar_url.as_deref(),
        Some("https://images.example.com/sarah.jpg")
    );
}

#[test]
fn test_normalize_skips_assets_without_id() {
    let article = normalize(raw(json!({
        "sys": {"id": "a1"},
        "body": {
            "json": {},
            "links": {"assets": {"block": [
                null,
                {"url": "https://images.example.com/orphan.jpg"},
                {"sys": {"id": "img2"}}
            ]}}
        }
    })))
    .unwrap();

    let assets = article.body.unwrap().assets;
    assert_eq!(assets.len(), 1);
    assert_eq!(assets[0].id, "img2");
}

#[test]
fn test_normalize_requires_id() {
    assert!(normalize(raw(json!({"title": "No id"}))).is_err());
    assert!(normalize(raw(json!({"sys": {"id": ""}}))).is_err());
    assert!(normalize(raw(json!({"sys": {}}))).is_err());
}

#[test]
fn test_normalize_bad_date_is_absent() {
    let article = normalize(raw(json!({
        "sys": {"id": "a1"},
        "date": "last tuesday"
    })))
    .unwrap();
    assert!(article.date.is_none());
}

#[test]
fn test_normalize_all_preserves_order() {
    let raws = vec![
        raw(json!({"sys": {"id": "c"}, "date": "2024-01-01"})),
        raw(json!({"sys": {"id": "a"}, "date": "2024-03-01"})),
        raw(json!({"sys": {"id": "b"}, "date": "2024-02-01"})),
    ];

    let ids: Vec<String> = normalize_all(raws)
        .unwrap()
        .into_iter()
        .map(|a| a.id)
        .collect();
    assert_eq!(ids, vec!["c", "a", "b"]);
}

#[test]
fn test_normalize_all_reports_index() {
    let raws = vec![
        raw(json!({"sys": {"id": "a"}})),
        raw(json!({"title": "broken"})),
    ];

    match normalize_all(raws).unwrap_err() {
        Error::InvalidRecord { index, .. } => assert_eq!(index, 1),
        other => panic!("Expected InvalidRecord, got {other:?}"),
    }
}

#[test]
fn test_normalize_all_rejects_duplicates() {
    let raws = vec![
        raw(json!({"sys": {"id": "a"}})),
        raw(json!({"sys": {"id": "b"}})),
        raw(json!({"sys": {"id": "a"}})),
    ];

    match normalize_all(raws).unwrap_err() {
        Error::DuplicateArticle { id } => assert_eq!(id, "a"),
        other => panic!("Expected DuplicateArticle, got {other:?}"),
    }
}

#[test]
fn test_normalize_all_empty() {
    assert!(normalize_all(Vec::new()).unwrap().is_empty());
}

// ============================================================================
// Date and Slug Tests
// ============================================================================

#[test]
fn test_parse_date_formats() {
    let expected = Utc.with_ymd_and_hms(2024, 5, 20, 0, 0, 0).unwrap();
    assert_eq!(parse_date("2024-05-20"), Some(expected));
    assert_eq!(parse_date("2024-05-20T00:00:00Z"), Some(expected));
    assert_eq!(parse_date("2024-05-20T02:00:00+02:00"), Some(expected));
    assert_eq!(parse_date(" 2024-05-20 "), Some(expected));
    assert_eq!(parse_date("20/05/2024"), None);
    assert_eq!(parse_date(""), None);
}

#[test]
fn test_display_date_styles() {
    let article = normalize(raw(json!({"sys": {"id": "a1"}, "date": "2024-05-02"}))).unwrap();
    assert_eq!(
        article.display_date(DateStyle::Us).as_deref(),
        Some("May 2, 2024")
    );
    assert_eq!(
        article.display_date(DateStyle::Uk).as_deref(),
        Some("2 May 2024")
    );
}

#[test]
fn test_route_path() {
    let article = normalize(raw(json!({"sys": {"id": "5xYz"}}))).unwrap();
    assert_eq!(article.route_path(), "/5xYz");
}

#[test]
fn test_is_url_safe_slug() {
    assert!(is_url_safe_slug("soil-health"));
    assert!(is_url_safe_slug("top10-tips-2024"));
    assert!(!is_url_safe_slug("Soil Health"));
    assert!(!is_url_safe_slug("soil--health"));
    assert!(!is_url_safe_slug("-soil"));
    assert!(!is_url_safe_slug(""));
}

#[test]
fn test_article_serializes_camel_case() {
    let article = normalize(raw(json!({
        "sys": {"id": "a1"},
        "readTime": "5 min read",
        "coverImage": {"url": "https://images.example.com/c.jpg"}
    })))
    .unwrap();

    let value = serde_json::to_value(&article).unwrap();
    assert_eq!(value["readTime"], "5 min read");
    assert_eq!(value["coverImageUrl"], "https://images.example.com/c.jpg");
    assert!(value.get("date").is_none());
}
