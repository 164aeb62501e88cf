use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use og_meta::{routes::routes::routes, services::flatten_service::FlattenService};
use serde_json::{Value, json};
use tower::ServiceExt;

fn app(max_depth: usize) -> Router {
    routes().with_state(FlattenService::new(max_depth))
}

async fn body_json(resp: axum::response::Response) -> Value {
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap_or_else(
        |_| json!({ "raw": String::from_utf8_lossy(&bytes).to_string() }),
    )
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn healthz_reports_ok() {
    let resp = app(7)
        .oneshot(Request::builder().uri("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await, json!({ "status": "ok", "max_depth": 7 }));
}

#[tokio::test]
async fn flatten_returns_ordered_pairs() {
    let resp = app(32)
        .oneshot(post_json(
            "/flatten",
            json!({ "title": "T", "tag": ["a", "b"], "image": { "width": 640 } }),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        body_json(resp).await,
        json!([
            { "property": "title", "content": "T" },
            { "property": "tag", "content": "a" },
            { "property": "tag", "content": "b" },
            { "property": "image:width", "content": "640" },
        ])
    );
}

#[tokio::test]
async fn flatten_applies_parent_prefix() {
    let resp = app(32)
        .oneshot(post_json("/flatten?parent=og", json!({ "title": "T" })))
        .await
        .unwrap();
    assert_eq!(
        body_json(resp).await,
        json!([{ "property": "og:title", "content": "T" }])
    );
}

#[tokio::test]
async fn unlabeled_scalar_is_unprocessable() {
    let resp = app(32)
        .oneshot(post_json("/flatten", json!("orphan")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_json(resp).await;
    assert_eq!(body["status"], 422);
    assert!(
        body["error"].as_str().unwrap_or("").contains("no property path"),
        "unexpected body: {body}"
    );
}

#[tokio::test]
async fn too_deep_document_is_rejected_whole() {
    let resp = app(2)
        .oneshot(post_json("/flatten", json!({ "a": "ok", "b": { "c": { "d": "x" } } })))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_json(resp).await;
    assert!(body["error"].as_str().unwrap_or("").contains("b:c:d"));
}

#[tokio::test]
async fn metadata_article_is_namespaced() {
    let resp = app(32)
        .oneshot(post_json(
            "/metadata",
            json!({
                "type": "article",
                "title": "Hello",
                "image": { "url": "http://i", "alt": "cover" },
                "url": "http://u",
                "locale": ["en_US", { "alternate": "de_DE" }],
                "article": {
                    "published_time": "2024-01-02T03:04:05Z",
                    "modified_time": "2024-01-03T00:00:00Z",
                    "expiration_time": "2025-01-01T00:00:00Z",
                    "author": ["http://a1", "http://a2"],
                    "section": "News",
                    "tag": "rust"
                }
            }),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    let pairs: Vec<(String, String)> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|p| {
            (
                p["property"].as_str().unwrap().to_string(),
                p["content"].as_str().unwrap().to_string(),
            )
        })
        .collect();
    let pairs: Vec<(&str, &str)> = pairs.iter().map(|(p, c)| (p.as_str(), c.as_str())).collect();

    assert_eq!(
        pairs,
        [
            ("og:type", "article"),
            ("og:title", "Hello"),
            ("og:image:url", "http://i"),
            ("og:image:alt", "cover"),
            ("og:url", "http://u"),
            ("og:locale", "en_US"),
            ("og:locale:alternate", "de_DE"),
            ("article:published_time", "2024-01-02T03:04:05Z"),
            ("article:modified_time", "2024-01-03T00:00:00Z"),
            ("article:expiration_time", "2025-01-01T00:00:00Z"),
            ("article:author", "http://a1"),
            ("article:author", "http://a2"),
            ("article:section", "News"),
            ("article:tag", "rust"),
        ]
    );
}

#[tokio::test]
async fn metadata_profile_accepts_legacy_book_key() {
    let resp = app(32)
        .oneshot(post_json(
            "/metadata",
            json!({
                "type": "profile",
                "title": "Jane",
                "image": "http://i",
                "url": "http://u",
                "book": {
                    "first_name": "Jane",
                    "last_name": "Doe",
                    "username": "jdoe",
                    "gender": "female"
                }
            }),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body[4], json!({ "property": "profile:first_name", "content": "Jane" }));
    assert_eq!(body[7], json!({ "property": "profile:gender", "content": "female" }));
}

#[tokio::test]
async fn metadata_with_wrong_shape_is_rejected() {
    let resp = app(32)
        .oneshot(post_json(
            "/metadata",
            json!({
                "type": "book",
                "title": "T",
                "image": "http://i",
                "url": "http://u"
            }),
        ))
        .await
        .unwrap();
    assert!(resp.status().is_client_error(), "got {}", resp.status());
}

#[tokio::test]
async fn metadata_accepts_text_dimensions_and_bare_dates() {
    let resp = app(32)
        .oneshot(post_json(
            "/metadata",
            json!({
                "type": "book",
                "title": "T",
                "image": { "url": "http://i", "width": "1200" },
                "url": "http://u",
                "book": {
                    "author": "http://a",
                    "isbn": "123",
                    "release_date": "2024-05-01",
                    "tag": ["x"]
                }
            }),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body[3], json!({ "property": "og:image:width", "content": "1200" }));
    assert_eq!(body[7], json!({ "property": "book:release_date", "content": "2024-05-01" }));
}
