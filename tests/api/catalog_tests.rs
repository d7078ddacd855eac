//! Catalog API Tests

use axum::http::StatusCode;
use dnd_reference::domain::SearchTerm;
use serde_json::{json, Value};

use crate::common::{column_matches, TestApp};

#[tokio::test]
async fn test_list_tables() {
    let app = TestApp::new();

    let (status, body) = app.get("/api/v1/catalog").await;

    assert_eq!(status, StatusCode::OK);
    let tables = body.as_array().expect("table list");
    assert_eq!(tables.len(), 7);
    assert!(tables
        .iter()
        .any(|t| t["slug"] == "magic-items" && t["columns"].is_array()));
}

#[tokio::test]
async fn test_text_search_ignores_case() {
    let app = TestApp::new();

    let (status, body) = app.get("/api/v1/catalog/weapons?q=LONGSW").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"]["name"], "Longsword");
}

#[tokio::test]
async fn test_numeric_search_matches_exactly() {
    let app = TestApp::new();

    let (status, body) = app.get("/api/v1/catalog/monsters?q=7").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"], json!({"id": 1, "name": "Goblin", "hit_points": 7}));
}

#[tokio::test]
async fn test_first_match_wins() {
    let app = TestApp::new();

    let (status, body) = app.get("/api/v1/catalog/spells?q=fire").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"]["name"], "Fireball");
}

#[tokio::test]
async fn test_search_miss() {
    let app = TestApp::new();

    let (status, body) = app.get("/api/v1/catalog/spells?q=wish").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["message"].as_str().unwrap().contains("wish"));
}

#[tokio::test]
async fn test_unknown_table() {
    let app = TestApp::new();

    let (status, _) = app.get("/api/v1/catalog/users?q=admin").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_missing_query() {
    let app = TestApp::new();

    let (status, _) = app.get("/api/v1/catalog/spells").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_backend_failure() {
    let app = TestApp::offline();

    let (status, body) = app.get("/api/v1/catalog/spells?q=fire").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "Internal server error");
}

#[tokio::test]
async fn test_boolean_column_matches_as_text() {
    let app = TestApp::new();

    let (status, body) = app.get("/api/v1/catalog/spells?q=true").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"]["name"], "Detect Magic");
}

#[test]
fn test_column_matches_text_forms() {
    let bolt = SearchTerm::Text("bolt".into());
    assert!(column_matches(&bolt, &json!("Fire Bolt")));
    assert!(!column_matches(&bolt, &json!("Fireball")));
    assert!(!column_matches(&bolt, &Value::Null));

    let three = SearchTerm::Number(3);
    assert!(column_matches(&three, &json!(3)));
    assert!(column_matches(&three, &json!("3")));
    assert!(!column_matches(&three, &json!(30)));
    assert!(!column_matches(&three, &json!(" 3")));
}
