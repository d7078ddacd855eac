//! Roll API Tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;
use test_case::test_case;

use crate::common::{TestApp, TEST_MAX_DICE};

fn rolls(body: &serde_json::Value) -> Vec<i64> {
    body["rolls"]
        .as_array()
        .expect("rolls array")
        .iter()
        .map(|r| r.as_i64().expect("integer roll"))
        .collect()
}

#[tokio::test]
async fn test_manual_roll() {
    let app = TestApp::new();

    let (status, body) = app.roll("manual", "3d6+2").await;

    assert_eq!(status, StatusCode::OK);
    let rolls = rolls(&body);
    assert_eq!(rolls.len(), 3);
    assert!(rolls.iter().all(|r| (1..=6).contains(r)));
    assert_eq!(body["modifier"], 2);
    assert_eq!(body["total"].as_i64().unwrap(), rolls.iter().sum::<i64>() + 2);
    assert_eq!(body["expression"], "3d6+2");
    assert!(body.get("advantage").is_none());
}

#[tokio::test]
async fn test_negative_modifier() {
    let app = TestApp::new();

    let (status, body) = app.roll("manual", "1d2 - 5").await;

    assert_eq!(status, StatusCode::OK);
    let rolls = rolls(&body);
    assert_eq!(rolls.len(), 1);
    assert!((1..=2).contains(&rolls[0]));
    assert_eq!(body["modifier"], -5);
    assert_eq!(body["total"].as_i64().unwrap(), rolls[0] - 5);
}

#[tokio::test]
async fn test_spell_roll_uses_damage_formula() {
    let app = TestApp::new();

    let (status, body) = app.roll("spell", "fireball").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(rolls(&body).len(), 8);
    assert_eq!(body["modifier"], 0);
    assert_eq!(body["expression"], "8d6");
}

#[tokio::test]
async fn test_advantage_returns_second_roll() {
    let app = TestApp::new();
    let request = json!({"input_type": "manual", "value": "2d20+1", "advantage": true});

    let (status, body) = app.post_json("/api/v1/roll", &request.to_string()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(rolls(&body).len(), 2);
    let second = &body["advantage"];
    let second_rolls = rolls(second);
    assert_eq!(second_rolls.len(), 2);
    assert!(second_rolls.iter().all(|r| (1..=20).contains(r)));
    assert_eq!(second["modifier"], 1);
    assert_eq!(second["total"].as_i64().unwrap(), second_rolls.iter().sum::<i64>() + 1);
}

#[tokio::test]
async fn test_advantage_on_spell() {
    let app = TestApp::new();
    let request = json!({"input_type": "spell", "value": "Fire Bolt", "advantage": true});

    let (status, body) = app.post_json("/api/v1/roll", &request.to_string()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["expression"], "1d10");
    assert_eq!(rolls(&body["advantage"]).len(), 1);
}

#[tokio::test]
async fn test_advantage_on_failed_roll() {
    let app = TestApp::new();
    let request = json!({"input_type": "manual", "value": "0d6", "advantage": true});

    let (status, body) = app.post_json("/api/v1/roll", &request.to_string()).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body.get("advantage").is_none());
}

#[test_case("abc", "malformed_expression" ; "not dice")]
#[test_case("d6", "malformed_expression" ; "missing count")]
#[test_case("0d6", "out_of_range_dice" ; "zero dice")]
#[test_case("2d0", "out_of_range_dice" ; "zero sides")]
#[test_case("1d1", "out_of_range_dice" ; "one sided die")]
#[tokio::test]
async fn test_manual_roll_rejected(value: &str, kind: &str) {
    let app = TestApp::new();

    let (status, body) = app.roll("manual", value).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["kind"], kind);
    assert!(body["error"].is_string());
    assert!(body.get("rolls").is_none());
}

#[tokio::test]
async fn test_dice_limit() {
    let app = TestApp::new();

    let (status, _) = app.roll("manual", &format!("{}d6", TEST_MAX_DICE)).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = app.roll("manual", &format!("{}d6", TEST_MAX_DICE + 1)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["kind"], "dice_limit_exceeded");
}

#[tokio::test]
async fn test_unknown_spell() {
    let app = TestApp::new();

    let (status, body) = app.roll("spell", "Unknown Spell").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["kind"], "entity_not_found");
}

#[tokio::test]
async fn test_spell_without_damage() {
    let app = TestApp::new();

    let (status, body) = app.roll("spell", "Mage Hand").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["kind"], "malformed_entity_record");
}

#[tokio::test]
async fn test_lookup_failure() {
    let app = TestApp::offline();

    let (status, body) = app.roll("spell", "Fireball").await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["kind"], "lookup_failed");
}

#[test_case(r#"{"input_type": "potion", "value": "1d4"}"# ; "unknown input type")]
#[test_case(r#"{"input_type": "manual"}"# ; "missing value")]
#[test_case(r#"{"input_type": "manual", "value": ""}"# ; "empty value")]
#[test_case(r#"{"input_type": "manual", "value": "   "}"# ; "blank value")]
#[test_case("not json" ; "invalid json")]
#[tokio::test]
async fn test_bad_request_body(body: &str) {
    let app = TestApp::new();

    let (status, _) = app.post_json("/api/v1/roll", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}
