mod common;

use rulecheck::Config;
use serde_json::{json, Value};

use common::{spawn_app, validate};

#[tokio::test]
async fn test_success_response_shape() {
    let base = spawn_app(Config::default()).await;

    let (status, body) = validate(
        &base,
        json!({
            "rule": {"field": "missions", "condition": "gte", "condition_value": 30},
            "data": {"name": "James Holden", "crew": "Rocinante", "age": 34, "missions": 45}
        }),
    )
    .await;

    assert_eq!(status, 200);
    assert_eq!(
        body,
        json!({
            "message": "field missions successfully validated.",
            "status": "success",
            "data": {
                "validation": {
                    "error": false,
                    "field": "missions",
                    "field_value": 45,
                    "condition": "gte",
                    "condition_value": 30
                }
            }
        })
    );
}

#[tokio::test]
async fn test_condition_failure_response_shape() {
    let base = spawn_app(Config::default()).await;

    let (status, body) = validate(
        &base,
        json!({
            "rule": {"field": "0", "condition": "eq", "condition_value": "a"},
            "data": "damien-marley"
        }),
    )
    .await;

    assert_eq!(status, 400);
    assert_eq!(
        body,
        json!({
            "message": "field 0 failed validation.",
            "status": "error",
            "data": {
                "validation": {
                    "error": true,
                    "field": "0",
                    "field_value": "d",
                    "condition": "eq",
                    "condition_value": "a"
                }
            }
        })
    );
}

#[tokio::test]
async fn test_nested_field_success() {
    let base = spawn_app(Config::default()).await;

    let (status, body) = validate(
        &base,
        json!({
            "rule": {"field": "a.b", "condition": "gte", "condition_value": 5},
            "data": {"a": {"b": 5}}
        }),
    )
    .await;

    assert_eq!(status, 200);
    assert_eq!(body["data"]["validation"]["field_value"], 5);
}

#[tokio::test]
async fn test_missing_field_has_null_data() {
    let base = spawn_app(Config::default()).await;

    for data in [json!({}), json!({"a": {}})] {
        let (status, body) = validate(
            &base,
            json!({
                "rule": {"field": "a.b", "condition": "eq", "condition_value": 1},
                "data": data
            }),
        )
        .await;

        assert_eq!(status, 400);
        assert_eq!(
            body,
            json!({
                "message": "field a.b is missing from data.",
                "status": "error",
                "data": null
            })
        );
    }
}

#[tokio::test]
async fn test_array_zero_value_validates() {
    let base = spawn_app(Config::default()).await;

    let (status, body) = validate(
        &base,
        json!({
            "rule": {"field": "0", "condition": "eq", "condition_value": 0},
            "data": [0, 1, 2]
        }),
    )
    .await;

    assert_eq!(status, 200);
    assert_eq!(body["status"], "success");
}

#[tokio::test]
async fn test_shape_errors() {
    let base = spawn_app(Config::default()).await;

    let cases = [
        (json!({}), "rule is required."),
        (
            json!({"rule": {"field": "a", "condition": "lte", "condition_value": 1}, "data": {}}),
            "rule condition accepts only 'eq','neq','gt','gte' or 'contains'.",
        ),
        (
            json!({"rule": {"field": "a", "condition": "eq", "condition_value": 1}, "data": 12}),
            "data should be an object, string or an array.",
        ),
        (
            json!({"rule": {"field": "a", "condition": "eq", "condition_value": 1}, "data": true}),
            "data should be an object, string or an array.",
        ),
    ];

    for (request, message) in cases {
        let (status, body) = validate(&base, request).await;
        assert_eq!(status, 400);
        assert_eq!(body["message"], message);
        assert_eq!(body["status"], "error");
        assert_eq!(body["data"], Value::Null);
    }
}

#[tokio::test]
async fn test_numeric_condition_value_policy() {
    let mut config = Config::default();
    config.validation.require_numeric_condition_value = true;
    let base = spawn_app(config).await;

    let (status, body) = validate(
        &base,
        json!({
            "rule": {"field": "name", "condition": "eq", "condition_value": "bob"},
            "data": {"name": "bob"}
        }),
    )
    .await;

    assert_eq!(status, 400);
    assert_eq!(body["message"], "rule condition value should be a number.");
}

#[tokio::test]
async fn test_malformed_json_body() {
    let base = spawn_app(Config::default()).await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/validate-rule", base))
        .header("content-type", "application/json")
        .body("{\"rule\": ")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 400);
    let body: Value = response.json().await.unwrap();
    assert_eq!(
        body,
        json!({"message": "Invalid JSON payload passed.", "status": "error", "data": null})
    );

    let response = client
        .post(format!("{}/validate-rule", base))
        .body("rule=1")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 400);
}

#[tokio::test]
async fn test_oversized_body_rejected() {
    let mut config = Config::default();
    config.server.max_body_bytes = 64;
    let base = spawn_app(config).await;

    let (status, body) = validate(
        &base,
        json!({
            "rule": {"field": "text", "condition": "contains", "condition_value": "x"},
            "data": {"text": "x".repeat(256)}
        }),
    )
    .await;

    assert_eq!(status, 413);
    assert_eq!(body["message"], "request body is too large.");
}

#[tokio::test]
async fn test_contains_on_null_is_server_error() {
    let base = spawn_app(Config::default()).await;

    let (status, body) = validate(
        &base,
        json!({
            "rule": {"field": "v", "condition": "contains", "condition_value": "x"},
            "data": {"v": null}
        }),
    )
    .await;

    assert_eq!(status, 500);
    assert_eq!(body["status"], "error");
    assert_eq!(body["data"], Value::Null);
}
