//! # Integration Tests for tcg-api
//!
//! Health probes, catalogue endpoints, assessment evaluation and the
//! status codes for each rejection path.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use tcg_api::state::AppState;
use tcg_catalogue::{builtin, QuestionCatalogue, SectionCatalogue};

/// Helper: build the test app over the built-in catalogue.
fn test_app() -> axum::Router {
    let state = AppState::builtin().unwrap();
    tcg_api::app(state)
}

fn fingerprint() -> String {
    AppState::builtin().unwrap().questions.fingerprint().to_hex()
}

async fn body_string(response: axum::http::Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

async fn body_json(response: axum::http::Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(body).unwrap()))
        .unwrap()
}

// -- Health Probes ------------------------------------------------------------

#[tokio::test]
async fn test_liveness_probe() {
    let response = test_app().oneshot(get("/health/liveness")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "ok");
}

#[tokio::test]
async fn test_readiness_probe() {
    let response = test_app().oneshot(get("/health/readiness")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "ready");
}

#[tokio::test]
async fn test_readiness_unavailable_without_questions() {
    let state = AppState::new(
        QuestionCatalogue::new(vec![], vec![]).unwrap(),
        builtin::sections().unwrap(),
    );
    let response = tcg_api::app(state)
        .oneshot(get("/health/readiness"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn test_readiness_unavailable_without_sections() {
    let state = AppState::new(
        builtin::questions().unwrap(),
        SectionCatalogue::new(vec![]).unwrap(),
    );
    let response = tcg_api::app(state)
        .oneshot(get("/health/readiness"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn test_liveness_unaffected_by_empty_catalogue() {
    let state = AppState::new(
        QuestionCatalogue::new(vec![], vec![]).unwrap(),
        SectionCatalogue::new(vec![]).unwrap(),
    );
    let response = tcg_api::app(state)
        .oneshot(get("/health/liveness"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

// -- Catalogue Endpoints ------------------------------------------------------

#[tokio::test]
async fn test_questionnaire_lists_steps_and_fingerprint() {
    let response = test_app().oneshot(get("/v1/questionnaire")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;

    assert_eq!(body["fingerprint"], fingerprint());
    let steps = body["steps"].as_array().unwrap();
    assert_eq!(steps.len(), 3);
    assert_eq!(steps[0]["index"], 0);
    assert_eq!(steps[0]["questions"][0]["id"], "owns_network");
    assert_eq!(steps[0]["questions"][0]["input"], "boolean");
    assert!(steps[1]["questions"][0]["answerToBusinessTypes"].is_object());
}

#[tokio::test]
async fn test_sections_in_catalogue_order() {
    let response = test_app().oneshot(get("/v1/sections")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let sections = body.as_array().unwrap();
    assert_eq!(sections.len(), 15);
    assert_eq!(sections[0]["slug"], "carrier-licensing");
    assert_eq!(sections[0]["baseline"], "ALWAYS_REQUIRED");
    assert_eq!(sections[0]["applicableTo"], json!(["carrier"]));
}

#[tokio::test]
async fn test_get_single_section() {
    let response = test_app()
        .oneshot(get("/v1/sections/content-regulation"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["category"], "content");
}

#[tokio::test]
async fn test_get_unknown_section_returns_404() {
    let response = test_app()
        .oneshot(get("/v1/sections/spectrum-auctions"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

// -- Assessments --------------------------------------------------------------

#[tokio::test]
async fn test_assessment_for_carrier() {
    let request = json!({
        "answers": {
            "owns_network": true,
            "services": ["internet-access"],
            "resells": "no"
        },
        "fingerprint": fingerprint()
    });
    let response = test_app()
        .oneshot(post_json("/v1/assessments", &request))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;

    assert_eq!(
        body["businessTypes"],
        json!(["carrier", "carriage-service-provider", "isp"])
    );
    let sections = body["sections"].as_array().unwrap();
    assert_eq!(sections.len(), 15);
    assert_eq!(sections[0]["slug"], "carrier-licensing");
    assert_eq!(sections[0]["priority"], "ALWAYS_REQUIRED");
    assert_eq!(body["questionnaireFingerprint"], fingerprint());
    assert!(body.get("contributions").is_none());
}

#[tokio::test]
async fn test_assessment_without_fingerprint_accepted() {
    let request = json!({ "answers": {} });
    let response = test_app()
        .oneshot(post_json("/v1/assessments", &request))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["businessTypes"], json!([]));
    assert!(body["sections"]
        .as_array()
        .unwrap()
        .iter()
        .all(|s| s["priority"] == "NOT_APPLICABLE"));
}

#[tokio::test]
async fn test_assessment_explain_includes_contributions() {
    let request = json!({
        "answers": { "mobile_services": "wholesale-access" },
        "explain": true
    });
    let response = test_app()
        .oneshot(post_json("/v1/assessments", &request))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let contributions = body["contributions"].as_array().unwrap();
    assert_eq!(contributions.len(), 1);
    assert_eq!(contributions[0]["questionId"], "mobile_services");
    assert_eq!(
        contributions[0]["businessTypes"],
        json!(["carriage-service-provider", "mvno"])
    );
}

#[tokio::test]
async fn test_unknown_question_returns_422() {
    let request = json!({ "answers": { "bogus_id": "yes" } });
    let response = test_app()
        .oneshot(post_json("/v1/assessments", &request))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "UNKNOWN_QUESTION");
}

#[tokio::test]
async fn test_scalar_for_multi_choice_returns_422() {
    let request = json!({ "answers": { "services": "voip" } });
    let response = test_app()
        .oneshot(post_json("/v1/assessments", &request))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "MALFORMED_ANSWER");
}

#[tokio::test]
async fn test_string_for_boolean_returns_422() {
    let request = json!({ "answers": { "owns_network": "true" } });
    let response = test_app()
        .oneshot(post_json("/v1/assessments", &request))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "MALFORMED_ANSWER");
}

#[tokio::test]
async fn test_numeric_answer_returns_422() {
    let request = json!({ "answers": { "resells": 1 } });
    let response = test_app()
        .oneshot(post_json("/v1/assessments", &request))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_stale_fingerprint_returns_409() {
    let request = json!({
        "answers": { "owns_network": true },
        "fingerprint": "0".repeat(64)
    });
    let response = test_app()
        .oneshot(post_json("/v1/assessments", &request))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "FINGERPRINT_MISMATCH");
}

#[tokio::test]
async fn test_prefixed_fingerprint_accepted() {
    let request = json!({
        "answers": { "owns_network": false },
        "fingerprint": format!("sha256:{}", fingerprint().to_uppercase())
    });
    let response = test_app()
        .oneshot(post_json("/v1/assessments", &request))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_malformed_json_returns_422() {
    let request = Request::builder()
        .method("POST")
        .uri("/v1/assessments")
        .header("content-type", "application/json")
        .body(Body::from("{\"answers\": "))
        .unwrap();
    let response = test_app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_unknown_request_field_returns_422() {
    let request = json!({ "answers": {}, "tenant": "acme" });
    let response = test_app()
        .oneshot(post_json("/v1/assessments", &request))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_oversized_body_returns_413() {
    let padding = "x".repeat(tcg_api::BODY_LIMIT_BYTES + 1);
    let request = json!({ "answers": { "resells": padding } });
    let response = test_app()
        .oneshot(post_json("/v1/assessments", &request))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn test_unknown_route_returns_404() {
    let response = test_app().oneshot(get("/v1/unknown")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
