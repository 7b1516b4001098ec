use super::common::*;
use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use crate::routing::domain::Tier;

fn json_request(method: Method, uri: &str, payload: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(payload).expect("payload serializes")))
        .expect("request builds")
}

#[tokio::test]
async fn recommendation_route_returns_envelope() {
    let router = router_with_store(store());

    let response = router
        .oneshot(json_request(
            Method::POST,
            "/api/v1/intake/recommendation",
            &fast_track_payload(),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["recommendation"]["tier"], json!(1));
    assert_eq!(payload["recommendation"]["confidence"], json!("high"));
    assert_eq!(payload["recommendation"]["needs_manual_review"], json!(false));
    assert_eq!(payload["disposition"], json!("auto_routed"));
    assert!(payload.get("evaluated_at").is_some());
    assert_eq!(
        payload["recommendation"]["factors"]
            .as_array()
            .map(Vec::len),
        Some(4)
    );
}

#[tokio::test]
async fn recommendation_route_accepts_form_labels() {
    let router = router_with_store(store());
    let mut payload = fast_track_payload();
    payload["budget"] = json!("50k_plus");
    payload["timeline_weeks"] = json!("3_6_months");
    payload["project_type"] = json!("new_build");

    let response = router
        .oneshot(json_request(
            Method::POST,
            "/api/v1/intake/recommendation",
            &payload,
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["recommendation"]["tier"], json!(Tier::Four.number()));
    assert_eq!(body["disposition"], json!("manual_review"));
}

#[tokio::test]
async fn recommendation_route_rejects_incomplete_intake() {
    let router = router_with_store(store());
    let mut payload = fast_track_payload();
    payload
        .as_object_mut()
        .expect("payload is an object")
        .remove("has_survey");
    payload["budget"] = json!(-200);

    let response = router
        .oneshot(json_request(
            Method::POST,
            "/api/v1/intake/recommendation",
            &payload,
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = read_json_body(response).await;
    assert_eq!(body["fields"], json!(["budget", "has_survey"]));
}

#[tokio::test]
async fn recommendation_route_scores_without_contact_details() {
    let router = router_with_store(store());
    let mut payload = fast_track_payload();
    let fields = payload.as_object_mut().expect("payload is an object");
    fields.remove("name");
    fields.remove("email");
    fields.remove("project_address");

    let response = router
        .oneshot(json_request(
            Method::POST,
            "/api/v1/intake/recommendation",
            &payload,
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["recommendation"]["tier"], json!(1));
}

#[tokio::test]
async fn recommendation_route_rejects_negative_numeric_text() {
    let router = router_with_store(store());
    let mut payload = fast_track_payload();
    payload["budget"] = json!("-5000");

    let response = router
        .oneshot(json_request(
            Method::POST,
            "/api/v1/intake/recommendation",
            &payload,
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = read_json_body(response).await;
    assert_eq!(body["fields"], json!(["budget"]));
}

#[tokio::test]
async fn validate_route_reports_missing_fields() {
    let router = router_with_store(store());

    let response = router
        .oneshot(json_request(
            Method::POST,
            "/api/v1/intake/validate",
            &json!({ "budget": 4000, "email": "not-an-address" }),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["valid"], json!(false));
    assert_eq!(
        body["fields"],
        json!([
            "timeline_weeks",
            "project_type",
            "has_survey",
            "has_drawings",
            "name",
            "email",
            "project_address"
        ])
    );
}

#[tokio::test]
async fn tiers_route_lists_definitions() {
    let router = router_with_store(store());

    let response = router
        .oneshot(
            Request::get("/api/v1/tiers")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    let tiers = body.as_array().expect("array of tiers");
    assert_eq!(tiers.len(), 4);
    assert_eq!(tiers[3]["tier"], json!(4));
    assert_eq!(tiers[3]["requires_manual_review"], json!(true));
}

#[tokio::test]
async fn configuration_route_swaps_valid_tables() {
    let store = store();
    let mut table = config();
    table.reason_factor_limit = 3;
    let payload = serde_json::to_value(&table).expect("table serializes");

    let response = router_with_store(store.clone())
        .oneshot(json_request(
            Method::PUT,
            "/api/v1/tiers/configuration",
            &payload,
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(store.snapshot().reason_factor_limit, 3);
}

#[tokio::test]
async fn configuration_route_rejects_invalid_tables() {
    let store = store();
    let mut table = config();
    table.budget.tier_2_below = 1_000.0;
    let payload = serde_json::to_value(&table).expect("table serializes");

    let response = router_with_store(store.clone())
        .oneshot(json_request(
            Method::PUT,
            "/api/v1/tiers/configuration",
            &payload,
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = read_json_body(response).await;
    assert!(body["error"]
        .as_str()
        .unwrap_or_default()
        .contains("budget breakpoints"));
    assert_eq!(store.snapshot().budget.tier_2_below, 15_000.0);
}
