use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::json;
use tracing::{info, warn};

use super::domain::{RoutingDisposition, TierRecommendation};
use super::store::TierConfigurationStore;
use super::table::{TierConfiguration, TierDefinition};
use super::validation::{missing_scoring_fields, validate_intake, IntakeDraft};

/// Router builder exposing intake scoring and tier-table endpoints.
pub fn intake_router(store: Arc<TierConfigurationStore>) -> Router {
    Router::new()
        .route(
            "/api/v1/intake/recommendation",
            post(recommendation_handler),
        )
        .route("/api/v1/intake/validate", post(validate_handler))
        .route("/api/v1/tiers", get(tiers_handler))
        .route(
            "/api/v1/tiers/configuration",
            put(replace_configuration_handler),
        )
        .with_state(store)
}

/// Response envelope handed back to the intake caller.
#[derive(Debug, Serialize)]
pub struct RecommendationResponse {
    pub recommendation: TierRecommendation,
    pub disposition: RoutingDisposition,
    pub evaluated_at: DateTime<Utc>,
}

pub(crate) async fn recommendation_handler(
    State(store): State<Arc<TierConfigurationStore>>,
    Json(draft): Json<IntakeDraft>,
) -> Response {
    let missing = missing_scoring_fields(&draft);
    if !missing.is_empty() {
        warn!(fields = ?missing, "intake rejected by pre-flight validation");
        let payload = json!({
            "error": "intake is incomplete",
            "fields": missing,
        });
        return (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response();
    }

    let engine = store.engine();
    let outcome = draft
        .into_intake()
        .and_then(|intake| engine.recommend(&intake));

    match outcome {
        Ok(recommendation) => {
            info!(
                tier = recommendation.tier.number(),
                confidence = recommendation.confidence.label(),
                needs_manual_review = recommendation.needs_manual_review,
                red_flags = recommendation.red_flags.len(),
                "tier recommendation issued"
            );
            let response = RecommendationResponse {
                disposition: recommendation.disposition,
                recommendation,
                evaluated_at: Utc::now(),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(error) => {
            warn!(field = error.field, %error, "intake failed structural checks");
            let payload = json!({
                "error": error.to_string(),
                "fields": [error.field],
            });
            (StatusCode::BAD_REQUEST, Json(payload)).into_response()
        }
    }
}

pub(crate) async fn validate_handler(Json(draft): Json<IntakeDraft>) -> Response {
    let fields = validate_intake(&draft);
    let payload = json!({
        "valid": fields.is_empty(),
        "fields": fields,
    });
    (StatusCode::OK, Json(payload)).into_response()
}

pub(crate) async fn tiers_handler(
    State(store): State<Arc<TierConfigurationStore>>,
) -> Json<Vec<TierDefinition>> {
    Json(store.snapshot().tiers.clone())
}

pub(crate) async fn replace_configuration_handler(
    State(store): State<Arc<TierConfigurationStore>>,
    Json(config): Json<TierConfiguration>,
) -> Response {
    match store.replace(config) {
        Ok(_) => {
            info!("tier configuration replaced");
            let payload = json!({ "status": "replaced" });
            (StatusCode::OK, Json(payload)).into_response()
        }
        Err(error) => {
            warn!(%error, "rejected tier configuration");
            let payload = json!({ "error": error.to_string() });
            (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
        }
    }
}
