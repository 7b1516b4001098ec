use std::sync::Arc;

use axum::response::Response;
use serde_json::{json, Value};

use crate::routing::domain::{BudgetInput, IntakeData, ProjectType, TimelineInput};
use crate::routing::validation::IntakeDraft;
use crate::routing::{intake_router, TierConfiguration, TierConfigurationStore};

pub(super) fn config() -> TierConfiguration {
    TierConfiguration::standard()
}

pub(super) fn intake(
    budget: f64,
    weeks: f64,
    project_type: ProjectType,
    has_survey: bool,
    has_drawings: bool,
) -> IntakeData {
    IntakeData {
        budget: BudgetInput::Amount(budget),
        timeline_weeks: TimelineInput::Weeks(weeks),
        project_type,
        has_survey,
        has_drawings,
        project_address: "14 Orchard Lane".to_string(),
        email: "client@example.com".to_string(),
        name: "Sam Rivera".to_string(),
    }
}

pub(super) fn fast_track_intake() -> IntakeData {
    intake(3_000.0, 2.0, ProjectType::ConsultationOnly, true, true)
}

pub(super) fn complete_draft() -> IntakeDraft {
    IntakeDraft {
        budget: Some(BudgetInput::Amount(3_000.0)),
        timeline_weeks: Some(TimelineInput::Weeks(2.0)),
        project_type: Some(ProjectType::ConsultationOnly),
        has_survey: Some(true),
        has_drawings: Some(true),
        name: Some("Sam Rivera".to_string()),
        email: Some("client@example.com".to_string()),
        project_address: Some("14 Orchard Lane".to_string()),
    }
}

pub(super) fn fast_track_payload() -> Value {
    json!({
        "budget": 3000,
        "timeline_weeks": 2,
        "project_type": "consultation_only",
        "has_survey": true,
        "has_drawings": true,
        "name": "Sam Rivera",
        "email": "client@example.com",
        "project_address": "14 Orchard Lane"
    })
}

pub(super) fn store() -> Arc<TierConfigurationStore> {
    Arc::new(TierConfigurationStore::default())
}

pub(super) fn router_with_store(store: Arc<TierConfigurationStore>) -> axum::Router {
    intake_router(store)
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
