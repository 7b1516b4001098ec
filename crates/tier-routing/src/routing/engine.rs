use std::sync::Arc;

use super::analyzers::{analyze_assets, analyze_budget, analyze_project_type, analyze_timeline};
use super::domain::{IntakeData, TierRecommendation};
use super::recommendation::aggregate;
use super::table::TierConfiguration;
use super::validation::{check_intake, InvalidInput};

/// Score an intake against a configuration table. Pure: no I/O, no logging, no shared state.
pub fn recommend_tier(
    intake: &IntakeData,
    config: &TierConfiguration,
) -> Result<TierRecommendation, InvalidInput> {
    check_intake(intake)?;

    let factors = [
        analyze_budget(&intake.budget, config),
        analyze_timeline(&intake.timeline_weeks, &intake.budget, config),
        analyze_project_type(&intake.project_type, config),
        analyze_assets(intake.has_survey, intake.has_drawings, config),
    ];

    Ok(aggregate(intake, factors, config))
}

/// Stateless engine bound to one configuration snapshot.
#[derive(Debug, Clone)]
pub struct TierRecommendationEngine {
    config: Arc<TierConfiguration>,
}

impl TierRecommendationEngine {
    pub fn new(config: TierConfiguration) -> Self {
        Self::from_snapshot(Arc::new(config))
    }

    pub fn from_snapshot(config: Arc<TierConfiguration>) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TierConfiguration {
        &self.config
    }

    pub fn recommend(&self, intake: &IntakeData) -> Result<TierRecommendation, InvalidInput> {
        recommend_tier(intake, &self.config)
    }
}

impl Default for TierRecommendationEngine {
    fn default() -> Self {
        Self::new(TierConfiguration::standard())
    }
}
