use super::super::domain::{FactorCategory, RoutingFactor};
use super::super::table::TierConfiguration;

pub fn analyze_assets(has_survey: bool, has_drawings: bool, config: &TierConfiguration) -> RoutingFactor {
    let weights = &config.weights;
    let tier = config.assets.tier_for(has_survey, has_drawings);

    let (weight, description) = match (has_survey, has_drawings) {
        (true, true) => (
            weights.assets_complete,
            format!("survey and drawings provided; fastest path via {tier}"),
        ),
        (true, false) => (
            weights.assets_partial,
            format!("survey provided without drawings; suits {tier}"),
        ),
        (false, true) => (
            weights.assets_partial,
            format!("drawings provided without a survey; suits {tier}"),
        ),
        (false, false) => (
            weights.assets_missing,
            format!("no survey or drawings; site visit required ({tier})"),
        ),
    };

    RoutingFactor {
        category: FactorCategory::Assets,
        suggested_tier: tier,
        weight,
        description,
        degraded: false,
    }
}
