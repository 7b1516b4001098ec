use super::super::domain::{FactorCategory, ProjectType, RoutingFactor};
use super::super::table::TierConfiguration;
use super::NEUTRAL_TIER;

pub fn analyze_project_type(project_type: &ProjectType, config: &TierConfiguration) -> RoutingFactor {
    match config.project_rule(project_type) {
        Some(rule) => {
            let mut description = format!(
                "project type {} starts at {}",
                project_type, rule.minimum_tier
            );
            if rule.requires_site_visit {
                description.push_str("; site visit required");
            }
            RoutingFactor {
                category: FactorCategory::ProjectType,
                suggested_tier: rule.minimum_tier,
                weight: config.weights.project_type,
                description,
                degraded: false,
            }
        }
        None => RoutingFactor {
            category: FactorCategory::ProjectType,
            suggested_tier: NEUTRAL_TIER,
            weight: config.weights.project_type_unknown,
            description: format!(
                "unrecognized project type '{project_type}'; defaulting to {NEUTRAL_TIER}"
            ),
            degraded: true,
        },
    }
}
