use super::super::domain::{BudgetInput, FactorCategory, RoutingFactor, Tier, TimelineInput};
use super::super::table::{TierConfiguration, TimelinePace};
use super::{format_weeks, NEUTRAL_TIER};

/// Classify the desired timeline. The budget is consulted only through the table's own bracket
/// lookup so a fast timeline against a Tier 3+ budget can be reported as a mismatch.
pub fn analyze_timeline(
    timeline: &TimelineInput,
    budget: &BudgetInput,
    config: &TierConfiguration,
) -> RoutingFactor {
    let weights = &config.weights;

    let weeks = match (timeline, config.timeline.weeks_for(timeline)) {
        (_, Some(weeks)) => weeks,
        (TimelineInput::Unrecognized(label), None) => {
            return degraded(
                config,
                format!("unrecognized timeline option '{label}'; defaulting to {NEUTRAL_TIER}"),
            );
        }
        (_, None) => {
            return degraded(
                config,
                format!("flexible timeline gives no pacing signal; defaulting to {NEUTRAL_TIER}"),
            );
        }
    };

    let pace = config.timeline.classify(weeks);
    let tier = pace.suggested_tier();
    let budget_tier = config.budget.budget_tier(budget);

    if let (TimelinePace::Fast, Some(budget_tier)) = (pace, budget_tier) {
        if budget_tier >= Tier::Three {
            return RoutingFactor {
                category: FactorCategory::Timeline,
                suggested_tier: tier,
                weight: weights.timeline_degraded,
                description: format!(
                    "fast timeline ({}) conflicts with a {budget_tier} budget; feasibility needs review",
                    format_weeks(weeks)
                ),
                degraded: true,
            };
        }
    }

    RoutingFactor {
        category: FactorCategory::Timeline,
        suggested_tier: tier,
        weight: weights.timeline,
        description: format!(
            "{} timeline ({}) suits {tier}",
            pace.label(),
            format_weeks(weeks)
        ),
        degraded: false,
    }
}

fn degraded(config: &TierConfiguration, description: String) -> RoutingFactor {
    RoutingFactor {
        category: FactorCategory::Timeline,
        suggested_tier: NEUTRAL_TIER,
        weight: config.weights.timeline_degraded,
        description,
        degraded: true,
    }
}
