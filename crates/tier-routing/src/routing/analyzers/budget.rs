use super::super::domain::{BudgetInput, FactorCategory, RoutingFactor, Tier};
use super::super::table::TierConfiguration;
use super::{format_currency, NEUTRAL_TIER};

pub fn analyze_budget(budget: &BudgetInput, config: &TierConfiguration) -> RoutingFactor {
    let weights = &config.weights;

    let amount = match budget {
        BudgetInput::PercentageOfInstall => {
            return RoutingFactor {
                category: FactorCategory::Budget,
                suggested_tier: Tier::Four,
                weight: weights.budget,
                description: "percentage-of-install pricing requires a bespoke Tier 4 engagement"
                    .to_string(),
                degraded: false,
            };
        }
        BudgetInput::NotSure => {
            return degraded(
                config,
                format!("budget not provided; defaulting to {NEUTRAL_TIER} pending review"),
            );
        }
        BudgetInput::Unrecognized(label) => {
            return degraded(
                config,
                format!("unrecognized budget option '{label}'; defaulting to {NEUTRAL_TIER}"),
            );
        }
        other => match config.budget.amount_for(other) {
            Some(amount) => amount,
            None => return degraded(config, "budget could not be resolved".to_string()),
        },
    };

    let tier = config.budget.tier_for(amount);
    let source = match budget {
        BudgetInput::Range(range) => format!(
            "budget range {} (about {})",
            range.label(),
            format_currency(amount)
        ),
        _ => format!("budget {}", format_currency(amount)),
    };

    let description = match config.budget.bracket_bounds(tier) {
        (None, Some(upper)) => format!(
            "{source} falls in the {tier} bracket (under {})",
            format_currency(upper)
        ),
        (Some(lower), Some(upper)) => format!(
            "{source} falls in the {tier} bracket ({} to {})",
            format_currency(lower),
            format_currency(upper)
        ),
        (Some(lower), None) => format!(
            "{source} is at or above the {tier} threshold ({})",
            format_currency(lower)
        ),
        (None, None) => format!("{source} maps to {tier}"),
    };

    RoutingFactor {
        category: FactorCategory::Budget,
        suggested_tier: tier,
        weight: weights.budget,
        description,
        degraded: false,
    }
}

fn degraded(config: &TierConfiguration, description: String) -> RoutingFactor {
    RoutingFactor {
        category: FactorCategory::Budget,
        suggested_tier: NEUTRAL_TIER,
        weight: config.weights.budget_degraded,
        description,
        degraded: true,
    }
}
