use std::collections::BTreeSet;

use super::super::domain::{RoutingFactor, Tier};
use super::super::table::TierConfiguration;

/// Distinct factor suggestions exactly one step away from the final tier, ascending.
pub(crate) fn alternative_tiers(tier: Tier, factors: &[RoutingFactor]) -> Vec<Tier> {
    factors
        .iter()
        .map(|factor| factor.suggested_tier)
        .filter(|candidate| candidate.distance(tier) == 1)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Quote the heaviest supporting factors; fall back to a templated sentence when none agree.
pub(crate) fn compose_reason(tier: Tier, factors: &[RoutingFactor], config: &TierConfiguration) -> String {
    let mut supporting: Vec<&RoutingFactor> = factors
        .iter()
        .filter(|factor| factor.suggested_tier.distance(tier) <= 1)
        .collect();
    supporting.sort_by(|left, right| right.weight.total_cmp(&left.weight));

    let quoted: Vec<&str> = supporting
        .iter()
        .take(config.reason_factor_limit)
        .map(|factor| factor.description.as_str())
        .collect();

    if quoted.is_empty() {
        return format!(
            "{tier} ({}) recommended from the combined intake profile.",
            config.tier_name(tier)
        );
    }

    format!("{}.", quoted.join("; "))
}
