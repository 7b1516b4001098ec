mod confidence;
mod overrides;
mod red_flags;
mod summary;

pub use red_flags::RedFlag;

use super::domain::{
    Confidence, IntakeData, RoutingDisposition, RoutingFactor, Tier, TierRecommendation,
};
use super::table::TierConfiguration;
use confidence::assess_confidence;
use overrides::apply_overrides;
use red_flags::detect_red_flags;
use summary::{alternative_tiers, compose_reason};

/// Combine the four analyzer outputs into one recommendation in a single pass.
pub(crate) fn aggregate(
    intake: &IntakeData,
    factors: [RoutingFactor; 4],
    config: &TierConfiguration,
) -> TierRecommendation {
    let weighted = weighted_tier(&factors);
    let (tier, overrides_applied) = apply_overrides(weighted, intake, config);

    let confidence = assess_confidence(tier, &factors, &config.confidence);
    let red_flags: Vec<String> = detect_red_flags(intake, config)
        .into_iter()
        .map(|flag| flag.message().to_string())
        .collect();

    let definition = config.definition(tier);
    let needs_manual_review = tier == Tier::Four
        || confidence == Confidence::Low
        || !red_flags.is_empty()
        || definition
            .map(|definition| definition.requires_manual_review)
            .unwrap_or(true);

    let disposition = if needs_manual_review {
        RoutingDisposition::ManualReview
    } else if definition.map(|definition| definition.auto_routable).unwrap_or(false) {
        RoutingDisposition::AutoRouted
    } else {
        RoutingDisposition::ConsultationRequired
    };

    let reason = compose_reason(tier, &factors, config);
    let alternative_tiers = alternative_tiers(tier, &factors);

    TierRecommendation {
        tier,
        tier_name: config.tier_name(tier),
        reason,
        confidence,
        needs_manual_review,
        disposition,
        factors: factors.into(),
        red_flags,
        alternative_tiers,
        overrides_applied,
    }
}

/// `round(Σ(tier × weight) / Σ(weight))`, rounding half away from zero, clamped to `[1, 4]`.
pub(crate) fn weighted_tier(factors: &[RoutingFactor]) -> Tier {
    let total_weight: f64 = factors.iter().map(|factor| factor.weight).sum();
    if total_weight <= 0.0 || !total_weight.is_finite() {
        return super::analyzers::NEUTRAL_TIER;
    }

    let weighted_sum: f64 = factors
        .iter()
        .map(|factor| f64::from(factor.suggested_tier.number()) * factor.weight)
        .sum();

    Tier::clamped((weighted_sum / total_weight).round() as i64)
}
