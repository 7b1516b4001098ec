use super::super::domain::{Confidence, RoutingFactor, Tier};
use super::super::table::ConfidencePolicy;

/// Agreement-based confidence. A heavy factor that misses the final tier by two or more forces
/// `Low`; any reduced-weight factor caps the result at `Medium`.
pub(crate) fn assess_confidence(
    tier: Tier,
    factors: &[RoutingFactor],
    policy: &ConfidencePolicy,
) -> Confidence {
    if factors.is_empty() {
        return Confidence::Low;
    }

    let agreeing = factors
        .iter()
        .filter(|factor| factor.suggested_tier.distance(tier) <= 1)
        .count();
    let ratio = agreeing as f64 / factors.len() as f64;

    let mut confidence = if ratio >= policy.high_ratio {
        Confidence::High
    } else if ratio >= policy.medium_ratio {
        Confidence::Medium
    } else {
        Confidence::Low
    };

    let contradicted = factors.iter().any(|factor| {
        factor.weight >= policy.high_importance_weight && factor.suggested_tier.distance(tier) >= 2
    });
    if contradicted {
        confidence = Confidence::Low;
    }

    if factors.iter().any(|factor| factor.degraded) {
        confidence = confidence.min(Confidence::Medium);
    }

    confidence
}
