use super::super::domain::{BudgetInput, IntakeData, OverrideRule, ProjectType, Tier};
use super::super::table::TierConfiguration;

/// Apply the hard floors in fixed order. Every rule can only raise the tier.
pub(crate) fn apply_overrides(
    weighted: Tier,
    intake: &IntakeData,
    config: &TierConfiguration,
) -> (Tier, Vec<OverrideRule>) {
    let mut tier = weighted;
    let mut applied = Vec::new();

    if !intake.has_survey && !intake.has_drawings {
        tier = tier.max(Tier::Three);
        applied.push(OverrideRule::MissingAssets);
    }

    if intake.project_type.demands_full_service() {
        let floor = if intake.project_type == ProjectType::MultipleProperties {
            Tier::Four
        } else {
            Tier::Three
        };
        tier = tier.max(floor);
        applied.push(OverrideRule::ProjectScope);
    }

    if config
        .budget
        .amount_for(&intake.budget)
        .map(|amount| amount >= config.budget.tier_4_threshold())
        .unwrap_or(false)
    {
        tier = tier.max(Tier::Four);
        applied.push(OverrideRule::BudgetCeiling);
    }

    if intake.budget == BudgetInput::PercentageOfInstall {
        tier = Tier::Four;
        applied.push(OverrideRule::PercentagePricing);
    }

    (tier, applied)
}
