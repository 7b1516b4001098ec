use super::super::domain::{IntakeData, ProjectType, Tier};
use super::super::table::TierConfiguration;

/// Policy-relevant conditions that keep an intake away from automated routing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedFlag {
    BudgetBelowMinimum,
    FastTimelineComplexProject,
    FastTimelineWithoutAssets,
    ComplexScopeUnderfunded,
    HighBudgetFastTimeline,
    MultipleProperties,
}

impl RedFlag {
    pub const fn message(self) -> &'static str {
        match self {
            RedFlag::BudgetBelowMinimum => "Budget is below the minimum engagement threshold",
            RedFlag::FastTimelineComplexProject => {
                "Fast timeline requested for a complex project type"
            }
            RedFlag::FastTimelineWithoutAssets => {
                "Fast timeline requested without a survey or drawings"
            }
            RedFlag::ComplexScopeUnderfunded => {
                "Complex or multi-property project with a budget below Tier 3"
            }
            RedFlag::HighBudgetFastTimeline => {
                "High budget paired with a fast timeline; scope and schedule may not align"
            }
            RedFlag::MultipleProperties => "Multiple properties require a bespoke engagement",
        }
    }
}

/// Evaluate the fixed checklist against the raw intake. Flags never suppress each other.
pub(crate) fn detect_red_flags(intake: &IntakeData, config: &TierConfiguration) -> Vec<RedFlag> {
    let mut flags = Vec::new();

    let amount = config.budget.amount_for(&intake.budget);
    let budget_tier = config.budget.budget_tier(&intake.budget);
    let fast = config.timeline.is_fast(&intake.timeline_weeks);
    let no_assets = !intake.has_survey && !intake.has_drawings;

    if amount
        .map(|amount| amount < config.budget.minimum)
        .unwrap_or(false)
    {
        flags.push(RedFlag::BudgetBelowMinimum);
    }

    if fast && intake.project_type.is_schedule_sensitive() {
        flags.push(RedFlag::FastTimelineComplexProject);
    }

    if fast && no_assets {
        flags.push(RedFlag::FastTimelineWithoutAssets);
    }

    if intake.project_type.is_complex_scope()
        && budget_tier.map(|tier| tier < Tier::Three).unwrap_or(false)
    {
        flags.push(RedFlag::ComplexScopeUnderfunded);
    }

    if fast && budget_tier.map(|tier| tier >= Tier::Three).unwrap_or(false) {
        flags.push(RedFlag::HighBudgetFastTimeline);
    }

    if intake.project_type == ProjectType::MultipleProperties {
        flags.push(RedFlag::MultipleProperties);
    }

    flags
}
