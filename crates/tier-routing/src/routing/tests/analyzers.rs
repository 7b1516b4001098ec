use super::common::*;
use crate::routing::analyzers::{
    analyze_assets, analyze_budget, analyze_project_type, analyze_timeline,
};
use crate::routing::domain::{
    BudgetInput, BudgetRange, FactorCategory, ProjectType, Tier, TimelineCategory, TimelineInput,
};

#[test]
fn budget_on_a_breakpoint_belongs_to_the_higher_bracket() {
    let config = config();

    let below = analyze_budget(&BudgetInput::Amount(4_999.0), &config);
    let on = analyze_budget(&BudgetInput::Amount(5_000.0), &config);

    assert_eq!(below.suggested_tier, Tier::One);
    assert_eq!(on.suggested_tier, Tier::Two);
    assert_eq!(on.category, FactorCategory::Budget);
    assert_eq!(on.weight, config.weights.budget);
    assert!(on.description.contains("$5,000 to $15,000"));
}

#[test]
fn budget_above_top_breakpoint_is_tier_four() {
    let config = config();

    let factor = analyze_budget(&BudgetInput::Amount(50_000.0), &config);

    assert_eq!(factor.suggested_tier, Tier::Four);
    assert!(factor.description.contains("at or above"));
    assert!(factor.description.contains("$50,000"));
}

#[test]
fn budget_ranges_map_through_the_table() {
    let config = config();

    let factor = analyze_budget(&BudgetInput::Range(BudgetRange::From5kTo15k), &config);

    assert_eq!(factor.suggested_tier, Tier::Two);
    assert!(factor.description.contains("5k_15k"));
    assert!(!factor.degraded);
}

#[test]
fn percentage_pricing_signals_tier_four() {
    let factor = analyze_budget(&BudgetInput::PercentageOfInstall, &config());

    assert_eq!(factor.suggested_tier, Tier::Four);
    assert!(!factor.degraded);
}

#[test]
fn unsure_budget_degrades_to_a_third_of_the_weight() {
    let config = config();

    let factor = analyze_budget(&BudgetInput::NotSure, &config);

    assert_eq!(factor.suggested_tier, Tier::Two);
    assert!(factor.degraded);
    assert!((factor.weight - config.weights.budget / 3.0).abs() < f64::EPSILON);
}

#[test]
fn timeline_classifies_fast_standard_and_extended() {
    let config = config();
    let budget = BudgetInput::Amount(3_000.0);

    let tier_for = |weeks: f64| {
        analyze_timeline(&TimelineInput::Weeks(weeks), &budget, &config).suggested_tier
    };

    assert_eq!(tier_for(2.0), Tier::One);
    assert_eq!(tier_for(4.0), Tier::Two);
    assert_eq!(tier_for(12.0), Tier::Two);
    assert_eq!(tier_for(13.0), Tier::Three);
}

#[test]
fn timeline_categories_use_configured_weeks() {
    let config = config();
    let budget = BudgetInput::Amount(3_000.0);

    let asap = analyze_timeline(
        &TimelineInput::Category(TimelineCategory::Asap),
        &budget,
        &config,
    );
    let long = analyze_timeline(
        &TimelineInput::Category(TimelineCategory::SixPlusMonths),
        &budget,
        &config,
    );

    assert_eq!(asap.suggested_tier, Tier::One);
    assert_eq!(long.suggested_tier, Tier::Three);
}

#[test]
fn fast_timeline_against_high_budget_is_reported_not_overridden() {
    let config = config();

    let factor = analyze_timeline(
        &TimelineInput::Weeks(1.0),
        &BudgetInput::Amount(20_000.0),
        &config,
    );

    assert_eq!(factor.suggested_tier, Tier::One);
    assert!(factor.degraded);
    assert_eq!(factor.weight, config.weights.timeline_degraded);
    assert!(factor.description.contains("conflicts with a Tier 3 budget"));
}

#[test]
fn flexible_timeline_is_neutral_and_degraded() {
    let factor = analyze_timeline(
        &TimelineInput::Flexible,
        &BudgetInput::Amount(3_000.0),
        &config(),
    );

    assert_eq!(factor.suggested_tier, Tier::Two);
    assert!(factor.degraded);
}

#[test]
fn project_type_notes_site_visits() {
    let config = config();

    let new_build = analyze_project_type(&ProjectType::NewBuild, &config);
    let renovation = analyze_project_type(&ProjectType::StandardRenovation, &config);

    assert_eq!(new_build.suggested_tier, Tier::Three);
    assert!(new_build.description.contains("site visit required"));
    assert_eq!(renovation.suggested_tier, Tier::Two);
    assert!(!renovation.description.contains("site visit"));
}

#[test]
fn unknown_project_type_is_named_and_down_weighted() {
    let config = config();

    let factor = analyze_project_type(&ProjectType::from("treehouse"), &config);

    assert_eq!(factor.suggested_tier, Tier::Two);
    assert_eq!(factor.weight, config.weights.project_type_unknown);
    assert!(factor.weight < config.weights.project_type);
    assert!(factor.degraded);
    assert!(factor.description.contains("treehouse"));
}

#[test]
fn assets_branch_on_survey_and_drawings() {
    let config = config();

    let both = analyze_assets(true, true, &config);
    let survey = analyze_assets(true, false, &config);
    let drawings = analyze_assets(false, true, &config);
    let neither = analyze_assets(false, false, &config);

    assert_eq!(both.suggested_tier, Tier::One);
    assert_eq!(survey.suggested_tier, Tier::Two);
    assert_eq!(drawings.suggested_tier, Tier::Two);
    assert_eq!(neither.suggested_tier, Tier::Three);
    assert!(survey.description.contains("survey provided"));
    assert!(drawings.description.contains("drawings provided"));
    assert!(neither.description.contains("site visit required"));
    assert_eq!(neither.weight, config.weights.assets_missing);
}
