use clap::Args;
use std::io::Read;
use std::path::PathBuf;
use tier_routing::config::RoutingConfig;
use tier_routing::error::AppError;
use tier_routing::routing::{
    validate_intake, BudgetInput, BudgetRange, IntakeData, IntakeDraft, ProjectType,
    TierConfiguration, TierRecommendation, TierRecommendationEngine, TimelineCategory,
    TimelineInput,
};

#[derive(Args, Debug)]
pub(crate) struct RecommendArgs {
    /// Intake JSON document. Reads stdin when omitted.
    #[arg(long)]
    pub(crate) input: Option<PathBuf>,
    /// Tier configuration table (JSON). Defaults to the standard rule set.
    #[arg(long)]
    pub(crate) config: Option<PathBuf>,
    /// Print a human-readable summary instead of JSON
    #[arg(long)]
    pub(crate) summary: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct TiersArgs {
    /// Tier configuration table (JSON). Defaults to the standard rule set.
    #[arg(long)]
    pub(crate) config: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Tier configuration table (JSON). Defaults to the standard rule set.
    #[arg(long)]
    pub(crate) config: Option<PathBuf>,
    /// Include every factor verdict in the output
    #[arg(long)]
    pub(crate) show_factors: bool,
}

pub(crate) fn run_recommend(args: RecommendArgs) -> Result<(), AppError> {
    let RecommendArgs {
        input,
        config,
        summary,
    } = args;

    let raw = match input {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };
    let draft: IntakeDraft = serde_json::from_str(&raw)?;

    let missing = validate_intake(&draft);
    if !missing.is_empty() {
        eprintln!("warning: intake is incomplete ({})", missing.join(", "));
    }

    let engine = TierRecommendationEngine::new(load_table(config)?);
    let recommendation = engine.recommend(&draft.into_intake()?)?;

    if summary {
        render_recommendation(&recommendation, true);
    } else {
        println!("{}", serde_json::to_string_pretty(&recommendation)?);
    }
    Ok(())
}

pub(crate) fn run_tiers(args: TiersArgs) -> Result<(), AppError> {
    let table = load_table(args.config)?;

    println!("Service tiers");
    for definition in &table.tiers {
        let routing = if definition.requires_manual_review {
            "manual review"
        } else if definition.auto_routable {
            "auto-routed"
        } else {
            "consultation"
        };
        println!("- {} {}: {}", definition.tier, definition.name, routing);
    }
    println!(
        "Budget brackets: Tier 1 < ${:.0} | Tier 2 < ${:.0} | Tier 3 < ${:.0} | minimum ${:.0}",
        table.budget.tier_1_below,
        table.budget.tier_2_below,
        table.budget.tier_3_below,
        table.budget.minimum
    );
    println!(
        "Timeline: fast under {} weeks | extended over {} weeks",
        table.timeline.fast_below_weeks, table.timeline.extended_above_weeks
    );
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        config,
        show_factors,
    } = args;

    let table = load_table(config)?;
    let engine = TierRecommendationEngine::new(table);

    println!("Tier routing demo");
    for (title, intake) in demo_intakes() {
        println!("\n{title}");
        match engine.recommend(&intake) {
            Ok(recommendation) => render_recommendation(&recommendation, show_factors),
            Err(err) => println!("  Intake rejected: {err}"),
        }
    }

    Ok(())
}

fn load_table(table_path: Option<PathBuf>) -> Result<TierConfiguration, AppError> {
    Ok(RoutingConfig { table_path }.load_table()?)
}

fn render_recommendation(recommendation: &TierRecommendation, show_factors: bool) {
    println!(
        "- {} ({}) | confidence {} | {}",
        recommendation.tier,
        recommendation.tier_name,
        recommendation.confidence.label(),
        recommendation.disposition.label()
    );
    println!("  Reason: {}", recommendation.reason);

    if !recommendation.alternative_tiers.is_empty() {
        let alternatives: Vec<String> = recommendation
            .alternative_tiers
            .iter()
            .map(ToString::to_string)
            .collect();
        println!("  Alternatives: {}", alternatives.join(", "));
    }
    for rule in &recommendation.overrides_applied {
        println!("  Override: {}", rule.summary());
    }
    for flag in &recommendation.red_flags {
        println!("  Red flag: {flag}");
    }

    if show_factors {
        println!("  Factors:");
        for factor in &recommendation.factors {
            println!(
                "    - {}: {} (weight {:.1}{}) {}",
                factor.category.label(),
                factor.suggested_tier,
                factor.weight,
                if factor.degraded { ", degraded" } else { "" },
                factor.description
            );
        }
    }
}

fn demo_intakes() -> Vec<(&'static str, IntakeData)> {
    vec![
        (
            "Consultation with survey and drawings on file",
            demo_intake(
                BudgetInput::Amount(3_000.0),
                TimelineInput::Weeks(2.0),
                ProjectType::ConsultationOnly,
                (true, true),
            ),
        ),
        (
            "Renovation with no survey or drawings",
            demo_intake(
                BudgetInput::Amount(8_000.0),
                TimelineInput::Weeks(6.0),
                ProjectType::StandardRenovation,
                (false, false),
            ),
        ),
        (
            "Portfolio of properties on a mid-range budget",
            demo_intake(
                BudgetInput::Range(BudgetRange::From5kTo15k),
                TimelineInput::Category(TimelineCategory::OneToThreeMonths),
                ProjectType::MultipleProperties,
                (true, true),
            ),
        ),
        (
            "Well-funded renovation on a one-week schedule",
            demo_intake(
                BudgetInput::Amount(20_000.0),
                TimelineInput::Weeks(1.0),
                ProjectType::StandardRenovation,
                (true, true),
            ),
        ),
        (
            "Percentage-of-install pricing for a new build",
            demo_intake(
                BudgetInput::PercentageOfInstall,
                TimelineInput::Category(TimelineCategory::ThreeToSixMonths),
                ProjectType::NewBuild,
                (true, false),
            ),
        ),
    ]
}

fn demo_intake(
    budget: BudgetInput,
    timeline_weeks: TimelineInput,
    project_type: ProjectType,
    (has_survey, has_drawings): (bool, bool),
) -> IntakeData {
    IntakeData {
        budget,
        timeline_weeks,
        project_type,
        has_survey,
        has_drawings,
        project_address: "22 Harbour View".to_string(),
        email: "demo@example.com".to_string(),
        name: "Demo Client".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tier_routing::routing::Tier;

    #[test]
    fn table_loading_goes_through_routing_config() {
        let table = load_table(None).expect("standard table");
        assert_eq!(table, TierConfiguration::standard());

        match load_table(Some(PathBuf::from("/nonexistent/tiers.json"))) {
            Err(AppError::Config(_)) => {}
            other => panic!("expected config error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn demo_intakes_all_score_under_the_standard_table() {
        let engine = TierRecommendationEngine::new(TierConfiguration::standard());
        let tiers: Vec<Tier> = demo_intakes()
            .iter()
            .map(|(_, intake)| engine.recommend(intake).expect("demo intake is valid").tier)
            .collect();

        assert_eq!(
            tiers,
            vec![Tier::One, Tier::Three, Tier::Four, Tier::Two, Tier::Four]
        );
    }
}
