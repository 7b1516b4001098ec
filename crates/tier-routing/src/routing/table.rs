use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::domain::{BudgetInput, BudgetRange, ProjectType, TimelineCategory, TimelineInput, Tier};

/// Errors raised while loading or validating a tier configuration table.
#[derive(Debug, thiserror::Error)]
pub enum TierTableError {
    #[error("budget breakpoints must be finite and strictly ascending (minimum < tier 1 < tier 2 < tier 3)")]
    BudgetBreakpoints,
    #[error("timeline breakpoints must be finite, positive, and fast <= extended")]
    TimelineBreakpoints,
    #[error("weight `{0}` must be a positive, finite number")]
    Weight(&'static str),
    #[error("mapped value `{0}` must be a finite, non-negative number")]
    MappedValue(&'static str),
    #[error("confidence ratios must satisfy 0 < medium <= high <= 1")]
    ConfidenceRatios,
    #[error("reason factor limit must be at least 1")]
    ReasonFactorLimit,
    #[error("{0} has no tier definition")]
    MissingTierDefinition(Tier),
    #[error("{0} is defined more than once")]
    DuplicateTierDefinition(Tier),
    #[error("Tier 4 must always require manual review")]
    TopTierAutoRouted,
    #[error("project type `{0}` is mapped more than once")]
    DuplicateProjectType(String),
    #[error("failed to read tier configuration from {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse tier configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Read-only table of thresholds, weights, and tier definitions driving every recommendation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierConfiguration {
    pub budget: BudgetThresholds,
    pub timeline: TimelineThresholds,
    pub project_types: Vec<ProjectTypeRule>,
    pub assets: AssetRules,
    pub weights: FactorWeights,
    pub confidence: ConfidencePolicy,
    /// Maximum number of factor descriptions quoted in the reason string.
    pub reason_factor_limit: usize,
    pub tiers: Vec<TierDefinition>,
}

/// Dollar breakpoints. Comparisons are `<`, so a budget equal to a breakpoint lands in the higher bracket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetThresholds {
    pub minimum: f64,
    pub tier_1_below: f64,
    pub tier_2_below: f64,
    pub tier_3_below: f64,
    pub ranges: BudgetRangeAmounts,
}

impl BudgetThresholds {
    pub fn tier_for(&self, amount: f64) -> Tier {
        if amount < self.tier_1_below {
            Tier::One
        } else if amount < self.tier_2_below {
            Tier::Two
        } else if amount < self.tier_3_below {
            Tier::Three
        } else {
            Tier::Four
        }
    }

    /// Numeric amount for inputs that carry one, either directly or through a range mapping.
    pub fn amount_for(&self, budget: &BudgetInput) -> Option<f64> {
        match budget {
            BudgetInput::Amount(amount) => Some(*amount),
            BudgetInput::Range(range) => Some(self.ranges.amount_for(*range)),
            _ => None,
        }
    }

    /// Budget tier used by the timeline analyzer and red-flag checks.
    pub fn budget_tier(&self, budget: &BudgetInput) -> Option<Tier> {
        match budget {
            BudgetInput::PercentageOfInstall => Some(Tier::Four),
            other => self.amount_for(other).map(|amount| self.tier_for(amount)),
        }
    }

    /// Tier 4 starts at the top breakpoint.
    pub fn tier_4_threshold(&self) -> f64 {
        self.tier_3_below
    }

    pub fn bracket_bounds(&self, tier: Tier) -> (Option<f64>, Option<f64>) {
        match tier {
            Tier::One => (None, Some(self.tier_1_below)),
            Tier::Two => (Some(self.tier_1_below), Some(self.tier_2_below)),
            Tier::Three => (Some(self.tier_2_below), Some(self.tier_3_below)),
            Tier::Four => (Some(self.tier_3_below), None),
        }
    }
}

/// Representative amounts for the intake form's budget options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetRangeAmounts {
    pub under_5k: f64,
    #[serde(rename = "5k_15k")]
    pub from_5k_to_15k: f64,
    #[serde(rename = "15k_50k")]
    pub from_15k_to_50k: f64,
    #[serde(rename = "50k_plus")]
    pub over_50k: f64,
}

impl BudgetRangeAmounts {
    fn entries(&self) -> [(&'static str, f64); 4] {
        [
            ("under_5k", self.under_5k),
            ("5k_15k", self.from_5k_to_15k),
            ("15k_50k", self.from_15k_to_50k),
            ("50k_plus", self.over_50k),
        ]
    }

    pub fn amount_for(&self, range: BudgetRange) -> f64 {
        match range {
            BudgetRange::Under5k => self.under_5k,
            BudgetRange::From5kTo15k => self.from_5k_to_15k,
            BudgetRange::From15kTo50k => self.from_15k_to_50k,
            BudgetRange::Over50k => self.over_50k,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimelinePace {
    Fast,
    Standard,
    Extended,
}

impl TimelinePace {
    pub const fn suggested_tier(self) -> Tier {
        match self {
            TimelinePace::Fast => Tier::One,
            TimelinePace::Standard => Tier::Two,
            TimelinePace::Extended => Tier::Three,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            TimelinePace::Fast => "fast",
            TimelinePace::Standard => "standard",
            TimelinePace::Extended => "extended",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineThresholds {
    pub fast_below_weeks: f64,
    pub extended_above_weeks: f64,
    pub categories: TimelineCategoryWeeks,
}

impl TimelineThresholds {
    pub fn classify(&self, weeks: f64) -> TimelinePace {
        if weeks < self.fast_below_weeks {
            TimelinePace::Fast
        } else if weeks > self.extended_above_weeks {
            TimelinePace::Extended
        } else {
            TimelinePace::Standard
        }
    }

    pub fn weeks_for(&self, timeline: &TimelineInput) -> Option<f64> {
        match timeline {
            TimelineInput::Weeks(weeks) => Some(*weeks),
            TimelineInput::Category(category) => Some(self.categories.weeks_for(*category)),
            _ => None,
        }
    }

    pub fn is_fast(&self, timeline: &TimelineInput) -> bool {
        self.weeks_for(timeline)
            .map(|weeks| self.classify(weeks) == TimelinePace::Fast)
            .unwrap_or(false)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineCategoryWeeks {
    pub asap: f64,
    #[serde(rename = "1_3_months")]
    pub one_to_three_months: f64,
    #[serde(rename = "3_6_months")]
    pub three_to_six_months: f64,
    #[serde(rename = "6_plus_months")]
    pub six_plus_months: f64,
}

impl TimelineCategoryWeeks {
    fn entries(&self) -> [(&'static str, f64); 4] {
        [
            ("asap", self.asap),
            ("1_3_months", self.one_to_three_months),
            ("3_6_months", self.three_to_six_months),
            ("6_plus_months", self.six_plus_months),
        ]
    }

    pub fn weeks_for(&self, category: TimelineCategory) -> f64 {
        match category {
            TimelineCategory::Asap => self.asap,
            TimelineCategory::OneToThreeMonths => self.one_to_three_months,
            TimelineCategory::ThreeToSixMonths => self.three_to_six_months,
            TimelineCategory::SixPlusMonths => self.six_plus_months,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectTypeRule {
    pub project_type: ProjectType,
    pub minimum_tier: Tier,
    pub requires_site_visit: bool,
}

/// Suggested tier for each combination of survey/drawings availability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetRules {
    pub both: Tier,
    pub survey_only: Tier,
    pub drawings_only: Tier,
    pub neither: Tier,
}

impl AssetRules {
    pub fn tier_for(&self, has_survey: bool, has_drawings: bool) -> Tier {
        match (has_survey, has_drawings) {
            (true, true) => self.both,
            (true, false) => self.survey_only,
            (false, true) => self.drawings_only,
            (false, false) => self.neither,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactorWeights {
    pub budget: f64,
    pub budget_degraded: f64,
    pub timeline: f64,
    pub timeline_degraded: f64,
    pub project_type: f64,
    pub project_type_unknown: f64,
    pub assets_complete: f64,
    pub assets_partial: f64,
    pub assets_missing: f64,
}

impl FactorWeights {
    fn entries(&self) -> [(&'static str, f64); 9] {
        [
            ("budget", self.budget),
            ("budget_degraded", self.budget_degraded),
            ("timeline", self.timeline),
            ("timeline_degraded", self.timeline_degraded),
            ("project_type", self.project_type),
            ("project_type_unknown", self.project_type_unknown),
            ("assets_complete", self.assets_complete),
            ("assets_partial", self.assets_partial),
            ("assets_missing", self.assets_missing),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfidencePolicy {
    pub high_ratio: f64,
    pub medium_ratio: f64,
    /// Factors at or above this weight force low confidence when they disagree by 2+ tiers.
    pub high_importance_weight: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierDefinition {
    pub tier: Tier,
    pub name: String,
    pub auto_routable: bool,
    pub requires_manual_review: bool,
}

impl TierConfiguration {
    /// Canonical rule set used when no override table is configured.
    pub fn standard() -> Self {
        Self {
            budget: BudgetThresholds {
                minimum: 2_500.0,
                tier_1_below: 5_000.0,
                tier_2_below: 15_000.0,
                tier_3_below: 50_000.0,
                ranges: BudgetRangeAmounts {
                    under_5k: 3_500.0,
                    from_5k_to_15k: 10_000.0,
                    from_15k_to_50k: 30_000.0,
                    over_50k: 75_000.0,
                },
            },
            timeline: TimelineThresholds {
                fast_below_weeks: 4.0,
                extended_above_weeks: 12.0,
                categories: TimelineCategoryWeeks {
                    asap: 2.0,
                    one_to_three_months: 8.0,
                    three_to_six_months: 20.0,
                    six_plus_months: 32.0,
                },
            },
            project_types: standard_project_types(),
            assets: AssetRules {
                both: Tier::One,
                survey_only: Tier::Two,
                drawings_only: Tier::Two,
                neither: Tier::Three,
            },
            weights: FactorWeights {
                budget: 3.0,
                budget_degraded: 1.0,
                timeline: 2.0,
                timeline_degraded: 1.0,
                project_type: 3.0,
                project_type_unknown: 1.0,
                assets_complete: 2.0,
                assets_partial: 1.5,
                assets_missing: 2.0,
            },
            confidence: ConfidencePolicy {
                high_ratio: 0.75,
                medium_ratio: 0.5,
                high_importance_weight: 3.0,
            },
            reason_factor_limit: 2,
            tiers: vec![
                TierDefinition {
                    tier: Tier::One,
                    name: "Essentials".to_string(),
                    auto_routable: true,
                    requires_manual_review: false,
                },
                TierDefinition {
                    tier: Tier::Two,
                    name: "Guided".to_string(),
                    auto_routable: true,
                    requires_manual_review: false,
                },
                TierDefinition {
                    tier: Tier::Three,
                    name: "Full Service".to_string(),
                    auto_routable: false,
                    requires_manual_review: false,
                },
                TierDefinition {
                    tier: Tier::Four,
                    name: "Bespoke".to_string(),
                    auto_routable: false,
                    requires_manual_review: true,
                },
            ],
        }
    }

    pub fn from_json_str(raw: &str) -> Result<Self, TierTableError> {
        let table: Self = serde_json::from_str(raw)?;
        table.validate()?;
        Ok(table)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, TierTableError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| TierTableError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    pub fn project_rule(&self, project_type: &ProjectType) -> Option<&ProjectTypeRule> {
        self.project_types
            .iter()
            .find(|rule| &rule.project_type == project_type)
    }

    pub fn definition(&self, tier: Tier) -> Option<&TierDefinition> {
        self.tiers.iter().find(|definition| definition.tier == tier)
    }

    pub fn tier_name(&self, tier: Tier) -> String {
        self.definition(tier)
            .map(|definition| definition.name.clone())
            .unwrap_or_else(|| tier.to_string())
    }

    pub fn validate(&self) -> Result<(), TierTableError> {
        let budget = &self.budget;
        let breakpoints = [
            budget.minimum,
            budget.tier_1_below,
            budget.tier_2_below,
            budget.tier_3_below,
        ];
        if breakpoints.iter().any(|value| !value.is_finite() || *value < 0.0)
            || breakpoints.windows(2).any(|pair| pair[0] >= pair[1])
        {
            return Err(TierTableError::BudgetBreakpoints);
        }

        let timeline = &self.timeline;
        if !timeline.fast_below_weeks.is_finite()
            || !timeline.extended_above_weeks.is_finite()
            || timeline.fast_below_weeks <= 0.0
            || timeline.fast_below_weeks > timeline.extended_above_weeks
        {
            return Err(TierTableError::TimelineBreakpoints);
        }

        for (name, value) in budget
            .ranges
            .entries()
            .into_iter()
            .chain(timeline.categories.entries())
        {
            if !value.is_finite() || value < 0.0 {
                return Err(TierTableError::MappedValue(name));
            }
        }

        for (name, weight) in self.weights.entries() {
            if !weight.is_finite() || weight <= 0.0 {
                return Err(TierTableError::Weight(name));
            }
        }

        let confidence = &self.confidence;
        if !(confidence.medium_ratio > 0.0
            && confidence.medium_ratio <= confidence.high_ratio
            && confidence.high_ratio <= 1.0)
        {
            return Err(TierTableError::ConfidenceRatios);
        }
        if !confidence.high_importance_weight.is_finite() || confidence.high_importance_weight <= 0.0
        {
            return Err(TierTableError::Weight("high_importance_weight"));
        }

        if self.reason_factor_limit == 0 {
            return Err(TierTableError::ReasonFactorLimit);
        }

        for tier in Tier::ALL {
            match self.tiers.iter().filter(|entry| entry.tier == tier).count() {
                0 => return Err(TierTableError::MissingTierDefinition(tier)),
                1 => {}
                _ => return Err(TierTableError::DuplicateTierDefinition(tier)),
            }
        }
        if self
            .definition(Tier::Four)
            .map(|definition| !definition.requires_manual_review)
            .unwrap_or(true)
        {
            return Err(TierTableError::TopTierAutoRouted);
        }

        let mut seen = HashSet::new();
        for rule in &self.project_types {
            if !seen.insert(&rule.project_type) {
                return Err(TierTableError::DuplicateProjectType(
                    rule.project_type.label().to_string(),
                ));
            }
        }

        Ok(())
    }
}

impl Default for TierConfiguration {
    fn default() -> Self {
        Self::standard()
    }
}

fn standard_project_types() -> Vec<ProjectTypeRule> {
    [
        (ProjectType::ConsultationOnly, Tier::One, false),
        (ProjectType::StandardRenovation, Tier::Two, false),
        (ProjectType::Addition, Tier::Two, true),
        (ProjectType::MajorRenovation, Tier::Three, true),
        (ProjectType::NewBuild, Tier::Three, true),
        (ProjectType::Commercial, Tier::Three, true),
        (ProjectType::Complex, Tier::Three, true),
        (ProjectType::MultipleProperties, Tier::Four, true),
    ]
    .into_iter()
    .map(|(project_type, minimum_tier, requires_site_visit)| ProjectTypeRule {
        project_type,
        minimum_tier,
        requires_site_visit,
    })
    .collect()
}
