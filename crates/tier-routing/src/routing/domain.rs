use std::fmt;

use serde::{Deserialize, Serialize};

/// Discrete service level, from the most automated (`One`) to fully bespoke (`Four`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Tier {
    One,
    Two,
    Three,
    Four,
}

impl Tier {
    pub const ALL: [Tier; 4] = [Tier::One, Tier::Two, Tier::Three, Tier::Four];

    pub const fn number(self) -> u8 {
        match self {
            Tier::One => 1,
            Tier::Two => 2,
            Tier::Three => 3,
            Tier::Four => 4,
        }
    }

    /// Map an arbitrary integer onto the closed range `[1, 4]`.
    pub fn clamped(value: i64) -> Self {
        match value {
            i64::MIN..=1 => Tier::One,
            2 => Tier::Two,
            3 => Tier::Three,
            _ => Tier::Four,
        }
    }

    pub fn distance(self, other: Tier) -> u8 {
        self.number().abs_diff(other.number())
    }
}

impl From<Tier> for u8 {
    fn from(tier: Tier) -> Self {
        tier.number()
    }
}

impl TryFrom<u8> for Tier {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Tier::One),
            2 => Ok(Tier::Two),
            3 => Ok(Tier::Three),
            4 => Ok(Tier::Four),
            other => Err(format!("tier must be between 1 and 4, found {other}")),
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tier {}", self.number())
    }
}

/// Wire representation shared by the budget and timeline inputs: either a raw number or a label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawIntakeValue {
    Number(f64),
    Label(String),
}

fn normalize_label(raw: &str) -> String {
    raw.trim().to_ascii_lowercase().replace(['-', ' '], "_")
}

/// Budget brackets offered by the intake form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum BudgetRange {
    #[serde(rename = "under_5k")]
    Under5k,
    #[serde(rename = "5k_15k")]
    From5kTo15k,
    #[serde(rename = "15k_50k")]
    From15kTo50k,
    #[serde(rename = "50k_plus")]
    Over50k,
}

impl BudgetRange {
    pub const fn label(self) -> &'static str {
        match self {
            BudgetRange::Under5k => "under_5k",
            BudgetRange::From5kTo15k => "5k_15k",
            BudgetRange::From15kTo50k => "15k_50k",
            BudgetRange::Over50k => "50k_plus",
        }
    }

    fn from_label(label: &str) -> Option<Self> {
        match label {
            "under_5k" => Some(BudgetRange::Under5k),
            "5k_15k" => Some(BudgetRange::From5kTo15k),
            "15k_50k" => Some(BudgetRange::From15kTo50k),
            "50k_plus" => Some(BudgetRange::Over50k),
            _ => None,
        }
    }
}

/// Budget answer as supplied by the caller: a dollar amount or one of the form options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawIntakeValue", into = "RawIntakeValue")]
pub enum BudgetInput {
    Amount(f64),
    Range(BudgetRange),
    PercentageOfInstall,
    NotSure,
    Unrecognized(String),
}

impl From<RawIntakeValue> for BudgetInput {
    fn from(raw: RawIntakeValue) -> Self {
        match raw {
            RawIntakeValue::Number(amount) => BudgetInput::Amount(amount),
            RawIntakeValue::Label(label) => BudgetInput::from_label(&label),
        }
    }
}

impl From<BudgetInput> for RawIntakeValue {
    fn from(input: BudgetInput) -> Self {
        match input {
            BudgetInput::Amount(amount) => RawIntakeValue::Number(amount),
            other => RawIntakeValue::Label(other.label()),
        }
    }
}

impl BudgetInput {
    /// Numeric text (including negatives) becomes an `Amount` so the usual range checks apply.
    pub fn from_label(raw: &str) -> Self {
        if let Ok(amount) = raw.trim().replace([',', '$'], "").parse::<f64>() {
            return BudgetInput::Amount(amount);
        }
        let label = normalize_label(raw);
        if let Some(range) = BudgetRange::from_label(&label) {
            return BudgetInput::Range(range);
        }
        match label.as_str() {
            "percentage_of_install" | "percentage" => BudgetInput::PercentageOfInstall,
            "" | "not_sure" | "unknown" => BudgetInput::NotSure,
            _ => BudgetInput::Unrecognized(raw.trim().to_string()),
        }
    }

    pub fn label(&self) -> String {
        match self {
            BudgetInput::Amount(amount) => amount.to_string(),
            BudgetInput::Range(range) => range.label().to_string(),
            BudgetInput::PercentageOfInstall => "percentage_of_install".to_string(),
            BudgetInput::NotSure => "not_sure".to_string(),
            BudgetInput::Unrecognized(label) => label.clone(),
        }
    }
}

/// Timeline options offered by the intake form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TimelineCategory {
    #[serde(rename = "asap")]
    Asap,
    #[serde(rename = "1_3_months")]
    OneToThreeMonths,
    #[serde(rename = "3_6_months")]
    ThreeToSixMonths,
    #[serde(rename = "6_plus_months")]
    SixPlusMonths,
}

impl TimelineCategory {
    pub const fn label(self) -> &'static str {
        match self {
            TimelineCategory::Asap => "asap",
            TimelineCategory::OneToThreeMonths => "1_3_months",
            TimelineCategory::ThreeToSixMonths => "3_6_months",
            TimelineCategory::SixPlusMonths => "6_plus_months",
        }
    }

    fn from_label(label: &str) -> Option<Self> {
        match label {
            "asap" => Some(TimelineCategory::Asap),
            "1_3_months" => Some(TimelineCategory::OneToThreeMonths),
            "3_6_months" => Some(TimelineCategory::ThreeToSixMonths),
            "6_plus_months" => Some(TimelineCategory::SixPlusMonths),
            _ => None,
        }
    }
}

/// Desired completion time: weeks, or one of the form's timeline options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawIntakeValue", into = "RawIntakeValue")]
pub enum TimelineInput {
    Weeks(f64),
    Category(TimelineCategory),
    Flexible,
    Unrecognized(String),
}

impl From<RawIntakeValue> for TimelineInput {
    fn from(raw: RawIntakeValue) -> Self {
        match raw {
            RawIntakeValue::Number(weeks) => TimelineInput::Weeks(weeks),
            RawIntakeValue::Label(label) => TimelineInput::from_label(&label),
        }
    }
}

impl From<TimelineInput> for RawIntakeValue {
    fn from(input: TimelineInput) -> Self {
        match input {
            TimelineInput::Weeks(weeks) => RawIntakeValue::Number(weeks),
            other => RawIntakeValue::Label(other.label()),
        }
    }
}

impl TimelineInput {
    pub fn from_label(raw: &str) -> Self {
        if let Ok(weeks) = raw.trim().parse::<f64>() {
            return TimelineInput::Weeks(weeks);
        }
        let label = normalize_label(raw);
        if let Some(category) = TimelineCategory::from_label(&label) {
            return TimelineInput::Category(category);
        }
        match label.as_str() {
            "" | "flexible" | "not_sure" => TimelineInput::Flexible,
            _ => TimelineInput::Unrecognized(raw.trim().to_string()),
        }
    }

    pub fn label(&self) -> String {
        match self {
            TimelineInput::Weeks(weeks) => weeks.to_string(),
            TimelineInput::Category(category) => category.label().to_string(),
            TimelineInput::Flexible => "flexible".to_string(),
            TimelineInput::Unrecognized(label) => label.clone(),
        }
    }
}

/// Kind of work requested. Unknown values are kept verbatim so they can be reported back.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ProjectType {
    ConsultationOnly,
    StandardRenovation,
    MajorRenovation,
    Addition,
    NewBuild,
    Commercial,
    MultipleProperties,
    Complex,
    Other(String),
}

impl ProjectType {
    pub fn label(&self) -> &str {
        match self {
            ProjectType::ConsultationOnly => "consultation_only",
            ProjectType::StandardRenovation => "standard_renovation",
            ProjectType::MajorRenovation => "major_renovation",
            ProjectType::Addition => "addition",
            ProjectType::NewBuild => "new_build",
            ProjectType::Commercial => "commercial",
            ProjectType::MultipleProperties => "multiple_properties",
            ProjectType::Complex => "complex",
            ProjectType::Other(label) => label,
        }
    }

    /// Types whose scope never fits below Tier 3.
    pub fn demands_full_service(&self) -> bool {
        matches!(
            self,
            ProjectType::NewBuild | ProjectType::Complex | ProjectType::MultipleProperties
        )
    }

    /// Types that cannot realistically be delivered on a fast timeline.
    pub fn is_schedule_sensitive(&self) -> bool {
        matches!(
            self,
            ProjectType::NewBuild | ProjectType::Complex | ProjectType::MajorRenovation
        )
    }

    pub fn is_complex_scope(&self) -> bool {
        matches!(self, ProjectType::Complex | ProjectType::MultipleProperties)
    }
}

impl From<String> for ProjectType {
    fn from(raw: String) -> Self {
        match normalize_label(&raw).as_str() {
            "consultation_only" | "consultation" => ProjectType::ConsultationOnly,
            "standard_renovation" | "renovation" => ProjectType::StandardRenovation,
            "major_renovation" => ProjectType::MajorRenovation,
            "addition" | "extension" => ProjectType::Addition,
            "new_build" => ProjectType::NewBuild,
            "commercial" => ProjectType::Commercial,
            "multiple_properties" => ProjectType::MultipleProperties,
            "complex" => ProjectType::Complex,
            _ => ProjectType::Other(raw.trim().to_string()),
        }
    }
}

impl From<&str> for ProjectType {
    fn from(raw: &str) -> Self {
        ProjectType::from(raw.to_string())
    }
}

impl From<ProjectType> for String {
    fn from(project_type: ProjectType) -> Self {
        project_type.label().to_string()
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Intake answers supplied whole for one recommendation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntakeData {
    pub budget: BudgetInput,
    pub timeline_weeks: TimelineInput,
    pub project_type: ProjectType,
    pub has_survey: bool,
    pub has_drawings: bool,
    #[serde(default)]
    pub project_address: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub name: String,
}

/// Evidence dimension contributing to a tier decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FactorCategory {
    Budget,
    Timeline,
    ProjectType,
    Assets,
}

impl FactorCategory {
    pub const ALL: [FactorCategory; 4] = [
        FactorCategory::Budget,
        FactorCategory::Timeline,
        FactorCategory::ProjectType,
        FactorCategory::Assets,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            FactorCategory::Budget => "budget",
            FactorCategory::Timeline => "timeline",
            FactorCategory::ProjectType => "project_type",
            FactorCategory::Assets => "assets",
        }
    }
}

/// One analyzer's verdict, kept on the recommendation for audits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutingFactor {
    pub category: FactorCategory,
    pub suggested_tier: Tier,
    pub weight: f64,
    pub description: String,
    /// Set when the analyzer fell back to a reduced-weight answer.
    #[serde(default)]
    pub degraded: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Confidence {
    Low,
    Medium,
    High,
}

impl Confidence {
    pub const fn label(self) -> &'static str {
        match self {
            Confidence::Low => "low",
            Confidence::Medium => "medium",
            Confidence::High => "high",
        }
    }
}

/// Hard floors applied after the weighted tier, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverrideRule {
    MissingAssets,
    ProjectScope,
    BudgetCeiling,
    PercentagePricing,
}

impl OverrideRule {
    pub const fn summary(self) -> &'static str {
        match self {
            OverrideRule::MissingAssets => "no survey or drawings: minimum Tier 3",
            OverrideRule::ProjectScope => "project scope: minimum Tier 3 (multiple properties: Tier 4)",
            OverrideRule::BudgetCeiling => "budget at or above the Tier 4 threshold",
            OverrideRule::PercentagePricing => "percentage-of-install pricing forces Tier 4",
        }
    }
}

/// Workflow state the caller should move the intake into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoutingDisposition {
    AutoRouted,
    ConsultationRequired,
    ManualReview,
}

impl RoutingDisposition {
    pub const fn label(self) -> &'static str {
        match self {
            RoutingDisposition::AutoRouted => "auto_routed",
            RoutingDisposition::ConsultationRequired => "consultation_required",
            RoutingDisposition::ManualReview => "manual_review",
        }
    }
}

/// Final, explainable routing decision for one intake.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierRecommendation {
    pub tier: Tier,
    pub tier_name: String,
    pub reason: String,
    pub confidence: Confidence,
    pub needs_manual_review: bool,
    pub disposition: RoutingDisposition,
    pub factors: Vec<RoutingFactor>,
    pub red_flags: Vec<String>,
    pub alternative_tiers: Vec<Tier>,
    pub overrides_applied: Vec<OverrideRule>,
}

impl TierRecommendation {
    pub fn factor(&self, category: FactorCategory) -> Option<&RoutingFactor> {
        self.factors
            .iter()
            .find(|factor| factor.category == category)
    }
}
