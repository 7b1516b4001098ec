use serde::{Deserialize, Serialize};

use super::domain::{BudgetInput, IntakeData, ProjectType, TimelineInput};

/// The only error the engine raises: the intake is structurally unusable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid intake field `{field}`: {reason}")]
pub struct InvalidInput {
    pub field: &'static str,
    pub reason: String,
}

impl InvalidInput {
    fn new(field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}

/// Partially completed intake as collected by a form; every field may still be missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IntakeDraft {
    pub budget: Option<BudgetInput>,
    pub timeline_weeks: Option<TimelineInput>,
    pub project_type: Option<ProjectType>,
    pub has_survey: Option<bool>,
    pub has_drawings: Option<bool>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub project_address: Option<String>,
}

impl IntakeDraft {
    /// Promote the draft to a full intake, failing on the first unusable scoring field.
    pub fn into_intake(self) -> Result<IntakeData, InvalidInput> {
        let intake = IntakeData {
            budget: self
                .budget
                .ok_or_else(|| InvalidInput::new("budget", "is required"))?,
            timeline_weeks: self
                .timeline_weeks
                .ok_or_else(|| InvalidInput::new("timeline_weeks", "is required"))?,
            project_type: self
                .project_type
                .ok_or_else(|| InvalidInput::new("project_type", "is required"))?,
            has_survey: self
                .has_survey
                .ok_or_else(|| InvalidInput::new("has_survey", "is required"))?,
            has_drawings: self
                .has_drawings
                .ok_or_else(|| InvalidInput::new("has_drawings", "is required"))?,
            project_address: self.project_address.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            name: self.name.unwrap_or_default(),
        };
        check_intake(&intake)?;
        Ok(intake)
    }
}

/// Pre-flight check for forms: names every missing or invalid field, in a fixed order.
pub fn validate_intake(draft: &IntakeDraft) -> Vec<String> {
    let mut fields = Vec::new();

    let budget_ok = match &draft.budget {
        Some(BudgetInput::Amount(amount)) => check_amount("budget", *amount).is_ok(),
        Some(_) => true,
        None => false,
    };
    if !budget_ok {
        fields.push("budget");
    }

    let timeline_ok = match &draft.timeline_weeks {
        Some(TimelineInput::Weeks(weeks)) => check_amount("timeline_weeks", *weeks).is_ok(),
        Some(_) => true,
        None => false,
    };
    if !timeline_ok {
        fields.push("timeline_weeks");
    }

    if draft
        .project_type
        .as_ref()
        .map(|project_type| project_type.label().trim().is_empty())
        .unwrap_or(true)
    {
        fields.push("project_type");
    }

    if draft.has_survey.is_none() {
        fields.push("has_survey");
    }
    if draft.has_drawings.is_none() {
        fields.push("has_drawings");
    }

    if is_blank(&draft.name) {
        fields.push("name");
    }
    if is_blank(&draft.email)
        || !draft
            .email
            .as_deref()
            .map(|email| email.contains('@'))
            .unwrap_or(false)
    {
        fields.push("email");
    }
    if is_blank(&draft.project_address) {
        fields.push("project_address");
    }

    fields.into_iter().map(str::to_string).collect()
}

/// Fields the scorer reads. Contact details are collected by the form but never scored.
pub const SCORING_FIELDS: [&str; 5] = [
    "budget",
    "timeline_weeks",
    "project_type",
    "has_survey",
    "has_drawings",
];

/// Subset of [`validate_intake`] limited to [`SCORING_FIELDS`].
pub fn missing_scoring_fields(draft: &IntakeDraft) -> Vec<String> {
    validate_intake(draft)
        .into_iter()
        .filter(|field| SCORING_FIELDS.contains(&field.as_str()))
        .collect()
}

/// Structural checks on the fields scoring depends on.
pub fn check_intake(intake: &IntakeData) -> Result<(), InvalidInput> {
    if let BudgetInput::Amount(amount) = intake.budget {
        check_amount("budget", amount)?;
    }
    if let TimelineInput::Weeks(weeks) = intake.timeline_weeks {
        check_amount("timeline_weeks", weeks)?;
    }
    if intake.project_type.label().trim().is_empty() {
        return Err(InvalidInput::new("project_type", "is required"));
    }
    Ok(())
}

fn check_amount(field: &'static str, value: f64) -> Result<(), InvalidInput> {
    if value.is_nan() {
        Err(InvalidInput::new(field, "must be a number"))
    } else if value.is_infinite() {
        Err(InvalidInput::new(field, "must be finite"))
    } else if value < 0.0 {
        Err(InvalidInput::new(field, format!("must not be negative (found {value})")))
    } else {
        Ok(())
    }
}

fn is_blank(value: &Option<String>) -> bool {
    value
        .as_deref()
        .map(|value| value.trim().is_empty())
        .unwrap_or(true)
}
