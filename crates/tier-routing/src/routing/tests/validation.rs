use super::common::*;
use crate::routing::domain::{BudgetInput, BudgetRange, ProjectType, TimelineCategory, TimelineInput};
use crate::routing::validation::{missing_scoring_fields, validate_intake, IntakeDraft};

#[test]
fn complete_draft_has_no_findings() {
    assert!(validate_intake(&complete_draft()).is_empty());
}

#[test]
fn empty_draft_lists_every_field_in_order() {
    let fields = validate_intake(&IntakeDraft::default());

    assert_eq!(
        fields,
        vec![
            "budget",
            "timeline_weeks",
            "project_type",
            "has_survey",
            "has_drawings",
            "name",
            "email",
            "project_address",
        ]
    );
}

#[test]
fn invalid_numbers_and_email_are_reported() {
    let mut draft = complete_draft();
    draft.budget = Some(BudgetInput::Amount(-10.0));
    draft.timeline_weeks = Some(TimelineInput::Weeks(f64::INFINITY));
    draft.email = Some("client.example.com".to_string());

    assert_eq!(
        validate_intake(&draft),
        vec!["budget", "timeline_weeks", "email"]
    );
}

#[test]
fn into_intake_requires_scoring_fields_only() {
    let mut draft = complete_draft();
    draft.name = None;
    draft.email = None;
    draft.project_address = None;

    let intake = draft.into_intake().expect("contact details are optional for scoring");
    assert!(intake.name.is_empty());

    let mut draft = complete_draft();
    draft.has_drawings = None;
    let error = draft.into_intake().expect_err("missing drawings flag");
    assert_eq!(error.field, "has_drawings");
}

#[test]
fn drafts_parse_numbers_and_form_labels() {
    let draft: IntakeDraft = serde_json::from_str(
        r#"{
            "budget": "15k_50k",
            "timeline_weeks": "1_3_months",
            "project_type": "Major Renovation",
            "has_survey": false
        }"#,
    )
    .expect("draft parses");

    assert_eq!(draft.budget, Some(BudgetInput::Range(BudgetRange::From15kTo50k)));
    assert_eq!(
        draft.timeline_weeks,
        Some(TimelineInput::Category(TimelineCategory::OneToThreeMonths))
    );
    assert_eq!(draft.project_type, Some(ProjectType::MajorRenovation));
    assert_eq!(draft.has_drawings, None);

    let numeric: IntakeDraft =
        serde_json::from_str(r#"{"budget": 12500, "timeline_weeks": 6.5}"#).expect("draft parses");
    assert_eq!(numeric.budget, Some(BudgetInput::Amount(12_500.0)));
    assert_eq!(numeric.timeline_weeks, Some(TimelineInput::Weeks(6.5)));
}

#[test]
fn unusual_budget_labels_degrade_instead_of_failing() {
    assert_eq!(BudgetInput::from_label("Not Sure"), BudgetInput::NotSure);
    assert_eq!(
        BudgetInput::from_label("percentage_of_install"),
        BudgetInput::PercentageOfInstall
    );
    assert_eq!(BudgetInput::from_label("$8,000"), BudgetInput::Amount(8_000.0));
    assert_eq!(
        BudgetInput::from_label("whatever works"),
        BudgetInput::Unrecognized("whatever works".to_string())
    );
}

#[test]
fn negative_numbers_in_text_are_rejected_like_numbers() {
    let draft: IntakeDraft = serde_json::from_str(
        r#"{
            "budget": "-5000",
            "timeline_weeks": "-3",
            "project_type": "addition",
            "has_survey": true,
            "has_drawings": false
        }"#,
    )
    .expect("draft parses");

    assert_eq!(draft.budget, Some(BudgetInput::Amount(-5_000.0)));
    assert_eq!(draft.timeline_weeks, Some(TimelineInput::Weeks(-3.0)));
    assert_eq!(
        missing_scoring_fields(&draft),
        vec!["budget", "timeline_weeks"]
    );

    let error = draft.into_intake().expect_err("negative budget");
    assert_eq!(error.field, "budget");
}

#[test]
fn scoring_check_ignores_contact_details() {
    let mut draft = complete_draft();
    draft.name = None;
    draft.email = Some("no-at-sign".to_string());
    draft.project_address = None;

    assert_eq!(validate_intake(&draft), vec!["name", "email", "project_address"]);
    assert!(missing_scoring_fields(&draft).is_empty());
}
