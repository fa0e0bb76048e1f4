use metaquery_model::{
    Advisory, Control, ControlOutcome, Decision, Field, FieldDictionary, GovernanceError,
    Selection, Status,
};
use metaquery_validate::validate;

fn dictionary() -> FieldDictionary {
    vec![
        Field::new("model_id", "MODELS", "model_id").with_label("Model ID"),
        Field::new("run_date", "MODELS", "run_date").with_label("Run Date"),
        Field::new("pd", "MODELS", "pd").with_label("Probability of Default"),
        Field::new("customer_age", "CUSTOMERS", "age").with_label("Customer Age"),
    ]
    .into_iter()
    .collect()
}

fn select(ids: &[&str]) -> Selection {
    ids.iter().copied().collect()
}

fn controls_of(result: &metaquery_model::ValidationResult) -> Vec<(Control, ControlOutcome)> {
    result.controls.iter().collect()
}

#[test]
fn single_source_selection_is_allowed() {
    let result = validate(&dictionary(), &select(&["model_id", "run_date"]));

    assert_eq!(result.decision, Decision::Allow);
    assert_eq!(result.status, Status::Ok);
    assert_eq!(result.source.as_deref(), Some("MODELS"));
    assert_eq!(result.fields_selected, vec!["model_id", "run_date"]);
    assert!(result.warnings.is_empty());
    assert!(result.error.is_none());
    assert_eq!(
        controls_of(&result),
        vec![
            (Control::NonEmptySelection, ControlOutcome::Pass),
            (Control::AllFieldsExist, ControlOutcome::Pass),
            (Control::ValidSourceName, ControlOutcome::Pass),
            (Control::NoDuplicates, ControlOutcome::Pass),
            (Control::SingleSource, ControlOutcome::Pass),
        ]
    );
}

#[test]
fn empty_selection_blocks() {
    let result = validate(&dictionary(), &select(&[]));

    assert_eq!(result.decision, Decision::Block);
    assert_eq!(result.status, Status::Error);
    assert_eq!(result.error, Some(GovernanceError::EmptySelection));
    assert!(result.source.is_none());
    assert_eq!(
        controls_of(&result),
        vec![(Control::NonEmptySelection, ControlOutcome::Fail)]
    );
}

#[test]
fn unknown_field_blocks_with_sorted_available_fields() {
    let result = validate(
        &dictionary(),
        &select(&["unknown_field", "model_id", "other", "unknown_field"]),
    );

    assert_eq!(result.decision, Decision::Block);
    assert_eq!(
        result.error,
        Some(GovernanceError::FieldNotFound {
            unknown_field_ids: vec!["unknown_field".to_string(), "other".to_string()],
            available_fields: vec![
                "customer_age".to_string(),
                "model_id".to_string(),
                "pd".to_string(),
                "run_date".to_string(),
            ],
        })
    );
    assert_eq!(
        controls_of(&result),
        vec![
            (Control::NonEmptySelection, ControlOutcome::Pass),
            (Control::AllFieldsExist, ControlOutcome::Fail),
        ]
    );
}

#[test]
fn malformed_field_id_blocks_before_lookup() {
    let result = validate(&dictionary(), &select(&["model_id", "run-date", "x y"]));

    assert_eq!(result.error_code(), Some("INVALID_FIELD_ID"));
    assert_eq!(
        result.error,
        Some(GovernanceError::InvalidFieldId {
            invalid_field_ids: vec!["run-date".to_string(), "x y".to_string()],
        })
    );
    assert_eq!(
        result.controls.get(Control::AllFieldsExist),
        Some(ControlOutcome::Fail)
    );
}

#[test]
fn duplicates_are_removed_with_warning() {
    let result = validate(&dictionary(), &select(&["model_id", "model_id", "run_date"]));

    assert_eq!(result.decision, Decision::Allow);
    assert_eq!(result.status, Status::OkWithWarnings);
    assert_eq!(result.fields_selected, vec!["model_id", "run_date"]);
    assert_eq!(
        result.warnings,
        vec![Advisory::DuplicateFields {
            field_id: "model_id".to_string(),
            count: 2,
        }]
    );
    assert_eq!(
        result.controls.get(Control::NoDuplicates),
        Some(ControlOutcome::Pass)
    );
}

#[test]
fn multi_source_blocks_with_partition() {
    let result = validate(&dictionary(), &select(&["model_id", "customer_age"]));

    assert_eq!(result.decision, Decision::Block);
    let Some(GovernanceError::MultiSourceNotAllowed {
        sources_found,
        fields_by_source,
    }) = &result.error
    else {
        panic!("expected MULTI_SOURCE_NOT_ALLOWED, got {:?}", result.error);
    };
    assert_eq!(sources_found, &vec!["MODELS".to_string(), "CUSTOMERS".to_string()]);
    let groups: Vec<(&str, Vec<&str>)> = fields_by_source
        .iter()
        .map(|(source, ids)| (source.as_str(), ids.iter().map(String::as_str).collect()))
        .collect();
    assert_eq!(
        groups,
        vec![("MODELS", vec!["model_id"]), ("CUSTOMERS", vec!["customer_age"])]
    );
    assert_eq!(
        result.controls.get(Control::SingleSource),
        Some(ControlOutcome::Fail)
    );
}

#[test]
fn multi_source_groups_deduplicated_fields_in_selection_order() {
    let result = validate(
        &dictionary(),
        &select(&["customer_age", "pd", "customer_age", "model_id"]),
    );

    let Some(GovernanceError::MultiSourceNotAllowed {
        fields_by_source, ..
    }) = &result.error
    else {
        panic!("expected MULTI_SOURCE_NOT_ALLOWED");
    };
    assert_eq!(
        fields_by_source.get("CUSTOMERS"),
        Some(&vec!["customer_age".to_string()])
    );
    assert_eq!(
        fields_by_source.get("MODELS"),
        Some(&vec!["pd".to_string(), "model_id".to_string()])
    );
    assert_eq!(result.fields_selected, vec!["customer_age", "pd", "model_id"]);
    assert_eq!(result.warnings.len(), 1);
}

#[test]
fn invalid_source_name_blocks() {
    let mut fields = dictionary();
    fields.insert(Field::new("broken", "my table", "broken"));

    let result = validate(&fields, &select(&["broken"]));

    assert_eq!(result.decision, Decision::Block);
    assert_eq!(
        result.error,
        Some(GovernanceError::InvalidSourceName {
            datatable_id: "my table".to_string(),
            invalid_sources: vec!["my table".to_string()],
            field_ids: vec!["broken".to_string()],
        })
    );
    assert_eq!(
        controls_of(&result),
        vec![
            (Control::NonEmptySelection, ControlOutcome::Pass),
            (Control::AllFieldsExist, ControlOutcome::Pass),
            (Control::ValidSourceName, ControlOutcome::Fail),
        ]
    );
}

#[test]
fn invalid_source_name_takes_precedence_over_multi_source() {
    let mut fields = dictionary();
    fields.insert(Field::new("lowercase", "models_v2", "x"));

    let result = validate(&fields, &select(&["model_id", "lowercase"]));

    assert_eq!(result.error_code(), Some("INVALID_SOURCE_NAME"));
    assert_eq!(result.controls.get(Control::SingleSource), None);
}

#[test]
fn every_invalid_source_is_reported() {
    let mut fields = dictionary();
    fields.insert(Field::new("scratch_a", "my table", "a"));
    fields.insert(Field::new("injected", "x;drop", "c"));
    fields.insert(Field::new("scratch_e", "my table", "e"));

    let result = validate(
        &fields,
        &select(&["scratch_a", "model_id", "injected", "scratch_e", "scratch_a"]),
    );

    assert_eq!(result.decision, Decision::Block);
    assert_eq!(
        result.error,
        Some(GovernanceError::InvalidSourceName {
            datatable_id: "my table".to_string(),
            invalid_sources: vec!["my table".to_string(), "x;drop".to_string()],
            field_ids: vec![
                "scratch_a".to_string(),
                "injected".to_string(),
                "scratch_e".to_string(),
            ],
        })
    );
    assert_eq!(result.controls.get(Control::ValidSourceName), Some(ControlOutcome::Fail));
    assert_eq!(result.controls.get(Control::NoDuplicates), None);
}

#[test]
fn blocked_before_dedup_reports_raw_selection() {
    let result = validate(&dictionary(), &select(&["model_id", "model_id", "missing"]));

    assert_eq!(result.error_code(), Some("FIELD_NOT_FOUND"));
    assert_eq!(result.fields_selected, vec!["model_id", "model_id", "missing"]);
    assert!(result.warnings.is_empty());
}

#[test]
fn validation_is_repeatable() {
    let fields = dictionary();
    let selection = select(&["pd", "model_id", "pd"]);
    assert_eq!(validate(&fields, &selection), validate(&fields, &selection));
}
