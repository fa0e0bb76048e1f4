//! Integration tests for the pipeline module.

use chrono::{TimeZone, Utc};

use metaquery_cli::pipeline::{EXIT_ALLOW, EXIT_BLOCK, build_outputs, ingest, output};
use metaquery_model::{Decision, Field, FieldDictionary, Selection, Status};

const FIELDS_YML: &str = r#"
fields:
  - field_id: model_id
    label: Model ID
    datatable_id: MODELS
    sql_expr: model_id
  - field_id: run_date
    label: Run Date
    datatable_id: MODELS
    sql_expr: run_date
  - field_id: customer_age
    label: Customer Age
    datatable_id: CUSTOMERS
    sql_expr: age
"#;

fn dictionary() -> FieldDictionary {
    vec![
        Field::new("model_id", "MODELS", "model_id"),
        Field::new("run_date", "MODELS", "run_date"),
        Field::new("customer_age", "CUSTOMERS", "age"),
    ]
    .into_iter()
    .collect()
}

fn select(ids: &[&str]) -> Selection {
    ids.iter().copied().collect()
}

fn timestamp() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
}

#[test]
fn allowed_selection_renders_sql_and_exits_zero() {
    let build = build_outputs(&dictionary(), &select(&["model_id", "run_date"]), timestamp());

    assert_eq!(build.exit_code(), EXIT_ALLOW);
    assert_eq!(
        build.sql.as_deref(),
        Some("SELECT\n    model_id,\n    run_date\nFROM MODELS;\n")
    );
    assert_eq!(build.audit.decision, Decision::Allow);
    assert_eq!(build.audit.source.as_deref(), Some("MODELS"));
    assert_eq!(build.audit.timestamp, "2024-05-01T12:00:00Z");
    assert!(build.explanation.contains("Generated SQL"));
}

#[test]
fn blocked_selection_has_no_sql_and_exits_one() {
    let build = build_outputs(
        &dictionary(),
        &select(&["model_id", "customer_age"]),
        timestamp(),
    );

    assert_eq!(build.exit_code(), EXIT_BLOCK);
    assert!(build.sql.is_none());
    assert_eq!(build.audit.status, Status::Error);
    assert_eq!(build.result.error_code(), Some("MULTI_SOURCE_NOT_ALLOWED"));
    assert!(!build.explanation.contains("Generated SQL"));
}

#[test]
fn duplicates_still_allow_with_warnings() {
    let build = build_outputs(
        &dictionary(),
        &select(&["model_id", "model_id", "run_date"]),
        timestamp(),
    );

    assert_eq!(build.exit_code(), EXIT_ALLOW);
    assert_eq!(build.audit.status, Status::OkWithWarnings);
    assert_eq!(build.audit.fields_selected, vec!["model_id", "run_date"]);
    assert_eq!(build.audit.warnings.len(), 1);
    assert_eq!(
        build.sql.as_deref(),
        Some("SELECT\n    model_id,\n    run_date\nFROM MODELS;\n")
    );
}

#[test]
fn files_on_disk_flow_through_every_stage() {
    let dir = tempfile::tempdir().unwrap();
    let fields_path = dir.path().join("fields.yml");
    let selection_path = dir.path().join("selection.yml");
    let output_dir = dir.path().join("out");
    std::fs::write(&fields_path, FIELDS_YML).unwrap();
    std::fs::write(&selection_path, "selected_field_ids:\n  - run_date\n").unwrap();

    let inputs = ingest(&fields_path, &selection_path).unwrap();
    let build = build_outputs(&inputs.dictionary, &inputs.selection, timestamp());
    let paths = output(&build, &output_dir).unwrap();

    assert_eq!(build.exit_code(), EXIT_ALLOW);
    let query = std::fs::read_to_string(paths.query.unwrap()).unwrap();
    assert_eq!(query, "SELECT\n    run_date\nFROM MODELS;\n");
    let audit: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(paths.audit).unwrap()).unwrap();
    assert_eq!(audit["decision"], "ALLOW");
    assert_eq!(audit["version"], "V1");
    assert!(paths.explanation.is_file());
}

#[test]
fn blocked_run_removes_stale_query() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("query.sql"), "SELECT 1;\n").unwrap();

    let build = build_outputs(&dictionary(), &select(&["unknown"]), timestamp());
    let paths = output(&build, dir.path()).unwrap();

    assert_eq!(build.exit_code(), EXIT_BLOCK);
    assert!(paths.query.is_none());
    assert!(!dir.path().join("query.sql").exists());
    assert!(paths.audit.is_file());
}

#[test]
fn unreadable_input_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let fields_path = dir.path().join("fields.yml");
    std::fs::write(&fields_path, FIELDS_YML).unwrap();

    let error = ingest(&fields_path, &dir.path().join("missing.yml")).unwrap_err();
    assert!(format!("{error:#}").contains("missing.yml"));
}
