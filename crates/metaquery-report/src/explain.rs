//! Human-readable explanation (`explain.txt`).

use metaquery_model::ValidationResult;

use crate::audit::QUERY_VERSION;

const PASS_MARK: &str = "✓";
const FAIL_MARK: &str = "✗";

/// Render the explanation for a validation result.
///
/// `generated_sql` is only shown for allowed results.
pub fn build_explanation(result: &ValidationResult, generated_sql: Option<&str>) -> String {
    let title = format!("MetaQuery {QUERY_VERSION} Validation Report");
    let underline = "=".repeat(title.chars().count());
    let mut lines = vec![
        title,
        underline,
        format!("Decision: {}", result.decision),
        format!("Status: {}", result.status),
        format!("Source: {}", result.source.as_deref().unwrap_or("-")),
        format!("Fields: {} selected", result.fields_selected.len()),
        String::new(),
        "Controls:".to_string(),
    ];
    for (control, outcome) in result.controls.iter() {
        let mark = if outcome.is_pass() { PASS_MARK } else { FAIL_MARK };
        lines.push(format!("  {mark} {control}"));
    }

    if !result.warnings.is_empty() {
        lines.push(String::new());
        lines.push("Warnings:".to_string());
        for advisory in &result.warnings {
            lines.push(format!("  - {}: {advisory}", advisory.code()));
        }
    }

    if let Some(error) = &result.error {
        lines.push(String::new());
        lines.push("Error:".to_string());
        lines.push(format!("  {}: {error}", error.code()));
        if let Some(recommendation) = error.recommendation() {
            lines.push(format!("  Recommendation: {recommendation}"));
        }
    }

    if result.is_allowed()
        && let Some(sql) = generated_sql
    {
        lines.push(String::new());
        lines.push("Generated SQL:".to_string());
        lines.push("--------------".to_string());
        lines.push(sql.trim_end_matches('\n').to_string());
    }

    let mut text = lines.join("\n");
    text.push('\n');
    text
}
