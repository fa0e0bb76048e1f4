//! Query build pipeline with explicit stages.
//!
//! The pipeline follows these stages in order:
//! 1. **Ingest**: Read the field dictionary and the selection
//! 2. **Validate**: Run the governance controls, producing ALLOW or BLOCK
//! 3. **Render**: Build the SQL (ALLOW only), audit record and explanation
//! 4. **Output**: Write `audit.json`, `explain.txt` and `query.sql`
//!
//! Each stage takes the output of the previous stage and returns typed results.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use tracing::{debug, info, info_span};

use metaquery_ingest::{load_fields, load_selection};
use metaquery_model::{FieldDictionary, Selection, ValidationResult};
use metaquery_report::{
    AUDIT_SCHEMA_VERSION, ArtifactPaths, AuditRecord, TOOL_VERSION, build_audit,
    build_explanation, render_query, write_artifacts,
};
use metaquery_validate::validate;

/// Process exit code for an allowed selection.
pub const EXIT_ALLOW: i32 = 0;
/// Process exit code for a blocked selection.
pub const EXIT_BLOCK: i32 = 1;
/// Process exit code for unreadable input or any other runtime failure.
pub const EXIT_INPUT_ERROR: i32 = 2;

// ============================================================================
// Stage 1: Ingest
// ============================================================================

/// Inputs of one build.
#[derive(Debug)]
pub struct IngestResult {
    pub dictionary: FieldDictionary,
    pub selection: Selection,
}

/// Load the field dictionary and the selection from disk.
pub fn ingest(fields_path: &Path, selection_path: &Path) -> Result<IngestResult> {
    let span = info_span!("ingest");
    let _guard = span.enter();
    let dictionary = load_fields(fields_path)
        .with_context(|| format!("load field dictionary {}", fields_path.display()))?;
    let selection = load_selection(selection_path)
        .with_context(|| format!("load selection {}", selection_path.display()))?;
    debug!(
        fields = dictionary.len(),
        selected = selection.len(),
        "inputs loaded"
    );
    Ok(IngestResult {
        dictionary,
        selection,
    })
}

// ============================================================================
// Stages 2-3: Validate and render
// ============================================================================

/// Everything a build produces, before anything touches the filesystem.
#[derive(Debug)]
pub struct BuildOutput {
    pub result: ValidationResult,
    pub audit: AuditRecord,
    pub explanation: String,
    /// Present only when the selection was allowed.
    pub sql: Option<String>,
}

impl BuildOutput {
    /// Exit code for the decision.
    pub fn exit_code(&self) -> i32 {
        if self.result.is_allowed() {
            EXIT_ALLOW
        } else {
            EXIT_BLOCK
        }
    }
}

/// Validate the selection and render every artifact in memory.
pub fn build_outputs(
    dictionary: &FieldDictionary,
    selection: &Selection,
    timestamp: DateTime<Utc>,
) -> BuildOutput {
    let result = validate(dictionary, selection);
    let sql = render_query(&result, dictionary);
    let audit = build_audit(&result, TOOL_VERSION, AUDIT_SCHEMA_VERSION, timestamp);
    let explanation = build_explanation(&result, sql.as_deref());
    BuildOutput {
        result,
        audit,
        explanation,
        sql,
    }
}

// ============================================================================
// Stage 4: Output
// ============================================================================

/// Write the rendered artifacts into `output_dir`.
pub fn output(build: &BuildOutput, output_dir: &Path) -> Result<ArtifactPaths> {
    let start = Instant::now();
    let paths = write_artifacts(
        output_dir,
        &build.audit,
        &build.explanation,
        build.sql.as_deref(),
    )
    .with_context(|| format!("write artifacts to {}", output_dir.display()))?;
    info!(
        decision = %build.result.decision,
        duration_ms = start.elapsed().as_millis(),
        "output complete"
    );
    Ok(paths)
}
