//! MetaQuery report generation.
//!
//! Everything here is rendered from an already computed
//! [`ValidationResult`](metaquery_model::ValidationResult); nothing re-runs
//! validation.
//!
//! - **SQL**: single-table `SELECT` for allowed selections
//! - **Audit**: machine-readable `audit.json` record
//! - **Explanation**: human-readable `explain.txt`

mod audit;
mod error;
mod explain;
mod output;
mod sql;

pub use audit::{
    AUDIT_SCHEMA_VERSION, AuditRecord, ErrorRecord, QUERY_VERSION, TOOL_VERSION, WarningRecord,
    build_audit, format_timestamp,
};
pub use error::{ReportError, Result};
pub use explain::build_explanation;
pub use output::{
    AUDIT_FILE_NAME, ArtifactPaths, EXPLAIN_FILE_NAME, QUERY_FILE_NAME, write_artifacts,
};
pub use sql::{generate_sql, render_query};
