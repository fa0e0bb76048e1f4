//! Machine-readable audit record (`audit.json`).
//!
//! Field names are stable. [`AUDIT_SCHEMA_VERSION`] must be bumped whenever
//! the shape changes incompatibly.

use chrono::{DateTime, Utc};
use serde::Serialize;

use metaquery_model::{Advisory, Controls, Decision, GovernanceError, Status, ValidationResult};

use crate::error::Result;

pub const AUDIT_SCHEMA_VERSION: u32 = 1;

/// Query rule set the pipeline implements.
pub const QUERY_VERSION: &str = "V1";

pub const TOOL_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Clone, Serialize)]
pub struct AuditRecord {
    pub metaquery_version: String,
    pub schema_version: u32,
    pub timestamp: String,
    pub decision: Decision,
    pub status: Status,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    pub fields_selected: Vec<String>,
    pub controls: Controls,
    pub warnings: Vec<WarningRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorRecord>,
}

/// Blocking error as written to the audit: `code`, check context, message.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorRecord {
    #[serde(flatten)]
    pub detail: GovernanceError,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct WarningRecord {
    #[serde(flatten)]
    pub detail: Advisory,
    pub message: String,
}

impl ErrorRecord {
    pub fn from_error(error: &GovernanceError) -> Self {
        Self {
            detail: error.clone(),
            message: error.to_string(),
            recommendation: error.recommendation().map(str::to_string),
        }
    }
}

impl WarningRecord {
    pub fn from_advisory(advisory: &Advisory) -> Self {
        Self {
            detail: advisory.clone(),
            message: advisory.to_string(),
        }
    }
}

impl AuditRecord {
    /// Pretty-printed JSON with a trailing newline.
    pub fn to_json(&self) -> Result<String> {
        let json = serde_json::to_string_pretty(self)?;
        Ok(format!("{json}\n"))
    }
}

/// Assemble the audit record for a validation result.
///
/// Version and timestamp are explicit so records are reproducible.
pub fn build_audit(
    result: &ValidationResult,
    tool_version: &str,
    schema_version: u32,
    timestamp: DateTime<Utc>,
) -> AuditRecord {
    AuditRecord {
        metaquery_version: tool_version.to_string(),
        schema_version,
        timestamp: format_timestamp(timestamp),
        decision: result.decision,
        status: result.status,
        version: QUERY_VERSION.to_string(),
        source: result.source.clone(),
        fields_selected: result.fields_selected.clone(),
        controls: result.controls.clone(),
        warnings: result
            .warnings
            .iter()
            .map(WarningRecord::from_advisory)
            .collect(),
        error: result.error.as_ref().map(ErrorRecord::from_error),
    }
}

/// ISO-8601 UTC with second precision (e.g., `2024-05-01T12:00:00Z`).
pub fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%Y-%m-%dT%H:%M:%SZ").to_string()
}
