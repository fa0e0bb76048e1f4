use serde::{Deserialize, Serialize};

use crate::decision::{Controls, Decision, Status};
use crate::governance::{Advisory, GovernanceError};

/// Outcome of validating one selection against one field dictionary.
///
/// Built only through [`ValidationResult::allowed`] and
/// [`ValidationResult::blocked`], so the decision, status, source and error
/// always agree with each other.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub decision: Decision,
    pub status: Status,
    /// Resolved source table. Present only on ALLOW.
    pub source: Option<String>,
    /// Field identifiers carried forward, in selection order.
    pub fields_selected: Vec<String>,
    pub controls: Controls,
    pub warnings: Vec<Advisory>,
    /// Blocking failure. Present only on BLOCK.
    pub error: Option<GovernanceError>,
}

impl ValidationResult {
    pub fn allowed(
        source: String,
        fields_selected: Vec<String>,
        controls: Controls,
        warnings: Vec<Advisory>,
    ) -> Self {
        debug_assert!(
            controls.blocking_passed(),
            "allowed result with a failed blocking control"
        );
        let status = if warnings.is_empty() {
            Status::Ok
        } else {
            Status::OkWithWarnings
        };
        Self {
            decision: Decision::Allow,
            status,
            source: Some(source),
            fields_selected,
            controls,
            warnings,
            error: None,
        }
    }

    pub fn blocked(
        error: GovernanceError,
        fields_selected: Vec<String>,
        controls: Controls,
        warnings: Vec<Advisory>,
    ) -> Self {
        Self {
            decision: Decision::Block,
            status: Status::Error,
            source: None,
            fields_selected,
            controls,
            warnings,
            error: Some(error),
        }
    }

    pub fn is_allowed(&self) -> bool {
        self.decision == Decision::Allow
    }

    pub fn error_code(&self) -> Option<&'static str> {
        self.error.as_ref().map(GovernanceError::code)
    }
}
