//! Governance errors and advisories.
//!
//! These are data, not control flow: the pipeline stores them in the
//! [`ValidationResult`](crate::ValidationResult) so a blocked run can still be
//! audited and explained. Each variant serializes with its `code` as a tag
//! followed by the context specific to the failing check.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A blocking governance failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[serde(tag = "code", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GovernanceError {
    #[error("No fields selected. At least one field is required.")]
    EmptySelection,

    #[error(
        "field_id must be alphanumeric + underscore only: {}",
        .invalid_field_ids.join(", ")
    )]
    InvalidFieldId { invalid_field_ids: Vec<String> },

    #[error(
        "field_id(s) not defined in the field dictionary: {}",
        .unknown_field_ids.join(", ")
    )]
    FieldNotFound {
        unknown_field_ids: Vec<String>,
        available_fields: Vec<String>,
    },

    #[error("datatable_id must match pattern ^[A-Z0-9_]+$ (got '{datatable_id}')")]
    InvalidSourceName {
        #[serde(rename = "source")]
        datatable_id: String,
        invalid_sources: Vec<String>,
        field_ids: Vec<String>,
    },

    #[error(
        "Fields span multiple sources ({}). V1 restriction: single-source queries only.",
        .sources_found.join(", ")
    )]
    MultiSourceNotAllowed {
        sources_found: Vec<String>,
        fields_by_source: IndexMap<String, Vec<String>>,
    },
}

impl GovernanceError {
    /// Stable machine-readable code.
    pub fn code(&self) -> &'static str {
        match self {
            GovernanceError::EmptySelection => "EMPTY_SELECTION",
            GovernanceError::InvalidFieldId { .. } => "INVALID_FIELD_ID",
            GovernanceError::FieldNotFound { .. } => "FIELD_NOT_FOUND",
            GovernanceError::InvalidSourceName { .. } => "INVALID_SOURCE_NAME",
            GovernanceError::MultiSourceNotAllowed { .. } => "MULTI_SOURCE_NOT_ALLOWED",
        }
    }

    /// Suggested remediation, where one exists.
    pub fn recommendation(&self) -> Option<&'static str> {
        match self {
            GovernanceError::MultiSourceNotAllowed { .. } => {
                Some("Create a pre-validated view (V2) or define explicit joins (V3).")
            }
            _ => None,
        }
    }
}

/// A non-blocking finding. The decision is unaffected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "code", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Advisory {
    /// The same identifier was selected more than once.
    DuplicateFields { field_id: String, count: usize },
}

impl Advisory {
    pub fn code(&self) -> &'static str {
        match self {
            Advisory::DuplicateFields { .. } => "DUPLICATE_FIELDS",
        }
    }
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Advisory::DuplicateFields { field_id, count } => write!(
                f,
                "field_id '{field_id}' appears {count} times. Auto-deduplicated to single occurrence."
            ),
        }
    }
}
