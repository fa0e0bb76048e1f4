//! Source identifiers reachable from the selection must be safe table names.

use indexmap::IndexSet;
use metaquery_model::{Field, GovernanceError};

use crate::patterns::is_valid_source_name;

/// Sources are reported in order of first appearance; field ids in
/// selection order, each once.
pub fn check(fields: &[&Field]) -> Result<(), GovernanceError> {
    let mut invalid_sources: IndexSet<&str> = IndexSet::new();
    let mut field_ids: IndexSet<&str> = IndexSet::new();
    for field in fields {
        if !is_valid_source_name(&field.datatable_id) {
            invalid_sources.insert(field.datatable_id.as_str());
            field_ids.insert(field.field_id.as_str());
        }
    }
    let Some(first) = invalid_sources.first() else {
        return Ok(());
    };
    Err(GovernanceError::InvalidSourceName {
        datatable_id: (*first).to_string(),
        invalid_sources: invalid_sources.iter().map(|source| (*source).to_string()).collect(),
        field_ids: field_ids.into_iter().map(str::to_string).collect(),
    })
}
