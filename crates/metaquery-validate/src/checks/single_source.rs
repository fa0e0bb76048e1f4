//! V1 queries read from exactly one source.

use indexmap::IndexMap;
use metaquery_model::{Field, GovernanceError};

/// Resolve the single shared source of the (deduplicated) fields.
///
/// Sources are grouped by first appearance; fields keep selection order
/// within their source.
pub fn check(fields: &[&Field]) -> Result<String, GovernanceError> {
    let mut fields_by_source: IndexMap<String, Vec<String>> = IndexMap::new();
    for field in fields {
        fields_by_source
            .entry(field.datatable_id.clone())
            .or_default()
            .push(field.field_id.clone());
    }
    if fields_by_source.len() == 1
        && let Some(source) = fields_by_source.keys().next()
    {
        return Ok(source.clone());
    }
    Err(GovernanceError::MultiSourceNotAllowed {
        sources_found: fields_by_source.keys().cloned().collect(),
        fields_by_source,
    })
}
