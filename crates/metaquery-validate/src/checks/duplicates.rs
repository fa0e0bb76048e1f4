//! Repeated identifiers are dropped, keeping the first occurrence.

use indexmap::IndexMap;
use metaquery_model::Advisory;

/// Identifiers with duplicates removed, plus one advisory per repeated id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deduplicated {
    pub field_ids: Vec<String>,
    pub advisories: Vec<Advisory>,
}

/// Remove repeated identifiers, preserving first-occurrence order.
///
/// Each identifier seen more than once yields a `DUPLICATE_FIELDS` advisory
/// carrying its total occurrence count, ordered by first occurrence.
pub fn deduplicate(field_ids: &[String]) -> Deduplicated {
    let mut counts: IndexMap<&str, usize> = IndexMap::new();
    for field_id in field_ids {
        *counts.entry(field_id.as_str()).or_insert(0) += 1;
    }
    let advisories = counts
        .iter()
        .filter(|(_, count)| **count > 1)
        .map(|(field_id, count)| Advisory::DuplicateFields {
            field_id: (*field_id).to_string(),
            count: *count,
        })
        .collect();
    Deduplicated {
        field_ids: counts.into_keys().map(str::to_string).collect(),
        advisories,
    }
}
