//! Selected identifiers must be well-formed and defined in the dictionary.

use indexmap::IndexSet;
use metaquery_model::{Field, FieldDictionary, GovernanceError, Selection};

use crate::patterns::is_valid_field_id;

/// Resolve every selected identifier, in selection order (duplicates kept).
///
/// Malformed identifiers are reported before unknown ones; each list names
/// every offending identifier once, in selection order.
pub fn check<'a>(
    dictionary: &'a FieldDictionary,
    selection: &Selection,
) -> Result<Vec<&'a Field>, GovernanceError> {
    let invalid: IndexSet<&str> = selection
        .iter()
        .filter(|field_id| !is_valid_field_id(field_id))
        .collect();
    if !invalid.is_empty() {
        return Err(GovernanceError::InvalidFieldId {
            invalid_field_ids: invalid.into_iter().map(str::to_string).collect(),
        });
    }

    let unknown: IndexSet<&str> = selection
        .iter()
        .filter(|field_id| !dictionary.contains(field_id))
        .collect();
    if !unknown.is_empty() {
        return Err(GovernanceError::FieldNotFound {
            unknown_field_ids: unknown.into_iter().map(str::to_string).collect(),
            available_fields: dictionary.sorted_ids(),
        });
    }

    Ok(selection
        .iter()
        .filter_map(|field_id| dictionary.get(field_id))
        .collect())
}
