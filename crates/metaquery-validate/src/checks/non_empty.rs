//! At least one field must be selected.

use metaquery_model::{GovernanceError, Selection};

pub fn check(selection: &Selection) -> Result<(), GovernanceError> {
    if selection.is_empty() {
        return Err(GovernanceError::EmptySelection);
    }
    Ok(())
}
