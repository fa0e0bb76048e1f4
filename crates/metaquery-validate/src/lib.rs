//! MetaQuery V1 governance validation.
//!
//! A selection is checked against the field dictionary by an ordered list of
//! controls. The first blocking failure stops the pipeline:
//!
//! 1. **non_empty_selection**: at least one field is selected
//! 2. **all_fields_exist**: identifiers are well-formed and defined
//! 3. **valid_source_name**: every referenced source matches `^[A-Z0-9_]+$`
//! 4. **no_duplicates**: repeated identifiers are dropped with a warning
//! 5. **single_source**: all fields read from one source
//!
//! Governance failures never surface as `Err`; they are recorded in the
//! returned [`ValidationResult`].
//!
//! # Example
//!
//! ```ignore
//! use metaquery_validate::validate;
//!
//! let result = validate(&dictionary, &selection);
//! if result.is_allowed() {
//!     println!("source: {:?}", result.source);
//! }
//! ```

mod checks;
mod patterns;

use metaquery_model::{FieldDictionary, Selection, ValidationResult};

pub use checks::duplicates::{Deduplicated, deduplicate};
pub use patterns::{is_valid_field_id, is_valid_source_name};

/// Validate a selection against the field dictionary.
///
/// Pure: the same inputs always produce the same result.
pub fn validate(dictionary: &FieldDictionary, selection: &Selection) -> ValidationResult {
    checks::run_all(dictionary, selection)
}
