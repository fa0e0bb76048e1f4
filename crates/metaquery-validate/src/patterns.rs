use std::sync::LazyLock;

use regex::Regex;

static FIELD_ID_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_]+$").expect("Invalid field_id regex"));

/// Source identifiers end up verbatim in `FROM`, so only upper-case
/// alphanumerics and underscores are accepted.
static SOURCE_NAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z0-9_]+$").expect("Invalid datatable_id regex"));

/// Check a field identifier against `^[A-Za-z0-9_]+$`.
pub fn is_valid_field_id(field_id: &str) -> bool {
    FIELD_ID_REGEX.is_match(field_id)
}

/// Check a source identifier against `^[A-Z0-9_]+$`.
pub fn is_valid_source_name(datatable_id: &str) -> bool {
    SOURCE_NAME_REGEX.is_match(datatable_id)
}
