//! Field dictionary loading (`fields.yml`).

use std::path::Path;

use metaquery_model::{Field, FieldDictionary};
use serde_yaml::{Mapping, Value};
use tracing::{debug, warn};

use crate::document::{non_empty_string, parse_mapping, read_mapping, required_list};
use crate::error::{IngestError, Result};

/// Top-level key holding the field definitions.
pub const FIELDS_KEY: &str = "fields";

const NON_EMPTY_STRING: &str = "a non-empty string";

/// Load the field dictionary from a YAML file.
pub fn load_fields(path: &Path) -> Result<FieldDictionary> {
    let document = read_mapping(path)?;
    build_dictionary(&document, path)
}

/// Parse a field dictionary from YAML text. `origin` is used in error messages.
pub fn parse_fields(text: &str, origin: &Path) -> Result<FieldDictionary> {
    let document = parse_mapping(text, origin)?;
    build_dictionary(&document, origin)
}

fn build_dictionary(document: &Mapping, path: &Path) -> Result<FieldDictionary> {
    let items = required_list(document, FIELDS_KEY, path)?;
    let mut dictionary = FieldDictionary::new();
    for (index, item) in items.iter().enumerate() {
        let field = parse_field(item, index, path)?;
        if let Some(previous) = dictionary.insert(field) {
            warn!(
                field_id = %previous.field_id,
                path = %path.display(),
                "field_id declared more than once; last definition wins"
            );
        }
    }
    debug!(
        path = %path.display(),
        field_count = dictionary.len(),
        "loaded field dictionary"
    );
    Ok(dictionary)
}

fn parse_field(item: &Value, index: usize, path: &Path) -> Result<Field> {
    let Value::Mapping(entry) = item else {
        return Err(IngestError::invalid_entry(
            format!("{FIELDS_KEY}[{index}]"),
            "a mapping",
            path,
        ));
    };
    let required = |attribute: &str| {
        non_empty_string(entry.get(attribute)).ok_or_else(|| {
            IngestError::invalid_entry(
                format!("{FIELDS_KEY}[{index}].{attribute}"),
                NON_EMPTY_STRING,
                path,
            )
        })
    };
    let field_id = required("field_id")?;
    let datatable_id = required("datatable_id")?;
    let sql_expr = required("sql_expr")?;
    let label = match entry.get("label") {
        None | Some(Value::Null) => None,
        Some(Value::String(label)) => Some(label.trim().to_string()),
        Some(_) => {
            return Err(IngestError::invalid_entry(
                format!("{FIELDS_KEY}[{index}].label"),
                "a string if provided",
                path,
            ));
        }
    };
    Ok(Field {
        field_id,
        label,
        datatable_id,
        sql_expr,
    })
}
