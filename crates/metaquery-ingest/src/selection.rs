//! Selection loading (`selection.yml`).

use std::path::Path;

use metaquery_model::Selection;
use serde_yaml::Mapping;
use tracing::debug;

use crate::document::{non_empty_string, parse_mapping, read_mapping, required_list};
use crate::error::{IngestError, Result};

/// Top-level key holding the requested field identifiers.
pub const SELECTION_KEY: &str = "selected_field_ids";

/// Load a selection from a YAML file.
pub fn load_selection(path: &Path) -> Result<Selection> {
    let document = read_mapping(path)?;
    build_selection(&document, path)
}

/// Parse a selection from YAML text. `origin` is used in error messages.
pub fn parse_selection(text: &str, origin: &Path) -> Result<Selection> {
    let document = parse_mapping(text, origin)?;
    build_selection(&document, origin)
}

fn build_selection(document: &Mapping, path: &Path) -> Result<Selection> {
    let items = required_list(document, SELECTION_KEY, path)?;
    let field_ids = items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            non_empty_string(Some(item)).ok_or_else(|| {
                IngestError::invalid_entry(
                    format!("{SELECTION_KEY}[{index}]"),
                    "a non-empty string",
                    path,
                )
            })
        })
        .collect::<Result<Vec<String>>>()?;
    debug!(
        path = %path.display(),
        selected = field_ids.len(),
        "loaded selection"
    );
    Ok(Selection::new(field_ids))
}
