//! Shared YAML document handling.

use std::io::ErrorKind;
use std::path::Path;

use serde_yaml::{Mapping, Value};

use crate::error::{IngestError, Result};

pub(crate) fn read_mapping(path: &Path) -> Result<Mapping> {
    let text = std::fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => IngestError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => IngestError::FileRead {
            path: path.to_path_buf(),
            source,
        },
    })?;
    parse_mapping(&text, path)
}

/// Parse a document whose top level must be a mapping. An empty or
/// comment-only document parses as null and counts as an empty mapping.
pub(crate) fn parse_mapping(text: &str, path: &Path) -> Result<Mapping> {
    let value: Value = serde_yaml::from_str(text).map_err(|source| IngestError::Yaml {
        path: path.to_path_buf(),
        source,
    })?;
    match value {
        Value::Null => Ok(Mapping::new()),
        Value::Mapping(mapping) => Ok(mapping),
        _ => Err(IngestError::NotAMapping {
            path: path.to_path_buf(),
        }),
    }
}

/// Fetch the list stored under `key`.
pub(crate) fn required_list<'a>(
    document: &'a Mapping,
    key: &'static str,
    path: &Path,
) -> Result<&'a [Value]> {
    match document.get(key) {
        None | Some(Value::Null) => Err(IngestError::MissingKey {
            key,
            path: path.to_path_buf(),
        }),
        Some(Value::Sequence(items)) => Ok(items.as_slice()),
        Some(_) => Err(IngestError::NotAList {
            key,
            path: path.to_path_buf(),
        }),
    }
}

/// Trimmed string value, if present and not blank.
pub(crate) fn non_empty_string(value: Option<&Value>) -> Option<String> {
    match value {
        Some(Value::String(text)) if !text.trim().is_empty() => Some(text.trim().to_string()),
        _ => None,
    }
}
