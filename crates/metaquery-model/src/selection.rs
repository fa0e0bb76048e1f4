use serde::{Deserialize, Serialize};

/// Ordered list of requested field identifiers. May contain duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Selection {
    field_ids: Vec<String>,
}

impl Selection {
    pub fn new(field_ids: Vec<String>) -> Self {
        Self { field_ids }
    }

    pub fn field_ids(&self) -> &[String] {
        &self.field_ids
    }

    pub fn len(&self) -> usize {
        self.field_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.field_ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.field_ids.iter().map(String::as_str)
    }
}

impl From<Vec<String>> for Selection {
    fn from(field_ids: Vec<String>) -> Self {
        Self::new(field_ids)
    }
}

impl<S: Into<String>> FromIterator<S> for Selection {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}
