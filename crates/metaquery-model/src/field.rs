use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A governed field: one SQL expression read from exactly one source table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    /// Stable identifier referenced by selections (e.g., "model_id").
    pub field_id: String,
    /// Human-readable label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Source table or view identifier (e.g., "MODELS").
    pub datatable_id: String,
    /// Trusted SQL expression emitted verbatim into the SELECT list.
    pub sql_expr: String,
}

impl Field {
    pub fn new(
        field_id: impl Into<String>,
        datatable_id: impl Into<String>,
        sql_expr: impl Into<String>,
    ) -> Self {
        Self {
            field_id: field_id.into(),
            label: None,
            datatable_id: datatable_id.into(),
            sql_expr: sql_expr.into(),
        }
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// Field definitions keyed by `field_id`, in declaration order.
///
/// Re-declaring an identifier replaces the earlier definition but keeps its
/// original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldDictionary {
    fields: IndexMap<String, Field>,
}

impl FieldDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a field, returning the definition it replaced (if any).
    pub fn insert(&mut self, field: Field) -> Option<Field> {
        self.fields.insert(field.field_id.clone(), field)
    }

    pub fn get(&self, field_id: &str) -> Option<&Field> {
        self.fields.get(field_id)
    }

    pub fn contains(&self, field_id: &str) -> bool {
        self.fields.contains_key(field_id)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Fields in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Field> {
        self.fields.values()
    }

    /// All known identifiers, sorted ascending.
    pub fn sorted_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.fields.keys().cloned().collect();
        ids.sort();
        ids
    }
}

impl FromIterator<Field> for FieldDictionary {
    fn from_iter<I: IntoIterator<Item = Field>>(iter: I) -> Self {
        let mut dictionary = Self::new();
        for field in iter {
            dictionary.insert(field);
        }
        dictionary
    }
}
