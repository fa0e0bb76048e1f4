//! Single-table SQL generation.

use metaquery_model::{Field, FieldDictionary, ValidationResult};

const INDENT: &str = "    ";

/// Render a `SELECT` over one source, one expression per line.
///
/// Expressions are emitted verbatim, in the order given. The output always
/// ends with a newline and is byte-identical for identical input.
pub fn generate_sql(source: &str, fields: &[&Field]) -> String {
    let mut sql = String::from("SELECT\n");
    let last = fields.len().saturating_sub(1);
    for (idx, field) in fields.iter().enumerate() {
        sql.push_str(INDENT);
        sql.push_str(&field.sql_expr);
        if idx < last {
            sql.push(',');
        }
        sql.push('\n');
    }
    sql.push_str("FROM ");
    sql.push_str(source);
    sql.push_str(";\n");
    sql
}

/// SQL for an allowed result, resolving `fields_selected` through the
/// dictionary. `None` when the selection was blocked.
pub fn render_query(result: &ValidationResult, dictionary: &FieldDictionary) -> Option<String> {
    if !result.is_allowed() {
        return None;
    }
    let source = result.source.as_deref()?;
    let fields: Vec<&Field> = result
        .fields_selected
        .iter()
        .filter_map(|field_id| dictionary.get(field_id))
        .collect();
    Some(generate_sql(source, &fields))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_field_has_no_trailing_comma() {
        let field = Field::new("pd", "MODELS", "pd");
        assert_eq!(generate_sql("MODELS", &[&field]), "SELECT\n    pd\nFROM MODELS;\n");
    }

    #[test]
    fn expressions_are_not_escaped() {
        let field = Field::new("age", "CUSTOMERS", "DATEDIFF('year', birth_date, NOW()) AS age");
        let sql = generate_sql("CUSTOMERS", &[&field]);
        assert!(sql.contains("    DATEDIFF('year', birth_date, NOW()) AS age\n"));
    }
}
