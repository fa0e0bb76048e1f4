use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use metaquery_model::{Control, ControlOutcome, ValidationResult};

use crate::types::BuildReport;

pub fn print_summary(report: &BuildReport) {
    let result = &report.output.result;
    println!("Decision: {}", result.decision);
    println!("Status: {}", result.status);
    if let Some(source) = &result.source {
        println!("Source: {source}");
    }
    println!("Fields: {} selected", result.fields_selected.len());

    let mut table = Table::new();
    table.set_header(vec![header_cell("Control"), header_cell("Outcome")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Center);
    for control in Control::ALL {
        table.add_row(vec![
            Cell::new(control.as_str()),
            outcome_cell(result.controls.get(control)),
        ]);
    }
    println!("{table}");

    print_warnings(result);
    print_error(result);

    match &report.artifacts {
        Some(paths) => {
            println!("Output: {}", report.output_dir.display());
            println!("Audit: {}", paths.audit.display());
            println!("Explanation: {}", paths.explanation.display());
            if let Some(query) = &paths.query {
                println!("Query: {}", query.display());
            }
        }
        None => {
            println!("Dry run: no artifacts written");
            if let Some(sql) = &report.output.sql {
                println!();
                print!("{sql}");
            }
        }
    }
}

fn print_warnings(result: &ValidationResult) {
    if result.warnings.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell("Warning"), header_cell("Message")]);
    apply_table_style(&mut table);
    for advisory in &result.warnings {
        table.add_row(vec![
            Cell::new(advisory.code()).fg(Color::Yellow),
            Cell::new(advisory.to_string()),
        ]);
    }
    println!();
    println!("Warnings:");
    println!("{table}");
}

fn print_error(result: &ValidationResult) {
    let Some(error) = &result.error else {
        return;
    };
    eprintln!("Blocked: {}: {error}", error.code());
    if let Some(recommendation) = error.recommendation() {
        eprintln!("Recommendation: {recommendation}");
    }
}

fn outcome_cell(outcome: Option<ControlOutcome>) -> Cell {
    match outcome {
        Some(ControlOutcome::Pass) => Cell::new("✓ PASS")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold),
        Some(ControlOutcome::Fail) => Cell::new("✗ FAIL")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
        None => dim_cell("-"),
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
    if table.column_count() >= 4 {
        table.set_constraints(vec![
            ColumnConstraint::UpperBoundary(Width::Fixed(24)),
            ColumnConstraint::UpperBoundary(Width::Percentage(30)),
            ColumnConstraint::UpperBoundary(Width::Fixed(20)),
            ColumnConstraint::LowerBoundary(Width::Fixed(8)),
        ]);
    }
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(80);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

pub fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
