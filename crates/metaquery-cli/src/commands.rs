use anyhow::{Context, Result};
use chrono::Utc;
use comfy_table::{Cell, Color, Table};
use tracing::{info, info_span};

use metaquery_cli::pipeline::{build_outputs, ingest, output};
use metaquery_ingest::load_fields;
use metaquery_validate::is_valid_source_name;

use crate::cli::{BuildArgs, FieldsArgs};
use crate::summary::{apply_table_style, dim_cell, header_cell};
use crate::types::BuildReport;

pub fn run_fields(args: &FieldsArgs) -> Result<()> {
    let dictionary = load_fields(&args.fields)
        .with_context(|| format!("load field dictionary {}", args.fields.display()))?;
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Label"),
        header_cell("Source"),
        header_cell("SQL"),
    ]);
    apply_table_style(&mut table);
    let mut fields: Vec<_> = dictionary.iter().collect();
    fields.sort_by(|a, b| a.field_id.cmp(&b.field_id));
    for field in fields {
        let label = match &field.label {
            Some(label) => Cell::new(label),
            None => dim_cell("-"),
        };
        // Fields with unsafe source names are blocked when selected.
        let source = if is_valid_source_name(&field.datatable_id) {
            Cell::new(&field.datatable_id)
        } else {
            Cell::new(&field.datatable_id).fg(Color::Red)
        };
        table.add_row(vec![
            Cell::new(&field.field_id),
            label,
            source,
            Cell::new(&field.sql_expr),
        ]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_build(args: &BuildArgs) -> Result<BuildReport> {
    let build_span = info_span!("build", selection = %args.selection.display());
    let _build_guard = build_span.enter();

    let inputs = ingest(&args.fields, &args.selection)?;
    let build = build_outputs(&inputs.dictionary, &inputs.selection, Utc::now());

    let artifacts = if args.dry_run {
        info!("dry run, no artifacts written");
        None
    } else {
        Some(output(&build, &args.output_dir)?)
    };

    Ok(BuildReport {
        output: build,
        output_dir: args.output_dir.clone(),
        artifacts,
    })
}
