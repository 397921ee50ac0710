use std::fmt::Display;

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use tabnorm_cli::types::{Inspection, RunOutcome};
use tabnorm_model::{Column, ColumnType};

/// Print the run summary. Goes to stderr when the table itself went to stdout.
pub fn print_summary(outcome: &RunOutcome, to_stderr: bool) {
    let mut lines = Vec::new();
    lines.push(format!("Encoding: {}", encoding_label(outcome.encoding, outcome.restarted)));
    lines.push(column_table(&outcome.columns).to_string());
    lines.push(stats_table(outcome).to_string());
    if !outcome.missing_columns.is_empty() {
        lines.push(format!(
            "Missing columns (skipped): {}",
            outcome.missing_columns.join(", ")
        ));
    }
    emit(&lines.join("\n"), to_stderr);
}

/// Print the column plan of an `inspect` run.
pub fn print_inspection(inspection: &Inspection) {
    println!(
        "Encoding: {}",
        encoding_label(inspection.encoding, inspection.restarted)
    );
    println!("Sampled rows: {}", inspection.sampled_rows);
    println!(
        "Typed from sample: {} of {} source columns",
        inspection.types.len(),
        inspection.source_columns
    );
    println!("{}", column_table(&inspection.columns));
    let unsampled: Vec<&str> = inspection
        .columns
        .iter()
        .filter(|column| !inspection.types.contains(&column.original_name))
        .map(|column| column.original_name.as_str())
        .collect();
    if !unsampled.is_empty() {
        println!("No sampled values (string): {}", unsampled.join(", "));
    }
    if !inspection.missing_columns.is_empty() {
        println!(
            "Missing columns (skipped): {}",
            inspection.missing_columns.join(", ")
        );
    }
}

fn emit(text: &str, to_stderr: bool) {
    if to_stderr {
        eprintln!("{text}");
    } else {
        println!("{text}");
    }
}

fn encoding_label(encoding: &str, restarted: bool) -> String {
    if restarted {
        format!("{encoding} (fallback)")
    } else {
        encoding.to_string()
    }
}

fn column_table(columns: &[Column]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Source column"),
        header_cell("Output column"),
        header_cell("Type"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Center);
    for column in columns {
        table.add_row(vec![
            dim_cell(column.source_index),
            Cell::new(&column.original_name),
            name_cell(&column.sanitized_name),
            type_cell(column.inferred_type),
        ]);
    }
    table
}

fn stats_table(outcome: &RunOutcome) -> Table {
    let stats = outcome.stats;
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Rows read"),
        header_cell("Written"),
        header_cell("Duplicates"),
        header_cell("Rejected"),
    ]);
    apply_summary_table_style(&mut table);
    for index in 0..4 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    table.add_row(vec![
        Cell::new(stats.rows_read).add_attribute(Attribute::Bold),
        Cell::new(stats.rows_written)
            .fg(Color::Green)
            .add_attribute(Attribute::Bold),
        count_cell(stats.duplicates_removed, Color::Yellow),
        count_cell(stats.rows_rejected, Color::Red),
    ]);
    table
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
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

fn type_cell(column_type: ColumnType) -> Cell {
    match column_type {
        ColumnType::Date => Cell::new(column_type).fg(Color::Blue),
        ColumnType::Boolean => Cell::new(column_type).fg(Color::Magenta),
        ColumnType::String => dim_cell(column_type),
    }
}

fn name_cell(name: &str) -> Cell {
    if name.is_empty() {
        dim_cell("(empty)")
    } else {
        Cell::new(name).add_attribute(Attribute::Bold)
    }
}

fn count_cell(count: u64, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: Display>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
