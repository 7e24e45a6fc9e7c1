//! Terminal and text rendering of analysis results.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use inflammation_core::DailyStatistics;

/// Formats a reading with a fixed number of decimals; NaN renders as `nan`.
pub fn format_reading(value: f64, precision: usize) -> String {
    if value.is_nan() {
        "nan".to_string()
    } else {
        format!("{value:.precision$}")
    }
}

/// One row per day with the mean, max and min across patients.
pub fn stats_table(stats: &DailyStatistics, precision: usize) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Day"),
        header_cell("Mean"),
        header_cell("Max"),
        header_cell("Min"),
    ]);
    apply_table_style(&mut table);
    for index in 1..4 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for day in 0..stats.n_days() {
        table.add_row(vec![
            Cell::new(day),
            reading_cell(stats.mean[day], precision),
            reading_cell(stats.max[day], precision),
            reading_cell(stats.min[day], precision),
        ]);
    }
    table
}

/// Comma-separated rows, one patient per line, no trailing newline.
pub fn table_csv(table: &inflammation_model::Table, precision: usize) -> String {
    table
        .rows()
        .map(|row| {
            row.iter()
                .map(|&value| format_reading(value, precision))
                .collect::<Vec<_>>()
                .join(",")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn reading_cell(value: f64, precision: usize) -> Cell {
    if value.is_nan() {
        Cell::new("nan").fg(Color::DarkGrey)
    } else {
        Cell::new(format_reading(value, precision))
    }
}
