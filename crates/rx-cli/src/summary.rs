use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use rx_cli::pipeline::RunResult;

pub fn print_summary(result: &RunResult, top: usize) {
    let summary = &result.summary;
    println!(
        "Records: {} read, {} valid, {} rejected",
        summary.records_read, summary.valid_records, summary.rejected_records
    );
    match &result.report_path {
        Some(path) => println!("Report: {}", path.display()),
        None => println!("Report: skipped (dry run)"),
    }
    if result.entries.is_empty() {
        println!("No drugs aggregated.");
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Rank"),
        header_cell("Drug"),
        header_cell("Prescribers"),
        header_cell("Total cost"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    let shown = result.entries.len().min(top);
    for (index, entry) in result.entries.iter().take(top).enumerate() {
        table.add_row(vec![
            dim_cell(index + 1),
            Cell::new(&entry.drug_name).fg(Color::Blue),
            Cell::new(entry.prescriber_count),
            Cell::new(entry.total_cost),
        ]);
    }
    if shown < result.entries.len() {
        table.add_row(vec![
            dim_cell("..."),
            dim_cell(format!("{} more", result.entries.len() - shown)),
            dim_cell("-"),
            dim_cell("-"),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(format!("{} drugs", summary.drug_count))
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        Cell::new(summary.grand_total).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
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

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
