use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use bfd_core::{CellUsability, RejectedCell};

use crate::commands::CheckReport;

pub fn print_check(report: &CheckReport) {
    println!("Configuration: {}", report.source.display());
    println!("Rows: {}", report.summary.total_rows);
    println!("{}", category_table(report));
    if report.rejections.is_empty() {
        return;
    }
    println!();
    println!("Rejected cells:");
    println!("{}", rejection_table(&report.rejections));
}

pub fn category_table(report: &CheckReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Category"),
        header_cell("Accepted"),
        header_cell("Rejected"),
    ]);
    apply_table_style(&mut table, 80);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);

    let mut total_accepted = 0usize;
    let mut total_rejected = 0usize;
    for summary in &report.summary.categories {
        total_accepted += summary.accepted;
        total_rejected += summary.rejected;
        table.add_row(vec![
            Cell::new(summary.category.column_name())
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(summary.accepted),
            count_cell(summary.rejected, Color::Yellow),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(total_accepted).add_attribute(Attribute::Bold),
        count_cell(total_rejected, Color::Yellow).add_attribute(Attribute::Bold),
    ]);
    table
}

pub fn rejection_table(rejections: &[RejectedCell]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Line"),
        header_cell("Category"),
        header_cell("Field"),
        header_cell("Reason"),
        header_cell("Cell"),
    ]);
    apply_table_style(&mut table, 160);
    align_column(&mut table, 0, CellAlignment::Right);
    for rejected in rejections {
        table.add_row(vec![
            Cell::new(rejected.line_number),
            Cell::new(rejected.category.column_name()),
            Cell::new(&rejected.field),
            reason_cell(rejected.reason),
            Cell::new(&rejected.text),
        ]);
    }
    table
}

fn apply_table_style(table: &mut Table, width: u16) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(width);
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

fn reason_cell(reason: CellUsability) -> Cell {
    let color = match reason {
        CellUsability::Null => Color::DarkGrey,
        CellUsability::Coded => Color::Blue,
        _ => Color::Yellow,
    };
    Cell::new(reason).fg(color)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        Cell::new(count).fg(Color::DarkGrey)
    }
}
