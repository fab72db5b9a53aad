//! Run summary printing.

use std::collections::BTreeMap;

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};

use crate::types::PrepareResult;

#[derive(Debug, Default)]
struct SchoolCounts {
    clients: usize,
    due: usize,
    groups: usize,
}

pub fn print_summary(result: &PrepareResult) {
    println!("Delivery date: {}", result.delivery_date);
    match &result.output_path {
        Some(path) => println!("Output: {}", path.display()),
        None => println!("Output: (dry run)"),
    }

    let mut by_school: BTreeMap<&str, SchoolCounts> = BTreeMap::new();
    for notice in result.notices.values() {
        let counts = by_school.entry(notice.school.as_str()).or_default();
        counts.clients += 1;
        if !notice.vaccines_due.is_empty() {
            counts.due += 1;
        }
        counts.groups += notice.received.len();
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        header_cell("School"),
        header_cell("Clients"),
        header_cell("Due"),
        header_cell("Received groups"),
    ]);
    for column in [1, 2, 3] {
        if let Some(column) = table.column_mut(column) {
            column.set_cell_alignment(CellAlignment::Right);
        }
    }

    for (school, counts) in &by_school {
        table.add_row(vec![
            Cell::new(school),
            Cell::new(counts.clients),
            Cell::new(counts.due),
            Cell::new(counts.groups),
        ]);
    }
    table.add_row(vec![
        Cell::new("Total").add_attribute(Attribute::Bold),
        Cell::new(result.notices.len()).add_attribute(Attribute::Bold),
        Cell::new(
            result
                .notices
                .values()
                .filter(|notice| !notice.vaccines_due.is_empty())
                .count(),
        )
        .add_attribute(Attribute::Bold),
        Cell::new(result.group_count()).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
    println!(
        "{} rows, {} clients, {} schools",
        result.rows,
        result.notices.len(),
        result.school_count()
    );
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}
