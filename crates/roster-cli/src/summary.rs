use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{CellAlignment, ContentArrangement, Table};

use crate::types::ConvertResult;

pub fn print_summary(result: &ConvertResult) {
    println!("Roster: {}", result.input.display());
    match &result.output {
        Some(path) => println!("Schedule: {}", path.display()),
        None => println!("Schedule: (dry run, nothing written)"),
    }
    println!(
        "Rows: {} read, {} without a course code",
        result.rows_read, result.rows_skipped
    );
    if result.courses.is_empty() {
        return;
    }

    let mut table = Table::new();
    table.set_header(vec!["Course", "Days", "Sessions"]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for course in &result.courses {
        table.add_row(vec![
            course.course.clone(),
            course.days.to_string(),
            course.sessions.to_string(),
        ]);
    }
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
