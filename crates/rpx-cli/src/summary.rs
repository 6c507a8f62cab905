use std::path::Path;

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use rpx_cli::pipeline::{JobResult, OutputSummary};

pub fn print_summary(result: &JobResult) {
    println!("Job: {}", result.kind.name());
    println!("Input: {} ({} records)", result.input.display(), result.records);
    if let Some(rows) = result.reference_rows {
        println!("Reference rows: {rows}");
    }
    if let Some(stats) = &result.enrichment {
        println!(
            "Enriched: {} matched, {} without reference row",
            stats.matched, stats.unmatched
        );
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Format"),
        header_cell("Output"),
        header_cell("Bytes"),
        header_cell("Status"),
    ]);
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
    if let Some(column) = table.column_mut(2) {
        column.set_cell_alignment(CellAlignment::Right);
    }
    for output in &result.outputs {
        table.add_row(vec![
            Cell::new(output.format.label())
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            path_cell(&output.path),
            Cell::new(output.bytes),
            status_cell(output),
        ]);
    }
    println!("{table}");
}

fn status_cell(output: &OutputSummary) -> Cell {
    if output.written {
        Cell::new("✓ written")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold)
    } else {
        Cell::new("dry run").fg(Color::DarkGrey)
    }
}

fn path_cell(path: &Path) -> Cell {
    Cell::new(path.display())
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}
