use std::cmp::Ordering;
use std::path::Path;

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use borderpost_cli::types::{FeaturesResult, GeojsonResult, NormalizeResult};
use borderpost_validate::{Severity, ValidationReport};

pub fn print_normalize_summary(result: &NormalizeResult) {
    println!("Input: {}", result.input.display());
    println!("Output: {}", result.output_dir.display());
    if result.dry_run {
        println!("Dry run: no files written");
    }
    if let Some(path) = &result.geojson {
        println!("GeoJSON: {}", path.display());
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Set"),
        header_cell("Records"),
        header_cell("File"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for artifact in &result.artifacts {
        table.add_row(vec![
            set_cell(artifact.label()),
            Cell::new(artifact.records),
            file_cell(&artifact.path, result.dry_run),
        ]);
    }
    println!("{table}");

    let ingest = &result.ingest;
    let normalize = &result.normalize;
    let mut counts = Table::new();
    counts.set_header(vec![header_cell("Stage"), header_cell("Outcome"), header_cell("Count")]);
    apply_table_style(&mut counts);
    align_column(&mut counts, 2, CellAlignment::Right);
    for (stage, outcome, count, color) in [
        ("Ingest", "Checkpoints read", ingest.checkpoints, None),
        ("Ingest", "Malformed entries skipped", ingest.skipped, Some(Color::Yellow)),
        ("Normalize", "Admitted", normalize.admitted, Some(Color::Green)),
        ("Normalize", "Other checkpoint type", normalize.wrong_type, None),
        ("Normalize", "Closed gate", normalize.closed, None),
        ("Normalize", "Without local name", normalize.unnamed, Some(Color::Yellow)),
        ("Normalize", "Unknown status", normalize.unknown_status, Some(Color::Yellow)),
    ] {
        counts.add_row(vec![Cell::new(stage), Cell::new(outcome), count_cell(count, color)]);
    }
    println!("{counts}");
}

pub fn print_geojson_summary(result: &GeojsonResult) {
    println!("Output: {}", result.output.display());
    println!("Features: {}", result.report.features);
    if result.report.skipped > 0 {
        println!("Skipped: {}", result.report.skipped);
    }
}

pub fn print_features_summary(result: &FeaturesResult) {
    println!("Wrote {}", result.output.display());
    println!("  - Processed {} features", result.report.features);
    println!("  - Updated {} name fields", result.report.names_updated);
    println!("  - Extracted {} statuses", result.report.statuses_extracted);
}

pub fn print_validation_summary(reports: &[ValidationReport]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("File"),
        header_cell("Status"),
        header_cell("Features"),
        header_cell("Errors"),
        header_cell("Warnings"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Center);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    for report in reports {
        table.add_row(vec![
            Cell::new(report_label(report)),
            status_cell(report.is_valid()),
            report
                .feature_count
                .map_or_else(|| dim_cell("-"), Cell::new),
            count_cell(report.error_count(), Some(Color::Red)),
            count_cell(report.warning_count(), Some(Color::Yellow)),
        ]);
    }
    println!("{table}");
    print_issue_table(reports);
}

fn print_issue_table(reports: &[ValidationReport]) {
    let mut issues = Vec::new();
    for report in reports {
        for issue in &report.issues {
            issues.push((report_label(report), issue));
        }
    }
    if issues.is_empty() {
        return;
    }
    // Stable sort keeps discovery order within a file and severity.
    issues.sort_by(|a, b| {
        let file = a.0.cmp(&b.0);
        if file != Ordering::Equal {
            return file;
        }
        severity_rank(b.1.severity()).cmp(&severity_rank(a.1.severity()))
    });
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("File"),
        header_cell("Severity"),
        header_cell("Code"),
        header_cell("Feature"),
        header_cell("Message"),
    ]);
    apply_issue_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Center);
    align_column(&mut table, 2, CellAlignment::Center);
    align_column(&mut table, 3, CellAlignment::Right);
    for (file, issue) in issues {
        table.add_row(vec![
            Cell::new(file),
            severity_cell(issue.severity()),
            Cell::new(issue.code()),
            issue.feature_index().map_or_else(|| dim_cell("-"), Cell::new),
            Cell::new(issue.message()),
        ]);
    }
    println!();
    println!("Issues:");
    println!("{table}");
}

fn report_label(report: &ValidationReport) -> String {
    report
        .path
        .as_deref()
        .map_or_else(|| "-".to_string(), |p| p.display().to_string())
}

fn file_cell(path: &Path, planned: bool) -> Cell {
    let cell = Cell::new(path.display());
    if planned { cell.fg(Color::DarkGrey) } else { cell }
}

fn set_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Blue)
        .add_attribute(Attribute::Bold)
}

fn status_cell(valid: bool) -> Cell {
    if valid {
        Cell::new("VALID")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold)
    } else {
        Cell::new("INVALID")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold)
    }
}

fn count_cell(count: usize, color: Option<Color>) -> Cell {
    match color {
        Some(color) if count > 0 => Cell::new(count).fg(color).add_attribute(Attribute::Bold),
        Some(_) => dim_cell(count),
        None => Cell::new(count),
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(120);
}

fn apply_issue_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(160);
    if table.column_count() >= 5 {
        table.set_constraints(vec![
            ColumnConstraint::UpperBoundary(Width::Percentage(30)),
            ColumnConstraint::UpperBoundary(Width::Fixed(9)),
            ColumnConstraint::UpperBoundary(Width::Fixed(7)),
            ColumnConstraint::LowerBoundary(Width::Fixed(7)),
            ColumnConstraint::UpperBoundary(Width::Percentage(50)),
        ]);
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn severity_cell(severity: Severity) -> Cell {
    let cell = Cell::new(severity.label().to_uppercase());
    match severity {
        Severity::Error => cell.fg(Color::Red),
        Severity::Warning => cell.fg(Color::Yellow),
    }
}

fn severity_rank(severity: Severity) -> u8 {
    match severity {
        Severity::Error => 2,
        Severity::Warning => 1,
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
