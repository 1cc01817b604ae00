use anyhow::Result;
use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};
use serde_json::json;

use sysml_model::{Issue, Severity, ValidationReport};

use crate::types::{DiagramResult, ValidateResult};

pub fn print_validation(result: &ValidateResult) {
    println!("Model: {}", result.model_dir.display());
    println!(
        "Loaded {} top-level elements across {} categories",
        result.element_count, result.category_count
    );
    println!();

    if result.report.is_empty() {
        println!("No issues found.");
    } else {
        println!("{}", issue_table(&result.report));
        println!("{}", severity_table(&result.report));
    }
    println!("{}", summary_line(&result.report));
}

pub fn print_validation_json(result: &ValidateResult) -> Result<()> {
    println!("{}", validation_json(result)?);
    Ok(())
}

pub fn print_diagrams(result: &DiagramResult) {
    println!("Model: {}", result.model_dir.display());
    println!("Output: {}", result.output_dir.display());
    let mut table = Table::new();
    table.set_header(vec![header_cell("Diagram")]);
    apply_table_style(&mut table);
    for path in &result.files {
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        table.add_row(vec![Cell::new(name)]);
    }
    println!("{table}");
    println!("Generated {} diagrams.", result.files.len());
}

/// Machine-readable report: totals plus every issue in emission order.
pub fn validation_json(result: &ValidateResult) -> Result<String> {
    let report = &result.report;
    let value = json!({
        "modelDir": result.model_dir.display().to_string(),
        "elementCount": result.element_count,
        "categoryCount": result.category_count,
        "summary": {
            "errors": report.error_count(),
            "warnings": report.warning_count(),
            "info": report.info_count(),
        },
        "issues": report.issues,
    });
    Ok(serde_json::to_string_pretty(&value)?)
}

/// One row per issue, grouped by severity; emission order within a group.
pub fn issue_table(report: &ValidationReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Severity"),
        header_cell("Rule"),
        header_cell("Category"),
        header_cell("Element"),
        header_cell("Name"),
        header_cell("Message"),
    ]);
    apply_issue_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Center);
    for (severity, issues) in report.partition() {
        for issue in issues {
            table.add_row(issue_row(severity, issue));
        }
    }
    table
}

fn issue_row(severity: Severity, issue: &Issue) -> Vec<Cell> {
    let name = if issue.element_name.is_empty() {
        dim_cell("-")
    } else {
        Cell::new(&issue.element_name)
    };
    vec![
        severity_cell(severity),
        Cell::new(issue.rule.code()).add_attribute(Attribute::Bold),
        dim_cell(issue.rule.category().label()),
        Cell::new(&issue.element_id).fg(Color::Blue),
        name,
        Cell::new(&issue.message),
    ]
}

fn severity_table(report: &ValidationReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Severity"), header_cell("Count")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for severity in Severity::all() {
        table.add_row(vec![
            severity_cell(*severity),
            count_cell(report.count(*severity), severity_color(*severity)),
        ]);
    }
    table
}

pub fn summary_line(report: &ValidationReport) -> String {
    let verdict = if report.is_clean() { "PASSED" } else { "FAILED" };
    format!(
        "{verdict}: {} errors, {} warnings, {} info",
        report.error_count(),
        report.warning_count(),
        report.info_count()
    )
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_issue_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(160);
    if table.column_count() >= 6 {
        table.set_constraints(vec![
            ColumnConstraint::UpperBoundary(Width::Fixed(9)),
            ColumnConstraint::UpperBoundary(Width::Fixed(28)),
            ColumnConstraint::UpperBoundary(Width::Fixed(15)),
            ColumnConstraint::UpperBoundary(Width::Fixed(16)),
            ColumnConstraint::UpperBoundary(Width::Percentage(20)),
            ColumnConstraint::UpperBoundary(Width::Percentage(45)),
        ]);
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn severity_cell(severity: Severity) -> Cell {
    match severity {
        Severity::Error => Cell::new("ERROR")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
        Severity::Warning => Cell::new("WARN").fg(Color::Yellow),
        Severity::Info => Cell::new("INFO").fg(Color::Cyan),
    }
}

fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Error => Color::Red,
        Severity::Warning => Color::Yellow,
        Severity::Info => Color::Cyan,
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
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

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
