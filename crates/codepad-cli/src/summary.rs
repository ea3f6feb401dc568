use std::cmp::Ordering;

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use codepad_model::{Severity, ValidationReport};
use codepad_validate::RULE_LIBRARY;

use crate::types::{CheckResult, PreviewResult};

pub fn print_preview_summary(result: &PreviewResult) {
    println!("Preview: {}", result.out.display());
    println!(
        "Viewport: {} ({}px)",
        result.viewport,
        result.viewport.width_px()
    );
    println!("Document: {} bytes", result.bytes);
}

pub fn print_check_summary(result: &CheckResult) {
    for report in &result.reports {
        print_file_report(report);
    }
    print_totals(&result.reports);
    if let Some(path) = &result.report_path {
        println!("Report: {}", path.display());
    }
}

fn print_file_report(report: &ValidationReport) {
    println!();
    println!("{} ({})", report.file_name, report.role);
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Rule"),
        header_cell("Category"),
        header_cell("Severity"),
        header_cell("Status"),
        header_cell("Suggestion"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Center);
    align_column(&mut table, 3, CellAlignment::Center);

    let mut results: Vec<_> = report.results.iter().collect();
    // Failures first, worst severity on top, then stable by rule id
    results.sort_by(|a, b| {
        let failed = a.passed.cmp(&b.passed);
        if failed != Ordering::Equal {
            return failed;
        }
        let severity = severity_rank(b.severity).cmp(&severity_rank(a.severity));
        if severity != Ordering::Equal {
            return severity;
        }
        a.rule_id.cmp(&b.rule_id)
    });
    for result in results {
        let suggestion = if result.passed {
            "-"
        } else {
            result.suggestion.as_str()
        };
        table.add_row(vec![
            Cell::new(&result.rule_id),
            Cell::new(result.category.as_str()),
            severity_cell(result.severity),
            status_cell(result.passed),
            Cell::new(suggestion),
        ]);
    }
    println!("{table}");
    println!(
        "Score: {:.0}% ({}/{} passed, {} errors, {} warnings)",
        report.score(),
        report.passed_count(),
        report.total(),
        report.error_count(),
        report.warning_count()
    );
}

fn print_totals(reports: &[ValidationReport]) {
    if reports.len() < 2 {
        return;
    }
    let errors: usize = reports.iter().map(ValidationReport::error_count).sum();
    let warnings: usize = reports.iter().map(ValidationReport::warning_count).sum();
    println!();
    println!(
        "Total: {} files, {} errors, {} warnings",
        reports.len(),
        errors,
        warnings
    );
}

pub fn print_rules_table() {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Rule"),
        header_cell("Category"),
        header_cell("Severity"),
        header_cell("Message"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Center);
    for rule in RULE_LIBRARY {
        table.add_row(vec![
            Cell::new(rule.id),
            Cell::new(rule.category.as_str()),
            severity_cell(rule.severity),
            Cell::new(rule.message),
        ]);
    }
    println!("{table}");
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

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

fn severity_rank(severity: Severity) -> u8 {
    match severity {
        Severity::Error => 2,
        Severity::Warning => 1,
        Severity::Info => 0,
    }
}

fn severity_cell(severity: Severity) -> Cell {
    let color = match severity {
        Severity::Error => Color::Red,
        Severity::Warning => Color::Yellow,
        Severity::Info => Color::Blue,
    };
    Cell::new(severity.as_str()).fg(color)
}

fn status_cell(passed: bool) -> Cell {
    if passed {
        Cell::new("pass").fg(Color::Green)
    } else {
        Cell::new("FAIL")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold)
    }
}
