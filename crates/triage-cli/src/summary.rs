//! Table rendering for command output.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use triage_core::{
    ComponentEntry, ComponentMatch, PassRate, Requirement, SessionState, TestRecord, TestResult,
};
use triage_model::KeywordStandardMap;

use crate::types::{ReportOutcome, VerifyResult};

pub const NO_DATA_MESSAGE: &str =
    "No recognizable test data was extracted. Check the report content and format.";

pub fn print_verify(result: &VerifyResult, show_other: bool) {
    for report in &result.reports {
        print_report(report, show_other);
        println!();
    }
    if result.reports.len() > 1 {
        println!("{}", totals_table(result));
    }
    if result.has_errors() {
        eprintln!("Errors:");
        for error in &result.errors {
            eprintln!("- {}: {}", error.path.display(), error.message);
        }
    }
}

fn print_report(report: &ReportOutcome, show_other: bool) {
    println!("Report: {} ({})", report.path.display(), report.format);
    if report.is_empty() {
        println!("{NO_DATA_MESSAGE}");
        return;
    }
    let classification = &report.classification;
    println!("{} passed test case(s)", classification.passed.len());
    if !classification.passed.is_empty() {
        println!("{}", records_table(&classification.passed));
    }
    println!("{} failed test case(s)", classification.failed.len());
    if !classification.failed.is_empty() {
        println!("{}", records_table(&classification.failed));
    }
    if !classification.other.is_empty() {
        if show_other {
            println!(
                "{} other/informational test case(s)",
                classification.other.len()
            );
            println!("{}", records_table(&classification.other));
        } else {
            println!(
                "{} other/informational test case(s) hidden (use --show-other)",
                classification.other.len()
            );
        }
    }
    println!("Pass rate: {}", classification.pass_rate_label());
}

/// One row per record: name, result, actual value and standard.
pub fn records_table(records: &[TestRecord]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Test"),
        header_cell("Result"),
        header_cell("Actual/Value"),
        header_cell("Standard"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Center);
    for record in records {
        table.add_row(vec![
            Cell::new(&record.name),
            result_cell(record.result),
            label_cell(record.actual_label()),
            label_cell(record.standard_label()),
        ]);
    }
    table
}

fn totals_table(result: &VerifyResult) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Report"),
        header_cell("Passed"),
        header_cell("Failed"),
        header_cell("Other"),
        header_cell("Pass rate"),
    ]);
    apply_summary_table_style(&mut table);
    for index in 1..=4 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for report in &result.reports {
        let classification = &report.classification;
        table.add_row(vec![
            Cell::new(report.path.display()),
            count_cell(classification.passed.len(), Color::Green),
            count_cell(classification.failed.len(), Color::Red),
            dim_cell(classification.other.len()),
            Cell::new(classification.pass_rate_label()),
        ]);
    }
    let (passed, failed) = result.verdict_totals();
    let other: usize = result
        .reports
        .iter()
        .map(|report| report.classification.other.len())
        .sum();
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        count_cell(passed, Color::Green).add_attribute(Attribute::Bold),
        count_cell(failed, Color::Red).add_attribute(Attribute::Bold),
        dim_cell(other),
        Cell::new(PassRate::from_counts(passed, failed)).add_attribute(Attribute::Bold),
    ]);
    table
}

pub fn requirements_table(requirements: &[Requirement]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("ID"),
        header_cell("Test Case"),
        header_cell("Description"),
        header_cell("Required Equipment"),
    ]);
    apply_table_style(&mut table);
    for requirement in requirements {
        let description = if requirement.is_generic() {
            dim_cell(&requirement.description)
        } else {
            Cell::new(&requirement.description)
        };
        table.add_row(vec![
            Cell::new(&requirement.id).fg(Color::Blue),
            Cell::new(&requirement.test_case).add_attribute(Attribute::Bold),
            description,
            Cell::new(&requirement.equipment),
        ]);
    }
    table
}

pub fn component_table(found: &ComponentMatch<'_>) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Field"), header_cell("Value")]);
    apply_table_style(&mut table);
    let info = found.info;
    table.add_row(vec![Cell::new("Part Number"), Cell::new(&found.part_number)]);
    table.add_row(vec![Cell::new("Manufacturer"), Cell::new(&info.manufacturer)]);
    table.add_row(vec![Cell::new("Function"), Cell::new(&info.function)]);
    table.add_row(vec![
        Cell::new("Voltage"),
        optional_cell(info.voltage.as_deref()),
    ]);
    table.add_row(vec![
        Cell::new("Current"),
        optional_cell(info.current.as_deref()),
    ]);
    table
}

pub fn standards_table(keywords: &KeywordStandardMap) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Keyword"),
        header_cell("Standard"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for (index, entry) in keywords.iter().enumerate() {
        table.add_row(vec![
            dim_cell(index + 1),
            Cell::new(&entry.keyword).fg(Color::Blue),
            Cell::new(&entry.standard),
        ]);
    }
    table
}

pub fn dashboard_table(session: &SessionState) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Metric"), header_cell("Value")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![
        Cell::new("Reports Verified"),
        Cell::new(session.reports_verified()),
    ]);
    table.add_row(vec![
        Cell::new("Requirements Generated"),
        Cell::new(session.requirements_generated()),
    ]);
    table.add_row(vec![
        Cell::new("Components in DB"),
        Cell::new(session.components().len()),
    ]);
    table.add_row(vec![
        Cell::new("Overall Pass Rate"),
        Cell::new(session.overall_pass_rate()),
    ]);
    table
}

pub fn register_table(components: &[ComponentEntry]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Part Number"),
        header_cell("Manufacturer"),
        header_cell("Function"),
        header_cell("Voltage/Value"),
        header_cell("Notes"),
    ]);
    apply_table_style(&mut table);
    for entry in components {
        table.add_row(vec![
            Cell::new(&entry.part_number).add_attribute(Attribute::Bold),
            Cell::new(&entry.manufacturer),
            Cell::new(&entry.function),
            Cell::new(&entry.value),
            Cell::new(&entry.notes),
        ]);
    }
    table
}

pub fn apply_table_style(table: &mut Table) {
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
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn result_cell(result: TestResult) -> Cell {
    match result {
        TestResult::Pass => Cell::new("PASS")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold),
        TestResult::Fail => Cell::new("FAIL")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
        TestResult::Info | TestResult::Unknown => dim_cell(result),
    }
}

fn label_cell(value: &str) -> Cell {
    if value == triage_model::NAME_PLACEHOLDER {
        dim_cell(value)
    } else {
        Cell::new(value)
    }
}

fn optional_cell(value: Option<&str>) -> Cell {
    match value {
        Some(value) => Cell::new(value),
        None => dim_cell("-"),
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color)
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
