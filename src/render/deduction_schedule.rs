//! Schedule of deductions layout.

use crate::calculation::{deduction_schedule, format_money};
use crate::config::ReportConfig;
use crate::error::EngineResult;
use crate::models::{ReportKind, ReportRequest};

use super::common::{
    ReportHeader, SIGNATORY_BLOCK_HEIGHT, ensure_display_names, sign_last_page, table_pages,
};
use super::layout::{Column, Document, Orientation, PaperSize, TableRow};

fn columns() -> Vec<Column> {
    vec![
        Column::text("No.", 30.0),
        Column::text("Employee Name", 230.0),
        Column::text("ID Number", 130.0),
        Column::number("Amount", 150.0),
    ]
}

/// Builds the schedule of deductions.
///
/// Each deduction kind with at least one positive amount gets a section:
/// a title row, one row per employee and a section total. A grand total
/// closes the table.
pub fn deduction_schedule_document(
    request: &ReportRequest,
    config: &ReportConfig,
) -> EngineResult<Document> {
    ensure_display_names(&request.records)?;

    let schedule = deduction_schedule(&request.records, &config.deduction_categories);
    let mut document = Document::new(
        ReportKind::DeductionSchedule.title(),
        PaperSize::LETTER,
        Orientation::Portrait,
    );

    let mut rows = Vec::with_capacity(schedule.line_count() + schedule.sections.len() * 2 + 1);
    for section in &schedule.sections {
        let title = &section.definition.title;
        rows.push(TableRow::emphasized(vec![
            String::new(),
            title.to_uppercase(),
            String::new(),
            String::new(),
        ]));
        rows.extend(section.rows.iter().enumerate().map(|(index, row)| {
            TableRow::new(vec![
                (index + 1).to_string(),
                row.record.employee_name.clone(),
                row.record.id_number.clone(),
                format_money(row.employee_share),
            ])
        }));
        rows.push(TableRow::emphasized(vec![
            String::new(),
            format!("Total {}", title),
            String::new(),
            format_money(section.totals.employee_share),
        ]));
    }
    rows.push(TableRow::emphasized(vec![
        String::new(),
        "GRAND TOTAL".to_string(),
        String::new(),
        format_money(schedule.grand_total),
    ]));

    let header = ReportHeader::new(&document, config, ReportKind::DeductionSchedule, request);
    let mut pages = table_pages(
        &document,
        &header,
        &columns(),
        rows,
        config.layout.rows_per_page,
        SIGNATORY_BLOCK_HEIGHT,
    );
    sign_last_page(&mut pages, &header, document.content_width());
    document.pages = pages;

    Ok(document)
}
