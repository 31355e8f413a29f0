//! Payroll sheet layout.
//!
//! A landscape register with one line per employee and a totals line on the
//! last page, followed by the signatory block.

use rust_decimal::Decimal;

use crate::calculation::{PayrollFigures, format_hours, format_money, payroll_sheet};
use crate::config::ReportConfig;
use crate::error::EngineResult;
use crate::models::{ReportKind, ReportRequest};

use super::common::{
    ReportHeader, SIGNATORY_BLOCK_HEIGHT, ensure_display_names, sign_last_page, table_pages,
};
use super::layout::{Column, Document, Orientation, PaperSize, TableRow};

/// Headers of the numeric columns, in print order.
pub(crate) const FIGURE_HEADERS: [&str; 19] = [
    "Rate",
    "Days/Hrs",
    "Basic",
    "OT Hrs",
    "OT Pay",
    "ND Hrs",
    "ND Pay",
    "Holiday",
    "ECOLA",
    "Allow.",
    "Gross Pay",
    "SSS",
    "PHIC",
    "HDMF",
    "W/Tax",
    "Loans",
    "Others",
    "Total Ded.",
    "Net Pay",
];

const FIGURE_WIDTHS: [f32; 19] = [
    40.0, 40.0, 50.0, 30.0, 42.0, 30.0, 42.0, 42.0, 38.0, 38.0, 50.0, 38.0, 38.0, 38.0, 40.0,
    40.0, 40.0, 46.0, 50.0,
];

/// Positions within [`FIGURE_HEADERS`] that hold day or hour counts.
const COUNT_COLUMNS: [usize; 3] = [1, 3, 5];

const ATTENDANCE_COLUMN: usize = 1;

/// The numeric columns of a row, in print order.
pub(crate) fn figure_values(figures: &PayrollFigures) -> [Decimal; 19] {
    [
        figures.rate,
        figures.attendance,
        figures.basic_salary,
        figures.overtime_hours,
        figures.overtime_pay,
        figures.night_diff_hours,
        figures.night_diff_pay,
        figures.holiday_pay,
        figures.ecola,
        figures.allowance,
        figures.gross_pay,
        figures.sss,
        figures.philhealth,
        figures.pagibig,
        figures.withholding_tax,
        figures.loans,
        figures.other_deductions,
        figures.total_deductions,
        figures.net_pay,
    ]
}

fn figure_cells(figures: &PayrollFigures, basis_code: Option<&str>) -> Vec<String> {
    figure_values(figures)
        .into_iter()
        .enumerate()
        .map(|(index, value)| {
            if index == ATTENDANCE_COLUMN {
                match basis_code {
                    Some(code) => format!("{} {}", format_hours(value), code),
                    None => format_hours(value),
                }
            } else if COUNT_COLUMNS.contains(&index) {
                format_hours(value)
            } else {
                format_money(value)
            }
        })
        .collect()
}

fn columns() -> Vec<Column> {
    let mut columns = vec![
        Column::text("No.", 20.0),
        Column::text("Employee Name", 90.0),
        Column::text("Position", 54.0),
    ];
    columns.extend(
        FIGURE_HEADERS
            .iter()
            .zip(FIGURE_WIDTHS)
            .map(|(header, width)| Column::number(*header, width)),
    );
    columns
}

/// Builds the payroll sheet document.
pub fn payroll_sheet_document(
    request: &ReportRequest,
    config: &ReportConfig,
) -> EngineResult<Document> {
    ensure_display_names(&request.records)?;

    let sheet = payroll_sheet(&request.records);
    let mut document = Document::new(
        ReportKind::PayrollSheet.title(),
        PaperSize::LEGAL,
        Orientation::Landscape,
    );

    let mut rows: Vec<TableRow> = sheet
        .rows
        .iter()
        .enumerate()
        .map(|(index, row)| {
            let mut cells = vec![
                (index + 1).to_string(),
                row.record.employee_name.clone(),
                row.record.position.clone(),
            ];
            cells.extend(figure_cells(&row.figures, Some(row.basis.code())));
            TableRow::new(cells)
        })
        .collect();

    let mut totals = vec![String::new(), "TOTAL".to_string(), String::new()];
    totals.extend(figure_cells(&sheet.totals, None));
    rows.push(TableRow::emphasized(totals));

    let header = ReportHeader::new(&document, config, ReportKind::PayrollSheet, request);
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PayrollRecord;
    use crate::render::layout::{MARGIN, TableElement};
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_request(records: Vec<PayrollRecord>) -> ReportRequest {
        ReportRequest {
            pay_period: "January 1-15, 2024".to_string(),
            pay_date: NaiveDate::from_ymd_opt(2024, 1, 20).unwrap(),
            coverage_from: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            coverage_to: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            records,
        }
    }

    fn daily(name: &str) -> PayrollRecord {
        PayrollRecord {
            employee_name: name.to_string(),
            position: "Cashier".to_string(),
            daily_rate: dec("600"),
            days_worked: dec("5"),
            basic_salary: dec("3000"),
            gross_pay: dec("3000"),
            sss_loan: dec("100"),
            pagibig_loan: dec("50"),
            pagibig_calamity_loan: dec("25"),
            total_deductions: dec("175"),
            net_pay: dec("2825"),
            ..Default::default()
        }
    }

    fn hourly(name: &str) -> PayrollRecord {
        PayrollRecord {
            employee_name: name.to_string(),
            hourly_rate: dec("75"),
            hours_worked: dec("40"),
            basic_salary: dec("3000"),
            gross_pay: dec("3000"),
            net_pay: dec("3000"),
            ..Default::default()
        }
    }

    fn first_table(document: &Document) -> &TableElement {
        document.pages[0].tables().next().unwrap()
    }

    #[test]
    fn test_columns_fit_landscape_legal() {
        let document = Document::new("t", PaperSize::LEGAL, Orientation::Landscape);
        let width: f32 = columns().iter().map(|c| c.width).sum();
        assert!(width <= document.content_width());
        assert_eq!(columns().len(), 22);
    }

    #[test]
    fn test_rate_and_attendance_cells() {
        let request = create_request(vec![daily("A"), hourly("B")]);
        let document = payroll_sheet_document(&request, &ReportConfig::default()).unwrap();
        let table = first_table(&document);

        assert_eq!(table.rows[0].cells[3], "600.00");
        assert_eq!(table.rows[0].cells[4], "5.00 D");
        assert_eq!(table.rows[1].cells[3], "75.00");
        assert_eq!(table.rows[1].cells[4], "40.00 H");
    }

    #[test]
    fn test_loans_cell() {
        let request = create_request(vec![daily("A")]);
        let document = payroll_sheet_document(&request, &ReportConfig::default()).unwrap();
        let loans_index = 3 + FIGURE_HEADERS.iter().position(|h| *h == "Loans").unwrap();

        assert_eq!(first_table(&document).rows[0].cells[loans_index], "175.00");
    }

    #[test]
    fn test_totals_row_is_last_and_emphasized() {
        let request = create_request(vec![daily("A"), hourly("B")]);
        let document = payroll_sheet_document(&request, &ReportConfig::default()).unwrap();
        let table = first_table(&document);
        let totals = table.rows.last().unwrap();

        assert!(totals.emphasis);
        assert_eq!(totals.cells[1], "TOTAL");
        assert_eq!(totals.cells[5], "6,000.00");
        assert_eq!(totals.cells[21], "5,825.00");
    }

    #[test]
    fn test_paginates_and_signs_last_page() {
        let records: Vec<PayrollRecord> = (0..25).map(|i| daily(&format!("E{}", i))).collect();
        let request = create_request(records);
        let mut config = ReportConfig::default();
        config.organization.signatories.approved_by = "A. Reyes".to_string();
        let document = payroll_sheet_document(&request, &config).unwrap();

        assert_eq!(document.pages.len(), 2);
        let last_rows = &document.pages[1].tables().next().unwrap().rows;
        assert_eq!(last_rows.len(), 6);
        assert!(document.pages[1].texts().any(|t| t.text == "A. Reyes"));
        assert!(!document.pages[0].texts().any(|t| t.text == "A. Reyes"));
    }

    #[test]
    fn test_signatories_move_past_a_full_last_page() {
        let records: Vec<PayrollRecord> = (0..29).map(|i| daily(&format!("E{}", i))).collect();
        let request = create_request(records);
        let mut config = ReportConfig::default();
        config.layout.rows_per_page = 30;
        config.organization.signatories.approved_by = "A. Reyes".to_string();
        let document = payroll_sheet_document(&request, &config).unwrap();

        assert_eq!(document.pages.len(), 2);
        assert_eq!(first_table(&document).rows.len(), 30);
        assert_eq!(document.pages[1].tables().count(), 0);
        assert!(document.pages[0].texts().any(|t| t.text == "Page 1 of 2"));

        let content_bottom = MARGIN + document.content_height();
        let name = document.pages[1]
            .texts()
            .find(|t| t.text == "A. Reyes")
            .unwrap();
        assert!(name.y <= content_bottom);
        assert!(!document.pages[0].texts().any(|t| t.text == "A. Reyes"));
    }

    #[test]
    fn test_empty_request_prints_zero_totals() {
        let request = create_request(vec![]);
        let document = payroll_sheet_document(&request, &ReportConfig::default()).unwrap();
        let table = first_table(&document);

        assert_eq!(table.rows.len(), 1);
        assert_eq!(table.rows[0].cells[21], "0.00");
    }
}
