//! Payroll sheet as a spreadsheet (CSV).
//!
//! Numbers are written without thousands separators so spreadsheet
//! applications read them as numeric cells.

use crate::calculation::{format_plain, payroll_sheet};
use crate::error::{EngineError, EngineResult};
use crate::models::{ReportKind, ReportRequest};

use super::ReportFile;
use super::common::ensure_display_names;
use super::payroll_sheet::{FIGURE_HEADERS, figure_values};

/// MIME type of the workbook.
pub const CSV_MEDIA_TYPE: &str = "text/csv";

fn render_error(error: impl std::fmt::Display) -> EngineError {
    EngineError::RenderError {
        message: error.to_string(),
    }
}

/// Writes the payroll sheet rows and totals as CSV.
///
/// The first row carries the column headers, followed by one row per record
/// and a `TOTAL` row.
pub fn payroll_workbook(request: &ReportRequest) -> EngineResult<ReportFile> {
    ensure_display_names(&request.records)?;
    let sheet = payroll_sheet(&request.records);

    let mut writer = csv::Writer::from_writer(Vec::new());

    let mut header = vec!["No.", "Employee Name", "ID Number", "Position", "Basis"];
    header.extend(FIGURE_HEADERS);
    writer.write_record(&header).map_err(render_error)?;

    for (index, row) in sheet.rows.iter().enumerate() {
        let mut record = vec![
            (index + 1).to_string(),
            row.record.employee_name.clone(),
            row.record.id_number.clone(),
            row.record.position.clone(),
            row.basis.code().to_string(),
        ];
        record.extend(figure_values(&row.figures).into_iter().map(format_plain));
        writer.write_record(&record).map_err(render_error)?;
    }

    let mut totals = vec![
        String::new(),
        "TOTAL".to_string(),
        String::new(),
        String::new(),
        String::new(),
    ];
    totals.extend(figure_values(&sheet.totals).into_iter().map(format_plain));
    writer.write_record(&totals).map_err(render_error)?;

    let bytes = writer.into_inner().map_err(render_error)?;
    tracing::debug!(
        rows = sheet.rows.len(),
        bytes = bytes.len(),
        "Payroll workbook written"
    );

    Ok(ReportFile {
        filename: ReportKind::PayrollSheet.filename(request.pay_date, "csv"),
        media_type: CSV_MEDIA_TYPE.to_string(),
        bytes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ReportConfig;
    use crate::models::PayrollRecord;
    use crate::render::payroll_sheet_document;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
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

    fn read_rows(bytes: &[u8]) -> Vec<Vec<String>> {
        csv::Reader::from_reader(bytes)
            .records()
            .map(|r| r.unwrap().iter().map(str::to_string).collect())
            .collect()
    }

    #[test]
    fn test_workbook_rows_and_totals() {
        let request = create_request(vec![
            PayrollRecord {
                employee_name: "Dela Cruz, Juan".to_string(),
                daily_rate: dec("610"),
                days_worked: dec("11"),
                basic_salary: dec("6710"),
                gross_pay: dec("6710"),
                net_pay: dec("6110.5"),
                ..Default::default()
            },
            PayrollRecord {
                employee_name: "Santos, Ana".to_string(),
                hourly_rate: dec("75"),
                hours_worked: dec("40"),
                basic_salary: dec("3000"),
                gross_pay: dec("3000"),
                net_pay: dec("3000"),
                ..Default::default()
            },
        ]);
        let file = payroll_workbook(&request).unwrap();

        assert_eq!(file.filename, "PayrollSheet_2024-01-20.csv");
        assert_eq!(file.media_type, "text/csv");

        let rows = read_rows(&file.bytes);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0][1], "Dela Cruz, Juan");
        assert_eq!(rows[0][4], "D");
        assert_eq!(rows[0][5], "610.00");
        assert_eq!(rows[1][4], "H");
        assert_eq!(rows[2][1], "TOTAL");
        assert_eq!(rows[2][7], "9710.00");
        assert_eq!(rows[2].last().unwrap(), "9110.50");
    }

    #[test]
    fn test_workbook_header() {
        let file = payroll_workbook(&create_request(vec![])).unwrap();
        let text = String::from_utf8(file.bytes).unwrap();
        let first_line = text.lines().next().unwrap();

        assert!(first_line.starts_with("No.,Employee Name,ID Number,Position,Basis,Rate"));
        assert!(first_line.ends_with("Net Pay"));
    }

    #[test]
    fn test_workbook_rounds_like_printed_sheet() {
        let request = create_request(vec![PayrollRecord {
            employee_name: "Dela Cruz, Juan".to_string(),
            gross_pay: dec("100.125"),
            net_pay: dec("100.125"),
            ..Default::default()
        }]);
        let file = payroll_workbook(&request).unwrap();
        let rows = read_rows(&file.bytes);
        assert_eq!(rows[0].last().unwrap(), "100.13");
        assert_eq!(rows[1].last().unwrap(), "100.13");

        let document = payroll_sheet_document(&request, &ReportConfig::default()).unwrap();
        let table = document.pages[0].tables().next().unwrap();
        assert_eq!(table.rows[0].cells.last().unwrap(), rows[0].last().unwrap());
    }
}
