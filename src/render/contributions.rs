//! Government contributions remittance layout.
//!
//! One section per contribution category with at least one positive employee
//! share. Each row shows the employee, employer and (for categories that
//! carry one) additional employer share, then the row total. Section totals
//! follow each section and a grand total closes the table.

use rust_decimal::Decimal;

use crate::calculation::{CategoryTotals, aggregate_categories, format_money};
use crate::config::ReportConfig;
use crate::error::EngineResult;
use crate::models::{ReportKind, ReportRequest};

use super::common::{
    ReportHeader, SIGNATORY_BLOCK_HEIGHT, ensure_display_names, sign_last_page, table_pages,
};
use super::layout::{Column, Document, Orientation, PaperSize, TableRow};

fn columns(with_additional: bool) -> Vec<Column> {
    let mut columns = vec![
        Column::text("No.", 30.0),
        Column::text("Employee Name", 170.0),
        Column::text("ID Number", 90.0),
        Column::number("EE Share", 60.0),
        Column::number("ER Share", 60.0),
    ];
    if with_additional {
        columns.push(Column::number("EC", 50.0));
    }
    columns.push(Column::number("Total", 80.0));
    columns
}

struct Cells {
    with_additional: bool,
}

impl Cells {
    fn amounts(
        &self,
        employee: Decimal,
        employer: Decimal,
        additional: Option<Decimal>,
        total: Decimal,
    ) -> Vec<String> {
        let mut cells = vec![format_money(employee), format_money(employer)];
        if self.with_additional {
            cells.push(additional.map(format_money).unwrap_or_default());
        }
        cells.push(format_money(total));
        cells
    }

    fn totals(&self, label: String, totals: &CategoryTotals, additional: bool) -> TableRow {
        let mut cells = vec![String::new(), label, String::new()];
        cells.extend(self.amounts(
            totals.employee_share,
            totals.employer_share,
            additional.then_some(totals.additional_employer_share),
            totals.total,
        ));
        TableRow::emphasized(cells)
    }

    fn blank(&self) -> Vec<String> {
        vec![String::new(); if self.with_additional { 4 } else { 3 }]
    }
}

/// Builds the government contributions remittance report.
///
/// The EC column is printed only when a retained category carries an
/// additional employer share; other categories leave that cell blank.
pub fn contributions_document(
    request: &ReportRequest,
    config: &ReportConfig,
) -> EngineResult<Document> {
    ensure_display_names(&request.records)?;

    let report = aggregate_categories(&request.records, &config.contribution_categories);
    let with_additional = report
        .categories
        .iter()
        .any(|summary| summary.definition.has_additional_employer_share);
    let cells = Cells { with_additional };

    let mut document = Document::new(
        ReportKind::Contributions.title(),
        PaperSize::LETTER,
        Orientation::Portrait,
    );

    let mut rows = Vec::new();
    for summary in &report.categories {
        let definition = summary.definition;
        let additional = definition.has_additional_employer_share;

        let mut title = vec![String::new(), definition.title.to_uppercase(), String::new()];
        title.extend(cells.blank());
        rows.push(TableRow::emphasized(title));

        rows.extend(summary.rows.iter().enumerate().map(|(index, row)| {
            let mut line = vec![
                (index + 1).to_string(),
                row.record.employee_name.clone(),
                row.record.id_number.clone(),
            ];
            line.extend(cells.amounts(
                row.employee_share,
                row.employer_share,
                additional.then_some(row.additional_employer_share),
                row.total,
            ));
            TableRow::new(line)
        }));

        rows.push(cells.totals(
            format!("Total {}", definition.title),
            &summary.totals,
            additional,
        ));
    }
    rows.push(cells.totals(
        "GRAND TOTAL".to_string(),
        &report.grand_totals,
        with_additional,
    ));

    let header = ReportHeader::new(&document, config, ReportKind::Contributions, request);
    let mut pages = table_pages(
        &document,
        &header,
        &columns(with_additional),
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

    fn create_records() -> Vec<PayrollRecord> {
        vec![
            PayrollRecord {
                employee_name: "Dela Cruz, Juan".to_string(),
                id_number: "EMP-001".to_string(),
                sss_contribution: dec("450.00"),
                sss_employer: dec("955.00"),
                pagibig_contribution: dec("200.00"),
                pagibig_employer: dec("200.00"),
                ..Default::default()
            },
            PayrollRecord {
                employee_name: "Santos, Ana".to_string(),
                id_number: "EMP-002".to_string(),
                sss_contribution: dec("500.00"),
                sss_employer: dec("1000.00"),
                ..Default::default()
            },
        ]
    }

    fn rows(document: &Document) -> Vec<TableRow> {
        document
            .pages
            .iter()
            .flat_map(|page| page.tables())
            .flat_map(|table| table.rows.clone())
            .collect()
    }

    #[test]
    fn test_sss_rows_show_ec_column() {
        let request = create_request(create_records());
        let document = contributions_document(&request, &ReportConfig::default()).unwrap();
        let table = document.pages[0].tables().next().unwrap();

        let headers: Vec<&str> = table.columns.iter().map(|c| c.header.as_str()).collect();
        assert_eq!(
            headers,
            vec!["No.", "Employee Name", "ID Number", "EE Share", "ER Share", "EC", "Total"]
        );
        assert_eq!(
            table.rows[1].cells,
            vec!["1", "Dela Cruz, Juan", "EMP-001", "450.00", "955.00", "0.00", "1,405.00"]
        );
    }

    #[test]
    fn test_section_and_grand_totals() {
        let request = create_request(create_records());
        let document = contributions_document(&request, &ReportConfig::default()).unwrap();
        let rows = rows(&document);

        let sss_total = rows
            .iter()
            .find(|r| r.cells[1] == "Total SSS")
            .unwrap();
        assert!(sss_total.emphasis);
        assert_eq!(sss_total.cells[3], "950.00");
        assert_eq!(sss_total.cells[6], "2,905.00");

        let pagibig_total = rows
            .iter()
            .find(|r| r.cells[1] == "Total Pag-IBIG")
            .unwrap();
        assert_eq!(pagibig_total.cells[5], "");
        assert_eq!(pagibig_total.cells[6], "400.00");

        let grand = rows.last().unwrap();
        assert_eq!(grand.cells[1], "GRAND TOTAL");
        assert_eq!(grand.cells[3], "1,150.00");
        assert_eq!(grand.cells[4], "2,155.00");
        assert_eq!(grand.cells[6], "3,305.00");
    }

    #[test]
    fn test_philhealth_section_omitted_when_empty() {
        let request = create_request(create_records());
        let document = contributions_document(&request, &ReportConfig::default()).unwrap();

        assert!(!rows(&document).iter().any(|r| r.cells[1] == "PHILHEALTH"));
    }

    #[test]
    fn test_ec_column_dropped_without_sss_rows() {
        let request = create_request(vec![PayrollRecord {
            employee_name: "Reyes, Mark".to_string(),
            philhealth_contribution: dec("250.00"),
            philhealth_employer: dec("250.00"),
            ..Default::default()
        }]);
        let document = contributions_document(&request, &ReportConfig::default()).unwrap();
        let table = document.pages[0].tables().next().unwrap();

        assert_eq!(table.columns.len(), 6);
        assert_eq!(table.rows[1].cells[5], "500.00");
    }

    #[test]
    fn test_employer_number_in_header() {
        let mut config = ReportConfig::default();
        config.organization.sss_employer_number = Some("03-9123456-7-000".to_string());
        let request = create_request(create_records());
        let document = contributions_document(&request, &config).unwrap();

        assert!(
            document
                .all_text()
                .contains(&"SSS Employer No.: 03-9123456-7-000")
        );
    }

    #[test]
    fn test_no_contributions_prints_zero_grand_total() {
        let request = create_request(vec![]);
        let document = contributions_document(&request, &ReportConfig::default()).unwrap();
        let rows = rows(&document);

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].cells[1], "GRAND TOTAL");
        assert_eq!(rows[0].cells.last().unwrap(), "0.00");
    }
}
