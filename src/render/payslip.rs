//! Payslip layout.
//!
//! Payslips are stacked `payslips_per_page` to a page. Each slip carries the
//! organization header, employee identity, earnings and deductions columns,
//! net pay and the acknowledgement line with the amount in words.

use rust_decimal::Decimal;

use crate::calculation::{
    amount_to_words, format_coverage, format_hours, format_long_date, format_money,
    payroll_sheet_row, rate_display,
};
use crate::config::ReportConfig;
use crate::error::EngineResult;
use crate::models::{PayrollRecord, ReportKind, ReportRequest};

use super::common::ensure_display_names;
use super::layout::{
    Align, Column, Document, LINE_HEIGHT, MARGIN, Orientation, Page, PaperSize, TableElement,
    TableRow, TextElement,
};

/// Builds the payslip document.
///
/// Every record gets a slip, including records with zero net pay.
pub fn payslip_document(request: &ReportRequest, config: &ReportConfig) -> EngineResult<Document> {
    ensure_display_names(&request.records)?;

    let mut document = Document::new(
        ReportKind::Payslip.title(),
        PaperSize::LETTER,
        Orientation::Portrait,
    );
    let per_page = config.layout.payslips_per_page.max(1);
    let slot_height = document.content_height() / per_page as f32;

    if request.records.is_empty() {
        let mut page = Page::default();
        draw_slip_header(&mut page, &document, request, config, MARGIN);
        document.pages.push(page);
        return Ok(document);
    }

    let mut pages = Vec::new();
    for chunk in request.records.chunks(per_page) {
        let mut page = Page::default();
        for (slot, record) in chunk.iter().enumerate() {
            let top = MARGIN + slot_height * slot as f32;
            draw_slip(&mut page, &document, request, config, record, top)?;
            if slot + 1 < chunk.len() {
                page.rule(MARGIN, MARGIN + document.content_width(), top + slot_height);
            }
        }
        pages.push(page);
    }
    document.pages = pages;

    Ok(document)
}

fn draw_slip_header(
    page: &mut Page,
    document: &Document,
    request: &ReportRequest,
    config: &ReportConfig,
    top: f32,
) -> f32 {
    let center_x = document.center_x();
    let right_x = MARGIN + document.content_width();
    let mut y = top + LINE_HEIGHT;

    page.text(
        TextElement::new(center_x, y, &config.organization.name)
            .bold()
            .size(11.0)
            .align(Align::Center),
    );
    y += LINE_HEIGHT;
    page.text(
        TextElement::new(center_x, y, ReportKind::Payslip.title())
            .bold()
            .align(Align::Center),
    );
    y += LINE_HEIGHT * 1.5;
    page.text(TextElement::new(
        MARGIN,
        y,
        format!(
            "Pay Period: {} ({})",
            request.pay_period,
            format_coverage(request.coverage_from, request.coverage_to)
        ),
    ));
    page.text(
        TextElement::new(
            right_x,
            y,
            format!("Pay Date: {}", format_long_date(request.pay_date)),
        )
        .align(Align::Right),
    );

    y + LINE_HEIGHT
}

fn draw_slip(
    page: &mut Page,
    document: &Document,
    request: &ReportRequest,
    config: &ReportConfig,
    record: &PayrollRecord,
    top: f32,
) -> EngineResult<()> {
    let width = document.content_width();
    let half = width / 2.0;
    let right_x = MARGIN + width;

    let mut y = draw_slip_header(page, document, request, config, top);

    page.text(TextElement::new(MARGIN, y, format!("Name: {}", record.employee_name)).bold());
    page.text(TextElement::new(
        MARGIN + half,
        y,
        format!("ID No.: {}", record.id_number),
    ));
    y += LINE_HEIGHT;
    page.text(TextElement::new(
        MARGIN,
        y,
        format!("Position: {}", record.position),
    ));
    let display = rate_display(record);
    page.text(TextElement::new(
        MARGIN + half,
        y,
        format!(
            "Rate: {} / {} {}",
            format_money(display.rate),
            format_hours(display.attendance),
            display.basis.code()
        ),
    ));
    y += LINE_HEIGHT;

    let earnings = earnings_rows(record);
    let deductions = deduction_rows(record, config);
    let earnings_table = TableElement {
        x: MARGIN,
        y,
        columns: vec![
            Column::text("EARNINGS", half * 0.6 - 6.0),
            Column::number("AMOUNT", half * 0.4 - 6.0),
        ],
        rows: earnings,
    };
    let deductions_table = TableElement {
        x: MARGIN + half,
        y,
        columns: vec![
            Column::text("DEDUCTIONS", half * 0.6),
            Column::number("AMOUNT", half * 0.4),
        ],
        rows: deductions,
    };
    y += earnings_table.height().max(deductions_table.height()) + LINE_HEIGHT;
    page.table(earnings_table);
    page.table(deductions_table);

    page.text(
        TextElement::new(right_x, y, format!("NET PAY: {}", format_money(record.net_pay)))
            .bold()
            .size(11.0)
            .align(Align::Right),
    );
    y += LINE_HEIGHT * 1.5;

    page.text(TextElement::new(
        MARGIN,
        y,
        acknowledgement(record.net_pay, &config.layout.currency_label)?,
    ));
    y += LINE_HEIGHT * 2.5;
    page.rule(right_x - 200.0, right_x, y);
    y += LINE_HEIGHT;
    page.text(
        TextElement::new(right_x - 100.0, y, "Signature over printed name").align(Align::Center),
    );

    Ok(())
}

/// The acknowledgement sentence printed above the employee's signature.
///
/// A negative net pay is spelled from its magnitude with a `NEGATIVE` prefix.
pub(crate) fn acknowledgement(net_pay: Decimal, currency_label: &str) -> EngineResult<String> {
    let amount = format_money(net_pay);
    let words = if amount.starts_with('-') {
        format!("NEGATIVE {}", amount_to_words(net_pay.abs())?)
    } else {
        amount_to_words(net_pay.abs())?
    };
    Ok(format!(
        "I acknowledge to have received the amount of {} ({} {}) as full payment for the period stated above.",
        words, currency_label, amount
    ))
}

fn line(label: impl Into<String>, amount: Decimal) -> TableRow {
    TableRow::new(vec![label.into(), format_money(amount)])
}

fn earnings_rows(record: &PayrollRecord) -> Vec<TableRow> {
    let figures = payroll_sheet_row(record).figures;

    vec![
        line("Basic Pay", figures.basic_salary),
        line(
            format!("Overtime ({} hrs)", format_hours(figures.overtime_hours)),
            figures.overtime_pay,
        ),
        line(
            format!("Night Differential ({} hrs)", format_hours(figures.night_diff_hours)),
            figures.night_diff_pay,
        ),
        line("Holiday Pay", figures.holiday_pay),
        line("ECOLA", figures.ecola),
        line("Allowance", figures.allowance),
        TableRow::emphasized(vec!["GROSS PAY".to_string(), format_money(figures.gross_pay)]),
    ]
}

fn deduction_rows(record: &PayrollRecord, config: &ReportConfig) -> Vec<TableRow> {
    let mut rows = vec![
        line("SSS", record.sss_contribution),
        line("PhilHealth", record.philhealth_contribution),
        line("Pag-IBIG", record.pagibig_contribution),
        line("Withholding Tax", record.withholding_tax),
    ];
    rows.extend(
        config
            .deduction_categories
            .iter()
            .filter(|category| record.amount(category.employee_field) > Decimal::ZERO)
            .map(|category| line(&category.title, record.amount(category.employee_field))),
    );
    rows.push(TableRow::emphasized(vec![
        "TOTAL DEDUCTIONS".to_string(),
        format_money(record.total_deductions),
    ]));
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_record(name: &str, net_pay: &str) -> PayrollRecord {
        PayrollRecord {
            employee_name: name.to_string(),
            id_number: "EMP-001".to_string(),
            position: "Cashier".to_string(),
            daily_rate: dec("610"),
            days_worked: dec("11"),
            basic_salary: dec("6710"),
            gross_pay: dec("6710"),
            sss_contribution: dec("450"),
            uniform: dec("150"),
            total_deductions: dec("600"),
            net_pay: dec(net_pay),
            ..Default::default()
        }
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

    #[test]
    fn test_two_slips_per_page_by_default() {
        let request = create_request(vec![
            create_record("A", "6110"),
            create_record("B", "6110"),
            create_record("C", "6110"),
        ]);
        let document = payslip_document(&request, &ReportConfig::default()).unwrap();
        assert_eq!(document.pages.len(), 2);
    }

    #[test]
    fn test_slip_prints_identity_and_net_pay() {
        let request = create_request(vec![create_record("Dela Cruz, Juan", "6110")]);
        let document = payslip_document(&request, &ReportConfig::default()).unwrap();
        let texts = document.all_text();

        assert!(texts.contains(&"Name: Dela Cruz, Juan"));
        assert!(texts.contains(&"ID No.: EMP-001"));
        assert!(texts.contains(&"Rate: 610.00 / 11.00 D"));
        assert!(texts.contains(&"NET PAY: 6,110.00"));
    }

    #[test]
    fn test_slip_acknowledges_amount_in_words() {
        let request = create_request(vec![create_record("Dela Cruz, Juan", "6110.50")]);
        let document = payslip_document(&request, &ReportConfig::default()).unwrap();
        let texts = document.all_text();

        assert!(texts.iter().any(|t| t.contains(
            "SIX THOUSAND ONE HUNDRED TEN AND 50/100 (PHP 6,110.50)"
        )));
    }

    #[test]
    fn test_deductions_list_only_positive_single_value_deductions() {
        let request = create_request(vec![create_record("A", "6110")]);
        let document = payslip_document(&request, &ReportConfig::default()).unwrap();
        let tables: Vec<&TableElement> = document.pages[0].tables().collect();
        let deduction_labels: Vec<&str> = tables[1]
            .rows
            .iter()
            .map(|r| r.cells[0].as_str())
            .collect();

        assert!(deduction_labels.contains(&"Uniform"));
        assert!(!deduction_labels.contains(&"SSS Salary Loan"));
        assert_eq!(deduction_labels.last(), Some(&"TOTAL DEDUCTIONS"));
    }

    #[test]
    fn test_missing_name_is_reported() {
        let request = create_request(vec![create_record("A", "1"), create_record("", "1")]);
        let result = payslip_document(&request, &ReportConfig::default());
        assert!(matches!(
            result,
            Err(EngineError::MissingDisplayField { record_index: 1, .. })
        ));
    }

    #[test]
    fn test_empty_request_prints_header_only() {
        let request = create_request(vec![]);
        let document = payslip_document(&request, &ReportConfig::default()).unwrap();
        assert_eq!(document.pages.len(), 1);
        assert_eq!(document.pages[0].tables().count(), 0);
    }

    #[test]
    fn test_net_pay_beyond_words_table_fails() {
        let request = create_request(vec![create_record("A", "1000000000")]);
        let result = payslip_document(&request, &ReportConfig::default());
        assert!(matches!(result, Err(EngineError::AmountOutOfRange { .. })));
    }

    #[test]
    fn test_negative_net_pay_still_prints_slip() {
        let short = PayrollRecord {
            gross_pay: dec("100"),
            total_deductions: dec("150"),
            net_pay: dec("-50"),
            ..create_record("B", "0")
        };
        let request = create_request(vec![create_record("A", "5000"), short]);
        let document = payslip_document(&request, &ReportConfig::default()).unwrap();
        let texts = document.all_text();

        assert!(texts.contains(&"NET PAY: -50.00"));
        assert!(texts.iter().any(|t| t.contains("amount of NEGATIVE FIFTY AND 00/100 (PHP -50.00)")));
        assert!(texts.iter().any(|t| t.contains("amount of FIVE THOUSAND AND 00/100 (PHP 5,000.00)")));
    }

    #[test]
    fn test_acknowledgement_for_negative_net_pay() {
        let text = acknowledgement(dec("-1250.75"), "PHP").unwrap();
        assert!(text.contains(
            "amount of NEGATIVE ONE THOUSAND TWO HUNDRED FIFTY AND 75/100 (PHP -1,250.75)"
        ));
    }

    #[test]
    fn test_negative_net_pay_beyond_words_table_fails() {
        let result = acknowledgement(dec("-1000000000"), "PHP");
        assert!(matches!(result, Err(EngineError::AmountOutOfRange { .. })));
    }

    #[test]
    fn test_negative_net_pay_rounding_to_zero_has_no_prefix() {
        let text = acknowledgement(dec("-0.004"), "PHP").unwrap();
        assert!(text.contains("amount of ZERO (PHP 0.00)"));
    }

    #[test]
    fn test_acknowledgement_for_zero_net_pay() {
        let text = acknowledgement(Decimal::ZERO, "PHP").unwrap();
        assert!(text.contains("amount of ZERO (PHP 0.00)"));
    }
}
