//! Performance benchmarks for payroll report generation.
//!
//! Covers the aggregators on their own, each report kind through
//! `generate_report`, scaling with the number of records, and one full HTTP
//! round trip through the router.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use chrono::NaiveDate;
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;

use payroll_reports::api::{AppState, create_router};
use payroll_reports::calculation::{aggregate_categories, amount_to_words, payroll_sheet};
use payroll_reports::config::{ConfigLoader, ReportConfig};
use payroll_reports::models::{PayrollRecord, ReportKind, ReportRequest, contribution_categories};
use payroll_reports::render::{JsonLayoutRenderer, generate_report, payroll_workbook};

use axum::{body::Body, http::Request};
use tower::ServiceExt;

/// Creates a record with every section populated for some employees.
fn create_record(index: usize) -> PayrollRecord {
    let cents = |amount: i64| Decimal::new(amount + index as i64 * 7, 2);
    PayrollRecord {
        employee_name: format!("Employee {:04}", index),
        id_number: format!("EMP-{:04}", index),
        position: "Service Crew".to_string(),
        daily_rate: Decimal::new(610, 0),
        days_worked: Decimal::new(11, 0),
        basic_salary: cents(671_000),
        ecola: cents(11_000),
        overtime_pay: cents(45_750),
        ot_regular_hours: Decimal::new(6, 0),
        gross_pay: cents(727_750),
        sss_contribution: cents(45_000),
        sss_employer: cents(95_500),
        philhealth_contribution: cents(17_000),
        philhealth_employer: cents(17_000),
        pagibig_contribution: cents(20_000),
        pagibig_employer: cents(20_000),
        sss_loan: if index % 3 == 0 { cents(120_000) } else { Decimal::ZERO },
        uniform: if index % 5 == 0 { cents(15_000) } else { Decimal::ZERO },
        total_deductions: cents(217_000),
        net_pay: cents(510_750),
        ..Default::default()
    }
}

fn create_request(record_count: usize) -> ReportRequest {
    ReportRequest {
        pay_period: "January 1-15, 2024".to_string(),
        pay_date: NaiveDate::from_ymd_opt(2024, 1, 20).unwrap(),
        coverage_from: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        coverage_to: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        records: (0..record_count).map(create_record).collect(),
    }
}

/// Benchmark: Amount to words.
fn bench_amount_to_words(c: &mut Criterion) {
    let amount = Decimal::new(98_765_432_199, 2);
    c.bench_function("amount_to_words", |b| {
        b.iter(|| amount_to_words(black_box(amount)))
    });
}

/// Benchmark: Aggregators over 500 records.
fn bench_aggregation(c: &mut Criterion) {
    let request = create_request(500);
    let categories = contribution_categories();

    let mut group = c.benchmark_group("aggregation");
    group.throughput(Throughput::Elements(500));
    group.bench_function("contributions_500", |b| {
        b.iter(|| aggregate_categories(black_box(&request.records), &categories).grand_totals)
    });
    group.bench_function("payroll_sheet_500", |b| {
        b.iter(|| payroll_sheet(black_box(&request.records)).totals)
    });
    group.finish();
}

/// Benchmark: Each report kind for 100 records.
fn bench_report_kinds(c: &mut Criterion) {
    let request = create_request(100);
    let config = ReportConfig::default();

    let mut group = c.benchmark_group("report_kinds");
    for kind in ReportKind::ALL {
        group.bench_with_input(BenchmarkId::new("layout", kind), &kind, |b, kind| {
            b.iter(|| generate_report(*kind, black_box(&request), &config, &JsonLayoutRenderer))
        });
    }
    group.bench_function("payroll_sheet_csv", |b| {
        b.iter(|| payroll_workbook(black_box(&request)))
    });
    group.finish();
}

/// Benchmark: Payroll sheet scaling with record count.
fn bench_scaling(c: &mut Criterion) {
    let config = ReportConfig::default();

    let mut group = c.benchmark_group("scaling");
    for record_count in [10, 100, 500, 1000].iter() {
        let request = create_request(*record_count);
        group.throughput(Throughput::Elements(*record_count as u64));
        group.bench_with_input(
            BenchmarkId::new("payroll_sheet", record_count),
            record_count,
            |b, _| {
                b.iter(|| {
                    generate_report(
                        ReportKind::PayrollSheet,
                        black_box(&request),
                        &config,
                        &JsonLayoutRenderer,
                    )
                })
            },
        );
    }
    group.finish();
}

/// Benchmark: Payslips for 50 employees through the HTTP router.
fn bench_http_payslips(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let config = ConfigLoader::load("./config/default").expect("Failed to load config");
    let router = create_router(AppState::new(config));
    let body = serde_json::to_string(&create_request(50)).unwrap();

    c.bench_function("http_payslips_50", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/reports/payslip")
                        .header("Content-Type", "application/json")
                        .body(Body::from(body.clone()))
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

criterion_group!(
    benches,
    bench_amount_to_words,
    bench_aggregation,
    bench_report_kinds,
    bench_scaling,
    bench_http_payslips,
);
criterion_main!(benches);
