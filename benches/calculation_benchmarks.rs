//! Performance benchmarks for the payroll and billing engine.
//!
//! This benchmark suite verifies that the pure calculators stay cheap
//! enough to be re-invoked on every form edit:
//! - Payroll for a full month of attendance
//! - Tax computation over a multi-line bill
//! - Amount-in-words conversion
//! - Full invoice rendering
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use uuid::Uuid;

use siteledger::calculation::{amount_to_words, compute_payroll, compute_tax};
use siteledger::invoice::render_invoice;
use siteledger::models::{
    AttendanceStatus, Bill, BillLineItem, BillMetadata, BillStatus, SalaryStructure,
};

fn create_structure() -> SalaryStructure {
    SalaryStructure {
        employee_id: Uuid::nil(),
        basic_salary: Decimal::from(20000),
        hra: Decimal::from(2000),
        transport_allowance: Decimal::from(1000),
        other_allowances: Decimal::from(500),
        effective_from: NaiveDate::from_ymd_opt(2025, 4, 1).unwrap(),
    }
}

fn create_line_items(count: usize) -> Vec<BillLineItem> {
    (0..count)
        .map(|i| BillLineItem {
            description: format!("Work package {}", i + 1),
            amount: Decimal::new(125_000 + i as i64 * 375, 2),
        })
        .collect()
}

fn create_bill_and_metadata() -> (Bill, BillMetadata) {
    let line_items = create_line_items(10);
    let subtotal: Decimal = line_items.iter().map(|i| i.amount).sum();
    let tax = subtotal * Decimal::from(18) / Decimal::ONE_HUNDRED;

    let bill = Bill {
        id: Uuid::nil(),
        bill_number: "INV-BENCH001".to_string(),
        client_name: "Acme Constructions".to_string(),
        client_email: Some("accounts@acme.example".to_string()),
        client_phone: Some("+91-98000-00000".to_string()),
        description: "Work packages".to_string(),
        amount: subtotal,
        tax_amount: tax,
        total_amount: subtotal + tax,
        bill_date: NaiveDate::from_ymd_opt(2026, 2, 1).unwrap(),
        due_date: Some(NaiveDate::from_ymd_opt(2026, 3, 1).unwrap()),
        status: BillStatus::Unpaid,
        paid_amount: Decimal::ZERO,
    };
    let metadata = BillMetadata {
        company_name: "Ridgeline Infrastructure Pvt Ltd".to_string(),
        company_address: "Plot 14, MIDC Industrial Estate, Pune".to_string(),
        company_gstin: Some("27ABCDE1234F1Z5".to_string()),
        client_address: Some("Sector 9, Navi Mumbai".to_string()),
        client_gstin: None,
        gst_enabled: true,
        gst_rate_percent: Decimal::from(18),
        cgst: tax / Decimal::TWO,
        sgst: tax / Decimal::TWO,
        line_items,
        payment: None,
    };

    (bill, metadata)
}

fn bench_payroll(c: &mut Criterion) {
    let structure = create_structure();
    let mut attendance = vec![AttendanceStatus::Present; 26];
    attendance.extend([AttendanceStatus::HalfDay; 2]);

    c.bench_function("payroll_full_month", |b| {
        b.iter(|| {
            compute_payroll(
                black_box(&structure),
                black_box(&attendance),
                black_box(6),
                black_box(2026),
            )
            .unwrap()
        })
    });
}

fn bench_tax(c: &mut Criterion) {
    let line_items = create_line_items(10);

    c.bench_function("tax_ten_line_items", |b| {
        b.iter(|| {
            compute_tax(
                black_box(&line_items),
                black_box(true),
                black_box(Decimal::from(18)),
            )
            .unwrap()
        })
    });
}

fn bench_amount_words(c: &mut Criterion) {
    c.bench_function("amount_to_words", |b| {
        b.iter(|| amount_to_words(black_box(987_654_321)))
    });
}

fn bench_render_invoice(c: &mut Criterion) {
    let (bill, metadata) = create_bill_and_metadata();

    c.bench_function("render_invoice_ten_items", |b| {
        b.iter(|| render_invoice(black_box(&bill), black_box(&metadata)).unwrap())
    });
}

criterion_group!(
    benches,
    bench_payroll,
    bench_tax,
    bench_amount_words,
    bench_render_invoice
);
criterion_main!(benches);
