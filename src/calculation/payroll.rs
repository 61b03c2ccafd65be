//! Monthly payroll calculation.
//!
//! This module derives one employee's pay for one calendar month from
//! their salary structure and the attendance statuses recorded in that
//! month. Deductions are pro-rated: gross pay is divided over the month's
//! calendar days and each absent day forfeits one day's rate.

use chrono::{Datelike, Months, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{AttendanceRecord, AttendanceStatus, SalaryStructure};

/// The outcome of one payroll computation.
///
/// Every intermediate is surfaced because the review dialog and the
/// persisted payment record both display them, not just the net figure.
/// Values are kept at full precision; rounding to two decimal places
/// happens only at display time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollResult {
    /// Calendar days in the target month (28-31).
    pub working_days: u32,
    /// Days counted as present; half-days contribute 0.5.
    pub present_days: Decimal,
    /// `working_days - present_days`; may be fractional.
    pub absent_days: Decimal,
    /// Basic pay from the structure.
    pub basic_salary: Decimal,
    /// Total allowances from the structure.
    pub allowances: Decimal,
    /// Basic plus allowances.
    pub gross_salary: Decimal,
    /// Gross divided by working days.
    pub per_day_rate: Decimal,
    /// `per_day_rate × absent_days`.
    pub deductions: Decimal,
    /// `gross_salary - deductions`.
    pub net_salary: Decimal,
}

/// Returns the number of calendar days in the given month.
///
/// # Errors
///
/// Returns [`EngineError::InvalidPeriod`] when the month/year pair does
/// not denote a real calendar month.
///
/// # Example
///
/// ```
/// use siteledger::calculation::days_in_month;
///
/// assert_eq!(days_in_month(2, 2024).unwrap(), 29);
/// assert_eq!(days_in_month(2, 2026).unwrap(), 28);
/// assert!(days_in_month(13, 2026).is_err());
/// ```
pub fn days_in_month(month: u32, year: i32) -> EngineResult<u32> {
    let first =
        NaiveDate::from_ymd_opt(year, month, 1).ok_or(EngineError::InvalidPeriod { month, year })?;
    let next = first
        .checked_add_months(Months::new(1))
        .ok_or(EngineError::InvalidPeriod { month, year })?;
    Ok((next - first).num_days() as u32)
}

/// Extracts the status sequence for a target month from raw attendance rows.
///
/// This is the boundary where externally fetched rows enter the core:
/// every row must fall inside the target month and no date may appear
/// twice, mirroring the store's (employee, date) uniqueness.
///
/// Days with no row are simply not enumerated; the calculator treats them
/// as absent through the day count.
///
/// # Errors
///
/// Returns [`EngineError::InvalidPeriod`] for a degenerate month and
/// [`EngineError::InvalidInput`] for out-of-month or duplicate rows.
pub fn statuses_for_month(
    records: &[AttendanceRecord],
    month: u32,
    year: i32,
) -> EngineResult<Vec<AttendanceStatus>> {
    // Validates the period as a side effect.
    days_in_month(month, year)?;

    let mut seen: Vec<NaiveDate> = Vec::with_capacity(records.len());
    let mut statuses = Vec::with_capacity(records.len());

    for record in records {
        if record.date.month() != month || record.date.year() != year {
            return Err(EngineError::invalid_input(
                "attendance",
                format!("record dated {} is outside {}-{:02}", record.date, year, month),
            ));
        }
        if seen.contains(&record.date) {
            return Err(EngineError::invalid_input(
                "attendance",
                format!("duplicate attendance record for {}", record.date),
            ));
        }
        seen.push(record.date);
        statuses.push(record.status);
    }

    Ok(statuses)
}

/// Computes one employee's salary for one calendar month.
///
/// # Arguments
///
/// * `structure` - The salary structure in effect for the target month
/// * `attendance` - One status per marked day of the target month
/// * `month` - Target month, 1-12
/// * `year` - Target four-digit year
///
/// # Errors
///
/// * [`EngineError::InvalidPeriod`] - the month/year pair is degenerate
/// * [`EngineError::InvalidInput`] - a salary component is negative, or
///   more statuses were supplied than the month has days
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use siteledger::calculation::compute_payroll;
/// use siteledger::models::{AttendanceStatus, SalaryStructure};
/// use uuid::Uuid;
///
/// let structure = SalaryStructure {
///     employee_id: Uuid::new_v4(),
///     basic_salary: Decimal::from(20000),
///     hra: Decimal::from(2000),
///     transport_allowance: Decimal::from(1000),
///     other_allowances: Decimal::from(500),
///     effective_from: NaiveDate::from_ymd_opt(2025, 4, 1).unwrap(),
/// };
/// let attendance = vec![AttendanceStatus::Present; 28];
///
/// // June has 30 days; two unmarked days count as absent.
/// let result = compute_payroll(&structure, &attendance, 6, 2026).unwrap();
/// assert_eq!(result.working_days, 30);
/// assert_eq!(result.absent_days, Decimal::from(2));
/// assert_eq!(result.net_salary.round_dp(2), Decimal::new(2193333, 2));
/// ```
pub fn compute_payroll(
    structure: &SalaryStructure,
    attendance: &[AttendanceStatus],
    month: u32,
    year: i32,
) -> EngineResult<PayrollResult> {
    let working_days = days_in_month(month, year)?;
    if working_days == 0 {
        return Err(EngineError::InvalidPeriod { month, year });
    }

    for (field, value) in [
        ("basic_salary", structure.basic_salary),
        ("hra", structure.hra),
        ("transport_allowance", structure.transport_allowance),
        ("other_allowances", structure.other_allowances),
    ] {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(EngineError::invalid_input(field, "must not be negative"));
        }
    }

    if attendance.len() as u32 > working_days {
        return Err(EngineError::invalid_input(
            "attendance",
            format!(
                "{} statuses supplied for a {}-day month",
                attendance.len(),
                working_days
            ),
        ));
    }

    let present_days: Decimal = attendance
        .iter()
        .map(|status| status.presence_credit())
        .sum();
    let absent_days = Decimal::from(working_days) - present_days;

    let allowances = structure.allowance_total();
    let gross_salary = structure.gross();
    let per_day_rate = gross_salary / Decimal::from(working_days);
    let deductions = per_day_rate * absent_days;
    let net_salary = gross_salary - deductions;

    Ok(PayrollResult {
        working_days,
        present_days,
        absent_days,
        basic_salary: structure.basic_salary,
        allowances,
        gross_salary,
        per_day_rate,
        deductions,
        net_salary,
    })
}
