//! Salary structure and salary payment models.
//!
//! The structure is the employer-defined pay breakdown for an employee;
//! the payment is the derived record produced by one payroll computation
//! for one month, carrying every intermediate the back office displays
//! and persists.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculation::PayrollResult;
use crate::error::{EngineError, EngineResult};

/// An employee's pay breakdown, effective from a given date.
///
/// An employee may have several structures over time; the calculator uses
/// the one in effect for the target month (see
/// [`resolve_salary_structure`](crate::calculation::resolve_salary_structure)).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryStructure {
    /// The employee this structure belongs to.
    pub employee_id: Uuid,
    /// Monthly basic pay.
    pub basic_salary: Decimal,
    /// House rent allowance.
    pub hra: Decimal,
    /// Transport allowance.
    pub transport_allowance: Decimal,
    /// Any other allowances, combined.
    pub other_allowances: Decimal,
    /// The first date this structure applies.
    pub effective_from: NaiveDate,
}

impl SalaryStructure {
    /// Sum of all allowance components (everything above basic pay).
    pub fn allowance_total(&self) -> Decimal {
        self.hra + self.transport_allowance + self.other_allowances
    }

    /// Monthly gross pay: basic plus all allowances.
    pub fn gross(&self) -> Decimal {
        self.basic_salary + self.allowance_total()
    }
}

/// Payment lifecycle of a computed salary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    /// Computed and saved, not yet paid out.
    Pending,
    /// Paid out on `paid_on`.
    Paid,
}

/// The derived salary record for one employee and one month.
///
/// Field names match the persisted `salary_payments` row so the external
/// data store can read and write this shape by name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryPayment {
    /// The employee the payment is for.
    pub employee_id: Uuid,
    /// Target month, 1-12.
    pub month: u32,
    /// Target four-digit year.
    pub year: i32,
    /// Basic pay from the structure used.
    pub basic_salary: Decimal,
    /// Total allowances from the structure used.
    pub allowances: Decimal,
    /// Basic plus allowances.
    pub gross_salary: Decimal,
    /// Attendance-based deduction.
    pub deductions: Decimal,
    /// Gross minus deductions.
    pub net_salary: Decimal,
    /// Calendar days in the target month.
    pub working_days: u32,
    /// Days counted as present (half-days count 0.5).
    pub present_days: Decimal,
    /// Days counted as absent; may be fractional.
    pub absent_days: Decimal,
    /// Payment lifecycle status.
    pub status: PaymentStatus,
    /// The date the payment was made, once paid.
    pub paid_on: Option<NaiveDate>,
}

impl SalaryPayment {
    /// Builds a pending payment record from a payroll computation.
    pub fn from_result(
        employee_id: Uuid,
        month: u32,
        year: i32,
        result: &PayrollResult,
    ) -> Self {
        SalaryPayment {
            employee_id,
            month,
            year,
            basic_salary: result.basic_salary,
            allowances: result.allowances,
            gross_salary: result.gross_salary,
            deductions: result.deductions,
            net_salary: result.net_salary,
            working_days: result.working_days,
            present_days: result.present_days,
            absent_days: result.absent_days,
            status: PaymentStatus::Pending,
            paid_on: None,
        }
    }

    /// Transitions the payment from pending to paid.
    ///
    /// The transition is one-way; marking an already-paid record again is
    /// an error rather than a silent overwrite of `paid_on`.
    pub fn mark_paid(&mut self, on: NaiveDate) -> EngineResult<()> {
        if self.status == PaymentStatus::Paid {
            return Err(EngineError::invalid_input(
                "status",
                "salary payment is already paid",
            ));
        }
        self.status = PaymentStatus::Paid;
        self.paid_on = Some(on);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_test_structure() -> SalaryStructure {
        SalaryStructure {
            employee_id: Uuid::nil(),
            basic_salary: dec("20000"),
            hra: dec("2000"),
            transport_allowance: dec("1000"),
            other_allowances: dec("500"),
            effective_from: NaiveDate::from_ymd_opt(2025, 4, 1).unwrap(),
        }
    }

    fn create_test_result() -> PayrollResult {
        PayrollResult {
            working_days: 30,
            present_days: dec("28"),
            absent_days: dec("2"),
            basic_salary: dec("20000"),
            allowances: dec("3500"),
            gross_salary: dec("23500"),
            per_day_rate: dec("23500") / dec("30"),
            deductions: (dec("23500") / dec("30")) * dec("2"),
            net_salary: dec("23500") - (dec("23500") / dec("30")) * dec("2"),
        }
    }

    #[test]
    fn test_allowance_total_sums_components() {
        let structure = create_test_structure();
        assert_eq!(structure.allowance_total(), dec("3500"));
    }

    #[test]
    fn test_gross_is_basic_plus_allowances() {
        let structure = create_test_structure();
        assert_eq!(structure.gross(), dec("23500"));
    }

    #[test]
    fn test_from_result_is_pending_with_no_paid_on() {
        let payment = SalaryPayment::from_result(Uuid::nil(), 6, 2026, &create_test_result());
        assert_eq!(payment.status, PaymentStatus::Pending);
        assert_eq!(payment.paid_on, None);
        assert_eq!(payment.month, 6);
        assert_eq!(payment.year, 2026);
        assert_eq!(payment.gross_salary, dec("23500"));
    }

    #[test]
    fn test_mark_paid_sets_status_and_date() {
        let mut payment = SalaryPayment::from_result(Uuid::nil(), 6, 2026, &create_test_result());
        let on = NaiveDate::from_ymd_opt(2026, 7, 1).unwrap();

        payment.mark_paid(on).unwrap();

        assert_eq!(payment.status, PaymentStatus::Paid);
        assert_eq!(payment.paid_on, Some(on));
    }

    #[test]
    fn test_mark_paid_twice_is_rejected() {
        let mut payment = SalaryPayment::from_result(Uuid::nil(), 6, 2026, &create_test_result());
        let on = NaiveDate::from_ymd_opt(2026, 7, 1).unwrap();

        payment.mark_paid(on).unwrap();
        let again = payment.mark_paid(NaiveDate::from_ymd_opt(2026, 7, 2).unwrap());

        assert!(again.is_err());
        assert_eq!(payment.paid_on, Some(on));
    }

    #[test]
    fn test_payment_status_serialization() {
        assert_eq!(
            serde_json::to_string(&PaymentStatus::Pending).unwrap(),
            "\"pending\""
        );
        assert_eq!(
            serde_json::to_string(&PaymentStatus::Paid).unwrap(),
            "\"paid\""
        );
    }

    #[test]
    fn test_payment_serializes_persisted_field_names() {
        let payment = SalaryPayment::from_result(Uuid::nil(), 6, 2026, &create_test_result());
        let json = serde_json::to_string(&payment).unwrap();
        assert!(json.contains("\"gross_salary\""));
        assert!(json.contains("\"net_salary\""));
        assert!(json.contains("\"working_days\""));
        assert!(json.contains("\"present_days\""));
        assert!(json.contains("\"absent_days\""));
        assert!(json.contains("\"paid_on\""));
    }
}
