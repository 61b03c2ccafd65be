//! Salary structure resolution.
//!
//! An employee may accumulate several salary structures over time. The
//! payroll screen needs exactly one for a target month: the structure with
//! the latest `effective_from` on or before the end of that month.

use chrono::{Months, NaiveDate};
use uuid::Uuid;

use crate::calculation::days_in_month;
use crate::error::{EngineError, EngineResult};
use crate::models::SalaryStructure;

/// Picks the salary structure in effect for the given month.
///
/// The applicable structure is the one with the latest `effective_from`
/// that is on or before the last day of the target month. Structures that
/// only become effective after the month ends are ignored.
///
/// # Errors
///
/// * [`EngineError::InvalidPeriod`] - the month/year pair is degenerate
/// * [`EngineError::MissingSalaryStructure`] - no structure exists, or
///   none is effective yet for the target month
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use siteledger::calculation::resolve_salary_structure;
/// use siteledger::models::SalaryStructure;
/// use uuid::Uuid;
///
/// let employee_id = Uuid::new_v4();
/// let old = SalaryStructure {
///     employee_id,
///     basic_salary: Decimal::from(18000),
///     hra: Decimal::ZERO,
///     transport_allowance: Decimal::ZERO,
///     other_allowances: Decimal::ZERO,
///     effective_from: NaiveDate::from_ymd_opt(2024, 4, 1).unwrap(),
/// };
/// let revised = SalaryStructure {
///     basic_salary: Decimal::from(20000),
///     effective_from: NaiveDate::from_ymd_opt(2026, 4, 1).unwrap(),
///     ..old.clone()
/// };
/// let structures = [old, revised];
///
/// let picked = resolve_salary_structure(employee_id, &structures, 6, 2026).unwrap();
/// assert_eq!(picked.basic_salary, Decimal::from(20000));
/// ```
pub fn resolve_salary_structure<'a>(
    employee_id: Uuid,
    structures: &'a [SalaryStructure],
    month: u32,
    year: i32,
) -> EngineResult<&'a SalaryStructure> {
    let month_end = last_day_of_month(month, year)?;

    structures
        .iter()
        .filter(|s| s.effective_from <= month_end)
        .max_by_key(|s| s.effective_from)
        .ok_or(EngineError::MissingSalaryStructure { employee_id })
}

fn last_day_of_month(month: u32, year: i32) -> EngineResult<NaiveDate> {
    // Validates the period as a side effect.
    days_in_month(month, year)?;

    let first =
        NaiveDate::from_ymd_opt(year, month, 1).ok_or(EngineError::InvalidPeriod { month, year })?;
    first
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .ok_or(EngineError::InvalidPeriod { month, year })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn structure(basic: u64, effective_from: NaiveDate) -> SalaryStructure {
        SalaryStructure {
            employee_id: Uuid::nil(),
            basic_salary: Decimal::from(basic),
            hra: Decimal::ZERO,
            transport_allowance: Decimal::ZERO,
            other_allowances: Decimal::ZERO,
            effective_from,
        }
    }

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// SL-001: latest effective structure wins
    #[test]
    fn test_latest_effective_structure_wins() {
        let structures = vec![
            structure(18000, ymd(2024, 4, 1)),
            structure(20000, ymd(2026, 4, 1)),
            structure(25000, ymd(2027, 4, 1)),
        ];

        let picked = resolve_salary_structure(Uuid::nil(), &structures, 6, 2026).unwrap();
        assert_eq!(picked.basic_salary, Decimal::from(20000));
    }

    /// SL-002: a structure effective mid-month applies to that month
    #[test]
    fn test_mid_month_effective_date_applies() {
        let structures = vec![
            structure(18000, ymd(2024, 4, 1)),
            structure(20000, ymd(2026, 6, 15)),
        ];

        let picked = resolve_salary_structure(Uuid::nil(), &structures, 6, 2026).unwrap();
        assert_eq!(picked.basic_salary, Decimal::from(20000));
    }

    /// SL-003: no structures at all
    #[test]
    fn test_empty_structures_is_missing() {
        let employee_id = Uuid::new_v4();
        let result = resolve_salary_structure(employee_id, &[], 6, 2026);

        match result.unwrap_err() {
            EngineError::MissingSalaryStructure { employee_id: id } => {
                assert_eq!(id, employee_id);
            }
            other => panic!("Expected MissingSalaryStructure, got {:?}", other),
        }
    }

    /// SL-004: only future structures is also missing
    #[test]
    fn test_only_future_structures_is_missing() {
        let structures = vec![structure(20000, ymd(2026, 7, 1))];
        let result = resolve_salary_structure(Uuid::nil(), &structures, 6, 2026);

        assert!(matches!(
            result.unwrap_err(),
            EngineError::MissingSalaryStructure { .. }
        ));
    }

    #[test]
    fn test_effective_on_month_end_applies() {
        let structures = vec![structure(20000, ymd(2026, 6, 30))];
        let picked = resolve_salary_structure(Uuid::nil(), &structures, 6, 2026).unwrap();
        assert_eq!(picked.effective_from, ymd(2026, 6, 30));
    }

    #[test]
    fn test_invalid_period_is_rejected() {
        let structures = vec![structure(20000, ymd(2026, 1, 1))];
        let result = resolve_salary_structure(Uuid::nil(), &structures, 0, 2026);

        assert!(matches!(
            result.unwrap_err(),
            EngineError::InvalidPeriod { .. }
        ));
    }
}
