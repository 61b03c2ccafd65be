//! Attendance models.
//!
//! This module defines the per-day attendance status and the attendance
//! record row as marked by the daily attendance screen.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The status recorded for one employee on one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    /// A full working day.
    Present,
    /// Not at work.
    Absent,
    /// Half of a working day.
    HalfDay,
    /// Approved leave.
    Leave,
    /// Declared holiday.
    Holiday,
}

impl AttendanceStatus {
    /// Returns the fraction of a working day this status contributes to
    /// the present-day count.
    ///
    /// `Leave` and `Holiday` contribute nothing, matching the payroll
    /// policy that only marked presence earns pay.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal::Decimal;
    /// use siteledger::models::AttendanceStatus;
    ///
    /// assert_eq!(AttendanceStatus::Present.presence_credit(), Decimal::ONE);
    /// assert_eq!(AttendanceStatus::HalfDay.presence_credit(), Decimal::new(5, 1));
    /// assert_eq!(AttendanceStatus::Leave.presence_credit(), Decimal::ZERO);
    /// ```
    pub fn presence_credit(self) -> Decimal {
        match self {
            AttendanceStatus::Present => Decimal::ONE,
            AttendanceStatus::HalfDay => Decimal::new(5, 1),
            AttendanceStatus::Absent | AttendanceStatus::Leave | AttendanceStatus::Holiday => {
                Decimal::ZERO
            }
        }
    }
}

/// One attendance row, unique per (employee, date).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// The employee the record belongs to.
    pub employee_id: Uuid,
    /// The calendar day the record covers.
    pub date: NaiveDate,
    /// The status marked for that day.
    pub status: AttendanceStatus,
}
