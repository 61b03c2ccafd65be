//! Core data models for the payroll and billing engine.
//!
//! This module contains all the domain records used throughout the engine.
//! External rows enter the core through these types, so validation of
//! loosely-shaped data happens at this boundary.

mod attendance;
mod bill;
mod salary;

pub use attendance::{AttendanceRecord, AttendanceStatus};
pub use bill::{Bill, BillLineItem, BillMetadata, BillStatus, PaymentDetails};
pub use salary::{PaymentStatus, SalaryPayment, SalaryStructure};
