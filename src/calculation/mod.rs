//! Calculation logic for the payroll and billing engine.
//!
//! This module contains the pure computation functions: monthly payroll
//! derivation from a salary structure and attendance statuses, salary
//! structure resolution by effective date, GST totals from bill line
//! items, and the Indian-grouping amount-in-words conversion used on
//! printed invoices.
//!
//! Every function here is deterministic and side-effect free; persistence
//! of the results is the caller's concern.

mod amount_words;
mod gst;
mod payroll;
mod structure_lookup;

pub use amount_words::amount_to_words;
pub use gst::{TaxResult, compute_tax, join_descriptions};
pub use payroll::{PayrollResult, compute_payroll, days_in_month, statuses_for_month};
pub use structure_lookup::resolve_salary_structure;
