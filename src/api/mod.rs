//! HTTP API module for the payroll and billing engine.
//!
//! This module provides the REST endpoints the back-office screens call:
//! payroll calculation, bill tax preview, bill creation, and invoice
//! rendering.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CreateBillRequest, PayrollRequest, RenderInvoiceRequest, TaxRequest};
pub use response::ApiError;
pub use state::AppState;
