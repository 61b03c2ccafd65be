//! HTTP request handlers for the payroll and billing engine API.
//!
//! This module contains the handler functions for all API endpoints.
//! Handlers stay thin: they validate the request boundary, invoke the
//! pure calculators, and surface any failure as a single error response.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use rust_decimal::Decimal;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    PayrollResult, compute_payroll, compute_tax, join_descriptions, resolve_salary_structure,
    statuses_for_month,
};
use crate::error::{EngineError, EngineResult};
use crate::invoice::render_invoice;
use crate::models::{
    AttendanceRecord, Bill, BillLineItem, BillMetadata, BillStatus, SalaryStructure,
};

use super::request::{CreateBillRequest, PayrollRequest, RenderInvoiceRequest, TaxRequest};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/payroll/calculate", post(payroll_handler))
        .route("/bills/tax", post(tax_handler))
        .route("/bills", post(create_bill_handler))
        .route("/bills/invoice", post(render_invoice_handler))
        .with_state(state)
}

/// Maps a JSON extraction rejection to an API error body.
fn rejection_error(rejection: JsonRejection, correlation_id: Uuid) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries the detailed error from serde
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => ApiError::new(
            "MISSING_CONTENT_TYPE",
            "Content-Type must be application/json",
        ),
        _ => ApiError::malformed_json("Failed to parse request body"),
    }
}

/// Shorthand for the BAD_REQUEST response a rejection produces.
fn rejection_response(rejection: JsonRejection, correlation_id: Uuid) -> axum::response::Response {
    (
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, "application/json")],
        Json(rejection_error(rejection, correlation_id)),
    )
        .into_response()
}

/// Shorthand for an engine-error response.
fn engine_error_response(error: EngineError) -> axum::response::Response {
    let api_error: ApiErrorResponse = error.into();
    (
        api_error.status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(api_error.error),
    )
        .into_response()
}

/// Handler for POST /payroll/calculate.
///
/// Resolves the applicable salary structure, validates the attendance
/// rows against the target month, and returns the full payroll
/// breakdown. Persisting the resulting payment row stays with the
/// caller.
async fn payroll_handler(
    payload: Result<Json<PayrollRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing payroll calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let employee_id = request.employee_id;
    let (month, year) = (request.month, request.year);

    let start_time = Instant::now();
    match perform_payroll(request) {
        Ok(result) => {
            let duration = start_time.elapsed();
            info!(
                correlation_id = %correlation_id,
                employee_id = %employee_id,
                month,
                year,
                net_salary = %result.net_salary,
                duration_us = duration.as_micros(),
                "Payroll calculation completed successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(result),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                employee_id = %employee_id,
                error = %err,
                "Payroll calculation failed"
            );
            engine_error_response(err)
        }
    }
}

/// Runs the payroll computation for one request.
fn perform_payroll(request: PayrollRequest) -> EngineResult<PayrollResult> {
    let PayrollRequest {
        employee_id,
        structures,
        attendance,
        month,
        year,
    } = request;

    let structures: Vec<SalaryStructure> = structures
        .into_iter()
        .map(|s| s.with_employee(employee_id))
        .collect();
    let records: Vec<AttendanceRecord> = attendance
        .into_iter()
        .map(|a| a.with_employee(employee_id))
        .collect();

    let structure = resolve_salary_structure(employee_id, &structures, month, year)?;
    let statuses = statuses_for_month(&records, month, year)?;
    compute_payroll(structure, &statuses, month, year)
}

/// Handler for POST /bills/tax.
///
/// The stateless preview endpoint the bill form calls on every edit.
async fn tax_handler(
    State(state): State<AppState>,
    payload: Result<Json<TaxRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let rate = request
        .gst_rate_percent
        .unwrap_or(state.config().tax().default_rate_percent);
    let line_items: Vec<BillLineItem> =
        request.line_items.into_iter().map(Into::into).collect();

    match compute_tax(&line_items, request.gst_enabled, rate) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                subtotal = %result.subtotal,
                tax_total = %result.tax_total,
                "Tax calculation completed successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(result),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Tax calculation failed"
            );
            engine_error_response(err)
        }
    }
}

/// Handler for POST /bills.
///
/// Computes the totals, assembles the bill and its render-time metadata,
/// stores the metadata, and returns the bill. The bill row itself is
/// persisted by the external data store, not here.
async fn create_bill_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateBillRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing bill creation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    match perform_create_bill(&state, request) {
        Ok(bill) => {
            info!(
                correlation_id = %correlation_id,
                bill_id = %bill.id,
                bill_number = %bill.bill_number,
                total_amount = %bill.total_amount,
                "Bill created successfully"
            );
            (
                StatusCode::CREATED,
                [(header::CONTENT_TYPE, "application/json")],
                Json(bill),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Bill creation failed"
            );
            engine_error_response(err)
        }
    }
}

/// Assembles a bill and its metadata from one creation request.
fn perform_create_bill(state: &AppState, request: CreateBillRequest) -> EngineResult<Bill> {
    if request.client_name.trim().is_empty() {
        return Err(EngineError::invalid_input(
            "client_name",
            "must not be empty",
        ));
    }

    let profile = state.config();
    let gst_enabled = request.gst_enabled.unwrap_or(profile.tax().gst_enabled);
    let gst_rate = request
        .gst_rate_percent
        .unwrap_or(profile.tax().default_rate_percent);

    let line_items: Vec<BillLineItem> =
        request.line_items.into_iter().map(Into::into).collect();
    let tax = compute_tax(&line_items, gst_enabled, gst_rate)?;

    let bill_id = Uuid::new_v4();
    let bill_number = format!(
        "INV-{}",
        bill_id.simple().to_string()[..8].to_uppercase()
    );

    let bill = Bill {
        id: bill_id,
        bill_number,
        client_name: request.client_name,
        client_email: request.client_email,
        client_phone: request.client_phone,
        description: join_descriptions(&line_items),
        amount: tax.subtotal,
        tax_amount: tax.tax_total,
        total_amount: tax.total_amount,
        bill_date: request.bill_date,
        due_date: request.due_date,
        status: BillStatus::Unpaid,
        paid_amount: Decimal::ZERO,
    };

    let metadata = BillMetadata {
        company_name: request
            .company_name
            .unwrap_or_else(|| profile.company().name.clone()),
        company_address: request
            .company_address
            .unwrap_or_else(|| profile.company().address.clone()),
        company_gstin: request
            .company_gstin
            .or_else(|| profile.company().gstin.clone()),
        client_address: request.client_address,
        client_gstin: request.client_gstin,
        gst_enabled,
        gst_rate_percent: gst_rate,
        cgst: tax.cgst,
        sgst: tax.sgst,
        line_items,
        payment: request
            .payment
            .map(Into::into)
            .or_else(|| profile.payment_details()),
    };

    state.metadata().put(bill.id, metadata);

    Ok(bill)
}

/// Handler for POST /bills/invoice.
///
/// Looks up the bill's render-time metadata and responds with the
/// printable HTML document.
async fn render_invoice_handler(
    State(state): State<AppState>,
    payload: Result<Json<RenderInvoiceRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing invoice render request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let bill = request.bill;
    let metadata = match state.metadata().get(bill.id) {
        Some(metadata) => metadata,
        None => {
            warn!(
                correlation_id = %correlation_id,
                bill_id = %bill.id,
                "No metadata stored for bill"
            );
            return engine_error_response(EngineError::MetadataNotFound { bill_id: bill.id });
        }
    };

    match render_invoice(&bill, &metadata) {
        Ok(html) => {
            info!(
                correlation_id = %correlation_id,
                bill_id = %bill.id,
                bill_number = %bill.bill_number,
                "Invoice rendered successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
                html,
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                bill_id = %bill.id,
                error = %err,
                "Invoice rendering failed"
            );
            engine_error_response(err)
        }
    }
}
