//! Request types for the payroll and billing engine API.
//!
//! This module defines the JSON request structures for the payroll,
//! tax, bill-creation, and invoice-rendering endpoints.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{
    AttendanceRecord, AttendanceStatus, Bill, BillLineItem, PaymentDetails, SalaryStructure,
};

/// Request body for the `/payroll/calculate` endpoint.
///
/// Carries the raw rows the back office fetched for one employee: every
/// salary structure on file and the attendance marked for the target
/// month. Structure resolution and boundary validation happen inside the
/// engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollRequest {
    /// The employee payroll is being computed for.
    pub employee_id: Uuid,
    /// Every salary structure on file for the employee.
    pub structures: Vec<SalaryStructureRequest>,
    /// The attendance rows marked in the target month.
    #[serde(default)]
    pub attendance: Vec<AttendanceDayRequest>,
    /// Target month, 1-12.
    pub month: u32,
    /// Target four-digit year.
    pub year: i32,
}

/// One salary structure in a payroll request.
///
/// Allowance fields default to zero, matching the nullable columns of
/// the persisted row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalaryStructureRequest {
    /// Monthly basic pay.
    pub basic_salary: Decimal,
    /// House rent allowance.
    #[serde(default)]
    pub hra: Decimal,
    /// Transport allowance.
    #[serde(default)]
    pub transport_allowance: Decimal,
    /// Any other allowances, combined.
    #[serde(default)]
    pub other_allowances: Decimal,
    /// The first date this structure applies.
    pub effective_from: NaiveDate,
}

impl SalaryStructureRequest {
    /// Converts into the domain structure for the given employee.
    pub fn with_employee(self, employee_id: Uuid) -> SalaryStructure {
        SalaryStructure {
            employee_id,
            basic_salary: self.basic_salary,
            hra: self.hra,
            transport_allowance: self.transport_allowance,
            other_allowances: self.other_allowances,
            effective_from: self.effective_from,
        }
    }
}

/// One marked attendance day in a payroll request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceDayRequest {
    /// The calendar day.
    pub date: NaiveDate,
    /// The status marked for that day.
    pub status: AttendanceStatus,
}

impl AttendanceDayRequest {
    /// Converts into the domain record for the given employee.
    pub fn with_employee(self, employee_id: Uuid) -> AttendanceRecord {
        AttendanceRecord {
            employee_id,
            date: self.date,
            status: self.status,
        }
    }
}

/// Request body for the `/bills/tax` endpoint.
///
/// The bill form re-submits this on every edit to refresh the preview,
/// so the endpoint is stateless and idempotent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxRequest {
    /// The priced lines of the bill.
    pub line_items: Vec<LineItemRequest>,
    /// Whether GST applies.
    pub gst_enabled: bool,
    /// GST rate override; falls back to the configured default.
    #[serde(default)]
    pub gst_rate_percent: Option<Decimal>,
}

/// One priced line in a bill request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineItemRequest {
    /// What the line covers.
    pub description: String,
    /// The line amount before tax.
    pub amount: Decimal,
}

impl From<LineItemRequest> for BillLineItem {
    fn from(req: LineItemRequest) -> Self {
        BillLineItem {
            description: req.description,
            amount: req.amount,
        }
    }
}

/// Request body for the `/bills` endpoint.
///
/// Company fields override the configured billing profile when present;
/// GST settings fall back to the configured defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBillRequest {
    /// Name of the billed client.
    pub client_name: String,
    /// Client email.
    #[serde(default)]
    pub client_email: Option<String>,
    /// Client phone.
    #[serde(default)]
    pub client_phone: Option<String>,
    /// Client postal address.
    #[serde(default)]
    pub client_address: Option<String>,
    /// Client GST registration number.
    #[serde(default)]
    pub client_gstin: Option<String>,
    /// Issuing company name override.
    #[serde(default)]
    pub company_name: Option<String>,
    /// Issuing company address override.
    #[serde(default)]
    pub company_address: Option<String>,
    /// Issuing company GSTIN override.
    #[serde(default)]
    pub company_gstin: Option<String>,
    /// The priced lines of the bill.
    pub line_items: Vec<LineItemRequest>,
    /// Whether GST applies; falls back to the configured default.
    #[serde(default)]
    pub gst_enabled: Option<bool>,
    /// GST rate override; falls back to the configured default.
    #[serde(default)]
    pub gst_rate_percent: Option<Decimal>,
    /// The date the bill is raised.
    pub bill_date: NaiveDate,
    /// Payment due date.
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    /// Bank/UPI details override for the invoice payment block.
    #[serde(default)]
    pub payment: Option<PaymentDetailsRequest>,
}

/// Bank/UPI details in a bill request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentDetailsRequest {
    /// Bank name.
    #[serde(default)]
    pub bank_name: Option<String>,
    /// Bank account number.
    #[serde(default)]
    pub account_number: Option<String>,
    /// IFSC / routing code.
    #[serde(default)]
    pub ifsc_code: Option<String>,
    /// UPI id or payment handle.
    #[serde(default)]
    pub upi_id: Option<String>,
}

impl From<PaymentDetailsRequest> for PaymentDetails {
    fn from(req: PaymentDetailsRequest) -> Self {
        PaymentDetails {
            bank_name: req.bank_name,
            account_number: req.account_number,
            ifsc_code: req.ifsc_code,
            upi_id: req.upi_id,
        }
    }
}

/// Request body for the `/bills/invoice` endpoint.
///
/// Carries the finalized bill row as the external store holds it; the
/// render-time sidecar is looked up by `bill.id` on the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderInvoiceRequest {
    /// The bill to render.
    pub bill: Bill,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_payroll_request() {
        let json = r#"{
            "employee_id": "00000000-0000-0000-0000-000000000001",
            "structures": [
                {
                    "basic_salary": "20000",
                    "hra": "2000",
                    "transport_allowance": "1000",
                    "other_allowances": "500",
                    "effective_from": "2025-04-01"
                }
            ],
            "attendance": [
                { "date": "2026-06-01", "status": "present" },
                { "date": "2026-06-02", "status": "half_day" }
            ],
            "month": 6,
            "year": 2026
        }"#;

        let request: PayrollRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.month, 6);
        assert_eq!(request.structures.len(), 1);
        assert_eq!(request.attendance.len(), 2);
        assert_eq!(request.attendance[1].status, AttendanceStatus::HalfDay);
    }

    #[test]
    fn test_structure_allowances_default_to_zero() {
        let json = r#"{
            "basic_salary": "20000",
            "effective_from": "2025-04-01"
        }"#;

        let request: SalaryStructureRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.hra, Decimal::ZERO);
        assert_eq!(request.transport_allowance, Decimal::ZERO);
        assert_eq!(request.other_allowances, Decimal::ZERO);
    }

    #[test]
    fn test_structure_conversion_carries_employee() {
        let request = SalaryStructureRequest {
            basic_salary: Decimal::from(20000),
            hra: Decimal::ZERO,
            transport_allowance: Decimal::ZERO,
            other_allowances: Decimal::ZERO,
            effective_from: NaiveDate::from_ymd_opt(2025, 4, 1).unwrap(),
        };
        let employee_id = Uuid::new_v4();

        let structure = request.with_employee(employee_id);
        assert_eq!(structure.employee_id, employee_id);
        assert_eq!(structure.basic_salary, Decimal::from(20000));
    }

    #[test]
    fn test_deserialize_tax_request_without_rate() {
        let json = r#"{
            "line_items": [ { "description": "Earthworks", "amount": "500" } ],
            "gst_enabled": true
        }"#;

        let request: TaxRequest = serde_json::from_str(json).unwrap();
        assert!(request.gst_enabled);
        assert_eq!(request.gst_rate_percent, None);
    }

    #[test]
    fn test_deserialize_create_bill_request_minimal() {
        let json = r#"{
            "client_name": "Acme Constructions",
            "line_items": [ { "description": "Earthworks", "amount": "500" } ],
            "bill_date": "2026-02-01"
        }"#;

        let request: CreateBillRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.client_name, "Acme Constructions");
        assert_eq!(request.gst_enabled, None);
        assert_eq!(request.company_name, None);
        assert!(request.payment.is_none());
    }
}
