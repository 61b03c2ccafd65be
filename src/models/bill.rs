//! Bill models.
//!
//! A [`Bill`] is the persisted invoice row; [`BillMetadata`] is the sidecar
//! kept only so the printable document can be reconstructed later. The
//! metadata is created alongside the bill and never mutated afterward.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Payment lifecycle of a bill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BillStatus {
    /// Issued, nothing received.
    Unpaid,
    /// Settled in full.
    Paid,
    /// Voided.
    Cancelled,
}

/// One priced line on a bill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillLineItem {
    /// What the line covers.
    pub description: String,
    /// The line amount before tax.
    pub amount: Decimal,
}

/// A client bill with its computed totals.
///
/// Field names match the persisted `bills` row. The invariant
/// `total_amount = amount + tax_amount` is established by the tax
/// calculator at creation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bill {
    /// Unique identifier, also the metadata lookup key.
    pub id: Uuid,
    /// Human-facing invoice number.
    pub bill_number: String,
    /// Name of the billed client.
    pub client_name: String,
    /// Client email, if provided.
    pub client_email: Option<String>,
    /// Client phone, if provided.
    pub client_phone: Option<String>,
    /// Concatenation of the line-item descriptions.
    pub description: String,
    /// Subtotal of all line items, before tax.
    pub amount: Decimal,
    /// Total GST charged.
    pub tax_amount: Decimal,
    /// Subtotal plus tax.
    pub total_amount: Decimal,
    /// The date the bill was raised.
    pub bill_date: NaiveDate,
    /// Payment due date, if any.
    pub due_date: Option<NaiveDate>,
    /// Payment lifecycle status.
    pub status: BillStatus,
    /// Amount received so far.
    pub paid_amount: Decimal,
}

impl Bill {
    /// Outstanding balance: total minus what was paid.
    pub fn balance_due(&self) -> Decimal {
        self.total_amount - self.paid_amount
    }

    /// Marks the bill paid in full.
    ///
    /// Partial payments are not supported; paying a bill always settles
    /// the whole `total_amount`.
    pub fn mark_paid(&mut self) {
        self.status = BillStatus::Paid;
        self.paid_amount = self.total_amount;
    }
}

/// Bank and UPI details shown in the invoice payment block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentDetails {
    /// Bank name.
    pub bank_name: Option<String>,
    /// Bank account number.
    pub account_number: Option<String>,
    /// IFSC / routing code.
    pub ifsc_code: Option<String>,
    /// UPI id or payment handle.
    pub upi_id: Option<String>,
}

impl PaymentDetails {
    /// True when at least one field is present, i.e. the invoice should
    /// carry a payment-details block.
    pub fn has_any(&self) -> bool {
        self.bank_name.is_some()
            || self.account_number.is_some()
            || self.ifsc_code.is_some()
            || self.upi_id.is_some()
    }
}

/// Render-time sidecar for one bill.
///
/// Holds everything the printable document needs that the bill row does
/// not carry: company identity, GST registration numbers, the GST
/// configuration and split, the original line items, and payment details.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillMetadata {
    /// Issuing company name.
    pub company_name: String,
    /// Issuing company address.
    pub company_address: String,
    /// Issuing company GST registration number.
    pub company_gstin: Option<String>,
    /// Client postal address.
    pub client_address: Option<String>,
    /// Client GST registration number.
    pub client_gstin: Option<String>,
    /// Whether this bill was raised with GST.
    pub gst_enabled: bool,
    /// The GST rate applied, as a percentage.
    pub gst_rate_percent: Decimal,
    /// Central GST half of the tax.
    pub cgst: Decimal,
    /// State GST half of the tax.
    pub sgst: Decimal,
    /// The ordered line items the bill was created from.
    pub line_items: Vec<BillLineItem>,
    /// Bank/UPI details for the payment block, if configured.
    pub payment: Option<PaymentDetails>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_test_bill() -> Bill {
        Bill {
            id: Uuid::nil(),
            bill_number: "INV-2026-001".to_string(),
            client_name: "Acme Constructions".to_string(),
            client_email: None,
            client_phone: None,
            description: "Structural steel supply".to_string(),
            amount: dec("2000"),
            tax_amount: dec("360"),
            total_amount: dec("2360"),
            bill_date: NaiveDate::from_ymd_opt(2026, 2, 1).unwrap(),
            due_date: None,
            status: BillStatus::Unpaid,
            paid_amount: Decimal::ZERO,
        }
    }

    #[test]
    fn test_balance_due_is_total_minus_paid() {
        let mut bill = create_test_bill();
        assert_eq!(bill.balance_due(), dec("2360"));

        bill.paid_amount = dec("360");
        assert_eq!(bill.balance_due(), dec("2000"));
    }

    #[test]
    fn test_mark_paid_settles_full_total() {
        let mut bill = create_test_bill();
        bill.mark_paid();

        assert_eq!(bill.status, BillStatus::Paid);
        assert_eq!(bill.paid_amount, dec("2360"));
        assert_eq!(bill.balance_due(), Decimal::ZERO);
    }

    #[test]
    fn test_status_serialization() {
        assert_eq!(
            serde_json::to_string(&BillStatus::Unpaid).unwrap(),
            "\"unpaid\""
        );
        assert_eq!(
            serde_json::to_string(&BillStatus::Cancelled).unwrap(),
            "\"cancelled\""
        );
    }

    #[test]
    fn test_payment_details_has_any() {
        assert!(!PaymentDetails::default().has_any());
        assert!(
            PaymentDetails {
                upi_id: Some("site@upi".to_string()),
                ..PaymentDetails::default()
            }
            .has_any()
        );
    }

    #[test]
    fn test_bill_serializes_persisted_field_names() {
        let json = serde_json::to_string(&create_test_bill()).unwrap();
        assert!(json.contains("\"bill_number\""));
        assert!(json.contains("\"tax_amount\""));
        assert!(json.contains("\"total_amount\""));
        assert!(json.contains("\"paid_amount\""));
        assert!(json.contains("\"bill_date\""));
    }

    #[test]
    fn test_metadata_round_trip() {
        let metadata = BillMetadata {
            company_name: "Ridgeline Infra".to_string(),
            company_address: "Plot 14, Industrial Estate".to_string(),
            company_gstin: Some("29ABCDE1234F1Z5".to_string()),
            client_address: None,
            client_gstin: None,
            gst_enabled: true,
            gst_rate_percent: dec("18"),
            cgst: dec("180"),
            sgst: dec("180"),
            line_items: vec![BillLineItem {
                description: "Earthworks".to_string(),
                amount: dec("2000"),
            }],
            payment: None,
        };
        let json = serde_json::to_string(&metadata).unwrap();
        let back: BillMetadata = serde_json::from_str(&json).unwrap();
        assert_eq!(metadata, back);
    }
}
