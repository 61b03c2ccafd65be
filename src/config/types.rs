//! Billing profile types.
//!
//! Strongly-typed structures deserialized from the YAML profile files.

use rust_decimal::Decimal;
use serde::Deserialize;

/// The company identity printed on invoices.
#[derive(Debug, Clone, Deserialize)]
pub struct CompanyProfile {
    /// Legal company name.
    pub name: String,
    /// Full postal address.
    pub address: String,
    /// GST registration number, if the company is registered.
    pub gstin: Option<String>,
    /// Bank/UPI details for the invoice payment block.
    pub payment: Option<PaymentProfile>,
}

/// Bank and UPI details from the billing profile.
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentProfile {
    /// Bank name.
    pub bank_name: Option<String>,
    /// Bank account number.
    pub account_number: Option<String>,
    /// IFSC / routing code.
    pub ifsc_code: Option<String>,
    /// UPI id or payment handle.
    pub upi_id: Option<String>,
}

/// GST defaults applied when a bill request does not carry its own.
#[derive(Debug, Clone, Deserialize)]
pub struct TaxDefaults {
    /// Whether new bills default to GST.
    pub gst_enabled: bool,
    /// The GST rate applied when a request enables GST without a rate.
    pub default_rate_percent: Decimal,
}
