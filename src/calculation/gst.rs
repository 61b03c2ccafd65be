//! GST totals calculation.
//!
//! Derives the subtotal, the CGST/SGST split, and the grand total from a
//! bill's line items. The split is always even, per India's dual-GST
//! convention for intra-state transactions; there is no asymmetric split.
//!
//! The originating form re-invokes this on every keystroke, so the
//! computation carries no state: identical inputs produce identical
//! outputs.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::BillLineItem;

/// The GST breakdown for one bill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxResult {
    /// Sum of all line item amounts.
    pub subtotal: Decimal,
    /// Central GST half of the tax.
    pub cgst: Decimal,
    /// State GST half of the tax.
    pub sgst: Decimal,
    /// `cgst + sgst`.
    pub tax_total: Decimal,
    /// `subtotal + tax_total`.
    pub total_amount: Decimal,
}

/// Computes GST totals for a set of bill line items.
///
/// # Arguments
///
/// * `line_items` - The priced lines; must be non-empty
/// * `gst_enabled` - Whether GST applies to this bill
/// * `gst_rate_percent` - The GST rate as a percentage; only used when
///   GST is enabled, but always validated
///
/// # Errors
///
/// Returns [`EngineError::InvalidInput`] for an empty item list, a blank
/// description, a negative amount, or a negative rate. Bad input fails
/// loudly rather than being coerced to zero.
///
/// # Example
///
/// ```
/// use rust_decimal::Decimal;
/// use siteledger::calculation::compute_tax;
/// use siteledger::models::BillLineItem;
///
/// let items = vec![
///     BillLineItem { description: "Earthworks".into(), amount: Decimal::from(500) },
///     BillLineItem { description: "Steel supply".into(), amount: Decimal::from(1500) },
/// ];
///
/// let result = compute_tax(&items, true, Decimal::from(18)).unwrap();
/// assert_eq!(result.subtotal, Decimal::from(2000));
/// assert_eq!(result.cgst, Decimal::from(180));
/// assert_eq!(result.sgst, Decimal::from(180));
/// assert_eq!(result.total_amount, Decimal::from(2360));
/// ```
pub fn compute_tax(
    line_items: &[BillLineItem],
    gst_enabled: bool,
    gst_rate_percent: Decimal,
) -> EngineResult<TaxResult> {
    if line_items.is_empty() {
        return Err(EngineError::invalid_input(
            "line_items",
            "a bill must have at least one priced item",
        ));
    }
    if gst_rate_percent.is_sign_negative() && !gst_rate_percent.is_zero() {
        return Err(EngineError::invalid_input(
            "gst_rate_percent",
            "must not be negative",
        ));
    }

    let mut subtotal = Decimal::ZERO;
    for (index, item) in line_items.iter().enumerate() {
        if item.description.trim().is_empty() {
            return Err(EngineError::invalid_input(
                "line_items",
                format!("item {} has an empty description", index + 1),
            ));
        }
        if item.amount.is_sign_negative() && !item.amount.is_zero() {
            return Err(EngineError::invalid_input(
                "line_items",
                format!("item {} has a negative amount", index + 1),
            ));
        }
        subtotal += item.amount;
    }

    let tax_total = if gst_enabled {
        subtotal * gst_rate_percent / Decimal::ONE_HUNDRED
    } else {
        Decimal::ZERO
    };
    let cgst = tax_total / Decimal::TWO;
    let sgst = cgst;

    Ok(TaxResult {
        subtotal,
        cgst,
        sgst,
        tax_total,
        total_amount: subtotal + tax_total,
    })
}

/// Joins the ordered line-item descriptions into the bill's single
/// `description` column value.
pub fn join_descriptions(line_items: &[BillLineItem]) -> String {
    line_items
        .iter()
        .map(|item| item.description.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
