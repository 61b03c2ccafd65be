//! Printable invoice rendering.
//!
//! Produces a self-contained HTML document for one bill: company header,
//! bill-to block, enumerated line items, the GST breakdown when the bill
//! carries tax, totals with the amount spelled out in words, and the
//! payment details configured for the company. All data is supplied by
//! the caller; the renderer performs no lookups and has no side effects.

use std::fmt::Write as _;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::calculation::amount_to_words;
use crate::error::{EngineError, EngineResult};
use crate::models::{Bill, BillMetadata, BillStatus};

/// Formats a monetary value for display with two decimal places.
fn money(value: Decimal) -> String {
    format!("{:.2}", value.round_dp(2))
}

/// Renders the printable HTML document for a finalized bill.
///
/// # Errors
///
/// Returns [`EngineError::InvalidInput`] when a field the document cannot
/// do without is missing: a blank client or company name, no line items,
/// or a negative grand total. The source of truth for the amounts is the
/// bill row itself; the metadata supplies everything else.
pub fn render_invoice(bill: &Bill, metadata: &BillMetadata) -> EngineResult<String> {
    if bill.client_name.trim().is_empty() {
        return Err(EngineError::invalid_input(
            "client_name",
            "required for rendering",
        ));
    }
    if metadata.company_name.trim().is_empty() {
        return Err(EngineError::invalid_input(
            "company_name",
            "required for rendering",
        ));
    }
    if metadata.line_items.is_empty() {
        return Err(EngineError::invalid_input(
            "line_items",
            "a bill must have at least one priced item",
        ));
    }
    let words_amount = bill
        .total_amount
        .trunc()
        .to_u64()
        .ok_or_else(|| EngineError::invalid_input("total_amount", "must not be negative"))?;

    let is_gst = metadata.gst_enabled;
    let invoice_type = if is_gst {
        "TAX INVOICE (GST)"
    } else {
        "INVOICE (NON-GST)"
    };

    let gstin_line = match (&metadata.company_gstin, is_gst) {
        (Some(gstin), true) => format!(r#"<div class="gstin">GSTIN: {}</div>"#, gstin),
        _ => String::new(),
    };

    let mut bill_to = format!("<p><strong>{}</strong></p>", bill.client_name);
    if let Some(address) = &metadata.client_address {
        let _ = write!(bill_to, "<p>{}</p>", address);
    }
    if let Some(email) = &bill.client_email {
        let _ = write!(bill_to, "<p>Email: {}</p>", email);
    }
    if let Some(phone) = &bill.client_phone {
        let _ = write!(bill_to, "<p>Phone: {}</p>", phone);
    }
    if is_gst {
        if let Some(gstin) = &metadata.client_gstin {
            let _ = write!(bill_to, "<p><strong>GSTIN:</strong> {}</p>", gstin);
        }
    }

    let due_date_line = match &bill.due_date {
        Some(due) => format!(
            "<p><strong>Due Date:</strong> {}</p>",
            due.format("%d/%m/%Y")
        ),
        None => String::new(),
    };

    let status_color = if bill.status == BillStatus::Paid {
        "green"
    } else {
        "red"
    };
    let status_text = match bill.status {
        BillStatus::Unpaid => "UNPAID",
        BillStatus::Paid => "PAID",
        BillStatus::Cancelled => "CANCELLED",
    };

    let mut item_rows = String::new();
    for (index, item) in metadata.line_items.iter().enumerate() {
        let _ = write!(
            item_rows,
            "<tr><td>{}</td><td>{}</td><td style=\"text-align: right;\">₹{}</td></tr>",
            index + 1,
            item.description,
            money(item.amount)
        );
    }

    let half_rate = (metadata.gst_rate_percent / Decimal::TWO).normalize();
    let tax_summary = if is_gst {
        format!(
            r#"<div class="tax-summary">
      <table>
        <thead>
          <tr>
            <th>Taxable Amount</th>
            <th style="text-align: center;">CGST ({half_rate}%)</th>
            <th style="text-align: center;">SGST ({half_rate}%)</th>
            <th style="text-align: right;">Total Tax</th>
          </tr>
        </thead>
        <tbody>
          <tr>
            <td style="text-align: left;">₹{taxable}</td>
            <td>₹{cgst}</td>
            <td>₹{sgst}</td>
            <td>₹{tax}</td>
          </tr>
        </tbody>
      </table>
    </div>"#,
            half_rate = half_rate,
            taxable = money(bill.amount),
            cgst = money(metadata.cgst),
            sgst = money(metadata.sgst),
            tax = money(bill.tax_amount),
        )
    } else {
        String::new()
    };

    let gst_total_row = if is_gst {
        format!(
            "<tr><td>GST ({}%):</td><td>₹{}</td></tr>",
            metadata.gst_rate_percent.normalize(),
            money(bill.tax_amount)
        )
    } else {
        String::new()
    };

    let paid_rows = if bill.paid_amount > Decimal::ZERO {
        format!(
            r#"<tr><td>Paid:</td><td style="color: green;">₹{}</td></tr>
        <tr class="balance-row"><td>Balance Due:</td><td>₹{}</td></tr>"#,
            money(bill.paid_amount),
            money(bill.balance_due())
        )
    } else {
        String::new()
    };

    let payment_block = match &metadata.payment {
        Some(payment) if payment.has_any() => {
            let mut lines = String::new();
            if let Some(bank) = &payment.bank_name {
                let _ = write!(lines, "<p><strong>Bank:</strong> {}</p>", bank);
            }
            if let Some(account) = &payment.account_number {
                let _ = write!(lines, "<p><strong>A/C No:</strong> {}</p>", account);
            }
            if let Some(ifsc) = &payment.ifsc_code {
                let _ = write!(lines, "<p><strong>IFSC:</strong> {}</p>", ifsc);
            }
            if let Some(upi) = &payment.upi_id {
                let _ = write!(lines, "<p><strong>UPI:</strong> {}</p>", upi);
            }
            format!(
                r#"<div class="payment-details">
          <h4>Payment Details:</h4>
          {}
        </div>"#,
                lines
            )
        }
        _ => String::new(),
    };

    let due_by_line = match &bill.due_date {
        Some(due) => format!("<p>Due by: {}</p>", due.format("%d/%m/%Y")),
        None => String::new(),
    };

    let gst_terms = if is_gst {
        "<p>3. This is a computer-generated GST invoice and does not require physical signature.</p>"
    } else {
        ""
    };

    Ok(format!(
        r#"<!DOCTYPE html>
<html>
  <head>
    <title>Bill {bill_number}</title>
    <style>
      * {{ margin: 0; padding: 0; box-sizing: border-box; }}
      body {{ font-family: 'Arial', sans-serif; padding: 30px; max-width: 210mm; margin: 0 auto; background: white; }}
      .invoice-container {{ border: 2px solid #333; padding: 20px; }}
      .company-header {{ text-align: center; border-bottom: 3px solid #333; padding-bottom: 15px; margin-bottom: 20px; }}
      .company-header h1 {{ font-size: 28px; color: #1a1a1a; margin-bottom: 5px; letter-spacing: 1px; }}
      .company-header .company-details {{ font-size: 11px; line-height: 1.6; color: #555; margin-top: 8px; }}
      .company-header .gstin {{ font-weight: bold; color: #000; margin-top: 5px; }}
      .invoice-type {{ text-align: center; background: #f5f5f5; padding: 8px; margin: 15px 0; font-weight: bold; font-size: 16px; border: 1px solid #ddd; }}
      .bill-info {{ display: flex; justify-content: space-between; margin: 20px 0; }}
      .bill-info-box {{ width: 48%; border: 1px solid #ddd; padding: 12px; }}
      .bill-info-box h3 {{ font-size: 12px; color: #666; text-transform: uppercase; margin-bottom: 10px; border-bottom: 1px solid #eee; padding-bottom: 5px; }}
      .bill-info-box p {{ font-size: 13px; margin: 5px 0; line-height: 1.5; }}
      .items-table {{ width: 100%; border-collapse: collapse; margin: 20px 0; border: 1px solid #333; }}
      .items-table th {{ background: #333; color: white; padding: 10px; text-align: left; font-size: 12px; }}
      .items-table td {{ padding: 10px; border-bottom: 1px solid #ddd; font-size: 13px; }}
      .tax-summary {{ margin: 20px 0; border: 1px solid #ddd; }}
      .tax-summary table {{ width: 100%; border-collapse: collapse; }}
      .tax-summary th {{ background: #f5f5f5; padding: 8px; text-align: left; font-size: 11px; border: 1px solid #ddd; }}
      .tax-summary td {{ padding: 8px; font-size: 12px; border: 1px solid #ddd; text-align: right; }}
      .totals {{ width: 40%; margin-left: auto; border: 1px solid #333; margin-top: 20px; }}
      .totals table {{ width: 100%; border-collapse: collapse; }}
      .totals td {{ padding: 10px; font-size: 13px; border-bottom: 1px solid #ddd; }}
      .totals td:last-child {{ text-align: right; font-weight: bold; }}
      .total-row {{ background: #333; color: white; font-weight: bold; font-size: 16px; }}
      .balance-row {{ background: #fff3cd; }}
      .amount-words {{ margin: 20px 0; padding: 12px; background: #f9f9f9; border: 1px solid #ddd; font-style: italic; }}
      .payment-details {{ margin: 20px 0; padding: 12px; border: 1px solid #ddd; font-size: 12px; }}
      .payment-details h4 {{ font-size: 13px; margin-bottom: 8px; }}
      .footer {{ margin-top: 40px; border-top: 2px solid #333; padding-top: 20px; }}
      .footer-content {{ display: flex; justify-content: space-between; }}
      .footer-section {{ width: 48%; font-size: 12px; }}
      .footer h4 {{ font-size: 13px; margin-bottom: 8px; }}
      .signature-box {{ border-top: 1px solid #333; margin-top: 40px; padding-top: 10px; text-align: center; font-size: 12px; }}
      .terms {{ margin-top: 20px; font-size: 11px; color: #666; line-height: 1.6; }}
      .terms h4 {{ font-size: 12px; margin-bottom: 5px; color: #000; }}
      @media print {{ body {{ padding: 0; }} .invoice-container {{ border: none; }} }}
    </style>
  </head>
  <body>
    <div class="invoice-container">
      <div class="company-header">
        <h1>{company_name}</h1>
        <div class="company-details">{company_address}</div>
        {gstin_line}
      </div>

      <div class="invoice-type">{invoice_type}</div>

      <div class="bill-info">
        <div class="bill-info-box">
          <h3>Bill To:</h3>
          {bill_to}
        </div>
        <div class="bill-info-box">
          <h3>Invoice Details:</h3>
          <p><strong>Invoice No:</strong> {bill_number}</p>
          <p><strong>Date:</strong> {bill_date}</p>
          {due_date_line}
          <p><strong>Status:</strong> <span style="color: {status_color};">{status_text}</span></p>
        </div>
      </div>

      <table class="items-table">
        <thead>
          <tr>
            <th style="width: 60px;">S.No</th>
            <th>Description of Services/Goods</th>
            <th style="width: 120px; text-align: right;">Amount (₹)</th>
          </tr>
        </thead>
        <tbody>
          {item_rows}
        </tbody>
      </table>

      {tax_summary}

      <div class="totals">
        <table>
          <tr><td>Subtotal:</td><td>₹{subtotal}</td></tr>
          {gst_total_row}
          <tr class="total-row"><td>TOTAL AMOUNT:</td><td>₹{total}</td></tr>
          {paid_rows}
        </table>
      </div>

      <div class="amount-words">
        <strong>Amount in Words:</strong> {amount_words} Rupees Only
      </div>

      {payment_block}

      <div class="footer">
        <div class="footer-content">
          <div class="footer-section">
            <h4>Payment Terms:</h4>
            <p>Please make payment within due date.</p>
            {due_by_line}
          </div>
          <div class="footer-section" style="text-align: right;">
            <h4>For {company_name}</h4>
            <div class="signature-box">Authorized Signatory</div>
          </div>
        </div>

        <div class="terms">
          <h4>Terms &amp; Conditions:</h4>
          <p>1. Payment is due within the specified due date. Late payments may incur additional charges.</p>
          <p>2. All disputes subject to local jurisdiction only.</p>
          {gst_terms}
        </div>
      </div>
    </div>
  </body>
</html>
"#,
        bill_number = bill.bill_number,
        company_name = metadata.company_name,
        company_address = metadata.company_address,
        gstin_line = gstin_line,
        invoice_type = invoice_type,
        bill_to = bill_to,
        bill_date = bill.bill_date.format("%d/%m/%Y"),
        due_date_line = due_date_line,
        status_color = status_color,
        status_text = status_text,
        item_rows = item_rows,
        tax_summary = tax_summary,
        subtotal = money(bill.amount),
        gst_total_row = gst_total_row,
        total = money(bill.total_amount),
        paid_rows = paid_rows,
        amount_words = amount_to_words(words_amount),
        payment_block = payment_block,
        due_by_line = due_by_line,
        gst_terms = gst_terms,
    ))
}
