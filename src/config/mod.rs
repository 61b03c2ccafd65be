//! Billing profile configuration.
//!
//! This module loads the company's billing profile from YAML files:
//! who issues the bills, the GST defaults applied when a request does
//! not specify its own, and the bank/UPI details printed on invoices.
//!
//! # Example
//!
//! ```no_run
//! use siteledger::config::ConfigLoader;
//!
//! let profile = ConfigLoader::load("./config/billing").unwrap();
//! println!("Billing as: {}", profile.company().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{CompanyProfile, PaymentProfile, TaxDefaults};
