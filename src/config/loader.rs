//! Billing profile loading.
//!
//! Reads the YAML profile files from a directory and exposes the typed
//! company identity and tax defaults.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::PaymentDetails;

use super::types::{CompanyProfile, TaxDefaults};

/// Loads and provides access to the billing profile.
///
/// # Directory Structure
///
/// ```text
/// config/billing/
/// ├── company.yaml   # company identity + payment details
/// └── tax.yaml       # GST defaults
/// ```
///
/// # Example
///
/// ```no_run
/// use siteledger::config::ConfigLoader;
///
/// let profile = ConfigLoader::load("./config/billing").unwrap();
/// assert!(profile.tax().default_rate_percent >= rust_decimal::Decimal::ZERO);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    company: CompanyProfile,
    tax: TaxDefaults,
}

impl ConfigLoader {
    /// Loads the billing profile from the specified directory.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ConfigNotFound`] when a required file is
    /// missing and [`EngineError::ConfigParseError`] when a file holds
    /// invalid YAML.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let company = Self::load_yaml::<CompanyProfile>(&path.join("company.yaml"))?;
        let tax = Self::load_yaml::<TaxDefaults>(&path.join("tax.yaml"))?;

        Ok(Self { company, tax })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the configured company identity.
    pub fn company(&self) -> &CompanyProfile {
        &self.company
    }

    /// Returns the configured GST defaults.
    pub fn tax(&self) -> &TaxDefaults {
        &self.tax
    }

    /// Returns the configured payment details in their invoice-facing
    /// shape, if any are set.
    pub fn payment_details(&self) -> Option<PaymentDetails> {
        self.company.payment.as_ref().map(|p| PaymentDetails {
            bank_name: p.bank_name.clone(),
            account_number: p.account_number.clone(),
            ifsc_code: p.ifsc_code.clone(),
            upi_id: p.upi_id.clone(),
        })
    }
}
