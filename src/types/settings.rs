//! # Renderer configuration
//! Deserialized from JSON; every field is optional and falls back to its default.
//! ```json
//! {
//!   "issuer": {
//!     "company_name": "Comercial Andina S.A.",
//!     "tax_id": "1790012345001",
//!     "address": "Av. Amazonas N34-12, Quito",
//!     "phone": "(02) 245-6789",
//!     "vat_rate_label": "IVA (15%)"
//!   },
//!   "reconcile_totals": true,
//!   "tolerance": "0.01"
//! }
//! ```
use std::path::Path;

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::types::Result;

/// Identity of the company issuing the invoices, printed in the masthead, plus the caption
/// of the tax row in the summary block.
#[derive(Debug,Clone,Deserialize,PartialEq)]
#[serde(default)]
pub struct Issuer {
    pub company_name: String,
    pub tax_id: String,
    pub address: String,
    pub phone: String,
    pub vat_rate_label: String,
}

impl Default for Issuer {
    fn default() -> Self {
        Issuer {
            company_name: "MI EMPRESA S.A.".into(),
            tax_id: "0999999999001".into(),
            address: "Av. Principal 123 y Secundaria".into(),
            phone: "(04) 123-4567".into(),
            vat_rate_label: "IVA (12%)".into(),
        }
    }
}

#[derive(Debug,Clone,Deserialize,PartialEq)]
#[serde(default)]
pub struct Settings {
    pub issuer: Issuer,
    /// fail a detailed render when the line items don't add up to the stored subtotal
    pub reconcile_totals: bool,
    /// largest accepted difference for `reconcile_totals`
    pub tolerance: Decimal,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            issuer: Issuer::default(),
            reconcile_totals: false,
            tolerance: Decimal::new(1, 2),
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Settings::from_json(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Error;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let settings = Settings::from_json(r#"{ "issuer": { "company_name": "Ferretería Sur" } }"#).unwrap();

        assert_eq!(settings.issuer.company_name, "Ferretería Sur");
        assert_eq!(settings.issuer.vat_rate_label, "IVA (12%)");
        assert!(!settings.reconcile_totals);
        assert_eq!(settings.tolerance, Decimal::new(1, 2));
    }

    #[test]
    fn tolerance_accepts_strings_and_numbers() {
        let settings = Settings::from_json(r#"{ "reconcile_totals": true, "tolerance": "0.05" }"#).unwrap();
        assert_eq!(settings.tolerance, Decimal::new(5, 2));

        let settings = Settings::from_json(r#"{ "tolerance": 1 }"#).unwrap();
        assert_eq!(settings.tolerance, Decimal::ONE);
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        assert!(matches!(Settings::from_json("{ issuer"), Err(Error::Config(_))));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        assert!(matches!(Settings::from_path("/nonexistent/factura.json"), Err(Error::Io(_))));
    }
}
