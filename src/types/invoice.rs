use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Invoice identifier as used by the data source.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InvoiceId(pub u64);

impl core::fmt::Display for InvoiceId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<u64> for InvoiceId {
    fn from(id: u64) -> Self {
        InvoiceId(id)
    }
}

/// Header of one invoice: parties, amounts and regulatory status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceHeader {
    pub id: InvoiceId,
    /// printed document number, e.g. `001-001-000000123`
    pub number: String,
    pub issued_at: NaiveDateTime,
    pub access_key: String,
    pub client_name: String,
    pub client_tax_id: String,
    #[serde(default)]
    pub client_address: Option<String>,
    #[serde(default)]
    pub client_phone: Option<String>,
    pub subtotal: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
    pub status: String,
    #[serde(default)]
    pub authorization_number: Option<String>,
    #[serde(default)]
    pub authorized_at: Option<NaiveDateTime>,
    pub environment: String,
}

impl InvoiceHeader {
    /// `total == subtotal + tax`; the renderer prints the stored values without checking this
    pub fn is_balanced(&self) -> bool {
        self.subtotal + self.tax == self.total
    }

    pub fn client_address(&self) -> Option<&str> {
        non_empty(&self.client_address)
    }

    pub fn client_phone(&self) -> Option<&str> {
        non_empty(&self.client_phone)
    }

    pub fn authorization_number(&self) -> Option<&str> {
        non_empty(&self.authorization_number)
    }
}

/// One billed product or service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub code: String,
    pub description: String,
    pub quantity: Decimal,
    pub unit_price: Decimal,
    /// absolute amount, not a percentage
    #[serde(default)]
    pub discount: Decimal,
}

impl LineItem {
    /// `quantity × unit price − discount`, `None` when the result does not fit in a `Decimal`
    pub fn line_total(&self) -> Option<Decimal> {
        self.quantity
            .checked_mul(self.unit_price)?
            .checked_sub(self.discount)
    }
}

/// Finished document bytes, as emitted by the rendering backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDocument(Vec<u8>);

impl RenderedDocument {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<u8>> for RenderedDocument {
    fn from(bytes: Vec<u8>) -> Self {
        RenderedDocument(bytes)
    }
}

impl AsRef<[u8]> for RenderedDocument {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|value| !value.is_empty())
}
