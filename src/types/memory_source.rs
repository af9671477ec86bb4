use std::collections::HashMap;

use serde::Deserialize;

use crate::{
    traits::InvoiceSource,
    types::{ InvoiceHeader, InvoiceId, LineItem, Result, SourceError },
};

/// Deserialized from a fixture file: `{ "invoices": [ { ...header fields, "items": [...] } ] }`
#[derive(Debug,Deserialize)]
struct Fixture {
    invoices: Vec<FixtureInvoice>,
}

#[derive(Debug,Deserialize)]
struct FixtureInvoice {
   #[serde(flatten)]
    header: InvoiceHeader,
   #[serde(default)]
    items: Vec<LineItem>,
}

/// `InvoiceSource` backed by hash maps. Items keep their insertion order.
#[derive(Debug,Clone,Default)]
pub struct MemorySource {
    invoices: HashMap<InvoiceId, InvoiceHeader>,
    items: HashMap<InvoiceId, Vec<LineItem>>,
}

impl MemorySource {
    pub fn new() -> Self {
        MemorySource::default()
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let fixture: Fixture = serde_json::from_str(json)?;
        let mut source = MemorySource::new();

        for FixtureInvoice { header, items } in fixture.invoices {
            source.insert(header, items);
        }

        Ok(source)
    }

    /// stores a header and its items, replacing anything stored under the same id
    pub fn insert(&mut self, header: InvoiceHeader, items: Vec<LineItem>) {
        self.items.insert(header.id, items);
        self.invoices.insert(header.id, header);
    }

    /// builder form of `insert`
    pub fn with_invoice(mut self, header: InvoiceHeader, items: Vec<LineItem>) -> Self {
        self.insert(header, items);
        self
    }

    pub fn len(&self) -> usize {
        self.invoices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.invoices.is_empty()
    }
}

impl InvoiceSource for MemorySource {
    fn fetch_invoice(&self, id: &InvoiceId) -> std::result::Result<InvoiceHeader, SourceError> {
        self.invoices.get(id).cloned().ok_or(SourceError::NotFound)
    }

    fn fetch_line_items(&self, id: &InvoiceId) -> std::result::Result<Vec<LineItem>, SourceError> {
        Ok(self.items.get(id).cloned().unwrap_or_default())
    }
}
