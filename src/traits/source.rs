use std::sync::Arc;

use crate::types::{InvoiceHeader, InvoiceId, LineItem, SourceError};

/// Read access to persisted invoices.
///
/// `fetch_line_items` returns an empty vector, not an error, for an invoice without items.
/// Items must come back in the order the store keeps them; that order is the print order.
pub trait InvoiceSource {
    fn fetch_invoice(&self, id: &InvoiceId) -> Result<InvoiceHeader, SourceError>;
    fn fetch_line_items(&self, id: &InvoiceId) -> Result<Vec<LineItem>, SourceError>;
}

impl<S: InvoiceSource + ?Sized> InvoiceSource for &S {
    fn fetch_invoice(&self, id: &InvoiceId) -> Result<InvoiceHeader, SourceError> {
        (**self).fetch_invoice(id)
    }

    fn fetch_line_items(&self, id: &InvoiceId) -> Result<Vec<LineItem>, SourceError> {
        (**self).fetch_line_items(id)
    }
}

impl<S: InvoiceSource + ?Sized> InvoiceSource for Arc<S> {
    fn fetch_invoice(&self, id: &InvoiceId) -> Result<InvoiceHeader, SourceError> {
        (**self).fetch_invoice(id)
    }

    fn fetch_line_items(&self, id: &InvoiceId) -> Result<Vec<LineItem>, SourceError> {
        (**self).fetch_line_items(id)
    }
}
